use core::fmt::{self, Display};

/// A kernel `dev_t` equivalent: the (major, minor) pair naming one device
/// node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DeviceNumber {
    pub major: u32,
    pub minor: u32,
}

impl DeviceNumber {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl Display for DeviceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.major, self.minor)
    }
}

/// A reserved range of device numbers: `count` minors under one major,
/// starting at `base_minor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceRegion {
    pub major: u32,
    pub base_minor: u32,
    pub count: u32,
}

impl DeviceRegion {
    pub const fn new(major: u32, base_minor: u32, count: u32) -> Self {
        Self {
            major,
            base_minor,
            count,
        }
    }

    /// The first device number of the region.
    pub const fn base(&self) -> DeviceNumber {
        DeviceNumber::new(self.major, self.base_minor)
    }

    pub const fn contains(&self, devno: DeviceNumber) -> bool {
        self.major == devno.major
            && devno.minor >= self.base_minor
            && devno.minor < self.base_minor + self.count
    }
}

/// Opaque token identifying a live cdev registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CdevHandle(u64);

impl CdevHandle {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn as_raw(&self) -> u64 {
        self.0
    }
}
