use core::fmt::{self, Debug, Display};

use constants::PAGE_SIZE;

#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct VirtualAddress(usize);

impl VirtualAddress {
    pub const fn from_usize(value: usize) -> Self {
        Self(value)
    }

    pub const fn as_usize(&self) -> usize {
        self.0
    }

    pub const fn null() -> Self {
        Self(0)
    }

    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }

    pub const fn add_by(&self, offset: usize) -> Self {
        Self(self.0 + offset)
    }

    /// Byte distance from `other` to `self`. Panics in debug builds if
    /// `other` is above `self`.
    pub const fn diff(&self, other: Self) -> usize {
        debug_assert!(other.0 <= self.0);
        self.0 - other.0
    }

    pub const fn is_page_aligned(&self) -> bool {
        self.0 % PAGE_SIZE == 0
    }
}

impl Display for VirtualAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl Debug for VirtualAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VirtualAddress({:#x})", self.0)
    }
}

#[cfg(test)]
mod virtual_address_tests {
    use alloc::format;

    use super::*;

    #[test]
    fn test_creation() {
        let addr = VirtualAddress::from_usize(0x1000);
        assert_eq!(addr.as_usize(), 0x1000);
    }

    #[test]
    fn test_null() {
        assert!(VirtualAddress::null().is_null());
        assert!(!VirtualAddress::from_usize(0x1000).is_null());
    }

    #[test]
    fn test_add_by() {
        let addr = VirtualAddress::from_usize(0x1000);
        assert_eq!(addr.add_by(0x500).as_usize(), 0x1500);
    }

    #[test]
    fn test_diff() {
        let lo = VirtualAddress::from_usize(0x1000);
        let hi = VirtualAddress::from_usize(0x3000);
        assert_eq!(hi.diff(lo), 0x2000);
    }

    #[test]
    fn test_page_alignment() {
        assert!(VirtualAddress::from_usize(0x4000).is_page_aligned());
        assert!(!VirtualAddress::from_usize(0x4001).is_page_aligned());
    }

    #[test]
    fn test_display_is_hex() {
        let addr = VirtualAddress::from_usize(0xdead_b000);
        assert_eq!(format!("{}", addr), "0xdeadb000");
    }
}
