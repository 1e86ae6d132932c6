use core::fmt::{self, Debug, Display};

use constants::{PAGE_SHIFT, PAGE_SIZE};

use crate::PageFrameNum;

#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PhysicalAddress(usize);

impl PhysicalAddress {
    pub const fn from_usize(value: usize) -> Self {
        Self(value)
    }

    pub const fn as_usize(&self) -> usize {
        self.0
    }

    pub const fn add_by(&self, offset: usize) -> Self {
        Self(self.0 + offset)
    }

    pub const fn is_page_aligned(&self) -> bool {
        self.0 % PAGE_SIZE == 0
    }

    /// The page frame containing this address.
    pub const fn to_floor_page_frame(&self) -> PageFrameNum {
        PageFrameNum::from_usize(self.0 >> PAGE_SHIFT)
    }
}

impl Display for PhysicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl Debug for PhysicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhysicalAddress({:#x})", self.0)
    }
}

#[cfg(test)]
mod physical_address_tests {
    use super::*;

    #[test]
    fn test_creation() {
        let addr = PhysicalAddress::from_usize(0x8000_0000);
        assert_eq!(addr.as_usize(), 0x8000_0000);
    }

    #[test]
    fn test_add_by() {
        let addr = PhysicalAddress::from_usize(0x1000);
        assert_eq!(addr.add_by(0x234).as_usize(), 0x1234);
    }

    #[test]
    fn test_to_floor_page_frame() {
        let aligned = PhysicalAddress::from_usize(0x8000_1000);
        assert_eq!(aligned.to_floor_page_frame().as_usize(), 0x80001);

        let unaligned = PhysicalAddress::from_usize(0x8000_1fff);
        assert_eq!(unaligned.to_floor_page_frame().as_usize(), 0x80001);
    }
}
