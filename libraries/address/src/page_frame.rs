use core::fmt::{self, Debug, Display};

use constants::PAGE_SHIFT;

use crate::PhysicalAddress;

/// An index into physical memory in units of the hardware page size.
///
/// This is the quantity a `mmap` caller supplies through `vm_pgoff`: a raw
/// physical page index, not a byte offset into a file.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageFrameNum(usize);

impl PageFrameNum {
    pub const fn from_usize(value: usize) -> Self {
        Self(value)
    }

    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// Physical address of the first byte of this frame.
    pub const fn start_addr(&self) -> PhysicalAddress {
        PhysicalAddress::from_usize(self.0 << PAGE_SHIFT)
    }

    pub const fn add_by(&self, frames: usize) -> Self {
        Self(self.0 + frames)
    }
}

impl Display for PageFrameNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl Debug for PageFrameNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PageFrameNum({:#x})", self.0)
    }
}
