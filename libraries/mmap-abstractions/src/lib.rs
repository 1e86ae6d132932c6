#![cfg_attr(not(feature = "std"), no_std)]

use address::{PageFrameNum, VirtualAddress};
use alloc::sync::Arc;
use downcast_rs::{impl_downcast, Downcast};

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod prot;

pub use prot::VmProt;

/// A contiguous region of a process's virtual address space, as handed to a
/// driver's `mmap` callback: the requested address range, the page-frame
/// offset, and the requested page protection.
pub struct VmaDescriptor {
    pub vm_start: VirtualAddress,
    pub vm_end: VirtualAddress,
    pub vm_pgoff: PageFrameNum,
    pub vm_page_prot: VmProt,
    pub vm_ops: Option<Arc<dyn IVmOperations>>,
}

impl VmaDescriptor {
    pub fn new(
        vm_start: VirtualAddress,
        vm_end: VirtualAddress,
        vm_pgoff: PageFrameNum,
        vm_page_prot: VmProt,
    ) -> Self {
        Self {
            vm_start,
            vm_end,
            vm_pgoff,
            vm_page_prot,
            vm_ops: None,
        }
    }

    pub fn len(&self) -> usize {
        self.vm_end.diff(self.vm_start)
    }

    pub fn is_empty(&self) -> bool {
        self.vm_start == self.vm_end
    }
}

/// Lifecycle callbacks attached to an established mapping.
pub trait IVmOperations: Send + Sync {
    fn open(&self, vma: &VmaDescriptor);

    fn close(&self, vma: &VmaDescriptor);
}

/// The error type for page-table operation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingError {
    /// The address is not aligned to the page size.
    NotAligned,
    /// The mapping is not present.
    NotMapped,
    /// The mapping is already present.
    AlreadyMapped,
    /// No memory left for page-table construction.
    OutOfMemory,
}

pub type PagingResult<TValue> = Result<TValue, PagingError>;

/// The kernel's page-table-construction capability.
pub trait IPageMapper: Downcast + Send + Sync {
    /// Builds a linear mapping of `len` bytes from `vaddr` to the physical
    /// range starting at `pfn`, with protection `prot`.
    ///
    /// Atomic on failure: implementations must leave no partial mapping
    /// observable when returning an error.
    fn remap_pfn_range(
        &self,
        vma: &VmaDescriptor,
        vaddr: VirtualAddress,
        pfn: PageFrameNum,
        len: usize,
        prot: VmProt,
    ) -> PagingResult<()>;
}

impl_downcast!(IPageMapper);
