use std::vec::Vec;

use address::{PageFrameNum, VirtualAddress};
use hermit_sync::SpinMutex;
use mmap_abstractions::{IPageMapper, PagingError, PagingResult, VmProt, VmaDescriptor};

/// One mapping established through the fake page mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedMapping {
    pub vaddr: VirtualAddress,
    pub pfn: PageFrameNum,
    pub len: usize,
    pub prot: VmProt,
}

struct MapperState {
    mappings: Vec<RecordedMapping>,
    fail_next: Option<PagingError>,
}

/// Fake page-table machinery: records each established mapping instead of
/// touching page tables. An injected failure records nothing, so the
/// no-partial-mapping contract is observable from tests.
pub struct TestPageMapper {
    state: SpinMutex<MapperState>,
}

impl Default for TestPageMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPageMapper {
    pub fn new() -> Self {
        Self {
            state: SpinMutex::new(MapperState {
                mappings: Vec::new(),
                fail_next: None,
            }),
        }
    }

    /// Makes the next `remap_pfn_range` call fail with `err`.
    pub fn fail_next(&self, err: PagingError) {
        self.state.lock().fail_next = Some(err);
    }

    pub fn mappings(&self) -> Vec<RecordedMapping> {
        self.state.lock().mappings.clone()
    }
}

impl IPageMapper for TestPageMapper {
    fn remap_pfn_range(
        &self,
        _vma: &VmaDescriptor,
        vaddr: VirtualAddress,
        pfn: PageFrameNum,
        len: usize,
        prot: VmProt,
    ) -> PagingResult<()> {
        let mut state = self.state.lock();

        if let Some(err) = state.fail_next.take() {
            return Err(err);
        }

        state.mappings.push(RecordedMapping {
            vaddr,
            pfn,
            len,
            prot,
        });

        Ok(())
    }
}
