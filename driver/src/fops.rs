use alloc::sync::Arc;

use chrdev_abstractions::{IFileOperations, Inode, OpenFile, UserBuffer};
use constants::ErrNo;
use log::{debug, info};
use mmap_abstractions::{IPageMapper, IVmOperations, VmaDescriptor};

use crate::device::DemoMmapDevice;

/// The device's operations table. Holds the device record it serves and the
/// page-table capability `mmap` delegates to.
pub struct DemoMmapFops {
    device: Arc<DemoMmapDevice>,
    mapper: Arc<dyn IPageMapper>,
}

impl DemoMmapFops {
    pub fn new(device: Arc<DemoMmapDevice>, mapper: Arc<dyn IPageMapper>) -> Self {
        Self { device, mapper }
    }
}

impl IFileOperations for DemoMmapFops {
    fn open(&self, _inode: &Inode, file: &mut OpenFile) -> Result<(), ErrNo> {
        debug!("demo_mmap: open");

        file.set_private_data(self.device.clone());

        Ok(())
    }

    // Stub: no data is copied, the whole request is reported as done.
    fn read(&self, _file: &OpenFile, buf: UserBuffer, _offset: &mut u64) -> Result<usize, ErrNo> {
        debug!("demo_mmap: read");

        Ok(buf.len)
    }

    fn write(&self, _file: &OpenFile, buf: UserBuffer, _offset: &mut u64) -> Result<usize, ErrNo> {
        debug!("demo_mmap: write");

        Ok(buf.len)
    }

    fn mmap(&self, _file: &OpenFile, vma: &mut VmaDescriptor) -> Result<(), ErrNo> {
        debug!("demo_mmap: mmap");

        let start = vma.vm_start;
        let pgoff = vma.vm_pgoff;
        let len = vma.len();
        let prot = vma.vm_page_prot;

        // Build page tables covering the requested range. The page-frame
        // offset comes straight from the caller, unvalidated.
        self.mapper
            .remap_pfn_range(vma, start, pgoff, len, prot)
            .map_err(|_| ErrNo::ResourceTemporarilyUnavailable)?;

        info!("demo_mmap: vma virt {}, phys {}", start, pgoff.start_addr());

        let ops: Arc<dyn IVmOperations> = Arc::new(DemoMmapVmOps);
        ops.open(vma);
        vma.vm_ops = Some(ops);

        Ok(())
    }

    fn release(&self, _inode: &Inode, _file: &OpenFile) -> Result<(), ErrNo> {
        debug!("demo_mmap: release");

        Ok(())
    }
}

/// VMA lifecycle callbacks, observability only.
pub struct DemoMmapVmOps;

impl IVmOperations for DemoMmapVmOps {
    fn open(&self, _vma: &VmaDescriptor) {
        debug!("demo_mmap: vma_open");
    }

    fn close(&self, _vma: &VmaDescriptor) {
        debug!("demo_mmap: vma_close");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use address::{PageFrameNum, VirtualAddress};
    use constants::PAGE_SIZE;
    use mmap_abstractions::{PagingError, VmProt};
    use test_log::test;
    use test_utilities::memory::TestPageMapper;

    use super::*;

    fn setup_env() -> (Arc<TestPageMapper>, Arc<DemoMmapDevice>, DemoMmapFops) {
        let mapper = Arc::new(TestPageMapper::new());
        let device = Arc::new(DemoMmapDevice::new());
        let fops = DemoMmapFops::new(device.clone(), mapper.clone());

        (mapper, device, fops)
    }

    fn two_page_vma() -> VmaDescriptor {
        VmaDescriptor::new(
            VirtualAddress::from_usize(0x1000_0000),
            VirtualAddress::from_usize(0x1000_0000 + 2 * PAGE_SIZE),
            PageFrameNum::from_usize(0x800),
            VmProt::READ | VmProt::WRITE,
        )
    }

    #[test]
    fn test_open_stashes_device_in_private_data() {
        let (_, device, fops) = setup_env();

        let inode = Inode::new(
            chrdev_abstractions::DeviceNumber::new(240, 1),
            chrdev_abstractions::CdevHandle::from_raw(1),
        );
        let mut file = OpenFile::new();

        fops.open(&inode, &mut file).unwrap();

        let data = file.private_data().unwrap();
        let resolved = data.downcast_arc::<DemoMmapDevice>().ok().unwrap();
        assert!(Arc::ptr_eq(&resolved, &device));
    }

    #[test]
    fn test_read_write_report_requested_count() {
        let (_, _, fops) = setup_env();
        let file = OpenFile::new();

        for count in [0usize, 1, PAGE_SIZE, 1 << 20] {
            let buf = UserBuffer::new(VirtualAddress::from_usize(0xdead_0000), count);
            let mut offset = 0;

            assert_eq!(fops.read(&file, buf, &mut offset), Ok(count));
            assert_eq!(fops.write(&file, buf, &mut offset), Ok(count));
            // The offset pointer is received but never advanced.
            assert_eq!(offset, 0);
        }
    }

    #[test]
    fn test_mmap_establishes_linear_mapping() {
        let (mapper, _, fops) = setup_env();
        let file = OpenFile::new();
        let mut vma = two_page_vma();

        fops.mmap(&file, &mut vma).unwrap();

        let mappings = mapper.mappings();
        assert_eq!(mappings.len(), 1);

        let mapping = &mappings[0];
        assert_eq!(mapping.vaddr, vma.vm_start);
        assert_eq!(mapping.pfn, vma.vm_pgoff);
        assert_eq!(mapping.len, 2 * PAGE_SIZE);
        assert_eq!(mapping.prot, VmProt::READ | VmProt::WRITE);

        // Physical base is the caller's pgoff shifted by the page size.
        assert_eq!(mapping.pfn.start_addr().as_usize(), 0x800 * PAGE_SIZE);

        assert!(vma.vm_ops.is_some());
    }

    #[test]
    fn test_mmap_failure_returns_eagain_without_partial_mapping() {
        let (mapper, _, fops) = setup_env();
        let file = OpenFile::new();
        let mut vma = two_page_vma();

        mapper.fail_next(PagingError::OutOfMemory);

        let err = fops.mmap(&file, &mut vma).unwrap_err();
        assert_eq!(err, ErrNo::ResourceTemporarilyUnavailable);

        assert!(mapper.mappings().is_empty());
        assert!(vma.vm_ops.is_none());
    }

    #[test]
    fn test_release_always_succeeds() {
        let (_, _, fops) = setup_env();

        let inode = Inode::new(
            chrdev_abstractions::DeviceNumber::new(240, 1),
            chrdev_abstractions::CdevHandle::from_raw(1),
        );
        let file = OpenFile::new();

        assert_eq!(fops.release(&inode, &file), Ok(()));
    }
}
