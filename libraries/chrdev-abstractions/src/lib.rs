#![cfg_attr(not(feature = "std"), no_std)]

use alloc::sync::Arc;
use downcast_rs::{impl_downcast, Downcast, DowncastSync};

use constants::ErrNo;
use mmap_abstractions::VmaDescriptor;

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod file;
mod numbers;

pub use file::{Inode, OpenFile, UserBuffer};
pub use numbers::{CdevHandle, DeviceNumber, DeviceRegion};

/// Data a driver stashes in an open file's private-data slot.
pub trait IDeviceData: DowncastSync {}

impl_downcast!(sync IDeviceData);

/// The fixed operations table a character device registers with the VFS.
pub trait IFileOperations: Send + Sync {
    fn open(&self, inode: &Inode, file: &mut OpenFile) -> Result<(), ErrNo>;

    fn read(&self, file: &OpenFile, buf: UserBuffer, offset: &mut u64) -> Result<usize, ErrNo>;

    fn write(&self, file: &OpenFile, buf: UserBuffer, offset: &mut u64) -> Result<usize, ErrNo>;

    fn mmap(&self, file: &OpenFile, vma: &mut VmaDescriptor) -> Result<(), ErrNo>;

    fn release(&self, inode: &Inode, file: &OpenFile) -> Result<(), ErrNo>;
}

/// The kernel's character-device subsystem capability: device-number
/// bookkeeping plus cdev registration.
pub trait IChrDevSubsystem: Downcast + Send + Sync {
    /// Reserves a device-number region of `count` minors starting at
    /// `base_minor`. A `preferred_major` of 0 asks for an auto-assigned
    /// major; any other value requests exactly that major.
    fn alloc_region(
        &self,
        preferred_major: u32,
        base_minor: u32,
        count: u32,
    ) -> Result<DeviceRegion, ErrNo>;

    /// Makes the device live under `devno`, dispatching to `fops`.
    fn register_cdev(
        &self,
        devno: DeviceNumber,
        count: u32,
        fops: Arc<dyn IFileOperations>,
    ) -> Result<CdevHandle, ErrNo>;

    fn unregister_cdev(&self, handle: CdevHandle);

    fn release_region(&self, region: DeviceRegion);
}

impl_downcast!(IChrDevSubsystem);
