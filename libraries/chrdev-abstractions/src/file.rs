use alloc::sync::Arc;

use address::VirtualAddress;

use crate::{CdevHandle, DeviceNumber, IDeviceData};

/// What the VFS hands to `open`: the device number being opened and the
/// handle of the cdev registration it resolved to.
#[derive(Debug, Clone, Copy)]
pub struct Inode {
    pub devno: DeviceNumber,
    pub cdev: CdevHandle,
}

impl Inode {
    pub const fn new(devno: DeviceNumber, cdev: CdevHandle) -> Self {
        Self { devno, cdev }
    }
}

/// Per-open-file context, alive from `open` to `release`. Drivers use the
/// private-data slot to reach their device record from later operations.
#[derive(Default)]
pub struct OpenFile {
    private_data: Option<Arc<dyn IDeviceData>>,
}

impl OpenFile {
    pub fn new() -> Self {
        Self { private_data: None }
    }

    pub fn set_private_data(&mut self, data: Arc<dyn IDeviceData>) {
        self.private_data = Some(data);
    }

    pub fn private_data(&self) -> Option<Arc<dyn IDeviceData>> {
        self.private_data.clone()
    }
}

/// An address/length pair standing for a caller-supplied buffer. Carried
/// through read/write so an operation can report a transfer size without the
/// harness owning real user memory.
#[derive(Debug, Clone, Copy)]
pub struct UserBuffer {
    pub addr: VirtualAddress,
    pub len: usize,
}

impl UserBuffer {
    pub const fn new(addr: VirtualAddress, len: usize) -> Self {
        Self { addr, len }
    }
}
