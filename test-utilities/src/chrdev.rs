use std::{collections::BTreeMap, sync::Arc, vec::Vec};

use chrdev_abstractions::{
    CdevHandle, DeviceNumber, DeviceRegion, IChrDevSubsystem, IFileOperations,
};
use constants::ErrNo;
use hermit_sync::SpinMutex;

// Arbitrary, just far away from real static majors.
const AUTO_MAJOR_BASE: u32 = 240;

struct ChrDevState {
    next_major: u32,
    next_handle: u64,
    reserved: Vec<DeviceRegion>,
    released: Vec<DeviceRegion>,
    registered: BTreeMap<CdevHandle, (DeviceNumber, Arc<dyn IFileOperations>)>,
    unregistered: Vec<CdevHandle>,
    fail_alloc: Option<ErrNo>,
    fail_register: Option<ErrNo>,
}

/// Fake character-device subsystem. Auto-assigns majors from a counter and
/// records every reservation, registration and teardown so tests can assert
/// on the full lifecycle. Failures are injected per call.
pub struct TestChrDev {
    state: SpinMutex<ChrDevState>,
}

impl Default for TestChrDev {
    fn default() -> Self {
        Self::new()
    }
}

impl TestChrDev {
    pub fn new() -> Self {
        Self {
            state: SpinMutex::new(ChrDevState {
                next_major: AUTO_MAJOR_BASE,
                next_handle: 1,
                reserved: Vec::new(),
                released: Vec::new(),
                registered: BTreeMap::new(),
                unregistered: Vec::new(),
                fail_alloc: None,
                fail_register: None,
            }),
        }
    }

    /// Makes the next `alloc_region` call fail with `err`.
    pub fn fail_alloc_region(&self, err: ErrNo) {
        self.state.lock().fail_alloc = Some(err);
    }

    /// Makes the next `register_cdev` call fail with `err`.
    pub fn fail_register(&self, err: ErrNo) {
        self.state.lock().fail_register = Some(err);
    }

    pub fn reserved_regions(&self) -> Vec<DeviceRegion> {
        self.state.lock().reserved.clone()
    }

    pub fn released_regions(&self) -> Vec<DeviceRegion> {
        self.state.lock().released.clone()
    }

    pub fn registered_handles(&self) -> Vec<CdevHandle> {
        self.state.lock().registered.keys().copied().collect()
    }

    pub fn unregistered_handles(&self) -> Vec<CdevHandle> {
        self.state.lock().unregistered.clone()
    }

    pub fn devno_of(&self, handle: CdevHandle) -> Option<DeviceNumber> {
        self.state
            .lock()
            .registered
            .get(&handle)
            .map(|(devno, _)| *devno)
    }

    /// The operations table a live registration dispatches to, the way the
    /// VFS would resolve it from an inode.
    pub fn fops_of(&self, handle: CdevHandle) -> Option<Arc<dyn IFileOperations>> {
        self.state
            .lock()
            .registered
            .get(&handle)
            .map(|(_, fops)| fops.clone())
    }
}

impl IChrDevSubsystem for TestChrDev {
    fn alloc_region(
        &self,
        preferred_major: u32,
        base_minor: u32,
        count: u32,
    ) -> Result<DeviceRegion, ErrNo> {
        let mut state = self.state.lock();

        if let Some(err) = state.fail_alloc.take() {
            return Err(err);
        }

        let major = match preferred_major {
            0 => {
                let major = state.next_major;
                state.next_major += 1;
                major
            }
            fixed => fixed,
        };

        let region = DeviceRegion::new(major, base_minor, count);
        state.reserved.push(region);

        Ok(region)
    }

    fn register_cdev(
        &self,
        devno: DeviceNumber,
        _count: u32,
        fops: Arc<dyn IFileOperations>,
    ) -> Result<CdevHandle, ErrNo> {
        let mut state = self.state.lock();

        if let Some(err) = state.fail_register.take() {
            return Err(err);
        }

        // A registration must land inside a reserved region.
        if !state.reserved.iter().any(|region| region.contains(devno)) {
            return Err(ErrNo::NoSuchDevice);
        }

        let handle = CdevHandle::from_raw(state.next_handle);
        state.next_handle += 1;
        state.registered.insert(handle, (devno, fops));

        Ok(handle)
    }

    fn unregister_cdev(&self, handle: CdevHandle) {
        let mut state = self.state.lock();

        state.registered.remove(&handle);
        state.unregistered.push(handle);
    }

    fn release_region(&self, region: DeviceRegion) {
        self.state.lock().released.push(region);
    }
}
