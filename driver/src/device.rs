use chrdev_abstractions::{CdevHandle, IDeviceData};
use hermit_sync::SpinMutex;

struct Registration {
    valid: bool,
    cdev: Option<CdevHandle>,
}

/// The singleton device record. `valid` tracks whether the cdev
/// registration is currently live with the kernel; teardown consults it
/// before unregistering. The mutable state sits under a spin mutex so the
/// locking discipline holds if the driver ever grows shared mutable data.
pub struct DemoMmapDevice {
    registration: SpinMutex<Registration>,
}

impl Default for DemoMmapDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoMmapDevice {
    pub fn new() -> Self {
        Self {
            registration: SpinMutex::new(Registration {
                valid: false,
                cdev: None,
            }),
        }
    }

    /// Marks the cdev registration live. Called once during device setup.
    pub(crate) fn complete_registration(&self, handle: CdevHandle) {
        let mut registration = self.registration.lock();

        registration.valid = true;
        registration.cdev = Some(handle);
    }

    pub fn is_valid(&self) -> bool {
        self.registration.lock().valid
    }

    pub fn cdev_handle(&self) -> Option<CdevHandle> {
        self.registration.lock().cdev
    }

    /// Invalidates the record and yields the handle to unregister, or
    /// `None` if the registration never became live.
    pub(crate) fn take_registration(&self) -> Option<CdevHandle> {
        let mut registration = self.registration.lock();

        if !registration.valid {
            return None;
        }

        registration.valid = false;
        registration.cdev.take()
    }
}

impl IDeviceData for DemoMmapDevice {}
