use alloc::sync::Arc;

use chrdev_abstractions::{DeviceRegion, IChrDevSubsystem};
use constants::ErrNo;
use kernel_abstractions::IKernel;
use log::{error, info};

use crate::{device::DemoMmapDevice, fops::DemoMmapFops, DriverConfig};

/// The loaded module: owns the device record and the reserved device-number
/// region. Teardown runs on drop, mirroring module exit.
pub struct DemoMmapModule {
    kernel: Arc<dyn IKernel>,
    device: Arc<DemoMmapDevice>,
    region: DeviceRegion,
}

impl core::fmt::Debug for DemoMmapModule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DemoMmapModule")
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

impl DemoMmapModule {
    /// Module initialization: reserves the device-number region and brings
    /// the cdev up. Only a region-allocation failure aborts the load.
    pub fn init(kernel: Arc<dyn IKernel>, config: DriverConfig) -> Result<Self, ErrNo> {
        let chrdev = kernel.chrdev();

        let region = match chrdev.alloc_region(config.major, config.minor, config.nr_dev) {
            Ok(region) => region,
            Err(err) => {
                error!("demo_mmap: can't get major {}", config.major);
                return Err(err);
            }
        };

        info!("demo_mmap: registered with major {}", region.major);

        let device = Arc::new(DemoMmapDevice::new());
        let fops = Arc::new(DemoMmapFops::new(device.clone(), kernel.page_mapper()));

        Self::setup_cdev(chrdev.as_ref(), &device, fops, region);

        Ok(Self {
            kernel,
            device,
            region,
        })
    }

    // Registration failure is deliberately non-fatal: the module stays
    // loaded with the device marked invalid.
    fn setup_cdev(
        chrdev: &dyn IChrDevSubsystem,
        device: &DemoMmapDevice,
        fops: Arc<DemoMmapFops>,
        region: DeviceRegion,
    ) {
        match chrdev.register_cdev(region.base(), region.count, fops) {
            Ok(handle) => device.complete_registration(handle),
            Err(err) => error!("demo_mmap: error {} adding device", err.as_isize()),
        }
    }

    pub fn device(&self) -> &Arc<DemoMmapDevice> {
        &self.device
    }

    pub fn region(&self) -> DeviceRegion {
        self.region
    }
}

impl Drop for DemoMmapModule {
    fn drop(&mut self) {
        let chrdev = self.kernel.chrdev();

        if let Some(handle) = self.device.take_registration() {
            chrdev.unregister_cdev(handle);
        }

        // The region was reserved at init, release it unconditionally.
        chrdev.release_region(self.region);
    }
}
