//! A minimal character-device driver demonstrating mmap-based communication
//! between kernel and user space.
//!
//! The driver registers one device node. `open` associates the open file
//! with the device record, `read`/`write` are logging stubs that report the
//! requested count as transferred, and `mmap` remaps the caller-supplied
//! physical page range into the calling process's address space. The
//! page-frame offset is taken from the request unvalidated; this is a
//! teaching shim, not a general-purpose mapping mechanism.

#![cfg_attr(target_os = "none", no_std)]

extern crate alloc;

mod device;
mod fops;
mod module;

pub use device::DemoMmapDevice;
pub use fops::{DemoMmapFops, DemoMmapVmOps};
pub use module::DemoMmapModule;

/// Load-time parameters of the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// Preferred major number; 0 asks the kernel to auto-assign one.
    pub major: u32,
    /// First minor number of the reserved region.
    pub minor: u32,
    /// Number of minor numbers to reserve.
    pub nr_dev: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            major: 0,
            minor: 1,
            nr_dev: 1,
        }
    }
}
