pub mod chrdev;
pub mod kernel;
pub mod memory;

#[cfg(feature = "test_log")]
mod logging;
