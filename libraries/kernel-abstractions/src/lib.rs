#![cfg_attr(not(feature = "std"), no_std)]

use alloc::sync::Arc;
use chrdev_abstractions::IChrDevSubsystem;
use downcast_rs::{impl_downcast, Downcast};
use mmap_abstractions::IPageMapper;

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

/// The kernel capabilities a driver consumes. Exactly one real
/// implementation exists in production; tests substitute a fake.
pub trait IKernel: Downcast + Send + Sync {
    fn chrdev(&self) -> Arc<dyn IChrDevSubsystem>;

    fn page_mapper(&self) -> Arc<dyn IPageMapper>;
}

impl_downcast!(IKernel);
