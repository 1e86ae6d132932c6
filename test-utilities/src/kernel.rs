use std::sync::Arc;

use chrdev_abstractions::IChrDevSubsystem;
use kernel_abstractions::IKernel;
use mmap_abstractions::IPageMapper;

use crate::{chrdev::TestChrDev, memory::TestPageMapper};

/// Fake kernel for driver unit tests. Capabilities are plugged in through
/// the builder; tests keep their own `Arc` to each fake so they can inspect
/// recorded state after driving the driver.
pub struct TestKernel {
    pub chrdev: Option<Arc<TestChrDev>>,
    pub mapper: Option<Arc<TestPageMapper>>,
}

impl Default for TestKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl TestKernel {
    pub fn new() -> Self {
        Self {
            chrdev: None,
            mapper: None,
        }
    }

    pub fn with_chrdev(mut self, chrdev: Option<Arc<TestChrDev>>) -> Self {
        self.chrdev = chrdev;
        self
    }

    pub fn with_page_mapper(mut self, mapper: Option<Arc<TestPageMapper>>) -> Self {
        self.mapper = mapper;
        self
    }

    pub fn build(self) -> Arc<dyn IKernel> {
        Arc::new(self)
    }
}

impl IKernel for TestKernel {
    fn chrdev(&self) -> Arc<dyn IChrDevSubsystem> {
        self.chrdev.as_ref().unwrap().clone()
    }

    fn page_mapper(&self) -> Arc<dyn IPageMapper> {
        self.mapper.as_ref().unwrap().clone()
    }
}
