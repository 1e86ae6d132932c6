#![no_std]

mod errno;
pub use errno::ErrNo;

pub const PAGE_SIZE: usize = 4096;
pub const PAGE_SHIFT: usize = 12;
