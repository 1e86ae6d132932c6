#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
extern crate alloc;

mod page_frame;
mod physical_address;
mod virtual_address;

pub use page_frame::PageFrameNum;
pub use physical_address::PhysicalAddress;
pub use virtual_address::VirtualAddress;
