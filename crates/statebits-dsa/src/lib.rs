#![no_std]
extern crate alloc;

pub mod bits;
pub mod slots;

pub use bits::BitVector;
pub use slots::{SlotError, SlotList};
