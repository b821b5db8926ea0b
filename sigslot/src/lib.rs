#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(unreachable_pub)]
#![doc = include_str!("../README.md")]
//!
//! # Threading Notes
//!
//! [`Slot`] holds a raw object address, so neither slots nor signals are [`Send`] or [`Sync`].
//! All dispatch is synchronous and happens on the calling thread.

mod error;
pub use error::CapacityError;

pub mod slot;
pub use slot::{MethodSlot, Slot, SlotKind};

pub mod slot_vec;
pub use slot_vec::SlotVec;

mod signal;
pub use signal::Signal;

#[doc = include_str!("../README.md")]
mod readme {}
