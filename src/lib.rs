//! Statically checked access to memory-mapped registers, their bit-fields and
//! GPIO pins.
//!
//! Registers, fields and field-values are zero-sized tokens. Their addresses,
//! offsets, widths and access capabilities are part of their types, so wrong
//! accesses fail to build and right ones compile down to the bare loads and
//! stores.
//!
//! * [`reg`]: register, field and field-value tokens, and the [`reg!`] macro
//!   declaring them.
//! * [`atomic`]: the lock-free read-modify-write engine atomic register
//!   operations are built on.
//! * [`gpio`]: pin configuration state machine over the registers of a GPIO
//!   port.
//! * [`mem`]: memory access backends and bit-banding.
//!
//! # Cargo Features
//!
//! * `std`: links the standard library, for running on a host.
//! * `log` / `defmt`: trace pin transitions and failed compare-exchanges with
//!   the respective logging framework.
//! * `embedded-hal`: implements the `embedded-hal` 1.0 digital traits for
//!   pins.

#![warn(missing_docs, unsafe_op_in_unsafe_fn)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::inline_always,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::precedence
)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate self as mmreg;

// MUST be the first module
mod fmt;

pub mod atomic;
pub mod bits;
pub mod gpio;
pub mod mem;
pub mod reg;
pub mod token;

/// Defines a memory-mapped register.
///
/// See [the module level documentation](reg) for details.
#[doc(inline)]
pub use mmreg_macros::reg;
