//! Deterministic Q31.32 fixed point arithmetic
//!
//! This is the core library of the `fix32` system of crates. This crate is
//! strictly `no-std` and `no-alloc`, not even requiring an allocator to be
//! compiled. It supplies the `Fix32` type, a signed 64 bit integer interpreted
//! as having 32 fractional bits, along with its arithmetic, transcendental, and
//! trigonometric functions. Every function works purely on integers, so results
//! are bit-for-bit identical on every platform, with or without a hardware
//! floating point unit.
//!
//! Overflow is reported in-band: the fallible functions return
//! [Fix32::OVERFLOW], which is the same bit pattern as [Fix32::MIN]. The
//! `checked_*` variants return `None` instead, and the `saturating_*` variants
//! clamp to [Fix32::MAX] or [Fix32::MIN].

#![no_std]
#![cfg_attr(feature = "const_support", feature(const_mut_refs))]
#![cfg_attr(feature = "const_support", feature(const_fn_floating_point_arithmetic))]
// the sentinel returning functions intentionally share names with `core::ops`
#![allow(clippy::should_implement_trait)]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]
#![allow(clippy::unusual_byte_groupings)]

// the unit tests use floating point functions for reference values
#[cfg(test)]
extern crate std;

#[doc(hidden)]
pub use fix32_internals;
pub use fix32_internals::{SerdeError, MAX_STR_LEN};

pub(crate) mod data;
pub use data::Fix32;

mod logic;
#[cfg(not(feature = "no_sin_lut"))]
pub use logic::sin_table;
pub use logic::SinMethod;

pub mod prelude {
    pub use crate::{Fix32, SerdeError, SinMethod};
}
