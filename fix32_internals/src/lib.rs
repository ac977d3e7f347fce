//! This crate contains common developer utilities for crates within the `fix32`
//! system, such as the `const_for!` macro that needed a separate crate because
//! `#[macro_export]` unconditionally causes macros to be publicly accessible,
//! the `WideInt` double width scratch integer, and the `SerdeError` type shared
//! between the string and serialization functions. Most users should never
//! have to interact with this directly.
//!
//! There is a hidden reexport of this crate for `fix32_core` and `fix32`.

#![no_std]
#![cfg_attr(feature = "const_support", feature(const_mut_refs))]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]

#[cfg(feature = "std")]
extern crate std;

mod macros;
mod serde_common;
mod widening;

pub use serde_common::*;
pub use widening::{widen_add, widen_mul_u64, WideInt};

/// Number of fractional bits in the Q31.32 format
pub const FRAC_BITS: u32 = 32;

/// The raw representation of one
pub const RAW_ONE: i64 = 1 << FRAC_BITS;

/// Mask of the fractional bits
pub const FRAC_MASK: i64 = RAW_ONE - 1;
