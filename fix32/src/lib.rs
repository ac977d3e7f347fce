//! Deterministic Q31.32 fixed point arithmetic
//!
//! This crate compiles all the interfaces of `fix32_core` and `fix32_macros`.
//! Every function of [Fix32] works purely on integers, giving bit-for-bit
//! identical results on every platform, including targets without a floating
//! point unit.
//!
//! ```
//! use fix32::{fix32, Fix32};
//!
//! let r = fix32!(2.5);
//! let area = Fix32::PI.mul(r.sq());
//! assert_eq!(format!("{area:.4}"), "19.6350");
//! // errors are in-band by default, with `checked_*` variants returning `None`
//! assert_eq!(Fix32::MAX.mul(r), Fix32::OVERFLOW);
//! assert_eq!(Fix32::MAX.checked_mul(r), None);
//! assert_eq!(Fix32::MAX.saturating_mul(r), Fix32::MAX);
//! ```
//!
//! The double width integer behind `mul` and the `lerp` functions is scratch
//! storage and not part of the interface:
//!
//! ```compile_fail
//! use fix32::WideInt;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[doc(hidden)]
pub use fix32_core::fix32_internals;
pub use fix32_core::prelude::*;
pub use fix32_core::MAX_STR_LEN;
#[cfg(not(feature = "no_sin_lut"))]
pub use fix32_core::sin_table;
pub use fix32_macros::*;

pub mod prelude {
    pub use crate::*;
}
