use const_fn::const_fn;
use fix32_internals::*;

use crate::Fix32;

const HALF: u64 = 1 << (FRAC_BITS - 1);

/// # Integer and floating point conversions
///
/// The floating point conversions are the only interaction with floating
/// point in this crate, and they are not needed by any other function. See
/// also [Fix32::from_f32_bits] and [Fix32::to_f32_bits] for conversions
/// that do not need a floating point unit.
impl Fix32 {
    /// Converts the integer `x` exactly
    #[inline]
    pub const fn from_int(x: i32) -> Self {
        Self::from_raw((x as i64) << FRAC_BITS)
    }

    /// Rounds to the nearest integer, with ties rounding away from zero. With
    /// the `no_rounding` feature this rounds toward negative infinity instead.
    /// `2147483647.5` and above saturate to `i32::MAX`.
    ///
    /// ```
    /// use fix32::{fix32, Fix32};
    ///
    /// assert_eq!(fix32!(2.5).to_int(), 3);
    /// assert_eq!(fix32!(-2.5).to_int(), -3);
    /// assert_eq!(fix32!(-2.4).to_int(), -2);
    /// assert_eq!(Fix32::MIN.to_int(), i32::MIN);
    /// ```
    pub const fn to_int(self) -> i32 {
        if cfg!(feature = "no_rounding") {
            return (self.raw() >> FRAC_BITS) as i32
        }
        let mag = self.raw().unsigned_abs();
        let rounded = ((mag >> FRAC_BITS) + ((mag & HALF) >> (FRAC_BITS - 1))) as i64;
        if self.is_negative() {
            -rounded as i32
        } else if rounded > (i32::MAX as i64) {
            i32::MAX
        } else {
            rounded as i32
        }
    }

    /// Converts `x`, rounding to the nearest representable value with ties
    /// away from zero (the rounding is skipped with the `no_rounding`
    /// feature). Out of range values saturate and NaN becomes zero.
    #[const_fn(cfg(feature = "const_support"))]
    pub const fn from_f64(x: f64) -> Self {
        let mut t = x * 4294967296.0;
        if !cfg!(feature = "no_rounding") {
            t += if t >= 0.0 { 0.5 } else { -0.5 };
        }
        Self::from_raw(t as i64)
    }

    /// Converts to the nearest `f64`
    #[const_fn(cfg(feature = "const_support"))]
    pub const fn to_f64(self) -> f64 {
        (self.raw() as f64) / 4294967296.0
    }

    /// Converts `x`, with the arithmetic done in single precision like
    /// [Fix32::from_f64]
    #[const_fn(cfg(feature = "const_support"))]
    pub const fn from_f32(x: f32) -> Self {
        let mut t = x * 4294967296.0;
        if !cfg!(feature = "no_rounding") {
            t += if t >= 0.0 { 0.5 } else { -0.5 };
        }
        Self::from_raw(t as i64)
    }

    /// Converts to the nearest `f32`
    #[const_fn(cfg(feature = "const_support"))]
    pub const fn to_f32(self) -> f32 {
        (self.raw() as f32) / 4294967296.0
    }

    /// Converts radians to degrees
    pub const fn rad_to_deg(self) -> Self {
        self.mul(Self::from_raw(246083499208))
    }

    /// Converts degrees to radians
    pub const fn deg_to_rad(self) -> Self {
        self.mul(Self::from_raw(74961321))
    }
}
