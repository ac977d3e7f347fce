use fix32_internals::*;

use crate::Fix32;

#[cfg(not(feature = "no_sin_lut"))]
mod lut {
    include!(concat!(env!("OUT_DIR"), "/sin_lut.rs"));
}

const TWO_PI: i64 = Fix32::PI.raw() << 1;
/// 4/pi
const FOUR_DIV_PI: Fix32 = Fix32::from_raw(0x1_45f3_06dd);
/// -4/pi^2
const NEG_FOUR_DIV_PI2: Fix32 = Fix32::from_raw(0xffff_ffff_983f_4277u64 as i64);
/// 0.225, the weight of the parabola correction
const X4_CORRECTION: Fix32 = Fix32::from_raw(0x3999_999a);
const PI_DIV_4: i64 = 0xc90f_daa2;
const THREE_PI_DIV_4: i64 = 0x2_5b2f_8fe6;
/// The coefficient of `r^3` in the `atan2` polynomial
const ATAN2_C3: Fix32 = Fix32::from_raw(0x3123_8038);
/// The coefficient of `r` in the `atan2` polynomial
const ATAN2_C1: Fix32 = Fix32::from_raw(0xf8ee_d205);
/// The odd factorials dividing the Taylor series terms, from `3!` to `13!`
const TAYLOR_DIVISORS: [i64; 6] = [6, 120, 5040, 362880, 39916800, 6227020800];

/// Returns the quarter wave sine table. Entry `i` is `sin(i * 2^-16)` in units
/// of `2^-32`, and angles past the end of the table up to `pi/2` have a sine
/// of one.
#[cfg(not(feature = "no_sin_lut"))]
pub fn sin_table() -> &'static [u32] {
    &lut::SIN_LUT
}

/// The way that [Fix32::sin_with] evaluates the sine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinMethod {
    /// Lookup in the quarter wave table with a resolution of `2^-16` radians.
    /// This is the fastest and most accurate method.
    #[cfg(not(feature = "no_sin_lut"))]
    Lut,
    /// The Taylor series up to the `x^13` term, after reducing the angle to
    /// `-pi..=pi`
    Taylor,
    /// A parabola through the zeros and extrema with a quartic correction,
    /// after reducing the angle to `-pi..=pi`
    Parabola,
    /// [SinMethod::Parabola] without the correction
    FastParabola,
}

impl SinMethod {
    /// The method used by [Fix32::sin], which is [SinMethod::Lut] unless the
    /// `no_sin_lut` feature excludes the table, in which case it is
    /// [SinMethod::Taylor]
    #[cfg(not(feature = "no_sin_lut"))]
    pub const DEFAULT: Self = Self::Lut;
    #[cfg(feature = "no_sin_lut")]
    pub const DEFAULT: Self = Self::Taylor;
}

impl Default for SinMethod {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Reduces `x` to `-2pi < x < 2pi` with the sign of `x`
const fn rem_two_pi(x: Fix32) -> i64 {
    x.raw() % TWO_PI
}

/// Reduces `x` to `-pi..=pi`
const fn rem_pi(x: Fix32) -> Fix32 {
    let mut t = rem_two_pi(x);
    if t > Fix32::PI.raw() {
        t -= TWO_PI;
    } else if t < -Fix32::PI.raw() {
        t += TWO_PI;
    }
    Fix32::from_raw(t)
}

/// # Trigonometry
///
/// Angles are in radians. The accuracy of the sine and cosine depends on the
/// [SinMethod]: the table gives an absolute error around `2e-5` as does the
/// Taylor series, the corrected parabola about `1e-3` and the plain parabola
/// about `0.06`. The inverse functions share a cubic approximation of `atan2`
/// with an absolute error of about `5e-3`.
impl Fix32 {
    #[cfg(not(feature = "no_sin_lut"))]
    fn sin_lut(self) -> Self {
        let mut t = rem_two_pi(self);
        if t < 0 {
            t += TWO_PI;
        }
        let negative = t >= Self::PI.raw();
        if negative {
            t -= Self::PI.raw();
        }
        if t >= Self::HALF_PI.raw() {
            t = Self::PI.raw() - t;
        }
        let i = (t >> 16) as usize;
        let mag = if i < lut::SIN_LUT.len() {
            lut::SIN_LUT[i] as i64
        } else {
            RAW_ONE
        };
        if negative {
            Self::from_raw(-mag)
        } else {
            Self::from_raw(mag)
        }
    }

    /// Computes the sine with the Taylor series. The angle is first reduced
    /// to `-pi..=pi`.
    pub const fn sin_taylor(self) -> Self {
        let mut power = rem_pi(self);
        let t = power.raw();
        let sq = power.sq();
        let mut res = t;
        let mut negative = true;
        const_for!(i in {0..TAYLOR_DIVISORS.len()} {
            power = power.mul(sq);
            let term = power.raw() / TAYLOR_DIVISORS[i];
            if negative {
                res -= term;
            } else {
                res += term;
            }
            negative = !negative;
        });
        Self::from_raw(res)
    }

    /// Approximates the sine on `-pi..=pi` with the parabola
    /// `(4/pi)x - (4/pi^2)x|x|`, which is exact at `0`, `+-pi/2`, and `+-pi`.
    /// If `corrected`, the approximation `y` is refined by adding
    /// `0.225 * (y|y| - y)`. The result is meaningless for other angles,
    /// [Fix32::sin_with] reduces the angle first.
    pub const fn sin_parabola(self, corrected: bool) -> Self {
        let res = FOUR_DIV_PI
            .mul(self)
            .raw()
            .wrapping_add(NEG_FOUR_DIV_PI2.mul(self).mul(self.abs()).raw());
        if !corrected {
            return Self::from_raw(res)
        }
        let y = Self::from_raw(res);
        let correction = X4_CORRECTION.mul(Self::from_raw(y.mul(y.abs()).raw().wrapping_sub(res)));
        Self::from_raw(res.wrapping_add(correction.raw()))
    }

    /// Computes the sine with the given `method`
    pub fn sin_with(self, method: SinMethod) -> Self {
        match method {
            #[cfg(not(feature = "no_sin_lut"))]
            SinMethod::Lut => self.sin_lut(),
            SinMethod::Taylor => self.sin_taylor(),
            SinMethod::Parabola => rem_pi(self).sin_parabola(true),
            SinMethod::FastParabola => rem_pi(self).sin_parabola(false),
        }
    }

    /// Computes the sine with [SinMethod::DEFAULT]
    ///
    /// ```
    /// use fix32::Fix32;
    ///
    /// assert_eq!(Fix32::ZERO.sin(), Fix32::ZERO);
    /// assert_eq!(Fix32::HALF_PI.sin(), Fix32::ONE);
    /// assert!((Fix32::from_int(-2).sin().to_f64() - (-2.0f64).sin()).abs() < 1e-4);
    /// ```
    pub fn sin(self) -> Self {
        self.sin_with(SinMethod::DEFAULT)
    }

    /// Computes the cosine as `sin(self + pi/2)` with the given `method`. The
    /// angle is reduced before the shift, so this does not overflow.
    pub fn cos_with(self, method: SinMethod) -> Self {
        Self::from_raw(rem_two_pi(self) + Self::HALF_PI.raw()).sin_with(method)
    }

    /// Computes the cosine with [SinMethod::DEFAULT]
    pub fn cos(self) -> Self {
        self.cos_with(SinMethod::DEFAULT)
    }

    /// Computes the tangent as `sin(self) / cos(self)`. Near the poles the
    /// division saturates to [Fix32::MAX] or [Fix32::MIN].
    pub fn tan(self) -> Self {
        self.sin().saturating_div(self.cos())
    }

    /// Computes the four quadrant arctangent of `self` (the `y` coordinate)
    /// and `x`, in `-pi..=pi`. `atan2(0, 0)` is zero.
    ///
    /// ```
    /// use fix32::Fix32;
    ///
    /// let angle = Fix32::from_int(1).atan2(Fix32::from_int(-1)).to_f64();
    /// assert!((angle - 3.0 * core::f64::consts::FRAC_PI_4).abs() < 5e-3);
    /// ```
    pub const fn atan2(self, x: Self) -> Self {
        let y = self.raw();
        let x = x.raw();
        if (y == 0) && (x == 0) {
            return Self::ZERO
        }
        // only the ratio matters, and this keeps `x +- |y|` from overflowing
        let shift = if ((y.unsigned_abs() | x.unsigned_abs()) >> 61) != 0 {
            2
        } else {
            0
        };
        let abs_y = (y.unsigned_abs() >> shift) as i64;
        let x = x >> shift;
        let (r, offset) = if x >= 0 {
            (
                Self::from_raw(x - abs_y).div(Self::from_raw(x + abs_y)),
                PI_DIV_4,
            )
        } else {
            (
                Self::from_raw(x + abs_y).div(Self::from_raw(abs_y - x)),
                THREE_PI_DIV_4,
            )
        };
        let r3 = r.sq().mul(r);
        let angle = ATAN2_C3.mul(r3).raw() - ATAN2_C1.mul(r).raw() + offset;
        if y < 0 {
            Self::from_raw(-angle)
        } else {
            Self::from_raw(angle)
        }
    }

    /// Computes the arctangent as `atan2(self, 1)`
    pub const fn atan(self) -> Self {
        self.atan2(Self::ONE)
    }

    /// Computes the arcsine. Values outside of `-1..=1` have no arcsine and
    /// return zero.
    ///
    /// ```
    /// use fix32::{fix32, Fix32};
    ///
    /// assert_eq!(fix32!(1.5).asin(), Fix32::ZERO);
    /// assert!((fix32!(0.5).asin().to_f64() - 0.5f64.asin()).abs() < 5e-3);
    /// ```
    pub const fn asin(self) -> Self {
        if (self.raw() > RAW_ONE) || (self.raw() < -RAW_ONE) {
            return Self::ZERO
        }
        // `atan(x / sqrt(1 - x^2))` without dividing by zero at the ends
        let cos = Self::from_raw(RAW_ONE - self.sq().raw()).sqrt();
        self.atan2(cos)
    }

    /// Computes the arccosine as `pi/2 - asin(self)`. Values outside of
    /// `-1..=1` return `pi/2`.
    pub const fn acos(self) -> Self {
        Self::from_raw(Self::HALF_PI.raw() - self.asin().raw())
    }
}
