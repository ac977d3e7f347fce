use fix32_internals::*;

use crate::Fix32;

const TWO: i64 = 2 << FRAC_BITS;
/// ln(2)
const LN2: Fix32 = Fix32::from_raw(0xb172_17f7);
/// e^4
const E4: Fix32 = Fix32::from_raw(234497268814);
/// `pow2` saturates at and above 31
const LOG2_MAX: i64 = 0x1f_0000_0000;
/// `pow2` is zero below -32
const LOG2_MIN: i64 = -0x20_0000_0000;
/// ln(2^31), `exp` saturates at and above this
const EXP_MAX_INPUT: i64 = 92288378626;
/// ln(2^-33), `exp` is zero at and below this
const EXP_MIN_INPUT: i64 = -98242467570;
/// -ln(1.5 * 2^-32), the boundary between results of one and two epsilons
const EXP_ONE_EPSILON: i64 = 93523963719;
/// Limits the number of terms summed by `exp`
const EXP_MAX_TERMS: i32 = 96;

/// Halving that rounds up on ties
const fn rs(x: i64) -> i64 {
    if cfg!(feature = "no_rounding") {
        x >> 1
    } else {
        (x >> 1) + (x & 1)
    }
}

/// The binary logarithm of `x >= 1` by digit recurrence. The integer part is
/// found by repeated halving, and then each squaring of the mantissa gives
/// one bit of the fraction.
const fn log2_inner(mut x: i64) -> i64 {
    let mut res = 0i64;
    while x >= TWO {
        res += 1;
        x = rs(x);
    }
    const_for!(_i in {0..32usize} {
        x = Fix32::from_raw(x).sq().raw();
        res <<= 1;
        if x >= TWO {
            res |= 1;
            x = rs(x);
        }
    });
    if !cfg!(feature = "no_rounding") {
        x = Fix32::from_raw(x).sq().raw();
        if x >= TWO {
            res += 1;
        }
    }
    res
}

/// # Exponentials and logarithms
impl Fix32 {
    /// Returns the binary logarithm of `self`, or `None` if `self` is not
    /// positive. Values below one are computed as `-log2(1 / self)`.
    pub const fn checked_log2(self) -> Option<Self> {
        let x = self.raw();
        if x <= 0 {
            return None
        }
        if x < RAW_ONE {
            // the reciprocals of the two smallest values overflow
            if x == 1 {
                return Some(Self::from_int(-32))
            }
            return match Self::ONE.checked_div(self) {
                Some(inv) => Some(Self::from_raw(-log2_inner(inv.raw()))),
                None => Some(Self::from_int(-31)),
            }
        }
        Some(Self::from_raw(log2_inner(x)))
    }

    /// Returns the binary logarithm of `self`, or [Fix32::OVERFLOW] if `self`
    /// is not positive
    ///
    /// ```
    /// use fix32::{fix32, Fix32};
    ///
    /// assert_eq!(Fix32::from_int(8).log2(), Fix32::from_int(3));
    /// assert_eq!(fix32!(0.25).log2(), Fix32::from_int(-2));
    /// assert_eq!(Fix32::ZERO.log2(), Fix32::OVERFLOW);
    /// ```
    pub const fn log2(self) -> Self {
        match self.checked_log2() {
            Some(x) => x,
            None => Self::OVERFLOW,
        }
    }

    /// Saturating binary logarithm, returning [Fix32::MIN] if `self` is not
    /// positive
    pub const fn slog2(self) -> Self {
        match self.checked_log2() {
            Some(x) => x,
            None => Self::MIN,
        }
    }

    /// Returns `2^self`. The fraction is evaluated with the power series of
    /// `e^(self * ln(2))`, and the integer part is applied as a shift. Results
    /// that are too large saturate to [Fix32::MAX], and results smaller than
    /// `2^-32` become [Fix32::EPSILON] or zero.
    ///
    /// ```
    /// use fix32::{fix32, Fix32};
    ///
    /// assert_eq!(Fix32::from_int(10).pow2(), Fix32::from_int(1024));
    /// assert_eq!(Fix32::from_int(-1).pow2(), fix32!(0.5));
    /// assert_eq!(Fix32::from_int(31).pow2(), Fix32::MAX);
    /// ```
    pub const fn pow2(self) -> Self {
        let x = self.raw();
        if x == 0 {
            return Self::ONE
        }
        if x >= LOG2_MAX {
            return Self::MAX
        }
        if x < LOG2_MIN {
            return Self::ZERO
        }
        if x <= -LOG2_MAX {
            return Self::EPSILON
        }
        // `e^-x = 1/e^x` avoids the slower convergence of negative arguments
        let negative = x < 0;
        let mag = x.wrapping_abs();
        if mag == RAW_ONE {
            return if negative {
                Self::from_raw(RAW_ONE / 2)
            } else {
                Self::from_int(2)
            }
        }
        let int_part = (mag >> FRAC_BITS) as u32;
        let frac = Self::from_raw(mag & FRAC_MASK);
        // term `n + 1` is term `n` times `ln(2) * frac / n`, and the sum stops when a
        // term rounds to zero
        let mut res = RAW_ONE;
        let mut term = Self::ONE;
        let mut i = 1;
        while !term.is_zero() {
            term = term.mul(LN2.mul(frac.div(Self::from_int(i))));
            res += term.raw();
            i += 1;
        }
        let res = Self::from_raw(res << int_part);
        if negative {
            Self::ONE.div(res)
        } else {
            res
        }
    }

    /// Returns `self` raised to the power of `exp` as `2^(exp * log2(self))`,
    /// or `None` if `self` is negative or the product in the exponent
    /// overflows. `self == 1` or `exp == 0` give one, and otherwise
    /// `self == 0` gives zero. Results that are too large saturate.
    pub const fn checked_pow(self, exp: Self) -> Option<Self> {
        if (self.raw() == RAW_ONE) || exp.is_zero() {
            return Some(Self::ONE)
        }
        if self.is_zero() {
            return Some(Self::ZERO)
        }
        let log = match self.checked_log2() {
            Some(log) => log,
            None => return None,
        };
        match exp.checked_mul(log) {
            Some(x) => Some(x.pow2()),
            None => None,
        }
    }

    /// The same as [Fix32::checked_pow] except that [Fix32::OVERFLOW] is
    /// returned instead of `None`
    ///
    /// ```
    /// use fix32::{fix32, Fix32};
    ///
    /// assert_eq!(Fix32::from_int(2).pow(Fix32::from_int(10)), Fix32::from_int(1024));
    /// assert_eq!(Fix32::from_int(-3).pow(Fix32::from_int(2)), Fix32::OVERFLOW);
    /// ```
    pub const fn pow(self, exp: Self) -> Self {
        match self.checked_pow(exp) {
            Some(x) => x,
            None => Self::OVERFLOW,
        }
    }

    /// Saturating power. The exponent product saturates instead of
    /// overflowing, so large results are [Fix32::MAX] and tiny results are
    /// zero. A negative `self` has no real result and gives [Fix32::MIN].
    pub const fn spow(self, exp: Self) -> Self {
        if (self.raw() == RAW_ONE) || exp.is_zero() {
            return Self::ONE
        }
        if self.is_zero() {
            return Self::ZERO
        }
        if self.is_negative() {
            return Self::MIN
        }
        exp.saturating_mul(self.slog2()).pow2()
    }

    /// Returns `e^self` by summing the power series. Inputs of `ln(2^31)` and
    /// above saturate to [Fix32::MAX].
    ///
    /// ```
    /// use fix32::Fix32;
    ///
    /// assert_eq!(Fix32::ZERO.exp(), Fix32::ONE);
    /// assert_eq!(Fix32::ONE.exp(), Fix32::E);
    /// assert_eq!(Fix32::MIN.exp(), Fix32::ZERO);
    /// assert_eq!(Fix32::MAX.exp(), Fix32::MAX);
    /// ```
    pub const fn exp(self) -> Self {
        let x = self.raw();
        if x == 0 {
            return Self::ONE
        }
        if x == RAW_ONE {
            return Self::E
        }
        if x >= EXP_MAX_INPUT {
            return Self::MAX
        }
        if x <= EXP_MIN_INPUT {
            return Self::ZERO
        }
        // the series converges much faster for positive values, and
        // `e^-x = 1/e^x`
        let negative = x < 0;
        let mag = x.wrapping_abs();
        if negative && (mag >= EXP_MAX_INPUT) {
            // the positive series would overflow, but the result is tiny anyway
            return if mag < EXP_ONE_EPSILON {
                Self::from_raw(2)
            } else {
                Self::EPSILON
            }
        }
        let v = Self::from_raw(mag);
        // term `n` is term `n - 1` times `x / n`
        let mut res = mag + RAW_ONE;
        let mut term = v;
        let mut i = 2;
        while i < EXP_MAX_TERMS {
            term = term.mul(v.div(Self::from_int(i)));
            res = match res.checked_add(term.raw()) {
                Some(res) => res,
                // can happen from rounding just below `EXP_MAX_INPUT`
                None => {
                    return if negative {
                        Self::from_raw(2)
                    } else {
                        Self::MAX
                    }
                }
            };
            if (term.raw() < 500) && ((i > 15) || (term.raw() < 20)) {
                break
            }
            i += 1;
        }
        if negative {
            Self::ONE.div(Self::from_raw(res))
        } else {
            Self::from_raw(res)
        }
    }

    /// Returns the natural logarithm of `self`, or [Fix32::OVERFLOW] if
    /// `self` is not positive. This solves `e^y = self` with Newton's method
    /// after scaling `self` into the range `1..=100` by powers of `e^4`.
    pub const fn ln(self) -> Self {
        if self.raw() <= 0 {
            return Self::OVERFLOW
        }
        let mut x = self;
        let mut scaling = 0;
        while x.raw() > (100 << FRAC_BITS) {
            x = x.div(E4);
            scaling += 4;
        }
        while x.raw() < RAW_ONE {
            x = x.mul(E4);
            scaling -= 4;
        }
        let max_delta = Self::from_int(3);
        let mut guess = Self::from_int(2);
        let mut count = 0;
        loop {
            // f(y) = e^y - x, f'(y) = e^y
            let e = guess.exp();
            let mut delta = x.sub(e).div(e);
            // the logarithm is small here, so large steps are overshoots
            if delta.raw() > max_delta.raw() {
                delta = max_delta;
            }
            guess = guess.add(delta);
            let prev = count;
            count += 1;
            if (prev >= 10) || ((delta.raw() <= 1) && (delta.raw() >= -1)) {
                break
            }
        }
        guess.add(Self::from_int(scaling))
    }
}
