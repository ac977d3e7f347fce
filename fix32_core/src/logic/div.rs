use fix32_internals::*;

use crate::Fix32;

/// # Division
impl Fix32 {
    /// Returns `self / rhs` rounded to nearest with ties away from zero, or
    /// `None` if `rhs` is zero or the result overflows. With the `no_rounding`
    /// feature the quotient is truncated toward zero.
    ///
    /// This computes `(|self| << 33) / |rhs|` with a few hardware 64 by 64 bit
    /// divisions, usually one to three. The result is exactly rounded for
    /// divisors with a magnitude below `2^52`, larger divisors can be off by
    /// one epsilon.
    pub const fn checked_div(self, rhs: Self) -> Option<Self> {
        let a = self.raw();
        let b = rhs.raw();
        if b == 0 {
            return None
        }
        let mut rem = a.unsigned_abs();
        let mut div = b.unsigned_abs();
        let mut quo = 0u64;
        // 32 fraction bits plus one rounding bit remain to be computed
        let mut bit_pos: i32 = 33;

        // Kick-start the division for large divisors with the lower estimate
        // `rem / ((div >> 33) + 1)`
        if (div & 0xfff0_0000_0000_0000) != 0 {
            quo = rem / ((div >> 33) + 1);
            let (lo, hi) = widen_mul_u64(quo, div);
            rem -= (hi << 31) | (lo >> 33);
        }

        // skip over trailing zero nibbles of the divisor
        while ((div & 0xf) == 0) && (bit_pos >= 4) {
            div >>= 4;
            bit_pos -= 4;
        }

        while (rem != 0) && (bit_pos >= 0) {
            // shift the remainder as much as possible without overflowing
            let mut shift = rem.leading_zeros() as i32;
            if shift > bit_pos {
                shift = bit_pos;
            }
            rem <<= shift;
            bit_pos -= shift;

            let digit = rem / div;
            rem %= div;
            // the new digits must fit in the remaining bit budget
            if (digit & !(u64::MAX >> bit_pos)) != 0 {
                return None
            }
            quo = quo.wrapping_add(digit << bit_pos);

            rem <<= 1;
            bit_pos -= 1;
        }

        // the quotient is always positive, so rounding is easy
        let res = if cfg!(feature = "no_rounding") {
            quo >> 1
        } else {
            (quo >> 1) + (quo & 1)
        };
        if (a ^ b) < 0 {
            // negating the minimum is an overflow
            if res >= (1 << 63) {
                None
            } else {
                Some(Self::from_raw((res as i64).wrapping_neg()))
            }
        } else if res > (i64::MAX as u64) {
            None
        } else {
            Some(Self::from_raw(res as i64))
        }
    }

    /// Returns `self / rhs` rounded to nearest with ties away from zero, or
    /// [Fix32::OVERFLOW] if `rhs` is zero or the result overflows
    ///
    /// ```
    /// use fix32::{fix32, Fix32};
    ///
    /// assert_eq!(Fix32::from_int(15).div(Fix32::from_int(4)), fix32!(3.75));
    /// assert_eq!(Fix32::ONE.div(Fix32::ZERO), Fix32::OVERFLOW);
    /// ```
    pub const fn div(self, rhs: Self) -> Self {
        match self.checked_div(rhs) {
            Some(quo) => quo,
            None => Self::OVERFLOW,
        }
    }

    /// Saturating division. A result with the bit pattern of
    /// [Fix32::OVERFLOW], including division by zero, is mapped to
    /// [Fix32::MAX] if the signs of `self` and `rhs` agree (zero counting as
    /// positive), and to [Fix32::MIN] otherwise.
    pub const fn saturating_div(self, rhs: Self) -> Self {
        let quo = self.div(rhs);
        if quo.is_overflow() {
            Self::saturate_by_sign(self.is_negative() == rhs.is_negative())
        } else {
            quo
        }
    }

    /// Returns the truncating remainder of `self / rhs`, which has the sign of
    /// `self`, or `None` if `rhs` is zero. Note that this is not the
    /// mathematical modulo.
    #[inline]
    pub const fn checked_rem(self, rhs: Self) -> Option<Self> {
        if rhs.is_zero() {
            None
        } else {
            Some(Self::from_raw(self.raw().wrapping_rem(rhs.raw())))
        }
    }

    /// Returns the truncating remainder of `self / rhs`, or
    /// [Fix32::OVERFLOW] if `rhs` is zero
    ///
    /// ```
    /// use fix32::{fix32, Fix32};
    ///
    /// assert_eq!(fix32!(-7.5).rem(Fix32::from_int(2)), fix32!(-1.5));
    /// ```
    pub const fn rem(self, rhs: Self) -> Self {
        match self.checked_rem(rhs) {
            Some(rem) => rem,
            None => Self::OVERFLOW,
        }
    }
}
