use fix32_internals::*;

use crate::Fix32;

/// # Multiplication
impl Fix32 {
    /// Returns `self * rhs` rounded to nearest with ties away from zero, or
    /// `None` if the result overflows. With the `no_rounding` feature the
    /// product rounds toward negative infinity.
    pub const fn checked_mul(self, rhs: Self) -> Option<Self> {
        let product = WideInt::mul_i64(self.raw(), rhs.raw());
        let mut hi = product.hi();
        let mut lo = product.lo();
        // the upper 33 bits must all equal the sign bit for the result to fit after
        // the fraction is shifted out
        if (hi >> 63) != (hi >> 31) {
            return None
        }
        if cfg!(feature = "no_rounding") {
            return Some(Self::from_raw((hi << 32) | ((lo >> 32) as i64)))
        }
        // Subtracting one half and then shifting right rounds to the result minus
        // one, except for negative numbers with a lowest word of exactly
        // `0x8000_0000`, which is handled by also subtracting one for negative
        // numbers. The one is added back after the shift.
        let lo_tmp = lo;
        lo = lo.wrapping_sub(0x8000_0000).wrapping_sub((hi as u64) >> 63);
        if lo > lo_tmp {
            hi = hi.wrapping_sub(1);
        }
        let raw = ((hi << 32) | ((lo >> 32) as i64)).wrapping_add(1);
        // an exact `-2^31` wraps around to the right value, but rounding a positive
        // product up from `MAX + 1/2` is an overflow
        if (raw == i64::MIN) && (product.hi() >= 0) {
            None
        } else {
            Some(Self::from_raw(raw))
        }
    }

    /// Returns `self * rhs` rounded to nearest with ties away from zero, or
    /// [Fix32::OVERFLOW] if the result overflows
    ///
    /// ```
    /// use fix32::{fix32, Fix32};
    ///
    /// assert_eq!(fix32!(1.5).mul(fix32!(-2.25)), fix32!(-3.375));
    /// assert_eq!(Fix32::from_int(1 << 16).mul(Fix32::from_int(1 << 15)), Fix32::OVERFLOW);
    /// ```
    pub const fn mul(self, rhs: Self) -> Self {
        match self.checked_mul(rhs) {
            Some(product) => product,
            None => Self::OVERFLOW,
        }
    }

    /// Saturating multiplication. A result with the bit pattern of
    /// [Fix32::OVERFLOW] is mapped to [Fix32::MAX] if the signs of `self` and
    /// `rhs` agree, and to [Fix32::MIN] otherwise.
    pub const fn saturating_mul(self, rhs: Self) -> Self {
        let product = self.mul(rhs);
        if product.is_overflow() {
            Self::saturate_by_sign(self.is_negative() == rhs.is_negative())
        } else {
            product
        }
    }

    /// Returns `self * self`, or [Fix32::OVERFLOW] if the result overflows
    #[inline]
    pub const fn sq(self) -> Self {
        self.mul(self)
    }
}
