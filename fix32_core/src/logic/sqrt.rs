use crate::Fix32;

/// # Square root
impl Fix32 {
    /// Returns the square root of `self`, rounded to nearest. This uses the
    /// digit-by-digit binary method, split into two passes so that no
    /// intermediate needs more than 64 bits.
    ///
    /// For a negative `self`, this returns `-sqrt(-self)` instead of
    /// signalling a domain error.
    ///
    /// ```
    /// use fix32::{fix32, Fix32};
    ///
    /// assert_eq!(Fix32::from_int(16).sqrt(), Fix32::from_int(4));
    /// assert_eq!(fix32!(2.25).sqrt(), fix32!(1.5));
    /// assert_eq!(Fix32::from_int(-9).sqrt(), Fix32::from_int(-3));
    /// ```
    pub const fn sqrt(self) -> Self {
        let negative = self.is_negative();
        let mut num = self.raw().unsigned_abs();
        let mut res = 0u64;
        let mut bit = 1u64 << 62;
        while bit > num {
            bit >>= 2;
        }
        // the first pass takes the square root of the raw integer, the second pass
        // continues with the remainder shifted up by 32 bits for the fraction
        let mut pass = 0;
        while pass < 2 {
            while bit != 0 {
                if num >= res + bit {
                    num -= res + bit;
                    res = (res >> 1) + bit;
                } else {
                    res >>= 1;
                }
                bit >>= 2;
            }
            if pass == 0 {
                if num > (u32::MAX as u64) {
                    // `num` is too large to be shifted left by 32, so add one half to the
                    // result manually and adjust with
                    // `num = a - (res + 0.5)^2 = num + res^2 - (res + 0.5)^2 = num - res - 0.5`
                    num -= res;
                    num = (num << 32).wrapping_sub(0x8000_0000);
                    res = (res << 32) + 0x8000_0000;
                } else {
                    num <<= 32;
                    res <<= 32;
                }
                bit = 1 << 30;
            }
            pass += 1;
        }
        // round up if the next bit would be set
        if !cfg!(feature = "no_rounding") && (num > res) {
            res += 1;
        }
        if negative {
            Self::from_raw((res as i64).wrapping_neg())
        } else {
            Self::from_raw(res as i64)
        }
    }
}
