use crate::Fix32;

/// Rounds `x >> s` to nearest, ties to even. `s` must be in `1..64`.
const fn shr_round_even(x: u64, s: u32) -> u64 {
    let quo = x >> s;
    let rem = x & ((1 << s) - 1);
    let half = 1 << (s - 1);
    if (rem > half) || ((rem == half) && ((quo & 1) != 0)) {
        quo + 1
    } else {
        quo
    }
}

/// # IEEE-754 binary32 bit conversions
///
/// These work directly on the bit layout of `f32` and do not use any floating
/// point arithmetic, so they give identical results on targets without a
/// floating point unit. Rounding is to nearest with ties to even, the default
/// IEEE-754 rounding mode.
impl Fix32 {
    /// Converts the bits of an `f32` to the nearest `Fix32`. Subnormals and
    /// magnitudes below `2^-33` become zero, infinities, NaNs, and values
    /// outside of the representable range return [Fix32::OVERFLOW].
    ///
    /// ```
    /// use fix32::{fix32, Fix32};
    ///
    /// assert_eq!(Fix32::from_f32_bits(1.5f32.to_bits()), fix32!(1.5));
    /// assert_eq!(Fix32::from_f32_bits((-0.0f32).to_bits()), Fix32::ZERO);
    /// assert_eq!(Fix32::from_f32_bits(f32::INFINITY.to_bits()), Fix32::OVERFLOW);
    /// ```
    pub const fn from_f32_bits(bits: u32) -> Self {
        let negative = (bits >> 31) != 0;
        let exp = ((bits >> 23) & 0xff) as i32;
        let frac = (bits & 0x7f_ffff) as u64;
        if exp == 0xff {
            return Self::OVERFLOW
        }
        // subnormals have no implicit bit and the exponent of the smallest normal
        let (mant, exp) = if exp == 0 {
            (frac, 1)
        } else {
            (frac | (1 << 23), exp)
        };
        // the value is `mant * 2^(exp - 150)`, so the raw value is
        // `mant * 2^(exp - 118)`
        let shift = exp - 118;
        let mag = if shift >= 0 {
            // `mant < 2^24` so a normal value overflows from `shift == 40` on. The
            // only exception is `-2^31` itself, which is the same bit pattern.
            if shift >= 40 {
                return Self::OVERFLOW
            }
            mant << shift
        } else {
            let s = shift.unsigned_abs();
            if s >= 25 {
                // less than half of an epsilon
                0
            } else {
                shr_round_even(mant, s)
            }
        };
        if negative {
            Self::from_raw((mag as i64).wrapping_neg())
        } else {
            Self::from_raw(mag as i64)
        }
    }

    /// Converts `self` to the bits of the nearest `f32`. Every nonzero
    /// `Fix32` is within the normal range of `f32`, and zero becomes positive
    /// zero. This is bit-for-bit the same as `self.to_f32().to_bits()`.
    pub const fn to_f32_bits(self) -> u32 {
        if self.is_zero() {
            return 0
        }
        let sign = (self.is_negative() as u32) << 31;
        let mag = self.raw().unsigned_abs();
        let sig_bits = 64 - mag.leading_zeros();
        // the unbiased exponent is `sig_bits - 1 - 32`
        let mut biased = sig_bits + 94;
        let mut mant = if sig_bits <= 24 {
            mag << (24 - sig_bits)
        } else {
            shr_round_even(mag, sig_bits - 24)
        };
        if mant == (1 << 24) {
            // rounding carried into the next power of two
            mant >>= 1;
            biased += 1;
        }
        sign | (biased << 23) | ((mant as u32) & 0x7f_ffff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_f32_bits_edges() {
        assert_eq!(Fix32::from_f32_bits(0), Fix32::ZERO);
        assert_eq!(Fix32::from_f32_bits(1.0f32.to_bits()), Fix32::ONE);
        assert_eq!(Fix32::from_f32_bits((-1.0f32).to_bits()), Fix32::from_int(-1));
        assert_eq!(Fix32::from_f32_bits(f32::NAN.to_bits()), Fix32::OVERFLOW);
        assert_eq!(
            Fix32::from_f32_bits(f32::NEG_INFINITY.to_bits()),
            Fix32::OVERFLOW
        );
        // 2^31 is just out of range, -2^31 is exactly the minimum
        assert_eq!(Fix32::from_f32_bits(2147483648.0f32.to_bits()), Fix32::OVERFLOW);
        assert_eq!(Fix32::from_f32_bits((-2147483648.0f32).to_bits()), Fix32::MIN);
        // largest `f32` below 2^31
        assert_eq!(
            Fix32::from_f32_bits(2147483520.0f32.to_bits()),
            Fix32::from_int(2147483520i64 as i32)
        );
        // exactly one epsilon, half of an epsilon rounds to even, and more than half
        // rounds up
        assert_eq!(Fix32::from_f32_bits((2.0f32).powi(-32).to_bits()), Fix32::EPSILON);
        assert_eq!(Fix32::from_f32_bits((2.0f32).powi(-33).to_bits()), Fix32::ZERO);
        assert_eq!(
            Fix32::from_f32_bits((1.5f32 * (2.0f32).powi(-32)).to_bits()),
            Fix32::from_raw(2)
        );
        assert_eq!(
            Fix32::from_f32_bits((-1.5f32 * (2.0f32).powi(-33)).to_bits()),
            Fix32::from_raw(-1)
        );
        // subnormals and the smallest normal
        assert_eq!(Fix32::from_f32_bits(1), Fix32::ZERO);
        assert_eq!(Fix32::from_f32_bits(0x0080_0000), Fix32::ZERO);
    }

    #[test]
    fn to_f32_bits_edges() {
        for raw in [
            1,
            -1,
            2,
            3,
            0xff_ffff,
            0x1ff_ffff,
            0x100_0000_8000_0000,
            0x7fff_ff80_0000_0000,
            i64::MAX,
            i64::MIN,
            i64::MIN + 1,
            1 << 32,
            -(1 << 40) - 1,
        ] {
            let x = Fix32::from_raw(raw);
            assert_eq!(x.to_f32_bits(), x.to_f32().to_bits(), "{raw:#x}");
        }
        assert_eq!(Fix32::ZERO.to_f32_bits(), 0);
        assert_eq!(Fix32::MAX.to_f32_bits(), 2147483648.0f32.to_bits());
    }
}
