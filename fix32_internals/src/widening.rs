use core::cmp::Ordering;

use crate::const_for;

/// Computes x + y + z and returns the widened result as a tuple, where the
/// first element is the least significant part.
#[inline]
pub const fn widen_add(x: u64, y: u64, z: u64) -> (u64, u64) {
    let (sum, carry0) = x.overflowing_add(y);
    let (sum, carry1) = sum.overflowing_add(z);
    (sum, (carry0 as u64) + (carry1 as u64))
}

/// Computes x * y using only 32 by 32 bit multiplications. This cannot
/// overflow, because it returns the value widened into a tuple, where the
/// first element is the least significant part of the integer and the second
/// is the most significant.
pub const fn widen_mul_u64(x: u64, y: u64) -> (u64, u64) {
    //                [y_hi]  [y_lo]
    //                [x_hi]  [x_lo]
    //              X_______________
    //                [----tmp0----]
    //         [----tmp1----]
    //         [----tmp2----]
    //  [----tmp3----]
    // +____________________________
    //                [----sum0----]
    //  [----sum1----]
    let x_lo = x & 0xffff_ffff;
    let y_lo = y & 0xffff_ffff;
    let x_hi = x >> 32;
    let y_hi = y >> 32;
    let tmp0 = x_lo.wrapping_mul(y_lo);
    let tmp1 = x_lo.wrapping_mul(y_hi);
    let tmp2 = x_hi.wrapping_mul(y_lo);
    let tmp3 = x_hi.wrapping_mul(y_hi);
    // tmp1 and tmp2 straddle the boundary
    let (sum0, carry) = widen_add(tmp0, tmp1 << 32, tmp2 << 32);
    let sum1 = tmp3
        .wrapping_add(tmp1 >> 32)
        .wrapping_add(tmp2 >> 32)
        .wrapping_add(carry);
    (sum0, sum1)
}

/// A 128 bit two's complement signed integer made of a signed high half and an
/// unsigned low half, with value `hi * 2^64 + lo`. This is scratch storage for
/// the multiplication, division, and interpolation routines of `Fix32` and
/// does not use the native 128 bit types.
///
/// None of the arithmetic here detects overflow, callers keep results within
/// the range implied by their own fixed point semantics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WideInt {
    hi: i64,
    lo: u64,
}

impl WideInt {
    pub const ZERO: Self = Self { hi: 0, lo: 0 };

    #[inline]
    pub const fn from_halves(hi: i64, lo: u64) -> Self {
        Self { hi, lo }
    }

    /// Sign extends `x`
    #[inline]
    pub const fn from_i64(x: i64) -> Self {
        Self {
            hi: x >> 63,
            lo: x as u64,
        }
    }

    #[inline]
    pub const fn hi(self) -> i64 {
        self.hi
    }

    #[inline]
    pub const fn lo(self) -> u64 {
        self.lo
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.hi < 0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        (self.hi == 0) && (self.lo == 0)
    }

    /// Two's complement ordering of the full 128 bit values
    pub const fn const_cmp(self, rhs: Self) -> Ordering {
        if self.hi < rhs.hi {
            Ordering::Less
        } else if self.hi > rhs.hi {
            Ordering::Greater
        } else if self.lo < rhs.lo {
            Ordering::Less
        } else if self.lo > rhs.lo {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    pub const fn wrapping_add(self, rhs: Self) -> Self {
        let (lo, carry) = self.lo.overflowing_add(rhs.lo);
        let hi = self.hi.wrapping_add(rhs.hi).wrapping_add(carry as i64);
        Self { hi, lo }
    }

    pub const fn wrapping_neg(self) -> Self {
        let lo = (!self.lo).wrapping_add(1);
        let hi = (!self.hi).wrapping_add((lo == 0) as i64);
        Self { hi, lo }
    }

    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        let (lo, borrow) = self.lo.overflowing_sub(rhs.lo);
        let hi = self.hi.wrapping_sub(rhs.hi).wrapping_sub(borrow as i64);
        Self { hi, lo }
    }

    /// Shifts left by `s` if `s` is positive, and arithmetically right by
    /// `-s` if it is negative. Shifting by 64 or more in either direction
    /// saturates to zero instead of acting like a general 128 bit shift.
    pub const fn shift(self, s: i32) -> Self {
        if s == 0 {
            self
        } else if s > 0 {
            if s >= 64 {
                return Self::ZERO
            }
            Self {
                hi: (self.hi << s) | ((self.lo >> (64 - s)) as i64),
                lo: self.lo << s,
            }
        } else {
            let s = s.unsigned_abs();
            if s >= 64 {
                return Self::ZERO
            }
            Self {
                hi: self.hi >> s,
                lo: (self.lo >> s) | ((self.hi as u64) << (64 - s)),
            }
        }
    }

    /// Returns the absolute value as an unsigned `(lo, hi)` tuple. The
    /// minimum value maps to 2^127 correctly.
    const fn unsigned_abs(self) -> (u64, u64) {
        let x = if self.is_negative() {
            self.wrapping_neg()
        } else {
            self
        };
        (x.lo, x.hi as u64)
    }

    /// The full product of two `i64`s, computed on magnitudes and resigned
    pub const fn mul_i64(x: i64, y: i64) -> Self {
        let (lo, hi) = widen_mul_u64(x.unsigned_abs(), y.unsigned_abs());
        let res = Self { hi: hi as i64, lo };
        if (x ^ y) < 0 {
            res.wrapping_neg()
        } else {
            res
        }
    }

    /// Multiplies `self` by `y` modulo 2^128, computed on magnitudes and
    /// resigned
    pub const fn wrapping_mul_i64(self, y: i64) -> Self {
        let neg = self.is_negative() != (y < 0);
        let (lo, hi) = self.unsigned_abs();
        let y = y.unsigned_abs();
        let (lo, carry) = widen_mul_u64(lo, y);
        let hi = hi.wrapping_mul(y).wrapping_add(carry);
        let res = Self { hi: hi as i64, lo };
        if neg {
            res.wrapping_neg()
        } else {
            res
        }
    }

    /// Divides `self` by `y`, rounding toward zero. Returns `None` if `y == 0`.
    /// The quotient of the minimum value and `-1` wraps.
    pub const fn div_i64(self, y: i64) -> Option<Self> {
        if y == 0 {
            return None
        }
        let neg = self.is_negative() != (y < 0);
        let (lo, hi) = self.unsigned_abs();
        let div = y.unsigned_abs();
        let quo_hi = hi / div;
        let mut rem = hi % div;
        let mut quo_lo = 0u64;
        // restoring long division over the low half, `rem < div <= 2^63` keeps the
        // doubled remainder within 64 bits
        const_for!(i in {0..64usize}.rev() {
            rem = (rem << 1) | ((lo >> i) & 1);
            quo_lo <<= 1;
            if rem >= div {
                rem -= div;
                quo_lo |= 1;
            }
        });
        let res = Self {
            hi: quo_hi as i64,
            lo: quo_lo,
        };
        if neg {
            Some(res.wrapping_neg())
        } else {
            Some(res)
        }
    }
}

impl PartialOrd for WideInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WideInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.const_cmp(*other)
    }
}

#[cfg(test)]
mod tests {
    use rand_xoshiro::{
        rand_core::{RngCore, SeedableRng},
        Xoshiro128StarStar,
    };

    use super::*;

    fn to_i128(x: WideInt) -> i128 {
        ((x.hi() as i128) << 64) | (x.lo() as i128)
    }

    fn from_i128(x: i128) -> WideInt {
        WideInt::from_halves((x >> 64) as i64, x as u64)
    }

    /// Random values with a bias toward small and extreme magnitudes
    fn rand_i64(rng: &mut Xoshiro128StarStar) -> i64 {
        let x = rng.next_u64() as i64;
        match rng.next_u32() % 4 {
            0 => x >> (rng.next_u32() % 64),
            1 => [0, 1, -1, i64::MIN, i64::MAX][(rng.next_u32() % 5) as usize],
            _ => x,
        }
    }

    #[test]
    fn widen_mul_u64_matches_u128() {
        let mut rng = Xoshiro128StarStar::seed_from_u64(0);
        for _ in 0..10000 {
            let x = rng.next_u64();
            let y = rng.next_u64();
            let (lo, hi) = widen_mul_u64(x, y);
            let expected = (x as u128) * (y as u128);
            assert_eq!(((hi as u128) << 64) | (lo as u128), expected);
        }
        assert_eq!(widen_mul_u64(u64::MAX, u64::MAX), (1, u64::MAX - 1));
    }

    #[test]
    fn wide_int_fuzz() {
        let mut rng = Xoshiro128StarStar::seed_from_u64(1);
        for _ in 0..10000 {
            let x = rand_i64(&mut rng);
            let y = rand_i64(&mut rng);
            let z = rand_i64(&mut rng);
            let wx = WideInt::from_i64(x);
            assert_eq!(to_i128(wx), x as i128);
            let prod = WideInt::mul_i64(x, y);
            assert_eq!(to_i128(prod), (x as i128) * (y as i128));
            let a = from_i128(((x as i128) << 40) ^ (y as i128));
            let b = from_i128((y as i128).wrapping_mul(z as i128));
            let (ia, ib) = (to_i128(a), to_i128(b));
            assert_eq!(to_i128(a.wrapping_add(b)), ia.wrapping_add(ib));
            assert_eq!(to_i128(a.wrapping_sub(b)), ia.wrapping_sub(ib));
            assert_eq!(to_i128(a.wrapping_neg()), ia.wrapping_neg());
            assert_eq!(a.cmp(&b), ia.cmp(&ib));
            assert_eq!(a < b, ia < ib);
            assert_eq!(a >= b, ia >= ib);
            assert_eq!(
                to_i128(a.wrapping_mul_i64(z)),
                ia.wrapping_mul(z as i128)
            );
            match a.div_i64(z) {
                Some(q) => assert_eq!(to_i128(q), ia.wrapping_div(z as i128)),
                None => assert_eq!(z, 0),
            }
            let s = (rng.next_u32() % 129) as i32 - 64;
            let expected = if s >= 64 || s <= -64 {
                0
            } else if s >= 0 {
                ia << s
            } else {
                ia >> (-s)
            };
            assert_eq!(to_i128(a.shift(s)), expected);
        }
    }

    #[test]
    fn wide_int_edges() {
        let min = WideInt::from_halves(i64::MIN, 0);
        assert_eq!(min.wrapping_neg(), min);
        assert_eq!(
            min.div_i64(-1),
            Some(min)
        );
        assert_eq!(WideInt::from_i64(5).div_i64(0), None);
        assert_eq!(WideInt::from_i64(-7).div_i64(2), Some(WideInt::from_i64(-3)));
        assert_eq!(WideInt::from_i64(-1).shift(-64), WideInt::ZERO);
        assert_eq!(WideInt::from_i64(-1).shift(-63), WideInt::from_i64(-1));
        assert_eq!(
            WideInt::from_i64(1).shift(63),
            WideInt::from_halves(0, 1 << 63)
        );
        assert!(WideInt::from_i64(-1) < WideInt::ZERO);
        assert!(WideInt::from_halves(0, u64::MAX) > WideInt::from_i64(i64::MAX));
    }
}
