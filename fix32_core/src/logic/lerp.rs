use fix32_internals::*;

use crate::Fix32;

/// `a * (1 - t) + b * t` where `t = frac / 2^bits`
const fn lerp(a: i64, b: i64, frac: i64, bits: i32) -> Fix32 {
    let sum = WideInt::mul_i64(a, (1i64 << bits) - frac).wrapping_add(WideInt::mul_i64(b, frac));
    // the result is between `a` and `b`, so it always fits in the low half
    Fix32::from_raw(sum.shift(-bits).lo() as i64)
}

/// # Linear interpolation
///
/// These return `self * (1 - t) + rhs * t`, where the weight `t` is an
/// unsigned fraction with 8, 16, or 32 bits. The intermediate products are
/// computed in full width, so they never overflow. The results are rounded
/// toward negative infinity.
///
/// ```
/// use fix32::{fix32, Fix32};
///
/// let a = Fix32::ZERO;
/// let b = Fix32::from_int(100);
/// assert_eq!(a.lerp8(b, 64), fix32!(25));
/// assert_eq!(a.lerp16(b, 0x8000), fix32!(50));
/// assert_eq!(b.lerp32(a, 0xc000_0000), fix32!(25));
/// ```
impl Fix32 {
    pub const fn lerp8(self, rhs: Self, frac: u8) -> Self {
        lerp(self.raw(), rhs.raw(), frac as i64, 8)
    }

    pub const fn lerp16(self, rhs: Self, frac: u16) -> Self {
        lerp(self.raw(), rhs.raw(), frac as i64, 16)
    }

    pub const fn lerp32(self, rhs: Self, frac: u32) -> Self {
        lerp(self.raw(), rhs.raw(), frac as i64, 32)
    }
}
