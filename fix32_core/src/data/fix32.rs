use core::fmt;

use fix32_internals::*;

/// A Q31.32 fixed point number. The value is `raw / 2^32`, where `raw` is a
/// signed two's complement `i64`, giving a range of `[-2^31, 2^31 - 2^-32]`
/// with a resolution of `2^-32`.
///
/// The raw value `i64::MIN` has two meanings: it is both the true minimum
/// value and the [Fix32::OVERFLOW] sentinel that the fallible functions return
/// on overflow or division by zero. The two cannot be told apart by value, so
/// only the results of functions that can never legitimately produce the
/// minimum should be treated as errors with [Fix32::is_overflow]. Use the
/// `checked_*` functions when overflow must be distinguished.
///
/// The ordering, equality, and hashing of `Fix32` are those of the raw value,
/// which agrees with the numeric ordering.
///
/// ```
/// use fix32::{fix32, Fix32};
///
/// let x = Fix32::from_int(3);
/// let y = fix32!(0.25);
/// assert_eq!(x.mul(y), fix32!(0.75));
/// assert_eq!(x.div(Fix32::ZERO), Fix32::OVERFLOW);
/// assert_eq!(x.checked_div(Fix32::ZERO), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Fix32 {
    raw: i64,
}

/// # Constants and basic functions
impl Fix32 {
    /// Zero
    pub const ZERO: Self = Self::from_raw(0);
    /// One
    pub const ONE: Self = Self::from_raw(RAW_ONE);
    /// The smallest positive value, `2^-32`
    pub const EPSILON: Self = Self::from_raw(1);
    /// The maximum value, `2^31 - 2^-32`
    pub const MAX: Self = Self::from_raw(i64::MAX);
    /// The minimum value, `-2^31`. This is the same as [Fix32::OVERFLOW].
    pub const MIN: Self = Self::from_raw(i64::MIN);
    /// The value returned by functions on overflow. This is the same as
    /// [Fix32::MIN].
    pub const OVERFLOW: Self = Self::from_raw(i64::MIN);
    /// Pi, truncated
    pub const PI: Self = Self::from_raw(13493037704);
    /// Pi divided by two
    pub const HALF_PI: Self = Self::from_raw(6746518852);
    /// Euler's number
    pub const E: Self = Self::from_raw(11674931555);

    /// Creates a `Fix32` from its raw representation
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self { raw }
    }

    /// Returns the raw representation, which is `self * 2^32`
    #[inline]
    pub const fn raw(self) -> i64 {
        self.raw
    }

    /// Reinterprets the bits of `bits` as the raw representation
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self::from_raw(bits as i64)
    }

    /// Returns the raw representation reinterpreted as an unsigned integer
    #[inline]
    pub const fn to_bits(self) -> u64 {
        self.raw as u64
    }

    /// If `self` has the bit pattern of [Fix32::OVERFLOW]. Note that this is
    /// also true for [Fix32::MIN].
    #[inline]
    pub const fn is_overflow(self) -> bool {
        self.raw == Self::OVERFLOW.raw
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.raw == 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.raw < 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.raw > 0
    }

    /// Returns the absolute value. The absolute value of [Fix32::MIN] is
    /// [Fix32::MIN].
    #[inline]
    pub const fn abs(self) -> Self {
        Self::from_raw(self.raw.wrapping_abs())
    }

    /// Rounds toward negative infinity
    #[inline]
    pub const fn floor(self) -> Self {
        Self::from_raw(self.raw & !FRAC_MASK)
    }

    /// Rounds toward positive infinity. Returns [Fix32::OVERFLOW] if the
    /// result is greater than [Fix32::MAX].
    pub const fn ceil(self) -> Self {
        if (self.raw & FRAC_MASK) == 0 {
            self
        } else {
            self.floor().add(Self::ONE)
        }
    }

    /// Returns only the fractional bits, which is `self - self.floor()`
    #[inline]
    pub const fn fract(self) -> Self {
        Self::from_raw(self.raw & FRAC_MASK)
    }

    #[inline]
    pub const fn min(self, rhs: Self) -> Self {
        if self.raw < rhs.raw {
            self
        } else {
            rhs
        }
    }

    #[inline]
    pub const fn max(self, rhs: Self) -> Self {
        if self.raw > rhs.raw {
            self
        } else {
            rhs
        }
    }

    /// Returns `self` limited to `lo..=hi`. Unlike `Ord::clamp`, this does not
    /// panic when `lo > hi`, in which case `hi` wins.
    #[inline]
    pub const fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }
}

impl fmt::Display for Fix32 {
    /// Decimal formatting with the precision of the formatter as the number of
    /// decimals, defaulting to 9. Precisions above 9 are treated as 9.
    ///
    /// ```
    /// use fix32::{fix32, Fix32};
    ///
    /// assert_eq!(format!("{}", fix32!(1.25)), "1.250000000");
    /// assert_eq!(format!("{:.2}", Fix32::PI), "3.14");
    /// assert_eq!(format!("{:>8.1}", fix32!(-0.5)), "    -0.5");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0u8; MAX_STR_LEN];
        let decimals = f.precision().unwrap_or(9).min(9);
        let len = self.to_u8_slice(&mut buf, decimals).map_err(|_| fmt::Error)?;
        // the sign is handled by `pad_integral`
        let start = self.is_negative() as usize;
        let digits = core::str::from_utf8(&buf[start..len]).map_err(|_| fmt::Error)?;
        f.pad_integral(!self.is_negative(), "", digits)
    }
}

impl fmt::Debug for Fix32 {
    /// The decimal value followed by the raw value in hexadecimal
    ///
    /// ```
    /// use fix32::{fix32, Fix32};
    ///
    /// assert_eq!(format!("{:?}", fix32!(-1.5)), "-1.500000000 (0xfffffffe80000000)");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self} ({:#018x})", self.raw)
    }
}

macro_rules! impl_fmt {
    ($($ty:ident)*) => {
        $(
            /// Forwards to the corresponding impl of the raw value
            impl fmt::$ty for Fix32 {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    fmt::$ty::fmt(&self.raw, f)
                }
            }
        )*
    };
}

impl_fmt!(LowerHex UpperHex Octal Binary);
