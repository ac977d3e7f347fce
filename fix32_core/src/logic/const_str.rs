use const_fn::const_fn;
use fix32_internals::*;
use SerdeError::*;

use crate::Fix32;

/// The largest integer part that `from_bytes` accepts
const MAX_INT_PART: u64 = i32::MAX as u64;
/// The fraction is parsed up to this many digits, further digits are ignored
const MAX_FRAC_DIGITS: usize = 8;

/// # Decimal string representation conversion
impl Fix32 {
    /// Writes the decimal representation of `self` into `dst`, with exactly
    /// `decimals` digits after the decimal point (and no decimal point if
    /// `decimals == 0`). The value is rounded to the last digit. Returns the
    /// number of bytes written, which is at most
    /// [MAX_STR_LEN](crate::MAX_STR_LEN).
    ///
    /// # Errors
    ///
    /// Returns `InvalidDecimals` if `decimals > 9` and `BufferTooSmall` if
    /// `dst` cannot hold the representation.
    ///
    /// ```
    /// use fix32::{fix32, Fix32};
    ///
    /// let mut buf = [0u8; 32];
    /// let len = fix32!(-12.375).to_u8_slice(&mut buf, 2).unwrap();
    /// assert_eq!(&buf[..len], b"-12.38");
    /// let len = Fix32::from_int(7).to_u8_slice(&mut buf, 0).unwrap();
    /// assert_eq!(&buf[..len], b"7");
    /// ```
    #[const_fn(cfg(feature = "const_support"))]
    pub const fn to_u8_slice(self, dst: &mut [u8], decimals: usize) -> Result<usize, SerdeError> {
        if decimals >= DECIMAL_SCALES.len() {
            return Err(InvalidDecimals)
        }
        let mut len = 0;
        if self.is_negative() {
            if dst.is_empty() {
                return Err(BufferTooSmall)
            }
            dst[0] = b'-';
            len = 1;
        }
        let mag = self.raw().unsigned_abs();
        // at most `2^31 + 1` after the carry
        let mut int_part = (mag >> FRAC_BITS) as u32;
        let scale = DECIMAL_SCALES[decimals];
        let mut frac_part = Self::from_raw((mag & (FRAC_MASK as u64)) as i64)
            .mul(Self::from_raw(scale as i64))
            .raw() as u32;
        if frac_part >= scale {
            // rounding carried into the integer
            int_part += 1;
            frac_part -= scale;
        }
        match digits_to_slice(dst.split_at_mut(len).1, 1_000_000_000, int_part, true) {
            Ok(n) => len += n,
            Err(e) => return Err(e),
        }
        if scale != 1 {
            if len >= dst.len() {
                return Err(BufferTooSmall)
            }
            dst[len] = b'.';
            len += 1;
            match digits_to_slice(dst.split_at_mut(len).1, scale / 10, frac_part, false) {
                Ok(n) => len += n,
                Err(e) => return Err(e),
            }
        }
        Ok(len)
    }

    /// Parses a decimal number. Leading whitespace is skipped, then there can
    /// be a `+` or `-` sign, 1 to 10 integer digits, and optionally a `.` or
    /// `,` followed by fractional digits, of which only the first 8 are used.
    /// Anything after that must be digits or whitespace. The integer part can
    /// be at most 2147483647, with the exception of exactly `-2147483648`.
    ///
    /// # Errors
    ///
    /// `Empty` if there is nothing but whitespace, `EmptyInteger` if there are
    /// no integer digits, `InvalidChar` for unexpected characters, and
    /// `Overflow` if the value does not fit.
    ///
    /// ```
    /// use fix32::{Fix32, SerdeError};
    ///
    /// assert_eq!(Fix32::from_bytes(b"  -2.5"), Ok(Fix32::from_raw(-5 << 31)));
    /// assert_eq!(Fix32::from_bytes(b"3,25 "), Ok(Fix32::from_raw(13 << 30)));
    /// assert_eq!(Fix32::from_bytes(b".5"), Err(SerdeError::EmptyInteger));
    /// assert_eq!(Fix32::from_bytes(b"2147483648"), Err(SerdeError::Overflow));
    /// ```
    pub const fn from_bytes(src: &[u8]) -> Result<Self, SerdeError> {
        let mut i = 0;
        while (i < src.len()) && is_space(src[i]) {
            i += 1;
        }
        if i == src.len() {
            return Err(Empty)
        }
        let negative = src[i] == b'-';
        if (src[i] == b'-') || (src[i] == b'+') {
            i += 1;
        }

        let mut int_part = 0u64;
        let mut count = 0;
        while (i < src.len()) && src[i].is_ascii_digit() {
            count += 1;
            if count > 10 {
                return Err(Overflow)
            }
            int_part = (int_part * 10) + ((src[i] - b'0') as u64);
            i += 1;
        }
        if count == 0 {
            return Err(EmptyInteger)
        }
        if int_part > (MAX_INT_PART + (negative as u64)) {
            return Err(Overflow)
        }
        let mut mag = int_part << FRAC_BITS;

        if (i < src.len()) && ((src[i] == b'.') || (src[i] == b',')) {
            i += 1;
            let mut frac_part = 0i64;
            let mut scale = 1i64;
            let mut digits = 0;
            while (i < src.len()) && src[i].is_ascii_digit() && (digits < MAX_FRAC_DIGITS) {
                scale *= 10;
                frac_part = (frac_part * 10) + ((src[i] - b'0') as i64);
                digits += 1;
                i += 1;
            }
            // the ratio of the raw values is the fraction, and it is always below one
            mag += Self::from_raw(frac_part)
                .div(Self::from_raw(scale))
                .raw() as u64;
        }

        while i < src.len() {
            if !(src[i].is_ascii_digit() || is_space(src[i])) {
                return Err(InvalidChar)
            }
            i += 1;
        }

        if negative {
            if mag > (1 << 63) {
                return Err(Overflow)
            }
            Ok(Self::from_raw((mag as i64).wrapping_neg()))
        } else {
            Ok(Self::from_raw(mag as i64))
        }
    }

    /// The same as [Fix32::from_bytes] except that [Fix32::OVERFLOW] is
    /// returned on any error
    pub const fn from_str_sentinel(s: &str) -> Self {
        match Self::from_bytes(s.as_bytes()) {
            Ok(x) => x,
            Err(_) => Self::OVERFLOW,
        }
    }
}
