//! Common serialization utilities

use core::fmt;

use const_fn::const_fn;

/// A serialization or deserialization error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SerdeError {
    /// The input is empty or only whitespace
    Empty,
    /// The input is missing the integer part, even if it has a sign or
    /// fraction
    EmptyInteger,
    /// There is an unrecognized character. Only leading whitespace, one sign,
    /// `0..=9`, a single `.` or `,` decimal separator, and trailing whitespace
    /// are allowed.
    InvalidChar,
    /// A requested number of decimal places is not in the range `0..=9`
    InvalidDecimals,
    /// The destination buffer cannot hold the representation
    BufferTooSmall,
    /// The value represented by the string cannot fit in a `Fix32`. The
    /// integer part can have at most 10 digits and a magnitude of at most
    /// 2147483647.
    Overflow,
}

impl fmt::Display for SerdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SerdeError {}

/// Powers of ten used for the decimal digits of the fraction. Nine decimals
/// already exceed the resolution of the 32 bit fraction.
pub const DECIMAL_SCALES: [u32; 10] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// The maximum number of bytes `Fix32::to_u8_slice` can write: a sign, 10
/// integer digits, a separator, and 9 decimals.
pub const MAX_STR_LEN: usize = 21;

/// Writes the decimal digits of `value` into `dst` from the highest digit
/// `scale` down, returning the number of bytes written. If `skip` is set,
/// leading zeros are skipped except for the last digit.
#[const_fn(cfg(feature = "const_support"))]
pub const fn digits_to_slice(
    dst: &mut [u8],
    mut scale: u32,
    mut value: u32,
    mut skip: bool,
) -> Result<usize, SerdeError> {
    let mut len = 0;
    while scale != 0 {
        let digit = value / scale;
        if !skip || (digit != 0) || (scale == 1) {
            skip = false;
            if len >= dst.len() {
                return Err(SerdeError::BufferTooSmall)
            }
            dst[len] = b'0' + (digit as u8);
            len += 1;
            value %= scale;
        }
        scale /= 10;
    }
    Ok(len)
}

/// If `b` is an ASCII whitespace character
pub const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

#[test]
fn decimal_scales() {
    for i in 0..10 {
        assert_eq!(DECIMAL_SCALES[i], 10u32.pow(i as u32));
    }
}

#[test]
fn digits() {
    let mut buf = [0u8; 10];
    assert_eq!(digits_to_slice(&mut buf, 1_000_000_000, 1234, true), Ok(4));
    assert_eq!(&buf[..4], b"1234");
    assert_eq!(digits_to_slice(&mut buf, 1_000_000_000, 0, true), Ok(1));
    assert_eq!(&buf[..1], b"0");
    assert_eq!(digits_to_slice(&mut buf, 100, 7, false), Ok(3));
    assert_eq!(&buf[..3], b"007");
    assert_eq!(
        digits_to_slice(&mut buf[..2], 100, 7, false),
        Err(SerdeError::BufferTooSmall)
    );
}
