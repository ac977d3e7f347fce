use core::str::FromStr;

use fix32_internals::SerdeError;

use crate::Fix32;

impl FromStr for Fix32 {
    type Err = SerdeError;

    /// Parses with [Fix32::from_bytes]
    ///
    /// ```
    /// use fix32::{fix32, Fix32};
    ///
    /// let x: Fix32 = "-3.75".parse().unwrap();
    /// assert_eq!(x, fix32!(-3.75));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes())
    }
}

macro_rules! fix32_from {
    ($($int:ident)*) => {
        $(
            impl From<$int> for Fix32 {
                /// Converts the integer exactly
                fn from(x: $int) -> Self {
                    Self::from_int(x as i32)
                }
            }
        )*
    };
}

fix32_from!(i8 u8 i16 u16 i32);

impl TryFrom<i64> for Fix32 {
    type Error = SerdeError;

    /// Converts the integer exactly, or returns `Overflow` if it is not in
    /// the range of `i32`
    fn try_from(x: i64) -> Result<Self, Self::Error> {
        match i32::try_from(x) {
            Ok(x) => Ok(Self::from_int(x)),
            Err(_) => Err(SerdeError::Overflow),
        }
    }
}
