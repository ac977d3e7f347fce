use fix32::{Fix32, SerdeError, MAX_STR_LEN};
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};

use crate::fuzz::rand_fix32;

/// Maximum raw difference after formatting with `decimals` and parsing back.
/// Formatting rounds to the last digit, and parsing ignores a ninth digit.
fn tolerance(decimals: u32) -> u64 {
    ((1u64 << 32) / (2 * 10u64.pow(decimals))) + 50
}

pub fn string(n: u32, seed: u64) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    let mut buf = [0u8; MAX_STR_LEN];
    for _ in 0..n {
        let x = rand_fix32(&mut rng);
        let decimals = rng.next_u32() % 10;
        let len = x.to_u8_slice(&mut buf, decimals as usize).unwrap();
        let s = core::str::from_utf8(&buf[..len]).unwrap();
        assert_eq!(s, format!("{:.*}", decimals as usize, x));
        assert_eq!(s.contains('.'), decimals != 0);
        match Fix32::from_bytes(s.as_bytes()) {
            Ok(y) => {
                assert!(
                    x.raw().abs_diff(y.raw()) <= tolerance(decimals),
                    "{x:?} {s} {y:?}"
                );
                // the string of the parsed value is the same, except for a negative zero.
                // Truncation in both directions can lose the last digit.
                let mut buf2 = [0u8; MAX_STR_LEN];
                let len2 = y.to_u8_slice(&mut buf2, decimals as usize).unwrap();
                if cfg!(not(feature = "no_rounding")) && (decimals < 9) && !y.is_zero() {
                    assert_eq!(&buf2[..len2], s.as_bytes());
                }
            }
            Err(e) => {
                // only rounding up to `2^31` cannot be parsed back
                assert_eq!(e, SerdeError::Overflow);
                assert!(s.starts_with("2147483648"), "{s}");
            }
        }
        // a smaller buffer is always an error
        assert_eq!(
            x.to_u8_slice(&mut buf[..(len - 1)], decimals as usize),
            Err(SerdeError::BufferTooSmall)
        );
    }
}
