use fix32::Fix32;
use rand_xoshiro::{rand_core::RngCore, Xoshiro128StarStar};

mod arith;
mod ieee;
mod string;
mod transcendental;

pub use arith::arith;
pub use ieee::ieee;
pub use string::string;
pub use transcendental::transcendental;

/// Returns a random raw value with a random number of significant bits, so
/// that small magnitudes and the edges of the range are well covered
pub fn rand_raw(rng: &mut Xoshiro128StarStar) -> i64 {
    let x = rng.next_u64() as i64;
    let special = rng.next_u32();
    match special % 32 {
        0 => i64::MAX,
        1 => i64::MIN,
        2 => 0,
        3 => (special as i64) >> 5,
        _ => x >> (rng.next_u32() % 64),
    }
}

pub fn rand_fix32(rng: &mut Xoshiro128StarStar) -> Fix32 {
    Fix32::from_raw(rand_raw(rng))
}

/// Returns `x` if it is in the range of the raw value
pub fn fits(x: i128) -> Option<i64> {
    i64::try_from(x).ok()
}

/// `x / 2^32` rounded to nearest, ties away from zero
pub fn round_shr32(x: i128) -> i128 {
    let mag = (x.unsigned_abs() + (1 << 31)) >> 32;
    if x < 0 {
        -(mag as i128)
    } else {
        mag as i128
    }
}
