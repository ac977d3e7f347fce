use fix32::Fix32;
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};

use crate::fuzz::rand_fix32;

/// Reference conversion through `f64`, which represents every `f32` scaled by
/// `2^32` exactly
fn f32_to_raw(bits: u32) -> i64 {
    let f = f32::from_bits(bits);
    if !f.is_finite() {
        return i64::MIN
    }
    let t = ((f as f64) * 4294967296.0).round_ties_even();
    if (t >= 9223372036854775808.0) || (t < -9223372036854775808.0) {
        i64::MIN
    } else {
        t as i64
    }
}

/// Random `f32` bits, with the exponent usually in the range that `Fix32` can
/// represent
fn rand_f32_bits(rng: &mut Xoshiro128StarStar) -> u32 {
    let bits = rng.next_u32();
    if (bits & 1) == 0 {
        bits
    } else {
        let exp = 88 + (rng.next_u32() % 72);
        (bits & 0x807f_ffff) | (exp << 23)
    }
}

pub fn ieee(n: u32, seed: u64) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    for _ in 0..n {
        let bits = rand_f32_bits(&mut rng);
        assert_eq!(
            Fix32::from_f32_bits(bits).raw(),
            f32_to_raw(bits),
            "{bits:#010x}"
        );
        let x = rand_fix32(&mut rng);
        assert_eq!(x.to_f32_bits(), x.to_f32().to_bits(), "{x:?}");
        // every `f32` converted from a `Fix32` is in range, and converting back is
        // within half an ulp of the `f32`
        let back = Fix32::from_f32_bits(x.to_f32_bits());
        if !x.is_zero() && (x.raw().unsigned_abs() < (1 << 63) - (1 << 39)) {
            let ulp = 1u64 << (x.raw().unsigned_abs().ilog2().saturating_sub(23));
            assert!(back.raw().abs_diff(x.raw()) <= ulp, "{x:?}");
        }
    }
}
