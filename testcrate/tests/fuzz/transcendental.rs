use fix32::Fix32;
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};

use crate::fuzz::rand_raw;

const EPS: f64 = 1.0 / 4294967296.0;

/// Truncating arithmetic loses a little more accuracy
const LOOSEN: f64 = if cfg!(feature = "no_rounding") {
    16.0
} else {
    1.0
};

/// The bound of the shared `atan2` approximation
const INVERSE_TOL: f64 = if cfg!(feature = "no_rounding") {
    6e-3
} else {
    5e-3
};

/// A uniformly random `Fix32` in `lo..hi`
fn rand_range(rng: &mut Xoshiro128StarStar, lo: f64, hi: f64) -> Fix32 {
    let unit = ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64);
    Fix32::from_f64(lo + ((hi - lo) * unit))
}

#[track_caller]
fn assert_close(res: Fix32, expected: f64, tol: f64, input: Fix32) {
    let err = (res.to_f64() - expected).abs();
    assert!(
        err <= tol,
        "input {input:?} gave {res:?}, expected {expected} (error {err:e})"
    );
}

fn trig(rng: &mut Xoshiro128StarStar) {
    let sin_tol = 5e-5 * LOOSEN;
    let x = rand_range(rng, -100.0, 100.0);
    let f = x.to_f64();
    assert_close(x.sin(), f.sin(), sin_tol, x);
    assert_close(x.cos(), f.cos(), sin_tol, x);
    assert_close(x.sin_taylor(), f.sin(), sin_tol, x);
    let x = rand_range(rng, -3.14159, 3.14159);
    let f = x.to_f64();
    assert_close(x.sin_parabola(true), f.sin(), 2e-3, x);
    assert_close(x.sin_parabola(false), f.sin(), 0.06, x);
    // away from the poles
    let x = rand_range(rng, -1.2, 1.2);
    let f = x.to_f64();
    assert_close(x.tan(), f.tan(), 1e-3, x);

    let x = rand_range(rng, -1000.0, 1000.0);
    let f = x.to_f64();
    assert_close(x.atan(), f.atan(), INVERSE_TOL, x);
    let y = rand_range(rng, -1000.0, 1000.0);
    assert_close(y.atan2(x), y.to_f64().atan2(f), INVERSE_TOL, y);
    let x = rand_range(rng, -1.0, 1.0);
    let f = x.to_f64();
    assert_close(x.asin(), f.asin(), INVERSE_TOL, x);
    assert_close(x.acos(), f.acos(), INVERSE_TOL, x);
}

fn exp_log(rng: &mut Xoshiro128StarStar) {
    let x = rand_range(rng, -22.0, 21.4);
    let expected = x.to_f64().exp();
    assert_close(x.exp(), expected, LOOSEN * ((4.0 * EPS) + (2e-9 * expected)), x);

    let x = rand_range(rng, -32.0, 30.9);
    let expected = x.to_f64().exp2();
    assert_close(x.pow2(), expected, LOOSEN * ((2.0 * EPS) + (1e-9 * expected)), x);

    // any positive value
    let raw = rand_raw(rng).wrapping_abs();
    if raw > 0 {
        let x = Fix32::from_raw(raw);
        let f = x.to_f64();
        assert_close(x.log2(), f.log2(), LOOSEN * 1e-9, x);
        assert_close(x.ln(), f.ln(), LOOSEN * (1e-8 + (1.0 / (raw as f64))), x);
    } else {
        assert!(Fix32::from_raw(raw).log2().is_overflow());
    }

    let base = rand_range(rng, 0.1, 100.0);
    let exp = rand_range(rng, -3.0, 3.0);
    let expected = base.to_f64().powf(exp.to_f64());
    if (1e-3..2e9).contains(&expected) {
        assert_close(base.pow(exp), expected, LOOSEN * ((2.0 * EPS) + (1e-7 * expected)), base);
        assert_eq!(base.spow(exp), base.pow(exp));
    }
}

pub fn transcendental(n: u32, seed: u64) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    for _ in 0..n {
        trig(&mut rng);
        exp_log(&mut rng);
    }
}
