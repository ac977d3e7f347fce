use fix32::Fix32;
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};

use crate::fuzz::{fits, rand_fix32, round_shr32};

const ROUNDING: bool = !cfg!(feature = "no_rounding");

fn isqrt(x: u128) -> u128 {
    if x < 2 {
        return x
    }
    let mut r = 1u128 << ((128 - x.leading_zeros()).div_ceil(2));
    loop {
        let next = (r + (x / r)) / 2;
        if next >= r {
            return r
        }
        r = next;
    }
}

/// `round(sqrt(|x| * 2^32))` with the sign of `x`
fn exact_sqrt(x: i64) -> i64 {
    let n = (x.unsigned_abs() as u128) << 32;
    let mut r = isqrt(n);
    if ROUNDING && ((n - (r * r)) > r) {
        r += 1;
    }
    if x < 0 {
        -(r as i64)
    } else {
        r as i64
    }
}

/// `(a << 32) / b` rounded to nearest with ties away from zero, or truncated
fn exact_div(a: i64, b: i64) -> i128 {
    let n = (a.unsigned_abs() as u128) << 32;
    let d = b.unsigned_abs() as u128;
    let q = if ROUNDING {
        ((2 * n) + d) / (2 * d)
    } else {
        n / d
    };
    if (a < 0) != (b < 0) {
        -(q as i128)
    } else {
        q as i128
    }
}

fn saturated(positive: bool) -> Fix32 {
    if positive {
        Fix32::MAX
    } else {
        Fix32::MIN
    }
}

#[track_caller]
fn sum_step(x: Fix32, y: Fix32) {
    let (a, b) = (x.raw() as i128, y.raw() as i128);
    let sum = a + b;
    match fits(sum) {
        Some(sum) => {
            assert_eq!(x.checked_add(y), Some(Fix32::from_raw(sum)));
            assert_eq!(x.add(y), Fix32::from_raw(sum));
            if sum != i64::MIN {
                assert_eq!(x.saturating_add(y), Fix32::from_raw(sum));
            }
        }
        None => {
            assert_eq!(x.checked_add(y), None);
            assert!(x.add(y).is_overflow());
            assert_eq!(x.saturating_add(y), saturated(sum > 0));
        }
    }
    let diff = a - b;
    match fits(diff) {
        Some(diff) => {
            assert_eq!(x.checked_sub(y), Some(Fix32::from_raw(diff)));
            assert_eq!(x - y, Fix32::from_raw(diff));
            if diff != i64::MIN {
                assert_eq!(x.saturating_sub(y), Fix32::from_raw(diff));
            }
        }
        None => {
            assert_eq!(x.checked_sub(y), None);
            assert_eq!(x.saturating_sub(y), saturated(diff > 0));
        }
    }
}

#[track_caller]
fn mul_step(x: Fix32, y: Fix32) {
    let product = (x.raw() as i128) * (y.raw() as i128);
    let exact = if ROUNDING {
        round_shr32(product)
    } else {
        product >> 32
    };
    match fits(exact) {
        Some(exact) if exact != i64::MIN => {
            assert_eq!(x.checked_mul(y), Some(Fix32::from_raw(exact)), "{x:?} * {y:?}");
            assert_eq!(x * y, Fix32::from_raw(exact));
            assert_eq!(x.saturating_mul(y), Fix32::from_raw(exact));
        }
        _ => {
            // an exact minimum may or may not be detected as an overflow
            assert!(matches!(x.checked_mul(y), None | Some(Fix32::MIN)), "{x:?} * {y:?}");
            assert!(x.mul(y).is_overflow());
            assert_eq!(x.saturating_mul(y), saturated(exact > 0));
        }
    }
}

#[track_caller]
fn div_step(x: Fix32, y: Fix32) {
    if y.is_zero() {
        assert_eq!(x.checked_div(y), None);
        assert_eq!(x / y, Fix32::OVERFLOW);
        assert_eq!(x.checked_rem(y), None);
        assert_eq!(x.saturating_div(y), saturated(!x.is_negative()));
        return
    }
    let exact = exact_div(x.raw(), y.raw());
    let quo = x.checked_div(y);
    match fits(exact) {
        Some(exact) => {
            if y.raw().unsigned_abs() < (1 << 52) {
                // quotients of at least `2^30` can be reported as overflowing
                match quo {
                    Some(quo) => assert_eq!(quo.raw(), exact, "{x:?} / {y:?}"),
                    None => assert!(exact.unsigned_abs() >= (1 << 62), "{x:?} / {y:?}"),
                }
            } else {
                let quo = quo.unwrap();
                assert!(quo.raw().abs_diff(exact) <= 1, "{x:?} / {y:?}");
            }
        }
        None => {
            assert_eq!(quo, None, "{x:?} / {y:?}");
            assert_eq!(x.saturating_div(y), saturated(exact > 0));
        }
    }
    assert_eq!(
        x.checked_rem(y),
        Some(Fix32::from_raw(x.raw().wrapping_rem(y.raw())))
    );
    assert_eq!(x % y, Fix32::from_raw(x.raw().wrapping_rem(y.raw())));
}

#[track_caller]
fn lerp_step(x: Fix32, y: Fix32, frac: u32) {
    let (a, b) = (x.raw() as i128, y.raw() as i128);
    let lerp = |bits: u32, frac: i128| ((a * ((1 << bits) - frac)) + (b * frac)) >> bits;
    assert_eq!(x.lerp8(y, frac as u8).raw() as i128, lerp(8, (frac as u8) as i128));
    assert_eq!(x.lerp16(y, frac as u16).raw() as i128, lerp(16, (frac as u16) as i128));
    assert_eq!(x.lerp32(y, frac).raw() as i128, lerp(32, frac as i128));
}

pub fn arith(n: u32, seed: u64) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    for _ in 0..n {
        let x = rand_fix32(&mut rng);
        let y = rand_fix32(&mut rng);
        sum_step(x, y);
        mul_step(x, y);
        div_step(x, y);
        lerp_step(x, y, y.raw() as u32);
        assert_eq!(x.sqrt().raw(), exact_sqrt(x.raw()), "sqrt({x:?})");
        // integer round trip
        let i = x.raw() as i32;
        assert_eq!(Fix32::from_int(i).to_int(), i);
    }
}
