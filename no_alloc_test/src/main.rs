#![no_std]
#![no_main]

extern crate panic_halt;

use fix32::prelude::*;
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
use riscv_minimal_rt::entry;

#[entry]
fn main() -> ! {
    // test that the procedural macro can still use allocation at compile time
    // without the dependency leaking into runtime
    let a = fix32!(12.5);
    let b = fix32!(-0.25);
    assert_eq!(a.mul(b), fix32!(-3.125));
    assert_eq!(a.div(b), Fix32::from_int(-50));
    assert_eq!(a.add(b).sub(a), b);
    assert_eq!(Fix32::from_int(9).sqrt(), Fix32::from_int(3));
    assert_eq!(Fix32::MAX.saturating_mul(a), Fix32::MAX);
    assert_eq!(Fix32::from_int(4).log2(), Fix32::from_int(2));
    assert_eq!(Fix32::ONE.exp(), Fix32::E);

    // every sine method and the inverse functions work without a floating point unit
    let angle = fix32!(0.5);
    let _ = angle.sin();
    let _ = angle.cos_with(SinMethod::Taylor);
    let _ = angle.sin_with(SinMethod::Parabola);
    let _ = angle.tan();
    let _ = angle.asin().add(angle.acos());
    assert_eq!(Fix32::from_f32_bits(0x3f00_0000), angle);
    assert_eq!(angle.to_f32_bits(), 0x3f00_0000);

    // text conversion without an allocator
    let mut buf = [0u8; fix32::MAX_STR_LEN];
    let len = fix32!(-2.75).to_u8_slice(&mut buf, 3).unwrap();
    assert_eq!(&buf[..len], b"-2.750");
    assert_eq!(Fix32::from_bytes(&buf[..len]), Ok(fix32!(-2.75)));

    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    let x = Fix32::rand_unit_using(&mut rng).unwrap();
    assert!(x < Fix32::ONE);

    panic!("main is not allowed to return")
}
