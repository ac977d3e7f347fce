// Generates the quarter wave sine table used by `Fix32::sin`. Entry `i` is
// `sin(i * 2^-16)` in Q0.32, for angles from 0 up to but not including pi/2.

use std::{env, fmt::Write as _, fs, path::PathBuf};

/// Raw value of pi in Q31.32
const PI: i64 = 13493037704;

/// Converts the same way as `Fix32::from_f64`, rounding half away from zero
fn from_f64(x: f64) -> i64 {
    let t = x * 4294967296.0;
    (if t >= 0.0 { t + 0.5 } else { t - 0.5 }) as i64
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").unwrap());
    let out_file = out_dir.join("sin_lut.rs");
    drop(fs::remove_file(&out_file));
    if env::var_os("CARGO_FEATURE_NO_SIN_LUT").is_some() {
        return
    }

    // one entry per 2^-16 radians over the first quadrant
    let count = (PI >> 17) as usize;
    let mut lut: Vec<i64> = (0..count)
        .map(|i| from_f64((((i as i64) << 16) as f64 / 4294967296.0).sin()))
        .collect();
    // the tail is implicitly one
    while lut.last() == Some(&(1 << 32)) {
        lut.pop();
    }

    let mut s = String::new();
    writeln!(s, "// generated by `build.rs`").unwrap();
    writeln!(s, "pub(crate) static SIN_LUT: [u32; {}] = [", lut.len()).unwrap();
    for chunk in lut.chunks(8) {
        s.push_str("   ");
        for x in chunk {
            write!(s, " {},", u32::try_from(*x).unwrap()).unwrap();
        }
        s.push('\n');
    }
    s.push_str("];\n");
    fs::write(&out_file, s).unwrap();
}
