mod casting;
mod const_str;
mod div;
mod exp;
mod ieee;
mod lerp;
mod mul;
#[cfg(feature = "rand_support")]
mod rand;
mod sqrt;
mod std_ops;
mod sum;
mod trig;

#[cfg(not(feature = "no_sin_lut"))]
pub use trig::sin_table;
pub use trig::SinMethod;
