//! # Accompanying procedural macros to `fix32`
//!
//! The macros require `Fix32` to be in scope. This could be from `fix32_core`
//! or be a reexport from `fix32`.

extern crate proc_macro;
use fix32_core::Fix32;
use proc_macro::TokenStream;

/// Parses a decimal literal into a `Fix32` constant at compile time. The input
/// is an optional `-` followed by an integer or float literal without a
/// suffix, and it is parsed by `Fix32::from_bytes`. The result is rounded to
/// the nearest representable value, and only the first 8 fractional digits
/// are used.
///
/// ```
/// use fix32::{fix32, Fix32};
///
/// const HALF: Fix32 = fix32!(0.5);
/// assert_eq!(HALF, Fix32::from_raw(1 << 31));
/// assert_eq!(fix32!(-2), Fix32::from_int(-2));
/// assert_eq!(fix32!(1_000.25), Fix32::from_raw(4001 << 30));
/// assert_eq!(fix32!(-2147483648), Fix32::MIN);
/// ```
#[proc_macro]
pub fn fix32(input: TokenStream) -> TokenStream {
    match code_gen(&input.to_string()) {
        Ok(s) => s.parse().unwrap(),
        Err(s) => panic!("{}", s),
    }
}

/// Returns the expression for the literal in `input`
fn code_gen(input: &str) -> Result<String, String> {
    // a leading minus is a separate token, and `_` separators are allowed in literals
    let literal: String = input
        .chars()
        .filter(|c| !(c.is_whitespace() || (*c == '_')))
        .collect();
    if literal.starts_with('+') {
        return Err(format!("`fix32!` input `{input}` should not have a `+` sign"))
    }
    match Fix32::from_bytes(literal.as_bytes()) {
        // the bits are used so that the literal is never negative
        Ok(x) => Ok(format!("Fix32::from_bits({:#x}_u64)", x.to_bits())),
        Err(e) => Err(format!("`fix32!` could not parse `{input}`: {e}")),
    }
}
