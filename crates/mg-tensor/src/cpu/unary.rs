//! Half-precision elementwise helpers.
//!
//! Each helper widens its f16 operands to f32, applies the operation, and
//! rounds the result back to f16 with round-to-nearest-even.
//! `f16_from_f64` does the same for values produced in f64.

use half::f16;

use crate::error::{Result, TensorError};

/// Apply `f` to every element of `x`, rounding each result to f16.
pub fn map_unary(x: &[f16], f: impl Fn(f32) -> f32) -> Vec<f16> {
    x.iter().map(|&v| f16::from_f32(f(v.to_f32()))).collect()
}

/// Combine `a` and `b` elementwise with `f`, rounding each result to f16.
///
/// # Errors
/// Returns `ShapeMismatch` if the operands differ in length.
pub fn map_binary(a: &[f16], b: &[f16], f: impl Fn(f32, f32) -> f32) -> Result<Vec<f16>> {
    if a.len() != b.len() {
        return Err(TensorError::ShapeMismatch {
            expected: vec![a.len()],
            got: vec![b.len()],
        });
    }
    Ok(a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| f16::from_f32(f(x.to_f32(), y.to_f32())))
        .collect())
}

/// Round an f64 to the nearest f16, ties to even.
///
/// `f16::from_f64` may round twice (through f32, or after dropping the low
/// mantissa bits), which can land one step away from the nearest value. The
/// result is corrected by comparing against both neighbours in f64.
pub fn f16_from_f64(v: f64) -> f16 {
    let r = f16::from_f64(v);
    if v.is_nan() || v.abs() >= F16_OVERFLOW {
        return r;
    }
    let bits = r.to_bits();
    [bits.wrapping_sub(1), bits.wrapping_add(1)]
        .into_iter()
        .map(f16::from_bits)
        .filter(|c| c.is_finite() && c.is_sign_negative() == r.is_sign_negative())
        .fold(r, |best, c| {
            let (d_best, d_c) = ((v - best.to_f64()).abs(), (v - c.to_f64()).abs());
            if d_c < d_best || (d_c == d_best && c.to_bits() & 1 == 0) {
                c
            } else {
                best
            }
        })
}

/// Magnitudes at or above `f16::MAX + ulp / 2` round to infinity.
const F16_OVERFLOW: f64 = 65520.0;

/// Mish in f32: `x * tanh(ln(1 + exp(x)))`.
///
/// `ln_1p` keeps the softplus accurate for very negative inputs, where
/// `1 + exp(x)` would round to exactly 1.
pub fn mish_f32(x: f32) -> f32 {
    x * x.exp().ln_1p().tanh()
}
