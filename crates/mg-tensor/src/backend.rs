use std::fmt::Debug;

use half::f16;

use crate::error::Result;

/// How Mish, `x * tanh(ln(1 + exp(x)))`, is evaluated in half precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MishPath {
    /// `exp`, `+ 1`, `ln`, `tanh`, `* x`, each step rounded to f16.
    ///
    /// This is the chain an array library produces when every ufunc
    /// operates on f16 arrays.
    #[default]
    Stepwise,
    /// Whole expression in f32, rounded to f16 once.
    Widened,
    /// The vector-unit sequence, with tanh expanded through exponentials:
    /// `t = exp(softplus(x))`, `tanh = (t - 1/t) / (t + 1/t)`. Each step is
    /// rounded to f16.
    Exponential,
}

/// Trait for pluggable compute backends.
///
/// Every primitive works on half-precision slices and rounds each output
/// element to f16 (round-to-nearest-even) before returning it. Binary
/// primitives require equal-length operands.
pub trait ComputeBackend: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "cpu").
    fn name(&self) -> &str;

    /// Element-wise exponential: result[i] = e^x[i].
    fn exp(&self, x: &[f16]) -> Result<Vec<f16>>;

    /// Element-wise natural logarithm: result[i] = ln(x[i]).
    fn ln(&self, x: &[f16]) -> Result<Vec<f16>>;

    /// Element-wise hyperbolic tangent.
    fn tanh(&self, x: &[f16]) -> Result<Vec<f16>>;

    /// Scalar addition: result[i] = x[i] + s.
    fn adds(&self, x: &[f16], s: f16) -> Result<Vec<f16>>;

    /// Element-wise reciprocal: result[i] = 1 / x[i].
    fn reciprocal(&self, x: &[f16]) -> Result<Vec<f16>>;

    /// Element-wise addition: result[i] = a[i] + b[i].
    fn add(&self, a: &[f16], b: &[f16]) -> Result<Vec<f16>>;

    /// Element-wise subtraction: result[i] = a[i] - b[i].
    fn sub(&self, a: &[f16], b: &[f16]) -> Result<Vec<f16>>;

    /// Element-wise multiplication: result[i] = a[i] * b[i].
    fn mul(&self, a: &[f16], b: &[f16]) -> Result<Vec<f16>>;

    /// Element-wise division: result[i] = a[i] / b[i].
    fn div(&self, a: &[f16], b: &[f16]) -> Result<Vec<f16>>;

    /// Mish activation: result[i] = x[i] * tanh(ln(1 + exp(x[i]))).
    fn mish(&self, x: &[f16], path: MishPath) -> Result<Vec<f16>>;
}
