pub mod tiling;
pub mod unary;

use half::f16;

use crate::backend::{ComputeBackend, MishPath};
use crate::error::{Result, TensorError};
use tiling::Tiling;
use unary::{map_binary, map_unary, mish_f32};

/// Pure-Rust CPU compute backend.
///
/// Implements every primitive with straightforward loops, favouring exact
/// per-step f16 rounding over speed. Serves as the reference for golden data.
#[derive(Debug, Clone)]
pub struct CpuBackend;

impl CpuBackend {
    pub fn new() -> Self {
        CpuBackend
    }

    /// Evaluate Mish tile by tile in the order the device cores walk `x`.
    ///
    /// Mish is elementwise, so the result is identical to `mish(x, path)`.
    pub fn mish_tiled(&self, x: &[f16], tiling: &Tiling, path: MishPath) -> Result<Vec<f16>> {
        if x.len() != tiling.total_length() {
            return Err(TensorError::ShapeMismatch {
                expected: vec![tiling.total_length()],
                got: vec![x.len()],
            });
        }
        let mut out = vec![f16::ZERO; x.len()];
        for range in tiling.tiles() {
            let y = self.mish(&x[range.clone()], path)?;
            out[range].copy_from_slice(&y);
        }
        Ok(out)
    }

    fn mish_stepwise(&self, x: &[f16]) -> Result<Vec<f16>> {
        let e = self.exp(x)?;
        let e1 = self.adds(&e, f16::ONE)?;
        let softplus = self.ln(&e1)?;
        let t = self.tanh(&softplus)?;
        self.mul(x, &t)
    }

    fn mish_exponential(&self, x: &[f16]) -> Result<Vec<f16>> {
        let e = self.exp(x)?;
        let e1 = self.adds(&e, f16::ONE)?;
        let softplus = self.ln(&e1)?;

        // tanh(s) = (e^s - e^-s) / (e^s + e^-s)
        let pos = self.exp(&softplus)?;
        let neg = self.reciprocal(&pos)?;
        let num = self.sub(&pos, &neg)?;
        let den = self.add(&pos, &neg)?;
        let t = self.div(&num, &den)?;
        self.mul(x, &t)
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputeBackend for CpuBackend {
    fn name(&self) -> &str {
        "cpu"
    }

    fn exp(&self, x: &[f16]) -> Result<Vec<f16>> {
        Ok(map_unary(x, f32::exp))
    }

    fn ln(&self, x: &[f16]) -> Result<Vec<f16>> {
        Ok(map_unary(x, f32::ln))
    }

    fn tanh(&self, x: &[f16]) -> Result<Vec<f16>> {
        Ok(map_unary(x, f32::tanh))
    }

    fn adds(&self, x: &[f16], s: f16) -> Result<Vec<f16>> {
        let s = s.to_f32();
        Ok(map_unary(x, |v| v + s))
    }

    fn reciprocal(&self, x: &[f16]) -> Result<Vec<f16>> {
        Ok(map_unary(x, |v| 1.0 / v))
    }

    fn add(&self, a: &[f16], b: &[f16]) -> Result<Vec<f16>> {
        map_binary(a, b, |x, y| x + y)
    }

    fn sub(&self, a: &[f16], b: &[f16]) -> Result<Vec<f16>> {
        map_binary(a, b, |x, y| x - y)
    }

    fn mul(&self, a: &[f16], b: &[f16]) -> Result<Vec<f16>> {
        map_binary(a, b, |x, y| x * y)
    }

    fn div(&self, a: &[f16], b: &[f16]) -> Result<Vec<f16>> {
        map_binary(a, b, |x, y| x / y)
    }

    fn mish(&self, x: &[f16], path: MishPath) -> Result<Vec<f16>> {
        match path {
            MishPath::Stepwise => self.mish_stepwise(x),
            MishPath::Widened => Ok(map_unary(x, mish_f32)),
            MishPath::Exponential => self.mish_exponential(x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn backend() -> CpuBackend {
        CpuBackend::new()
    }

    fn halves(v: &[f32]) -> Vec<f16> {
        v.iter().map(|&x| f16::from_f32(x)).collect()
    }

    fn mish_f64(x: f64) -> f64 {
        x * (1.0 + x.exp()).ln().tanh()
    }

    /// Sample points spread over the golden input range [1, 10).
    fn grid() -> Vec<f16> {
        (0..=720).map(|i| f16::from_f32(1.0 + i as f32 / 80.0)).collect()
    }

    #[test]
    fn test_primitives() {
        let b = backend();
        let x = halves(&[1.0, 2.0]);
        let y = halves(&[4.0, 8.0]);
        assert_eq!(b.add(&x, &y).unwrap(), halves(&[5.0, 10.0]));
        assert_eq!(b.sub(&x, &y).unwrap(), halves(&[-3.0, -6.0]));
        assert_eq!(b.mul(&x, &y).unwrap(), halves(&[4.0, 16.0]));
        assert_eq!(b.div(&x, &y).unwrap(), halves(&[0.25, 0.25]));
        assert_eq!(b.adds(&x, f16::ONE).unwrap(), halves(&[2.0, 3.0]));
        assert_eq!(b.reciprocal(&y).unwrap(), halves(&[0.25, 0.125]));
    }

    #[test]
    fn test_transcendentals_round_to_half() {
        let b = backend();
        let e = b.exp(&[f16::ONE]).unwrap();
        // e = 2.71828..., nearest f16 is 2.71875.
        assert_eq!(e[0].to_f32(), 2.71875);
        let l = b.ln(&e).unwrap();
        assert_abs_diff_eq!(l[0].to_f32(), 1.0, epsilon = 1e-3);
        let t = b.tanh(&[f16::ZERO]).unwrap();
        assert_eq!(t[0], f16::ZERO);
    }

    #[test]
    fn test_binary_length_mismatch() {
        let b = backend();
        assert!(b.add(&halves(&[1.0]), &halves(&[1.0, 2.0])).is_err());
        assert!(b.div(&halves(&[1.0, 2.0]), &halves(&[1.0])).is_err());
    }

    #[test]
    fn test_mish_stepwise_at_one() {
        // exp(1) -> 2.71875, +1 -> 3.71875, ln -> 1.3134766, tanh -> 0.86523438.
        let r = backend().mish(&[f16::ONE], MishPath::Stepwise).unwrap();
        assert_eq!(r[0], f16::from_f32(0.865_234_4));
    }

    #[test]
    fn test_mish_saturates_to_identity() {
        // tanh(softplus(x)) rounds to exactly 1.0 in f16 for large x.
        let x = halves(&[9.0, 9.9921875, 20.0]);
        for path in [MishPath::Stepwise, MishPath::Widened] {
            assert_eq!(backend().mish(&x, path).unwrap(), x);
        }
    }

    #[test]
    fn test_mish_paths_match_reference() {
        let x = grid();
        let b = backend();
        for (path, rel, floor) in [
            (MishPath::Stepwise, 2e-3, 1e-3),
            (MishPath::Widened, 1e-3, 5e-4),
            (MishPath::Exponential, 5e-3, 3e-3),
        ] {
            let y = b.mish(&x, path).unwrap();
            for (xi, yi) in x.iter().zip(y.iter()) {
                let want = mish_f64(xi.to_f64());
                let tol = (want.abs() * rel).max(floor);
                assert!(
                    (yi.to_f64() - want).abs() <= tol,
                    "{:?}: mish({}) = {}, want {}",
                    path,
                    xi,
                    yi,
                    want
                );
            }
        }
    }

    #[test]
    fn test_mish_negative_inputs() {
        let r = backend().mish(&halves(&[-1.0, 0.0]), MishPath::Stepwise).unwrap();
        assert_abs_diff_eq!(r[0].to_f32(), -0.3034, epsilon = 1e-3);
        assert_eq!(r[1], f16::ZERO);
    }

    #[test]
    fn test_mish_tiled_matches_untiled() {
        let b = backend();
        let x: Vec<f16> = (0..8 * 2048)
            .map(|i| f16::from_f32(1.0 + (i % 1153) as f32 * 0.0078))
            .collect();
        let tiling = Tiling::with_defaults(x.len()).unwrap();
        for path in [MishPath::Stepwise, MishPath::Exponential] {
            let tiled = b.mish_tiled(&x, &tiling, path).unwrap();
            let flat = b.mish(&x, path).unwrap();
            assert_eq!(tiled, flat);
        }
    }

    #[test]
    fn test_mish_tiled_length_mismatch() {
        let tiling = Tiling::new(32, 2, 2).unwrap();
        let x = vec![f16::ONE; 16];
        assert!(backend()
            .mish_tiled(&x, &tiling, MishPath::Stepwise)
            .is_err());
    }

    #[test]
    fn test_name() {
        assert_eq!(backend().name(), "cpu");
    }
}
