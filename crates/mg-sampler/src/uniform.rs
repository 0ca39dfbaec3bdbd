use mg_tensor::{f16, f16_from_f64, Shape, Tensor};
use rand::distributions::{Distribution, Uniform};
use rand::RngCore;

use crate::error::{Result, SamplerError};
use crate::sampler::TensorSampler;

/// Draws each element from a continuous uniform distribution on `[low, high)`
/// and stores it in half precision.
///
/// Draws are made in f64 and rounded once to the nearest f16 (ties to even)
/// with `f16_from_f64`. Rounding can lift a draw just below `high` onto
/// `high` itself; such draws are discarded and redrawn, so every stored
/// element lies in `[low, high)`.
#[derive(Debug, Clone)]
pub struct UniformSampler {
    low: f64,
    high: f64,
    dist: Uniform<f64>,
}

impl UniformSampler {
    /// Create a sampler over `[low, high)`.
    ///
    /// # Errors
    /// Returns `InvalidRange` unless both bounds are finite, exactly
    /// representable in f16, and `low < high`.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        let invalid = |reason: &str| SamplerError::InvalidRange {
            low,
            high,
            reason: reason.to_string(),
        };
        if !low.is_finite() || !high.is_finite() {
            return Err(invalid("bounds must be finite"));
        }
        if f16::from_f64(low).to_f64() != low || f16::from_f64(high).to_f64() != high {
            return Err(invalid("bounds must be representable in f16"));
        }
        if low >= high {
            return Err(invalid("low must be below high"));
        }
        Ok(UniformSampler {
            low,
            high,
            dist: Uniform::new(low, high),
        })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    fn draw(&self, rng: &mut dyn RngCore) -> f16 {
        let high = f16::from_f64(self.high);
        loop {
            let v = f16_from_f64(self.dist.sample(&mut *rng));
            if v < high {
                return v;
            }
        }
    }
}

impl TensorSampler for UniformSampler {
    fn name(&self) -> &str {
        "uniform"
    }

    fn sample(&self, rng: &mut dyn RngCore, shape: &Shape) -> Result<Tensor> {
        let data: Vec<f16> = (0..shape.numel()).map(|_| self.draw(rng)).collect();
        Ok(Tensor::from_f16(data, shape.clone()))
    }
}
