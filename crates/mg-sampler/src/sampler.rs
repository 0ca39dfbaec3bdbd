use mg_tensor::{Shape, Tensor};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::error::Result;

/// Trait for samplers that fill a tensor of a given shape with random values.
pub trait TensorSampler: Send + Sync {
    /// Returns the name of this sampler.
    fn name(&self) -> &str;

    /// Draw a fresh tensor of `shape`, one independent draw per element.
    fn sample(&self, rng: &mut dyn RngCore, shape: &Shape) -> Result<Tensor>;
}

/// RNG seeded from the operating system; each call yields a different stream.
pub fn rng_from_entropy() -> StdRng {
    StdRng::from_entropy()
}

/// RNG with a pinned seed, for reproducible output.
pub fn rng_from_seed(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
