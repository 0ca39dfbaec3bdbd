pub mod error;
pub mod sampler;
pub mod uniform;

pub use error::{Result, SamplerError};
pub use sampler::{rng_from_entropy, rng_from_seed, TensorSampler};
pub use uniform::UniformSampler;
