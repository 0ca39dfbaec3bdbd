//! `mg-golden` - Golden data for the Mish operator test.
//!
//! Samples an `[8, 2048]` half-precision tensor from `[1, 10)`, applies
//! Mish elementwise, and writes both tensors as headerless little-endian
//! buffers:
//! - `./AclNNInvocation/input/input_x.bin`
//! - `./AclNNInvocation/output/golden.bin`
//!
//! Both directories must already exist.

pub mod artifact;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;

use std::path::Path;

pub use artifact::{read_raw, write_raw, ArtifactPaths};
pub use config::GenConfig;
pub use error::{GoldenError, Result};
pub use generator::{GoldenGenerator, GoldenPair};

/// Generate one fresh input/golden pair relative to the working directory.
pub fn gen_golden_data() -> Result<()> {
    let generator = GoldenGenerator::new(GenConfig::default())?;
    let mut rng = mg_sampler::rng_from_entropy();
    generator.run(Path::new("."), &mut rng)
}
