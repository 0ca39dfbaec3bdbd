use std::path::{Path, PathBuf};

use mg_tensor::{MishPath, Shape};

use crate::artifact::ArtifactPaths;

/// Rows of the operator test tensor.
pub const ROWS: usize = 8;
/// Columns of the operator test tensor.
pub const COLS: usize = 2048;
/// Inclusive lower bound of sampled inputs.
pub const SAMPLE_LOW: f64 = 1.0;
/// Exclusive upper bound of sampled inputs.
pub const SAMPLE_HIGH: f64 = 10.0;
/// Input artifact, relative to the working directory.
pub const INPUT_FILE: &str = "AclNNInvocation/input/input_x.bin";
/// Golden artifact, relative to the working directory.
pub const GOLDEN_FILE: &str = "AclNNInvocation/output/golden.bin";

/// Everything the generator needs to know. There is no external surface
/// that sets these; `Default` is the only configuration the binary uses.
#[derive(Debug, Clone, PartialEq)]
pub struct GenConfig {
    pub shape: Shape,
    pub low: f64,
    pub high: f64,
    pub mish_path: MishPath,
    pub input_file: PathBuf,
    pub golden_file: PathBuf,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            shape: Shape::new(vec![ROWS, COLS]),
            low: SAMPLE_LOW,
            high: SAMPLE_HIGH,
            mish_path: MishPath::Stepwise,
            input_file: PathBuf::from(INPUT_FILE),
            golden_file: PathBuf::from(GOLDEN_FILE),
        }
    }
}

impl GenConfig {
    /// Resolve the artifact locations against `root`.
    pub fn artifact_paths(&self, root: &Path) -> ArtifactPaths {
        ArtifactPaths {
            input: root.join(&self.input_file),
            golden: root.join(&self.golden_file),
        }
    }
}
