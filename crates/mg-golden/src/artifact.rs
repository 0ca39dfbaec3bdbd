use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use mg_tensor::{DType, Shape, Tensor};
use tracing::{debug, info};

use crate::error::{GoldenError, Result};

/// Locations of the two artifacts consumed by the operator test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Raw input tensor.
    pub input: PathBuf,
    /// Raw golden (expected output) tensor.
    pub golden: PathBuf,
}

/// Write the tensor's raw element buffer to `path`.
///
/// The file is created or truncated. Parent directories are never created;
/// a missing directory surfaces as `GoldenError::Io`.
pub fn write_raw(path: &Path, tensor: &Tensor) -> Result<()> {
    let bytes = tensor.to_le_bytes();
    debug!(path = %path.display(), shape = %tensor.shape(), dtype = %tensor.dtype(), "writing artifact");

    let mut file = File::create(path).map_err(|e| GoldenError::io(path, e))?;
    file.write_all(&bytes)
        .and_then(|_| file.flush())
        .map_err(|e| GoldenError::io(path, e))?;

    info!(path = %path.display(), bytes = bytes.len(), "wrote artifact");
    Ok(())
}

/// Read a headerless artifact back as a tensor of `shape` and `dtype`.
///
/// The file must hold exactly `shape.numel()` elements.
pub fn read_raw(path: &Path, shape: Shape, dtype: DType) -> Result<Tensor> {
    let bytes = std::fs::read(path).map_err(|e| GoldenError::io(path, e))?;
    Ok(Tensor::from_le_bytes(&bytes, shape, dtype)?)
}
