use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoldenError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("tensor error: {0}")]
    Tensor(#[from] mg_tensor::TensorError),
    #[error("sampler error: {0}")]
    Sampler(#[from] mg_sampler::SamplerError),
}

impl GoldenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GoldenError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GoldenError>;
