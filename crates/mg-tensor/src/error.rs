use thiserror::Error;

#[derive(Error, Debug)]
pub enum TensorError {
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch { expected: Vec<usize>, got: Vec<usize> },
    #[error("byte length mismatch: expected {expected} bytes, got {got}")]
    ByteLength { expected: usize, got: usize },
    #[error("invalid tiling: {0}")]
    Tiling(String),
}

pub type Result<T> = std::result::Result<T, TensorError>;
