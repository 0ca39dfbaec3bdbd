use thiserror::Error;

#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("invalid sampling range [{low}, {high}): {reason}")]
    InvalidRange { low: f64, high: f64, reason: String },
    #[error("tensor error: {0}")]
    Tensor(#[from] mg_tensor::TensorError),
}

pub type Result<T> = std::result::Result<T, SamplerError>;
