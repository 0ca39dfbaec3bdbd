//! `mg-tensor` - Half-precision tensors and Mish kernels for mish-golden.
//!
//! This crate provides:
//! - A `Tensor` type backed by half-precision CPU storage
//! - A `ComputeBackend` trait of elementwise half-precision primitives
//! - A reference `CpuBackend` implementation, including Mish
//! - The device tiling model (`Tiling`) used to walk a tensor tile by tile
//! - Shape and data type definitions

pub mod backend;
pub mod cpu;
pub mod dtype;
pub mod error;
pub mod shape;
pub mod storage;
pub mod tensor;

// Re-export primary types at the crate root for convenience.
pub use backend::{ComputeBackend, MishPath};
pub use cpu::tiling::Tiling;
pub use cpu::unary::f16_from_f64;
pub use cpu::CpuBackend;
pub use dtype::DType;
pub use error::{Result, TensorError};
pub use half::f16;
pub use shape::Shape;
pub use storage::CpuStorage;
pub use tensor::Tensor;
