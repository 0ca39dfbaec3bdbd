use half::f16;

use crate::backend::{ComputeBackend, MishPath};
use crate::dtype::DType;
use crate::error::{Result, TensorError};
use crate::shape::Shape;
use crate::storage::CpuStorage;

/// A dense, row-major tensor backed by CPU storage.
///
/// The dtype is carried by the storage variant. Compute is dispatched to a
/// `ComputeBackend`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    storage: CpuStorage,
    shape: Shape,
}

impl Tensor {
    /// Create a half-precision tensor from f16 data and a shape.
    ///
    /// # Panics
    /// Panics if `data.len() != shape.numel()`.
    pub fn from_f16(data: Vec<f16>, shape: Shape) -> Self {
        Self::with_storage(CpuStorage::F16(data), shape)
    }

    fn with_storage(storage: CpuStorage, shape: Shape) -> Self {
        assert_eq!(
            storage.len(),
            shape.numel(),
            "data length {} does not match shape {} (numel={})",
            storage.len(),
            shape,
            shape.numel()
        );
        Tensor { storage, shape }
    }

    /// Create a zero-filled tensor with the given shape and dtype.
    pub fn zeros(shape: Shape, dtype: DType) -> Self {
        Tensor {
            storage: CpuStorage::zeros(dtype, shape.numel()),
            shape,
        }
    }

    /// Decode a headerless little-endian buffer; shape and dtype are supplied
    /// by the caller.
    ///
    /// # Errors
    /// Returns `ByteLength` if `bytes` does not hold exactly `shape.numel()`
    /// elements of `dtype`.
    pub fn from_le_bytes(bytes: &[u8], shape: Shape, dtype: DType) -> Result<Tensor> {
        let expected = shape.nbytes(dtype);
        if bytes.len() != expected {
            return Err(TensorError::ByteLength {
                expected,
                got: bytes.len(),
            });
        }
        Ok(Tensor {
            storage: CpuStorage::from_le_bytes(bytes, dtype)?,
            shape,
        })
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    pub fn numel(&self) -> usize {
        self.shape.numel()
    }

    /// Size in bytes of the raw element buffer.
    pub fn nbytes(&self) -> usize {
        self.shape.nbytes(self.dtype())
    }

    /// Returns the elements as an f16 slice.
    pub fn data_f16(&self) -> &[f16] {
        self.storage.as_f16_slice()
    }

    /// The raw element buffer: row-major, little-endian, no header.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.storage.to_le_bytes()
    }

    /// Apply Mish elementwise. The output has the input's shape and dtype.
    pub fn mish(&self, backend: &dyn ComputeBackend, path: MishPath) -> Result<Tensor> {
        let y = backend.mish(self.data_f16(), path)?;
        Ok(Tensor::from_f16(y, self.shape.clone()))
    }
}
