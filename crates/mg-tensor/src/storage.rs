use half::f16;

use crate::dtype::DType;
use crate::error::{Result, TensorError};

/// CPU-side tensor storage.
#[derive(Debug, Clone, PartialEq)]
pub enum CpuStorage {
    /// IEEE 754 half-precision storage.
    F16(Vec<f16>),
}

impl CpuStorage {
    /// Number of elements in this storage.
    pub fn len(&self) -> usize {
        match self {
            CpuStorage::F16(v) => v.len(),
        }
    }

    /// Returns true if the storage contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dtype(&self) -> DType {
        match self {
            CpuStorage::F16(_) => DType::F16,
        }
    }

    /// Create zero-filled storage for the given dtype and element count.
    pub fn zeros(dtype: DType, n: usize) -> Self {
        match dtype {
            DType::F16 => CpuStorage::F16(vec![f16::ZERO; n]),
        }
    }

    /// Returns the data as an f16 slice.
    pub fn as_f16_slice(&self) -> &[f16] {
        match self {
            CpuStorage::F16(v) => v.as_slice(),
        }
    }

    /// Serialize the elements as a raw little-endian buffer.
    ///
    /// The output carries no header, shape, or type tag; it is exactly
    /// `len() * dtype().size_in_bytes()` bytes long.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        match self {
            CpuStorage::F16(v) => v.iter().flat_map(|x| x.to_le_bytes()).collect(),
        }
    }

    /// Decode a raw little-endian buffer of `dtype` elements.
    ///
    /// # Errors
    /// Returns an error if `bytes.len()` is not a whole number of elements.
    pub fn from_le_bytes(bytes: &[u8], dtype: DType) -> Result<Self> {
        let width = dtype.size_in_bytes();
        if bytes.len() % width != 0 {
            return Err(TensorError::ByteLength {
                expected: bytes.len() / width * width,
                got: bytes.len(),
            });
        }
        let storage = match dtype {
            DType::F16 => CpuStorage::F16(
                bytes
                    .chunks_exact(2)
                    .map(|c| f16::from_le_bytes([c[0], c[1]]))
                    .collect(),
            ),
        };
        Ok(storage)
    }
}
