// src/tensor/accessors.rs
use crate::{buffer::Buffer, error::VoxFlatError, tensor::Tensor, types::DType};

impl Tensor {
    /// Returns a clone of the tensor's shape (dimensions).
    pub fn shape(&self) -> Vec<usize> {
        self.read_data().shape.clone()
    }

    /// Returns a clone of the tensor's strides.
    pub fn strides(&self) -> Vec<usize> {
        self.read_data().strides.clone()
    }

    /// Returns the offset of the first element within the shared buffer.
    pub fn offset(&self) -> usize {
        self.read_data().offset
    }

    /// Returns the data type (`DType`) of the tensor elements.
    pub fn dtype(&self) -> DType {
        self.read_data().dtype
    }

    /// Returns the rank (number of dimensions) of the tensor.
    pub fn rank(&self) -> usize {
        self.read_data().shape.len()
    }

    /// Returns the size of dimension `dim`.
    ///
    /// # Errors
    /// `VoxFlatError::IndexOutOfBounds` if `dim >= rank`.
    pub fn size(&self, dim: usize) -> Result<usize, VoxFlatError> {
        let guard = self.read_data();
        guard
            .shape
            .get(dim)
            .copied()
            .ok_or_else(|| VoxFlatError::IndexOutOfBounds {
                index: vec![dim],
                shape: guard.shape.clone(),
            })
    }

    /// Returns the total number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.read_data().numel()
    }

    /// Checks if the tensor is contiguous in memory (row-major / C order).
    pub fn is_contiguous(&self) -> bool {
        self.read_data().is_contiguous()
    }

    /// Returns the tensor elements as a `Vec<f32>` in logical row-major order.
    ///
    /// Works for strided (non-contiguous) views too; the data is gathered
    /// according to the view's strides and offset.
    ///
    /// # Errors
    /// `VoxFlatError::DataTypeMismatch` if the tensor is not F32.
    pub fn get_f32_data(&self) -> Result<Vec<f32>, VoxFlatError> {
        let guard = self.read_data();
        let data = match &*guard.buffer {
            Buffer::F32(data) => data,
            Buffer::F64(_) => {
                return Err(VoxFlatError::DataTypeMismatch {
                    expected: DType::F32,
                    actual: DType::F64,
                    operation: "get_f32_data".to_string(),
                })
            }
        };
        if guard.is_contiguous() {
            let start = guard.offset;
            return Ok(data[start..start + guard.numel()].to_vec());
        }
        Ok(guard.logical_offsets().map(|i| data[i]).collect())
    }

    /// Returns the tensor elements as a `Vec<f64>` in logical row-major order.
    pub fn get_f64_data(&self) -> Result<Vec<f64>, VoxFlatError> {
        let guard = self.read_data();
        let data = match &*guard.buffer {
            Buffer::F64(data) => data,
            Buffer::F32(_) => {
                return Err(VoxFlatError::DataTypeMismatch {
                    expected: DType::F64,
                    actual: DType::F32,
                    operation: "get_f64_data".to_string(),
                })
            }
        };
        if guard.is_contiguous() {
            let start = guard.offset;
            return Ok(data[start..start + guard.numel()].to_vec());
        }
        Ok(guard.logical_offsets().map(|i| data[i]).collect())
    }
}
