// src/tensor_data.rs
use std::sync::Arc;

use crate::buffer::Buffer;
use crate::error::VoxFlatError;
use crate::tensor::iter_utils::StridedOffsetIter;
use crate::tensor::utils::{calculate_strides, checked_product};
use crate::types::DType;

/// Internal storage and metadata for a Tensor.
///
/// This struct holds the data buffer, shape, strides, offset and data type.
/// It is wrapped in `Arc<TensorData>` by the `Tensor` struct
/// to allow shared ownership.
#[derive(Debug)]
pub struct TensorData {
    /// The underlying data buffer holding typed data.
    /// Wrapped in Arc so views share the buffer itself.
    pub(crate) buffer: Arc<Buffer>,
    /// The data type of the elements in the buffer.
    pub(crate) dtype: DType,
    /// The shape (dimensions) of the tensor.
    pub(crate) shape: Vec<usize>,
    /// The strides for each dimension.
    pub(crate) strides: Vec<usize>,
    /// The offset into the buffer for the first element (used for views).
    pub(crate) offset: usize,
}

impl TensorData {
    /// Creates a new `TensorData` instance with the given f32 data and shape.
    ///
    /// Takes ownership of the data vector and calculates contiguous strides.
    ///
    /// # Errors
    /// Returns `VoxFlatError::TensorCreationError` if the length of `data_vec` does not match
    /// the total number of elements specified by `shape`.
    pub fn new(data_vec: Vec<f32>, shape: Vec<usize>) -> Result<Self, VoxFlatError> {
        check_len(data_vec.len(), &shape)?;
        Ok(Self::from_buffer(Buffer::F32(Arc::new(data_vec)), shape))
    }

    /// Creates a new `TensorData` instance with the given f64 data and shape.
    pub fn new_f64(data_vec: Vec<f64>, shape: Vec<usize>) -> Result<Self, VoxFlatError> {
        check_len(data_vec.len(), &shape)?;
        Ok(Self::from_buffer(Buffer::F64(Arc::new(data_vec)), shape))
    }

    fn from_buffer(buffer: Buffer, shape: Vec<usize>) -> Self {
        let strides = calculate_strides(&shape);
        TensorData {
            dtype: buffer.dtype(),
            buffer: Arc::new(buffer),
            offset: 0,
            shape,
            strides,
        }
    }

    /// Creates a new `TensorData` representing a view of an existing buffer.
    /// (Used internally by view operations like reshape and permute.)
    ///
    /// This constructor does **not** allocate new memory for the data but shares the
    /// provided `buffer_arc`.
    pub(crate) fn new_view(
        buffer_arc: Arc<Buffer>,
        offset: usize,
        shape: Vec<usize>,
        strides: Vec<usize>,
    ) -> Self {
        TensorData {
            dtype: buffer_arc.dtype(),
            buffer: buffer_arc,
            offset,
            shape,
            strides,
        }
    }

    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }

    /// Returns an iterator over the physical offsets of every element, in logical order.
    pub fn logical_offsets(&self) -> StridedOffsetIter<'_> {
        StridedOffsetIter::new(&self.shape, &self.strides, self.offset)
    }

    /// Checks if the tensor is contiguous in memory.
    /// A tensor is contiguous if its elements are laid out in the standard
    /// row-major order (C order) without gaps, considering its strides.
    /// Size-1 dimensions do not constrain their stride.
    pub fn is_contiguous(&self) -> bool {
        if self.shape.is_empty() {
            return true;
        }
        let mut current_stride = 1;
        for i in (0..self.shape.len()).rev() {
            let shape_i = self.shape[i];
            if shape_i == 0 {
                return true;
            }
            if shape_i != 1 {
                if self.strides[i] != current_stride {
                    return false;
                }
                current_stride *= shape_i;
            }
        }
        true
    }
}

fn check_len(data_len: usize, shape: &[usize]) -> Result<(), VoxFlatError> {
    if checked_product(shape) != Some(data_len) {
        return Err(VoxFlatError::TensorCreationError {
            data_len,
            shape: shape.to_vec(),
        });
    }
    Ok(())
}
