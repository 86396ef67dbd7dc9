// src/tensor/mod.rs

use crate::error::VoxFlatError;
use crate::tensor_data::TensorData;
use std::sync::Arc;

mod accessors;
pub mod create;
mod debug;
pub mod iter_utils;
mod traits;
pub mod utils;
mod view_methods;

pub use create::{arange, full, full_f64, ones, rand, zeros, zeros_f64};

/// Represents a multi-dimensional array (tensor).
///
/// `Tensor` uses `Arc<TensorData>` internally so that cloning a `Tensor` is
/// cheap and shares the underlying data. A tensor is immutable once built:
/// view operations (`reshape`, `permute`) and `contiguous` return new tensors
/// that share the data buffer and only change the metadata (shape, strides,
/// offset).
pub struct Tensor {
    pub(crate) data: Arc<TensorData>,
}

impl Tensor {
    /// Creates a new Tensor with the given f32 data and shape.
    ///
    /// Data is read in row-major order; strides are contiguous.
    pub fn new(data_vec: Vec<f32>, shape: Vec<usize>) -> Result<Self, VoxFlatError> {
        let tensor_data = TensorData::new(data_vec, shape)?;
        Ok(Self::from_tensor_data(tensor_data))
    }

    /// Creates a new Tensor with the given f64 data and shape.
    pub fn new_f64(data_vec: Vec<f64>, shape: Vec<usize>) -> Result<Self, VoxFlatError> {
        let tensor_data = TensorData::new_f64(data_vec, shape)?;
        Ok(Self::from_tensor_data(tensor_data))
    }

    pub(crate) fn from_tensor_data(tensor_data: TensorData) -> Self {
        Tensor {
            data: Arc::new(tensor_data),
        }
    }

    /// Borrows the tensor's storage and layout metadata.
    pub fn read_data(&self) -> &TensorData {
        &self.data
    }

    /// Returns `true` if both handles point to the very same tensor
    /// (not merely equal data).
    pub fn ptr_eq(&self, other: &Tensor) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Returns `true` if both tensors read from the same underlying buffer,
    /// e.g. a tensor and a reshaped view of it.
    pub fn shares_buffer_with(&self, other: &Tensor) -> bool {
        let a = self.read_data();
        let b = other.read_data();
        Arc::ptr_eq(&a.buffer, &b.buffer)
    }
}
