// src/tensor/traits.rs

use crate::buffer::Buffer;
use crate::tensor::Tensor;
use std::sync::Arc;

impl Clone for Tensor {
    /// Clones the Tensor. This is a shallow clone that increases the reference count
    /// of the underlying shared data.
    fn clone(&self) -> Self {
        Tensor {
            data: Arc::clone(&self.data),
        }
    }
}

impl PartialEq for Tensor {
    /// Two tensors are equal when they have the same shape, the same dtype and
    /// the same elements in logical order. Strides and offsets are ignored, so a
    /// strided view equals its contiguous copy.
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let self_guard = self.read_data();
        let other_guard = other.read_data();

        if self_guard.shape != other_guard.shape || self_guard.dtype != other_guard.dtype {
            return false;
        }

        match (&*self_guard.buffer, &*other_guard.buffer) {
            (Buffer::F32(a), Buffer::F32(b)) => self_guard
                .logical_offsets()
                .zip(other_guard.logical_offsets())
                .all(|(i, j)| a[i] == b[j]),
            (Buffer::F64(a), Buffer::F64(b)) => self_guard
                .logical_offsets()
                .zip(other_guard.logical_offsets())
                .all(|(i, j)| a[i] == b[j]),
            _ => false,
        }
    }
}
