// src/tensor/debug.rs
use crate::tensor::Tensor;
use std::fmt;

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read_data();
        write!(
            f,
            "Tensor(shape={:?}, strides={:?}, offset={}, dtype={:?}, contiguous={})",
            data.shape,
            data.strides,
            data.offset,
            data.dtype,
            data.is_contiguous()
        )
    }
}
