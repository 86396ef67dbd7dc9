//! Row-major layout normalization.

use crate::buffer::Buffer;
use crate::error::VoxFlatError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use log::debug;

/// Returns a tensor with the same logical contents laid out contiguously in
/// row-major (C) order.
///
/// If `tensor` is already contiguous the same handle is returned and no data
/// is copied. Otherwise the elements are gathered in logical order into a new
/// buffer.
pub fn contiguous_op(tensor: &Tensor) -> Result<Tensor, VoxFlatError> {
    let guard = tensor.read_data();
    if guard.is_contiguous() {
        return Ok(tensor.clone());
    }

    debug!(
        "contiguous: copying strided view shape={:?} strides={:?}",
        guard.shape, guard.strides
    );
    let shape = guard.shape.clone();
    let copied = match &*guard.buffer {
        Buffer::F32(data) => {
            TensorData::new(guard.logical_offsets().map(|i| data[i]).collect(), shape)?
        }
        Buffer::F64(data) => {
            TensorData::new_f64(guard.logical_offsets().map(|i| data[i]).collect(), shape)?
        }
    };
    Ok(Tensor::from_tensor_data(copied))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor;

    #[test]
    fn test_contiguous_is_noop_on_contiguous() -> Result<(), VoxFlatError> {
        let t = tensor::arange(&[2, 3])?;
        let c = contiguous_op(&t)?;
        assert!(c.ptr_eq(&t));
        Ok(())
    }

    #[test]
    fn test_contiguous_copies_strided_view() -> Result<(), VoxFlatError> {
        let t = tensor::arange(&[2, 3])?;
        let tr = t.transpose(0, 1)?;
        let c = contiguous_op(&tr)?;
        assert!(c.is_contiguous());
        assert!(!c.shares_buffer_with(&t));
        assert_eq!(c.shape(), vec![3, 2]);
        assert_eq!(c.strides(), vec![2, 1]);
        assert_eq!(c.get_f32_data()?, vec![0.0, 3.0, 1.0, 4.0, 2.0, 5.0]);
        assert_eq!(c, tr);
        Ok(())
    }

    #[test]
    fn test_contiguous_f64() -> Result<(), VoxFlatError> {
        let t = Tensor::new_f64(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2])?;
        let c = contiguous_op(&t.transpose(0, 1)?)?;
        assert_eq!(c.get_f64_data()?, vec![1.0, 3.0, 2.0, 4.0]);
        Ok(())
    }
}
