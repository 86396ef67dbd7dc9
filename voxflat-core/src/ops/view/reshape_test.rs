use crate::error::VoxFlatError;
use crate::ops::view::reshape::reshape_op;
use crate::tensor::{self, Tensor};

#[test]
fn test_reshape_contiguous() -> Result<(), VoxFlatError> {
    let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3])?;
    let reshaped = reshape_op(&t, vec![3, 2])?;
    assert_eq!(reshaped.shape(), vec![3, 2]);
    assert!(reshaped.is_contiguous());
    assert_eq!(reshaped.strides(), vec![2, 1]);
    assert!(reshaped.shares_buffer_with(&t));
    assert_eq!(reshaped.get_f32_data()?, t.get_f32_data()?);
    Ok(())
}

#[test]
fn test_reshape_to_scalar() -> Result<(), VoxFlatError> {
    let t = Tensor::new(vec![5.0], vec![1])?;
    let reshaped = reshape_op(&t, vec![])?;
    assert_eq!(reshaped.shape(), Vec::<usize>::new());
    assert_eq!(reshaped.strides(), Vec::<usize>::new());
    Ok(())
}

#[test]
fn test_reshape_five_dims_to_two() -> Result<(), VoxFlatError> {
    let t = tensor::arange(&[2, 4, 2, 3, 3])?;
    let flat = reshape_op(&t, vec![2, 72])?;
    assert_eq!(flat.shape(), vec![2, 72]);
    assert_eq!(flat.get_f32_data()?, t.get_f32_data()?);
    Ok(())
}

#[test]
fn test_reshape_numel_mismatch() -> Result<(), VoxFlatError> {
    let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3])?;
    let result = reshape_op(&t, vec![2, 2]);
    assert!(matches!(result, Err(VoxFlatError::ShapeMismatch { .. })));
    Ok(())
}

#[test]
fn test_reshape_non_contiguous_error() -> Result<(), VoxFlatError> {
    let t_orig = Tensor::new((0..12).map(|x| x as f32).collect(), vec![2, 2, 3])?;
    let t_transposed = t_orig.transpose(0, 2)?;
    assert!(!t_transposed.is_contiguous());
    let result = reshape_op(&t_transposed, vec![4, 3]);
    assert!(matches!(result, Err(VoxFlatError::UnsupportedOperation(_))));
    Ok(())
}

#[test]
fn test_reshape_overflowing_shape() -> Result<(), VoxFlatError> {
    let t = tensor::arange(&[2, 3])?;
    let result = reshape_op(&t, vec![usize::MAX, 2]);
    assert!(matches!(result, Err(VoxFlatError::ShapeMismatch { .. })));
    Ok(())
}
