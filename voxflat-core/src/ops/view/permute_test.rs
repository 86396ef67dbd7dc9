use super::*;
use crate::tensor;

#[test]
fn test_permute_basic() -> Result<(), VoxFlatError> {
    let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3])?;
    let p = permute_op(&t, &[1, 0])?;
    assert_eq!(p.shape(), vec![3, 2]);
    assert_eq!(p.strides(), vec![1, 3]);
    assert!(!p.is_contiguous());
    assert!(p.shares_buffer_with(&t));
    assert_eq!(p.get_f32_data()?, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    Ok(())
}

#[test]
fn test_permute_channels_last_to_first() -> Result<(), VoxFlatError> {
    // [N, D, H, W, C] -> [N, C, D, H, W]
    let t = tensor::arange(&[1, 2, 1, 1, 3])?;
    let p = permute_op(&t, &[0, 4, 1, 2, 3])?;
    assert_eq!(p.shape(), vec![1, 3, 2, 1, 1]);
    assert_eq!(p.get_f32_data()?, vec![0.0, 3.0, 1.0, 4.0, 2.0, 5.0]);
    Ok(())
}

#[test]
fn test_permute_invalid_dims() -> Result<(), VoxFlatError> {
    let t = tensor::zeros(&[2, 3, 4])?;
    assert!(matches!(
        permute_op(&t, &[0, 1]),
        Err(VoxFlatError::RankMismatch { expected: 3, actual: 2 })
    ));
    assert!(matches!(
        permute_op(&t, &[0, 1, 3]),
        Err(VoxFlatError::IndexOutOfBounds { .. })
    ));
    assert!(matches!(
        permute_op(&t, &[0, 1, 1]),
        Err(VoxFlatError::InvalidPermutation { .. })
    ));
    Ok(())
}

#[test]
fn test_transpose() -> Result<(), VoxFlatError> {
    let t = tensor::arange(&[2, 3])?;
    let tr = transpose_op(&t, 0, 1)?;
    assert_eq!(tr.shape(), vec![3, 2]);
    assert_eq!(tr.get_f32_data()?, vec![0.0, 3.0, 1.0, 4.0, 2.0, 5.0]);
    assert!(matches!(
        transpose_op(&t, 0, 2),
        Err(VoxFlatError::IndexOutOfBounds { .. })
    ));
    Ok(())
}
