use super::*;
use crate::types::DType;

#[test]
fn test_zeros_and_ones() -> Result<(), VoxFlatError> {
    let z = zeros(&[2, 3])?;
    assert_eq!(z.shape(), vec![2, 3]);
    assert_eq!(z.get_f32_data()?, vec![0.0; 6]);

    let o = ones(&[4])?;
    assert_eq!(o.get_f32_data()?, vec![1.0; 4]);

    let z64 = zeros_f64(&[1, 2])?;
    assert_eq!(z64.dtype(), DType::F64);
    assert_eq!(z64.get_f64_data()?, vec![0.0f64; 2]);
    Ok(())
}

#[test]
fn test_full() -> Result<(), VoxFlatError> {
    let t = full(&[2, 2], 3.5)?;
    assert_eq!(t.get_f32_data()?, vec![3.5; 4]);
    let t64 = full_f64(&[3], -1.0)?;
    assert_eq!(t64.get_f64_data()?, vec![-1.0; 3]);
    Ok(())
}

#[test]
fn test_arange_row_major() -> Result<(), VoxFlatError> {
    let t = arange(&[2, 3])?;
    assert_eq!(t.get_f32_data()?, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    assert!(t.is_contiguous());
    Ok(())
}

#[test]
fn test_rand_range() -> Result<(), VoxFlatError> {
    let t = rand(&[3, 4, 5])?;
    assert_eq!(t.numel(), 60);
    assert!(t.get_f32_data()?.iter().all(|v| (0.0..1.0).contains(v)));
    Ok(())
}

#[test]
fn test_scalar_shape() -> Result<(), VoxFlatError> {
    let t = full(&[], 2.0)?;
    assert_eq!(t.rank(), 0);
    assert_eq!(t.numel(), 1);
    assert_eq!(t.get_f32_data()?, vec![2.0]);
    Ok(())
}
