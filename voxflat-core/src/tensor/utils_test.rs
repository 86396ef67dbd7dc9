use super::*;

#[test]
fn test_calculate_strides() {
    assert_eq!(calculate_strides(&[2, 3]), vec![3, 1]);
    assert_eq!(calculate_strides(&[2, 2, 2]), vec![4, 2, 1]);
    assert_eq!(calculate_strides(&[10, 4, 2, 3, 3]), vec![72, 18, 9, 3, 1]);
    assert_eq!(calculate_strides(&[]), Vec::<usize>::new());
}

#[test]
fn test_checked_product() {
    assert_eq!(checked_product(&[2, 3, 3, 4]), Some(72));
    assert_eq!(checked_product(&[]), Some(1));
    assert_eq!(checked_product(&[1 << 32, 1 << 32, 0]), Some(0));
    assert_eq!(checked_product(&[usize::MAX, 2]), None);
}
