use crate::error::VoxFlatError;
use crate::ops::view::{contiguous_op, permute_op, reshape_op, transpose_op};
use crate::tensor::Tensor;

/// View and layout methods. These return tensors that share the underlying
/// buffer whenever possible and only change shape, strides and offset.
impl Tensor {
    /// Creates a view of the tensor with a different shape.
    ///
    /// The total number of elements must remain the same and the tensor must be
    /// contiguous. To reshape a strided view, call `.contiguous()` first:
    /// `tensor.contiguous()?.reshape(new_shape)`.
    ///
    /// # Example
    /// ```
    /// use voxflat_core::tensor::Tensor;
    /// let t = Tensor::new(vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap();
    /// let r = t.reshape(vec![3, 2]).unwrap();
    /// assert_eq!(r.shape(), vec![3, 2]);
    /// assert!(r.shares_buffer_with(&t));
    /// ```
    pub fn reshape(&self, new_shape: Vec<usize>) -> Result<Self, VoxFlatError> {
        reshape_op(self, new_shape)
    }

    /// Creates a view with dimensions permuted according to `dims`.
    ///
    /// # Example
    /// ```
    /// use voxflat_core::tensor::Tensor;
    /// let t = Tensor::new((0..24).map(|x| x as f32).collect::<Vec<_>>(), vec![2, 3, 4]).unwrap();
    /// let p = t.permute(&[2, 0, 1]).unwrap();
    /// assert_eq!(p.shape(), vec![4, 2, 3]);
    /// assert!(!p.is_contiguous());
    /// ```
    pub fn permute(&self, dims: &[usize]) -> Result<Self, VoxFlatError> {
        permute_op(self, dims)
    }

    /// Creates a view with two dimensions swapped.
    pub fn transpose(&self, dim1: usize, dim2: usize) -> Result<Self, VoxFlatError> {
        transpose_op(self, dim1, dim2)
    }

    /// Returns a row-major contiguous tensor with the same logical contents.
    /// No copy is made if the tensor is already contiguous.
    pub fn contiguous(&self) -> Result<Self, VoxFlatError> {
        contiguous_op(self)
    }
}
