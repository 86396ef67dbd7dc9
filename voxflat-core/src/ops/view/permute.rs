use super::utils;
use crate::error::VoxFlatError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use std::sync::Arc;

/// Creates a view with the dimensions reordered according to `dims`.
///
/// No data is moved; only shape and strides change, so the result is usually
/// non-contiguous.
pub fn permute_op(input: &Tensor, dims: &[usize]) -> Result<Tensor, VoxFlatError> {
    let input_data_guard = input.read_data();

    let rank = input_data_guard.shape.len();
    utils::validate_permutation(rank, dims)?;

    let new_shape = utils::permute_shape(&input_data_guard.shape, dims);
    let new_strides = utils::permute_strides(&input_data_guard.strides, dims);
    let view_td = TensorData::new_view(
        Arc::clone(&input_data_guard.buffer),
        input_data_guard.offset,
        new_shape,
        new_strides,
    );

    Ok(Tensor::from_tensor_data(view_td))
}

/// Swaps two dimensions. A special case of `permute_op`.
pub fn transpose_op(input: &Tensor, dim1: usize, dim2: usize) -> Result<Tensor, VoxFlatError> {
    let rank = input.rank();
    if dim1 >= rank || dim2 >= rank {
        return Err(VoxFlatError::IndexOutOfBounds {
            index: vec![dim1.max(dim2)],
            shape: input.shape(),
        });
    }
    let mut dims: Vec<usize> = (0..rank).collect();
    dims.swap(dim1, dim2);
    permute_op(input, &dims)
}

#[cfg(test)]
#[path = "permute_test.rs"]
mod tests;
