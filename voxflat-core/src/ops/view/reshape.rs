use crate::error::VoxFlatError;
use crate::tensor::utils::{calculate_strides, checked_product};
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use log::trace;
use std::sync::Arc;

/// Performs the reshape operation. Only creates views of contiguous tensors;
/// for non-contiguous tensors, call `.contiguous()` first.
///
/// Elements keep their row-major order: the `i`-th element of the input is the
/// `i`-th element of the output.
///
/// # Errors
/// * `ShapeMismatch` if the number of elements differs.
/// * `UnsupportedOperation` if the input is not contiguous.
pub fn reshape_op(tensor: &Tensor, new_shape: Vec<usize>) -> Result<Tensor, VoxFlatError> {
    let tensor_data = tensor.read_data();

    let input_numel = tensor_data.numel();
    let new_numel = checked_product(&new_shape);

    if new_numel != Some(input_numel) {
        return Err(VoxFlatError::ShapeMismatch {
            expected: format!("{:?} ({} elements)", tensor_data.shape, input_numel),
            actual: format!(
                "{:?} ({} elements)",
                new_shape,
                new_numel.map_or_else(|| "overflowing".to_string(), |n| n.to_string())
            ),
            operation: "reshape (numel mismatch)".to_string(),
        });
    }

    if !tensor_data.is_contiguous() {
        return Err(VoxFlatError::UnsupportedOperation(
            "Reshaping non-contiguous tensor requires calling .contiguous() first".to_string(),
        ));
    }

    trace!("reshape view {:?} -> {:?}", tensor_data.shape, new_shape);
    let new_strides = calculate_strides(&new_shape);
    let view_td = TensorData::new_view(
        Arc::clone(&tensor_data.buffer),
        tensor_data.offset,
        new_shape,
        new_strides,
    );

    Ok(Tensor::from_tensor_data(view_td))
}

#[cfg(test)]
#[path = "reshape_test.rs"]
mod tests;
