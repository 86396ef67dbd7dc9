// src/tensor/create.rs

use crate::error::VoxFlatError;
use crate::tensor::Tensor;
use rand::Rng;

/// Creates a new f32 tensor filled with zeros with the specified shape.
pub fn zeros(shape: &[usize]) -> Result<Tensor, VoxFlatError> {
    full(shape, 0.0)
}

/// Creates a new f64 tensor filled with zeros with the specified shape.
pub fn zeros_f64(shape: &[usize]) -> Result<Tensor, VoxFlatError> {
    full_f64(shape, 0.0)
}

/// Creates a new f32 tensor filled with ones with the specified shape.
pub fn ones(shape: &[usize]) -> Result<Tensor, VoxFlatError> {
    full(shape, 1.0)
}

/// Creates a new f32 tensor filled with `value`.
pub fn full(shape: &[usize], value: f32) -> Result<Tensor, VoxFlatError> {
    let numel = shape.iter().product();
    Tensor::new(vec![value; numel], shape.to_vec())
}

/// Creates a new f64 tensor filled with `value`.
pub fn full_f64(shape: &[usize], value: f64) -> Result<Tensor, VoxFlatError> {
    let numel = shape.iter().product();
    Tensor::new_f64(vec![value; numel], shape.to_vec())
}

/// Creates an f32 tensor of the given shape holding `0, 1, 2, ...` in row-major order.
///
/// Handy for checking where each element lands after a reshape or permute.
pub fn arange(shape: &[usize]) -> Result<Tensor, VoxFlatError> {
    let numel: usize = shape.iter().product();
    let data_vec: Vec<f32> = (0..numel).map(|x| x as f32).collect();
    Tensor::new(data_vec, shape.to_vec())
}

/// Creates an f32 tensor with values drawn uniformly from `[0, 1)`.
pub fn rand(shape: &[usize]) -> Result<Tensor, VoxFlatError> {
    let numel = shape.iter().product();
    let mut rng = rand::thread_rng();
    let data_vec: Vec<f32> = (0..numel).map(|_| rng.gen::<f32>()).collect();
    Tensor::new(data_vec, shape.to_vec())
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
