use voxflat_core::tensor::Tensor;

/// Helper to create a simple f32 tensor for testing purposes.
#[allow(dead_code)]
pub fn create_test_tensor(data: Vec<f32>, shape: Vec<usize>) -> Tensor {
    Tensor::new(data, shape).expect("Test tensor creation failed")
}

/// Tensor of the given shape holding `0, 1, 2, ...` in row-major order.
#[allow(dead_code)]
pub fn sequential_tensor(shape: &[usize]) -> Tensor {
    let numel: usize = shape.iter().product();
    create_test_tensor((0..numel).map(|x| x as f32).collect(), shape.to_vec())
}
