use crate::types::DType;
use thiserror::Error;

/// Custom error type for the voxflat crate.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum VoxFlatError {
    /// An input array does not have the rank or axis sizes a preprocessor expects.
    #[error("Invalid input array for {operation}: expected {expected}, got {actual:?}")]
    InvalidShape {
        operation: String,
        expected: String,
        actual: Vec<usize>,
    },

    /// Output-type inference received a missing or wrongly-kinded descriptor.
    #[error("Invalid input type: expected {expected}, got {actual}")]
    InvalidInputType { expected: String, actual: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: String,
        actual: String,
        operation: String,
    },

    #[error("Rank mismatch: expected {expected}, got {actual}")]
    RankMismatch { expected: usize, actual: usize },

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    #[error("Invalid permutation: dims {dims:?} are not a valid permutation for rank {rank}")]
    InvalidPermutation { dims: Vec<usize>, rank: usize },

    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Data type mismatch for operation '{operation}': expected {expected:?}, got {actual:?}")]
    DataTypeMismatch {
        expected: DType,
        actual: DType,
        operation: String,
    },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
