//! Input preprocessors that connect 3-D convolutional layers and dense layers,
//! together with the strided tensor views they operate on.

pub mod buffer;
pub mod conf;
pub mod ops;
pub mod tensor;
pub mod tensor_data;
pub mod types;
pub mod utils;

pub mod error;

// Re-export the main types so they are reachable as `voxflat_core::Tensor` etc.
pub use conf::{InputPreProcessor, InputType, MaskState, PreProcessor};
pub use error::VoxFlatError;
pub use tensor::Tensor;
