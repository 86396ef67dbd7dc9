// src/conf/mod.rs
// Network-configuration records: shape descriptors, mask state and the
// input preprocessors that sit between layers of different kinds.

pub mod input_type;
pub mod mask;
pub mod preprocessor;

pub use input_type::{Convolution3DFormat, InputType, InputTypeKind};
pub use mask::MaskState;
pub use preprocessor::{
    Cnn3DToFeedForwardPreProcessor, FeedForwardToCnn3DPreProcessor, InputPreProcessor,
    PreProcessor,
};
