//! Input preprocessors: adapters inserted between two layers whose activation
//! layouts differ (e.g. a 3-D convolution followed by a dense layer).

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::conf::input_type::InputType;
use crate::conf::mask::MaskState;
use crate::error::VoxFlatError;
use crate::tensor::utils::checked_product;
use crate::tensor::Tensor;

pub mod cnn3d_to_feed_forward;
pub mod feed_forward_to_cnn3d;

pub use cnn3d_to_feed_forward::Cnn3DToFeedForwardPreProcessor;
pub use feed_forward_to_cnn3d::FeedForwardToCnn3DPreProcessor;

/// Capability shared by every input preprocessor.
///
/// A preprocessor reshapes activations on the way forward, reshapes the error
/// signal on the way back, and tells the graph builder what shape the next
/// layer will see.
pub trait InputPreProcessor: Debug + Send + Sync {
    /// Reshapes the activations produced by the previous layer.
    ///
    /// # Arguments
    /// * `input`: The activations. Pass-through inputs are returned as the same handle.
    /// * `mini_batch_size`: Number of examples in the minibatch.
    fn pre_process(&self, input: &Tensor, mini_batch_size: usize) -> Result<Tensor, VoxFlatError>;

    /// Reshapes the error signal (epsilons) coming back from the next layer into
    /// the layout of the previous layer. Inverse of [`pre_process`](Self::pre_process).
    fn backprop(&self, epsilons: &Tensor, mini_batch_size: usize) -> Result<Tensor, VoxFlatError>;

    /// Shape descriptor of this preprocessor's output for the given input descriptor.
    fn get_output_type(&self, input_type: Option<&InputType>) -> Result<InputType, VoxFlatError>;

    /// Propagates the mask array (and its state) through the preprocessor.
    fn feed_forward_mask_array(
        &self,
        mask: Option<&Tensor>,
        current_mask_state: Option<MaskState>,
        mini_batch_size: usize,
    ) -> (Option<Tensor>, Option<MaskState>);

    /// Clones the preprocessor behind a trait object.
    fn box_clone(&self) -> Box<dyn InputPreProcessor>;
}

impl Clone for Box<dyn InputPreProcessor> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

/// Flat serialized form shared by the 3-D convolutional preprocessors.
///
/// Deserialization goes through this record so that geometry is validated
/// before a preprocessor exists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cnn3DGeometryRecord {
    pub input_depth: usize,
    pub input_height: usize,
    pub input_width: usize,
    pub num_channels: usize,
    #[serde(rename = "isNCDHW", default = "default_is_ncdhw")]
    pub is_ncdhw: bool,
}

fn default_is_ncdhw() -> bool {
    true
}

/// Rejects zero-sized geometry and geometry whose flattened size overflows `usize`.
pub(crate) fn validate_geometry(
    depth: usize,
    height: usize,
    width: usize,
    channels: usize,
) -> Result<(), VoxFlatError> {
    if depth == 0 || height == 0 || width == 0 || channels == 0 {
        return Err(VoxFlatError::InvalidConfiguration(format!(
            "depth, height, width and channels must all be positive, got depth={}, height={}, width={}, channels={}",
            depth, height, width, channels
        )));
    }
    if checked_product(&[depth, height, width, channels]).is_none() {
        return Err(VoxFlatError::InvalidConfiguration(format!(
            "depth * height * width * channels overflows usize, got depth={}, height={}, width={}, channels={}",
            depth, height, width, channels
        )));
    }
    Ok(())
}

/// Expected 5-D activation shape for a minibatch of `batch` examples.
pub(crate) fn cnn3d_shape(
    batch: usize,
    depth: usize,
    height: usize,
    width: usize,
    channels: usize,
    is_ncdhw: bool,
) -> Vec<usize> {
    if is_ncdhw {
        vec![batch, channels, depth, height, width]
    } else {
        vec![batch, depth, height, width, channels]
    }
}

/// Serializable selection of a concrete preprocessor, chosen when the layer
/// graph is configured.
///
/// ```
/// use voxflat_core::conf::{InputPreProcessor, PreProcessor};
///
/// let p = PreProcessor::from_json(
///     r#"{"type":"cnn3DToFeedForward","inputDepth":2,"inputHeight":3,"inputWidth":3,"numChannels":4,"isNCDHW":true}"#,
/// ).unwrap();
/// let out = p.get_output_type(Some(&voxflat_core::conf::InputType::convolutional_3d(
///     Default::default(), 2, 3, 3, 4,
/// ))).unwrap();
/// assert_eq!(out.arrays_per_example(), Some(72));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PreProcessor {
    #[serde(rename = "cnn3DToFeedForward")]
    Cnn3DToFeedForward(Cnn3DToFeedForwardPreProcessor),
    #[serde(rename = "feedForwardToCnn3D")]
    FeedForwardToCnn3D(FeedForwardToCnn3DPreProcessor),
}

impl PreProcessor {
    /// Parses a preprocessor configuration from JSON.
    ///
    /// # Errors
    /// `VoxFlatError::Serialization` for malformed JSON, unknown `type` tags or
    /// invalid geometry (the message carries the underlying cause).
    pub fn from_json(json: &str) -> Result<Self, VoxFlatError> {
        serde_json::from_str(json).map_err(|e| VoxFlatError::Serialization(e.to_string()))
    }

    /// Serializes the configuration as a flat JSON record tagged with `type`.
    pub fn to_json(&self) -> Result<String, VoxFlatError> {
        serde_json::to_string(self).map_err(|e| VoxFlatError::Serialization(e.to_string()))
    }

    fn inner(&self) -> &dyn InputPreProcessor {
        match self {
            PreProcessor::Cnn3DToFeedForward(p) => p,
            PreProcessor::FeedForwardToCnn3D(p) => p,
        }
    }
}

impl From<Cnn3DToFeedForwardPreProcessor> for PreProcessor {
    fn from(p: Cnn3DToFeedForwardPreProcessor) -> Self {
        PreProcessor::Cnn3DToFeedForward(p)
    }
}

impl From<FeedForwardToCnn3DPreProcessor> for PreProcessor {
    fn from(p: FeedForwardToCnn3DPreProcessor) -> Self {
        PreProcessor::FeedForwardToCnn3D(p)
    }
}

impl InputPreProcessor for PreProcessor {
    fn pre_process(&self, input: &Tensor, mini_batch_size: usize) -> Result<Tensor, VoxFlatError> {
        self.inner().pre_process(input, mini_batch_size)
    }

    fn backprop(&self, epsilons: &Tensor, mini_batch_size: usize) -> Result<Tensor, VoxFlatError> {
        self.inner().backprop(epsilons, mini_batch_size)
    }

    fn get_output_type(&self, input_type: Option<&InputType>) -> Result<InputType, VoxFlatError> {
        self.inner().get_output_type(input_type)
    }

    fn feed_forward_mask_array(
        &self,
        mask: Option<&Tensor>,
        current_mask_state: Option<MaskState>,
        mini_batch_size: usize,
    ) -> (Option<Tensor>, Option<MaskState>) {
        self.inner()
            .feed_forward_mask_array(mask, current_mask_state, mini_batch_size)
    }

    fn box_clone(&self) -> Box<dyn InputPreProcessor> {
        Box::new(*self)
    }
}

#[cfg(test)]
#[path = "preprocessor_test.rs"]
mod tests;
