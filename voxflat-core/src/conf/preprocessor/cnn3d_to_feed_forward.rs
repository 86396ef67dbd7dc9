use log::debug;
use serde::{Deserialize, Serialize};

use super::{cnn3d_shape, validate_geometry, Cnn3DGeometryRecord, InputPreProcessor};
use crate::conf::input_type::InputType;
use crate::conf::mask::MaskState;
use crate::error::VoxFlatError;
use crate::tensor::utils::checked_product;
use crate::tensor::Tensor;

/// Lets 3-D convolutional layers feed dense layers (e.g. CNN3D -> Dense).
///
/// * Forward: reshapes 5-D activations `[minibatch, channels, depth, height, width]`
///   (or `[minibatch, depth, height, width, channels]` when `is_ncdhw` is false)
///   into 2-D activations `[minibatch, depth * height * width * channels]`.
/// * Backward: reshapes 2-D epsilons back into the 5-D layout.
///
/// The forward flatten always collapses axes 1..=4 in their stored order; for
/// channels-last input the flat columns are therefore ordered `d, h, w, c`.
///
/// See [`FeedForwardToCnn3DPreProcessor`](super::FeedForwardToCnn3DPreProcessor)
/// for the opposite direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Cnn3DGeometryRecord", into = "Cnn3DGeometryRecord")]
pub struct Cnn3DToFeedForwardPreProcessor {
    input_depth: usize,
    input_height: usize,
    input_width: usize,
    num_channels: usize,
    is_ncdhw: bool,
}

impl Cnn3DToFeedForwardPreProcessor {
    /// # Arguments
    /// * `input_depth`, `input_height`, `input_width`: spatial size of the activations.
    /// * `num_channels`: number of channels (feature maps).
    /// * `is_ncdhw`: channels first (`NCDHW`) if true, channels last (`NDHWC`) otherwise.
    ///
    /// # Errors
    /// `VoxFlatError::InvalidConfiguration` if any size is zero or their product
    /// overflows `usize`.
    pub fn new(
        input_depth: usize,
        input_height: usize,
        input_width: usize,
        num_channels: usize,
        is_ncdhw: bool,
    ) -> Result<Self, VoxFlatError> {
        validate_geometry(input_depth, input_height, input_width, num_channels)?;
        Ok(Self {
            input_depth,
            input_height,
            input_width,
            num_channels,
            is_ncdhw,
        })
    }

    /// Single channel, channels first.
    pub fn with_single_channel(
        input_depth: usize,
        input_height: usize,
        input_width: usize,
    ) -> Result<Self, VoxFlatError> {
        Self::new(input_depth, input_height, input_width, 1, true)
    }

    pub fn input_depth(&self) -> usize {
        self.input_depth
    }

    pub fn input_height(&self) -> usize {
        self.input_height
    }

    pub fn input_width(&self) -> usize {
        self.input_width
    }

    pub fn num_channels(&self) -> usize {
        self.num_channels
    }

    pub fn is_ncdhw(&self) -> bool {
        self.is_ncdhw
    }

    /// Width of the flattened activations: `depth * height * width * channels`.
    pub fn flattened_size(&self) -> usize {
        self.input_depth * self.input_height * self.input_width * self.num_channels
    }

    fn expected_layout(&self) -> String {
        let layout = if self.is_ncdhw {
            "[minibatch, channels, depth, height, width]"
        } else {
            "[minibatch, depth, height, width, channels]"
        };
        format!(
            "rank 5 activations in format {} with channels={}, depth={}, height={}, width={}",
            layout, self.num_channels, self.input_depth, self.input_height, self.input_width
        )
    }
}

impl TryFrom<Cnn3DGeometryRecord> for Cnn3DToFeedForwardPreProcessor {
    type Error = VoxFlatError;

    fn try_from(r: Cnn3DGeometryRecord) -> Result<Self, Self::Error> {
        Self::new(
            r.input_depth,
            r.input_height,
            r.input_width,
            r.num_channels,
            r.is_ncdhw,
        )
    }
}

impl From<Cnn3DToFeedForwardPreProcessor> for Cnn3DGeometryRecord {
    fn from(p: Cnn3DToFeedForwardPreProcessor) -> Self {
        Cnn3DGeometryRecord {
            input_depth: p.input_depth,
            input_height: p.input_height,
            input_width: p.input_width,
            num_channels: p.num_channels,
            is_ncdhw: p.is_ncdhw,
        }
    }
}

impl InputPreProcessor for Cnn3DToFeedForwardPreProcessor {
    fn pre_process(&self, input: &Tensor, mini_batch_size: usize) -> Result<Tensor, VoxFlatError> {
        let in_shape = input.shape();
        if in_shape.len() == 2 {
            debug!("Cnn3DToFeedForward: rank 2 input {:?} passed through", in_shape);
            return Ok(input.clone());
        }

        let channel_axis = if self.is_ncdhw { 1 } else { 4 };
        if in_shape.len() != 5 || in_shape[channel_axis] != self.num_channels {
            return Err(VoxFlatError::InvalidShape {
                operation: "Cnn3DToFeedForwardPreProcessor::pre_process".to_string(),
                expected: self.expected_layout(),
                actual: in_shape,
            });
        }
        if in_shape[0] != mini_batch_size {
            debug!(
                "Cnn3DToFeedForward: minibatch hint {} differs from activations batch {}",
                mini_batch_size, in_shape[0]
            );
        }

        // Reshape is a pure view, so the data must be row-major first.
        let input = input.contiguous()?;
        let columns = checked_product(&in_shape[1..]).ok_or_else(|| VoxFlatError::InvalidShape {
            operation: "Cnn3DToFeedForwardPreProcessor::pre_process".to_string(),
            expected: self.expected_layout(),
            actual: in_shape.clone(),
        })?;
        input.reshape(vec![in_shape[0], columns])
    }

    fn backprop(&self, epsilons: &Tensor, _mini_batch_size: usize) -> Result<Tensor, VoxFlatError> {
        let eps_shape = epsilons.shape();
        if eps_shape.len() == 5 {
            debug!("Cnn3DToFeedForward: rank 5 epsilons {:?} passed through", eps_shape);
            return Ok(epsilons.clone());
        }

        // Epsilons are 2d, with shape [minibatch, channels * depth * height * width]
        let expected_columns = self.flattened_size();
        if eps_shape.len() != 2 || eps_shape[1] != expected_columns {
            return Err(VoxFlatError::InvalidShape {
                operation: "Cnn3DToFeedForwardPreProcessor::backprop".to_string(),
                expected: format!(
                    "rank 2 epsilons [minibatch, {}] (depth {} x height {} x width {} x channels {})",
                    expected_columns,
                    self.input_depth,
                    self.input_height,
                    self.input_width,
                    self.num_channels
                ),
                actual: eps_shape,
            });
        }

        let epsilons = epsilons.contiguous()?;
        epsilons.reshape(cnn3d_shape(
            eps_shape[0],
            self.input_depth,
            self.input_height,
            self.input_width,
            self.num_channels,
            self.is_ncdhw,
        ))
    }

    fn get_output_type(&self, input_type: Option<&InputType>) -> Result<InputType, VoxFlatError> {
        match input_type {
            Some(t @ InputType::Convolutional3D { .. }) => t
                .arrays_per_example()
                .map(InputType::feed_forward)
                .ok_or_else(|| VoxFlatError::InvalidInputType {
                    expected: "Convolutional3D input whose size fits in usize".to_string(),
                    actual: t.to_string(),
                }),
            other => Err(VoxFlatError::InvalidInputType {
                expected: "input of type Convolutional3D".to_string(),
                actual: other.map_or_else(|| "None".to_string(), |t| t.to_string()),
            }),
        }
    }

    fn feed_forward_mask_array(
        &self,
        mask: Option<&Tensor>,
        current_mask_state: Option<MaskState>,
        _mini_batch_size: usize,
    ) -> (Option<Tensor>, Option<MaskState>) {
        // Pass-through, unmodified: one mask value per example is unaffected by the flatten
        (mask.cloned(), current_mask_state)
    }

    fn box_clone(&self) -> Box<dyn InputPreProcessor> {
        Box::new(*self)
    }
}

#[cfg(test)]
#[path = "cnn3d_to_feed_forward_test.rs"]
mod tests;
