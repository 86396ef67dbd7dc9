use log::debug;
use serde::{Deserialize, Serialize};

use super::{cnn3d_shape, validate_geometry, Cnn3DGeometryRecord, InputPreProcessor};
use crate::conf::input_type::{Convolution3DFormat, InputType};
use crate::conf::mask::MaskState;
use crate::error::VoxFlatError;
use crate::tensor::Tensor;

/// Lets dense layers feed 3-D convolutional layers (e.g. Dense -> CNN3D).
///
/// Forward reshapes `[minibatch, depth * height * width * channels]` into the
/// 5-D layout selected by `is_ncdhw`; backward flattens the 5-D epsilons again.
/// Opposite of [`Cnn3DToFeedForwardPreProcessor`](super::Cnn3DToFeedForwardPreProcessor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Cnn3DGeometryRecord", into = "Cnn3DGeometryRecord")]
pub struct FeedForwardToCnn3DPreProcessor {
    input_depth: usize,
    input_height: usize,
    input_width: usize,
    num_channels: usize,
    is_ncdhw: bool,
}

impl FeedForwardToCnn3DPreProcessor {
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

    pub fn flattened_size(&self) -> usize {
        self.input_depth * self.input_height * self.input_width * self.num_channels
    }

    fn volume_shape(&self, batch: usize) -> Vec<usize> {
        cnn3d_shape(
            batch,
            self.input_depth,
            self.input_height,
            self.input_width,
            self.num_channels,
            self.is_ncdhw,
        )
    }

    fn output_type(&self) -> InputType {
        InputType::convolutional_3d(
            Convolution3DFormat::from_ncdhw(self.is_ncdhw),
            self.input_depth,
            self.input_height,
            self.input_width,
            self.num_channels,
        )
    }
}

impl TryFrom<Cnn3DGeometryRecord> for FeedForwardToCnn3DPreProcessor {
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

impl From<FeedForwardToCnn3DPreProcessor> for Cnn3DGeometryRecord {
    fn from(p: FeedForwardToCnn3DPreProcessor) -> Self {
        Cnn3DGeometryRecord {
            input_depth: p.input_depth,
            input_height: p.input_height,
            input_width: p.input_width,
            num_channels: p.num_channels,
            is_ncdhw: p.is_ncdhw,
        }
    }
}

impl InputPreProcessor for FeedForwardToCnn3DPreProcessor {
    fn pre_process(&self, input: &Tensor, _mini_batch_size: usize) -> Result<Tensor, VoxFlatError> {
        let in_shape = input.shape();
        if in_shape.len() == 5 {
            debug!("FeedForwardToCnn3D: rank 5 input {:?} passed through", in_shape);
            return Ok(input.clone());
        }
        if in_shape.len() != 2 || in_shape[1] != self.flattened_size() {
            return Err(VoxFlatError::InvalidShape {
                operation: "FeedForwardToCnn3DPreProcessor::pre_process".to_string(),
                expected: format!("rank 2 activations [minibatch, {}]", self.flattened_size()),
                actual: in_shape,
            });
        }

        let input = input.contiguous()?;
        input.reshape(self.volume_shape(in_shape[0]))
    }

    fn backprop(&self, epsilons: &Tensor, _mini_batch_size: usize) -> Result<Tensor, VoxFlatError> {
        let eps_shape = epsilons.shape();
        if eps_shape.len() == 2 {
            debug!("FeedForwardToCnn3D: rank 2 epsilons {:?} passed through", eps_shape);
            return Ok(epsilons.clone());
        }
        let batch = eps_shape.first().copied().unwrap_or(0);
        let expected = self.volume_shape(batch);
        if eps_shape != expected {
            return Err(VoxFlatError::InvalidShape {
                operation: "FeedForwardToCnn3DPreProcessor::backprop".to_string(),
                expected: format!("rank 5 epsilons {:?}", expected),
                actual: eps_shape,
            });
        }

        let epsilons = epsilons.contiguous()?;
        epsilons.reshape(vec![batch, self.flattened_size()])
    }

    fn get_output_type(&self, input_type: Option<&InputType>) -> Result<InputType, VoxFlatError> {
        let expected = self.output_type();
        match input_type {
            Some(InputType::FeedForward { size }) if *size == self.flattened_size() => Ok(expected),
            Some(t @ InputType::Convolutional3D { .. }) if *t == expected => Ok(expected),
            other => Err(VoxFlatError::InvalidInputType {
                expected: format!(
                    "InputTypeFeedForward(size={}) or {}",
                    self.flattened_size(),
                    expected
                ),
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
        (mask.cloned(), current_mask_state)
    }

    fn box_clone(&self) -> Box<dyn InputPreProcessor> {
        Box::new(*self)
    }
}
