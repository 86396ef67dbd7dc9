//! Abstract shape descriptors used for output-type inference when a layer
//! graph is built. They describe one example (no minibatch dimension).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tensor::utils::checked_product;

/// Channel ordering for 3-D convolutional activations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Convolution3DFormat {
    /// Channels first: `[minibatch, channels, depth, height, width]`.
    #[default]
    #[serde(rename = "NCDHW")]
    Ncdhw,
    /// Channels last: `[minibatch, depth, height, width, channels]`.
    #[serde(rename = "NDHWC")]
    Ndhwc,
}

impl Convolution3DFormat {
    pub fn from_ncdhw(is_ncdhw: bool) -> Self {
        if is_ncdhw {
            Convolution3DFormat::Ncdhw
        } else {
            Convolution3DFormat::Ndhwc
        }
    }

    pub fn is_ncdhw(self) -> bool {
        self == Convolution3DFormat::Ncdhw
    }
}

/// Kind tag of an [`InputType`], without its sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputTypeKind {
    FeedForward,
    Recurrent,
    Convolutional,
    Convolutional3D,
}

/// Shape descriptor of the activations flowing into a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum InputType {
    /// Flat activations, `[minibatch, size]`.
    FeedForward { size: usize },
    /// Time series, `[minibatch, size, time_series_length]`.
    Recurrent {
        size: usize,
        #[serde(default)]
        time_series_length: Option<usize>,
    },
    /// 2-D convolutional activations, `[minibatch, channels, height, width]`.
    Convolutional {
        height: usize,
        width: usize,
        channels: usize,
    },
    /// 3-D convolutional activations; axis order given by `data_format`.
    #[serde(rename = "convolutional3D")]
    Convolutional3D {
        depth: usize,
        height: usize,
        width: usize,
        channels: usize,
        #[serde(default)]
        data_format: Convolution3DFormat,
    },
}

impl InputType {
    pub fn feed_forward(size: usize) -> Self {
        InputType::FeedForward { size }
    }

    pub fn recurrent(size: usize, time_series_length: Option<usize>) -> Self {
        InputType::Recurrent {
            size,
            time_series_length,
        }
    }

    pub fn convolutional(height: usize, width: usize, channels: usize) -> Self {
        InputType::Convolutional {
            height,
            width,
            channels,
        }
    }

    pub fn convolutional_3d(
        data_format: Convolution3DFormat,
        depth: usize,
        height: usize,
        width: usize,
        channels: usize,
    ) -> Self {
        InputType::Convolutional3D {
            depth,
            height,
            width,
            channels,
            data_format,
        }
    }

    pub fn kind(&self) -> InputTypeKind {
        match self {
            InputType::FeedForward { .. } => InputTypeKind::FeedForward,
            InputType::Recurrent { .. } => InputTypeKind::Recurrent,
            InputType::Convolutional { .. } => InputTypeKind::Convolutional,
            InputType::Convolutional3D { .. } => InputTypeKind::Convolutional3D,
        }
    }

    /// Number of values per example, or `None` if it overflows `usize`.
    /// Recurrent inputs of unknown length count a single time step.
    pub fn arrays_per_example(&self) -> Option<usize> {
        match *self {
            InputType::FeedForward { size } => Some(size),
            InputType::Recurrent {
                size,
                time_series_length,
            } => checked_product(&[size, time_series_length.unwrap_or(1)]),
            InputType::Convolutional {
                height,
                width,
                channels,
            } => checked_product(&[height, width, channels]),
            InputType::Convolutional3D {
                depth,
                height,
                width,
                channels,
                ..
            } => checked_product(&[depth, height, width, channels]),
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputType::FeedForward { size } => write!(f, "InputTypeFeedForward(size={})", size),
            InputType::Recurrent {
                size,
                time_series_length,
            } => match time_series_length {
                Some(len) => write!(f, "InputTypeRecurrent(size={}, timeSeriesLength={})", size, len),
                None => write!(f, "InputTypeRecurrent(size={})", size),
            },
            InputType::Convolutional {
                height,
                width,
                channels,
            } => write!(
                f,
                "InputTypeConvolutional(h={}, w={}, c={})",
                height, width, channels
            ),
            InputType::Convolutional3D {
                depth,
                height,
                width,
                channels,
                data_format,
            } => write!(
                f,
                "InputTypeConvolutional3D(format={:?}, d={}, h={}, w={}, c={})",
                data_format, depth, height, width, channels
            ),
        }
    }
}
