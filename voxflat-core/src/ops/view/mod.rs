// voxflat-core/src/ops/view/mod.rs

pub mod contiguous;
pub mod permute;
pub mod reshape;

pub mod utils;

pub use contiguous::contiguous_op;
pub use permute::{permute_op, transpose_op};
pub use reshape::reshape_op;
