use serde::{Deserialize, Serialize};

/// Validity indicator propagated alongside a mask array through the layer graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaskState {
    /// The mask is applied: masked-out steps are zeroed.
    Active,
    /// The mask is carried along but not applied by the current layer.
    Passthrough,
}
