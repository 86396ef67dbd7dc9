// src/ops/mod.rs
// Operations on tensors. Only shape/layout (view) ops are needed here.

pub mod view;
