//! Named parameter tensors.
//!
//! Checkpoints and optimizer state are maps from parameter name to a
//! dynamic-dimensional tensor; `BTreeMap` keeps serialization order stable.

use std::collections::BTreeMap;

use ndarray::ArrayD;

/// Dynamic-dimensional parameter tensor.
pub type Tensor = ArrayD<f32>;

/// Parameter name → tensor, the unit of checkpointing and optimization.
pub type ParamMap = BTreeMap<String, Tensor>;
