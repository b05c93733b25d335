//! Model traits and the shared softmax.

use ndarray::{Array2, ArrayView2};

use openset_core::errors::ModelError;

use crate::tensor::ParamMap;

/// Anything that maps a batch of flattened images to per-class logits.
///
/// Models here are plain structs: there is no implicit gradient tape, so
/// scoring is inference-only by construction.
pub trait Model {
    /// Number of enrolled classes the model discriminates between.
    fn num_classes(&self) -> usize;

    /// Per-class logits, one row per input row.
    fn forward(&self, images: ArrayView2<'_, f32>) -> Result<Array2<f32>, ModelError>;

    /// Snapshot of all named parameters.
    fn state_dict(&self) -> ParamMap;

    /// Replace all parameters from a checkpoint map.
    fn load_state_dict(&mut self, params: &ParamMap) -> Result<(), ModelError>;
}

/// Adds the backward seam the trainer needs: parameter gradients given
/// upstream logit gradients for the same batch.
pub trait TrainableModel: Model {
    fn backward(
        &self,
        images: ArrayView2<'_, f32>,
        grad_logits: &Array2<f32>,
    ) -> Result<ParamMap, ModelError>;
}

/// Row-wise numerically stable softmax.
///
/// Each row has its maximum subtracted before exponentiation so large
/// logits cannot overflow.
pub fn softmax(logits: &Array2<f32>) -> Array2<f32> {
    let mut probs = logits.clone();
    for mut row in probs.rows_mut() {
        let max = row.fold(f32::NEG_INFINITY, |a, &b| a.max(b));
        row.mapv_inplace(|v| (v - max).exp());
        let sum = row.sum();
        if sum > 0.0 && sum.is_finite() {
            row.mapv_inplace(|v| v / sum);
        }
    }
    probs
}
