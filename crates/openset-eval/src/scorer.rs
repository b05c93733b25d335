//! Scorer: checkpoint + held-out set → confidence/label records.
//!
//! Only the max-softmax confidence and the true label survive; the
//! open-set decision needs "should this confident match be rejected", not
//! which enrolled subject it best matches.

use std::path::Path;

use openset_core::errors::{EvalError, ModelError};
use openset_data::BatchSource;
use openset_model::{checkpoint, softmax, Model};

use crate::sweep::SampleScore;

/// Load the checkpoint into the model, then score the full source.
///
/// A missing checkpoint aborts before any scoring occurs.
pub fn score_checkpoint<M: Model>(
    model: &mut M,
    source: &mut dyn BatchSource,
    checkpoint_path: &Path,
) -> Result<Vec<SampleScore>, EvalError> {
    let params = checkpoint::load(checkpoint_path)?;
    model.load_state_dict(&params)?;
    score_batches(model, source)
}

/// Run inference over every batch and keep `(confidence, label)` per sample.
pub fn score_batches<M: Model>(
    model: &M,
    source: &mut dyn BatchSource,
) -> Result<Vec<SampleScore>, EvalError> {
    source.reset();
    let mut scores = Vec::with_capacity(source.sample_count());

    while let Some(batch) = source.next_batch()? {
        let logits = model.forward(batch.images.view())?;
        if logits.ncols() != model.num_classes() {
            return Err(ModelError::ClassCountMismatch {
                expected: model.num_classes(),
                actual: logits.ncols(),
            }
            .into());
        }

        let probs = softmax(&logits);
        for (row, label) in probs.outer_iter().zip(batch.labels.iter()) {
            let confidence = row.fold(f32::NEG_INFINITY, |a, &b| a.max(b));
            scores.push(SampleScore::new(f64::from(confidence), *label));
        }
        tracing::debug!(batch_len = batch.len(), "scored batch");
    }

    tracing::info!(samples = scores.len(), "scoring complete");
    Ok(scores)
}
