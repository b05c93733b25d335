//! Trainer: cross-entropy over enrolled subjects, optimizer injected.
//!
//! The trainer never sees the `Unknown` label; open-set rejection is
//! learned implicitly through confidence calibration. The checkpoint is
//! written exactly once, after the final epoch.

use std::path::Path;

use ndarray::Array2;

use openset_core::errors::{ModelError, TrainError};
use openset_core::SubjectLabel;
use openset_data::BatchSource;
use openset_model::{checkpoint, softmax, Optimizer, TrainableModel};

/// Mean cross-entropy over a batch, plus the gradient w.r.t. the logits.
///
/// The gradient is `(softmax - onehot) / batch_size`, matching the mean
/// reduction of the loss.
pub fn cross_entropy(
    logits: &Array2<f32>,
    targets: &[u32],
) -> Result<(f64, Array2<f32>), TrainError> {
    if targets.len() != logits.nrows() {
        return Err(TrainError::Model(ModelError::ShapeMismatch {
            name: "targets".to_string(),
            expected: vec![logits.nrows()],
            actual: vec![targets.len()],
        }));
    }
    let classes = logits.ncols();
    let batch = logits.nrows().max(1) as f32;

    let mut grad = softmax(logits);
    let mut loss = 0.0f64;

    for (mut row, &target) in grad.rows_mut().into_iter().zip(targets.iter()) {
        let target = target as usize;
        if target >= classes {
            return Err(TrainError::Model(ModelError::ClassCountMismatch {
                expected: classes,
                actual: target + 1,
            }));
        }
        let p = f64::from(row[target]).max(1e-12);
        loss -= p.ln();
        row[target] -= 1.0;
    }
    grad.mapv_inplace(|v| v / batch);

    Ok((loss / f64::from(batch), grad))
}

/// Train for `epochs` passes over the source, then persist the checkpoint.
///
/// Per-epoch loss is the sum of per-batch mean losses divided by the total
/// sample count of the source; this normalization is what makes loss curves
/// comparable across batch sizes.
pub fn train<M: TrainableModel, O: Optimizer>(
    model: &mut M,
    source: &mut dyn BatchSource,
    optimizer: &mut O,
    epochs: u32,
    checkpoint_path: &Path,
) -> Result<(), TrainError> {
    if source.sample_count() == 0 {
        return Err(TrainError::NoTrainingSamples);
    }

    let mut params = model.state_dict();

    for epoch in 1..=epochs {
        source.reset();
        let mut epoch_loss = 0.0f64;

        while let Some(batch) = source.next_batch()? {
            let targets = batch
                .labels
                .iter()
                .map(|label| match label {
                    SubjectLabel::Known(class) => Ok(*class),
                    SubjectLabel::Unknown => Err(TrainError::UnenrolledSample),
                })
                .collect::<Result<Vec<u32>, TrainError>>()?;

            let logits = model.forward(batch.images.view())?;
            let (loss, grad_logits) = cross_entropy(&logits, &targets)?;
            let grads = model.backward(batch.images.view(), &grad_logits)?;

            optimizer.step(&mut params, &grads)?;
            model.load_state_dict(&params)?;

            epoch_loss += loss;
        }

        let mean_loss = epoch_loss / source.sample_count() as f64;
        tracing::info!(epoch, loss = format!("{mean_loss:.4}"), "epoch complete");
    }

    checkpoint::save(&model.state_dict(), checkpoint_path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_cross_entropy_uniform_logits() {
        let logits = array![[0.0f32, 0.0, 0.0, 0.0]];
        let (loss, _) = cross_entropy(&logits, &[2]).unwrap();
        assert!((loss - (4.0f64).ln()).abs() < 1e-6);
    }

    #[test]
    fn test_cross_entropy_confident_correct_is_small() {
        let logits = array![[10.0f32, -10.0]];
        let (loss, _) = cross_entropy(&logits, &[0]).unwrap();
        assert!(loss < 1e-3);
    }

    #[test]
    fn test_gradient_sums_to_zero_per_row() {
        let logits = array![[1.0f32, 2.0, 0.5], [0.0, 0.0, 3.0]];
        let (_, grad) = cross_entropy(&logits, &[0, 2]).unwrap();
        for row in grad.rows() {
            assert!(row.sum().abs() < 1e-6);
        }
    }

    #[test]
    fn test_gradient_negative_at_target() {
        let logits = array![[0.0f32, 0.0]];
        let (_, grad) = cross_entropy(&logits, &[1]).unwrap();
        assert!(grad[[0, 1]] < 0.0);
        assert!(grad[[0, 0]] > 0.0);
    }

    #[test]
    fn test_target_out_of_range() {
        let logits = array![[0.0f32, 0.0]];
        assert!(matches!(
            cross_entropy(&logits, &[5]).unwrap_err(),
            TrainError::Model(ModelError::ClassCountMismatch { expected: 2, .. })
        ));
    }

    #[test]
    fn test_target_count_mismatch() {
        let logits = array![[0.0f32, 0.0], [0.0, 0.0]];
        assert!(cross_entropy(&logits, &[0]).is_err());
    }
}
