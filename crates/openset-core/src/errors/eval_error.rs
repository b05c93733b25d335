//! Evaluation (scoring) errors.

use super::{CheckpointError, DataError, ModelError};

/// Errors raised while producing confidence scores from a checkpoint.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("Checkpoint error: {0}")]
    Checkpoint(#[from] CheckpointError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),
}
