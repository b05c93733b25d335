//! Training errors.

use super::{CheckpointError, DataError, ModelError};

/// Errors raised by the training loop and optimizers.
#[derive(Debug, thiserror::Error)]
pub enum TrainError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Checkpoint error: {0}")]
    Checkpoint(#[from] CheckpointError),

    /// The trainer only ever sees enrolled subjects; rejection of
    /// unenrolled probes is learned through confidence calibration.
    #[error("Training batch contains an unenrolled sample")]
    UnenrolledSample,

    #[error("Optimizer received no gradient for parameter {name}")]
    MissingGradient { name: String },

    #[error("Training set is empty")]
    NoTrainingSamples,
}
