//! Checkpoint persistence errors.

/// Errors raised while reading or writing model checkpoints.
#[derive(Debug, thiserror::Error)]
pub enum CheckpointError {
    /// Evaluation without a trained checkpoint is fatal before any scoring.
    #[error("Checkpoint not found at {path}")]
    NotFound { path: String },

    #[error("Failed to read checkpoint {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to write checkpoint {path}: {message}")]
    Write { path: String, message: String },
}
