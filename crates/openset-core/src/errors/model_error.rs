//! Model forward/backward and state-dict errors.

/// Errors raised by model implementations.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Shape mismatch for {name}: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        name: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Checkpoint is missing parameter {name}")]
    MissingParameter { name: String },

    #[error("Model produced {actual} logit columns but declares {expected} classes")]
    ClassCountMismatch { expected: usize, actual: usize },

    #[error("Input batch has {actual} features, model expects {expected}")]
    InputWidthMismatch { expected: usize, actual: usize },
}
