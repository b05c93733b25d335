//! Top-level pipeline error.
//! Aggregates subsystem errors via `From` conversions; any failure is
//! terminal for the run that encountered it. There is no retry layer.

use super::{ConfigError, DataError, EvalError, ReportError, TrainError};

/// Errors that can abort an end-to-end run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Training error: {0}")]
    Train(#[from] TrainError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}
