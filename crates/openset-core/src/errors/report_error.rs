//! Metric reporting errors.

/// Errors raised while exporting CSV tables or rendering plots.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("I/O error writing {path}: {message}")]
    Io { path: String, message: String },

    #[error("CSV export failed: {message}")]
    Csv { message: String },

    #[error("Plot rendering failed for {path}: {message}")]
    Render { path: String, message: String },

    #[error("Rate curve is empty; nothing to report")]
    EmptyCurve,
}
