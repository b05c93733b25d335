//! Dataset and batch-source errors.

/// Errors raised by the split builder and batch sources.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Invalid raw label {raw}: expected -1 (unenrolled) or a non-negative class index")]
    InvalidLabel { raw: i64 },

    #[error("I/O error reading {path}: {message}")]
    Io { path: String, message: String },

    #[error("Malformed sample {path}: {message}")]
    MalformedSample { path: String, message: String },

    #[error("Sample {path} has {actual} features, expected {expected}")]
    FeatureLengthMismatch {
        path: String,
        expected: usize,
        actual: usize,
    },

    #[error("Open-set split produced an empty {partition} partition")]
    EmptySplit { partition: &'static str },

    #[error("Batch has {labels} labels for {rows} image rows")]
    BatchLengthMismatch { rows: usize, labels: usize },
}
