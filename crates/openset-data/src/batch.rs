//! A batch of flattened samples and their ground-truth labels.

use ndarray::Array2;
use openset_core::errors::DataError;
use openset_core::SubjectLabel;

/// One batch: row-major flattened images plus one label per row.
#[derive(Debug, Clone)]
pub struct Batch {
    pub images: Array2<f32>,
    pub labels: Vec<SubjectLabel>,
}

impl Batch {
    /// Build a batch, enforcing the row/label count invariant.
    pub fn new(images: Array2<f32>, labels: Vec<SubjectLabel>) -> Result<Self, DataError> {
        if images.nrows() != labels.len() {
            return Err(DataError::BatchLengthMismatch {
                rows: images.nrows(),
                labels: labels.len(),
            });
        }
        Ok(Self { images, labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
