//! Batch sources feeding the trainer and scorer.
//!
//! Sources are sequential: one batch at a time, reset between epochs. The
//! filesystem source reads flattened samples stored as raw little-endian
//! `f32` blobs; the in-memory source backs tests and synthetic runs.

use ndarray::{Array1, Array2};

use openset_core::errors::DataError;
use openset_core::SubjectLabel;

use crate::batch::Batch;
use crate::split::SampleRef;

/// Sequential producer of `(images, labels)` batches.
pub trait BatchSource {
    /// Rewind to the first batch.
    fn reset(&mut self);

    /// Next batch, or `None` once the source is exhausted.
    fn next_batch(&mut self) -> Result<Option<Batch>, DataError>;

    /// Total number of samples the source yields per pass.
    fn sample_count(&self) -> usize;
}

/// In-memory batch source over pre-built feature vectors.
pub struct MemorySource {
    samples: Vec<(Array1<f32>, SubjectLabel)>,
    batch_size: usize,
    cursor: usize,
}

impl MemorySource {
    pub fn new(samples: Vec<(Array1<f32>, SubjectLabel)>, batch_size: usize) -> Self {
        Self {
            samples,
            batch_size: batch_size.max(1),
            cursor: 0,
        }
    }
}

impl BatchSource for MemorySource {
    fn reset(&mut self) {
        self.cursor = 0;
    }

    fn next_batch(&mut self) -> Result<Option<Batch>, DataError> {
        if self.cursor >= self.samples.len() {
            return Ok(None);
        }
        let end = (self.cursor + self.batch_size).min(self.samples.len());
        let chunk = &self.samples[self.cursor..end];
        self.cursor = end;

        let width = chunk[0].0.len();
        let mut flat = Vec::with_capacity(chunk.len() * width);
        let mut labels = Vec::with_capacity(chunk.len());
        for (features, label) in chunk {
            flat.extend(features.iter().copied());
            labels.push(*label);
        }
        let images = Array2::from_shape_vec((chunk.len(), width), flat).map_err(|e| {
            DataError::MalformedSample {
                path: "<memory>".to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Some(Batch::new(images, labels)?))
    }

    fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

/// Filesystem batch source over split sample references.
pub struct FsSource {
    samples: Vec<SampleRef>,
    batch_size: usize,
    feature_len: usize,
    cursor: usize,
}

impl FsSource {
    pub fn new(samples: Vec<SampleRef>, batch_size: usize, feature_len: usize) -> Self {
        Self {
            samples,
            batch_size: batch_size.max(1),
            feature_len,
            cursor: 0,
        }
    }

    /// Read one flattened sample: raw little-endian `f32`, fixed length.
    fn read_sample(&self, sample: &SampleRef) -> Result<Vec<f32>, DataError> {
        let bytes = std::fs::read(&sample.path).map_err(|e| DataError::Io {
            path: sample.path.display().to_string(),
            message: e.to_string(),
        })?;
        if bytes.len() % 4 != 0 {
            return Err(DataError::MalformedSample {
                path: sample.path.display().to_string(),
                message: format!("{} bytes is not a whole number of f32 values", bytes.len()),
            });
        }
        let count = bytes.len() / 4;
        if count != self.feature_len {
            return Err(DataError::FeatureLengthMismatch {
                path: sample.path.display().to_string(),
                expected: self.feature_len,
                actual: count,
            });
        }
        Ok(bytes
            .chunks_exact(4)
            .map(|chunk| {
                let arr: [u8; 4] = chunk.try_into().expect("chunks_exact yields 4-byte chunks");
                f32::from_le_bytes(arr)
            })
            .collect())
    }
}

impl BatchSource for FsSource {
    fn reset(&mut self) {
        self.cursor = 0;
    }

    fn next_batch(&mut self) -> Result<Option<Batch>, DataError> {
        if self.cursor >= self.samples.len() {
            return Ok(None);
        }
        let end = (self.cursor + self.batch_size).min(self.samples.len());
        let chunk = self.samples[self.cursor..end].to_vec();
        self.cursor = end;

        let mut flat = Vec::with_capacity(chunk.len() * self.feature_len);
        let mut labels = Vec::with_capacity(chunk.len());
        for sample in &chunk {
            flat.extend(self.read_sample(sample)?);
            labels.push(sample.label);
        }
        let images =
            Array2::from_shape_vec((chunk.len(), self.feature_len), flat).map_err(|e| {
                DataError::MalformedSample {
                    path: "<batch>".to_string(),
                    message: e.to_string(),
                }
            })?;
        Ok(Some(Batch::new(images, labels)?))
    }

    fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn memory_source(n: usize, batch_size: usize) -> MemorySource {
        let samples = (0..n)
            .map(|i| (array![i as f32, 1.0], SubjectLabel::Known(0)))
            .collect();
        MemorySource::new(samples, batch_size)
    }

    #[test]
    fn test_memory_source_batching() {
        let mut source = memory_source(5, 2);
        let mut sizes = Vec::new();
        while let Some(batch) = source.next_batch().unwrap() {
            sizes.push(batch.len());
        }
        assert_eq!(sizes, vec![2, 2, 1]);
        assert_eq!(source.sample_count(), 5);
    }

    #[test]
    fn test_memory_source_reset() {
        let mut source = memory_source(3, 2);
        while source.next_batch().unwrap().is_some() {}
        assert!(source.next_batch().unwrap().is_none());
        source.reset();
        assert!(source.next_batch().unwrap().is_some());
    }

    #[test]
    fn test_fs_source_reads_raw_f32() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("sample.bin");
        let values = [0.25f32, -1.5, 3.0];
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        std::fs::write(&path, bytes).unwrap();

        let mut source = FsSource::new(
            vec![SampleRef {
                path,
                label: SubjectLabel::Known(1),
            }],
            4,
            3,
        );
        let batch = source.next_batch().unwrap().unwrap();
        assert_eq!(batch.images.row(0).to_vec(), values.to_vec());
        assert_eq!(batch.labels, vec![SubjectLabel::Known(1)]);
    }

    #[test]
    fn test_fs_source_feature_length_mismatch() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("short.bin");
        std::fs::write(&path, 1.0f32.to_le_bytes()).unwrap();

        let mut source = FsSource::new(
            vec![SampleRef {
                path,
                label: SubjectLabel::Unknown,
            }],
            1,
            8,
        );
        let err = source.next_batch().unwrap_err();
        assert!(matches!(
            err,
            DataError::FeatureLengthMismatch {
                expected: 8,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_fs_source_missing_file_is_io_error() {
        let mut source = FsSource::new(
            vec![SampleRef {
                path: "/nonexistent/sample.bin".into(),
                label: SubjectLabel::Unknown,
            }],
            1,
            4,
        );
        assert!(matches!(
            source.next_batch().unwrap_err(),
            DataError::Io { .. }
        ));
    }
}
