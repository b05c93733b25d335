//! Dataset selection and split parameters.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Dataset selection: which subjects, which hand, which spectral band, and
/// how to split them into enrolled/unenrolled partitions.
///
/// `None` fields fall back to compiled defaults via the accessor methods.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatasetConfig {
    /// Dataset root directory; samples live under
    /// `<root>/<subject>/<hand>/<spectrum>/*.bin`.
    pub root: Option<PathBuf>,
    /// Subject identifiers to draw from.
    pub subjects: Vec<String>,
    /// Hand selection ("left" or "right").
    pub hand: Option<String>,
    /// Spectral band selection (e.g. "850", "940").
    pub spectrum: Option<String>,
    /// Seed for the split shuffle; fixed seed means fixed split.
    pub seed: Option<u64>,
    /// Fraction of subjects that are enrolled (known) at evaluation time.
    pub known_fraction: Option<f64>,
    /// Per-subject fraction of enrolled samples used for training.
    pub train_fraction: Option<f64>,
    /// Samples per batch.
    pub batch_size: Option<usize>,
    /// Flattened feature length of one sample.
    pub feature_len: Option<usize>,
}

impl DatasetConfig {
    pub fn root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| PathBuf::from("dataset"))
    }

    pub fn hand(&self) -> &str {
        self.hand.as_deref().unwrap_or("left")
    }

    pub fn spectrum(&self) -> &str {
        self.spectrum.as_deref().unwrap_or("940")
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(42)
    }

    pub fn known_fraction(&self) -> f64 {
        self.known_fraction.unwrap_or(0.8)
    }

    pub fn train_fraction(&self) -> f64 {
        self.train_fraction.unwrap_or(0.75)
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size.unwrap_or(32)
    }

    pub fn feature_len(&self) -> usize {
        self.feature_len.unwrap_or(4096)
    }
}
