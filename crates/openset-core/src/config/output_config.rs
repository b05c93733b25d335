//! Output artifact locations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Base directory for run artifacts. Tables and plots land under `out/`,
/// the model checkpoint under `model/`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: Option<PathBuf>,
}

impl OutputConfig {
    pub fn dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// `<dir>/out/threshold_metrics.csv`
    pub fn metrics_csv(&self) -> PathBuf {
        self.dir().join("out").join("threshold_metrics.csv")
    }

    /// `<dir>/out/far_vs_frr.png`
    pub fn far_frr_plot(&self) -> PathBuf {
        self.dir().join("out").join("far_vs_frr.png")
    }

    /// `<dir>/out/watchlist_roc_curve.png`
    pub fn roc_plot(&self) -> PathBuf {
        self.dir().join("out").join("watchlist_roc_curve.png")
    }

    /// `<dir>/model/model.json`
    pub fn checkpoint(&self) -> PathBuf {
        self.dir().join("model").join("model.json")
    }
}
