//! Metric reporter: CSV table plus two summary plots.
//!
//! Presentation layer over the rate curves. The decision-relevant parts,
//! nearest-threshold row selection and the scatter subsample, live in
//! plain functions so they stay testable without rendering anything.

pub mod csv_export;
pub mod plots;

pub use csv_export::{nearest_index, write_threshold_metrics, DECADE_TARGETS};
pub use plots::{plot_far_vs_frr, plot_watchlist_roc, scatter_indices, SCATTER_POINTS};

use openset_core::config::OutputConfig;
use openset_core::errors::ReportError;

use crate::sweep::RateCurve;

/// Write every artifact: the CSV table and both plots.
pub fn write_all(curve: &RateCurve, output: &OutputConfig) -> Result<(), ReportError> {
    write_threshold_metrics(curve, &output.metrics_csv())?;
    plot_far_vs_frr(curve, &output.far_frr_plot())?;
    plot_watchlist_roc(curve, &output.roc_plot())?;
    Ok(())
}
