//! Tabular export of the rate curves at decade thresholds.

use std::path::Path;

use openset_core::errors::ReportError;

use crate::sweep::RateCurve;

/// Nominal thresholds the table reports at. The written values are the
/// nearest actual grid values, not these targets.
pub const DECADE_TARGETS: [f64; 10] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

/// Index of the grid value closest to `target` (first on ties).
pub fn nearest_index(grid: &[f64], target: f64) -> usize {
    let mut best = 0usize;
    let mut best_gap = f64::INFINITY;
    for (i, &value) in grid.iter().enumerate() {
        let gap = (value - target).abs();
        if gap < best_gap {
            best = i;
            best_gap = gap;
        }
    }
    best
}

/// Write `Threshold,FAR,FRR,DIR` rows at the ten decade-nearest grid points.
pub fn write_threshold_metrics(curve: &RateCurve, path: &Path) -> Result<(), ReportError> {
    if curve.is_empty() {
        return Err(ReportError::EmptyCurve);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ReportError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| ReportError::Csv {
        message: e.to_string(),
    })?;
    writer
        .write_record(["Threshold", "FAR", "FRR", "DIR"])
        .map_err(|e| ReportError::Csv {
            message: e.to_string(),
        })?;

    for target in DECADE_TARGETS {
        let idx = nearest_index(&curve.thresholds, target);
        writer
            .write_record([
                curve.thresholds[idx].to_string(),
                curve.far[idx].to_string(),
                curve.frr[idx].to_string(),
                curve.dir[idx].to_string(),
            ])
            .map_err(|e| ReportError::Csv {
                message: e.to_string(),
            })?;
    }

    writer.flush().map_err(|e| ReportError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(())
}
