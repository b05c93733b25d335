//! Summary plots: FAR-vs-FRR trade-off and the watchlist ROC curve.

use std::path::Path;

use plotters::prelude::*;
use plotters::style::colors::colormaps::{ColorMap, ViridisRGB};

use openset_core::errors::ReportError;

use crate::sweep::RateCurve;

/// Number of scatter points overlaid on the ROC curve.
pub const SCATTER_POINTS: usize = 20;

/// Evenly spaced indices spanning `[0, len - 1]` inclusive.
pub fn scatter_indices(len: usize, points: usize) -> Vec<usize> {
    if len == 0 || points == 0 {
        return Vec::new();
    }
    if points == 1 || len == 1 {
        return vec![0];
    }
    (0..points)
        .map(|i| ((i as f64) * (len - 1) as f64 / (points - 1) as f64).round() as usize)
        .collect()
}

fn render_err(path: &Path, e: impl std::fmt::Display) -> ReportError {
    ReportError::Render {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

fn ensure_parent(path: &Path) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ReportError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    }
    Ok(())
}

/// Both rate curves over the threshold axis, with a vertical marker at the
/// equal-error threshold labeled to 4 decimal places.
pub fn plot_far_vs_frr(curve: &RateCurve, path: &Path) -> Result<(), ReportError> {
    let eer_index = curve.eer_index().ok_or(ReportError::EmptyCurve)?;
    let eer_threshold = curve.thresholds[eer_index];
    ensure_parent(path)?;

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_err(path, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("FAR vs. FRR", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..1f64, 0f64..1f64)
        .map_err(|e| render_err(path, e))?;

    chart
        .configure_mesh()
        .x_desc("Threshold")
        .y_desc("Rate")
        .draw()
        .map_err(|e| render_err(path, e))?;

    chart
        .draw_series(LineSeries::new(
            curve
                .thresholds
                .iter()
                .copied()
                .zip(curve.far.iter().copied()),
            &BLUE,
        ))
        .map_err(|e| render_err(path, e))?
        .label("FAR (False Acceptance Rate)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], BLUE));

    chart
        .draw_series(LineSeries::new(
            curve
                .thresholds
                .iter()
                .copied()
                .zip(curve.frr.iter().copied()),
            &GREEN,
        ))
        .map_err(|e| render_err(path, e))?
        .label("FRR (False Rejection Rate)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], GREEN));

    chart
        .draw_series(LineSeries::new(
            vec![(eer_threshold, 0.0), (eer_threshold, 1.0)],
            &RED,
        ))
        .map_err(|e| render_err(path, e))?
        .label(format!("EER Threshold = {eer_threshold:.4}"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], RED));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| render_err(path, e))?;

    root.present().map_err(|e| render_err(path, e))?;
    Ok(())
}

/// DIR against FAR parametrically over the grid, with a 20-point scatter
/// colored by threshold. The color scale is normalized to the full grid
/// range, not the subsample.
pub fn plot_watchlist_roc(curve: &RateCurve, path: &Path) -> Result<(), ReportError> {
    if curve.is_empty() {
        return Err(ReportError::EmptyCurve);
    }
    ensure_parent(path)?;

    let t_min = curve.thresholds[0] as f32;
    let t_max = curve.thresholds[curve.len() - 1] as f32;

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_err(path, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Receiver Operating Characteristic (ROC) Curve",
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..1f64, 0f64..1f64)
        .map_err(|e| render_err(path, e))?;

    chart
        .configure_mesh()
        .x_desc("False Alarm Rate (FAR)")
        .y_desc("Detection and Identification Rate (DIR)")
        .draw()
        .map_err(|e| render_err(path, e))?;

    chart
        .draw_series(LineSeries::new(
            curve.far.iter().copied().zip(curve.dir.iter().copied()),
            BLUE.stroke_width(2),
        ))
        .map_err(|e| render_err(path, e))?
        .label("Watchlist ROC Curve")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], BLUE));

    let indices = scatter_indices(curve.len(), SCATTER_POINTS);
    chart
        .draw_series(indices.iter().map(|&i| {
            let color = ViridisRGB.get_color_normalized(curve.thresholds[i] as f32, t_min, t_max);
            Circle::new((curve.far[i], curve.dir[i]), 4, color.filled())
        }))
        .map_err(|e| render_err(path, e))?
        .label("Threshold Values")
        .legend(|(x, y)| Circle::new((x + 8, y), 4, BLUE.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| render_err(path, e))?;

    root.present().map_err(|e| render_err(path, e))?;
    Ok(())
}
