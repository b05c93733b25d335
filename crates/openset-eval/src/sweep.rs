//! Threshold sweep engine: FAR/FRR/DIR over a fixed 1000-point grid.
//!
//! All three rates use the combined sample count (known + unknown) as the
//! denominator rather than per-class counts. This is the convention the
//! protocol was calibrated with and downstream numbers depend on it; see
//! DESIGN.md before changing it.

use openset_core::SubjectLabel;

/// Number of points in the uniform threshold grid over `[0, 1]`.
pub const THRESHOLD_POINTS: usize = 1000;

/// One scored evaluation sample: max-softmax confidence plus ground truth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleScore {
    confidence: f64,
    label: SubjectLabel,
}

impl SampleScore {
    /// Confidence is clamped to `[0, 1]`; non-finite values collapse to 0.
    pub fn new(confidence: f64, label: SubjectLabel) -> Self {
        let confidence = if confidence.is_finite() {
            confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { confidence, label }
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn label(&self) -> SubjectLabel {
        self.label
    }
}

/// Index-aligned rate curves: `far[i]`, `frr[i]`, `dir[i]` all correspond
/// to `thresholds[i]`.
#[derive(Debug, Clone)]
pub struct RateCurve {
    pub thresholds: Vec<f64>,
    pub far: Vec<f64>,
    pub frr: Vec<f64>,
    pub dir: Vec<f64>,
}

impl RateCurve {
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Index of the equal-error point: first minimum of `|FAR - FRR|`.
    pub fn eer_index(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, (&far, &frr)) in self.far.iter().zip(self.frr.iter()).enumerate() {
            let gap = (far - frr).abs();
            if best.map_or(true, |(_, b)| gap < b) {
                best = Some((i, gap));
            }
        }
        best.map(|(i, _)| i)
    }
}

/// The fixed uniform grid: 1000 points over `[0, 1]` inclusive, ascending.
pub fn threshold_grid() -> Vec<f64> {
    (0..THRESHOLD_POINTS)
        .map(|i| i as f64 / (THRESHOLD_POINTS - 1) as f64)
        .collect()
}

/// Sweep the full threshold grid over a scored sample set.
///
/// At threshold `t`:
/// - FAR(t): unknown samples with `confidence >= t`, over all samples.
/// - FRR(t): known samples with `confidence < t`, over all samples.
/// - DIR(t): `1 - FRR(t)`.
///
/// An empty sample set yields FAR = FRR = 0 (and therefore DIR = 1) at
/// every threshold instead of NaN.
pub fn sweep(scores: &[SampleScore]) -> RateCurve {
    let thresholds = threshold_grid();
    let total = scores.len();

    let mut far = Vec::with_capacity(thresholds.len());
    let mut frr = Vec::with_capacity(thresholds.len());
    let mut dir = Vec::with_capacity(thresholds.len());

    for &t in &thresholds {
        let (false_accepts, false_rejects) = if total == 0 {
            (0.0, 0.0)
        } else {
            let mut accepts = 0usize;
            let mut rejects = 0usize;
            for score in scores {
                match score.label {
                    SubjectLabel::Unknown if score.confidence >= t => accepts += 1,
                    SubjectLabel::Known(_) if score.confidence < t => rejects += 1,
                    SubjectLabel::Unknown | SubjectLabel::Known(_) => {}
                }
            }
            (
                accepts as f64 / total as f64,
                rejects as f64 / total as f64,
            )
        };

        far.push(false_accepts);
        frr.push(false_rejects);
        dir.push(1.0 - false_rejects);
    }

    RateCurve {
        thresholds,
        far,
        frr,
        dir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape_and_bounds() {
        let grid = threshold_grid();
        assert_eq!(grid.len(), THRESHOLD_POINTS);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[THRESHOLD_POINTS - 1], 1.0);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_confidence_is_clamped() {
        assert_eq!(SampleScore::new(1.7, SubjectLabel::Unknown).confidence(), 1.0);
        assert_eq!(SampleScore::new(-0.3, SubjectLabel::Unknown).confidence(), 0.0);
        assert_eq!(
            SampleScore::new(f64::NAN, SubjectLabel::Unknown).confidence(),
            0.0
        );
    }

    #[test]
    fn test_empty_set_policy() {
        let curve = sweep(&[]);
        assert_eq!(curve.len(), THRESHOLD_POINTS);
        assert!(curve.far.iter().all(|&v| v == 0.0));
        assert!(curve.frr.iter().all(|&v| v == 0.0));
        assert!(curve.dir.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_eer_index_empty_curve() {
        let curve = RateCurve {
            thresholds: vec![],
            far: vec![],
            frr: vec![],
            dir: vec![],
        };
        assert_eq!(curve.eer_index(), None);
    }

    #[test]
    fn test_eer_index_picks_smallest_gap() {
        let curve = RateCurve {
            thresholds: vec![0.0, 0.5, 1.0],
            far: vec![0.9, 0.4, 0.0],
            frr: vec![0.0, 0.35, 0.8],
            dir: vec![1.0, 0.65, 0.2],
        };
        assert_eq!(curve.eer_index(), Some(1));
    }
}
