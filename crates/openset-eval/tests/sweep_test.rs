//! Threshold sweep contract tests.

use openset_core::SubjectLabel;
use openset_eval::report::nearest_index;
use openset_eval::{sweep, SampleScore, THRESHOLD_POINTS};

fn known(confidence: f64, class: u32) -> SampleScore {
    SampleScore::new(confidence, SubjectLabel::Known(class))
}

fn unknown(confidence: f64) -> SampleScore {
    SampleScore::new(confidence, SubjectLabel::Unknown)
}

/// 4 known + 4 unknown samples used across several tests.
fn mixed_scores() -> Vec<SampleScore> {
    vec![
        known(0.9, 0),
        known(0.8, 1),
        known(0.3, 0),
        known(0.6, 1),
        unknown(0.95),
        unknown(0.4),
        unknown(0.7),
        unknown(0.2),
    ]
}

#[test]
fn test_curve_is_grid_sized_and_aligned() {
    let curve = sweep(&mixed_scores());
    assert_eq!(curve.len(), THRESHOLD_POINTS);
    assert_eq!(curve.far.len(), curve.len());
    assert_eq!(curve.frr.len(), curve.len());
    assert_eq!(curve.dir.len(), curve.len());
}

#[test]
fn test_nothing_rejected_at_zero_threshold() {
    let curve = sweep(&mixed_scores());
    assert_eq!(curve.frr[0], 0.0);
    assert_eq!(curve.dir[0], 1.0);
    // Every unknown sample is accepted at t = 0.
    assert!((curve.far[0] - 0.5).abs() < 1e-12);
}

#[test]
fn test_nothing_accepted_at_full_threshold() {
    // No confidence reaches exactly 1.0 here.
    let curve = sweep(&mixed_scores());
    let last = curve.len() - 1;
    assert_eq!(curve.far[last], 0.0);
    // All 4 known samples are rejected: 4/8 of the combined set.
    assert!((curve.frr[last] - 0.5).abs() < 1e-12);
}

#[test]
fn test_reference_operating_point() {
    // At the grid point nearest 0.5: unknowns 0.95 and 0.7 are accepted
    // (FAR 2/8), known 0.3 is rejected (FRR 1/8).
    let curve = sweep(&mixed_scores());
    let idx = nearest_index(&curve.thresholds, 0.5);
    assert!((curve.far[idx] - 0.25).abs() < 1e-12);
    assert!((curve.frr[idx] - 0.125).abs() < 1e-12);
    assert!((curve.dir[idx] - 0.875).abs() < 1e-12);
}

#[test]
fn test_monotonicity_on_fixed_set() {
    let curve = sweep(&mixed_scores());
    assert!(curve.far.windows(2).all(|w| w[0] >= w[1]));
    assert!(curve.frr.windows(2).all(|w| w[0] <= w[1]));
    assert!(curve.dir.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_dir_complements_frr_exactly() {
    let curve = sweep(&mixed_scores());
    for (dir, frr) in curve.dir.iter().zip(curve.frr.iter()) {
        assert!((dir + frr - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_combined_denominator() {
    // 1 known, 3 unknown. At t = 0 every unknown is accepted; the
    // denominator is the full set (4), not the unknown count (3).
    let scores = vec![known(0.9, 0), unknown(0.5), unknown(0.5), unknown(0.5)];
    let curve = sweep(&scores);
    assert!((curve.far[0] - 0.75).abs() < 1e-12);
}

#[test]
fn test_all_known_set_has_zero_far() {
    let scores = vec![known(0.9, 0), known(0.1, 1)];
    let curve = sweep(&scores);
    assert!(curve.far.iter().all(|&v| v == 0.0));
    // FRR still climbs as the threshold passes each confidence.
    assert!(curve.frr[curve.len() - 1] > 0.0);
}

#[test]
fn test_all_unknown_set_has_zero_frr() {
    let scores = vec![unknown(0.9), unknown(0.1)];
    let curve = sweep(&scores);
    assert!(curve.frr.iter().all(|&v| v == 0.0));
    assert!(curve.dir.iter().all(|&v| v == 1.0));
}

#[test]
fn test_eer_threshold_is_sensible_for_separated_scores() {
    // Knowns confident, unknowns not: the EER gap should close somewhere
    // strictly inside the grid.
    let scores = vec![
        known(0.95, 0),
        known(0.9, 1),
        known(0.85, 0),
        unknown(0.15),
        unknown(0.1),
        unknown(0.2),
    ];
    let curve = sweep(&scores);
    let eer = curve.eer_index().unwrap();
    let t = curve.thresholds[eer];
    assert!(t > 0.0 && t < 1.0);
    assert!((curve.far[eer] - curve.frr[eer]).abs() < 1e-12);
}
