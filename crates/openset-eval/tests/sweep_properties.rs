//! Property tests for the rate curves.

use openset_core::SubjectLabel;
use openset_eval::{sweep, SampleScore};
use proptest::prelude::*;

fn scores_strategy() -> impl Strategy<Value = Vec<SampleScore>> {
    prop::collection::vec((0.0f64..=1.0, any::<bool>()), 0..128).prop_map(|raw| {
        raw.into_iter()
            .map(|(confidence, is_known)| {
                let label = if is_known {
                    SubjectLabel::Known(0)
                } else {
                    SubjectLabel::Unknown
                };
                SampleScore::new(confidence, label)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_far_non_increasing_frr_non_decreasing(scores in scores_strategy()) {
        let curve = sweep(&scores);
        prop_assert!(curve.far.windows(2).all(|w| w[0] >= w[1]));
        prop_assert!(curve.frr.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_dir_complements_frr(scores in scores_strategy()) {
        let curve = sweep(&scores);
        for (dir, frr) in curve.dir.iter().zip(curve.frr.iter()) {
            prop_assert!((dir + frr - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn prop_rates_stay_in_unit_interval(scores in scores_strategy()) {
        let curve = sweep(&scores);
        for i in 0..curve.len() {
            prop_assert!((0.0..=1.0).contains(&curve.far[i]));
            prop_assert!((0.0..=1.0).contains(&curve.frr[i]));
            prop_assert!((0.0..=1.0).contains(&curve.dir[i]));
        }
    }

    #[test]
    fn prop_nothing_rejected_at_zero(scores in scores_strategy()) {
        let curve = sweep(&scores);
        prop_assert_eq!(curve.frr[0], 0.0);
        prop_assert_eq!(curve.dir[0], 1.0);
    }
}
