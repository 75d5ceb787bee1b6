//! Property tests for winsorization.

use proptest::prelude::*;

use predikt_stats::{winsorize, winsorize_by_pair};

fn sample_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1e6f64..1e6, 0..200)
}

proptest! {
    #[test]
    fn prop_length_and_bounds(sample in sample_strategy(), alpha in 0.001f64..0.499) {
        let out = winsorize(&sample, alpha);
        prop_assert_eq!(out.len(), sample.len());

        let n = sample.len();
        let k = (n as f64 * alpha).floor() as usize;
        if n > 0 && k > 0 {
            let mut sorted = sample.clone();
            sorted.sort_by(f64::total_cmp);
            let (lo, hi) = (sorted[k], sorted[n - k - 1]);
            for (orig, w) in sample.iter().zip(&out) {
                prop_assert!(*w >= lo && *w <= hi);
                if *orig >= lo && *orig <= hi {
                    prop_assert_eq!(orig, w);
                }
            }
        } else {
            prop_assert_eq!(&out, &sample);
        }
    }
}

proptest! {
    #[test]
    fn prop_boundary_alpha_is_identity(sample in sample_strategy()) {
        prop_assert_eq!(winsorize(&sample, 0.0), sample.clone());
        prop_assert_eq!(winsorize(&sample, 0.5), sample);
    }
}

proptest! {
    #[test]
    fn prop_idempotent_bounds(sample in sample_strategy(), alpha in 0.01f64..0.45) {
        let once = winsorize(&sample, alpha);
        let lo = once.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = once.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let twice = winsorize(&once, alpha);
        for v in &twice {
            prop_assert!(*v >= lo && *v <= hi);
        }
    }
}

proptest! {
    #[test]
    fn prop_disjoint_groups_match_separate_calls(
        a in prop::collection::vec(-100f64..100.0, 0..60),
        b in prop::collection::vec(-100f64..100.0, 0..60),
        alpha in 0.01f64..0.49,
    ) {
        let mut returns: Vec<(u8, f64)> = a.iter().map(|v| (0u8, *v)).collect();
        returns.extend(b.iter().map(|v| (1u8, *v)));

        let out = winsorize_by_pair(&returns, alpha);
        let a_out: Vec<f64> = out.iter().filter(|(k, _)| *k == 0).map(|(_, v)| *v).collect();
        let b_out: Vec<f64> = out.iter().filter(|(k, _)| *k == 1).map(|(_, v)| *v).collect();
        prop_assert_eq!(a_out, winsorize(&a, alpha));
        prop_assert_eq!(b_out, winsorize(&b, alpha));
    }
}
