//! Property-based tests for the analytical solver.

use proptest::prelude::*;

use ddm_core::{solve, DecisionParameters, LogisticConfig, LogisticCurve};

/// Strategy: valid decision parameters, starting value inside the boundaries.
fn params_strategy() -> impl Strategy<Value = DecisionParameters> {
    (0.05..5.0f64, 0.05..5.0f64, -1.0..1.0f64, -50.0..50.0f64, 0.0..1.0f64).prop_map(
        |(noise, threshold, start_fraction, drift, t0)| {
            DecisionParameters::new()
                .with_noise(noise)
                .with_threshold(threshold)
                .with_starting_value(start_fraction * threshold)
                .with_drift_rate(drift)
                .with_non_decision_time(t0)
        },
    )
}

proptest! {
    // 1. Hit probabilities sum to one
    #[test]
    fn probabilities_sum_to_one(params in params_strategy()) {
        let stats = solve(&params).unwrap();
        let total = stats.probability_upper + stats.probability_lower;
        prop_assert!((total - 1.0).abs() < 1e-9, "total={total} for {params:?}");
        prop_assert!((0.0..=1.0).contains(&stats.probability_upper));
        prop_assert!((0.0..=1.0).contains(&stats.probability_lower));
    }

    // 2. Every output is finite
    #[test]
    fn outputs_are_finite(params in params_strategy()) {
        let stats = solve(&params).unwrap();
        prop_assert!(stats.is_finite(), "{stats:?} for {params:?}");
        prop_assert!(stats.variance_upper >= 0.0);
        prop_assert!(stats.variance_lower >= 0.0);
    }

    // 3. Starting at the midpoint makes both branches identical
    #[test]
    fn midpoint_symmetry(params in params_strategy()) {
        let stats = solve(&params.with_starting_value(0.0)).unwrap();
        prop_assert_eq!(stats.mean_upper, stats.mean_lower);
        prop_assert_eq!(stats.variance_upper, stats.variance_lower);
        prop_assert_eq!(stats.skew_upper, stats.skew_lower);
    }

    // 4. Mirroring drift and start swaps the boundaries
    #[test]
    fn mirror_swaps_boundaries(params in params_strategy()) {
        let stats = solve(&params).unwrap();
        let mirrored = solve(
            &params
                .with_drift_rate(-params.drift_rate)
                .with_starting_value(-params.starting_value),
        )
        .unwrap();

        let close = |a: f64, b: f64| (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0);
        prop_assert!(close(stats.probability_upper, mirrored.probability_lower));
        prop_assert!(close(stats.mean_upper, mirrored.mean_lower));
        prop_assert!(close(stats.variance_lower, mirrored.variance_upper));
        prop_assert!(close(stats.skew_upper, mirrored.skew_lower));
    }

    // 5. Solving is deterministic
    #[test]
    fn solve_deterministic(params in params_strategy()) {
        prop_assert_eq!(solve(&params).unwrap(), solve(&params).unwrap());
    }

    // 6. Logistic samples stay in [0, 1] and never decrease for positive gain
    #[test]
    fn logistic_bounded_monotonic(gain in 0.1..5.0f64, bias in -5.0..5.0f64, offset in -1.0..1.0f64) {
        let points = LogisticCurve::new(gain, bias, offset)
            .sample(&LogisticConfig::default())
            .unwrap();
        prop_assert!(points.iter().all(|p| (0.0..=1.0).contains(&p.y)));
        prop_assert!(points.windows(2).all(|w| w[1].y >= w[0].y));
    }
}
