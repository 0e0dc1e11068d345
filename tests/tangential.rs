use ndarray::Array2;
use rqa_border::analysis::analyze;
use rqa_border::lines::{CorrectionPolicy, LineConfig, diagonal_lines};
use rqa_border::recurrence::{Norm, ThresholdMode, recurrence_plot};
use rqa_border::tangential::{IsodirectionalConfig, PerpendicularConfig, rp_iso, rp_perp};
use rqa_border::{Error, RecurrencePlot};

/// Delay embedding of a pure sinusoid with `samples_per_period` samples per cycle.
fn sinusoid(n: usize, samples_per_period: f64) -> Array2<f64> {
    let omega = 2.0 * std::f64::consts::PI / samples_per_period;
    let delay = (samples_per_period / 4.0).round() as usize;
    Array2::from_shape_fn((n, 2), |(i, d)| (omega * (i + d * delay) as f64).sin())
}

fn subset_of(small: &RecurrencePlot, big: &RecurrencePlot) -> bool {
    small
        .as_array()
        .iter()
        .zip(big.as_array().iter())
        .all(|(&s, &b)| !s || b)
}

#[test]
fn perpendicular_correction_thins_sinusoid_plot() {
    let x = sinusoid(200, 40.0);
    let mode = ThresholdMode::Fixed(0.3);
    let (plain, _) = recurrence_plot(&x, mode, Norm::Euclidean).unwrap();
    let (perp, _) = rp_perp(
        &x,
        &PerpendicularConfig::new().with_threshold(mode).with_w(0.25),
    )
    .unwrap();

    assert!(subset_of(&perp, &plain));
    assert!(perp.recurrence_count() < plain.recurrence_count());
}

#[test]
fn isodirectional_correction_thins_sinusoid_plot() {
    let x = sinusoid(200, 40.0);
    let mode = ThresholdMode::Fixed(0.3);
    let (plain, _) = recurrence_plot(&x, mode, Norm::Maximum).unwrap();
    let config = IsodirectionalConfig::new()
        .with_threshold(mode)
        .with_norm(Norm::Maximum)
        .with_e2(0.05)
        .with_tau_iso(3);
    let (iso, _) = rp_iso(&x, &config).unwrap();

    assert!(subset_of(&iso, &plain));
    assert!(iso.recurrence_count() < plain.recurrence_count());
}

#[test]
fn recurrence_rate_threshold_is_shared_with_uncorrected_plot() {
    let x = sinusoid(120, 30.0);
    let mode = ThresholdMode::RecurrenceRate(0.1);
    let (_, eps) = recurrence_plot(&x, mode, Norm::Euclidean).unwrap();
    let (_, eps_perp) = rp_perp(
        &x,
        &PerpendicularConfig::new().with_threshold(mode).with_w(0.3),
    )
    .unwrap();
    assert_eq!(eps, eps_perp);
}

#[test]
fn corrected_plots_feed_every_policy() {
    let x = sinusoid(150, 25.0);
    let mode = ThresholdMode::Fixed(0.4);
    let (perp, _) = rp_perp(
        &x,
        &PerpendicularConfig::new().with_threshold(mode).with_w(0.3),
    )
    .unwrap();
    let (plain, _) = recurrence_plot(&x, mode, Norm::Euclidean).unwrap();

    let config = LineConfig::default();
    let corrected = analyze(&perp, &config, 5);
    assert_eq!(corrected.len(), 5);
    for policy in CorrectionPolicy::all(5) {
        let before = diagonal_lines(&plain, policy, &config);
        let after = &corrected[policy.name()];
        assert_eq!(after.distribution.total(), after.lengths.len());
        // Thinning never makes a line longer than the plot allows
        assert!(after.lengths.max().unwrap_or(0) <= perp.size());
        assert_eq!(before.size(), after.lengths.size());
    }
}

#[test]
fn missing_threshold_is_reported_before_work() {
    // An empty trajectory would fail too; the missing parameter must win
    let x = Array2::<f64>::zeros((0, 2));
    let err = rp_perp(&x, &PerpendicularConfig::new().with_w(0.2)).unwrap_err();
    assert!(matches!(err, Error::MissingParameter { name: "threshold", .. }));

    let err = rp_iso(
        &x,
        &IsodirectionalConfig::new()
            .with_threshold(ThresholdMode::Fixed(0.1))
            .with_e2(0.1),
    )
    .unwrap_err();
    assert!(matches!(err, Error::MissingParameter { name: "tau_iso", .. }));
}
