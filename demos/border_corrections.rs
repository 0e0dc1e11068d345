//! Border Correction Example
//!
//! This example compares the five diagonal line correction policies on two
//! recurrence plots:
//! - A regular regime (a sampled sinusoid)
//! - A stochastic regime (uniform noise)
//!
//! It then repeats the regular analysis after perpendicular and
//! isodirectional tangential-motion correction.
//!
//! Run with `RUST_LOG=info cargo run --example border_corrections`.

use log::{error, info};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rqa_border::RecurrencePlot;
use rqa_border::analysis::analyze;
use rqa_border::lines::{BorderMode, LineConfig};
use rqa_border::recurrence::{Norm, ThresholdMode, recurrence_plot};
use rqa_border::rqa::{determinism, line_statistics};
use rqa_border::tangential::{IsodirectionalConfig, PerpendicularConfig, rp_iso, rp_perp};

const N: usize = 400;
const MASK_WIDTH: usize = 20;
const L_MIN: usize = 2;

fn report(label: &str, rp: &RecurrencePlot, config: &LineConfig) {
    info!(
        "{label}: {}x{} plot, RR = {:.3}, mode = {}",
        rp.size(),
        rp.size(),
        rp.recurrence_rate(),
        config.border_mode
    );
    for (name, result) in analyze(rp, config, MASK_WIDTH) {
        let stats = line_statistics(&result.distribution, L_MIN);
        info!(
            "  {name:>15}: lines = {:5}, L = {:7.2}, Lmax = {:4}, ENTR = {:.3}, DET = {:.3}",
            stats.n_lines,
            stats.mean_length,
            stats.max_length,
            stats.entropy,
            determinism(rp, &result.distribution, L_MIN)
        );
    }
}

fn main() {
    env_logger::init();
    info!("Border Correction Example");

    let omega = 2.0 * std::f64::consts::PI / 37.0;
    let regular = Array2::from_shape_fn((N, 2), |(i, d)| (omega * (i + 9 * d) as f64).sin());

    let mut rng = StdRng::seed_from_u64(42);
    let noise = Array2::from_shape_fn((N, 2), |_| rng.gen_range(-1.0..1.0));

    let mode = ThresholdMode::RecurrenceRate(0.05);
    for border_mode in [BorderMode::Normal, BorderMode::Semi] {
        let config = LineConfig::new().with_border_mode(border_mode);
        for (label, trajectory) in [("regular", &regular), ("stochastic", &noise)] {
            match recurrence_plot(trajectory, mode, Norm::Euclidean) {
                Ok((rp, eps)) => {
                    info!("{label}: threshold = {eps:.4}");
                    report(label, &rp, &config);
                }
                Err(e) => error!("{label}: {e}"),
            }
        }
    }

    // Tangential motion correction of the regular regime
    let config = LineConfig::default();
    let perp = PerpendicularConfig::new().with_threshold(mode).with_w(0.26);
    match rp_perp(&regular, &perp) {
        Ok((rp, _)) => report("regular, perpendicular", &rp, &config),
        Err(e) => error!("rp_perp failed: {e}"),
    }

    let iso = IsodirectionalConfig::new()
        .with_threshold(mode)
        .with_e2(0.05)
        .with_tau_iso(1);
    match rp_iso(&regular, &iso) {
        Ok((rp, _)) => report("regular, isodirectional", &rp, &config),
        Err(e) => error!("rp_iso failed: {e}"),
    }
}
