//! Tangential-motion correction of recurrence plots.
//!
//! Where a trajectory moves slowly, consecutive states stay within the
//! threshold of each other and thicken every diagonal line with recurrences
//! that are not returns to an earlier state. Both correctors here rebuild the
//! plot from the trajectory and keep only a subset of the primary
//! recurrences:
//!
//! * [`rp_perp`] keeps a pair only if the displacement between the two states
//!   is (nearly) perpendicular to the flow at the first state.
//! * [`rp_iso`] keeps a pair only if both states move alike over the next
//!   `tau_iso` steps.
//!
//! The returned plots feed the same line extraction as any other plot.

use crate::plot::RecurrencePlot;
use crate::recurrence::{Norm, ThresholdMode, distance_matrix, threshold_distances};
use crate::{Error, Result};
use ndarray::{Array1, Array2};

/// Parameters of the perpendicular corrector.
///
/// Every parameter without a sensible neutral value starts unset and must be
/// provided before [`rp_perp`] runs.
///
/// # Example
/// ```
/// use rqa_border::recurrence::ThresholdMode;
/// use rqa_border::tangential::PerpendicularConfig;
///
/// let config = PerpendicularConfig::new()
///     .with_threshold(ThresholdMode::Fixed(0.5))
///     .with_w(0.2);
/// assert!(config.validate().is_ok());
/// assert!(PerpendicularConfig::new().with_w(0.2).validate().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PerpendicularConfig {
    /// Primary recurrence threshold
    pub threshold: Option<ThresholdMode>,
    /// Norm for the primary distances
    pub norm: Norm,
    /// Largest accepted |cos| between flow direction and displacement, in (0, 1]
    pub w: Option<f64>,
}

impl PerpendicularConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primary threshold mode.
    pub fn with_threshold(mut self, threshold: ThresholdMode) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Set the norm for the primary distances.
    pub fn with_norm(mut self, norm: Norm) -> Self {
        self.norm = norm;
        self
    }

    /// Set the angular tolerance `w`.
    pub fn with_w(mut self, w: f64) -> Self {
        self.w = Some(w);
        self
    }

    /// Resolve all parameters, failing on the first unset or invalid one.
    pub fn validate(&self) -> Result<(ThresholdMode, f64)> {
        let threshold = self.threshold.ok_or(Error::MissingParameter {
            corrector: "rp_perp",
            name: "threshold",
        })?;
        threshold.validate()?;
        let w = self.w.ok_or(Error::MissingParameter {
            corrector: "rp_perp",
            name: "w",
        })?;
        if !(w > 0.0 && w <= 1.0) {
            return Err(Error::InvalidParameter {
                name: "w",
                value: w.to_string(),
                reason: "must lie in (0, 1]".to_string(),
            });
        }
        Ok((threshold, w))
    }
}

/// Parameters of the isodirectional corrector.
///
/// # Example
/// ```
/// use rqa_border::recurrence::ThresholdMode;
/// use rqa_border::tangential::IsodirectionalConfig;
///
/// let config = IsodirectionalConfig::new()
///     .with_threshold(ThresholdMode::RecurrenceRate(0.05))
///     .with_e2(0.1);
/// // tau_iso is still missing
/// assert!(config.validate().is_err());
/// assert!(config.with_tau_iso(2).validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct IsodirectionalConfig {
    /// Primary recurrence threshold
    pub threshold: Option<ThresholdMode>,
    /// Norm for both the primary and the direction distances
    pub norm: Norm,
    /// Threshold on the difference of the `tau_iso`-step displacements
    pub e2: Option<f64>,
    /// Number of steps over which displacements are compared
    pub tau_iso: Option<usize>,
}

impl IsodirectionalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primary threshold mode.
    pub fn with_threshold(mut self, threshold: ThresholdMode) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Set the norm.
    pub fn with_norm(mut self, norm: Norm) -> Self {
        self.norm = norm;
        self
    }

    /// Set the secondary (direction) threshold `E2`.
    pub fn with_e2(mut self, e2: f64) -> Self {
        self.e2 = Some(e2);
        self
    }

    /// Set the step window `tau_iso`.
    pub fn with_tau_iso(mut self, tau_iso: usize) -> Self {
        self.tau_iso = Some(tau_iso);
        self
    }

    /// Resolve all parameters, failing on the first unset or invalid one.
    pub fn validate(&self) -> Result<(ThresholdMode, f64, usize)> {
        let threshold = self.threshold.ok_or(Error::MissingParameter {
            corrector: "rp_iso",
            name: "threshold",
        })?;
        threshold.validate()?;
        let e2 = self.e2.ok_or(Error::MissingParameter {
            corrector: "rp_iso",
            name: "e2",
        })?;
        if !e2.is_finite() || e2 < 0.0 {
            return Err(Error::InvalidParameter {
                name: "e2",
                value: e2.to_string(),
                reason: "must be finite and >= 0".to_string(),
            });
        }
        let tau_iso = self.tau_iso.ok_or(Error::MissingParameter {
            corrector: "rp_iso",
            name: "tau_iso",
        })?;
        if tau_iso == 0 {
            return Err(Error::InvalidParameter {
                name: "tau_iso",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok((threshold, e2, tau_iso))
    }
}

/// Forward-difference flow direction, backward difference at the last state.
fn velocities(trajectory: &Array2<f64>) -> Vec<Array1<f64>> {
    let n = trajectory.nrows();
    (0..n)
        .map(|i| {
            let (a, b) = if i + 1 < n { (i, i + 1) } else { (i - 1, i) };
            &trajectory.row(b) - &trajectory.row(a)
        })
        .collect()
}

/// Perpendicular recurrence plot.
///
/// A primary recurrence `(i, j)` survives when `x_i == x_j`, when the flow at
/// `x_i` is at rest, or when
/// `|v_i · (x_i - x_j)| / (|v_i| |x_i - x_j|) < w`.
///
/// # Returns
/// The corrected plot and the realized primary threshold.
///
/// # Errors
/// Missing or invalid parameters are reported before the trajectory is
/// touched. The trajectory must hold at least two states.
pub fn rp_perp(
    trajectory: &Array2<f64>,
    config: &PerpendicularConfig,
) -> Result<(RecurrencePlot, f64)> {
    let (threshold, w) = config.validate()?;
    let n = trajectory.nrows();
    if n < 2 {
        return Err(Error::InvalidSize {
            name: "trajectory",
            value: n,
            reason: "rp_perp needs at least two states for a flow direction",
        });
    }

    let distances = distance_matrix(trajectory, config.norm)?;
    let (mut mask, eps) = threshold_distances(&distances, threshold)?;
    let flow = velocities(trajectory);
    let before = mask.iter().filter(|&&r| r).count();

    for ((i, j), recurrent) in mask.indexed_iter_mut() {
        if !*recurrent || i == j {
            continue;
        }
        let v = &flow[i];
        let v_norm = v.dot(v).sqrt();
        if v_norm == 0.0 {
            continue;
        }
        let d = &trajectory.row(i) - &trajectory.row(j);
        let d_norm = d.dot(&d).sqrt();
        if d_norm == 0.0 {
            continue;
        }
        let cos = v.dot(&d).abs() / (v_norm * d_norm);
        *recurrent = cos < w;
    }

    let after = mask.iter().filter(|&&r| r).count();
    log::debug!("rp_perp: kept {after} of {before} recurrences (w = {w})");
    Ok((RecurrencePlot::new(mask)?, eps))
}

/// Isodirectional recurrence plot.
///
/// A primary recurrence `(i, j)` survives when both `i + tau_iso` and
/// `j + tau_iso` lie inside the trajectory and
/// `‖(x_{i+τ} - x_i) - (x_{j+τ} - x_j)‖ <= E2`.
///
/// # Returns
/// The corrected plot and the realized primary threshold.
pub fn rp_iso(
    trajectory: &Array2<f64>,
    config: &IsodirectionalConfig,
) -> Result<(RecurrencePlot, f64)> {
    let (threshold, e2, tau) = config.validate()?;
    let n = trajectory.nrows();
    if n <= tau {
        return Err(Error::InvalidSize {
            name: "trajectory",
            value: n,
            reason: "rp_iso needs more states than tau_iso",
        });
    }

    let distances = distance_matrix(trajectory, config.norm)?;
    let (mut mask, eps) = threshold_distances(&distances, threshold)?;
    let steps: Vec<Array1<f64>> = (0..n - tau)
        .map(|i| &trajectory.row(i + tau) - &trajectory.row(i))
        .collect();
    let before = mask.iter().filter(|&&r| r).count();

    for ((i, j), recurrent) in mask.indexed_iter_mut() {
        if !*recurrent {
            continue;
        }
        *recurrent = match (steps.get(i), steps.get(j)) {
            (Some(a), Some(b)) => config.norm.distance(a.view(), b.view()) <= e2,
            _ => false,
        };
    }

    let after = mask.iter().filter(|&&r| r).count();
    log::debug!("rp_iso: kept {after} of {before} recurrences (E2 = {e2}, tau = {tau})");
    Ok((RecurrencePlot::new(mask)?, eps))
}
