//! Recurrence plots from phase-space trajectories.
//!
//! Trajectories are `Array2<f64>` with one state per row, shape
//! `(n_points, dimension)`. A recurrence is declared when the distance of two
//! states is at most the threshold, `R[i][j] = d(x_i, x_j) <= ε`.

use crate::plot::RecurrencePlot;
use crate::{Error, Result};
use ndarray::{Array2, ArrayView1};
use std::str::FromStr;

/// Distance used to compare phase-space states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Norm {
    #[default]
    Euclidean,
    /// Maximum (Chebyshev) norm
    Maximum,
}

impl Norm {
    /// Distance between two states of equal dimension.
    pub fn distance(self, a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
        let diffs = a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs());
        match self {
            Norm::Euclidean => diffs.map(|d| d * d).sum::<f64>().sqrt(),
            Norm::Maximum => diffs.fold(0.0, f64::max),
        }
    }
}

impl FromStr for Norm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "euclidean" | "l2" => Ok(Norm::Euclidean),
            "max" | "maximum" | "chebyshev" => Ok(Norm::Maximum),
            _ => Err(Error::InvalidParameter {
                name: "norm",
                value: name.to_string(),
                reason: "expected `euclidean` or `max`".to_string(),
            }),
        }
    }
}

/// How the recurrence threshold is obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdMode {
    /// Fixed distance threshold ε.
    Fixed(f64),
    /// ε chosen so that the given fraction of off-diagonal pairs recur.
    RecurrenceRate(f64),
    /// Fixed amount of neighbours: each column gets its own ε so that every
    /// state has the given fraction of the other states as neighbours. The
    /// resulting plot is in general not symmetric.
    NeighbourRate(f64),
}

impl ThresholdMode {
    /// Check the numeric value of the mode.
    pub fn validate(&self) -> Result<()> {
        match *self {
            ThresholdMode::Fixed(eps) if !eps.is_finite() || eps < 0.0 => {
                Err(Error::InvalidParameter {
                    name: "threshold",
                    value: eps.to_string(),
                    reason: "must be finite and >= 0".to_string(),
                })
            }
            ThresholdMode::RecurrenceRate(rr) | ThresholdMode::NeighbourRate(rr)
                if !(rr > 0.0 && rr <= 1.0) =>
            {
                Err(Error::InvalidParameter {
                    name: "recurrence rate",
                    value: rr.to_string(),
                    reason: "must lie in (0, 1]".to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Reject empty or non-finite trajectories.
pub fn validate_trajectory(trajectory: &Array2<f64>) -> Result<()> {
    let (n, dim) = trajectory.dim();
    if n == 0 {
        return Err(Error::InvalidSize {
            name: "trajectory",
            value: 0,
            reason: "must contain at least one state",
        });
    }
    if dim == 0 {
        return Err(Error::InvalidSize {
            name: "dimension",
            value: 0,
            reason: "states must have at least one coordinate",
        });
    }
    if trajectory.iter().any(|v| !v.is_finite()) {
        return Err(Error::NonFiniteTrajectory);
    }
    Ok(())
}

/// Pairwise distance matrix of all states.
///
/// # Example
/// ```
/// use ndarray::array;
/// use rqa_border::recurrence::{Norm, distance_matrix};
///
/// let x = array![[0.0, 0.0], [3.0, 4.0]];
/// let d = distance_matrix(&x, Norm::Euclidean).unwrap();
/// assert_eq!(d[(0, 1)], 5.0);
/// let d = distance_matrix(&x, Norm::Maximum).unwrap();
/// assert_eq!(d[(1, 0)], 4.0);
/// ```
pub fn distance_matrix(trajectory: &Array2<f64>, norm: Norm) -> Result<Array2<f64>> {
    validate_trajectory(trajectory)?;
    let n = trajectory.nrows();
    let mut distances = Array2::zeros((n, n));

    for i in 0..n {
        for j in (i + 1)..n {
            let d = norm.distance(trajectory.row(i), trajectory.row(j));
            distances[(i, j)] = d;
            distances[(j, i)] = d;
        }
    }

    Ok(distances)
}

/// Value at fraction `rate` of an ascending list (`rate` in (0, 1]).
fn quantile(sorted: &[f64], rate: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = (rate * sorted.len() as f64).ceil() as usize;
    sorted[rank.clamp(1, sorted.len()) - 1]
}

/// Threshold a distance matrix.
///
/// Returns the boolean recurrence matrix and the realized threshold; for
/// [`ThresholdMode::NeighbourRate`] that is the mean of the per-column
/// thresholds.
pub fn threshold_distances(
    distances: &Array2<f64>,
    mode: ThresholdMode,
) -> Result<(Array2<bool>, f64)> {
    mode.validate()?;
    let (n, cols) = distances.dim();
    if n != cols {
        return Err(Error::ShapeMismatch {
            expected: "square distance matrix".to_string(),
            got: format!("{n}x{cols}"),
        });
    }

    match mode {
        ThresholdMode::Fixed(eps) => Ok((distances.mapv(|d| d <= eps), eps)),
        ThresholdMode::RecurrenceRate(rr) => {
            let mut off_diagonal: Vec<f64> = distances
                .indexed_iter()
                .filter(|&((i, j), _)| i != j)
                .map(|(_, &d)| d)
                .collect();
            off_diagonal.sort_by(|a, b| a.total_cmp(b));
            let eps = quantile(&off_diagonal, rr);
            log::debug!("recurrence rate {rr} -> threshold {eps}");
            Ok((distances.mapv(|d| d <= eps), eps))
        }
        ThresholdMode::NeighbourRate(rr) => {
            let mut column_eps = vec![0.0f64; n];
            for (j, eps) in column_eps.iter_mut().enumerate() {
                let mut others: Vec<f64> = (0..n)
                    .filter(|&i| i != j)
                    .map(|i| distances[(i, j)])
                    .collect();
                others.sort_by(|a, b| a.total_cmp(b));
                *eps = quantile(&others, rr);
            }
            let mask = Array2::from_shape_fn((n, n), |(i, j)| distances[(i, j)] <= column_eps[j]);
            let mean = column_eps.iter().sum::<f64>() / n.max(1) as f64;
            log::debug!("neighbour rate {rr} -> mean threshold {mean}");
            Ok((mask, mean))
        }
    }
}

/// Build a recurrence plot from a trajectory.
///
/// # Returns
/// The plot and the realized threshold.
///
/// # Example
/// ```
/// use ndarray::array;
/// use rqa_border::recurrence::{Norm, ThresholdMode, recurrence_plot};
///
/// let x = array![[0.0], [0.1], [5.0]];
/// let (rp, eps) = recurrence_plot(&x, ThresholdMode::Fixed(0.5), Norm::Euclidean).unwrap();
/// assert_eq!(eps, 0.5);
/// assert!(rp.get(0, 1));
/// assert!(!rp.get(0, 2));
/// ```
pub fn recurrence_plot(
    trajectory: &Array2<f64>,
    mode: ThresholdMode,
    norm: Norm,
) -> Result<(RecurrencePlot, f64)> {
    mode.validate()?;
    let distances = distance_matrix(trajectory, norm)?;
    let (mask, eps) = threshold_distances(&distances, mode)?;
    Ok((RecurrencePlot::new(mask)?, eps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn line_trajectory(n: usize) -> Array2<f64> {
        Array2::from_shape_fn((n, 1), |(i, _)| i as f64)
    }

    #[test]
    fn test_norms() {
        let a = array![1.0, -2.0, 3.0];
        let b = array![4.0, 2.0, 3.0];
        assert_relative_eq!(Norm::Euclidean.distance(a.view(), b.view()), 5.0);
        assert_relative_eq!(Norm::Maximum.distance(a.view(), b.view()), 4.0);
        assert_eq!("max".parse::<Norm>().unwrap(), Norm::Maximum);
        assert!("manhattan".parse::<Norm>().is_err());
    }

    #[test]
    fn test_fixed_threshold_is_inclusive() {
        let (rp, eps) =
            recurrence_plot(&line_trajectory(4), ThresholdMode::Fixed(1.0), Norm::Euclidean)
                .unwrap();
        assert_eq!(eps, 1.0);
        assert!(rp.get(0, 1));
        assert!(!rp.get(0, 2));
        assert!(rp.is_symmetric());
    }

    #[test]
    fn test_recurrence_rate_threshold() {
        // 5 points on a line: 20 ordered off-diagonal pairs, 8 at distance 1
        let (rp, eps) = recurrence_plot(
            &line_trajectory(5),
            ThresholdMode::RecurrenceRate(0.4),
            Norm::Euclidean,
        )
        .unwrap();
        assert_relative_eq!(eps, 1.0);
        assert_eq!(rp.off_diagonal_count(), 8);
    }

    #[test]
    fn test_neighbour_rate_is_asymmetric() {
        // Column 3 (the outlier) needs a large radius, the cluster a small one
        let x = array![[0.0], [0.1], [0.3], [5.0]];
        let (rp, _) =
            recurrence_plot(&x, ThresholdMode::NeighbourRate(0.3), Norm::Euclidean).unwrap();
        assert!(rp.get(2, 3));
        assert!(!rp.get(3, 2));
        assert!(!rp.is_symmetric());
        for j in 0..4 {
            let neighbours = (0..4).filter(|&i| i != j && rp.get(i, j)).count();
            assert_eq!(neighbours, 1);
        }
    }

    #[test]
    fn test_invalid_inputs() {
        let x = line_trajectory(3);
        assert!(recurrence_plot(&x, ThresholdMode::Fixed(-1.0), Norm::Euclidean).is_err());
        assert!(recurrence_plot(&x, ThresholdMode::RecurrenceRate(0.0), Norm::Euclidean).is_err());
        assert!(recurrence_plot(&x, ThresholdMode::NeighbourRate(1.5), Norm::Maximum).is_err());

        let empty = Array2::<f64>::zeros((0, 2));
        assert!(matches!(
            distance_matrix(&empty, Norm::Euclidean),
            Err(Error::InvalidSize { .. })
        ));
        let nan = array![[0.0], [f64::NAN]];
        assert!(matches!(
            distance_matrix(&nan, Norm::Euclidean),
            Err(Error::NonFiniteTrajectory)
        ));
    }

    #[test]
    fn test_single_state() {
        let (rp, eps) = recurrence_plot(
            &line_trajectory(1),
            ThresholdMode::RecurrenceRate(0.1),
            Norm::Euclidean,
        )
        .unwrap();
        assert_eq!(rp.size(), 1);
        assert_eq!(eps, 0.0);
    }
}
