//! Run every correction policy on the same recurrence plot.

use crate::lines::{
    CorrectionPolicy, LineConfig, LineLengthDistribution, LineLengths, diagonal_lines,
};
use crate::plot::RecurrencePlot;
use std::collections::BTreeMap;

/// Output of one correction policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyResult {
    /// Accepted lengths, sorted descending
    pub lengths: LineLengths,
    /// Frequency of each length in `1..=n`
    pub distribution: LineLengthDistribution,
}

impl PolicyResult {
    fn new(lengths: LineLengths) -> Self {
        let distribution = lengths.distribution();
        Self {
            lengths,
            distribution,
        }
    }
}

/// Apply a single policy and build its distribution.
pub fn analyze_policy(
    rp: &RecurrencePlot,
    policy: CorrectionPolicy,
    config: &LineConfig,
) -> PolicyResult {
    PolicyResult::new(diagonal_lines(rp, policy, config))
}

/// Apply all five correction policies to `rp`.
///
/// Results are keyed by policy name (`conventional`, `dibo`, `censi`, `kelo`,
/// `window-masking`); window masking uses `mask_width`.
///
/// # Example
/// ```
/// use ndarray::Array2;
/// use rqa_border::RecurrencePlot;
/// use rqa_border::analysis::analyze;
/// use rqa_border::lines::LineConfig;
///
/// let rp = RecurrencePlot::new(Array2::from_elem((6, 6), true)).unwrap();
/// let results = analyze(&rp, &LineConfig::default(), 1);
/// assert_eq!(results.len(), 5);
/// assert_eq!(results["conventional"].distribution.count(5), 2);
/// assert!(results["dibo"].lengths.is_empty());
/// ```
pub fn analyze(
    rp: &RecurrencePlot,
    config: &LineConfig,
    mask_width: usize,
) -> BTreeMap<&'static str, PolicyResult> {
    let policies = CorrectionPolicy::all(mask_width);

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        policies
            .par_iter()
            .map(|&policy| (policy.name(), analyze_policy(rp, policy, config)))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        policies
            .iter()
            .map(|&policy| (policy.name(), analyze_policy(rp, policy, config)))
            .collect()
    }
}
