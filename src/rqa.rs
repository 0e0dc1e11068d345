use crate::lines::LineLengthDistribution;
use crate::plot::RecurrencePlot;

/// Diagonal line statistics of a length distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStatistics {
    /// Number of lines of length `>= l_min`
    pub n_lines: usize,
    /// Mean line length
    pub mean_length: f64,
    /// Longest line, zero when there are no lines
    pub max_length: usize,
    /// Shannon entropy (natural log) of the length distribution
    pub entropy: f64,
}

/// Compute line statistics over lines of length at least `l_min`.
///
/// An `l_min` of zero is treated as one.
///
/// # Example
/// ```
/// use rqa_border::lines::LineLengthDistribution;
/// use rqa_border::rqa::line_statistics;
///
/// let dist = LineLengthDistribution::from_lengths(&[4, 4, 2, 1], 5).unwrap();
/// let stats = line_statistics(&dist, 2);
/// assert_eq!(stats.n_lines, 3);
/// assert!((stats.mean_length - 10.0 / 3.0).abs() < 1e-12);
/// assert_eq!(stats.max_length, 4);
/// ```
pub fn line_statistics(distribution: &LineLengthDistribution, l_min: usize) -> LineStatistics {
    let l_min = l_min.max(1);
    let n_lines = distribution.total_from(l_min);
    if n_lines == 0 {
        return LineStatistics {
            n_lines: 0,
            mean_length: 0.0,
            max_length: 0,
            entropy: 0.0,
        };
    }

    let mean_length = distribution.points_from(l_min) as f64 / n_lines as f64;
    let max_length = distribution.max_length().unwrap_or(0);

    let mut entropy = 0.0f64;
    for (_, count) in distribution.iter().filter(|&(l, _)| l >= l_min) {
        let p = count as f64 / n_lines as f64;
        entropy -= p * p.ln();
    }

    LineStatistics {
        n_lines,
        mean_length,
        max_length,
        entropy,
    }
}

/// Fraction of off-main-diagonal recurrence points covered by lines of
/// length at least `l_min`.
///
/// Censi-corrected distributions may claim more points than the plot holds,
/// so the ratio is capped at one. A plot without off-diagonal recurrences
/// has determinism zero.
pub fn determinism(
    rp: &RecurrencePlot,
    distribution: &LineLengthDistribution,
    l_min: usize,
) -> f64 {
    let total = rp.off_diagonal_count();
    if total == 0 {
        return 0.0;
    }
    let in_lines = distribution.points_from(l_min.max(1));
    (in_lines as f64 / total as f64).min(1.0)
}
