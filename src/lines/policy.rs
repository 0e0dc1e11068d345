use super::border::BorderMode;
use super::diagonal::{Diagonal, Triangle};
use super::histogram::LineLengthDistribution;
use super::runs::Line;
use crate::Error;
use crate::plot::RecurrencePlot;
use std::fmt;
use std::str::FromStr;

/// Mask width used when `window-masking` is parsed without an explicit width.
pub const DEFAULT_MASK_WIDTH: usize = 1;

/// Rule deciding which diagonal lines are accepted, and at what length.
///
/// All variants share the same traversal and run extraction; they differ only
/// in what happens to lines touching the border of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorrectionPolicy {
    /// Every line at its raw length.
    Conventional,
    /// Border lines are discarded (`dibo`).
    DiscardBorder,
    /// Border lines are kept, each lengthened to the longest border line of
    /// its triangle. All border lines of a triangle share that one length;
    /// no per-line extrapolation is made.
    Censi,
    /// Only the longest border line of each triangle is kept (`kelo`).
    Kelo,
    /// Only lines lying entirely inside the plot minus a band of `width`
    /// cells along each edge are kept.
    WindowMasking { width: usize },
}

impl CorrectionPolicy {
    /// Canonical policy names in a fixed order.
    pub const NAMES: [&'static str; 5] = ["conventional", "dibo", "censi", "kelo", "window-masking"];

    /// All five policies, window masking with the given width.
    pub fn all(mask_width: usize) -> [CorrectionPolicy; 5] {
        [
            CorrectionPolicy::Conventional,
            CorrectionPolicy::DiscardBorder,
            CorrectionPolicy::Censi,
            CorrectionPolicy::Kelo,
            CorrectionPolicy::WindowMasking { width: mask_width },
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            CorrectionPolicy::Conventional => "conventional",
            CorrectionPolicy::DiscardBorder => "dibo",
            CorrectionPolicy::Censi => "censi",
            CorrectionPolicy::Kelo => "kelo",
            CorrectionPolicy::WindowMasking { .. } => "window-masking",
        }
    }

    /// Accepted lengths for the lines of one triangle, in input order.
    ///
    /// `n` is the plot size; `mode` is ignored by the policies that do not
    /// classify borders.
    pub fn apply(&self, lines: &[Line], n: usize, mode: BorderMode) -> Vec<usize> {
        let is_border = |line: &Line| mode.is_border(line.border_class());

        match *self {
            CorrectionPolicy::Conventional => lines.iter().map(Line::length).collect(),
            CorrectionPolicy::DiscardBorder => lines
                .iter()
                .filter(|line| !is_border(*line))
                .map(Line::length)
                .collect(),
            CorrectionPolicy::Censi => {
                let longest = lines
                    .iter()
                    .filter(|line| is_border(*line))
                    .map(Line::length)
                    .max()
                    .unwrap_or(0);
                lines
                    .iter()
                    .map(|line| if is_border(line) { longest } else { line.length() })
                    .collect()
            }
            CorrectionPolicy::Kelo => {
                // First of the longest border lines, so ties keep exactly one
                let keep = lines
                    .iter()
                    .enumerate()
                    .filter(|(_, line)| is_border(*line))
                    .fold(None, |best: Option<(usize, usize)>, (idx, line)| match best {
                        Some((_, len)) if len >= line.length() => best,
                        _ => Some((idx, line.length())),
                    })
                    .map(|(idx, _)| idx);
                lines
                    .iter()
                    .enumerate()
                    .filter(|&(idx, line)| !is_border(line) || Some(idx) == keep)
                    .map(|(_, line)| line.length())
                    .collect()
            }
            CorrectionPolicy::WindowMasking { width } => lines
                .iter()
                .filter(|line| line.within_window(n, width))
                .map(Line::length)
                .collect(),
        }
    }
}

impl FromStr for CorrectionPolicy {
    type Err = Error;

    /// Parse a policy name. Window masking accepts an optional width suffix,
    /// e.g. `window-masking:3`.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let lower = name.trim().to_lowercase();
        let (base, width) = match lower.split_once(':') {
            Some((base, width)) => (base, Some(width)),
            None => (lower.as_str(), None),
        };
        let policy = match base {
            "conventional" => CorrectionPolicy::Conventional,
            "dibo" | "discard-border" => CorrectionPolicy::DiscardBorder,
            "censi" => CorrectionPolicy::Censi,
            "kelo" => CorrectionPolicy::Kelo,
            "window-masking" | "window_masking" => {
                let width = match width {
                    Some(w) => w.parse().map_err(|_| Error::InvalidParameter {
                        name: "mask width",
                        value: w.to_string(),
                        reason: "expected a non-negative integer".to_string(),
                    })?,
                    None => DEFAULT_MASK_WIDTH,
                };
                return Ok(CorrectionPolicy::WindowMasking { width });
            }
            _ => {
                return Err(Error::InvalidParameter {
                    name: "correction policy",
                    value: name.to_string(),
                    reason: format!("expected one of {:?}", Self::NAMES),
                });
            }
        };
        match width {
            Some(_) => Err(Error::InvalidParameter {
                name: "correction policy",
                value: name.to_string(),
                reason: "only window-masking takes a width".to_string(),
            }),
            None => Ok(policy),
        }
    }
}

impl fmt::Display for CorrectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorrectionPolicy::WindowMasking { width } => write!(f, "window-masking:{width}"),
            other => f.write_str(other.name()),
        }
    }
}

/// How the two triangles of the plot are visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Traversal {
    /// Traverse the lower triangle only and mirror its lines when the plot
    /// is symmetric; otherwise traverse both.
    #[default]
    Auto,
    /// Always traverse both triangles independently.
    Full,
}

/// Configuration for diagonal line extraction.
///
/// # Example
/// ```
/// use rqa_border::lines::{BorderMode, LineConfig, Traversal};
///
/// let config = LineConfig::new()
///     .with_border_mode(BorderMode::Semi)
///     .with_traversal(Traversal::Full);
/// assert_eq!(config.border_mode, BorderMode::Semi);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineConfig {
    /// Which lines count as border lines
    pub border_mode: BorderMode,
    /// Triangle traversal strategy
    pub traversal: Traversal,
}

impl LineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the border-counting mode.
    pub fn with_border_mode(mut self, border_mode: BorderMode) -> Self {
        self.border_mode = border_mode;
        self
    }

    /// Set the border-counting mode from its name, warning and falling back
    /// to `normal` on an unknown name.
    pub fn with_border_mode_name(mut self, name: &str) -> Self {
        self.border_mode = BorderMode::parse_lenient(name);
        self
    }

    /// Set the triangle traversal strategy.
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }
}

/// Accepted line lengths for one (plot, policy) pair, sorted descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLengths {
    policy: CorrectionPolicy,
    size: usize,
    lengths: Vec<usize>,
}

impl LineLengths {
    /// Policy that produced these lengths.
    pub fn policy(&self) -> CorrectionPolicy {
        self.policy
    }

    /// Size `n` of the plot the lines came from.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Lengths, longest first.
    pub fn as_slice(&self) -> &[usize] {
        &self.lengths
    }

    /// Consume into the sorted length vector.
    pub fn into_vec(self) -> Vec<usize> {
        self.lengths
    }

    /// Number of accepted lines.
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Longest accepted line.
    pub fn max(&self) -> Option<usize> {
        self.lengths.first().copied()
    }

    /// Length-frequency distribution over `1..=n`.
    pub fn distribution(&self) -> LineLengthDistribution {
        LineLengthDistribution::from_valid(&self.lengths, self.size)
    }
}

/// All lines of one triangle, in offset order.
pub fn collect_lines(rp: &RecurrencePlot, triangle: Triangle) -> Vec<Line> {
    let offsets: Vec<isize> = triangle.offsets(rp.size()).collect();

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        offsets
            .into_par_iter()
            .flat_map_iter(|offset| Diagonal::at(rp, offset).lines())
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        offsets
            .into_iter()
            .flat_map(|offset| Diagonal::at(rp, offset).lines())
            .collect()
    }
}

/// Extract diagonal lines from `rp` and apply a correction policy.
///
/// The main diagonal is never analysed. With [`Traversal::Auto`] a symmetric
/// plot is traversed over its lower triangle only and the accepted lengths
/// are counted twice.
///
/// # Example
/// ```
/// use ndarray::Array2;
/// use rqa_border::RecurrencePlot;
/// use rqa_border::lines::{CorrectionPolicy, LineConfig, diagonal_lines};
///
/// let rp = RecurrencePlot::new(Array2::from_elem((5, 5), true)).unwrap();
/// let lines = diagonal_lines(&rp, CorrectionPolicy::Conventional, &LineConfig::default());
/// assert_eq!(lines.as_slice(), &[4, 4, 3, 3, 2, 2, 1, 1]);
/// ```
pub fn diagonal_lines(
    rp: &RecurrencePlot,
    policy: CorrectionPolicy,
    config: &LineConfig,
) -> LineLengths {
    let n = rp.size();
    let mode = config.border_mode;
    let mirror = match config.traversal {
        Traversal::Auto => rp.is_symmetric(),
        Traversal::Full => false,
    };

    let lower = policy.apply(&collect_lines(rp, Triangle::Lower), n, mode);
    let mut lengths = if mirror {
        log::debug!("symmetric {n}x{n} plot, mirroring lower triangle for `{policy}`");
        let mut both = Vec::with_capacity(2 * lower.len());
        both.extend_from_slice(&lower);
        both.extend_from_slice(&lower);
        both
    } else {
        let upper = policy.apply(&collect_lines(rp, Triangle::Upper), n, mode);
        let mut both = lower;
        both.extend(upper);
        both
    };

    lengths.retain(|&l| l > 0);
    lengths.sort_unstable_by(|a, b| b.cmp(a));
    log::trace!("`{policy}` accepted {} lines", lengths.len());

    LineLengths {
        policy,
        size: n,
        lengths,
    }
}
