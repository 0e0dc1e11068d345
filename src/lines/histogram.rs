use crate::{Error, Result};

/// Frequency of accepted lines by length, for lengths `1..=n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLengthDistribution {
    // counts[l - 1] is the number of lines of length l
    counts: Vec<usize>,
}

impl LineLengthDistribution {
    /// Count the lengths of an accepted-line list for an `n x n` plot.
    ///
    /// Zero lengths are ignored. A length above `n` cannot come from an
    /// `n x n` plot and is rejected.
    ///
    /// # Example
    /// ```
    /// use rqa_border::lines::LineLengthDistribution;
    ///
    /// let dist = LineLengthDistribution::from_lengths(&[3, 2, 2, 0], 5).unwrap();
    /// assert_eq!(dist.counts(), &[0, 2, 1, 0, 0]);
    /// assert_eq!(dist.total(), 3);
    /// assert!(LineLengthDistribution::from_lengths(&[6], 5).is_err());
    /// ```
    pub fn from_lengths(lengths: &[usize], n: usize) -> Result<Self> {
        if let Some(&bad) = lengths.iter().find(|&&l| l > n) {
            return Err(Error::InvalidParameter {
                name: "line length",
                value: bad.to_string(),
                reason: format!("exceeds recurrence plot size {n}"),
            });
        }
        Ok(Self::from_valid(lengths, n))
    }

    /// Lengths already known to be `<= n`.
    pub(crate) fn from_valid(lengths: &[usize], n: usize) -> Self {
        let mut counts = vec![0usize; n];
        for &l in lengths.iter().filter(|&&l| l > 0) {
            counts[l - 1] += 1;
        }
        Self { counts }
    }

    /// Largest representable length (the plot size).
    pub fn size(&self) -> usize {
        self.counts.len()
    }

    /// Number of lines of exactly `length`; zero outside `1..=n`.
    pub fn count(&self, length: usize) -> usize {
        match length {
            0 => 0,
            l => self.counts.get(l - 1).copied().unwrap_or(0),
        }
    }

    /// Counts indexed by `length - 1`.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Total number of lines.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of lines of length `>= l_min`.
    pub fn total_from(&self, l_min: usize) -> usize {
        self.iter().filter(|&(l, _)| l >= l_min).map(|(_, c)| c).sum()
    }

    /// Recurrence points covered by lines of length `>= l_min`.
    pub fn points_from(&self, l_min: usize) -> usize {
        self.iter()
            .filter(|&(l, _)| l >= l_min)
            .map(|(l, c)| l * c)
            .sum()
    }

    /// Longest length with a non-zero count.
    pub fn max_length(&self) -> Option<usize> {
        self.counts.iter().rposition(|&c| c > 0).map(|idx| idx + 1)
    }

    /// `(length, count)` pairs with non-zero count, ascending by length.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(idx, &c)| (idx + 1, c))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }
}
