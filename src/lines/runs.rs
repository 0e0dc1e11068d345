use super::border::{BorderClass, classify};
use super::diagonal::origin;

/// Maximal run of `true` values, 1-indexed with inclusive end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub start: usize,
    pub end: usize,
}

impl Run {
    /// `end - start + 1`.
    #[inline]
    pub fn length(&self) -> usize {
        self.end - self.start + 1
    }
}

/// A diagonal line: a run together with the diagonal it lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    /// Diagonal offset (negative below the main diagonal).
    pub offset: isize,
    /// First cell, 1-indexed along the diagonal.
    pub start: usize,
    /// Last cell, 1-indexed and inclusive.
    pub end: usize,
    /// Total length of the diagonal, `n - |offset|`.
    pub diagonal_len: usize,
}

impl Line {
    /// Number of cells covered by the line.
    #[inline]
    pub fn length(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn border_class(&self) -> BorderClass {
        classify(self.start, self.end, self.diagonal_len)
    }

    /// Matrix coordinates (0-indexed) of the first and last cells.
    pub fn cells(&self) -> ((usize, usize), (usize, usize)) {
        let (row0, col0) = origin(self.offset);
        let first = (row0 + self.start - 1, col0 + self.start - 1);
        let last = (row0 + self.end - 1, col0 + self.end - 1);
        (first, last)
    }

    /// Whether every cell lies in rows and columns `width..n-width`.
    pub fn within_window(&self, n: usize, width: usize) -> bool {
        if width >= n.div_ceil(2) {
            return false;
        }
        let hi = n - 1 - width;
        let ((r0, c0), (r1, c1)) = self.cells();
        r0 >= width && c0 >= width && r1 <= hi && c1 <= hi
    }
}

/// Find all maximal runs of `true` in a boolean sequence.
///
/// The sequence is read as if padded with `false` on both sides, so runs
/// touching either end are closed properly.
///
/// # Example
/// ```
/// use rqa_border::lines::{Run, find_runs};
///
/// let seq = [false, true, true, false, true, true, true, false];
/// let runs = find_runs(&seq);
/// assert_eq!(runs, vec![Run { start: 2, end: 3 }, Run { start: 5, end: 7 }]);
/// ```
pub fn find_runs(seq: &[bool]) -> Vec<Run> {
    runs_from_iter(seq.iter().copied())
}

/// [`find_runs`] over any boolean iterator.
pub fn runs_from_iter<I>(values: I) -> Vec<Run>
where
    I: IntoIterator<Item = bool>,
{
    let mut runs = Vec::new();
    let mut prev = false;
    let mut start = 0usize;
    let mut pos = 0usize;

    for value in values {
        pos += 1;
        match (prev, value) {
            (false, true) => start = pos,
            (true, false) => runs.push(Run {
                start,
                end: pos - 1,
            }),
            _ => {}
        }
        prev = value;
    }

    // Trailing padding
    if prev {
        runs.push(Run { start, end: pos });
    }

    runs
}
