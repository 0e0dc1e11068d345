use super::runs::{Line, runs_from_iter};
use crate::plot::RecurrencePlot;
use crate::{Error, Result};

/// One side of the main diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Triangle {
    /// Offsets `-(n-1)..=-1`, below the main diagonal.
    Lower,
    /// Offsets `1..=n-1`, above the main diagonal.
    Upper,
}

impl Triangle {
    /// All diagonal offsets of this triangle for an `n x n` plot.
    pub fn offsets(self, n: usize) -> impl Iterator<Item = isize> {
        let m = n as isize;
        let (lo, hi) = match self {
            Triangle::Lower => (1 - m, -1),
            Triangle::Upper => (1, m - 1),
        };
        lo..=hi
    }
}

/// Row and column of the first cell of the diagonal at `offset`.
#[inline]
pub(crate) fn origin(offset: isize) -> (usize, usize) {
    if offset < 0 {
        (offset.unsigned_abs(), 0)
    } else {
        (0, offset as usize)
    }
}

/// Direct-indexed view of one diagonal of a recurrence plot.
///
/// Reads `R[row0 + p][col0 + p]` on demand; nothing is copied.
#[derive(Debug, Clone, Copy)]
pub struct Diagonal<'a> {
    rp: &'a RecurrencePlot,
    offset: isize,
    row0: usize,
    col0: usize,
    len: usize,
}

impl<'a> Diagonal<'a> {
    /// View the diagonal at `offset`, which must lie in `-(n-1)..=n-1`.
    pub fn new(rp: &'a RecurrencePlot, offset: isize) -> Result<Self> {
        let n = rp.size();
        if offset.unsigned_abs() >= n {
            return Err(Error::InvalidOffset { offset, size: n });
        }
        Ok(Self::at(rp, offset))
    }

    /// Offset-checked by the caller.
    pub(crate) fn at(rp: &'a RecurrencePlot, offset: isize) -> Self {
        debug_assert!(offset.unsigned_abs() < rp.size());
        let (row0, col0) = origin(offset);
        Self {
            rp,
            offset,
            row0,
            col0,
            len: rp.size() - offset.unsigned_abs(),
        }
    }

    /// Signed offset from the main diagonal.
    pub fn offset(&self) -> isize {
        self.offset
    }

    /// Number of cells, `n - |offset|`.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false for a valid offset; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Recurrence at position `p` (0-indexed) along the diagonal.
    #[inline]
    pub fn get(&self, p: usize) -> bool {
        self.rp.get(self.row0 + p, self.col0 + p)
    }

    /// Matrix coordinates of position `p`.
    #[inline]
    pub fn cell(&self, p: usize) -> (usize, usize) {
        (self.row0 + p, self.col0 + p)
    }

    /// Recurrences along the diagonal, first cell first.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |p| self.get(p))
    }

    /// Copy the diagonal into a vector.
    pub fn to_vec(&self) -> Vec<bool> {
        self.iter().collect()
    }

    /// Maximal runs of recurrences on this diagonal.
    ///
    /// An all-false diagonal yields no lines.
    pub fn lines(&self) -> Vec<Line> {
        runs_from_iter(self.iter())
            .into_iter()
            .map(|run| Line {
                offset: self.offset,
                start: run.start,
                end: run.end,
                diagonal_len: self.len,
            })
            .collect()
    }
}

/// Materialize the diagonal at `offset` by a plain row walk.
///
/// Equivalent to [`Diagonal::to_vec`]; kept as the straightforward reference
/// reading of `R[i][i + offset]`.
///
/// # Example
/// ```
/// use ndarray::Array2;
/// use rqa_border::RecurrencePlot;
/// use rqa_border::lines::diagonal;
///
/// let rp = RecurrencePlot::new(Array2::from_elem((5, 5), true)).unwrap();
/// assert_eq!(diagonal(&rp, -4).unwrap(), vec![true]);
/// assert_eq!(diagonal(&rp, 2).unwrap().len(), 3);
/// assert!(diagonal(&rp, 5).is_err());
/// ```
pub fn diagonal(rp: &RecurrencePlot, offset: isize) -> Result<Vec<bool>> {
    let n = rp.size();
    if offset.unsigned_abs() >= n {
        return Err(Error::InvalidOffset { offset, size: n });
    }
    let mut out = Vec::with_capacity(n - offset.unsigned_abs());
    for row in 0..n {
        let col = row as isize + offset;
        if col >= 0 && (col as usize) < n {
            out.push(rp.get(row, col as usize));
        }
    }
    Ok(out)
}
