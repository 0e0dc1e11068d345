//! Recurrence plot container.
//!
//! A [`RecurrencePlot`] wraps a square `Array2<bool>`. It is validated once at
//! construction so that every later diagonal computation can rely on
//! `rows == cols >= 1`.

use crate::lines::Diagonal;
use crate::{Error, Result};
use ndarray::Array2;

/// Square boolean recurrence matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrencePlot {
    matrix: Array2<bool>,
}

impl RecurrencePlot {
    /// Wrap a boolean matrix, rejecting empty and non-square input.
    ///
    /// # Example
    /// ```
    /// use ndarray::Array2;
    /// use rqa_border::RecurrencePlot;
    ///
    /// let rp = RecurrencePlot::new(Array2::from_elem((4, 4), false)).unwrap();
    /// assert_eq!(rp.size(), 4);
    /// assert!(RecurrencePlot::new(Array2::from_elem((3, 4), false)).is_err());
    /// ```
    pub fn new(matrix: Array2<bool>) -> Result<Self> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(Error::ShapeMismatch {
                expected: "square matrix".to_string(),
                got: format!("{rows}x{cols}"),
            });
        }
        if rows == 0 {
            return Err(Error::InvalidSize {
                name: "recurrence plot",
                value: 0,
                reason: "must have at least one row",
            });
        }
        Ok(Self { matrix })
    }

    /// Build from a numeric matrix holding only `0.0` and `1.0`.
    ///
    /// Any other value, including NaN, is rejected with [`Error::NonBinary`].
    pub fn from_binary(matrix: &Array2<f32>) -> Result<Self> {
        if let Some(((row, col), &value)) = matrix
            .indexed_iter()
            .find(|&(_, &v)| v != 0.0 && v != 1.0)
        {
            return Err(Error::NonBinary { row, col, value });
        }
        Self::new(matrix.mapv(|v| v == 1.0))
    }

    /// Build from nested rows, rejecting ragged input.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        let n = rows.len();
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(Error::ShapeMismatch {
                expected: format!("row {idx} of length {n}"),
                got: format!("length {}", row.len()),
            });
        }
        let flat: Vec<bool> = rows.iter().flatten().copied().collect();
        let matrix = Array2::from_shape_vec((n, n), flat).map_err(|e| Error::ShapeMismatch {
            expected: format!("{n}x{n} matrix"),
            got: e.to_string(),
        })?;
        Self::new(matrix)
    }

    /// Side length `n` of the plot.
    #[inline]
    pub fn size(&self) -> usize {
        self.matrix.nrows()
    }

    /// Recurrence at row `i`, column `j` (0-indexed).
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.matrix[(i, j)]
    }

    /// Borrow the underlying matrix.
    pub fn as_array(&self) -> &Array2<bool> {
        &self.matrix
    }

    /// Consume the plot and return the underlying matrix.
    pub fn into_array(self) -> Array2<bool> {
        self.matrix
    }

    /// Whether `R[i][j] == R[j][i]` for all `i`, `j`.
    pub fn is_symmetric(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| (i + 1..n).all(|j| self.matrix[(i, j)] == self.matrix[(j, i)]))
    }

    /// Number of `true` entries, main diagonal included.
    pub fn recurrence_count(&self) -> usize {
        self.matrix.iter().filter(|&&r| r).count()
    }

    /// Number of `true` entries off the main diagonal.
    pub fn off_diagonal_count(&self) -> usize {
        let on_diagonal = (0..self.size()).filter(|&i| self.matrix[(i, i)]).count();
        self.recurrence_count() - on_diagonal
    }

    /// Fraction of recurrent entries in the whole matrix.
    pub fn recurrence_rate(&self) -> f64 {
        let n = self.size();
        self.recurrence_count() as f64 / (n * n) as f64
    }

    /// Direct-indexed view of the diagonal at `offset`.
    ///
    /// Negative offsets lie below the main diagonal, positive offsets above.
    pub fn diagonal(&self, offset: isize) -> Result<Diagonal<'_>> {
        Diagonal::new(self, offset)
    }
}

impl TryFrom<Array2<bool>> for RecurrencePlot {
    type Error = Error;

    fn try_from(matrix: Array2<bool>) -> Result<Self> {
        Self::new(matrix)
    }
}
