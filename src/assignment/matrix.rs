//! Square working matrix for the Munkres algorithm
//!
//! Rectangular cost matrices are padded into an n×n working copy, which the
//! solver then reduces and adjusts in place.

use nalgebra::DMatrix;

use super::cover::CoverState;
use super::traits::CostValue;
use crate::{MunkresError, Result};

/// Builds a cost matrix from row-major data.
pub fn cost_matrix_from_rows<T: CostValue>(
    rows: usize,
    cols: usize,
    data: &[T],
) -> Result<DMatrix<T>> {
    if rows == 0 || cols == 0 {
        return Err(MunkresError::InvalidDimensions { rows, cols });
    }
    if data.len() != rows * cols {
        return Err(MunkresError::LengthMismatch {
            expected: rows * cols,
            actual: data.len(),
        });
    }
    Ok(DMatrix::from_row_slice(rows, cols, data))
}

/// Pads a possibly non-square matrix to make it square.
///
/// The original cells keep their place in the top-left block and every other
/// cell is set to `pad_value`. A square input is returned as a copy; the
/// caller's matrix is never modified.
pub fn pad_matrix<T: CostValue>(matrix: &DMatrix<T>, pad_value: T) -> DMatrix<T> {
    let (rows, cols) = matrix.shape();
    if rows == cols {
        return matrix.clone();
    }

    let n = rows.max(cols);
    let mut padded = DMatrix::from_element(n, n, pad_value);
    for i in 0..rows {
        for j in 0..cols {
            padded[(i, j)] = matrix[(i, j)];
        }
    }
    padded
}

/// The n×n matrix reduced and adjusted by the solver.
#[derive(Debug, Clone)]
pub struct WorkingMatrix<T: CostValue> {
    cells: DMatrix<T>,
}

impl<T: CostValue> WorkingMatrix<T> {
    /// Creates a working matrix by padding `original` with `pad_value`.
    pub fn padded(original: &DMatrix<T>, pad_value: T) -> Self {
        Self {
            cells: pad_matrix(original, pad_value),
        }
    }

    /// Side length of the square matrix.
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Value at (row, col).
    pub fn get(&self, row: usize, col: usize) -> T {
        self.cells[(row, col)]
    }

    /// Whether (row, col) holds a zero.
    pub fn is_zero(&self, row: usize, col: usize) -> bool {
        self.cells[(row, col)] == T::zero()
    }

    /// Read-only view of the cells.
    pub fn as_matrix(&self) -> &DMatrix<T> {
        &self.cells
    }

    /// Subtracts each row's minimum from every cell of that row.
    pub fn reduce_rows(&mut self) {
        for mut row in self.cells.row_iter_mut() {
            let mut min = row[0];
            for &value in row.iter() {
                if value < min {
                    min = value;
                }
            }
            for value in row.iter_mut() {
                *value -= min;
            }
        }
    }

    /// Smallest value among cells whose row and column are both uncovered.
    ///
    /// Returns `None` only when every row or every column is covered.
    pub fn smallest_uncovered(&self, covers: &CoverState) -> Option<T> {
        let n = self.size();
        let mut smallest: Option<T> = None;
        for i in (0..n).filter(|&i| !covers.is_row_covered(i)) {
            for j in (0..n).filter(|&j| !covers.is_col_covered(j)) {
                let value = self.cells[(i, j)];
                match smallest {
                    Some(current) if current <= value => {}
                    _ => smallest = Some(value),
                }
            }
        }
        smallest
    }

    /// Adds `value` to every covered row and subtracts it from every uncovered column.
    ///
    /// Cells whose row is covered and column uncovered cancel out and are
    /// left untouched, so float cells never drift onto a spurious zero.
    pub fn adjust_by_uncovered_minimum(&mut self, covers: &CoverState, value: T) {
        let n = self.size();
        for i in 0..n {
            let row_covered = covers.is_row_covered(i);
            for j in 0..n {
                match (row_covered, covers.is_col_covered(j)) {
                    (true, true) => self.cells[(i, j)] += value,
                    (false, false) => self.cells[(i, j)] -= value,
                    _ => {}
                }
            }
        }
    }
}
