//! Row and column cover bookkeeping

use alloc::{vec, vec::Vec};

/// Covered rows and columns of the working matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverState {
    rows: Vec<bool>,
    cols: Vec<bool>,
}

impl CoverState {
    /// Creates a cover state with every row and column uncovered.
    pub fn new(n: usize) -> Self {
        Self {
            rows: vec![false; n],
            cols: vec![false; n],
        }
    }

    /// Marks `row` as covered.
    pub fn cover_row(&mut self, row: usize) {
        self.rows[row] = true;
    }

    /// Marks `col` as covered.
    pub fn cover_col(&mut self, col: usize) {
        self.cols[col] = true;
    }

    /// Removes the cover from `col`.
    pub fn uncover_col(&mut self, col: usize) {
        self.cols[col] = false;
    }

    /// Whether `row` is covered.
    pub fn is_row_covered(&self, row: usize) -> bool {
        self.rows[row]
    }

    /// Whether `col` is covered.
    pub fn is_col_covered(&self, col: usize) -> bool {
        self.cols[col]
    }

    /// Uncovers every row and column.
    pub fn clear_all(&mut self) {
        self.rows.fill(false);
        self.cols.fill(false);
    }

    /// Number of covered columns.
    pub fn count_covered_cols(&self) -> usize {
        self.cols.iter().filter(|&&c| c).count()
    }
}
