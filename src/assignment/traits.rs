//! Assignment solver traits and result types
//!
//! Defines the numeric bound shared by every cost cell, the result of an
//! assignment computation, and the common interface for solvers.

use core::ops::{Add, AddAssign, Sub, SubAssign};

use alloc::{vec, vec::Vec};
use nalgebra::{DMatrix, Scalar};
use num_traits::Zero;

use crate::Result;

// ============================================================================
// Cost Values
// ============================================================================

/// Numeric type usable as a cell of a cost matrix.
///
/// Implemented for every type that is comparable and closed under addition
/// and subtraction, which covers the signed integers and both float widths.
pub trait CostValue:
    Scalar
    + Copy
    + PartialOrd
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
{
}

impl<T> CostValue for T where
    T: Scalar
        + Copy
        + PartialOrd
        + Zero
        + Add<Output = T>
        + Sub<Output = T>
        + AddAssign
        + SubAssign
{
}

// ============================================================================
// Assignment Result
// ============================================================================

/// Result of an assignment problem.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment<T> {
    /// Matched (row, column) pairs in row-major order
    pub pairs: Vec<(usize, usize)>,
    /// Total cost, summed from the original (unreduced) matrix
    pub cost: T,
    /// Rows of the original matrix
    pub rows: usize,
    /// Columns of the original matrix
    pub cols: usize,
}

impl<T: CostValue> Assignment<T> {
    /// Creates an assignment and prices its pairs against `cost`.
    ///
    /// Pairs outside the bounds of `cost` are dropped.
    pub fn from_pairs(cost: &DMatrix<T>, mut pairs: Vec<(usize, usize)>) -> Self {
        let (rows, cols) = cost.shape();
        pairs.retain(|&(row, col)| row < rows && col < cols);
        Self {
            cost: total_cost(cost, &pairs),
            rows,
            cols,
            pairs,
        }
    }

    /// Returns the number of assigned pairs.
    pub fn num_assigned(&self) -> usize {
        self.pairs.len()
    }

    /// Returns the column assigned to `row`, if any.
    pub fn column_for_row(&self, row: usize) -> Option<usize> {
        self.pairs.iter().find(|&&(r, _)| r == row).map(|&(_, c)| c)
    }

    /// Returns the row assigned to `col`, if any.
    pub fn row_for_column(&self, col: usize) -> Option<usize> {
        self.pairs.iter().find(|&&(_, c)| c == col).map(|&(r, _)| r)
    }

    /// Returns the mapping row -> column, `None` for unassigned rows.
    pub fn row_mapping(&self) -> Vec<Option<usize>> {
        let mut mapping = vec![None; self.rows];
        for &(row, col) in &self.pairs {
            mapping[row] = Some(col);
        }
        mapping
    }

    /// Returns the rows left without a partner, in increasing order.
    pub fn unassigned_rows(&self) -> Vec<usize> {
        self.row_mapping()
            .iter()
            .enumerate()
            .filter_map(|(row, col)| col.is_none().then_some(row))
            .collect()
    }

    /// Returns the columns left without a partner, in increasing order.
    pub fn unassigned_columns(&self) -> Vec<usize> {
        let mut used = vec![false; self.cols];
        for &(_, col) in &self.pairs {
            used[col] = true;
        }
        used.iter()
            .enumerate()
            .filter_map(|(col, &taken)| (!taken).then_some(col))
            .collect()
    }
}

/// Sums the costs of `pairs` in `cost`.
///
/// Pairs outside the matrix bounds are ignored.
pub fn total_cost<T: CostValue>(cost: &DMatrix<T>, pairs: &[(usize, usize)]) -> T {
    pairs
        .iter()
        .filter(|&&(row, col)| row < cost.nrows() && col < cost.ncols())
        .fold(T::zero(), |acc, &(row, col)| acc + cost[(row, col)])
}

// ============================================================================
// Solver Trait
// ============================================================================

/// Trait for exact linear assignment solvers.
pub trait AssignmentSolver<T: CostValue> {
    /// Computes the minimum-cost assignment for `cost`.
    ///
    /// # Arguments
    ///
    /// * `cost` - Cost matrix (rows × columns), at least 1×1
    ///
    /// # Returns
    ///
    /// The matched pairs within the original bounds and their total cost.
    fn solve(&self, cost: &DMatrix<T>) -> Result<Assignment<T>>;
}

// ============================================================================
// Tests
// ============================================================================
