//! Munkres Algorithm for Optimal Assignment
//!
//! Implementation of the Munkres (Hungarian) algorithm for solving the
//! rectangular linear assignment problem in O(n³) time.
//!
//! The cost matrix is padded into an n×n working matrix, then driven through
//! a six-step state machine over the working matrix, a grid of star/prime
//! marks, and a set of covered rows and columns. When every column holds a
//! starred zero the stars form an optimal assignment.

use alloc::{vec, vec::Vec};
use log::{debug, trace};
use nalgebra::DMatrix;

use super::cover::CoverState;
use super::marks::MarkGrid;
use super::matrix::WorkingMatrix;
use super::traits::{Assignment, AssignmentSolver, CostValue};
use crate::{MunkresError, Result};

/// State of the Munkres state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Step 1: subtract each row's minimum from that row
    ReduceRows,
    /// Step 2: star an independent set of zeros
    StarZeros,
    /// Step 3: cover starred columns and test for a complete assignment
    CoverStarredColumns,
    /// Step 4: prime uncovered zeros until an augmenting path starts
    PrimeZeros,
    /// Step 5: flip the path that starts at the given uncovered primed zero
    AugmentPath {
        /// Row of the primed zero that starts the path
        row: usize,
        /// Column of the primed zero that starts the path
        col: usize,
    },
    /// Step 6: shift the smallest uncovered value to create new zeros
    AdjustMatrix,
    /// Every column holds a star; the stars are the assignment
    Done,
}

/// Configuration for the Munkres solver.
#[derive(Debug, Clone, PartialEq)]
pub struct MunkresConfig<T> {
    /// Value written into the cells added when padding a rectangular matrix
    pub pad_value: T,
}

impl<T: CostValue> MunkresConfig<T> {
    /// Creates a configuration with a custom pad value.
    pub fn new(pad_value: T) -> Self {
        Self { pad_value }
    }
}

impl<T: CostValue> Default for MunkresConfig<T> {
    fn default() -> Self {
        Self {
            pad_value: T::zero(),
        }
    }
}

/// Munkres assignment solver.
///
/// The solver only holds its configuration. All scratch state is built fresh
/// for every call, so a single instance can serve any number of
/// independent computations.
#[derive(Debug, Clone)]
pub struct Munkres<T: CostValue> {
    config: MunkresConfig<T>,
}

impl<T: CostValue> Default for Munkres<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CostValue> Munkres<T> {
    /// Creates a solver that pads with zeros.
    pub fn new() -> Self {
        Self {
            config: MunkresConfig::default(),
        }
    }

    /// Creates a solver with the given configuration.
    pub fn with_config(config: MunkresConfig<T>) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &MunkresConfig<T> {
        &self.config
    }

    /// Computes the lowest-cost pairing of rows and columns.
    ///
    /// A non-square `cost` is padded to n×n with the configured pad value;
    /// the caller's matrix is not modified. Matches landing in the padded
    /// region are dropped, so at most min(rows, cols) pairs are returned.
    ///
    /// # Returns
    /// The matched (row, column) pairs in row-major order.
    ///
    /// # Errors
    /// [`MunkresError::InvalidDimensions`] if `cost` has no rows or no columns.
    pub fn compute(&self, cost: &DMatrix<T>) -> Result<Vec<(usize, usize)>> {
        let (rows, cols) = cost.shape();
        if rows == 0 || cols == 0 {
            return Err(MunkresError::InvalidDimensions { rows, cols });
        }

        let mut state = SolverState::new(cost, self.config.pad_value);
        state.run()?;

        Ok(state
            .marks
            .stars()
            .filter(|&(row, col)| row < rows && col < cols)
            .collect())
    }
}

impl<T: CostValue> AssignmentSolver<T> for Munkres<T> {
    fn solve(&self, cost: &DMatrix<T>) -> Result<Assignment<T>> {
        let pairs = self.compute(cost)?;
        Ok(Assignment::from_pairs(cost, pairs))
    }
}

/// Solves the assignment problem for `cost` with zero padding.
///
/// # Example
/// ```
/// use munkres::prelude::*;
///
/// let cost = cost_matrix_from_rows(2, 3, &[4.0, 1.0, 3.0, 2.0, 0.5, 5.0]).unwrap();
/// let assignment = munkres(&cost).unwrap();
///
/// assert_eq!(assignment.pairs, vec![(0, 1), (1, 0)]);
/// ```
pub fn munkres<T: CostValue>(cost: &DMatrix<T>) -> Result<Assignment<T>> {
    Munkres::new().solve(cost)
}

// ============================================================================
// State Machine
// ============================================================================

/// Scratch state owned by a single `compute` call.
struct SolverState<T: CostValue> {
    matrix: WorkingMatrix<T>,
    marks: MarkGrid,
    covers: CoverState,
    n: usize,
    augmentations: usize,
    adjustments: usize,
}

impl<T: CostValue> SolverState<T> {
    fn new(cost: &DMatrix<T>, pad_value: T) -> Self {
        let matrix = WorkingMatrix::padded(cost, pad_value);
        let n = matrix.size();
        Self {
            matrix,
            marks: MarkGrid::new(n),
            covers: CoverState::new(n),
            n,
            augmentations: 0,
            adjustments: 0,
        }
    }

    fn run(&mut self) -> Result<()> {
        let mut step = Step::ReduceRows;
        while step != Step::Done {
            trace!("munkres: entering {:?}", step);
            step = self.run_step(step)?;
        }
        debug!(
            "munkres: solved {}x{} working matrix with {} augmentations and {} adjustments",
            self.n, self.n, self.augmentations, self.adjustments
        );
        Ok(())
    }

    fn run_step(&mut self, step: Step) -> Result<Step> {
        match step {
            Step::ReduceRows => Ok(self.reduce_rows()),
            Step::StarZeros => Ok(self.star_zeros()),
            Step::CoverStarredColumns => Ok(self.cover_starred_columns()),
            Step::PrimeZeros => Ok(self.prime_zeros()),
            Step::AugmentPath { row, col } => self.augment_path(row, col),
            Step::AdjustMatrix => self.adjust_matrix(),
            Step::Done => Ok(Step::Done),
        }
    }

    /// Step 1.
    fn reduce_rows(&mut self) -> Step {
        self.matrix.reduce_rows();
        Step::StarZeros
    }

    /// Step 2. Covers only guard against starring twice in a line here.
    fn star_zeros(&mut self) -> Step {
        for i in 0..self.n {
            for j in 0..self.n {
                if self.matrix.is_zero(i, j)
                    && !self.covers.is_row_covered(i)
                    && !self.covers.is_col_covered(j)
                {
                    self.marks.set_star(i, j);
                    self.covers.cover_row(i);
                    self.covers.cover_col(j);
                }
            }
        }
        self.covers.clear_all();
        Step::CoverStarredColumns
    }

    /// Step 3.
    fn cover_starred_columns(&mut self) -> Step {
        debug_assert!(
            self.marks.stars_are_independent(),
            "two starred zeros share a row or column"
        );

        for (_, col) in self.marks.stars() {
            self.covers.cover_col(col);
        }

        if self.covers.count_covered_cols() >= self.n {
            Step::Done
        } else {
            Step::PrimeZeros
        }
    }

    /// Step 4.
    fn prime_zeros(&mut self) -> Step {
        while let Some((row, col)) = self.find_uncovered_zero() {
            self.marks.set_prime(row, col);
            match self.marks.find_star_in_row(row) {
                Some(star_col) => {
                    self.covers.cover_row(row);
                    self.covers.uncover_col(star_col);
                }
                None => return Step::AugmentPath { row, col },
            }
        }
        Step::AdjustMatrix
    }

    /// Step 5.
    fn augment_path(&mut self, row: usize, col: usize) -> Result<Step> {
        let mut path = vec![(row, col)];
        let mut tip_col = col;
        while let Some(star_row) = self.marks.find_star_in_col(tip_col) {
            path.push((star_row, tip_col));
            tip_col = self
                .marks
                .find_prime_in_row(star_row)
                .ok_or(MunkresError::InvariantViolation(
                    "starred zero on augmenting path has no primed zero in its row",
                ))?;
            path.push((star_row, tip_col));
        }
        trace!("munkres: augmenting path {:?}", path);

        for &(r, c) in &path {
            self.marks.toggle_star_prime(r, c);
        }
        self.covers.clear_all();
        self.marks.erase_all_primes();
        self.augmentations += 1;
        Ok(Step::CoverStarredColumns)
    }

    /// Step 6.
    fn adjust_matrix(&mut self) -> Result<Step> {
        let value = self
            .matrix
            .smallest_uncovered(&self.covers)
            .ok_or(MunkresError::InvariantViolation(
                "no uncovered cell left to adjust",
            ))?;
        self.matrix.adjust_by_uncovered_minimum(&self.covers, value);
        self.adjustments += 1;
        Ok(Step::PrimeZeros)
    }

    /// First uncovered zero in row-major order.
    fn find_uncovered_zero(&self) -> Option<(usize, usize)> {
        (0..self.n)
            .filter(|&i| !self.covers.is_row_covered(i))
            .find_map(|i| {
                (0..self.n)
                    .find(|&j| !self.covers.is_col_covered(j) && self.matrix.is_zero(i, j))
                    .map(|j| (i, j))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::marks::Mark;

    fn matrix<T: CostValue>(rows: usize, cols: usize, data: &[T]) -> DMatrix<T> {
        DMatrix::from_row_slice(rows, cols, data)
    }

    #[test]
    fn test_diagonal_is_optimal() {
        let cost = matrix(2, 2, &[1, 2, 2, 1]);
        let result = Munkres::new().compute(&cost).unwrap();
        assert_eq!(result, vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_classic_three_by_three() {
        let cost = matrix(3, 3, &[400, 150, 400, 400, 450, 600, 300, 225, 300]);
        let result = munkres(&cost).unwrap();

        assert_eq!(result.pairs, vec![(0, 1), (1, 0), (2, 2)]);
        assert_eq!(result.cost, 850);
    }

    #[test]
    fn test_wide_matrix_uses_dummy_row() {
        let cost = matrix(3, 4, &[400, 150, 400, 1, 400, 450, 600, 2, 300, 225, 300, 3]);
        let result = munkres(&cost).unwrap();

        assert_eq!(result.pairs, vec![(0, 1), (1, 3), (2, 0)]);
        assert_eq!(result.cost, 452);
        assert_eq!(result.unassigned_columns(), vec![2]);
    }

    #[test]
    fn test_tall_matrix_drops_one_row() {
        let cost = matrix(3, 2, &[1, 2, 3, 4, 5, 6]);
        let result = munkres(&cost).unwrap();

        assert_eq!(result.pairs, vec![(0, 1), (1, 0)]);
        assert_eq!(result.cost, 5);
        assert_eq!(result.unassigned_rows(), vec![2]);
    }

    #[test]
    fn test_single_cell() {
        let cost = matrix(1, 1, &[5]);
        let result = munkres(&cost).unwrap();
        assert_eq!(result.pairs, vec![(0, 0)]);
        assert_eq!(result.cost, 5);
    }

    #[test]
    fn test_float_costs() {
        let cost = matrix(2, 2, &[1.5_f64, 2.5, 0.5, 3.0]);
        let result = munkres(&cost).unwrap();

        assert_eq!(result.pairs, vec![(0, 1), (1, 0)]);
        assert!((result.cost - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_costs() {
        let cost = matrix(2, 2, &[-5_i64, 0, 0, -5]);
        let result = munkres(&cost).unwrap();

        assert_eq!(result.pairs, vec![(0, 0), (1, 1)]);
        assert_eq!(result.cost, -10);
    }

    #[test]
    fn test_empty_matrix_rejected() {
        let cost = DMatrix::<i32>::zeros(0, 3);
        assert_eq!(
            Munkres::new().compute(&cost),
            Err(MunkresError::InvalidDimensions { rows: 0, cols: 3 })
        );
    }

    #[test]
    fn test_caller_matrix_untouched() {
        let cost = matrix(2, 3, &[4, 1, 3, 2, 0, 5]);
        let before = cost.clone();
        Munkres::new().compute(&cost).unwrap();
        assert_eq!(cost, before);
    }

    #[test]
    fn test_pad_value_does_not_change_optimum() {
        let cost = matrix(3, 2, &[1, 2, 3, 4, 5, 6]);
        let solver = Munkres::with_config(MunkresConfig::new(1_000));

        assert_eq!(solver.config().pad_value, 1_000);
        assert_eq!(solver.solve(&cost).unwrap().cost, 5);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let cost = matrix(3, 3, &[0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let solver = Munkres::new();
        let first = solver.compute(&cost).unwrap();

        assert_eq!(first, vec![(0, 0), (1, 1), (2, 2)]);
        for _ in 0..5 {
            assert_eq!(solver.compute(&cost).unwrap(), first);
        }
    }

    #[test]
    fn test_star_zeros_clears_covers() {
        let cost = matrix(2, 2, &[3, 3, 3, 3]);
        let mut state = SolverState::new(&cost, 0);

        assert_eq!(state.run_step(Step::ReduceRows).unwrap(), Step::StarZeros);
        assert_eq!(
            state.run_step(Step::StarZeros).unwrap(),
            Step::CoverStarredColumns
        );
        assert_eq!(state.covers, CoverState::new(2));
        assert_eq!(state.marks.stars().collect::<Vec<_>>(), vec![(0, 0), (1, 1)]);
        assert_eq!(state.run_step(Step::CoverStarredColumns).unwrap(), Step::Done);
    }

    #[test]
    fn test_prime_zeros_finds_path_start() {
        let cost = matrix(2, 2, &[1.5_f64, 2.5, 0.5, 3.0]);
        let mut state = SolverState::new(&cost, 0.0);

        state.run_step(Step::ReduceRows).unwrap();
        state.run_step(Step::StarZeros).unwrap();
        assert_eq!(
            state.run_step(Step::CoverStarredColumns).unwrap(),
            Step::PrimeZeros
        );
        assert_eq!(state.run_step(Step::PrimeZeros).unwrap(), Step::AdjustMatrix);
        assert_eq!(state.run_step(Step::AdjustMatrix).unwrap(), Step::PrimeZeros);

        let next = state.run_step(Step::PrimeZeros).unwrap();
        assert_eq!(next, Step::AugmentPath { row: 1, col: 0 });
        assert!(state.covers.is_row_covered(0));
        assert_eq!(state.marks.get(0, 1), Mark::Prime);

        assert_eq!(state.run_step(next).unwrap(), Step::CoverStarredColumns);
        assert_eq!(state.marks.stars().collect::<Vec<_>>(), vec![(0, 1), (1, 0)]);
        assert_eq!(state.marks.get(0, 0), Mark::None);
        assert_eq!(state.covers, CoverState::new(2));
        assert_eq!(state.augmentations, 1);
        assert_eq!(state.adjustments, 1);
    }

    #[test]
    fn test_adjust_with_everything_covered_is_invariant_violation() {
        let cost = matrix(1, 1, &[2]);
        let mut state = SolverState::new(&cost, 0);
        state.covers.cover_row(0);

        assert!(matches!(
            state.run_step(Step::AdjustMatrix),
            Err(MunkresError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_every_padded_line_starred_at_termination() {
        let wide = matrix(3, 5, &[7, 2, 9, 4, 4, 3, 3, 8, 1, 6, 5, 9, 2, 2, 7]);
        let tall = matrix(5, 2, &[4, 1, 2, 6, 9, 3, 1, 1, 5, 8]);
        let square = matrix(4, 4, &[9, 2, 7, 8, 6, 4, 3, 7, 5, 8, 1, 8, 7, 6, 9, 4]);

        for cost in [wide, tall, square] {
            let mut state = SolverState::new(&cost, 0);
            state.run().unwrap();

            let n = cost.nrows().max(cost.ncols());
            assert_eq!(state.n, n);
            assert_eq!(state.marks.stars().count(), n, "incomplete stars for {}", cost);
            assert!(state.marks.stars_are_independent());
            assert_eq!(state.covers.count_covered_cols(), n);
        }
    }
}
