//! Star and prime marks over the working matrix

use alloc::{vec, vec::Vec};

/// Mark carried by a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mark {
    /// Unmarked cell
    #[default]
    None,
    /// Zero accepted into the current candidate matching
    Star,
    /// Zero found while searching for an augmenting path
    Prime,
}

/// n×n grid of marks, stored row-major.
///
/// At most one star exists in any row and in any column. Every lookup scans
/// in increasing index order and returns the first hit, which fixes the
/// tie-break between equal-cost solutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkGrid {
    marks: Vec<Mark>,
    n: usize,
}

impl MarkGrid {
    /// Creates an unmarked n×n grid.
    pub fn new(n: usize) -> Self {
        Self {
            marks: vec![Mark::None; n * n],
            n,
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Mark at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Mark {
        self.marks[row * self.n + col]
    }

    fn set(&mut self, row: usize, col: usize, mark: Mark) {
        self.marks[row * self.n + col] = mark;
    }

    /// Stars (row, col).
    pub fn set_star(&mut self, row: usize, col: usize) {
        self.set(row, col, Mark::Star);
    }

    /// Primes (row, col).
    pub fn set_prime(&mut self, row: usize, col: usize) {
        self.set(row, col, Mark::Prime);
    }

    /// Removes any mark from (row, col).
    pub fn clear(&mut self, row: usize, col: usize) {
        self.set(row, col, Mark::None);
    }

    /// Unstars a starred cell; stars any other cell.
    pub fn toggle_star_prime(&mut self, row: usize, col: usize) {
        match self.get(row, col) {
            Mark::Star => self.clear(row, col),
            _ => self.set_star(row, col),
        }
    }

    /// Column of the first star in `row`.
    pub fn find_star_in_row(&self, row: usize) -> Option<usize> {
        (0..self.n).find(|&col| self.get(row, col) == Mark::Star)
    }

    /// Row of the first star in `col`.
    pub fn find_star_in_col(&self, col: usize) -> Option<usize> {
        (0..self.n).find(|&row| self.get(row, col) == Mark::Star)
    }

    /// Column of the first prime in `row`.
    pub fn find_prime_in_row(&self, row: usize) -> Option<usize> {
        (0..self.n).find(|&col| self.get(row, col) == Mark::Prime)
    }

    /// Resets every prime to unmarked.
    pub fn erase_all_primes(&mut self) {
        for mark in self.marks.iter_mut().filter(|m| **m == Mark::Prime) {
            *mark = Mark::None;
        }
    }

    /// Starred cells in row-major order.
    pub fn stars(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.marks
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m == Mark::Star)
            .map(move |(idx, _)| (idx / self.n, idx % self.n))
    }

    /// Whether no two stars share a row or a column.
    pub fn stars_are_independent(&self) -> bool {
        let mut row_used = vec![false; self.n];
        let mut col_used = vec![false; self.n];
        for (row, col) in self.stars() {
            if row_used[row] || col_used[col] {
                return false;
            }
            row_used[row] = true;
            col_used[col] = true;
        }
        true
    }
}
