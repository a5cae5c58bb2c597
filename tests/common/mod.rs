//! Common test helpers for assignment integration tests

#![cfg(feature = "alloc")]
#![allow(dead_code)]

use munkres::assignment::CostValue;
use nalgebra::DMatrix;

/// Creates a cost matrix from row-major data
pub fn make_matrix<T: CostValue>(rows: usize, cols: usize, data: &[T]) -> DMatrix<T> {
    DMatrix::from_row_slice(rows, cols, data)
}

/// Minimum cost over every maximal matching of `cost`, by exhaustive search.
///
/// Each of the min(rows, cols) slots on the smaller side is matched to a
/// distinct index on the larger side.
pub fn brute_force_min_cost(cost: &DMatrix<i64>) -> i64 {
    let (rows, cols) = cost.shape();
    let transpose = rows > cols;
    let (small, large) = if transpose { (cols, rows) } else { (rows, cols) };
    let at = |s: usize, l: usize| {
        if transpose {
            cost[(l, s)]
        } else {
            cost[(s, l)]
        }
    };

    fn search(
        slot: usize,
        small: usize,
        large: usize,
        used: &mut Vec<bool>,
        running: i64,
        best: &mut i64,
        at: &dyn Fn(usize, usize) -> i64,
    ) {
        if slot == small {
            *best = (*best).min(running);
            return;
        }
        for l in 0..large {
            if !used[l] {
                used[l] = true;
                search(slot + 1, small, large, used, running + at(slot, l), best, at);
                used[l] = false;
            }
        }
    }

    let mut best = i64::MAX;
    let mut used = vec![false; large];
    search(0, small, large, &mut used, 0, &mut best, &at);
    best
}

/// Sums the original costs of `pairs`
pub fn pairs_cost(cost: &DMatrix<i64>, pairs: &[(usize, usize)]) -> i64 {
    pairs.iter().map(|&(r, c)| cost[(r, c)]).sum()
}

/// Checks that `pairs` is an in-bounds one-to-one matching of full size
pub fn assert_valid_matching(rows: usize, cols: usize, pairs: &[(usize, usize)]) {
    assert_eq!(
        pairs.len(),
        rows.min(cols),
        "expected one pair per slot on the smaller side, got {:?}",
        pairs
    );

    let mut row_used = vec![false; rows];
    let mut col_used = vec![false; cols];
    for &(r, c) in pairs {
        assert!(r < rows && c < cols, "pair ({}, {}) out of bounds", r, c);
        assert!(!row_used[r], "row {} matched twice in {:?}", r, pairs);
        assert!(!col_used[c], "column {} matched twice in {:?}", c, pairs);
        row_used[r] = true;
        col_used[c] = true;
    }

    assert!(
        pairs.windows(2).all(|w| w[0] < w[1]),
        "pairs not in row-major order: {:?}",
        pairs
    );
}
