//! Munkres: optimal linear assignment for Rust
//!
//! An implementation of the Munkres (Hungarian) algorithm for the rectangular
//! linear assignment problem: given an m×n cost matrix, find the one-to-one
//! matching between rows and columns with minimum total cost.
//!
//! # Features
//!
//! - **Rectangular Inputs**: Non-square matrices are padded into a square working matrix
//! - **Generic Costs**: Works with integer and floating point cells
//! - **Deterministic**: Row-major tie-breaking gives reproducible output
//! - **no_std Support**: Works in embedded environments with `alloc`
//!
//! # Example
//!
//! ```
//! use munkres::prelude::*;
//!
//! let cost = cost_matrix_from_rows(2, 2, &[1, 2, 2, 1]).unwrap();
//! let assignment = munkres(&cost).unwrap();
//!
//! assert_eq!(assignment.pairs, vec![(0, 0), (1, 1)]);
//! assert_eq!(assignment.cost, 2);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod assignment;

#[cfg(feature = "alloc")]
pub mod prelude {
    pub use crate::assignment::munkres::*;
    pub use crate::assignment::traits::*;
    pub use crate::assignment::matrix::{cost_matrix_from_rows, pad_matrix};
    pub use crate::{MunkresError, Result};
}

/// Error types for the library
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MunkresError {
    /// The cost matrix has no rows or no columns
    #[error("invalid input dimensions: {rows}x{cols}")]
    InvalidDimensions {
        /// Number of rows supplied
        rows: usize,
        /// Number of columns supplied
        cols: usize,
    },
    /// Row-major cost data does not fill the requested shape
    #[error("cost data has {actual} cells, expected {expected}")]
    LengthMismatch {
        /// Cells required by the requested shape
        expected: usize,
        /// Cells actually supplied
        actual: usize,
    },
    /// An internal invariant of the state machine was broken
    #[error("assignment invariant violated: {0}")]
    InvariantViolation(&'static str),
}

pub type Result<T> = ::core::result::Result<T, MunkresError>;
