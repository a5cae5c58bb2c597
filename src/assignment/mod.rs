//! Assignment problem solvers
//!
//! The Munkres algorithm and the working state it operates on.

pub mod cover;
pub mod marks;
pub mod matrix;
pub mod munkres;
pub mod traits;

pub use munkres::*;
pub use traits::*;
