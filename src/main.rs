//! Example usage of the Munkres library
//!
//! Solves a small rectangular assignment problem and prints the chosen pairs.

use munkres::prelude::*;

fn main() {
    println!("Munkres: Optimal Linear Assignment");
    println!("==================================\n");

    // Three workers, four jobs. The fourth job is cheap for everyone.
    let cost = match cost_matrix_from_rows(
        3,
        4,
        &[
            400, 150, 400, 1, //
            400, 450, 600, 2, //
            300, 225, 300, 3,
        ],
    ) {
        Ok(cost) => cost,
        Err(err) => {
            eprintln!("invalid cost matrix: {err}");
            std::process::exit(1);
        }
    };

    println!("Cost matrix:");
    for row in cost.row_iter() {
        let cells: Vec<String> = row.iter().map(|c| format!("{c:>5}")).collect();
        println!("  [{}]", cells.join(""));
    }
    println!();

    let assignment = match munkres(&cost) {
        Ok(assignment) => assignment,
        Err(err) => {
            eprintln!("assignment failed: {err}");
            std::process::exit(1);
        }
    };

    for &(row, col) in &assignment.pairs {
        println!("({row}, {col}) -> {}", cost[(row, col)]);
    }
    println!("lowest cost = {}", assignment.cost);

    let idle = assignment.unassigned_columns();
    if !idle.is_empty() {
        println!("unassigned columns: {idle:?}");
    }
}
