//! Random Cost Matrices
//!
//! Solves a batch of random track-to-detection cost matrices and reports the
//! matching found for each one. Detections are noisy observations of the
//! tracks, so the cheapest matching usually recovers the true pairing.

use munkres::prelude::*;
use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

const NUM_SCENARIOS: usize = 5;
const NUM_TRACKS: usize = 6;
const NOISE_STD: f64 = 1.5;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let noise = Normal::new(0.0, NOISE_STD).unwrap();

    println!("Munkres: Random Track/Detection Matching");
    println!("========================================\n");

    for scenario in 0..NUM_SCENARIOS {
        // Drop a random number of detections to make the problem rectangular
        let num_detections = rng.random_range(NUM_TRACKS - 2..=NUM_TRACKS);

        let tracks: Vec<(f64, f64)> = (0..NUM_TRACKS)
            .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
            .collect();

        let mut order: Vec<usize> = (0..NUM_TRACKS).collect();
        order.shuffle(&mut rng);
        order.truncate(num_detections);

        let detections: Vec<(usize, (f64, f64))> = order
            .iter()
            .map(|&t| {
                let (x, y) = tracks[t];
                (t, (x + noise.sample(&mut rng), y + noise.sample(&mut rng)))
            })
            .collect();

        let cost = DMatrix::from_fn(NUM_TRACKS, num_detections, |i, j| {
            let (tx, ty) = tracks[i];
            let (_, (dx, dy)) = detections[j];
            ((tx - dx).powi(2) + (ty - dy).powi(2)).sqrt()
        });

        let assignment = munkres(&cost).unwrap();
        let correct = assignment
            .pairs
            .iter()
            .filter(|&&(track, det)| detections[det].0 == track)
            .count();

        println!(
            "Scenario {}: {} tracks, {} detections, cost {:.2}, {}/{} correct",
            scenario,
            NUM_TRACKS,
            num_detections,
            assignment.cost,
            correct,
            assignment.num_assigned()
        );
        println!("  missed tracks: {:?}", assignment.unassigned_rows());
    }
}
