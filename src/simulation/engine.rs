//! Trial runner — executes batches of independent semicircle trials.
//!
//! Each trial draws a fresh sample, aligns it, and tests the span. Trials
//! share nothing but the base seed: trial i seeds its own `SmallRng` with
//! `seed.wrapping_add(i)`, so hit counts are identical between the serial
//! and rayon paths and across runs with the same `(n, iterations, seed)`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::Instant;

use crate::sample::{generate_sample, is_hit, span};

/// Results of a batch of trials.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Points per trial.
    pub points: usize,
    /// Trials executed.
    pub iterations: usize,
    /// Trials where all points shared a semicircle.
    pub hits: u64,
    /// Base seed the per-trial RNGs were derived from.
    pub seed: u64,
    pub elapsed: std::time::Duration,
}

impl SimulationResult {
    /// Empirical hit probability: hits / iterations.
    pub fn observed(&self) -> f64 {
        self.hits as f64 / self.iterations as f64
    }
}

/// Run one trial: sample n points, align, test the span.
pub fn simulate_trial<R: Rng + ?Sized>(rng: &mut R, points: usize) -> bool {
    let sample = generate_sample(rng, points);
    is_hit(span(&sample))
}

/// Run `iterations` trials on the rayon pool, one derived RNG per trial.
pub fn simulate_batch(points: usize, iterations: usize, seed: u64) -> SimulationResult {
    debug_assert!(points >= 1 && iterations >= 1);
    let start = Instant::now();

    let hits: u64 = (0..iterations)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            simulate_trial(&mut rng, points) as u64
        })
        .sum();

    SimulationResult {
        points,
        iterations,
        hits,
        seed,
        elapsed: start.elapsed(),
    }
}

/// Single-threaded batch. Same per-trial seed derivation as
/// [`simulate_batch`], so the hit count matches the parallel path exactly.
pub fn simulate_batch_serial(points: usize, iterations: usize, seed: u64) -> SimulationResult {
    debug_assert!(points >= 1 && iterations >= 1);
    let start = Instant::now();

    let mut hits = 0u64;
    for i in 0..iterations {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
        if simulate_trial(&mut rng, points) {
            hits += 1;
        }
    }

    SimulationResult {
        points,
        iterations,
        hits,
        seed,
        elapsed: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_point_always_hits() {
        let result = simulate_batch_serial(1, 1000, 7);
        assert_eq!(result.hits, 1000);
        assert_eq!(result.observed(), 1.0);
    }

    #[test]
    fn test_two_points_always_hit() {
        // Two points always share a semicircle (span through the anchor
        // at 0.5 cannot exceed 0.5).
        let result = simulate_batch_serial(2, 10_000, 11);
        assert_eq!(result.observed(), 1.0);
    }

    #[test]
    fn test_serial_parallel_agree() {
        let serial = simulate_batch_serial(5, 20_000, 42);
        let parallel = simulate_batch(5, 20_000, 42);
        assert_eq!(serial.hits, parallel.hits);
    }

    #[test]
    fn test_deterministic_given_seed() {
        let a = simulate_batch(6, 10_000, 1234);
        let b = simulate_batch(6, 10_000, 1234);
        assert_eq!(a.hits, b.hits);
    }

    #[test]
    fn test_different_seeds_draw_different_samples() {
        use crate::sample::generate_sample;
        let a = generate_sample(&mut SmallRng::seed_from_u64(1), 8);
        let b = generate_sample(&mut SmallRng::seed_from_u64(2), 8);
        assert_ne!(a, b);
    }
}
