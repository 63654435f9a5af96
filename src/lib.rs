//! # Semicircle — Monte Carlo semicircle-coverage estimator
//!
//! Estimates the probability that N points placed uniformly at random on a
//! circle all lie within some common semicircle, and compares the empirical
//! rate against the closed form `n / 2^(n-1)`.
//!
//! ## Algorithm overview
//!
//! The 2-D circular question reduces to a 1-D interval question:
//!
//! | Step | Function | Description |
//! |------|----------|-------------|
//! | 1 | [`sample::generate_sample`] | Draw n uniforms in [0,1), rotate so the first draw lands at 0.5, wrap into [0,1), sort |
//! | 2 | [`sample::span`] | Angular spread: max minus min of the sorted sample |
//! | 3 | [`sample::is_hit`] | All points share a semicircle iff span ≤ 0.5 (inclusive) |
//! | 4 | [`simulation::engine::simulate_batch`] | Repeat over many trials, count hits, report the empirical rate |
//!
//! Rotation is measure-preserving on the circle, and cutting the circle
//! opposite the anchored point removes wraparound ambiguity from the span,
//! so step 3 is exact rather than approximate.
//!
//! ## Reproducibility
//!
//! Every trial gets its own `SmallRng` seeded from `base_seed + trial_index`,
//! so a batch produces the same hit count whether it runs serially or on the
//! rayon pool, and two runs with the same `(n, iterations, seed)` agree bit
//! for bit.

pub mod env_config;
pub mod sample;
pub mod simulation;
