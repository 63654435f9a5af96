//! Point-count sweep: named grids, range resolution, and the sweep driver.
//!
//! A sweep runs one batch per point count and collects observed-vs-expected
//! statistics, making the 1/2^(n-1) falloff visible in a single table.

use super::engine::simulate_batch;
use super::statistics::{aggregate_statistics, ExperimentStatistics};

/// One row of a sweep: the statistics for a single point count.
pub type SweepEntry = ExperimentStatistics;

/// Parse a named grid of point counts. Returns None if the name is unknown.
pub fn resolve_grid(grid_name: &str) -> Option<Vec<usize>> {
    match grid_name {
        "default" => Some((1..=12).collect()),
        "small" => Some((2..=6).collect()),
        "wide" => {
            let mut v: Vec<usize> = (1..=20).collect();
            v.extend_from_slice(&[25, 30, 40, 50]);
            Some(v)
        }
        _ => None,
    }
}

/// Inclusive arithmetic range of point counts.
pub fn range_grid(lo: usize, hi: usize) -> Vec<usize> {
    (lo..=hi).collect()
}

/// Run one batch per point count. Each n gets a seed offset far enough from
/// the others that per-trial streams never overlap between rows.
pub fn run_sweep(grid: &[usize], iterations: usize, seed: u64) -> Vec<SweepEntry> {
    grid.iter()
        .enumerate()
        .map(|(row, &n)| {
            let row_seed = seed.wrapping_add((row as u64) << 32);
            let result = simulate_batch(n, iterations, row_seed);
            aggregate_statistics(&result)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_grids() {
        assert_eq!(resolve_grid("default").unwrap(), (1..=12).collect::<Vec<_>>());
        assert_eq!(resolve_grid("small").unwrap(), vec![2, 3, 4, 5, 6]);
        let wide = resolve_grid("wide").unwrap();
        assert_eq!(wide.len(), 24);
        assert_eq!(*wide.last().unwrap(), 50);
        assert!(resolve_grid("bogus").is_none());
    }

    #[test]
    fn test_range_grid_inclusive() {
        assert_eq!(range_grid(3, 6), vec![3, 4, 5, 6]);
        assert_eq!(range_grid(5, 5), vec![5]);
    }

    #[test]
    fn test_sweep_rows_match_grid() {
        let entries = run_sweep(&[1, 2, 4], 2000, 42);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].points, 1);
        assert_eq!(entries[0].observed, 1.0);
        assert_eq!(entries[1].observed, 1.0);
        assert_eq!(entries[2].expected, 0.5);
        assert_eq!(entries[2].iterations, 2000);
    }
}
