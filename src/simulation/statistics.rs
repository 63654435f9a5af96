//! Statistics aggregation and JSON output.
//!
//! Wraps a [`SimulationResult`] with the closed-form reference value and the
//! binomial uncertainty of the empirical rate, and writes the whole record
//! as pretty-printed JSON for offline analysis.

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::sample::expected_probability;

use super::engine::SimulationResult;

/// Full record of one experiment: observed rate, reference value, and
/// binomial error bounds.
#[derive(Serialize, Debug, Clone)]
pub struct ExperimentStatistics {
    pub points: usize,
    pub iterations: usize,
    pub seed: u64,
    pub hits: u64,
    /// Empirical hit probability.
    pub observed: f64,
    /// Closed-form reference: n / 2^(n-1).
    pub expected: f64,
    /// |observed - expected|.
    pub abs_error: f64,
    /// Binomial standard error sqrt(p(1-p)/k), evaluated at the expected
    /// rate so the z-score measures deviation under the null hypothesis.
    pub std_error: f64,
    /// Deviation from expected in standard errors (0 when std_error is 0,
    /// i.e. n ≤ 2 where the expected rate is exactly 1).
    pub z: f64,
    /// 95% confidence interval around the observed rate, clamped to [0,1].
    pub ci95_lower: f64,
    pub ci95_upper: f64,
    pub elapsed_secs: f64,
}

/// Build experiment statistics from a batch result.
pub fn aggregate_statistics(result: &SimulationResult) -> ExperimentStatistics {
    let observed = result.observed();
    let expected = expected_probability(result.points);
    let std_error = (expected * (1.0 - expected) / result.iterations as f64).sqrt();
    let z = if std_error > 0.0 {
        (observed - expected) / std_error
    } else {
        0.0
    };
    let half_width = 1.96 * std_error;

    ExperimentStatistics {
        points: result.points,
        iterations: result.iterations,
        seed: result.seed,
        hits: result.hits,
        observed,
        expected,
        abs_error: (observed - expected).abs(),
        std_error,
        z,
        ci95_lower: (observed - half_width).max(0.0),
        ci95_upper: (observed + half_width).min(1.0),
        elapsed_secs: result.elapsed.as_secs_f64(),
    }
}

/// Write statistics to `<dir>/statistics.json`, creating the directory if
/// needed. Returns the path written.
pub fn save_statistics(
    stats: &ExperimentStatistics,
    output_dir: &str,
) -> std::io::Result<String> {
    fs::create_dir_all(output_dir)?;
    let path = Path::new(output_dir).join("statistics.json");
    let json = serde_json::to_string_pretty(stats)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    fs::write(&path, json)?;
    Ok(path.to_string_lossy().to_string())
}
