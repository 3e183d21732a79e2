//! Simulation runner: builds the hat, computes the exact bounds, then
//! tallies the configured number of random trials.
//!
//! The up-front extreme_sum calls double as the feasibility check: an
//! overdrawn depleting hat fails here, before any trial runs. One RNG is
//! created per run and shared by every trial so that seeded runs replay
//! exactly.

use super::config::SimConfig;
use super::report::SimReport;
use super::table::FrequencyTable;
use crate::draw_logic::{draw_sum, extreme_sum};
use crate::error::SimError;
use crate::hat::generate_hat;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Runs the full simulation and returns the report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, SimError> {
    if config.iterations == 0 {
        return Err(SimError::ZeroIterations);
    }

    let hat = generate_hat(
        config.range_size,
        config.minimum,
        config.num_groups,
        config.custom.as_deref(),
    )?;

    let min_possible = extreme_sum(&hat, config.num_draws, false, config.independent)?;
    let max_possible = extreme_sum(&hat, config.num_draws, true, config.independent)?;

    let mut table = FrequencyTable::new(min_possible, max_possible);

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    for _ in 0..config.iterations {
        let sum = draw_sum(&hat, config.num_draws, config.independent, &mut rng)?;
        table.record(sum);
    }

    let mode = table.mode();
    let mean = table.mean();

    Ok(SimReport {
        hat_desc: describe_hat(config, &hat),
        iterations: config.iterations,
        num_draws: config.num_draws,
        mode,
        mean,
        table,
        no_headers: config.no_headers,
        chart: config.chart.clone(),
    })
}

/// Human-readable hat summary for the report header.
fn describe_hat(config: &SimConfig, hat: &[i64]) -> String {
    if config.custom.is_some() {
        format!("{:?}", hat)
    } else {
        format!(
            "{} groups of {}-{}",
            config.num_groups,
            config.minimum,
            config.minimum + config.range_size as i64 - 1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sum_to_iterations() {
        let config = SimConfig {
            iterations: 500,
            seed: Some(42),
            ..Default::default()
        };

        let report = run_simulation(&config).unwrap();
        assert_eq!(report.table.total(), 500);
    }

    #[test]
    fn test_default_d6_bounds() {
        let config = SimConfig {
            iterations: 100,
            seed: Some(42),
            ..Default::default()
        };

        let report = run_simulation(&config).unwrap();
        assert_eq!(report.table.min_sum(), 1);
        assert_eq!(report.table.max_sum(), 6);
    }

    #[test]
    fn test_two_groups_two_draws_bounds() {
        let config = SimConfig {
            iterations: 200,
            range_size: 3,
            num_groups: 2,
            num_draws: 2,
            seed: Some(7),
            ..Default::default()
        };

        let report = run_simulation(&config).unwrap();
        assert_eq!(report.table.min_sum(), 2);
        assert_eq!(report.table.max_sum(), 6);
        assert_eq!(report.hat_desc, "2 groups of 1-3");
    }

    #[test]
    fn test_custom_independent_bounds() {
        let config = SimConfig {
            iterations: 200,
            custom: Some("1,1,2,3,7,8".to_string()),
            num_draws: 3,
            independent: true,
            seed: Some(7),
            ..Default::default()
        };

        let report = run_simulation(&config).unwrap();
        assert_eq!(report.table.min_sum(), 3);
        assert_eq!(report.table.max_sum(), 24);
        assert_eq!(report.hat_desc, "[1, 1, 2, 3, 7, 8]");
    }

    #[test]
    fn test_zero_iterations_fails_before_anything_else() {
        let config = SimConfig {
            iterations: 0,
            // Even a broken custom spec is never looked at
            custom: Some("not numbers".to_string()),
            ..Default::default()
        };

        assert_eq!(run_simulation(&config).unwrap_err(), SimError::ZeroIterations);
    }

    #[test]
    fn test_overdraw_detected_before_trials() {
        let config = SimConfig {
            iterations: 100,
            range_size: 3,
            num_draws: 4,
            seed: Some(1),
            ..Default::default()
        };

        assert_eq!(
            run_simulation(&config).unwrap_err(),
            SimError::InsufficientHat {
                available: 3,
                requested: 4
            }
        );
    }

    #[test]
    fn test_bad_custom_spec_fails() {
        let config = SimConfig {
            iterations: 100,
            custom: Some("1,2,x".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            run_simulation(&config).unwrap_err(),
            SimError::ParseHat { .. }
        ));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = SimConfig {
            iterations: 1_000,
            num_draws: 2,
            range_size: 6,
            num_groups: 2,
            seed: Some(99),
            ..Default::default()
        };

        let a = run_simulation(&config).unwrap();
        let b = run_simulation(&config).unwrap();
        assert_eq!(a.to_text(), b.to_text());
    }

    #[test]
    fn test_mean_matches_independent_recount() {
        let config = SimConfig {
            iterations: 2_000,
            num_draws: 2,
            range_size: 6,
            seed: Some(4242),
            ..Default::default()
        };

        let report = run_simulation(&config).unwrap();

        // Replay the same seed through the draw engine directly.
        let hat = generate_hat(6, 1, 1, None).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(4242);
        let mut total = 0i64;
        for _ in 0..config.iterations {
            total += draw_sum(&hat, 2, false, &mut rng).unwrap();
        }
        let expected = total as f64 / config.iterations as f64;

        assert!((report.mean - expected).abs() < 1e-9);
    }

    #[test]
    fn test_mode_lies_within_bounds() {
        let config = SimConfig {
            iterations: 1_000,
            num_draws: 3,
            range_size: 6,
            num_groups: 2,
            seed: Some(5),
            ..Default::default()
        };

        let report = run_simulation(&config).unwrap();
        assert!(report.mode >= report.table.min_sum());
        assert!(report.mode <= report.table.max_sum());
    }
}
