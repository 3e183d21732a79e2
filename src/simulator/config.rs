//! Simulation configuration.

use crate::constants::*;

/// Configuration for a simulation run.
///
/// Fully resolved by the CLI (or a test) before the run starts; the core
/// never mutates it.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of trials to run
    pub iterations: u32,

    /// Size of the generated range of numbers
    pub range_size: u32,

    /// Smallest value in the generated range
    pub minimum: i64,

    /// How many copies of the range go into the hat
    pub num_groups: u32,

    /// Literal hat contents, e.g. "1,1,2,3,7,8" (overrides the range fields)
    pub custom: Option<String>,

    /// Draws per trial
    pub num_draws: usize,

    /// Draw with replacement (the hat never depletes within a trial)
    pub independent: bool,

    /// Random seed for reproducibility (None = entropy)
    pub seed: Option<u64>,

    /// Skip the summary header above the chart
    pub no_headers: bool,

    /// Chart rendering options
    pub chart: ChartOptions,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_NUM_ITERATIONS,
            range_size: DEFAULT_RANGE,
            minimum: DEFAULT_MINIMUM,
            num_groups: DEFAULT_NUM_GROUPS,
            custom: None,
            num_draws: DEFAULT_NUM_DRAWS,
            independent: false,
            seed: None,
            no_headers: false,
            chart: ChartOptions::default(),
        }
    }
}

/// How the frequency chart is drawn.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    /// Display length of the bar for the most frequent result
    pub size: u32,

    /// String repeated to form each bar (may be more than one character)
    pub fill: String,

    /// Drop rows whose result never occurred
    pub omit_zero_occurrences: bool,

    /// Append the raw occurrence count to each row
    pub show_exact_occurrences: bool,

    /// Hide the per-row percentage of total iterations
    pub no_percentages: bool,

    /// Put the result label after the bar instead of before it
    pub label_right: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_CHART_SIZE,
            fill: DEFAULT_CHART_CHARACTER.to_string(),
            omit_zero_occurrences: false,
            show_exact_occurrences: false,
            no_percentages: false,
            label_right: false,
        }
    }
}
