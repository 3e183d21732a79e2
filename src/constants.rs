// Simulation defaults (shared by SimConfig::default and the CLI help text)
pub const DEFAULT_NUM_ITERATIONS: u32 = 10_000;
pub const DEFAULT_RANGE: u32 = 6;
pub const DEFAULT_MINIMUM: i64 = 1;
pub const DEFAULT_NUM_DRAWS: usize = 1;
pub const DEFAULT_NUM_GROUPS: u32 = 1;

// Chart defaults
pub const DEFAULT_CHART_SIZE: u32 = 100;
pub const DEFAULT_CHART_CHARACTER: &str = "]";
