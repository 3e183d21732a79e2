//! Hat-draw simulator: Monte Carlo estimation of sum distributions.
//!
//! Runs many independent trials of "draw N numbers from the hat and sum
//! them", tallies the outcomes into a dense frequency table spanning the
//! exact attainable range, and renders the result as a text bar chart.
//!
//! The bounds of the table come from draw_logic::extreme_sum and are
//! exact; everything between them is estimated by sampling.

mod config;
mod report;
mod runner;
mod table;

pub use config::{ChartOptions, SimConfig};
pub use report::SimReport;
pub use runner::run_simulation;
pub use table::FrequencyTable;
