//! Error taxonomy for simulation runs.
//!
//! All of these are fatal to a run: the CLI prints the message to stderr
//! and exits without emitting any chart output.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// A token in the custom hat spec did not parse as an integer.
    ParseHat { token: String },
    /// The hat cannot supply the requested number of draws.
    InsufficientHat { available: usize, requested: usize },
    /// Zero iterations requested; the mean would divide by zero.
    ZeroIterations,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::ParseHat { token } => {
                write!(f, "invalid number in custom hat: {:?}", token)
            }
            SimError::InsufficientHat {
                available,
                requested,
            } => {
                write!(
                    f,
                    "cannot draw {} time(s) from a hat of {} number(s)",
                    requested, available
                )
            }
            SimError::ZeroIterations => {
                write!(f, "iteration count must be at least 1")
            }
        }
    }
}

impl Error for SimError {}
