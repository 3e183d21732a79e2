//! hatsim - Hat-Draw Distribution Simulator Library
//!
//! This module exposes the simulation logic for testing and external use.

pub mod constants;
pub mod draw_logic;
pub mod error;
pub mod hat;
pub mod simulator;

pub use error::SimError;
