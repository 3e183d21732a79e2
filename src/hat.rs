//! Hat construction.
//!
//! A hat is the pool of numbers available to draw from: either
//! `num_groups` copies of a contiguous range, or a literal custom list.
//! The hat is built once per run and never mutated afterwards; the draw
//! logic clones it per trial.

use crate::error::SimError;

/// Parses a custom hat spec: integers separated by commas, with optional
/// whitespace around each token. `"1, 1, 2, 3"` and `"1,1,2,3"` are
/// equivalent.
pub fn parse_custom_hat(spec: &str) -> Result<Vec<i64>, SimError> {
    spec.split(',')
        .map(|token| {
            let trimmed = token.trim();
            trimmed.parse::<i64>().map_err(|_| SimError::ParseHat {
                token: trimmed.to_string(),
            })
        })
        .collect()
}

/// Builds the hat for a run.
///
/// With a custom spec the range parameters are ignored entirely.
/// Otherwise the hat is `num_groups` concatenated copies of
/// `[minimum, minimum + range_size - 1]`, groups first, ascending within
/// each group. An empty hat (zero range, zero groups, empty custom list)
/// is allowed here; drawing from it fails later.
pub fn generate_hat(
    range_size: u32,
    minimum: i64,
    num_groups: u32,
    custom: Option<&str>,
) -> Result<Vec<i64>, SimError> {
    if let Some(spec) = custom {
        return parse_custom_hat(spec);
    }

    let mut choices = Vec::with_capacity(range_size as usize * num_groups as usize);
    for _ in 0..num_groups {
        for offset in 0..range_size {
            choices.push(minimum + offset as i64);
        }
    }

    Ok(choices)
}
