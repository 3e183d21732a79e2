//! Drawing from the hat: the random trial and the exact extremes.
//!
//! Both functions work on a private copy of the hat, so the caller's hat
//! survives any number of trials. Depleting (non-independent) draws remove
//! the drawn slot before the next draw; independent draws put it straight
//! back.

use crate::error::SimError;
use rand::Rng;

fn check_supply(hat: &[i64], num_draws: usize, independent: bool) -> Result<(), SimError> {
    let enough = if independent {
        // With replacement the hat never shrinks; it only has to be non-empty.
        !hat.is_empty() || num_draws == 0
    } else {
        num_draws <= hat.len()
    };

    if enough {
        Ok(())
    } else {
        Err(SimError::InsufficientHat {
            available: hat.len(),
            requested: num_draws,
        })
    }
}

/// Runs one trial: `num_draws` uniform draws from the hat, summed.
///
/// Each remaining slot is equally likely, so duplicate values weigh in
/// proportion to how many copies remain.
pub fn draw_sum(
    hat: &[i64],
    num_draws: usize,
    independent: bool,
    rng: &mut impl Rng,
) -> Result<i64, SimError> {
    check_supply(hat, num_draws, independent)?;

    let mut choices = hat.to_vec();
    let mut total = 0i64;

    for _ in 0..num_draws {
        let index = rng.gen_range(0..choices.len());
        if independent {
            total += choices[index];
        } else {
            total += choices.swap_remove(index);
        }
    }

    Ok(total)
}

/// Computes the exact best- or worst-case sum for `num_draws` draws.
///
/// Greedy per round: take the current maximum (or minimum) of the working
/// copy. In depleting mode one occurrence of that value is removed, which
/// is exact because removing any value never exposes a better extreme than
/// the one just taken. No randomness involved.
pub fn extreme_sum(
    hat: &[i64],
    num_draws: usize,
    use_max: bool,
    independent: bool,
) -> Result<i64, SimError> {
    check_supply(hat, num_draws, independent)?;

    let mut choices = hat.to_vec();
    let mut total = 0i64;

    for _ in 0..num_draws {
        let index = extreme_index(&choices, use_max);
        if independent {
            total += choices[index];
        } else {
            total += choices.swap_remove(index);
        }
    }

    Ok(total)
}

fn extreme_index(choices: &[i64], use_max: bool) -> usize {
    let mut best = 0;
    for (i, &value) in choices.iter().enumerate() {
        if (use_max && value > choices[best]) || (!use_max && value < choices[best]) {
            best = i;
        }
    }
    best
}
