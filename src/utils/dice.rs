use fastrand::Rng;
use log::debug;

use crate::utils::errors::UtilsError;

pub const DIE_SIDES: i64 = 6;

/// Rolls `count` six-sided dice
pub fn roll_dice(count: usize, rng: &mut Rng) -> Vec<i64> {
    let dice: Vec<i64> = (0..count).map(|_| rng.i64(1..=DIE_SIDES)).collect();
    debug!("Rolled {}d{}: {:?}", count, DIE_SIDES, dice);
    dice
}

/// Parses a comma separated list such as `1, 4,6`.
///
/// # Errors
///
/// Returns an error when any entry is not an integer. Range checks are left
/// to [`crate::utils::validate_dice`].
pub fn parse_dice(list: &str) -> Result<Vec<i64>, UtilsError> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<i64>()
                .map_err(|_| UtilsError::InvalidDiceList(list.to_string()))
        })
        .collect()
}
