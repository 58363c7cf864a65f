use log::debug;

use crate::utils::errors::UtilsError;

pub const MAX_LEVEL: usize = 9;

const LEVEL_PRIMES: [[i64; 3]; MAX_LEVEL] = [
    [3, 5, 7],
    [11, 13, 17],
    [19, 23, 29],
    [31, 37, 41],
    [43, 47, 53],
    [59, 61, 67],
    [71, 73, 79],
    [83, 89, 97],
    [101, 103, 107],
];

/// # Errors
///
/// Returns an error when `level` is outside `1..=MAX_LEVEL`.
pub fn primes_for_level(level: usize) -> Result<&'static [i64], UtilsError> {
    let primes = level
        .checked_sub(1)
        .and_then(|index| LEVEL_PRIMES.get(index))
        .ok_or(UtilsError::InvalidLevel {
            level,
            max: MAX_LEVEL,
        })?;
    debug!("Level {} targets {:?}", level, primes);
    Ok(primes)
}
