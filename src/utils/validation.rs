use log::{debug, warn};

use crate::iterator::constants::MAX_DICE;
use crate::utils::errors::UtilsError;

pub const MAX_PRIMES: usize = 3;

/// # Errors
///
/// Returns an error if the pool is empty, holds more than [`MAX_DICE`] dice,
/// or contains a value below 1.
pub fn validate_dice(dice: &[i64]) -> Result<(), UtilsError> {
    debug!("Validating dice: {:?}", dice);

    if dice.is_empty() {
        warn!("Dice pool is empty");
        return Err(UtilsError::EmptyDice);
    }

    if dice.len() > MAX_DICE {
        warn!("Dice pool has {} dice", dice.len());
        return Err(UtilsError::TooManyDice {
            count: dice.len(),
            max: MAX_DICE,
        });
    }

    if let Some((index, &value)) = dice.iter().enumerate().find(|(_, value)| **value < 1) {
        warn!("Die {} is not positive: {}", index, value);
        return Err(UtilsError::NonPositiveDie { index, value });
    }

    Ok(())
}

/// # Errors
///
/// Returns an error if there are no targets, more than [`MAX_PRIMES`], or a
/// target below 1.
pub fn validate_primes(primes: &[i64]) -> Result<(), UtilsError> {
    debug!("Validating target primes: {:?}", primes);

    if primes.is_empty() {
        warn!("No target primes given");
        return Err(UtilsError::EmptyPrimes);
    }

    if primes.len() > MAX_PRIMES {
        warn!("{} target primes given", primes.len());
        return Err(UtilsError::TooManyPrimes {
            count: primes.len(),
            max: MAX_PRIMES,
        });
    }

    if let Some(&prime) = primes.iter().find(|prime| **prime < 1) {
        warn!("Target is not positive: {}", prime);
        return Err(UtilsError::NonPositivePrime(prime));
    }

    Ok(())
}
