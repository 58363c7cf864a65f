use thiserror::Error;

/// Errors raised while preparing dice and target primes for a search
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Dice pool cannot be empty")]
    EmptyDice,
    #[error("Die {index} must be positive, got {value}")]
    NonPositiveDie { index: usize, value: i64 },
    #[error("Too many dice: {count} (at most {max})")]
    TooManyDice { count: usize, max: usize },
    #[error("Dice list must be comma separated integers: {0}")]
    InvalidDiceList(String),
    #[error("At least one target prime is required")]
    EmptyPrimes,
    #[error("Too many target primes: {count} (at most {max})")]
    TooManyPrimes { count: usize, max: usize },
    #[error("Target must be positive, got {0}")]
    NonPositivePrime(i64),
    #[error("Difficulty level must be between 1 and {max}, got {level}")]
    InvalidLevel { level: usize, max: usize },
}
