//! Caller-side inputs for a search: rolled dice, the level prime table, and
//! input validation

mod dice;
mod errors;
mod primes;
mod validation;

pub use dice::{DIE_SIDES, parse_dice, roll_dice};
pub use errors::UtilsError;
pub use primes::{MAX_LEVEL, primes_for_level};
pub use validation::{MAX_PRIMES, validate_dice, validate_primes};

#[cfg(test)]
mod tests;
