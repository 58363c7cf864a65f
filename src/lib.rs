//! Primecaster - find arithmetic combinations of rolled dice that reach target primes
//!
//! Given a pool of dice and a set of target primes, this library searches
//! every subset of the dice, every ordering of each subset, and every choice
//! of `+ - * /` between them. Expressions are evaluated strictly left to right
//! with truncating division, and the first combination that lands on a prime
//! is reported along with a rendering that reads the same under conventional
//! precedence.

pub mod expression;
pub mod iterator;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Evaluation, ExpressionError, Operator, evaluate, evaluate_infix};
pub use solver::{BatchOutcome, PrimeSolver, SearchBudget, SearchResult, SolverConfig, SolverError};
pub use utils::{UtilsError, primes_for_level, roll_dice, validate_dice, validate_primes};

/// Find a combination of `dice` that evaluates to `prime`
///
/// This is a convenience function that validates the input and runs a
/// default, unlimited solver.
///
/// # Errors
///
/// This function will return an error if:
/// * The dice pool is empty, too large, or holds a non-positive value
/// * The target is not positive
///
/// # Examples
///
/// ```
/// use primecaster::find_combination;
///
/// let result = find_combination(&[1, 2, 3, 4], 7).unwrap();
/// assert!(result.found);
/// println!("{}", result);
/// ```
pub fn find_combination(dice: &[i64], prime: i64) -> Result<SearchResult, SolverError> {
    validate_dice(dice)?;
    validate_primes(&[prime])?;

    let solver = PrimeSolver::default();
    Ok(solver.find_combination(dice, prime))
}

/// Search `dice` for every prime of a difficulty level (1 through 9)
///
/// # Errors
///
/// Returns an error for invalid dice or an unknown level.
///
/// # Examples
///
/// ```
/// use primecaster::solve_level;
///
/// let outcome = solve_level(&[1, 2, 3, 4, 5, 6], 1).unwrap();
/// assert!(outcome.success);
/// ```
pub fn solve_level(dice: &[i64], level: usize) -> Result<BatchOutcome, SolverError> {
    validate_dice(dice)?;
    let primes = primes_for_level(level)?;

    let solver = PrimeSolver::default();
    solver.solve_all(dice, primes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_combination_validates_input() {
        assert!(matches!(
            find_combination(&[], 7),
            Err(SolverError::UtilsError(UtilsError::EmptyDice))
        ));
        assert!(matches!(
            find_combination(&[1, 2], 0),
            Err(SolverError::UtilsError(UtilsError::NonPositivePrime(0)))
        ));
    }

    #[test]
    fn test_solve_level_rejects_unknown_level() {
        assert!(matches!(
            solve_level(&[1, 2, 3], 10),
            Err(SolverError::UtilsError(UtilsError::InvalidLevel { level: 10, .. }))
        ));
    }

    #[test]
    fn test_solve_level_one() {
        let outcome = solve_level(&[1, 2, 3, 4, 5, 6], 1);
        assert!(outcome.is_ok());
        if let Ok(outcome) = outcome {
            assert!(outcome.success);
            let primes: Vec<i64> = outcome.results.iter().map(|result| result.prime).collect();
            assert_eq!(primes, vec![3, 5, 7]);
        }
    }
}
