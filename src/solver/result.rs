use std::fmt;

use log::debug;

use crate::expression::evaluate_infix;
use crate::solver::errors::SolverError;

/// Outcome of searching for one target prime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub prime: i64,
    /// Rendered expression, empty unless `found`
    pub expression: String,
    pub found: bool,
    /// Set when a [`super::SearchBudget`] cut the search short
    pub budget_exhausted: bool,
    pub evaluations: u64,
    /// Candidates discarded for division by zero or overflow
    pub rejected: u64,
}

impl SearchResult {
    pub(crate) fn found(prime: i64, expression: String, evaluations: u64, rejected: u64) -> Self {
        Self {
            prime,
            expression,
            found: true,
            budget_exhausted: false,
            evaluations,
            rejected,
        }
    }

    pub(crate) fn not_found(prime: i64, evaluations: u64, rejected: u64) -> Self {
        Self {
            prime,
            expression: String::new(),
            found: false,
            budget_exhausted: false,
            evaluations,
            rejected,
        }
    }

    pub(crate) fn out_of_budget(prime: i64, evaluations: u64, rejected: u64) -> Self {
        Self {
            budget_exhausted: true,
            ..Self::not_found(prime, evaluations, rejected)
        }
    }

    /// Reads the expression back with conventional precedence and checks it
    /// lands on the prime. Results that were not found verify trivially.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression cannot be read back or evaluates to
    /// a different value.
    pub fn verify(&self) -> Result<(), SolverError> {
        if !self.found {
            return Ok(());
        }

        let value = evaluate_infix(&self.expression)?;
        debug!("'{}' reads back as {}", self.expression, value);
        if value != self.prime {
            return Err(SolverError::Mismatch {
                prime: self.prime,
                expression: self.expression.clone(),
                value,
            });
        }
        Ok(())
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.found {
            write!(f, "Prime {}: {}", self.prime, self.expression)
        } else if self.budget_exhausted {
            write!(f, "Prime {}: Not found (search budget exhausted)", self.prime)
        } else {
            write!(f, "Prime {}: Not found", self.prime)
        }
    }
}

/// Results for a whole set of target primes, sorted by prime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub results: Vec<SearchResult>,
    /// True only when every prime was found
    pub success: bool,
}

impl BatchOutcome {
    pub(crate) fn from_results(mut results: Vec<SearchResult>) -> Self {
        results.sort_by_key(|result| result.prime);
        let success = results.iter().all(|result| result.found);
        Self { results, success }
    }

    /// # Errors
    ///
    /// Returns the first failure from [`SearchResult::verify`].
    pub fn verify(&self) -> Result<(), SolverError> {
        self.results.iter().try_for_each(SearchResult::verify)
    }
}
