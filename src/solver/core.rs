use log::{info, trace, warn};

use crate::expression::evaluate;
use crate::iterator::{operator_sequences, permutations, subsets};
use crate::solver::budget::{BudgetTracker, SearchBudget};
use crate::solver::result::SearchResult;

/// Configuration for a [`PrimeSolver`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverConfig {
    pub budget: SearchBudget,
    /// Worker threads for batch searches; 0 uses the global rayon pool
    pub workers: usize,
}

/// Brute-force search for dice combinations that reach a target prime
#[derive(Debug, Clone, Default)]
pub struct PrimeSolver {
    config: SolverConfig,
}

impl PrimeSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Searches every subset of `dice`, every ordering of that subset, and
    /// every operator sequence between them, returning the first combination
    /// whose left-to-right value equals `prime`.
    ///
    /// Candidates that divide by zero or overflow are skipped. An empty dice
    /// slice finds nothing. Input is not validated here: only the first
    /// [`crate::iterator::constants::MAX_DICE`] dice are searched, so run
    /// [`crate::validate_dice`] first when the pool may be larger.
    pub fn find_combination(&self, dice: &[i64], prime: i64) -> SearchResult {
        info!("Searching {} dice {:?} for {}", dice.len(), dice, prime);

        let mut tracker = BudgetTracker::start(self.config.budget);
        let mut rejected = 0;

        for subset in subsets(dice) {
            let gaps = subset.len().saturating_sub(1);
            for ordering in permutations(&subset) {
                for operators in operator_sequences(gaps) {
                    if !tracker.charge() {
                        warn!(
                            "Search budget exhausted for {} after {} evaluations",
                            prime,
                            tracker.evaluations()
                        );
                        return SearchResult::out_of_budget(prime, tracker.evaluations(), rejected);
                    }

                    match evaluate(&ordering, &operators) {
                        Ok(evaluation) if evaluation.value == prime => {
                            info!(
                                "Found {} = {} after {} evaluations",
                                prime,
                                evaluation.rendering,
                                tracker.evaluations()
                            );
                            return SearchResult::found(
                                prime,
                                evaluation.rendering,
                                tracker.evaluations(),
                                rejected,
                            );
                        }
                        Ok(_) => {}
                        Err(err) => {
                            trace!("Rejected {:?} {:?}: {}", ordering, operators, err);
                            rejected += 1;
                        }
                    }
                }
            }
        }

        info!(
            "No combination reaches {} ({} evaluations, {} rejected)",
            prime,
            tracker.evaluations(),
            rejected
        );
        SearchResult::not_found(prime, tracker.evaluations(), rejected)
    }
}
