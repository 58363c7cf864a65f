use log::{debug, info};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::solver::core::PrimeSolver;
use crate::solver::errors::SolverError;
use crate::solver::result::{BatchOutcome, SearchResult};

impl PrimeSolver {
    /// Runs one search per prime in parallel and waits for all of them.
    ///
    /// Every search reads the same dice. Results are sorted by prime no
    /// matter which search finishes first, and `success` holds only when all
    /// primes were found.
    ///
    /// # Errors
    ///
    /// Returns an error if a dedicated worker pool was configured and could
    /// not be built.
    pub fn solve_all(&self, dice: &[i64], primes: &[i64]) -> Result<BatchOutcome, SolverError> {
        info!("Dispatching {} prime searches over {:?}", primes.len(), dice);

        let search = || -> Vec<SearchResult> {
            primes
                .par_iter()
                .with_max_len(1)
                .map(|&prime| self.find_combination(dice, prime))
                .collect()
        };

        let results = match self.config().workers {
            0 => search(),
            workers => {
                debug!("Building a pool of {} workers", workers);
                ThreadPoolBuilder::new()
                    .num_threads(workers)
                    .build()?
                    .install(search)
            }
        };

        let outcome = BatchOutcome::from_results(results);
        info!(
            "Batch finished: {} of {} primes found",
            outcome.results.iter().filter(|result| result.found).count(),
            outcome.results.len()
        );
        Ok(outcome)
    }
}
