use std::time::{Duration, Instant};

use super::constants::DEADLINE_CHECK_INTERVAL;

/// Optional limits on a single prime search.
///
/// The default has no limits, so the search is exhaustive. With a limit set,
/// a search that runs out reports `found = false` with `budget_exhausted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchBudget {
    pub max_evaluations: Option<u64>,
    pub timeout: Option<Duration>,
}

impl SearchBudget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_evaluations(mut self, max: u64) -> Self {
        self.max_evaluations = Some(max);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn is_unlimited(&self) -> bool {
        self.max_evaluations.is_none() && self.timeout.is_none()
    }
}

/// Per-search accounting against a [`SearchBudget`]
#[derive(Debug)]
pub(crate) struct BudgetTracker {
    budget: SearchBudget,
    started: Instant,
    evaluations: u64,
}

impl BudgetTracker {
    pub(crate) fn start(budget: SearchBudget) -> Self {
        Self {
            budget,
            started: Instant::now(),
            evaluations: 0,
        }
    }

    /// Counts one evaluation, or returns `false` if the budget is spent
    pub(crate) fn charge(&mut self) -> bool {
        if let Some(max) = self.budget.max_evaluations
            && self.evaluations >= max
        {
            return false;
        }

        if let Some(timeout) = self.budget.timeout
            && self.evaluations > 0
            && self.evaluations % DEADLINE_CHECK_INTERVAL == 0
            && self.started.elapsed() >= timeout
        {
            return false;
        }

        self.evaluations += 1;
        true
    }

    pub(crate) fn evaluations(&self) -> u64 {
        self.evaluations
    }
}
