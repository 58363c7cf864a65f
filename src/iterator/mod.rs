//! Lazy enumeration of the search space: dice subsets, their orderings, and
//! the operators placed between them

pub mod constants;
mod operators;
mod permutations;
mod subsets;

pub use operators::{OperatorSequences, operator_sequences};
pub use permutations::{Permutations, permutations};
pub use subsets::{Subsets, subsets};
