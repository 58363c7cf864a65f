mod budget;
pub mod constants;
mod core;
mod dispatch;
mod errors;
mod result;

pub use budget::SearchBudget;
pub use self::core::{PrimeSolver, SolverConfig};
pub use errors::SolverError;
pub use result::{BatchOutcome, SearchResult};
