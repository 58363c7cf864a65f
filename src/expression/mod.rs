//! Left-to-right evaluation of dice and operator sequences, plus a
//! standard-precedence reader used to check the rendered text

mod ast;
mod display;
mod errors;
mod eval;
mod infix;

pub use ast::{Evaluation, Operator};
pub use errors::ExpressionError;
pub use eval::{apply, evaluate};
pub use infix::evaluate_infix;
