use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Integer overflow while evaluating")]
    Overflow,
    #[error("Expected {expected} operators for {operands} operands, got {operators}")]
    ArityMismatch {
        operands: usize,
        operators: usize,
        expected: usize,
    },
    #[error("Cannot parse expression: {0}")]
    Parse(String),
}
