use log::trace;

use crate::expression::ast::{Evaluation, Operator};
use crate::expression::display::Rendering;
use crate::expression::errors::ExpressionError;

/// Applies a single operator to an accumulator and the next operand.
///
/// Division truncates toward zero. Overflow is reported instead of wrapping.
///
/// # Errors
///
/// Returns [`ExpressionError::DivisionByZero`] when `right` is zero for a
/// division, and [`ExpressionError::Overflow`] when the result does not fit.
pub fn apply(operator: Operator, left: i64, right: i64) -> Result<i64, ExpressionError> {
    match operator {
        Operator::Add => left.checked_add(right).ok_or(ExpressionError::Overflow),
        Operator::Sub => left.checked_sub(right).ok_or(ExpressionError::Overflow),
        Operator::Mul => left.checked_mul(right).ok_or(ExpressionError::Overflow),
        Operator::Div => {
            if right == 0 {
                return Err(ExpressionError::DivisionByZero);
            }
            left.checked_div(right).ok_or(ExpressionError::Overflow)
        }
    }
}

/// Evaluates `operands` strictly left to right, ignoring operator precedence.
///
/// Each operator combines the running accumulator with the next operand. The
/// rendering wraps what has been built so far in parentheses whenever an
/// additive step is followed by a multiplicative one, so the text reads the
/// same under conventional precedence. The first step treats the previous
/// operator as `+`.
///
/// An empty operand slice evaluates to `0` with an empty rendering.
///
/// # Errors
///
/// Returns an error when the operator count is not exactly one less than the
/// operand count, on division by zero, or on integer overflow.
pub fn evaluate(operands: &[i64], operators: &[Operator]) -> Result<Evaluation, ExpressionError> {
    let Some((&first, rest)) = operands.split_first() else {
        return Ok(Evaluation::default());
    };

    if operators.len() != rest.len() {
        return Err(ExpressionError::ArityMismatch {
            operands: operands.len(),
            operators: operators.len(),
            expected: rest.len(),
        });
    }

    let mut value = first;
    let mut rendering = Rendering::new(first);
    let mut previous = Operator::Add;

    for (&operator, &operand) in operators.iter().zip(rest) {
        value = apply(operator, value, operand)?;
        rendering.push(previous, operator, operand);
        previous = operator;
    }

    let evaluation = Evaluation {
        value,
        rendering: rendering.finish(),
    };
    trace!("{} = {}", evaluation.rendering, evaluation.value);
    Ok(evaluation)
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::apply;
    use crate::expression::{ExpressionError, Operator};

    #[test]
    fn test_apply_truncates_toward_zero() {
        assert_eq!(apply(Operator::Div, 7, 2), Ok(3));
        assert_eq!(apply(Operator::Div, -7, 2), Ok(-3));
        assert_eq!(apply(Operator::Div, 1, 6), Ok(0));
    }

    #[test]
    fn test_apply_rejects_zero_divisor() {
        assert_eq!(
            apply(Operator::Div, 5, 0),
            Err(ExpressionError::DivisionByZero)
        );
    }

    #[test]
    fn test_apply_reports_overflow() {
        assert_eq!(
            apply(Operator::Mul, i64::MAX, 2),
            Err(ExpressionError::Overflow)
        );
        assert_eq!(
            apply(Operator::Div, i64::MIN, -1),
            Err(ExpressionError::Overflow)
        );
    }
}
