use chumsky::prelude::*;
use log::debug;

use crate::expression::ast::Operator;
use crate::expression::errors::ExpressionError;
use crate::expression::eval::apply;

/// Evaluates text such as `(2 + 3) * 4` with conventional precedence:
/// `*` and `/` bind tighter than `+` and `-`, all left associative, and
/// division truncates toward zero.
///
/// Rendered evaluations read back through this function give the same value
/// the left-to-right evaluator produced.
///
/// # Errors
///
/// Returns [`ExpressionError::Parse`] for malformed text, and the arithmetic
/// errors of [`apply`] when evaluation fails.
pub fn evaluate_infix(text: &str) -> Result<i64, ExpressionError> {
    debug!("Reading infix expression: '{}'", text);

    infix()
        .then_ignore(end())
        .parse(text)
        .into_result()
        .map_err(|errs| {
            ExpressionError::Parse(
                errs.iter()
                    .map(|err| err.to_string())
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?
}

/// A parsed operand before its sign is settled.
///
/// Literals keep their unsigned magnitude so `-9223372036854775808` can be
/// read even though its magnitude does not fit in an `i64`.
#[derive(Debug, Clone)]
enum Operand {
    Literal(u64),
    Value(Result<i64, ExpressionError>),
}

impl Operand {
    fn negate(self) -> Self {
        match self {
            Operand::Literal(magnitude) => Operand::Value(
                0_i64
                    .checked_sub_unsigned(magnitude)
                    .ok_or(ExpressionError::Overflow),
            ),
            Operand::Value(value) => Operand::Value(
                value.and_then(|v| v.checked_neg().ok_or(ExpressionError::Overflow)),
            ),
        }
    }

    fn value(self) -> Result<i64, ExpressionError> {
        match self {
            Operand::Literal(magnitude) => {
                i64::try_from(magnitude).map_err(|_| ExpressionError::Overflow)
            }
            Operand::Value(value) => value,
        }
    }
}

fn combine(
    lhs: Result<i64, ExpressionError>,
    operator: Operator,
    rhs: Result<i64, ExpressionError>,
) -> Result<i64, ExpressionError> {
    apply(operator, lhs?, rhs?)
}

/// Parser folding integers, parentheses, unary minus and the two precedence
/// levels straight into a value. Arithmetic failures are carried in the
/// output so they surface as their own errors rather than as parse errors.
fn infix<'src>()
-> impl Parser<'src, &'src str, Result<i64, ExpressionError>, extra::Err<Rich<'src, char>>> + Clone
{
    let op = |c| just(c).padded();

    recursive(|expr| {
        let int = text::int(10).try_map(|s: &str, span| {
            s.parse()
                .map(Operand::Literal)
                .map_err(|e| Rich::custom(span, format!("{}", e)))
        });

        let atom = int
            .or(expr.delimited_by(just('('), just(')')).map(Operand::Value))
            .padded();

        let unary = op('-')
            .repeated()
            .foldr(atom, |_op, rhs: Operand| rhs.negate())
            .map(Operand::value);

        let product = unary.clone().foldl(
            choice((op('*').to(Operator::Mul), op('/').to(Operator::Div)))
                .then(unary)
                .repeated(),
            |lhs, (operator, rhs)| combine(lhs, operator, rhs),
        );

        product.clone().foldl(
            choice((op('+').to(Operator::Add), op('-').to(Operator::Sub)))
                .then(product)
                .repeated(),
            |lhs, (operator, rhs)| combine(lhs, operator, rhs),
        )
    })
}
