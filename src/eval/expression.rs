//! Parsing and evaluating `<number> <operator> <number>` expressions.

use crate::eval::error::EvalError;
use crate::eval::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed three-token arithmetic expression.
///
/// # Example
///
/// ```rust
/// use kata::eval::{Expression, Operator};
///
/// let expr = Expression::parse("10 + 5").unwrap();
/// assert_eq!(expr.operator, Operator::Add);
/// assert_eq!(expr.evaluate(), Ok(15.0));
/// assert_eq!(expr.to_string(), "10 + 5");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub left: f64,
    pub operator: Operator,
    pub right: f64,
}

impl Expression {
    /// Parse an expression.
    ///
    /// Tokens are separated by exactly one space. Numeric tokens are checked
    /// before the operator, so `"five plus two"` is malformed while
    /// `"5 % 2"` is an unknown operator.
    pub fn parse(input: &str) -> Result<Self, EvalError> {
        let (left, symbol, right) = split_tokens(input)?;
        let left = parse_operand(left)?;
        let right = parse_operand(right)?;
        let operator =
            Operator::from_symbol(symbol).ok_or_else(|| EvalError::UnknownOperator(symbol.into()))?;

        Ok(Self {
            left,
            operator,
            right,
        })
    }

    /// Evaluate the expression (pure).
    pub fn evaluate(&self) -> Result<f64, EvalError> {
        self.operator.apply(self.left, self.right)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}

/// Parse and evaluate an expression in one step.
///
/// ```rust
/// use kata::eval::{evaluate, EvalError};
///
/// assert_eq!(evaluate("20 - 8"), Ok(12.0));
/// assert_eq!(evaluate("5 / 0"), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    Expression::parse(expression)?.evaluate()
}

/// Split on single spaces into exactly three tokens.
pub(crate) fn split_tokens(input: &str) -> Result<(&str, &str, &str), EvalError> {
    let tokens: Vec<&str> = input.split(' ').collect();
    match tokens.as_slice() {
        [left, op, right] => Ok((*left, *op, *right)),
        _ => Err(EvalError::MalformedExpression(format!(
            "expected 3 space-separated tokens, found {} in '{}'",
            tokens.len(),
            input
        ))),
    }
}

/// Parse a finite number. Empty tokens and `NaN`/`inf` spellings are rejected.
pub(crate) fn parse_operand(token: &str) -> Result<f64, EvalError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| EvalError::MalformedExpression(format!("'{token}' is not a number")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_each_operator() {
        assert_eq!(evaluate("10 + 5"), Ok(15.0));
        assert_eq!(evaluate("20 - 8"), Ok(12.0));
        assert_eq!(evaluate("4 * 3"), Ok(12.0));
        assert_eq!(evaluate("15 / 3"), Ok(5.0));
    }

    #[test]
    fn accepts_negative_and_fractional_operands() {
        assert_eq!(evaluate("-2.5 * 4"), Ok(-10.0));
        assert_eq!(evaluate("1e3 - 1"), Ok(999.0));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(evaluate("5 / 0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("5 / 0.0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("0 / -0"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn unknown_operator_is_reported() {
        assert_eq!(
            evaluate("5 % 2"),
            Err(EvalError::UnknownOperator("%".to_string()))
        );
    }

    #[test]
    fn words_are_malformed() {
        assert!(matches!(
            evaluate("five plus two"),
            Err(EvalError::MalformedExpression(_))
        ));
    }

    #[test]
    fn wrong_token_count_is_malformed() {
        for input in ["", "5", "5 +", "1 + 2 + 3", "5+3"] {
            assert!(
                matches!(evaluate(input), Err(EvalError::MalformedExpression(_))),
                "expected malformed for {input:?}"
            );
        }
    }

    #[test]
    fn extra_whitespace_is_malformed() {
        for input in ["10  + 5", " 10 + 5", "10 + 5 ", "10\t+ 5", "10 +\t5"] {
            assert!(
                matches!(evaluate(input), Err(EvalError::MalformedExpression(_))),
                "expected malformed for {input:?}"
            );
        }
    }

    #[test]
    fn non_finite_literals_are_malformed() {
        assert!(matches!(
            evaluate("NaN + 1"),
            Err(EvalError::MalformedExpression(_))
        ));
        assert!(matches!(
            evaluate("1 * inf"),
            Err(EvalError::MalformedExpression(_))
        ));
    }

    #[test]
    fn operands_are_checked_before_operator() {
        assert!(matches!(
            evaluate("x % 2"),
            Err(EvalError::MalformedExpression(_))
        ));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let expr = Expression::parse("7.5 / 2.5").unwrap();

        assert_eq!(Expression::parse(&expr.to_string()), Ok(expr));
    }

    #[test]
    fn expression_serializes() {
        let expr = Expression::parse("4 * 3").unwrap();
        let json = serde_json::to_string(&expr).unwrap();

        assert_eq!(json, r#"{"left":4.0,"operator":"*","right":3.0}"#);
        let back: Expression = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expr);
    }
}
