//! The closed set of binary arithmetic operators.

use crate::eval::error::EvalError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary arithmetic operator.
///
/// Serializes as its symbol (`"+"`, `"-"`, `"*"`, `"/"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

/// Symbol table used for dispatch. Membership here is the only way a token
/// becomes an operator.
const SYMBOLS: [(&str, Operator); 4] = [
    ("+", Operator::Add),
    ("-", Operator::Subtract),
    ("*", Operator::Multiply),
    ("/", Operator::Divide),
];

impl Operator {
    /// Every operator, in table order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Look up an operator by its symbol.
    ///
    /// ```rust
    /// use kata::eval::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("*"), Some(Operator::Multiply));
    /// assert_eq!(Operator::from_symbol("%"), None);
    /// ```
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        SYMBOLS
            .iter()
            .find(|(candidate, _)| *candidate == symbol)
            .map(|(_, op)| *op)
    }

    /// The operator's symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Apply the operator to two operands.
    ///
    /// Dividing by zero (either sign) is an error rather than an infinity
    /// or NaN.
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Subtract => Ok(left - right),
            Self::Multiply => Ok(left * right),
            Self::Divide if right == 0.0 => Err(EvalError::DivisionByZero),
            Self::Divide => Ok(left / right),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Apply the operator named by `symbol` to `a` and `b`.
///
/// ```rust
/// use kata::eval::{calculate, EvalError};
///
/// assert_eq!(calculate("+", 5.0, 3.0), Ok(8.0));
/// assert_eq!(calculate("/", 6.0, 2.0), Ok(3.0));
/// assert_eq!(calculate("/", 5.0, 0.0), Err(EvalError::DivisionByZero));
/// ```
pub fn calculate(symbol: &str, a: f64, b: f64) -> Result<f64, EvalError> {
    let op =
        Operator::from_symbol(symbol).ok_or_else(|| EvalError::UnknownOperator(symbol.into()))?;
    op.apply(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip_through_table() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        assert_eq!(Operator::from_symbol("%"), None);
        assert_eq!(Operator::from_symbol("plus"), None);
        assert_eq!(Operator::from_symbol(""), None);
        assert_eq!(Operator::from_symbol("++"), None);
    }

    #[test]
    fn calculate_dispatches_each_operator() {
        assert_eq!(calculate("+", 5.0, 3.0), Ok(8.0));
        assert_eq!(calculate("-", 5.0, 3.0), Ok(2.0));
        assert_eq!(calculate("*", 5.0, 3.0), Ok(15.0));
        assert_eq!(calculate("/", 6.0, 2.0), Ok(3.0));
    }

    #[test]
    fn calculate_rejects_unknown_operator() {
        assert_eq!(
            calculate("^", 2.0, 3.0),
            Err(EvalError::UnknownOperator("^".to_string()))
        );
    }

    #[test]
    fn divide_by_negative_zero_is_error() {
        assert_eq!(
            Operator::Divide.apply(1.0, -0.0),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn zero_is_fine_for_other_operators() {
        assert_eq!(Operator::Multiply.apply(7.0, 0.0), Ok(0.0));
        assert_eq!(Operator::Divide.apply(0.0, 4.0), Ok(0.0));
    }

    #[test]
    fn operator_serializes_as_symbol() {
        let json = serde_json::to_string(&Operator::Multiply).unwrap();
        assert_eq!(json, "\"*\"");

        let op: Operator = serde_json::from_str("\"/\"").unwrap();
        assert_eq!(op, Operator::Divide);
    }

    #[test]
    fn display_uses_symbol() {
        assert_eq!(Operator::Subtract.to_string(), "-");
    }
}
