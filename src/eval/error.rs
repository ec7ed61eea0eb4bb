//! Evaluation error types.

use thiserror::Error;

/// Errors that can occur when evaluating an arithmetic expression
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Input is not `<number> <operator> <number>` separated by single spaces
    #[error("Malformed expression: {0}")]
    MalformedExpression(String),

    /// Operator token outside `+ - * /`
    #[error("Unknown operator '{0}'")]
    UnknownOperator(String),

    /// Divide with a zero right operand
    #[error("Division by zero")]
    DivisionByZero,
}
