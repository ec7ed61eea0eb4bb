//! Minimal arithmetic evaluator.
//!
//! Evaluates exactly one shape of input, `<number> <operator> <number>`,
//! with single-space separators and an operator from the closed set
//! `+ - * /`. There is no precedence and no nesting.
//!
//! # Example
//!
//! ```rust
//! use kata::eval::{evaluate, EvalError};
//!
//! assert_eq!(evaluate("4 * 3"), Ok(12.0));
//! assert_eq!(evaluate("5 % 2"), Err(EvalError::UnknownOperator("%".into())));
//! assert!(matches!(evaluate("five plus two"), Err(EvalError::MalformedExpression(_))));
//! ```

pub mod diagnose;
pub mod error;
pub mod expression;
pub mod operator;

pub use diagnose::{diagnose, Diagnosis};
pub use error::EvalError;
pub use expression::{evaluate, Expression};
pub use operator::{calculate, Operator};
