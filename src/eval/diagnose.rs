//! Accumulating diagnostics for expressions.
//!
//! [`evaluate`](crate::eval::evaluate) stops at the first problem. `diagnose`
//! uses Stillwater's `Validation` to collect every problem in one pass, so
//! `"x % 0"` reports both the bad operand and the unknown operator.

use crate::eval::error::EvalError;
use crate::eval::expression::{parse_operand, split_tokens};
use crate::eval::operator::Operator;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of a single diagnostic check
pub type Diagnosis = Validation<(), NonEmptyVec<EvalError>>;

/// Check an expression, accumulating ALL problems.
///
/// Returns `Validation::Success(())` exactly when
/// [`evaluate`](crate::eval::evaluate) would succeed.
///
/// # Example
///
/// ```rust
/// use kata::eval::diagnose;
/// use stillwater::validation::Validation;
///
/// assert!(diagnose("10 + 5").is_success());
///
/// match diagnose("x % 0") {
///     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
///     Validation::Success(_) => panic!("expected failures"),
/// }
/// ```
pub fn diagnose(expression: &str) -> Diagnosis {
    let (left, symbol, right) = match split_tokens(expression) {
        Ok(tokens) => tokens,
        // Nothing else can be checked without the three tokens
        Err(e) => return Validation::fail(e),
    };

    let left = parse_operand(left);
    let right = parse_operand(right);
    let operator = Operator::from_symbol(symbol);

    let mut checks: Vec<Diagnosis> = vec![
        check(left.as_ref().map(|_| ())),
        check(right.as_ref().map(|_| ())),
        match operator {
            Some(_) => Validation::success(()),
            None => Validation::fail(EvalError::UnknownOperator(symbol.to_string())),
        },
    ];

    // Only meaningful once the divisor parsed
    if operator == Some(Operator::Divide) && matches!(right, Ok(r) if r == 0.0) {
        checks.push(Validation::fail(EvalError::DivisionByZero));
    }

    Validation::all_vec(checks).map(|_| ())
}

fn check(result: Result<(), &EvalError>) -> Diagnosis {
    match result {
        Ok(()) => Validation::success(()),
        Err(e) => Validation::fail(e.clone()),
    }
}
