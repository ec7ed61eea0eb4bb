//! Chaining calculator.

use crate::eval::{EvalError, Operator};
use tracing::debug;

/// Calculator whose operations chain by value.
///
/// Each operation consumes the calculator and returns it, so calls read left
/// to right. A division by zero poisons the chain: later operations are
/// skipped and [`value`](Calculator::value) reports the error.
///
/// # Example
///
/// ```rust
/// use kata::builder::Calculator;
///
/// let result = Calculator::new(10.0)
///     .add(5.0)
///     .multiply(2.0)
///     .subtract(10.0)
///     .divide(2.0)
///     .value();
///
/// assert_eq!(result, Ok(10.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    value: f64,
    operations: Vec<(Operator, f64)>,
    error: Option<EvalError>,
}

impl Calculator {
    /// Start a chain at `initial`.
    pub fn new(initial: f64) -> Self {
        Self {
            value: initial,
            operations: Vec::new(),
            error: None,
        }
    }

    pub fn add(self, operand: f64) -> Self {
        self.apply(Operator::Add, operand)
    }

    pub fn subtract(self, operand: f64) -> Self {
        self.apply(Operator::Subtract, operand)
    }

    pub fn multiply(self, operand: f64) -> Self {
        self.apply(Operator::Multiply, operand)
    }

    pub fn divide(self, operand: f64) -> Self {
        self.apply(Operator::Divide, operand)
    }

    /// Apply any operator as the next step.
    pub fn apply(mut self, operator: Operator, operand: f64) -> Self {
        if self.error.is_some() {
            return self;
        }

        match operator.apply(self.value, operand) {
            Ok(value) => {
                self.value = value;
                self.operations.push((operator, operand));
            }
            Err(e) => {
                debug!(
                    operator = operator.symbol(),
                    operand,
                    steps = self.operations.len(),
                    "calculator chain halted: {e}"
                );
                self.error = Some(e);
            }
        }
        self
    }

    /// Final value of the chain, or the error that stopped it.
    pub fn value(&self) -> Result<f64, EvalError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(self.value),
        }
    }

    /// Steps applied successfully, in order.
    pub fn operations(&self) -> &[(Operator, f64)] {
        &self.operations
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(0.0)
    }
}
