//! Kata: closure-based counters, function composition and a tiny evaluator
//!
//! Kata collects the small pieces of reusable logic behind a set of closure
//! and scope exercises. The core is pure and never prints; callers decide how
//! to present results.
//!
//! # Core Concepts
//!
//! - **Counters**: private state reachable only through `increment`/`reset`
//! - **Pipelines**: `pipe` (left to right) and `compose` (right to left)
//! - **Evaluator**: `<number> <operator> <number>` with typed errors
//! - **Builders**: button banks and a chaining calculator
//! - **Deferred**: a virtual timeline for loop-scheduled callbacks
//!
//! # Example
//!
//! ```rust
//! use kata::core::create_counter;
//! use kata::eval::{evaluate, EvalError};
//! use kata::{compose, pipe};
//!
//! let mut counter = create_counter(0);
//! assert_eq!(counter.increment(), 1);
//! assert_eq!(counter.reset(), 0);
//!
//! let f = |x: f64| x + 5.0;
//! let g = |x: f64| x * 2.0;
//! assert_eq!(pipe![f, g].apply(10.0), compose![g, f].apply(10.0));
//!
//! assert_eq!(evaluate("15 / 3"), Ok(5.0));
//! assert_eq!(evaluate("5 / 0"), Err(EvalError::DivisionByZero));
//! ```

pub mod builder;
pub mod core;
pub mod deferred;
pub mod eval;

// Re-export commonly used types
pub use builder::{Calculator, CounterBank, Tally};
pub use self::core::{compose, create_counter, pipe, Counter, Pipeline};
pub use deferred::Timeline;
pub use eval::{calculate, evaluate, EvalError, Expression, Operator};
