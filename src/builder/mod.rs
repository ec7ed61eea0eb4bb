//! Builder APIs for stateful helpers.
//!
//! This module provides fluent builders and macros for constructing the
//! stateful pieces of the library: button banks, chaining calculators and
//! pipelines (via `pipe!` / `compose!`).

pub mod bank;
pub mod calculator;
pub mod error;
pub mod macros;

pub use bank::{Button, Click, CounterBank, CounterBankBuilder, Tally};
pub use calculator::Calculator;
pub use error::BuildError;
