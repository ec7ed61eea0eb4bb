//! Pure building blocks.
//!
//! This module contains the side-effect-free core of the library:
//! - Counters with private, encapsulated state
//! - Function composition via `pipe` and `compose`
//! - Array reductions and descriptive statistics
//!
//! Nothing in this module logs or prints.

mod counter;
mod pipeline;
mod stats;

pub use counter::{create_counter, Counter};
pub use pipeline::{adder, compose, multiplier, pipe, square, Pipeline, Step};
pub use stats::{
    average, filter_and_sum, median, mode, multiply_all, range, sum_all, transform_and_sum,
    StatsError,
};
