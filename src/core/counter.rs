//! Closure-style counters with private state.
//!
//! A counter owns a single integer that only its own methods can observe or
//! change. Every counter is independent: creating a new one never aliases the
//! storage of another.

use std::fmt;

/// Counter with an encapsulated count.
///
/// The count is a private field, so the only way to read or change it is
/// through [`increment`](Counter::increment), [`decrement`](Counter::decrement),
/// [`reset`](Counter::reset) and [`count`](Counter::count).
///
/// # Example
///
/// ```rust
/// use kata::core::create_counter;
///
/// let mut counter = create_counter(0);
/// assert_eq!(counter.increment(), 1);
/// assert_eq!(counter.increment(), 2);
/// assert_eq!(counter.reset(), 0);
/// assert_eq!(counter.increment(), 1);
/// ```
#[derive(Clone, Default)]
pub struct Counter {
    value: i64,
}

impl Counter {
    /// Create a counter starting at `initial`.
    ///
    /// Any value is accepted; there is no validation.
    pub fn new(initial: i64) -> Self {
        Self { value: initial }
    }

    /// Increase the count by one and return the new value.
    ///
    /// Saturates at `i64::MAX`.
    pub fn increment(&mut self) -> i64 {
        self.value = self.value.saturating_add(1);
        self.value
    }

    /// Decrease the count by one and return the new value.
    ///
    /// Saturates at `i64::MIN`.
    pub fn decrement(&mut self) -> i64 {
        self.value = self.value.saturating_sub(1);
        self.value
    }

    /// Set the count back to zero and return it.
    ///
    /// Resets to zero regardless of the value the counter was created with.
    pub fn reset(&mut self) -> i64 {
        self.value = 0;
        self.value
    }

    /// Current count (pure).
    pub fn count(&self) -> i64 {
        self.value
    }
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter").finish_non_exhaustive()
    }
}

/// Factory for independent counters.
///
/// Equivalent to [`Counter::new`]; kept as a free function so callers can
/// pass it where a `Fn(i64) -> Counter` is expected.
///
/// ```rust
/// use kata::core::create_counter;
///
/// let counters: Vec<_> = (0..3).map(create_counter).collect();
/// assert_eq!(counters[2].count(), 2);
/// ```
pub fn create_counter(initial: i64) -> Counter {
    Counter::new(initial)
}
