//! Banks of labelled "button" counters.
//!
//! Every button captures its own index by value when it is built, so button
//! `k` reports `k` for as long as it lives. The tally is either one count
//! shared by the whole bank or a private counter per button.

use crate::builder::error::BuildError;
use crate::core::Counter;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// How buttons in a bank count clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tally {
    /// All buttons increment one shared count.
    #[default]
    Shared,

    /// Each button owns an independent counter.
    Independent,
}

/// What a click reports: the button's label and the new tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Click {
    pub label: usize,
    pub count: i64,
}

#[derive(Debug)]
enum Count {
    Shared(Arc<AtomicI64>),
    Own(Counter),
}

/// A labelled counter produced by [`CounterBank`].
#[derive(Debug)]
pub struct Button {
    label: usize,
    count: Count,
}

impl Button {
    /// Increment this button's tally and report it with the button's label.
    pub fn click(&mut self) -> Click {
        let count = match &mut self.count {
            Count::Shared(total) => total.fetch_add(1, Ordering::SeqCst).saturating_add(1),
            Count::Own(counter) => counter.increment(),
        };
        Click {
            label: self.label,
            count,
        }
    }

    /// Reset the tally this button increments (the whole bank's, when shared).
    pub fn reset(&mut self) -> i64 {
        match &mut self.count {
            Count::Shared(total) => {
                total.store(0, Ordering::SeqCst);
                0
            }
            Count::Own(counter) => counter.reset(),
        }
    }

    /// The index this button was created with (pure).
    pub fn label(&self) -> usize {
        self.label
    }
}

/// Entry point for building button banks.
///
/// # Example
///
/// ```rust
/// use kata::builder::{CounterBank, Tally};
///
/// let mut buttons = CounterBank::builder()
///     .buttons(3)
///     .tally(Tally::Independent)
///     .build()
///     .unwrap();
///
/// assert_eq!(buttons[0].click().count, 1);
/// assert_eq!(buttons[0].click().count, 2);
/// assert_eq!(buttons[1].click().count, 1);
/// assert_eq!(buttons[2].click().label, 2);
/// ```
pub struct CounterBank;

impl CounterBank {
    /// Start configuring a bank.
    pub fn builder() -> CounterBankBuilder {
        CounterBankBuilder::new()
    }
}

/// Builder for [`Button`] banks with a fluent API.
#[derive(Debug, Clone, Default)]
pub struct CounterBankBuilder {
    buttons: Option<usize>,
    tally: Tally,
}

impl CounterBankBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of buttons to create (required).
    pub fn buttons(mut self, n: usize) -> Self {
        self.buttons = Some(n);
        self
    }

    /// How buttons count clicks. Defaults to [`Tally::Shared`].
    pub fn tally(mut self, tally: Tally) -> Self {
        self.tally = tally;
        self
    }

    /// Build the bank.
    /// Returns an error if no buttons were requested.
    pub fn build(self) -> Result<Vec<Button>, BuildError> {
        let n = self.buttons.filter(|n| *n > 0).ok_or(BuildError::NoButtons)?;

        let shared = Arc::new(AtomicI64::new(0));
        let buttons = (0..n)
            .map(|label| {
                // `label` is a fresh binding per iteration
                let count = match self.tally {
                    Tally::Shared => Count::Shared(Arc::clone(&shared)),
                    Tally::Independent => Count::Own(Counter::default()),
                };
                Button { label, count }
            })
            .collect();

        Ok(buttons)
    }
}
