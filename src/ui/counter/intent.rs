//! Intents for the counter.

use crate::ui::mvi::Intent;

/// Transitions the counter accepts.
///
/// Both are updaters: the reducer applies them to whatever value is current
/// when the intent is dispatched, not to the value the view was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// `value := value + 1`
    Increment,
    /// `value := value - 1`
    Decrement,
}

impl Intent for CounterIntent {}
