use crate::config::OverflowPolicy;
use crate::ui::mvi::UiState;

/// The counter value together with the policy that governs its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    value: i64,
    overflow: OverflowPolicy,
}

impl UiState for CounterState {}

impl CounterState {
    /// A fresh counter at 0.
    pub fn new(overflow: OverflowPolicy) -> Self {
        Self { value: 0, overflow }
    }

    /// A counter starting at `value`.
    pub fn at(value: i64, overflow: OverflowPolicy) -> Self {
        Self { value, overflow }
    }

    pub fn read(&self) -> i64 {
        self.value
    }

    pub fn overflow(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Move the value by `delta` under the overflow policy.
    pub(super) fn step(self, delta: i64) -> Self {
        let value = match self.overflow {
            OverflowPolicy::Saturate => self.value.saturating_add(delta),
            OverflowPolicy::Wrap => self.value.wrapping_add(delta),
            OverflowPolicy::Reject => self.value.checked_add(delta).unwrap_or(self.value),
        };
        Self { value, ..self }
    }
}
