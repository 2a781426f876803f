//! Reducer for the counter.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::CounterState;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => state.step(1),
            CounterIntent::Decrement => state.step(-1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverflowPolicy;

    fn run(intents: &[CounterIntent]) -> i64 {
        intents
            .iter()
            .fold(CounterState::default(), |s, i| CounterReducer::reduce(s, *i))
            .read()
    }

    #[test]
    fn starts_at_zero() {
        assert_eq!(CounterState::default().read(), 0);
    }

    #[test]
    fn increment_then_decrement_returns_to_zero() {
        assert_eq!(run(&[CounterIntent::Increment, CounterIntent::Decrement]), 0);
    }

    #[test]
    fn can_go_negative() {
        assert_eq!(run(&[CounterIntent::Decrement; 3]), -3);
    }

    #[test]
    fn saturate_clamps_at_max() {
        let state = CounterState::at(i64::MAX, OverflowPolicy::Saturate);
        let next = CounterReducer::reduce(state, CounterIntent::Increment);
        assert_eq!(next.read(), i64::MAX);
    }

    #[test]
    fn wrap_rolls_over_at_min() {
        let state = CounterState::at(i64::MIN, OverflowPolicy::Wrap);
        let next = CounterReducer::reduce(state, CounterIntent::Decrement);
        assert_eq!(next.read(), i64::MAX);
    }

    #[test]
    fn reject_leaves_state_untouched() {
        let state = CounterState::at(i64::MAX, OverflowPolicy::Reject);
        assert_eq!(CounterReducer::reduce(state, CounterIntent::Increment), state);
    }
}
