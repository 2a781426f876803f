//! Counter feature module.
//!
//! One integer, two transitions, and a view that renders the value next to
//! a `+` and a `-` button.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - The counter value and its overflow policy
//! - `intent.rs` - Increment / Decrement
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `view.rs` - Tree description built from the current value

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;
pub use view::{counter_view, DECREMENT_LABEL, INCREMENT_LABEL};
