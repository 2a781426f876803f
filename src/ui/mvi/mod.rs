//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the traits and the state container used to drive
//! the UI with unidirectional data flow.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Store ──(Reducer)──→ State ──→ observers ──→ View
//!    ↑                                                     │
//!    └─────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Value representation of UI state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Store**: Owns the current state and notifies observers on commit

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{Store, Subscription, Update};
