//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent user actions such as button activations. A view binds
/// an intent value to each actionable element; activating the element
/// dispatches that value to the store.
pub trait Intent: Clone + 'static {}
