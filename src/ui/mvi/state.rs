//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Values (Clone to derive new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq decides whether a transition committed a change)
pub trait UiState: Clone + PartialEq + Default + 'static {}
