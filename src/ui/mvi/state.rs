//! Base trait for UI state in the MVI loop.

/// Marker trait for UI state objects.
///
/// A state value holds everything the view needs to draw itself. New states
/// are produced by reducers; views only read them.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
