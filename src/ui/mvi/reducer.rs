//! Reducer trait for the MVI loop.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// All state transitions of a feature go through its reducer. Reducers never
/// perform I/O: network calls, clipboard writes and timers are issued by the
/// caller after inspecting the new state.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
