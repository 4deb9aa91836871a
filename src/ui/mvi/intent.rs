//! Base trait for intents in the MVI loop.

/// Marker trait for intent objects.
///
/// An intent is either something the user did (typed a character, pressed
/// Summarize) or something that finished in the background (a response
/// arrived, the copied-reset timer fired). Reducers consume intents.
pub trait Intent: Send + 'static {}
