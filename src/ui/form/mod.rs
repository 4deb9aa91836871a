//! Summary form feature module.
//!
//! The form is the whole application: an input with a character counter,
//! Summarize / Clear All buttons, an error banner and the summary panel with
//! its copy button.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Form state and derived rendering rules
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions
//! - `view.rs` - Rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{Focus, FormState, RequestStatus, EMPTY_INPUT_MESSAGE, MAX_INPUT_CHARS};
pub use view::{render_form, SummaryViewport};
