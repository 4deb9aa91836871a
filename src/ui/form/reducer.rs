//! Reducer for the summary form.

use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{Focus, FormState, RequestStatus, EMPTY_INPUT_MESSAGE};

/// Reducer for summary form state transitions.
pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::InsertChar(ch) => {
                if state.remaining_capacity() > 0 {
                    state.input.push(ch);
                }
                state
            }

            FormIntent::Paste(text) => {
                let room = state.remaining_capacity();
                state.input.extend(text.chars().take(room));
                state
            }

            FormIntent::Backspace => {
                state.input.pop();
                state
            }

            FormIntent::Submit => {
                if !state.has_text() {
                    // An in-flight request keeps ownership of the status.
                    if !state.is_loading() {
                        state.status = RequestStatus::Failed {
                            message: EMPTY_INPUT_MESSAGE.to_string(),
                        };
                    }
                    return state;
                }
                state.last_token += 1;
                state.status = RequestStatus::Loading {
                    token: state.last_token,
                    animation_tick: 0,
                };
                state
            }

            FormIntent::Completed { token, result } => {
                if state.loading_token() != Some(token) {
                    return state;
                }
                state.status = match result {
                    Ok(summary) => {
                        state.summary = summary;
                        state.summary_scroll = 0;
                        RequestStatus::Succeeded
                    }
                    Err(message) => RequestStatus::Failed { message },
                };
                state
            }

            FormIntent::CopySucceeded => {
                if state.summary.is_empty() {
                    return state;
                }
                state.copied = true;
                state.copy_generation += 1;
                state
            }

            FormIntent::CopyReset { generation } => {
                if generation == state.copy_generation {
                    state.copied = false;
                }
                state
            }

            FormIntent::ClearAll => {
                state.input.clear();
                state.summary.clear();
                state.summary_scroll = 0;
                state.copied = false;
                if !state.is_loading() {
                    state.status = RequestStatus::Idle;
                }
                if state.focus == Focus::Copy {
                    state.focus = Focus::Input;
                }
                state
            }

            FormIntent::ScrollSummary { delta, max_scroll } => {
                if state.summary.is_empty() || state.is_loading() {
                    return state;
                }
                let target = i64::from(state.summary_scroll) + i64::from(delta);
                state.summary_scroll = target.clamp(0, i64::from(max_scroll)) as u16;
                state
            }

            FormIntent::FocusNext => {
                state.focus = step_focus(&state, 1);
                state
            }

            FormIntent::FocusPrev => {
                state.focus = step_focus(&state, -1);
                state
            }

            FormIntent::AnimationTick => {
                if let RequestStatus::Loading {
                    token,
                    animation_tick,
                } = state.status
                {
                    state.status = RequestStatus::Loading {
                        token,
                        animation_tick: animation_tick.wrapping_add(1),
                    };
                }
                state
            }
        }
    }
}

/// Focus neighbour of the current control, wrapping at both ends.
fn step_focus(state: &FormState, direction: i32) -> Focus {
    let order = state.focus_order();
    let len = order.len();
    let current = order
        .iter()
        .position(|focus| *focus == state.focus)
        .unwrap_or(0);
    let next = if direction.is_negative() {
        if current == 0 {
            len - 1
        } else {
            current - 1
        }
    } else if current + 1 >= len {
        0
    } else {
        current + 1
    };
    order[next]
}
