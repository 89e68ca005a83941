//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for everything the plugin shim
//! observes: key presses already mapped to intents, timer expiries, and web
//! request results. It returns whether to re-render and the actions to run.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mount`, `Dispose`
//! - **Input**: `Char`, `Backspace`, `EnterSearch`, `EnterFilterValue`, `LeaveInput`
//! - **Query**: `CycleFilterField`, `PreviousPage`, `NextPage`, `ClearAll`
//! - **Host**: `TimerElapsed`, `PageFetched`
//!
//! Once `Dispose` has been handled every later event is ignored, so a response
//! or timer arriving after teardown never touches state.

use crate::app::modes::InputMode;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::ResponsePage;
use crate::fetch::{FetchOutcome, RequestContext};
use crate::query::Edit;
use crate::ui::pagination::PageDirection;

/// Events triggered by user input or the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Permissions are in place; the first page may be fetched.
    Mount,
    /// Hides the plugin pane.
    CloseFocus,

    /// Focuses the search box.
    EnterSearch,
    /// Focuses the filter value input.
    EnterFilterValue,
    /// Returns to normal mode, keeping what was typed.
    LeaveInput,
    /// Types a character into the focused input.
    Char(char),
    /// Deletes the last character of the focused input.
    Backspace,

    /// Selects the next filter field (`None` → `Email` → `MobileNumber` → `None`).
    CycleFilterField,
    PreviousPage,
    NextPage,
    /// Clears search and filter.
    ClearAll,

    /// A debounce timer armed by [`Action::ScheduleTimer`] expired.
    TimerElapsed,

    /// A list request completed, successfully or not.
    PageFetched {
        /// Context echoed back by the host.
        context: RequestContext,
        /// HTTP status, or a non-2xx code the host uses for transport failures.
        status: u16,
        body: Vec<u8>,
    },

    /// The plugin is being torn down.
    Dispose,
}

/// Processes an event, mutates application state, and returns
/// `(should_render, actions)`.
///
/// # Parameters
///
/// * `state` - Application state to update
/// * `event` - What happened
///
/// # Returns
///
/// * `should_render` - The visible state changed
/// * `actions` - Timers to arm and requests to send, in order
///
/// # Example
///
/// ```rust
/// use customer_pane::{handle_event, initialize, Action, Config, Event};
///
/// let config = Config {
///     backend_url: Some("http://localhost:5000/api/customers".to_string()),
///     ..Config::default()
/// };
/// let mut state = initialize(&config)?;
///
/// let (should_render, actions) = handle_event(&mut state, &Event::Mount)?;
/// assert!(should_render);
/// assert!(matches!(actions.as_slice(), [Action::FetchPage { .. }]));
/// # Ok::<(), customer_pane::CustomerPaneError>(())
/// ```
///
/// # Errors
///
/// Currently infallible; fetch failures are recorded in the display model
/// rather than returned.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    if state.is_disposed() {
        tracing::debug!("ignoring event after dispose");
        return Ok((false, vec![]));
    }

    match event {
        Event::Mount => Ok((true, state.mount())),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::EnterSearch => {
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::EnterFilterValue => {
            state.input_mode = InputMode::FilterValue;
            Ok((true, vec![]))
        }
        Event::LeaveInput => {
            if state.input_mode == InputMode::Normal {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            let actions = match state.input_mode {
                InputMode::Normal => return Ok((false, vec![])),
                InputMode::Search => {
                    let mut text = state.query.search_term.clone();
                    text.push(*c);
                    tracing::trace!(query = %text, char = %c, "search text updated");
                    state.type_search(text)
                }
                InputMode::FilterValue => {
                    let mut value = state.query.filter_value.clone();
                    value.push(*c);
                    state.apply(Edit::FilterValue(value))
                }
            };
            Ok((true, actions))
        }
        Event::Backspace => {
            let actions = match state.input_mode {
                InputMode::Normal => return Ok((false, vec![])),
                InputMode::Search => {
                    let mut text = state.query.search_term.clone();
                    if text.pop().is_none() {
                        return Ok((false, vec![]));
                    }
                    state.type_search(text)
                }
                InputMode::FilterValue => {
                    let mut value = state.query.filter_value.clone();
                    if value.pop().is_none() {
                        return Ok((false, vec![]));
                    }
                    state.apply(Edit::FilterValue(value))
                }
            };
            Ok((true, actions))
        }
        Event::CycleFilterField => {
            let next = state.query.filter_field.next();
            tracing::debug!(field = %next, "filter field selected");
            Ok((true, state.apply(Edit::FilterField(next))))
        }
        Event::PreviousPage => page_step(state, PageDirection::Previous),
        Event::NextPage => page_step(state, PageDirection::Next),
        Event::ClearAll => Ok((true, state.clear_all())),
        Event::TimerElapsed => {
            let actions = state.settle_search();
            Ok((!actions.is_empty(), actions))
        }
        Event::PageFetched { context, status, body } => {
            let _trace_guard = context.trace.as_ref().and_then(|trace| trace.attach());
            let _span = tracing::info_span!("page_fetched", seq = context.seq, status).entered();

            let result = ResponsePage::from_response(*status, body);
            let outcome = state.receive_page(context.seq, result);
            Ok((outcome != FetchOutcome::Discarded, vec![]))
        }
        Event::Dispose => {
            state.dispose();
            Ok((false, vec![]))
        }
    }
}

fn page_step(state: &mut AppState, direction: PageDirection) -> Result<(bool, Vec<Action>)> {
    let actions = state.step_page(direction);
    Ok((!actions.is_empty(), actions))
}

/// Event name without payload, keeping response bodies out of span fields.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Mount => "Mount",
        Event::CloseFocus => "CloseFocus",
        Event::EnterSearch => "EnterSearch",
        Event::EnterFilterValue => "EnterFilterValue",
        Event::LeaveInput => "LeaveInput",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::CycleFilterField => "CycleFilterField",
        Event::PreviousPage => "PreviousPage",
        Event::NextPage => "NextPage",
        Event::ClearAll => "ClearAll",
        Event::TimerElapsed => "TimerElapsed",
        Event::PageFetched { .. } => "PageFetched",
        Event::Dispose => "Dispose",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::Endpoint;
    use crate::query::FilterField;
    use crate::ui::theme::Theme;
    use std::time::Duration;

    fn mounted() -> AppState {
        let mut state = AppState::new(
            Endpoint::parse("http://localhost:5000/api/customers").expect("valid endpoint"),
            Duration::from_millis(300),
            "%m/%d/%Y".to_string(),
            Theme::default(),
        );
        handle_event(&mut state, &Event::Mount).expect("mount");
        state
    }

    fn fetches(actions: &[Action]) -> Vec<String> {
        actions
            .iter()
            .filter_map(|action| match action {
                Action::FetchPage { request, .. } => Some(request.url.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn chars_in_normal_mode_are_ignored() {
        let mut state = mounted();

        let (render, actions) = handle_event(&mut state, &Event::Char('x')).expect("char");

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.query.search_term, "");
    }

    #[test]
    fn filter_value_keystrokes_fetch_immediately() {
        let mut state = mounted();
        handle_event(&mut state, &Event::CycleFilterField).expect("cycle");
        assert_eq!(state.query.filter_field, FilterField::Email);

        handle_event(&mut state, &Event::EnterFilterValue).expect("focus");
        let (_, actions) = handle_event(&mut state, &Event::Char('a')).expect("char");

        let urls = fetches(&actions);
        assert_eq!(urls.len(), 1);
        assert!(urls[0].contains("filterField=email"));
        assert!(urls[0].contains("filterValue=a"));
    }

    #[test]
    fn backspace_on_empty_input_does_nothing() {
        let mut state = mounted();
        handle_event(&mut state, &Event::EnterSearch).expect("focus");

        let (render, actions) = handle_event(&mut state, &Event::Backspace).expect("backspace");

        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn leave_input_keeps_typed_text() {
        let mut state = mounted();
        handle_event(&mut state, &Event::EnterSearch).expect("focus");
        handle_event(&mut state, &Event::Char('j')).expect("char");
        handle_event(&mut state, &Event::LeaveInput).expect("leave");

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.query.search_term, "j");
    }

    #[test]
    fn responses_without_a_newer_request_render() {
        let mut state = mounted();
        let body = br#"{"customers":[],"totalPages":1,"total":0}"#.to_vec();

        let (render, _) = handle_event(
            &mut state,
            &Event::PageFetched {
                context: RequestContext { seq: 1, trace: None },
                status: 200,
                body,
            },
        )
        .expect("fetched");

        assert!(render);
        assert!(!state.is_loading());
    }

    fn fetched(state: &mut AppState, seq: u64, status: u16, body: &[u8]) {
        handle_event(
            state,
            &Event::PageFetched {
                context: RequestContext { seq, trace: None },
                status,
                body: body.to_vec(),
            },
        )
        .expect("fetched");
    }

    #[test]
    fn query_keys_before_mount_issue_no_request() {
        let mut state = AppState::new(
            Endpoint::parse("http://localhost:5000/api/customers").expect("valid endpoint"),
            Duration::from_millis(300),
            "%m/%d/%Y".to_string(),
            Theme::default(),
        );

        let (_, actions) = handle_event(&mut state, &Event::CycleFilterField).expect("cycle");
        assert!(fetches(&actions).is_empty());
        handle_event(&mut state, &Event::EnterFilterValue).expect("focus");
        let (_, actions) = handle_event(&mut state, &Event::Char('a')).expect("char");
        assert!(fetches(&actions).is_empty());

        assert!(!state.is_loading());
        assert_eq!(state.query.filter_value, "a");
    }

    #[test]
    fn older_success_cannot_replace_newer_failure() {
        let mut state = mounted();
        fetched(&mut state, 1, 200, br#"{"customers":[{"s_no":1,"name_of_customer":"A"}],"totalPages":1,"total":1}"#);
        handle_event(&mut state, &Event::EnterFilterValue).expect("focus");
        handle_event(&mut state, &Event::Char('a')).expect("char");
        handle_event(&mut state, &Event::Char('b')).expect("char");

        fetched(&mut state, 3, 500, b"internal error");
        fetched(&mut state, 2, 200, br#"{"customers":[{"s_no":10,"name_of_customer":"B"}],"totalPages":1,"total":1}"#);

        assert_eq!(state.query.filter_value, "ab");
        assert_eq!(state.display.customers[0].serial_number, 1);
        assert!(state.display.last_error.is_some());
        assert!(!state.is_loading());
    }

    #[test]
    fn nothing_happens_after_dispose() {
        let mut state = mounted();
        handle_event(&mut state, &Event::Dispose).expect("dispose");

        for event in [Event::EnterSearch, Event::NextPage, Event::TimerElapsed, Event::CloseFocus] {
            let (render, actions) = handle_event(&mut state, &event).expect("event");
            assert!(!render);
            assert!(actions.is_empty());
        }
        assert_eq!(state.input_mode, InputMode::Normal);
    }
}
