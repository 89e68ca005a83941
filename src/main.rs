//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the `customer_pane` library and Zellij. It
//! maps host events to library events and executes the returned actions with
//! host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState`
//! 2. **Permissions**: Request `WebAccess`; once granted, mount (first fetch)
//! 3. **Update**: Map events, delegate to `handle_event`, execute actions
//! 4. **Render**: Call the library renderer
//! 5. **Close**: `BeforeClose` disposes the state
//!
//! # Event Mapping
//!
//! - `Key` → input or command event, depending on input mode
//! - `Timer` → `Event::TimerElapsed`
//! - `WebRequestResult` → `Event::PageFetched`
//! - `BeforeClose` → `Event::Dispose`
//!
//! # Keybindings
//!
//! In normal mode:
//! - `/`: Edit search
//! - `f`: Cycle filter field
//! - `v`: Edit filter value
//! - `h`/`Left`/`PageUp`: Previous page
//! - `l`/`Right`/`PageDown`: Next page
//! - `c`: Clear search and filter
//! - `q`: Close plugin
//!
//! While typing:
//! - characters edit the focused input
//! - `Enter`/`Esc`: Back to normal mode
//! - `PageUp`/`PageDown`: Change page

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use customer_pane::fetch::RequestContext;
use customer_pane::{handle_event, Action, AppState, Config, Event, InputMode, Theme};

register_plugin!(State);

/// Plugin state wrapper.
#[derive(Default)]
struct State {
    /// Application state, absent when configuration is invalid.
    app: Option<AppState>,

    /// Why the plugin cannot run, shown instead of the table.
    startup_error: Option<String>,

    /// Theme for notices rendered without an `AppState`.
    theme: Theme,

    /// Web access has been granted and the first fetch issued.
    mounted: bool,
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        customer_pane::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        self.theme = config.theme();
        match customer_pane::initialize(&config) {
            Ok(app) => self.app = Some(app),
            Err(e) => {
                tracing::error!(error = %e, "plugin configuration is invalid");
                self.startup_error = Some(e.to_string());
                return;
            }
        }

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
            EventType::BeforeClose,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(Event::CloseFocus) => Event::CloseFocus,
                Some(_) if !self.mounted || self.startup_error.is_some() => {
                    tracing::trace!("ignoring key until web access is granted");
                    return false;
                }
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::TimerElapsed,
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                match self.map_permission_result(permissions) {
                    Some(event) => event,
                    None => return true,
                }
            }
            zellij_tile::prelude::Event::BeforeClose => Event::Dispose,
            _ => return false,
        };

        let Some(app) = self.app.as_mut() else {
            if our_event == Event::CloseFocus {
                Self::execute_action(Action::CloseFocus);
            }
            return false;
        };

        match handle_event(app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        if let Some(error) = &self.startup_error {
            customer_pane::ui::render_notice("Customer pane unavailable", error, &self.theme, cols);
            return;
        }
        match &self.app {
            Some(app) if self.mounted => customer_pane::ui::render(app, rows, cols),
            _ => customer_pane::ui::render_notice(
                "Waiting for permission",
                "Grant web access to load customers",
                &self.theme,
                cols,
            ),
        }
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            zellij_tile::prelude::Event::BeforeClose => "BeforeClose".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn input_mode(&self) -> InputMode {
        self.app.as_ref().map_or(InputMode::Normal, |app| app.input_mode)
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        match key.bare_key {
            BareKey::PageUp => return Some(Event::PreviousPage),
            BareKey::PageDown => return Some(Event::NextPage),
            _ => {}
        }

        if self.input_mode().is_typing() {
            return match key.bare_key {
                BareKey::Esc | BareKey::Enter => Some(Event::LeaveInput),
                BareKey::Backspace => Some(Event::Backspace),
                BareKey::Char(c) if key.has_no_modifiers() => Some(Event::Char(c)),
                _ => None,
            };
        }

        match key.bare_key {
            BareKey::Char('/') => Some(Event::EnterSearch),
            BareKey::Char('f') => Some(Event::CycleFilterField),
            BareKey::Char('v') => Some(Event::EnterFilterValue),
            BareKey::Char('h') | BareKey::Left => Some(Event::PreviousPage),
            BareKey::Char('l') | BareKey::Right => Some(Event::NextPage),
            BareKey::Char('c') => Some(Event::ClearAll),
            BareKey::Char('q') => Some(Event::CloseFocus),
            _ => None,
        }
    }

    /// Mounts on the first grant. Returns `None` (just re-render) otherwise.
    fn map_permission_result(&mut self, permissions: PermissionStatus) -> Option<Event> {
        match permissions {
            PermissionStatus::Granted if !self.mounted => {
                tracing::debug!("web access granted - mounting");
                self.mounted = true;
                Some(Event::Mount)
            }
            PermissionStatus::Granted => None,
            PermissionStatus::Denied => {
                tracing::warn!("web access denied - no customers can be loaded");
                self.startup_error = Some("Web access permission was denied".to_string());
                None
            }
        }
    }

    fn map_web_request_result(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(context) = RequestContext::from_map(context) else {
            tracing::debug!(status, "ignoring web request result without a sequence number");
            return None;
        };
        Some(Event::PageFetched { context, status, body })
    }

    /// Executes an action through Zellij host calls.
    #[tracing::instrument(level = "debug", skip(action))]
    fn execute_action(action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::ScheduleTimer(ticket) => {
                tracing::trace!(generation = ticket.generation, "arming debounce timer");
                set_timeout(ticket.delay.as_secs_f64());
            }
            Action::FetchPage { request, context } => {
                tracing::debug!(seq = request.seq, url = %request.url, "sending list request");
                web_request(
                    request.url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    context.to_map(),
                );
            }
        }
    }
}
