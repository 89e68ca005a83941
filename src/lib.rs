//! Customer pane: a Zellij plugin for browsing a paginated customer list.
//!
//! The pane shows one page of customers from a read-only HTTP endpoint and
//! lets the user narrow it with a debounced free-text search and a
//! field-scoped filter, and step through pages.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Host calls
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Event handling
//! │  - Input modes                                      │
//! │  - Actions for timers and web requests              │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Query (query/)│   │ Fetch (fetch/)│   │ UI (ui/)      │
//! │ - QueryState  │   │ - URL builder │   │ - Rendering   │
//! │ - apply_edit  │   │ - Sequencing  │   │ - Pagination  │
//! │ - Debouncer   │   │ - Reconcile   │   │ - Theming     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Customer, ResponsePage, DisplayModel (domain/)   │
//! │  - Error types (domain/error)                       │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - File-based OTLP span export                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The library performs no I/O against the backend. Fetches and timers are
//! returned as [`Action`]s and executed by the shim with Zellij's
//! `web_request` and `set_timeout`; their results come back as [`Event`]s.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/customer-pane.wasm" {
//!         backend_url "http://localhost:5000/api/customers"
//!         debounce_ms "300"
//!         date_format "%m/%d/%Y"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod fetch;
pub mod infrastructure;
pub mod observability;
pub mod query;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{CustomerPaneError, Result};
pub use ui::Theme;

use crate::fetch::Endpoint;
use crate::query::DEFAULT_QUIET_PERIOD;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::time::Duration;

/// Default `strftime` pattern for the date of birth column.
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base address of the customer list endpoint. Required.
    pub backend_url: Option<String>,

    /// Quiet period before a search edit is fetched. Default: 300ms
    pub debounce: Duration,

    /// chrono `strftime` pattern for dates of birth. Default: `%m/%d/%Y`
    pub date_format: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme; `~` maps to `/host`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: None,
            debounce: DEFAULT_QUIET_PERIOD,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration with typed fallbacks.
    ///
    /// An unparseable `debounce_ms` or an invalid `date_format` falls back to
    /// its default. Blank values count as unset.
    ///
    /// # Keys
    ///
    /// | key           | default            |
    /// |---------------|--------------------|
    /// | `backend_url` | required           |
    /// | `debounce_ms` | `300`              |
    /// | `date_format` | `%m/%d/%Y`         |
    /// | `theme`       | `catppuccin-mocha` |
    /// | `theme_file`  | none               |
    /// | `trace_level` | `info`             |
    ///
    /// A `date_format` is invalid when chrono cannot render a calendar date
    /// with it, which includes time and zone fields such as `%H` or `%z`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use customer_pane::Config;
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    ///
    /// let mut raw = BTreeMap::new();
    /// raw.insert("backend_url".to_string(), "http://localhost:5000/api/customers".to_string());
    /// raw.insert("debounce_ms".to_string(), "150".to_string());
    /// raw.insert("date_format".to_string(), "%H:%M".to_string());
    ///
    /// let config = Config::from_zellij(&raw);
    /// assert_eq!(config.debounce, Duration::from_millis(150));
    /// assert_eq!(config.date_format, "%m/%d/%Y");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let debounce = get("debounce_ms")
            .and_then(|ms| ms.parse::<u64>().ok())
            .map_or(DEFAULT_QUIET_PERIOD, Duration::from_millis);

        let date_format = get("date_format")
            .filter(|pattern| {
                let valid = is_valid_date_format(pattern);
                if !valid {
                    tracing::warn!(pattern = %pattern, "invalid date_format, using default");
                }
                valid
            })
            .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string());

        Self {
            backend_url: get("backend_url"),
            debounce,
            date_format,
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }

    /// Resolves the configured theme: file, then name, then the default.
    ///
    /// A theme that fails to load is logged and replaced by the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        let loaded = match (&self.theme_file, &self.theme_name) {
            (Some(file), _) => Theme::from_file(infrastructure::expand_tilde(file)),
            (None, Some(name)) => Theme::from_name(name),
            (None, None) => return Theme::default(),
        };

        loaded.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load theme, using default");
            Theme::default()
        })
    }
}

/// A pattern is valid when it renders a calendar date without time or zone
/// fields.
fn is_valid_date_format(pattern: &str) -> bool {
    NaiveDate::from_ymd_opt(2000, 1, 31)
        .and_then(|sample| domain::format_date(sample, pattern))
        .is_some()
}

/// Builds the application state for `config`.
///
/// # Errors
///
/// Returns [`CustomerPaneError::Config`] if `backend_url` is missing or is
/// not an absolute `http`/`https` address.
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!("initializing customer pane plugin");

    let raw = config
        .backend_url
        .as_deref()
        .ok_or_else(|| CustomerPaneError::Config("backend_url is not configured".to_string()))?;
    let endpoint = Endpoint::parse(raw)?;

    Ok(AppState::new(
        endpoint,
        config.debounce,
        config.date_format.clone(),
        config.theme(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn values_are_parsed() {
        let config = Config::from_zellij(&map(&[
            ("backend_url", " http://localhost:5000/api/customers "),
            ("debounce_ms", "150"),
            ("date_format", "%Y-%m-%d"),
            ("theme", "catppuccin-latte"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.backend_url.as_deref(), Some("http://localhost:5000/api/customers"));
        assert_eq!(config.debounce, Duration::from_millis(150));
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert_eq!(config.theme().name, "catppuccin-latte");
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("debounce_ms", "soon"),
            ("date_format", "%Q %"),
            ("theme", "no-such-theme"),
        ]));

        assert_eq!(config.debounce, DEFAULT_QUIET_PERIOD);
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
        assert_eq!(config.theme(), Theme::default());
    }

    #[test]
    fn time_of_day_date_format_falls_back() {
        let config = Config::from_zellij(&map(&[("date_format", "%d/%m/%Y %H:%M")]));
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);

        let config = Config::from_zellij(&map(&[("date_format", "%Y %z")]));
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn initialize_requires_a_backend_url() {
        assert!(matches!(
            initialize(&Config::default()),
            Err(CustomerPaneError::Config(_))
        ));

        let config = Config {
            backend_url: Some("ftp://example.com".to_string()),
            ..Config::default()
        };
        assert!(matches!(initialize(&config), Err(CustomerPaneError::Config(_))));
    }

    #[test]
    fn initialize_builds_state() {
        let config = Config {
            backend_url: Some("https://api.example.com/customers".to_string()),
            ..Config::default()
        };

        let state = initialize(&config).expect("state");

        assert_eq!(state.date_format, DEFAULT_DATE_FORMAT);
        assert!(!state.is_loading());
    }
}
