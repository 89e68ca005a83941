//! Query-state synchronization: what to fetch and when.
//!
//! # Modules
//!
//! - [`state`]: The current search, filter, and page selection
//! - [`edit`]: Pure transitions encoding the page-reset rule
//! - [`debounce`]: Trailing-edge debouncer for search keystrokes
//!
//! ```text
//! keystroke ─► Edit::SearchText ─► Debouncer::schedule ─► (quiet period) ─► Edit::SearchSettled ─┐
//! filter/page input ─► Edit::{FilterField, FilterValue, Page} ───────────────────────────────────┤
//!                                                                                                ▼
//!                                                        apply_edit ─► Transition { refetch } ─► fetch
//! ```

pub mod debounce;
pub mod edit;
pub mod state;

pub use debounce::{Debouncer, TimerTicket, DEFAULT_QUIET_PERIOD};
pub use edit::{apply_edit, Edit, Transition};
pub use state::{FilterField, QueryState, PAGE_LIMIT};
