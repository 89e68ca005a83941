//! Fetching list pages and reconciling them into the display model.
//!
//! The library never performs I/O itself. [`FetchCoordinator::begin`] returns
//! a [`PageRequest`] that the plugin shim sends with Zellij's `web_request`,
//! attaching a [`RequestContext`]; the echoed result comes back as an event
//! and is handed to [`FetchCoordinator::reconcile`].
//!
//! # Modules
//!
//! - [`request`]: Endpoint validation and query-string construction
//! - [`context`]: Sequence number and trace propagation through the host
//! - [`coordinator`]: Sequencing, loading flag, and reconciliation

pub mod context;
pub mod coordinator;
pub mod request;

pub use context::{RequestContext, TraceContext};
pub use coordinator::{FetchCoordinator, FetchOutcome};
pub use request::{Endpoint, PageRequest};
