//! Issues list requests and reconciles their results into the display model.
//!
//! Every request gets a sequence number one higher than the previous one.
//! Responses may arrive in any order:
//!
//! - a response older than the newest resolved one (applied or failed) is
//!   discarded
//! - any other success replaces the display model wholesale
//! - any other failure is logged and recorded, leaving the shown page as is
//!
//! The loading flag is raised by [`FetchCoordinator::begin`] and lowered, as
//! the last step of reconciliation, once the newest issued request has an
//! outcome.
//!
//! # Example
//!
//! ```rust
//! use customer_pane::domain::{CustomerPaneError, DisplayModel};
//! use customer_pane::fetch::{Endpoint, FetchCoordinator, FetchOutcome};
//! use customer_pane::query::QueryState;
//!
//! let mut coordinator = FetchCoordinator::new(Endpoint::parse("http://localhost:5000/api/customers")?);
//! let mut display = DisplayModel::default();
//!
//! let request = coordinator.begin(&QueryState::default());
//! assert!(coordinator.is_loading());
//!
//! let failure = CustomerPaneError::Transport { status: 503, message: "unavailable".to_string() };
//! let outcome = coordinator.reconcile(request.seq, Err(failure), &mut display);
//! assert_eq!(outcome, FetchOutcome::Failed);
//! assert!(!coordinator.is_loading());
//! # Ok::<(), CustomerPaneError>(())
//! ```

use crate::domain::error::Result;
use crate::domain::{DisplayModel, ResponsePage};
use crate::fetch::request::{Endpoint, PageRequest};
use crate::query::QueryState;

/// What reconciliation did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page replaced the display model.
    Applied,
    /// The fetch failed; the display model kept its page.
    Failed,
    /// A newer response was already resolved; this one was dropped.
    Discarded,
}

/// Owns request sequencing and the loading flag.
#[derive(Debug, Clone)]
pub struct FetchCoordinator {
    endpoint: Endpoint,
    last_issued: u64,
    /// Highest sequence number that was applied or failed.
    last_resolved: u64,
    loading: bool,
}

impl FetchCoordinator {
    /// Creates an idle coordinator for `endpoint`. The first request gets
    /// sequence number 1.
    #[must_use]
    pub const fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            last_issued: 0,
            last_resolved: 0,
            loading: false,
        }
    }

    /// Raises the loading flag and builds the next request for `query`.
    ///
    /// # Returns
    ///
    /// The request to send. Its `seq` must travel with it so the response can
    /// be passed back to [`FetchCoordinator::reconcile`].
    pub fn begin(&mut self, query: &QueryState) -> PageRequest {
        self.last_issued += 1;
        self.loading = true;

        let request = PageRequest::new(self.last_issued, query, &self.endpoint);
        tracing::debug!(
            seq = request.seq,
            page = request.page,
            search = %request.search,
            filter_field = request.filter_field.as_param(),
            filter_value = %request.filter_value,
            "issuing list request"
        );
        request
    }

    /// Folds the result of request `seq` into `display`.
    ///
    /// # Parameters
    ///
    /// * `seq` - Sequence number of the request that completed
    /// * `result` - Decoded page, or the transport/decode failure
    /// * `display` - Display model to update
    ///
    /// # Returns
    ///
    /// * [`FetchOutcome::Discarded`] - `seq` is not newer than the last
    ///   resolved request, or was never issued; nothing changes
    /// * [`FetchOutcome::Applied`] - the page replaced `display`
    /// * [`FetchOutcome::Failed`] - the error was logged and recorded in
    ///   `display.last_error`; the shown page is untouched
    pub fn reconcile(
        &mut self,
        seq: u64,
        result: Result<ResponsePage>,
        display: &mut DisplayModel,
    ) -> FetchOutcome {
        let _span = tracing::debug_span!("reconcile", seq, last_resolved = self.last_resolved).entered();

        if seq <= self.last_resolved || seq > self.last_issued {
            tracing::debug!(
                last_issued = self.last_issued,
                ok = result.is_ok(),
                "discarding out-of-order response"
            );
            return FetchOutcome::Discarded;
        }

        let outcome = match result {
            Ok(page) => {
                tracing::debug!(
                    customers = page.customers.len(),
                    total_pages = page.total_pages,
                    total_records = page.total_records,
                    "applying list response"
                );
                display.replace(page);
                FetchOutcome::Applied
            }
            Err(e) => {
                tracing::error!(error = %e, "error fetching customers");
                display.record_failure(&e);
                FetchOutcome::Failed
            }
        };
        self.last_resolved = seq;

        if seq == self.last_issued {
            self.loading = false;
        }
        outcome
    }

    /// Whether the newest issued request is still outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Sequence number of the most recently issued request (0 before the first).
    #[must_use]
    pub const fn last_issued(&self) -> u64 {
        self.last_issued
    }

    /// Base address requests are built against.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}
