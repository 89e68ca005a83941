//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim executes them in order through Zellij host calls; the library
//! itself never performs I/O or arms timers.

use crate::fetch::{PageRequest, RequestContext};
use crate::query::TimerTicket;

/// Commands produced by the event handler and executed by the plugin shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Arms a one-shot host timer for a debounce ticket.
    ///
    /// When it fires, the shim reports [`crate::Event::TimerElapsed`].
    ScheduleTimer(TimerTicket),

    /// Sends one `GET` list request.
    ///
    /// The context map must be passed to the host so it is echoed back with
    /// the result, which the shim reports as [`crate::Event::PageFetched`].
    FetchPage {
        /// Parameters and full URL of the request.
        request: PageRequest,
        /// Sequence number and trace identifiers for the round trip.
        context: RequestContext,
    },
}
