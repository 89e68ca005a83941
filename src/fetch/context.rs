//! Request context carried through the host's web request round trip.
//!
//! Zellij echoes the context map of a `web_request` back in
//! `Event::WebRequestResult`. We use it to recover the sequence number of the
//! response and, when tracing is active, to link the response span to the span
//! that issued the request.

use std::collections::BTreeMap;

const SEQ_KEY: &str = "customer_pane.seq";
const TRACE_ID_KEY: &str = "customer_pane.trace_id";
const PARENT_SPAN_KEY: &str = "customer_pane.parent_span_id";

/// OpenTelemetry identifiers of the span that issued a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// Trace ID as a 32-character hex string.
    pub trace_id: String,
    /// Span ID as a 16-character hex string.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span IDs of the current tracing span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the span is
    /// not sampled.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Makes the remote span the parent of spans created while the guard lives.
    #[must_use]
    pub fn attach(&self) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;
        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }
}

/// Everything the response handler needs to know about its request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Sequence number of the request, see [`crate::fetch::FetchCoordinator`].
    pub seq: u64,
    /// Issuing span, when tracing was active.
    pub trace: Option<TraceContext>,
}

impl RequestContext {
    /// Context for request `seq`, capturing the current span if traced.
    #[must_use]
    pub fn capture(seq: u64) -> Self {
        Self {
            seq,
            trace: TraceContext::from_current(),
        }
    }

    /// Encodes the context as the string map `web_request` accepts.
    ///
    /// # Returns
    ///
    /// A map with the sequence number and, if present, the trace and parent
    /// span IDs. Keys are namespaced so they never collide with host entries.
    ///
    /// # Example
    ///
    /// ```rust
    /// use customer_pane::fetch::RequestContext;
    ///
    /// let context = RequestContext { seq: 7, trace: None };
    /// let echoed = context.to_map();
    /// assert_eq!(RequestContext::from_map(&echoed), Some(context));
    /// ```
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert(SEQ_KEY.to_string(), self.seq.to_string());
        if let Some(trace) = &self.trace {
            map.insert(TRACE_ID_KEY.to_string(), trace.trace_id.clone());
            map.insert(PARENT_SPAN_KEY.to_string(), trace.parent_span_id.clone());
        }
        map
    }

    /// Rebuilds the context from an echoed map.
    ///
    /// Returns `None` for responses that were not issued by this plugin.
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Option<Self> {
        let seq = map.get(SEQ_KEY)?.parse().ok()?;
        let trace = match (map.get(TRACE_ID_KEY), map.get(PARENT_SPAN_KEY)) {
            (Some(trace_id), Some(parent_span_id)) => Some(TraceContext {
                trace_id: trace_id.clone(),
                parent_span_id: parent_span_id.clone(),
            }),
            _ => None,
        };
        Some(Self { seq, trace })
    }
}
