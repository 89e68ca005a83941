//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → OtlpFileExporter → JSON lines
//! ```
//!
//! Spans land in `~/.local/share/zellij/customer-pane/customer-pane-otlp.json`
//! on the host, rotating at 10 MB with 3 backups. The level is set by the
//! `trace_level` plugin option (default `info`).
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: Span exporter and OTLP JSON encoding
//! - [`file_writer`]: Rotating line writer

pub mod exporter;
pub mod file_writer;
pub mod init;

pub use init::init_tracing;
