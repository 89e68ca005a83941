//! Error types for the customer-pane plugin.
//!
//! This module defines the centralized error type [`CustomerPaneError`] and a type
//! alias [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.
//!
//! Fetch failures of any kind (transport or decoding) are caught at the fetch
//! coordinator boundary and never reach the rendering layer; see
//! [`crate::fetch::FetchCoordinator::reconcile`].

use thiserror::Error;

/// The main error type for customer-pane operations.
///
/// # Examples
///
/// ```
/// use customer_pane::domain::CustomerPaneError;
///
/// fn require_backend(url: Option<&str>) -> Result<&str, CustomerPaneError> {
///     url.ok_or_else(|| CustomerPaneError::Config("backend_url is not set".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum CustomerPaneError {
    /// The list endpoint could not be reached or answered with a non-success status.
    ///
    /// Zellij reports host-side request failures (DNS, refused connection,
    /// timeouts) as a response with an error status and the reason in the body,
    /// so both cases land here.
    #[error("Transport error (status {status}): {message}")]
    Transport {
        /// HTTP status code reported for the request.
        status: u16,
        /// Response body or host error description, truncated for logging.
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when `backend_url` is absent or is not an http(s) address.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Occurs when a custom theme file cannot be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for customer-pane operations.
pub type Result<T> = std::result::Result<T, CustomerPaneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_and_json_errors_convert() {
        let decode = serde_json::from_str::<u32>("nope").unwrap_err();
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "theme.toml");

        assert!(matches!(CustomerPaneError::from(decode), CustomerPaneError::Decode(_)));
        assert_eq!(CustomerPaneError::from(io).to_string(), "IO error: theme.toml");
    }

    #[test]
    fn transport_message_includes_status() {
        let err = CustomerPaneError::Transport {
            status: 404,
            message: "not found".to_string(),
        };

        assert_eq!(err.to_string(), "Transport error (status 404): not found");
    }
}
