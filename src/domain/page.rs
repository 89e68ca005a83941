//! Listing pages: the wire response and the model the table renders from.
//!
//! A [`ResponsePage`] is decoded per fetch and is transient. The
//! [`DisplayModel`] holds the latest successfully reconciled page and is
//! replaced wholesale, never merged.

use crate::domain::error::{CustomerPaneError, Result};
use crate::domain::Customer;
use serde::Deserialize;

/// Longest slice of an error body kept for logs and the status line.
const ERROR_BODY_PREVIEW: usize = 200;

/// One decoded response of the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResponsePage {
    /// Customers on this page, at most `limit` of them.
    pub customers: Vec<Customer>,
    /// Page count for the current query; at least 1 after decoding.
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    /// Customers matching the query across all pages.
    #[serde(rename = "total")]
    pub total_records: u64,
}

impl ResponsePage {
    /// Decodes a list response from its HTTP status and body.
    ///
    /// Non-2xx statuses become [`CustomerPaneError::Transport`]; bodies that do
    /// not match the expected shape become [`CustomerPaneError::Decode`]. A
    /// `totalPages` of 0 is normalized to 1 so pagination always has a page.
    ///
    /// # Parameters
    ///
    /// * `status` - HTTP status reported by the host
    /// * `body` - Raw response body
    ///
    /// # Example
    ///
    /// ```rust
    /// use customer_pane::domain::ResponsePage;
    ///
    /// let page = ResponsePage::from_response(200, br#"{"customers":[],"totalPages":0,"total":0}"#)?;
    /// assert!(page.customers.is_empty());
    /// assert_eq!(page.total_pages, 1);
    ///
    /// assert!(ResponsePage::from_response(404, b"not found").is_err());
    /// # Ok::<(), customer_pane::CustomerPaneError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a fetch failure when the status is not successful or the body
    /// cannot be decoded.
    pub fn from_response(status: u16, body: &[u8]) -> Result<Self> {
        if !(200..300).contains(&status) {
            let text = String::from_utf8_lossy(body);
            let message: String = text.chars().take(ERROR_BODY_PREVIEW).collect();
            return Err(CustomerPaneError::Transport { status, message });
        }

        let mut page: Self = serde_json::from_slice(body)?;
        if page.total_pages == 0 {
            tracing::debug!(total_records = page.total_records, "normalizing totalPages 0 to 1");
            page.total_pages = 1;
        }
        Ok(page)
    }
}

/// The page currently shown in the table plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayModel {
    pub customers: Vec<Customer>,
    pub total_pages: u32,
    pub total_records: u64,

    /// Description of the most recent failed fetch, cleared by the next success.
    ///
    /// Kept apart from the page data so a failure never touches what is shown.
    pub last_error: Option<String>,
}

impl Default for DisplayModel {
    fn default() -> Self {
        Self {
            customers: Vec::new(),
            total_pages: 1,
            total_records: 0,
            last_error: None,
        }
    }
}

impl DisplayModel {
    /// Replaces the shown page with `page` in a single assignment.
    pub fn replace(&mut self, page: ResponsePage) {
        *self = Self {
            customers: page.customers,
            total_pages: page.total_pages,
            total_records: page.total_records,
            last_error: None,
        };
    }

    /// Records a failed fetch without touching the shown page.
    pub fn record_failure(&mut self, error: &CustomerPaneError) {
        self.last_error = Some(error.to_string());
    }
}
