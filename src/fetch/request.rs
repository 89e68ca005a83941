//! List request construction.
//!
//! The base address is validated once into an [`Endpoint`] at startup and
//! handed to the coordinator; requests never consult global state.
//!
//! # Wire Format
//!
//! ```text
//! GET {backend_url}?page=1&limit=10&search=anna&filterField=email&filterValue=gmail
//! ```
//!
//! All values are percent-encoded. An empty search or filter is still sent,
//! as an empty value.

use crate::domain::error::{CustomerPaneError, Result};
use crate::query::{FilterField, QueryState};

/// Validated base address of the customer list endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    /// Validates a configured base address.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerPaneError::Config`] if the address is empty or is not
    /// an `http://` or `https://` URL with a host.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .ok_or_else(|| {
                CustomerPaneError::Config(format!(
                    "backend_url must start with http:// or https://, got {trimmed:?}"
                ))
            })?;

        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        if host.is_empty() {
            return Err(CustomerPaneError::Config(format!(
                "backend_url has no host: {trimmed:?}"
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The validated address, as configured.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends percent-encoded query pairs, extending an existing query string.
    ///
    /// A fragment on the base address stays at the end of the result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use customer_pane::fetch::Endpoint;
    ///
    /// let endpoint = Endpoint::parse("http://localhost:5000/api/customers?tenant=a")?;
    /// let url = endpoint.with_query(&[("search", "ann lee".to_string())]);
    /// assert_eq!(url, "http://localhost:5000/api/customers?tenant=a&search=ann%20lee");
    /// # Ok::<(), customer_pane::CustomerPaneError>(())
    /// ```
    #[must_use]
    pub fn with_query(&self, pairs: &[(&str, String)]) -> String {
        let (base, fragment) = match self.0.split_once('#') {
            Some((base, fragment)) => (base, Some(fragment)),
            None => (self.0.as_str(), None),
        };

        let encoded = pairs
            .iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        let separator = if !base.contains('?') {
            "?"
        } else if base.ends_with('?') || base.ends_with('&') {
            ""
        } else {
            "&"
        };

        let mut url = format!("{base}{separator}{encoded}");
        if let Some(fragment) = fragment {
            url.push('#');
            url.push_str(fragment);
        }
        url
    }
}

/// One issued list request, tagged with its sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Sequence number; higher means issued later.
    pub seq: u64,
    pub page: u32,
    pub limit: u32,
    /// Settled search term (never the raw, still-typing text).
    pub search: String,
    pub filter_field: FilterField,
    pub filter_value: String,
    /// Full request address including the query string.
    pub url: String,
}

impl PageRequest {
    /// Captures the fetch parameters of `query` at the moment of issue.
    ///
    /// # Parameters
    ///
    /// * `seq` - Sequence number assigned by the coordinator
    /// * `query` - Query state to snapshot
    /// * `endpoint` - Base address the parameters are appended to
    #[must_use]
    pub fn new(seq: u64, query: &QueryState, endpoint: &Endpoint) -> Self {
        let mut request = Self {
            seq,
            page: query.page,
            limit: query.limit,
            search: query.debounced_search_term.clone(),
            filter_field: query.filter_field,
            filter_value: query.filter_value.clone(),
            url: String::new(),
        };
        request.url = endpoint.with_query(&request.query_pairs());
        request
    }

    /// Request parameters in wire order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("search", self.search.clone()),
            ("filterField", self.filter_field.as_param().to_string()),
            ("filterValue", self.filter_value.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> Endpoint {
        Endpoint::parse("https://api.example.com/customers").expect("valid endpoint")
    }

    #[test]
    fn rejects_non_http_addresses() {
        assert!(Endpoint::parse("").is_err());
        assert!(Endpoint::parse("ftp://example.com").is_err());
        assert!(Endpoint::parse("http://").is_err());
        assert!(Endpoint::parse("  http://localhost:5000/api  ").is_ok());
    }

    #[test]
    fn builds_query_string_from_settled_state() {
        let query = QueryState {
            page: 2,
            search_term: "anna le".to_string(),
            debounced_search_term: "anna".to_string(),
            filter_field: FilterField::Email,
            filter_value: "a+b@example.com".to_string(),
            ..QueryState::default()
        };

        let request = PageRequest::new(9, &query, &endpoint());

        assert_eq!(request.seq, 9);
        assert_eq!(request.search, "anna");
        assert_eq!(
            request.url,
            "https://api.example.com/customers?page=2&limit=10&search=anna\
             &filterField=email&filterValue=a%2Bb%40example.com"
        );
    }

    #[test]
    fn empty_filter_is_sent_as_empty_params() {
        let request = PageRequest::new(1, &QueryState::default(), &endpoint());

        assert!(request.url.ends_with("search=&filterField=&filterValue="));
    }

    #[test]
    fn extends_existing_query_string() {
        let endpoint = Endpoint::parse("http://localhost:5000/api?tenant=7").expect("valid");
        let url = endpoint.with_query(&[("page", "1".to_string())]);

        assert_eq!(url, "http://localhost:5000/api?tenant=7&page=1");
    }

    #[test]
    fn keeps_fragment_last() {
        let endpoint = Endpoint::parse("http://localhost/api#v2").expect("valid");
        let url = endpoint.with_query(&[("page", "3".to_string())]);

        assert_eq!(url, "http://localhost/api?page=3#v2");
    }
}
