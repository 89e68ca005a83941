//! The query the view is currently showing.
//!
//! [`QueryState`] is the single source of truth for what to fetch. It is only
//! changed through [`crate::query::apply_edit`], which encodes the
//! page-reset rule.

use std::fmt;

/// Number of customers requested per page. Fixed for the session.
pub const PAGE_LIMIT: u32 = 10;

/// The customer attribute a filter value is matched against.
///
/// Exactly one field may be active at a time; [`FilterField::None`] disables
/// filtering and makes the filter value meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    /// No filter; sent as an empty `filterField`.
    #[default]
    None,
    Email,
    MobileNumber,
}

impl FilterField {
    /// Value sent as the `filterField` request parameter.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Email => "email",
            Self::MobileNumber => "mobile_number",
        }
    }

    /// Human-readable label for the filter bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Select Field",
            Self::Email => "Email",
            Self::MobileNumber => "Mobile Number",
        }
    }

    /// Next field in selection order, wrapping back to [`FilterField::None`].
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::None => Self::Email,
            Self::Email => Self::MobileNumber,
            Self::MobileNumber => Self::None,
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Search, filter, and page selection for the list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// One-based page number.
    pub page: u32,
    pub limit: u32,

    /// Raw text in the search box, updated on every keystroke.
    pub search_term: String,

    /// Settled search text; the only search value ever sent.
    pub debounced_search_term: String,

    pub filter_field: FilterField,
    pub filter_value: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            limit: PAGE_LIMIT,
            search_term: String::new(),
            debounced_search_term: String::new(),
            filter_field: FilterField::None,
            filter_value: String::new(),
        }
    }
}

impl QueryState {
    /// Whether a filter field is selected.
    #[must_use]
    pub fn is_filtering(&self) -> bool {
        self.filter_field != FilterField::None
    }

    /// Whether the raw search box differs from the settled term.
    #[must_use]
    pub fn search_is_settling(&self) -> bool {
        self.search_term != self.debounced_search_term
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_on_first_page_with_fixed_limit() {
        let state = QueryState::default();

        assert_eq!(state.page, 1);
        assert_eq!(state.limit, 10);
        assert!(state.search_term.is_empty());
        assert!(!state.is_filtering());
    }

    #[test]
    fn filter_field_cycles_through_all_fields() {
        let mut field = FilterField::None;
        let mut seen = vec![];
        for _ in 0..3 {
            field = field.next();
            seen.push(field.as_param());
        }

        assert_eq!(seen, vec!["email", "mobile_number", ""]);
    }
}
