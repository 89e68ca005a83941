//! Pure state transitions for [`QueryState`].
//!
//! Every change to the query goes through [`apply_edit`], which returns the
//! next state and whether it must be fetched. The page-reset rule lives here
//! and nowhere else:
//!
//! - a new settled search term, filter field, or filter value sets `page` to 1
//!   in the same transition and requests one fetch
//! - a page step changes only `page` and requests one fetch
//! - raw search typing changes only `search_term` and requests nothing; the
//!   debouncer decides when it settles
//! - an edit that leaves the state as it was requests nothing

use super::state::{FilterField, QueryState};

/// A single user-driven change to the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// The search box now holds this raw text.
    SearchText(String),
    /// The debouncer settled on this search term.
    SearchSettled(String),
    /// A different filter field was selected.
    FilterField(FilterField),
    /// The filter value input now holds this text.
    FilterValue(String),
    /// Pagination emitted a signed step (`-1` previous, `+1` next).
    Page(i32),
    /// Search and filter are cleared back to their defaults.
    ClearAll,
}

/// Result of applying an [`Edit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The query after the edit.
    pub state: QueryState,
    /// Exactly one fetch must be issued for `state`.
    pub refetch: bool,
}

impl Transition {
    const fn unchanged(state: QueryState) -> Self {
        Self { state, refetch: false }
    }

    const fn fetch(state: QueryState) -> Self {
        Self { state, refetch: true }
    }
}

/// Applies `edit` to `state` and reports whether the result must be fetched.
///
/// Page steps are applied as given; keeping them within `1..=total_pages` is
/// the pagination control's job. A step that would leave the `u32` range or
/// land on page 0 is rejected as a no-op.
///
/// # Example
///
/// ```rust
/// use customer_pane::query::{apply_edit, Edit, FilterField, QueryState};
///
/// let on_page_three = QueryState { page: 3, ..QueryState::default() };
/// let transition = apply_edit(&on_page_three, Edit::FilterField(FilterField::Email));
///
/// assert_eq!(transition.state.page, 1);
/// assert!(transition.refetch);
///
/// let typing = apply_edit(&transition.state, Edit::SearchText("an".to_string()));
/// assert!(!typing.refetch);
/// ```
#[must_use]
pub fn apply_edit(state: &QueryState, edit: Edit) -> Transition {
    let mut next = state.clone();

    match edit {
        Edit::SearchText(text) => {
            next.search_term = text;
            Transition::unchanged(next)
        }
        Edit::SearchSettled(term) => {
            if term == next.debounced_search_term {
                return Transition::unchanged(next);
            }
            next.debounced_search_term = term;
            next.page = 1;
            Transition::fetch(next)
        }
        Edit::FilterField(field) => {
            if field == next.filter_field {
                return Transition::unchanged(next);
            }
            next.filter_field = field;
            next.page = 1;
            Transition::fetch(next)
        }
        Edit::FilterValue(value) => {
            if value == next.filter_value {
                return Transition::unchanged(next);
            }
            next.filter_value = value;
            next.page = 1;
            Transition::fetch(next)
        }
        Edit::Page(delta) => match next.page.checked_add_signed(delta) {
            Some(page) if page >= 1 && page != next.page => {
                next.page = page;
                Transition::fetch(next)
            }
            _ => {
                tracing::debug!(page = next.page, delta, "ignoring page step");
                Transition::unchanged(next)
            }
        },
        Edit::ClearAll => {
            let cleared = QueryState {
                page: next.page,
                limit: next.limit,
                ..QueryState::default()
            };
            let fetch_needed = cleared.debounced_search_term != next.debounced_search_term
                || cleared.filter_field != next.filter_field
                || cleared.filter_value != next.filter_value;
            if fetch_needed {
                Transition::fetch(QueryState { page: 1, ..cleared })
            } else {
                Transition::unchanged(cleared)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page(page: u32) -> QueryState {
        QueryState {
            page,
            ..QueryState::default()
        }
    }

    #[test]
    fn raw_search_text_never_fetches_or_resets() {
        let t = apply_edit(&on_page(3), Edit::SearchText("ann".to_string()));

        assert!(!t.refetch);
        assert_eq!(t.state.page, 3);
        assert_eq!(t.state.search_term, "ann");
        assert_eq!(t.state.debounced_search_term, "");
    }

    #[test]
    fn settled_search_resets_page_and_fetches() {
        let t = apply_edit(&on_page(4), Edit::SearchSettled("anna".to_string()));

        assert!(t.refetch);
        assert_eq!(t.state.page, 1);
        assert_eq!(t.state.debounced_search_term, "anna");
    }

    #[test]
    fn unchanged_settled_search_is_a_no_op() {
        let t = apply_edit(&on_page(2), Edit::SearchSettled(String::new()));

        assert!(!t.refetch);
        assert_eq!(t.state.page, 2);
    }

    #[test]
    fn filter_field_change_resets_page() {
        let t = apply_edit(&on_page(3), Edit::FilterField(FilterField::Email));

        assert!(t.refetch);
        assert_eq!(t.state.page, 1);
        assert_eq!(t.state.filter_field, FilterField::Email);
    }

    #[test]
    fn filter_value_change_resets_page() {
        let t = apply_edit(&on_page(5), Edit::FilterValue("@example".to_string()));

        assert!(t.refetch);
        assert_eq!(t.state.page, 1);
        assert_eq!(t.state.filter_value, "@example");
    }

    #[test]
    fn page_step_touches_only_the_page() {
        let state = QueryState {
            page: 2,
            debounced_search_term: "anna".to_string(),
            filter_field: FilterField::MobileNumber,
            filter_value: "555".to_string(),
            ..QueryState::default()
        };

        let t = apply_edit(&state, Edit::Page(1));

        assert!(t.refetch);
        assert_eq!(t.state, QueryState { page: 3, ..state });
    }

    #[test]
    fn page_step_below_one_is_rejected() {
        let t = apply_edit(&on_page(1), Edit::Page(-1));

        assert!(!t.refetch);
        assert_eq!(t.state.page, 1);
    }

    #[test]
    fn clear_all_resets_search_and_filter() {
        let state = QueryState {
            page: 4,
            search_term: "ann".to_string(),
            debounced_search_term: "ann".to_string(),
            filter_field: FilterField::Email,
            filter_value: "x".to_string(),
            ..QueryState::default()
        };

        let t = apply_edit(&state, Edit::ClearAll);

        assert!(t.refetch);
        assert_eq!(t.state, QueryState::default());
    }

    #[test]
    fn clear_all_with_only_raw_text_does_not_fetch() {
        let state = QueryState {
            page: 2,
            search_term: "unsettled".to_string(),
            ..QueryState::default()
        };

        let t = apply_edit(&state, Edit::ClearAll);

        assert!(!t.refetch);
        assert_eq!(t.state.page, 2);
        assert!(t.state.search_term.is_empty());
    }
}
