//! Application state and view model computation.
//!
//! [`AppState`] ties together the query state, the search debouncer, the
//! fetch coordinator, and the display model. Every query change goes through
//! [`AppState::apply`], so one edit yields at most one fetch.
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] turns a state snapshot into display-ready
//! rows: the loading row while the newest request is in flight, the
//! "no customers" row for an empty page, or one row per customer with fuzzy
//! match highlights for the settled search term.

use std::time::Duration;

use fuzzy_matcher::skim::SkimMatcherV2;

use super::actions::Action;
use super::modes::InputMode;
use crate::domain::error::Result;
use crate::domain::{Customer, DisplayModel, ResponsePage};
use crate::fetch::{Endpoint, FetchCoordinator, FetchOutcome, RequestContext};
use crate::query::{apply_edit, Debouncer, Edit, QueryState};
use crate::ui::helpers::{match_ranges, truncate};
use crate::ui::pagination::{PageDirection, PaginationControl};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ColumnWidths, CustomerRow, FilterBarInfo, FooterInfo, HeaderInfo, PaginationInfo, SearchBarInfo,
    TableRow, TableView, UIViewModel,
};

/// Rows taken by everything except the table body.
const CHROME_ROWS: usize = 14;

/// Title shown in the header bar.
pub const TITLE: &str = "Customer Management";
/// Table placeholder while the newest request is in flight.
pub const LOADING_MESSAGE: &str = "Loading...";
/// Single table row shown for a successful empty page.
pub const EMPTY_MESSAGE: &str = "No customers found.";

/// Central application state container.
///
/// Owned by the plugin shim and mutated only through
/// [`crate::handle_event`]. Timers and requests leave as [`Action`]s; their
/// results come back as events.
#[derive(Debug, Clone)]
pub struct AppState {
    /// What the user asked for. The single source of fetch parameters.
    pub query: QueryState,
    /// What the table currently shows.
    pub display: DisplayModel,
    /// Which input, if any, receives typed characters.
    pub input_mode: InputMode,
    pub theme: Theme,

    /// chrono `strftime` pattern for the DOB column.
    pub date_format: String,

    debouncer: Debouncer<String>,
    quiet_period: Duration,
    coordinator: FetchCoordinator,
    mounted: bool,
    disposed: bool,
}

impl AppState {
    /// Creates an unmounted state with the default query and an empty table.
    ///
    /// # Parameters
    ///
    /// * `endpoint` - Validated base address of the list endpoint
    /// * `quiet_period` - Search debounce delay
    /// * `date_format` - chrono pattern for the date of birth column
    /// * `theme` - Active color theme
    ///
    /// No request is issued until [`AppState::mount`].
    #[must_use]
    pub fn new(endpoint: Endpoint, quiet_period: Duration, date_format: String, theme: Theme) -> Self {
        Self {
            query: QueryState::default(),
            display: DisplayModel::default(),
            input_mode: InputMode::Normal,
            theme,
            date_format,
            debouncer: Debouncer::new(),
            quiet_period,
            coordinator: FetchCoordinator::new(endpoint),
            mounted: false,
            disposed: false,
        }
    }

    /// Issues the initial fetch for the default query. Only the first call does anything.
    pub fn mount(&mut self) -> Vec<Action> {
        if self.mounted {
            return vec![];
        }
        self.mounted = true;
        tracing::info!(endpoint = self.coordinator.endpoint().as_str(), "customer pane mounted");
        vec![self.fetch()]
    }

    /// Applies `edit` and returns the fetch it calls for, if any.
    ///
    /// Before [`AppState::mount`] the query still changes but nothing is
    /// fetched; the mount fetch picks up whatever was edited.
    pub fn apply(&mut self, edit: Edit) -> Vec<Action> {
        let transition = apply_edit(&self.query, edit);
        self.query = transition.state;
        if !transition.refetch {
            return vec![];
        }
        if !self.mounted {
            tracing::debug!("not mounted, deferring fetch");
            return vec![];
        }
        vec![self.fetch()]
    }

    /// Records raw search text and restarts the quiet period.
    pub fn type_search(&mut self, text: String) -> Vec<Action> {
        let mut actions = self.apply(Edit::SearchText(text.clone()));
        let ticket = self.debouncer.schedule(text, self.quiet_period);
        actions.push(Action::ScheduleTimer(ticket));
        actions
    }

    /// Handles a host timer expiry; settles the search term if it was the latest.
    pub fn settle_search(&mut self) -> Vec<Action> {
        match self.debouncer.elapsed() {
            Some(term) => {
                tracing::debug!(term = %term, "search term settled");
                self.apply(Edit::SearchSettled(term))
            }
            None => vec![],
        }
    }

    /// Presses a pagination button.
    pub fn step_page(&mut self, direction: PageDirection) -> Vec<Action> {
        match self.pagination().press(direction) {
            Some(delta) => self.apply(Edit::Page(delta)),
            None => vec![],
        }
    }

    /// Clears search and filter. A pending search settle is dropped.
    pub fn clear_all(&mut self) -> Vec<Action> {
        self.debouncer.cancel();
        self.apply(Edit::ClearAll)
    }

    /// Folds the result of request `seq` into the display model.
    pub fn receive_page(&mut self, seq: u64, result: Result<ResponsePage>) -> FetchOutcome {
        self.coordinator.reconcile(seq, result, &mut self.display)
    }

    /// Stops all further work: pending settles are dropped and later events ignored.
    pub fn dispose(&mut self) {
        self.debouncer.cancel();
        self.disposed = true;
        tracing::info!(
            last_issued = self.coordinator.last_issued(),
            "customer pane disposed"
        );
    }

    /// Whether [`AppState::dispose`] has run.
    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Whether the table shows the loading placeholder.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.coordinator.is_loading()
    }

    /// Pagination control for the current page of the shown result.
    #[must_use]
    pub const fn pagination(&self) -> PaginationControl {
        PaginationControl::new(self.query.page, self.display.total_pages)
    }

    fn fetch(&mut self) -> Action {
        let request = self.coordinator.begin(&self.query);
        let context = RequestContext::capture(request.seq);
        Action::FetchPage { request, context }
    }

    /// Computes a renderable view model for a `rows` x `cols` pane.
    ///
    /// # Parameters
    ///
    /// * `rows` - Pane height; rows beyond the chrome go to the table body
    /// * `cols` - Pane width; drives the column widths
    ///
    /// # Returns
    ///
    /// A [`UIViewModel`] with every string already truncated to its column.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let columns = ColumnWidths::for_width(cols);
        let pagination = self.pagination();

        UIViewModel {
            header: HeaderInfo {
                title: format!(" {TITLE} "),
            },
            search_bar: SearchBarInfo {
                query: self.query.search_term.clone(),
                focused: self.input_mode == InputMode::Search,
                settling: self.query.search_is_settling(),
            },
            filter_bar: FilterBarInfo {
                field_label: self.query.filter_field.label().to_string(),
                value: self.query.filter_value.clone(),
                active: self.query.is_filtering(),
                focused: self.input_mode == InputMode::FilterValue,
            },
            table: self.compute_table(rows.saturating_sub(CHROME_ROWS).max(1), columns),
            pagination: PaginationInfo {
                label: pagination.label(),
                previous_enabled: pagination.previous_enabled(),
                next_enabled: pagination.next_enabled(),
            },
            total_records: self.display.total_records,
            status: self.display.last_error.clone(),
            footer: self.compute_footer(),
            columns,
        }
    }

    fn compute_table(&self, available_rows: usize, columns: ColumnWidths) -> TableView {
        if self.is_loading() {
            return TableView::Loading(LOADING_MESSAGE.to_string());
        }
        if self.display.customers.is_empty() {
            return TableView::Rows(vec![TableRow::Placeholder(EMPTY_MESSAGE.to_string())]);
        }

        let matcher = SkimMatcherV2::default();
        let rows = self
            .display
            .customers
            .iter()
            .take(available_rows)
            .map(|customer| TableRow::Customer(self.compute_row(customer, columns, &matcher)))
            .collect();
        TableView::Rows(rows)
    }

    fn compute_row(&self, customer: &Customer, columns: ColumnWidths, matcher: &SkimMatcherV2) -> CustomerRow {
        let term = &self.query.debounced_search_term;
        let name = truncate(&customer.name, columns.name);
        let email = truncate(&customer.email, columns.email);

        CustomerRow {
            serial_number: customer.serial_number.to_string(),
            name_highlights: match_ranges(matcher, &name, term),
            email_highlights: match_ranges(matcher, &email, term),
            name,
            email,
            mobile_number: truncate(&customer.mobile_number, columns.mobile_number),
            date_of_birth: truncate(&customer.formatted_dob(&self.date_format), columns.date_of_birth),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Normal => {
                "/: search  f: filter field  v: filter value  h/l: page  c: clear  q: quit"
            }
            InputMode::Search => "Type to search  Backspace: delete  Enter/ESC: done",
            InputMode::FilterValue => "Type filter value  Backspace: delete  Enter/ESC: done",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::FilterField;

    fn state() -> AppState {
        AppState::new(
            Endpoint::parse("http://localhost:5000/api/customers").expect("valid endpoint"),
            Duration::from_millis(300),
            "%m/%d/%Y".to_string(),
            Theme::default(),
        )
    }

    fn page(names: &[&str], total_pages: u32) -> ResponsePage {
        ResponsePage {
            customers: names
                .iter()
                .zip(1u64..)
                .map(|(name, serial_number)| Customer {
                    serial_number,
                    name: (*name).to_string(),
                    email: format!("{}@example.com", name.to_lowercase()),
                    mobile_number: "5550100".to_string(),
                    date_of_birth: chrono::NaiveDate::from_ymd_opt(1990, 1, 15),
                })
                .collect(),
            total_pages,
            total_records: names.len() as u64,
        }
    }

    fn fetched_seq(actions: &[Action]) -> Option<u64> {
        actions.iter().find_map(|action| match action {
            Action::FetchPage { request, .. } => Some(request.seq),
            _ => None,
        })
    }

    #[test]
    fn mount_fetches_once() {
        let mut state = state();

        assert_eq!(fetched_seq(&state.mount()), Some(1));
        assert!(state.mount().is_empty());
        assert!(state.is_loading());
    }

    #[test]
    fn typing_schedules_without_fetching() {
        let mut state = state();
        let actions = state.type_search("jo".to_string());

        assert_eq!(actions.len(), 1);
        assert!(matches!(actions[0], Action::ScheduleTimer(_)));
        assert_eq!(state.query.search_term, "jo");
        assert_eq!(state.query.debounced_search_term, "");
    }

    #[test]
    fn only_the_last_timer_settles() {
        let mut state = state();
        state.mount();
        state.type_search("j".to_string());
        state.type_search("jo".to_string());

        assert!(state.settle_search().is_empty());
        let actions = state.settle_search();

        assert!(fetched_seq(&actions).is_some());
        assert_eq!(state.query.debounced_search_term, "jo");
        assert_eq!(state.query.page, 1);
    }

    #[test]
    fn clear_all_drops_pending_settle() {
        let mut state = state();
        state.type_search("jo".to_string());
        state.clear_all();

        assert!(state.settle_search().is_empty());
        assert_eq!(state.query.search_term, "");
    }

    #[test]
    fn edits_before_mount_never_fetch() {
        let mut state = state();

        assert!(state.apply(Edit::FilterField(FilterField::Email)).is_empty());
        assert!(state.apply(Edit::FilterValue("a".to_string())).is_empty());
        assert!(state.clear_all().is_empty());
        assert!(!state.is_loading());

        state.apply(Edit::FilterField(FilterField::MobileNumber));
        let actions = state.mount();
        let Some(Action::FetchPage { request, .. }) = actions.first() else {
            panic!("expected mount fetch");
        };
        assert_eq!(request.seq, 1);
        assert!(request.url.contains("filterField=mobile_number"));
    }

    #[test]
    fn time_of_day_date_format_renders_placeholder() {
        let mut state = state();
        state.date_format = "%d/%m/%Y %H:%M".to_string();
        state.mount();
        state.receive_page(1, Ok(page(&["Ann"], 1)));

        let TableView::Rows(rows) = state.compute_viewmodel(24, 100).table else {
            panic!("expected rows");
        };
        let TableRow::Customer(row) = &rows[0] else {
            panic!("expected customer row");
        };
        assert_eq!(row.date_of_birth, crate::domain::customer::MISSING_DATE);
    }

    #[test]
    fn pagination_respects_total_pages() {
        let mut state = state();
        state.mount();
        state.receive_page(1, Ok(page(&["Ann"], 2)));

        assert!(state.step_page(PageDirection::Previous).is_empty());
        assert!(fetched_seq(&state.step_page(PageDirection::Next)).is_some());
        assert_eq!(state.query.page, 2);
    }

    #[test]
    fn viewmodel_shows_loading_then_rows() {
        let mut state = state();
        state.mount();

        assert_eq!(
            state.compute_viewmodel(24, 100).table,
            TableView::Loading(LOADING_MESSAGE.to_string())
        );

        state.receive_page(1, Ok(page(&["Ann", "Bob"], 1)));
        let TableView::Rows(rows) = state.compute_viewmodel(24, 100).table else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);
        let TableRow::Customer(first) = &rows[0] else {
            panic!("expected customer row");
        };
        assert_eq!(first.name, "Ann");
        assert_eq!(first.date_of_birth, "01/15/1990");
    }

    #[test]
    fn empty_page_shows_exactly_one_placeholder_row() {
        let mut state = state();
        state.mount();
        state.receive_page(1, Ok(page(&[], 1)));

        assert_eq!(
            state.compute_viewmodel(24, 100).table,
            TableView::Rows(vec![TableRow::Placeholder(EMPTY_MESSAGE.to_string())])
        );
    }

    #[test]
    fn settled_search_term_highlights_matches() {
        let mut state = state();
        state.mount();
        state.query.debounced_search_term = "ann".to_string();
        state.receive_page(1, Ok(page(&["Ann"], 1)));

        let TableView::Rows(rows) = state.compute_viewmodel(24, 100).table else {
            panic!("expected rows");
        };
        let TableRow::Customer(row) = &rows[0] else {
            panic!("expected customer row");
        };
        assert_eq!(row.name_highlights, vec![(0, 3)]);
        assert_eq!(row.email_highlights, vec![(0, 3)]);
    }

    #[test]
    fn filter_bar_reflects_query() {
        let mut state = state();
        state.apply(Edit::FilterField(FilterField::Email));
        state.input_mode = InputMode::FilterValue;

        let vm = state.compute_viewmodel(24, 100);

        assert_eq!(vm.filter_bar.field_label, "Email");
        assert!(vm.filter_bar.active);
        assert!(vm.filter_bar.focused);
        assert!(!vm.search_bar.focused);
    }

    #[test]
    fn failure_surfaces_in_status_line() {
        let mut state = state();
        state.mount();
        state.receive_page(
            1,
            Err(crate::domain::CustomerPaneError::Transport {
                status: 500,
                message: "boom".to_string(),
            }),
        );

        let vm = state.compute_viewmodel(24, 100);

        assert!(vm.status.is_some());
        assert_eq!(vm.table, TableView::Rows(vec![TableRow::Placeholder(EMPTY_MESSAGE.to_string())]));
    }
}
