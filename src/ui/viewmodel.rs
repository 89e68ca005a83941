//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings and highlight ranges only; no
//! query or fetch logic.

/// Complete UI view model for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    pub filter_bar: FilterBarInfo,
    pub table: TableView,
    pub pagination: PaginationInfo,
    /// Shown as `Total Records: n` beside the pagination buttons.
    pub total_records: u64,

    /// Message of the most recent failed fetch, if it has not been superseded.
    pub status: Option<String>,

    pub footer: FooterInfo,
    /// Widths the row strings were truncated to.
    pub columns: ColumnWidths,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer keybinding hints for the current input mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Search box contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Raw text as typed.
    pub query: String,
    pub focused: bool,

    /// The typed text has not settled into a request yet.
    pub settling: bool,
}

/// Filter field selector and value input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarInfo {
    /// Field label, `Select Field` when none is chosen.
    pub field_label: String,
    pub value: String,
    /// A filter field is selected.
    pub active: bool,
    /// The value input has keyboard focus.
    pub focused: bool,
}

/// Body of the customer table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    /// A single loading row while the newest request is in flight.
    Loading(String),
    Rows(Vec<TableRow>),
}

/// One row of the table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Customer(CustomerRow),
    /// Full-width message spanning all columns.
    Placeholder(String),
}

/// Display-ready customer row.
///
/// Highlight ranges are `(start, end)` character indices, end exclusive, into
/// the already truncated `name` and `email` strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRow {
    pub serial_number: String,
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub date_of_birth: String,
    pub name_highlights: Vec<(usize, usize)>,
    pub email_highlights: Vec<(usize, usize)>,
}

/// Pagination row contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    /// `Page {current} of {total}`.
    pub label: String,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

/// Column widths of the customer table in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub serial_number: usize,
    pub name: usize,
    pub email: usize,
    pub mobile_number: usize,
    pub date_of_birth: usize,
}

impl ColumnWidths {
    const SERIAL: usize = 6;
    const MOBILE: usize = 14;
    const DOB: usize = 12;
    const MIN_TEXT: usize = 8;
    const GAPS: usize = 4;

    /// Splits `cols` between columns. Name and email share what the fixed
    /// columns leave, two fifths to the name.
    ///
    /// Both text columns keep a minimum width, so very narrow panes overflow
    /// instead of collapsing a column to nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use customer_pane::ui::viewmodel::ColumnWidths;
    ///
    /// let widths = ColumnWidths::for_width(100);
    /// assert_eq!((widths.name, widths.email), (25, 39));
    /// assert_eq!(widths.total(), 100);
    /// ```
    #[must_use]
    pub fn for_width(cols: usize) -> Self {
        let flexible = cols
            .saturating_sub(Self::SERIAL + Self::MOBILE + Self::DOB + Self::GAPS)
            .max(Self::MIN_TEXT * 2);
        let name = (flexible * 2 / 5).max(Self::MIN_TEXT);
        let email = flexible.saturating_sub(name).max(Self::MIN_TEXT);

        Self {
            serial_number: Self::SERIAL,
            name,
            email,
            mobile_number: Self::MOBILE,
            date_of_birth: Self::DOB,
        }
    }

    /// Width of a full table line including gaps.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.serial_number + self.name + self.email + self.mobile_number + self.date_of_birth + Self::GAPS
    }
}
