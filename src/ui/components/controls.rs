//! Pagination row and status line renderers.

use crate::ui::helpers::{display_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

const PREVIOUS_LABEL: &str = "< Prev";
const NEXT_LABEL: &str = "Next >";

/// Renders `< Prev  Page X of Y  Next >` on the left and the record count on
/// the right. Disabled buttons are dimmed.
///
/// # Parameters
///
/// * `row` - Row position to render at (1-indexed)
/// * `pagination` - Button states and page label
/// * `total_records` - Record count for the current query
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
///   < Prev  Page 2 of 5  Next >                      Total Records: 47
/// ```
pub fn render_pagination_row(
    row: usize,
    pagination: &PaginationInfo,
    total_records: u64,
    theme: &Theme,
    cols: usize,
) -> usize {
    let button_color = |enabled: bool| {
        if enabled {
            Theme::fg(&theme.colors.button_fg)
        } else {
            Theme::fg(&theme.colors.button_disabled_fg)
        }
    };

    position_cursor(row, 1);
    print!("  {}{PREVIOUS_LABEL}", button_color(pagination.previous_enabled));
    print!("  {}{}", Theme::fg(&theme.colors.text_normal), pagination.label);
    print!("  {}{NEXT_LABEL}", button_color(pagination.next_enabled));

    let left_len = 2 + PREVIOUS_LABEL.len() + 2 + display_len(&pagination.label) + 2 + NEXT_LABEL.len();
    let total_text = format!("Total Records: {total_records}");
    let gap = cols.saturating_sub(left_len + total_text.len() + 2).max(2);

    print!("{}", " ".repeat(gap));
    print!("{}{total_text}", Theme::fg(&theme.colors.text_dim));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the most recent fetch failure, or clears the line if there is none.
pub fn render_status_line(row: usize, status: Option<&str>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    match status {
        Some(message) => {
            let text = truncate(&format!("  Error: {message}"), cols);
            print!("{}{text}", Theme::fg(&theme.colors.error_fg));
            print!("{}", " ".repeat(cols.saturating_sub(display_len(&text))));
            print!("{}", Theme::reset());
        }
        None => print!("{}", " ".repeat(cols)),
    }
    row + 1
}
