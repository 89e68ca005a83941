//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`inputs`]: Search box and filter bar
//! - [`table`]: Customer table with five columns
//! - [`controls`]: Pagination row, record count, and status line
//! - [`footer`]: Keybinding hints
//! - [`notice`]: Centered message shown instead of the table UI
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search box - 3 lines]
//! [Filter bar]
//! [blank line]
//! [Table Headers]
//! [Table Rows]
//! [blank padding]
//! [Status line]
//! [Pagination + Total Records]
//! [Border]
//! [Footer]
//! ```

mod controls;
mod footer;
mod header;
mod inputs;
mod notice;
mod table;

pub use notice::render_notice;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use controls::{render_pagination_row, render_status_line};
use footer::render_footer;
use header::render_header;
use inputs::{render_filter_bar, render_search_box};
use table::{render_table_body, render_table_headers};

/// Renders a horizontal border line and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full customer pane.
///
/// The table body is drawn top-down from the chrome above it; status,
/// pagination, border, and footer are anchored to the bottom of the pane.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_box(current_row, &vm.search_bar, theme, cols);
    current_row = render_filter_bar(current_row, &vm.filter_bar, theme) + 1;
    current_row = render_table_headers(current_row, &vm.columns, theme);
    render_table_body(current_row, &vm.table, &vm.columns, theme);

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let pagination_row = border_row.saturating_sub(1);
    let status_row = pagination_row.saturating_sub(1);

    render_status_line(status_row, vm.status.as_deref(), theme, cols);
    render_pagination_row(pagination_row, &vm.pagination, vm.total_records, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
