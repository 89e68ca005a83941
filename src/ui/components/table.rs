//! Customer table renderer.
//!
//! Five left-aligned columns separated by one space: S.No, Name, Email,
//! Mobile, DOB. Widths come from [`ColumnWidths`].

use crate::ui::helpers::{self, display_len, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ColumnWidths, CustomerRow, TableRow, TableView};

/// Renders the bold column headers and returns the next row.
///
/// # Layout
///
/// ```text
/// S.No   Name            Email                Mobile         DOB
/// ```
pub fn render_table_headers(row: usize, columns: &ColumnWidths, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.table_header_fg));
    print!(
        "{:<sno$} {:<name$} {:<email$} {:<mobile$} {:<dob$}",
        "S.No",
        "Name",
        "Email",
        "Mobile",
        "DOB",
        sno = columns.serial_number,
        name = columns.name,
        email = columns.email,
        mobile = columns.mobile_number,
        dob = columns.date_of_birth,
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the table body and returns the row after the last one drawn.
///
/// # Parameters
///
/// * `row` - First body row (1-indexed)
/// * `table` - Loading placeholder or rows, already cut to the rows available
/// * `columns` - Widths the row strings were truncated to
/// * `theme` - Active color theme
pub fn render_table_body(row: usize, table: &TableView, columns: &ColumnWidths, theme: &Theme) -> usize {
    match table {
        TableView::Loading(message) => render_placeholder(row, message, columns, theme),
        TableView::Rows(rows) => {
            let mut current_row = row;
            for table_row in rows {
                current_row = match table_row {
                    TableRow::Customer(customer) => render_customer_row(current_row, customer, columns, theme),
                    TableRow::Placeholder(message) => render_placeholder(current_row, message, columns, theme),
                };
            }
            current_row
        }
    }
}

/// A message centered across the full table width.
fn render_placeholder(row: usize, message: &str, columns: &ColumnWidths, theme: &Theme) -> usize {
    let width = columns.total();
    let len = display_len(message);
    let padding = width.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.placeholder_fg));
    print!("{}{message}", " ".repeat(padding));
    pad(padding + len, width);
    print!("{}", Theme::reset());
    row + 1
}

fn render_customer_row(row: usize, customer: &CustomerRow, columns: &ColumnWidths, theme: &Theme) -> usize {
    let base = &theme.colors.text_normal;

    position_cursor(row, 1);
    print!("{}", Theme::fg(base));

    print!("{}", customer.serial_number);
    pad(display_len(&customer.serial_number), columns.serial_number + 1);

    helpers::render_highlighted_text(&customer.name, &customer.name_highlights, theme, base);
    pad(display_len(&customer.name), columns.name + 1);

    helpers::render_highlighted_text(&customer.email, &customer.email_highlights, theme, base);
    pad(display_len(&customer.email), columns.email + 1);

    print!("{}", customer.mobile_number);
    pad(display_len(&customer.mobile_number), columns.mobile_number + 1);

    print!("{}", customer.date_of_birth);
    pad(display_len(&customer.date_of_birth), columns.date_of_birth);

    print!("{}", Theme::reset());
    row + 1
}
