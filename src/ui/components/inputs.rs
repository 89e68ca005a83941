//! Search box and filter bar renderers.

use crate::ui::helpers::{display_len, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FilterBarInfo, SearchBarInfo};

/// Horizontal margin of the search box.
const SEARCH_BOX_MARGIN: usize = 2;
const CURSOR: &str = "_";

/// Renders the 3-line bordered search box and returns the row after it.
///
/// ```text
/// ┌──────────────────────────┐
/// │ Search: jane_            │
/// └──────────────────────────┘
/// ```
pub fn render_search_box(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.focused {
        &theme.colors.input_focus_border
    } else {
        &theme.colors.input_border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let cursor = if search.focused { CURSOR } else { "" };
    let settling = if search.settling { " ..." } else { "" };
    let search_text = truncate(&format!(" Search: {}{cursor}{settling}", search.query), inner_width);
    let padding = inner_width.saturating_sub(display_len(&search_text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Renders the filter field selector and value input on one line.
///
/// ```text
///   Filter: [Email]  Value: [jane_]
/// ```
pub fn render_filter_bar(row: usize, filter: &FilterBarInfo, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN + 1));

    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("Filter: ");
    let field_color = if filter.active {
        &theme.colors.text_normal
    } else {
        &theme.colors.text_dim
    };
    print!("{}[{}]", Theme::fg(field_color), filter.field_label);

    let value_border = if filter.focused {
        &theme.colors.input_focus_border
    } else {
        &theme.colors.input_border
    };
    let cursor = if filter.focused { CURSOR } else { "" };
    print!("{}  Value: ", Theme::fg(&theme.colors.text_normal));
    print!("{}[", Theme::fg(value_border));
    print!("{}{}{cursor}", Theme::fg(&theme.colors.text_normal), filter.value);
    print!("{}]", Theme::fg(value_border));
    print!("{}", Theme::reset());

    row + 1
}
