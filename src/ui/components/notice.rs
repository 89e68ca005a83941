//! Centered notice renderer.

use crate::ui::helpers::{display_len, position_cursor};
use crate::ui::theme::Theme;

/// Renders `message` and a dimmed `detail` line centered near the top.
///
/// Shown in place of the whole layout when there is no table to draw: the
/// configuration is invalid, web access was denied, or permission is still
/// pending.
///
/// # Parameters
///
/// * `message` - Headline, drawn in the placeholder color
/// * `detail` - Explanation drawn dimmed on the line below
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
pub fn render_notice(message: &str, detail: &str, theme: &Theme, cols: usize) {
    let msg_len = display_len(message);
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    position_cursor(6, 1);
    print!("{}", Theme::fg(&theme.colors.placeholder_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{message}");
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let detail_len = display_len(detail);
    let detail_padding = cols.saturating_sub(detail_len) / 2;

    position_cursor(7, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(detail_padding));
    print!("{detail}");
    print!("{}", " ".repeat(cols.saturating_sub(detail_padding + detail_len)));
    print!("{}", Theme::reset());
}
