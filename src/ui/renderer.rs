//! Top-level rendering coordinator.
//!
//! Computes the view model from application state and hands it to the layout
//! in [`components`]. Nothing here clears the screen; Zellij gives each render
//! a fresh frame.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;

/// Renders the plugin UI for a `rows` x `cols` pane to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_layout(&viewmodel, &state.theme, rows, cols);
}

/// Renders a centered two-line notice in place of the table UI.
///
/// Used before the application state exists, e.g. while waiting for
/// permissions or when configuration is invalid.
pub fn render_notice(message: &str, detail: &str, theme: &Theme, cols: usize) {
    components::render_notice(message, detail, theme, cols);
}
