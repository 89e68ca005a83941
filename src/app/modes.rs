//! Input mode state for the application.
//!
//! The mode decides where typed characters go and which keybindings are
//! active:
//!
//! - **Normal**: navigation and commands (`/`, `f`, `v`, `h`/`l`, `c`, `q`)
//! - **Search**: characters edit the search box
//! - **`FilterValue`**: characters edit the filter value input

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation and command mode.
    #[default]
    Normal,

    /// Typing into the search box. Edits are debounced before they are fetched.
    Search,

    /// Typing into the filter value input. Every edit is fetched immediately.
    FilterValue,
}

impl InputMode {
    /// Whether characters are currently being typed into an input.
    #[must_use]
    pub const fn is_typing(self) -> bool {
        !matches!(self, Self::Normal)
    }
}
