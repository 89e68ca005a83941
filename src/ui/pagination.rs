//! Stateless previous/next pagination control.
//!
//! The control only knows the current and total page. It emits `-1` or `+1`
//! and keeps page requests in range by refusing to emit in a disabled
//! direction; it never clamps a resulting page.
//!
//! # Enabled States
//!
//! | current | total | previous | next |
//! |---------|-------|----------|------|
//! | 1       | 1     | off      | off  |
//! | 1       | 5     | off      | on   |
//! | 3       | 5     | on       | on   |
//! | 5       | 5     | on       | off  |
//!
//! # Example
//!
//! ```rust
//! use customer_pane::ui::{PageDirection, PaginationControl};
//!
//! let control = PaginationControl::new(3, 5);
//! assert_eq!(control.press(PageDirection::Next), Some(1));
//! assert_eq!(control.label(), "Page 3 of 5");
//!
//! let last = PaginationControl::new(5, 5);
//! assert_eq!(last.press(PageDirection::Next), None);
//! ```

/// Direction of a pagination button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    /// Towards page 1 (`h`, `Left`, `PageUp`).
    Previous,
    /// Towards the last page (`l`, `Right`, `PageDown`).
    Next,
}

impl PageDirection {
    /// Signed step emitted for this direction.
    #[must_use]
    pub const fn step(self) -> i32 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Snapshot of the pagination buttons for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControl {
    /// 1-based page currently requested by the query.
    pub current_page: u32,
    /// Page count reported by the last successful response (at least 1).
    pub total_pages: u32,
}

impl PaginationControl {
    /// Creates a control for `current_page` of `total_pages`.
    ///
    /// # Parameters
    ///
    /// * `current_page` - Page of the current query (1-indexed)
    /// * `total_pages` - Page count of the shown result
    #[must_use]
    pub const fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    /// Whether the previous button accepts presses.
    ///
    /// # Returns
    ///
    /// `false` on page 1, `true` otherwise.
    #[must_use]
    pub const fn previous_enabled(&self) -> bool {
        self.current_page > 1
    }

    /// Whether the next button accepts presses.
    ///
    /// # Returns
    ///
    /// `false` on the last page, which includes the single-page case.
    #[must_use]
    pub const fn next_enabled(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Enabled state of the button for `direction`.
    #[must_use]
    pub const fn is_enabled(&self, direction: PageDirection) -> bool {
        match direction {
            PageDirection::Previous => self.previous_enabled(),
            PageDirection::Next => self.next_enabled(),
        }
    }

    /// Emits the step for a press on `direction`, or nothing if it is disabled.
    ///
    /// # Returns
    ///
    /// * `Some(-1)` / `Some(1)` - page delta for an enabled button
    /// * `None` - the button is disabled; the press has no effect
    #[must_use]
    pub fn press(&self, direction: PageDirection) -> Option<i32> {
        if self.is_enabled(direction) {
            Some(direction.step())
        } else {
            tracing::debug!(
                current_page = self.current_page,
                total_pages = self.total_pages,
                ?direction,
                "pagination button disabled"
            );
            None
        }
    }

    /// `Page {current} of {total}` label.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page_disables_both_directions() {
        let control = PaginationControl::new(1, 1);

        assert!(!control.previous_enabled());
        assert!(!control.next_enabled());
        assert_eq!(control.press(PageDirection::Previous), None);
        assert_eq!(control.press(PageDirection::Next), None);
    }

    #[test]
    fn first_page_allows_only_next() {
        let control = PaginationControl::new(1, 4);

        assert_eq!(control.press(PageDirection::Previous), None);
        assert_eq!(control.press(PageDirection::Next), Some(1));
    }

    #[test]
    fn last_page_allows_only_previous() {
        let control = PaginationControl::new(4, 4);

        assert_eq!(control.press(PageDirection::Previous), Some(-1));
        assert_eq!(control.press(PageDirection::Next), None);
    }

    #[test]
    fn walking_forward_never_passes_the_last_page() {
        let total = 5;
        let mut page = 1u32;
        for _ in 0..10 {
            if let Some(step) = PaginationControl::new(page, total).press(PageDirection::Next) {
                page = page.saturating_add_signed(step);
            }
        }
        assert_eq!(page, total);

        for _ in 0..10 {
            if let Some(step) = PaginationControl::new(page, total).press(PageDirection::Previous) {
                page = page.saturating_add_signed(step);
            }
        }
        assert_eq!(page, 1);
    }

    #[test]
    fn page_beyond_a_shrunken_total_cannot_go_further() {
        let control = PaginationControl::new(4, 2);

        assert_eq!(control.press(PageDirection::Next), None);
        assert_eq!(control.press(PageDirection::Previous), Some(-1));
    }

    #[test]
    fn label_shows_position() {
        assert_eq!(PaginationControl::new(3, 5).label(), "Page 3 of 5");
    }
}
