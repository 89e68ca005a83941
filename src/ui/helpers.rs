//! Shared rendering utilities.
//!
//! Text here is measured in characters, never bytes, so names and emails with
//! non-ASCII characters pad and truncate correctly.

use crate::ui::theme::Theme;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

const ELLIPSIS: &str = "...";

/// Moves the cursor to a 1-indexed row and column.
///
/// Emits the ANSI CUP sequence `ESC[{row};{col}H`; row 1, column 1 is the
/// top-left cell of the plugin pane.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn display_len(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `width` characters, ending in `...` when cut.
///
/// Widths of three or less have no room for the ellipsis and cut hard.
///
/// # Example
///
/// ```rust
/// use customer_pane::ui::helpers::truncate;
///
/// assert_eq!(truncate("Alexandria", 8), "Alexa...");
/// assert_eq!(truncate("Bo", 8), "Bo");
/// assert_eq!(truncate("Alexandria", 2), "Al");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_len(text) <= width {
        return text.to_string();
    }
    if width <= ELLIPSIS.len() {
        return text.chars().take(width).collect();
    }
    let kept: String = text.chars().take(width - ELLIPSIS.len()).collect();
    format!("{kept}{ELLIPSIS}")
}

/// Prints `width - len` spaces after text of `len` characters.
pub fn pad(len: usize, width: usize) {
    print!("{}", " ".repeat(width.saturating_sub(len)));
}

/// Character ranges of `text` matching `pattern`, coalesced into runs.
///
/// Returns `(start, end)` pairs with exclusive ends. An empty pattern or a
/// non-match yields no ranges.
///
/// # Parameters
///
/// * `matcher` - Shared matcher, created once per render
/// * `text` - Cell text, already truncated to its column
/// * `pattern` - Settled search term
///
/// # Example
///
/// ```rust
/// use customer_pane::ui::helpers::match_ranges;
/// use fuzzy_matcher::skim::SkimMatcherV2;
///
/// let matcher = SkimMatcherV2::default();
/// assert_eq!(match_ranges(&matcher, "Ann", "ann"), vec![(0, 3)]);
/// assert!(match_ranges(&matcher, "Bob", "").is_empty());
/// ```
#[must_use]
pub fn match_ranges(matcher: &SkimMatcherV2, text: &str, pattern: &str) -> Vec<(usize, usize)> {
    if pattern.is_empty() {
        return vec![];
    }
    let Some((_score, indices)) = matcher.fuzzy_indices(text, pattern) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

/// Prints `text` with the given character ranges in match highlight colors.
///
/// Ranges past the end of `text` are ignored. After each highlighted run the
/// `base_fg` color is restored.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, base_fg: &str) {
    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.max(current_pos).min(chars.len());
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(base_fg));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Ann", 10), "Ann");
    }

    #[test]
    fn truncate_appends_ellipsis_within_width() {
        let cut = truncate("Alexandria Montgomery", 10);

        assert_eq!(cut, "Alexand...");
        assert_eq!(display_len(&cut), 10);
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("Zoë Ångström", 12), "Zoë Ångström");
        assert_eq!(truncate("Zoë Ångström", 6), "Zoë...");
    }

    #[test]
    fn contiguous_matches_coalesce_into_one_range() {
        let matcher = SkimMatcherV2::default();

        assert_eq!(match_ranges(&matcher, "jane.doe@example.com", "jane"), vec![(0, 4)]);
    }

    #[test]
    fn scattered_matches_produce_separate_ranges() {
        let matcher = SkimMatcherV2::default();
        let ranges = match_ranges(&matcher, "abc", "ac");

        assert_eq!(ranges, vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn no_match_or_empty_pattern_has_no_ranges() {
        let matcher = SkimMatcherV2::default();

        assert!(match_ranges(&matcher, "Ann", "zzz").is_empty());
        assert!(match_ranges(&matcher, "Ann", "").is_empty());
    }
}
