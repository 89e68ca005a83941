//! Theme management and ANSI escape sequence generation.
//!
//! Built-in themes are the Catppuccin `mocha` (dark, default) and `latte`
//! (light) flavours. A custom theme can be loaded from a TOML file:
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! input_border = "#585b70"
//! input_focus_border = "#f5c2e7"
//! table_header_fg = "#89b4fa"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! placeholder_fg = "#89b4fa"
//! button_fg = "#a6e3a1"
//! button_disabled_fg = "#585b70"
//! error_fg = "#f38ba8"
//! ```

use crate::domain::error::{CustomerPaneError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Theme identifier, shown in logs.
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (e.g. `"#cdd6f4"`) for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub text_normal: String,
    /// Footer, disabled labels, secondary info.
    pub text_dim: String,
    pub border: String,

    /// Border of an input box without focus.
    pub input_border: String,
    pub input_focus_border: String,

    pub table_header_fg: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// Loading and "no customers" rows.
    pub placeholder_fg: String,

    pub button_fg: String,
    pub button_disabled_fg: String,
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerPaneError::Theme`] for an unknown name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use customer_pane::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte")?;
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_err());
    /// # Ok::<(), customer_pane::CustomerPaneError>(())
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return Err(CustomerPaneError::Theme(format!("unknown theme '{name}'"))),
        };

        toml::from_str(toml_str)
            .map_err(|e| CustomerPaneError::Theme(format!("built-in theme '{name}' is invalid: {e}")))
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerPaneError::Io`] if the file cannot be read and
    /// [`CustomerPaneError::Theme`] if it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| CustomerPaneError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Plain grey-scale palette, used only if the built-in default is unusable.
    fn monochrome() -> Self {
        let light = "#e0e0e0".to_string();
        let mid = "#808080".to_string();
        let dark = "#202020".to_string();
        Self {
            name: "monochrome".to_string(),
            colors: ThemeColors {
                header_fg: light.clone(),
                header_bg: None,
                text_normal: light.clone(),
                text_dim: mid.clone(),
                border: mid.clone(),
                input_border: mid.clone(),
                input_focus_border: light.clone(),
                table_header_fg: light.clone(),
                match_highlight_fg: dark,
                match_highlight_bg: light.clone(),
                placeholder_fg: mid.clone(),
                button_fg: light.clone(),
                button_disabled_fg: mid,
                error_fg: light,
            },
        }
    }

    /// Converts `#rrggbb` to an RGB tuple, white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// 24-bit foreground color escape sequence.
    ///
    /// # Parameters
    ///
    /// * `hex` - Color as `#rrggbb`; malformed input renders as white
    ///
    /// # Example
    ///
    /// ```rust
    /// use customer_pane::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff8000"), "\u{001b}[38;2;255;128;0m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Bold text attribute.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Dim (faint) text attribute.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Resets colors and attributes.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(|e| {
            tracing::error!(error = %e, "falling back to monochrome theme");
            Self::monochrome()
        })
    }
}
