//! # Theme System
//!
//! Centralized color themes for the speller UI.
//!
//! Rendering code never hardcodes `ratatui::style::Color` values; it reads
//! fields off the active [`Theme`]. The active theme is chosen by the
//! `--theme` flag or the config file, by name.
//!
//! Built-in themes:
//!
//! - **Catppuccin Mocha** (default) - warm, dark pastel theme
//! - **Catppuccin Latte** - the light counterpart
//! - **Nord** - arctic, north-bluish color palette

use ratatui::style::Color;

/// All colors used by the speller UI, grouped by semantic role.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Human-readable name matched against `--theme` and the config file.
    pub name: &'static str,

    // -- Background / text --
    /// Main background color.
    pub bg: Color,
    /// Primary text color (code words, saved entries).
    pub fg: Color,
    /// Muted text (hints, separators, saved-at dates).
    pub fg_dim: Color,

    // -- Accents --
    /// Focused borders and the input cursor.
    pub accent: Color,
    /// The typed-letter column and the input echo.
    pub letter: Color,

    // -- Highlight --
    /// Background of the highlighted entry in both views.
    pub highlight_bg: Color,
    /// Foreground of the highlighted entry.
    pub highlight_fg: Color,

    // -- Semantic status colors --
    /// Status line after a successful action.
    pub success: Color,
    /// Status line after a failed action.
    pub error: Color,
}

impl Theme {
    /// Return the list of all built-in themes.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Catppuccin Mocha).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }
}

// ---------------------------------------------------------------------------
// Built-in theme definitions
// ---------------------------------------------------------------------------

static BUILT_IN_THEMES: [Theme; 3] = [
    // 0 - Catppuccin Mocha (default)
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),              // base
        fg: Color::Rgb(205, 214, 244),           // text
        fg_dim: Color::Rgb(108, 112, 134),       // overlay0
        accent: Color::Rgb(137, 180, 250),       // blue
        letter: Color::Rgb(249, 226, 175),       // yellow
        highlight_bg: Color::Rgb(137, 180, 250), // blue
        highlight_fg: Color::Rgb(30, 30, 46),    // base
        success: Color::Rgb(166, 227, 161),      // green
        error: Color::Rgb(243, 139, 168),        // red
    },
    // 1 - Catppuccin Latte
    Theme {
        name: "Catppuccin Latte",
        bg: Color::Rgb(239, 241, 245),          // base
        fg: Color::Rgb(76, 79, 105),            // text
        fg_dim: Color::Rgb(156, 160, 176),      // overlay0
        accent: Color::Rgb(30, 102, 245),       // blue
        letter: Color::Rgb(223, 142, 29),       // yellow
        highlight_bg: Color::Rgb(30, 102, 245), // blue
        highlight_fg: Color::Rgb(239, 241, 245), // base
        success: Color::Rgb(64, 160, 43),       // green
        error: Color::Rgb(210, 15, 57),         // red
    },
    // 2 - Nord
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208), // frost
        letter: Color::Rgb(235, 203, 139), // yellow
        highlight_bg: Color::Rgb(136, 192, 208),
        highlight_fg: Color::Rgb(46, 52, 64),
        success: Color::Rgb(163, 190, 140),
        error: Color::Rgb(191, 97, 106),
    },
];
