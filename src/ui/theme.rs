// Color themes for the UI.
// Light and dark palettes applied uniformly across all widgets.

use ratatui::style::Color;

/// Which palette is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Color palette for the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    /// Regular text.
    pub fg: Color,
    /// Secondary text (hints, counts, filenames).
    pub dim: Color,
    /// Titles and current breadcrumb segment.
    pub title: Color,
    /// Key hints and the active selection marker.
    pub accent: Color,
    /// Selected list row background.
    pub highlight_bg: Color,
    /// Block and separator borders.
    pub border: Color,
    /// Error text.
    pub error: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            fg: Color::White,
            dim: Color::DarkGray,
            title: Color::Cyan,
            accent: Color::Yellow,
            highlight_bg: Color::DarkGray,
            border: Color::DarkGray,
            error: Color::Red,
        }
    }

    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            fg: Color::Black,
            dim: Color::Gray,
            title: Color::Blue,
            accent: Color::Magenta,
            highlight_bg: Color::Gray,
            border: Color::Gray,
            error: Color::Red,
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Switch to the other palette.
    pub fn toggle(&mut self) {
        *self = Self::for_mode(self.mode.toggled());
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
