//! Color palettes for the TUI.
//!
//! Widgets never name a color directly; they ask the active [`Theme`] for a
//! semantic slot. `ThemeMode::Auto` follows the OS appearance.

use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::view_model::StatusStyle;

/// Semantic colors shared by every widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Primary UI colors
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color for confirmations and completed items
    pub success: Color,
    /// Error state color for errors
    pub error: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels and less important content
    pub text_secondary: Color,
    /// Muted text color for help text and dim content
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
    /// Surface color for panels and elevated elements
    pub surface: Color,

    // Release status tags
    /// "In Planning"
    pub status_planning: Color,
    /// "In Progress"
    pub status_progress: Color,
    /// "Ready to Release"
    pub status_ready: Color,
    /// "Released"
    pub status_released: Color,
}

impl Theme {
    /// Palette matching the OS appearance, dark when it cannot be told.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Theme for a configured mode. `Auto` asks the OS.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Palette for dark terminals.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(30, 30, 30),

            status_planning: Color::Gray,
            status_progress: Color::Rgb(255, 140, 60),
            status_ready: Color::Rgb(90, 160, 255),
            status_released: Color::Green,
        }
    }

    /// Palette for light terminals. Accent and status colors are darkened.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            success: Color::Rgb(0, 128, 0),  // Dark green
            error: Color::Red,

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(245, 245, 245),

            status_planning: Color::Rgb(100, 100, 100),
            status_progress: Color::Rgb(190, 90, 0),
            status_ready: Color::Rgb(20, 80, 200),
            status_released: Color::Rgb(0, 128, 0),
        }
    }

    /// Tag color for a release status style.
    #[must_use]
    pub const fn status_color(&self, style: StatusStyle) -> Color {
        match style {
            StatusStyle::Planning => self.status_planning,
            StatusStyle::Progress => self.status_progress,
            StatusStyle::Ready => self.status_ready,
            StatusStyle::Released => self.status_released,
        }
    }

    /// Gauge color for a progress percentage.
    #[must_use]
    pub const fn progress_color(&self, progress: u8) -> Color {
        match progress {
            100 => self.success,
            50..=99 => self.primary,
            _ => self.accent,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
