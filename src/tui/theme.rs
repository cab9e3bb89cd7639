//! Centralized theme and color scheme for the dashboard.
//!
//! The active palette is process-wide so that every view and widget can
//! call [`colors`] without threading a theme through render functions.
//! [`PaletteSurface`] is the presentation seam the store drives when the
//! theme preference changes.

use crate::derived::TrendClass;
use crate::model::{InsightCategory, PressureLevel, RegionStatus};
use crate::state::{DashboardTab, PresentationSurface, ThemeMode};
use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Color scheme for the dashboard.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    // Trend direction colors
    pub positive: Color,
    pub negative: Color,
    pub neutral: Color,

    // Region status colors
    pub opportunity: Color,
    pub watch: Color,
    pub alert: Color,
    pub stable: Color,

    // UI element colors
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,
    pub highlight: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // Badge foreground colors (for text on colored backgrounds)
    pub badge_fg_dark: Color,
    pub badge_fg_light: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::light()
    }
}

impl ColorScheme {
    /// Light theme (default)
    pub const fn light() -> Self {
        Self {
            positive: Color::Rgb(4, 120, 87),
            negative: Color::Rgb(190, 18, 60),
            neutral: Color::Rgb(100, 116, 139),

            opportunity: Color::Rgb(4, 120, 87),
            watch: Color::Rgb(180, 83, 9),
            alert: Color::Rgb(190, 18, 60),
            stable: Color::Rgb(71, 85, 105),

            primary: Color::Rgb(29, 78, 216),
            secondary: Color::Rgb(67, 56, 202),
            accent: Color::Rgb(180, 83, 9),
            muted: Color::Rgb(148, 163, 184),
            border: Color::Rgb(203, 213, 225),
            border_focused: Color::Rgb(29, 78, 216),
            background: Color::Rgb(255, 255, 255),
            background_alt: Color::Rgb(241, 245, 249),
            text: Color::Rgb(15, 23, 42),
            text_muted: Color::Rgb(71, 85, 105),
            selection: Color::Rgb(219, 234, 254),
            highlight: Color::Rgb(180, 83, 9),

            success: Color::Rgb(4, 120, 87),
            warning: Color::Rgb(180, 83, 9),
            error: Color::Rgb(190, 18, 60),

            badge_fg_dark: Color::Rgb(15, 23, 42),
            badge_fg_light: Color::White,
        }
    }

    /// Dark theme
    pub const fn dark() -> Self {
        Self {
            positive: Color::Green,
            negative: Color::LightRed,
            neutral: Color::Gray,

            opportunity: Color::Green,
            watch: Color::Yellow,
            alert: Color::LightRed,
            stable: Color::Gray,

            primary: Color::Cyan,
            secondary: Color::LightBlue,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            background: Color::Reset,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::Rgb(60, 60, 80),
            highlight: Color::Yellow,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::LightRed,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,
        }
    }

    pub const fn trend_color(&self, class: TrendClass) -> Color {
        match class {
            TrendClass::Positive => self.positive,
            TrendClass::Negative => self.negative,
            TrendClass::Neutral => self.neutral,
        }
    }

    pub const fn status_color(&self, status: RegionStatus) -> Color {
        match status {
            RegionStatus::Opportunity => self.opportunity,
            RegionStatus::Watch => self.watch,
            RegionStatus::Alert => self.alert,
            RegionStatus::Stable => self.stable,
        }
    }

    pub const fn pressure_color(&self, level: PressureLevel) -> Color {
        match level {
            PressureLevel::Low => self.success,
            PressureLevel::Medium => self.warning,
            PressureLevel::High => self.error,
        }
    }

    pub const fn category_color(&self, category: InsightCategory) -> Color {
        match category {
            InsightCategory::Opportunity => self.opportunity,
            InsightCategory::Alert => self.alert,
        }
    }

    /// Chart color palette for visualizations
    pub const fn chart_palette(&self) -> [Color; 5] {
        [
            self.primary,
            self.success,
            self.warning,
            self.error,
            self.secondary,
        ]
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::light());

/// Theme configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            mode: ThemeMode::Light,
        }
    }

    pub const fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            mode: ThemeMode::Dark,
        }
    }

    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

/// Presentation surface that swaps the process-wide terminal palette.
#[derive(Debug, Default, Clone, Copy)]
pub struct PaletteSurface;

impl PresentationSurface for PaletteSurface {
    fn apply(&mut self, mode: ThemeMode) {
        tracing::debug!(theme = mode.as_str(), "Applying palette");
        set_theme(Theme::for_mode(mode));
    }
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    /// Header title style
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    /// Section title style
    pub fn section_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    /// Normal text style
    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    /// Muted/secondary text style
    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Label text style
    pub fn label() -> Style {
        Style::default().fg(colors().muted)
    }

    /// Value text style (for data values)
    pub fn value() -> Style {
        Style::default().fg(colors().text).bold()
    }

    /// Selection style (for selected items)
    pub fn selected() -> Style {
        Style::default()
            .bg(colors().selection)
            .fg(colors().text)
            .bold()
    }

    /// Border style (unfocused)
    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    /// Border style (focused)
    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    /// Status bar background style
    pub fn status_bar() -> Style {
        Style::default().bg(colors().background_alt)
    }

    /// Keyboard shortcut style
    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    /// Shortcut description style
    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn success() -> Style {
        Style::default().fg(colors().success)
    }

    pub fn warning() -> Style {
        Style::default().fg(colors().warning)
    }

    pub fn error() -> Style {
        Style::default().fg(colors().error)
    }
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Context-specific footer hints
pub struct FooterHints;

impl FooterHints {
    /// Hints for a dashboard tab.
    pub fn for_tab(tab: DashboardTab) -> Vec<(&'static str, &'static str)> {
        let mut hints = Self::global();

        match tab {
            DashboardTab::Overview => {
                hints.insert(0, ("[ ]", "section"));
                hints.insert(1, ("Enter", "funnel stage"));
            }
            DashboardTab::TrendAnalysis => {
                hints.insert(0, ("Enter", "expand"));
                hints.insert(1, ("+/-", "feedback"));
                hints.insert(2, ("i", "write"));
                hints.insert(3, ("n", "note"));
                hints.insert(4, ("s", "submit"));
            }
            DashboardTab::StrategicInsights => {
                hints.insert(0, ("+/-", "greenlight/block"));
                hints.insert(1, ("i", "write"));
                hints.insert(2, ("s", "submit log"));
            }
        }

        hints
    }

    /// Hints while the root-cause panel is open.
    pub fn for_rca_panel() -> Vec<(&'static str, &'static str)> {
        vec![
            ("i", "edit question"),
            ("g", "generate"),
            ("r", "start over"),
            ("Esc", "close"),
        ]
    }

    /// Hints while the funnel assistant is open.
    pub fn for_funnel_panel() -> Vec<(&'static str, &'static str)> {
        vec![("↑↓", "other stage"), ("Esc", "close")]
    }

    /// Hints while a text field has focus.
    pub fn for_input() -> Vec<(&'static str, &'static str)> {
        vec![("Enter", "confirm"), ("Esc", "stop editing")]
    }

    /// Global hints (always shown)
    pub fn global() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Tab", "switch"),
            ("↑↓/jk", "navigate"),
            ("a", "analyze"),
            ("T", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}
