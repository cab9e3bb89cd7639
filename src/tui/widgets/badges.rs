//! Inline badges for trend, status, pressure, and category labels.

use crate::derived::{capitalize, classify_trend, TrendClass};
use crate::model::{InsightCategory, PressureLevel, RegionStatus};
use crate::tui::theme::colors;
use ratatui::prelude::*;

/// Trend label colored by direction; blank labels render as "Stable".
pub fn trend_badge(label: &str) -> Span<'static> {
    let blank = label.trim().is_empty();
    let class = if blank {
        TrendClass::Neutral
    } else {
        classify_trend(label)
    };
    let arrow = match class {
        TrendClass::Positive => "▲",
        TrendClass::Negative => "▼",
        TrendClass::Neutral => "•",
    };
    let text = if blank {
        "Stable".to_string()
    } else {
        capitalize(label.trim())
    };

    Span::styled(
        format!("{arrow} {text}"),
        Style::default().fg(colors().trend_color(class)).bold(),
    )
}

/// Filled region status pill.
pub fn status_badge(status: RegionStatus) -> Span<'static> {
    let scheme = colors();
    Span::styled(
        format!(" {} ", capitalize(status.as_str())),
        Style::default()
            .fg(scheme.badge_fg_light)
            .bg(scheme.status_color(status))
            .bold(),
    )
}

/// Filled pressure (or risk) pill.
pub fn pressure_badge(level: PressureLevel) -> Span<'static> {
    let scheme = colors();
    let fg = match level {
        PressureLevel::Medium => scheme.badge_fg_dark,
        PressureLevel::Low | PressureLevel::High => scheme.badge_fg_light,
    };
    Span::styled(
        format!(" {} ", level.as_str().to_uppercase()),
        Style::default()
            .fg(fg)
            .bg(scheme.pressure_color(level))
            .bold(),
    )
}

/// Outline category marker for insight cards.
pub fn category_badge(category: InsightCategory) -> Span<'static> {
    let label = match category {
        InsightCategory::Opportunity => "OPPORTUNITY",
        InsightCategory::Alert => "ALERT",
    };
    Span::styled(
        format!("[{label}]"),
        Style::default().fg(colors().category_color(category)).bold(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_badge_text() {
        assert_eq!(trend_badge("+4.6%").content, "▲ +4.6%");
        assert_eq!(trend_badge("-2.1%").content, "▼ -2.1%");
        assert_eq!(trend_badge("stable").content, "• Stable");
        assert_eq!(trend_badge("  ").content, "• Stable");
    }

    #[test]
    fn test_blank_trend_badge_uses_neutral_color() {
        use crate::tui::theme::ColorScheme;

        let neutral = [ColorScheme::light(), ColorScheme::dark()]
            .map(|scheme| Some(scheme.trend_color(TrendClass::Neutral)));
        for label in ["", "  ", "\t"] {
            let badge = trend_badge(label);
            assert_eq!(badge.content, "• Stable");
            assert!(neutral.contains(&badge.style.fg));
        }
    }

    #[test]
    fn test_status_and_pressure_labels() {
        assert_eq!(status_badge(RegionStatus::Watch).content, " Watch ");
        assert_eq!(pressure_badge(PressureLevel::High).content, " HIGH ");
        assert_eq!(
            category_badge(InsightCategory::Opportunity).content,
            "[OPPORTUNITY]"
        );
    }
}
