//! Weekly support-signal summary.

use crate::model::SupportDay;
use serde::Serialize;
use std::fmt::Write as _;

/// Path used when there are fewer than two days or no tickets at all.
pub const FLAT_SUPPORT_PATH: &str = "M0,20 L100,20";

/// Aggregates shown on the support-signal card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupportSignal {
    pub tickets_total: u32,
    /// Mean daily escalations, rounded to the nearest whole ticket
    pub avg_escalations: u32,
    /// Area path in a 100x40 box, peak day at y = 10
    pub path: String,
}

/// Summarize a week of support tickets.
#[must_use]
pub fn support_signal(days: &[SupportDay]) -> SupportSignal {
    let tickets_total = days.iter().map(|d| d.total).sum();
    let escalations: u32 = days.iter().map(|d| d.escalations).sum();
    let avg_escalations = if days.is_empty() {
        0
    } else {
        (f64::from(escalations) / days.len() as f64).round() as u32
    };

    SupportSignal {
        tickets_total,
        avg_escalations,
        path: support_path(days),
    }
}

fn support_path(days: &[SupportDay]) -> String {
    let max_total = days.iter().map(|d| d.total).max().unwrap_or(0);
    if days.len() < 2 || max_total == 0 {
        return FLAT_SUPPORT_PATH.to_string();
    }

    let last = (days.len() - 1) as f64;
    let mut path = String::new();
    for (i, day) in days.iter().enumerate() {
        let x = i as f64 / last * 100.0;
        let y = 40.0 - f64::from(day.total) / f64::from(max_total) * 30.0;
        if i > 0 {
            path.push(' ');
        }
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(path, "{cmd}{x:.2},{y:.2}");
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;

    fn day(label: &str, total: u32, escalations: u32) -> SupportDay {
        SupportDay {
            label: label.to_string(),
            total,
            escalations,
        }
    }

    #[test]
    fn test_demo_week() {
        let signal = support_signal(&Dataset::demo().support_trend);
        assert_eq!(signal.tickets_total, 2_375);
        // 95 escalations over 7 days
        assert_eq!(signal.avg_escalations, 14);
        assert!(signal.path.starts_with("M0.00,"));
        assert!(signal.path.contains("L100.00,"));
    }

    #[test]
    fn test_peak_day_sits_at_top() {
        let signal = support_signal(&[day("Mon", 50, 1), day("Tue", 100, 3)]);
        assert_eq!(signal.path, "M0.00,25.00 L100.00,10.00");
        assert_eq!(signal.avg_escalations, 2);
    }

    #[test]
    fn test_degenerate_weeks_are_flat() {
        assert_eq!(support_signal(&[]).path, FLAT_SUPPORT_PATH);
        assert_eq!(support_signal(&[]).avg_escalations, 0);
        assert_eq!(support_signal(&[day("Mon", 10, 1)]).path, FLAT_SUPPORT_PATH);
        assert_eq!(
            support_signal(&[day("Mon", 0, 0), day("Tue", 0, 0)]).path,
            FLAT_SUPPORT_PATH
        );
    }
}
