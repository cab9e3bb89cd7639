//! Property-based tests for the derived display helpers.
//!
//! Every helper must be total: no input panics and every output keeps the
//! shape the views rely on.

use fraud_pulse::derived::{
    classify_trend, format_thousands, format_volume, sparkline_path, sparkline_points,
    volume_share, TrendClass, SPARKLINE_WIDTH,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn format_volume_never_panics(value in any::<u64>()) {
        let text = format_volume(value);
        prop_assert!(!text.is_empty());
        if value > 0 {
            prop_assert!(text.ends_with(" tx"));
        }
    }

    #[test]
    fn format_thousands_round_trips_digits(value in any::<u64>()) {
        let text = format_thousands(value);
        let digits: String = text.chars().filter(|c| *c != ',').collect();
        prop_assert_eq!(digits, value.to_string());
    }

    #[test]
    fn shares_stay_in_range(volumes in prop::collection::vec(0u64..10_000_000, 0..8)) {
        let total: u64 = volumes.iter().sum();
        let mut sum = 0.0;
        for v in &volumes {
            let share = volume_share(*v, total);
            prop_assert!((0.0..=100.0).contains(&share));
            sum += share;
        }
        if total > 0 {
            prop_assert!((sum - 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn sparkline_spans_full_width(values in prop::collection::vec(-1e6f64..1e6, 0..30)) {
        let points = sparkline_points(&values);
        prop_assert!(points.len() >= 2);
        let first = points.first().map(|p| p.0);
        let last = points.last().map(|p| p.0);
        prop_assert_eq!(first, Some(0.0));
        prop_assert!((last.unwrap_or_default() - SPARKLINE_WIDTH).abs() < 1e-9);

        let path = sparkline_path(&values);
        prop_assert!(path.starts_with('M'));
    }

    #[test]
    fn classify_trend_is_total(label in ".{0,12}") {
        let class = classify_trend(&label);
        let lower = label.to_lowercase();
        let trimmed = label.trim();
        if label.is_empty() || lower.contains("stable") {
            prop_assert_eq!(class, TrendClass::Neutral);
        } else if trimmed.starts_with('-') {
            prop_assert_eq!(class, TrendClass::Negative);
        } else if trimmed.starts_with('+') && !lower.contains('↓') {
            prop_assert_eq!(class, TrendClass::Positive);
        }
    }
}
