//! Funnel loss estimation.

use crate::model::FunnelStage;

/// Average order value used when the config does not override it.
pub const DEFAULT_AVERAGE_ORDER_VALUE: f64 = 85.0;

/// Revenue lost at a funnel stage: `drop_percent / 100 × volume × aov`.
#[must_use]
pub fn estimated_loss(stage: &FunnelStage, average_order_value: f64) -> f64 {
    stage.drop_percent / 100.0 * stage.volume as f64 * average_order_value
}

/// Number of transactions dropped at a stage, rounded.
#[must_use]
pub fn dropped_volume(stage: &FunnelStage) -> u64 {
    (stage.drop_percent / 100.0 * stage.volume as f64).round() as u64
}

/// Compact dollar amount: `"$19.1M"`, `"$842k"` or `"$310"`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();
    if abs >= 1_000_000.0 {
        format!("{sign}${:.1}M", abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{sign}${}k", (abs / 1_000.0).round() as u64)
    } else {
        format!("{sign}${}", abs.round() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PressureLevel;

    fn stage(volume: u64, drop_percent: f64) -> FunnelStage {
        FunnelStage {
            name: "Add to cart".to_string(),
            volume,
            drop_percent,
            pressure: PressureLevel::Medium,
        }
    }

    #[test]
    fn test_estimated_loss() {
        let loss = estimated_loss(&stage(468_000, 48.0), DEFAULT_AVERAGE_ORDER_VALUE);
        assert!((loss - 19_094_400.0).abs() < 1e-6);
        assert_eq!(estimated_loss(&stage(468_000, 0.0), 85.0), 0.0);
        assert_eq!(estimated_loss(&stage(0, 48.0), 85.0), 0.0);
    }

    #[test]
    fn test_dropped_volume() {
        assert_eq!(dropped_volume(&stage(190_000, 6.5)), 12_350);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(19_094_400.0), "$19.1M");
        assert_eq!(format_currency(842_300.0), "$842k");
        assert_eq!(format_currency(310.4), "$310");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-2_000.0), "-$2k");
    }
}
