//! Volume and rate formatting.

/// Placeholder shown for a missing or zero volume.
pub const EMPTY_PLACEHOLDER: &str = "—";

/// Format a transaction volume for display.
///
/// `1_500_000` renders as `"1.5M tx"`, `2_300` as `"2k tx"`, `500` as
/// `"500 tx"` and `0` as the em-dash placeholder.
#[must_use]
pub fn format_volume(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M tx", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{}k tx", (value as f64 / 1_000.0).round() as u64)
    } else if value == 0 {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        format!("{} tx", format_thousands(value))
    }
}

/// Insert `,` thousands separators.
#[must_use]
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Percentage of `volume` against `total`; zero when `total` is zero.
#[must_use]
pub fn volume_share(volume: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    volume as f64 / total as f64 * 100.0
}

/// Render a fraud-rate fraction (`0.08`) as a percentage (`"8.0%"`).
#[must_use]
pub fn format_rate_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}
