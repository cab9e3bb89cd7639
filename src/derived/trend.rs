//! Trend label classification and label casing.

use serde::Serialize;

/// Visual class of a trend badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendClass {
    Neutral,
    Negative,
    Positive,
}

/// Classify a free-form trend label such as `"+4.6%"`, `"-2.1%"` or `"stable"`.
///
/// Purely pattern based: empty or "stable" is neutral, a leading minus or a
/// down arrow is negative, everything else is positive.
#[must_use]
pub fn classify_trend(label: &str) -> TrendClass {
    let normalized = label.to_lowercase();
    if label.is_empty() || normalized.contains("stable") {
        return TrendClass::Neutral;
    }
    if label.trim().starts_with('-') || normalized.contains('↓') {
        return TrendClass::Negative;
    }
    TrendClass::Positive
}

/// Upper-case the first character of an enum label (`"watch"` → `"Watch"`).
#[must_use]
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_trend() {
        assert_eq!(classify_trend("stable"), TrendClass::Neutral);
        assert_eq!(classify_trend(""), TrendClass::Neutral);
        assert_eq!(classify_trend("Stable w/w"), TrendClass::Neutral);
        assert_eq!(classify_trend("-2.1%"), TrendClass::Negative);
        assert_eq!(classify_trend("  -0.01%"), TrendClass::Negative);
        assert_eq!(classify_trend("↓ 3%"), TrendClass::Negative);
        assert_eq!(classify_trend("+4.6%"), TrendClass::Positive);
        assert_eq!(classify_trend("↑"), TrendClass::Positive);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("opportunity"), "Opportunity");
        assert_eq!(capitalize("high"), "High");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "Éclair");
    }
}
