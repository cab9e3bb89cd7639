//! Top-level dashboard tabs.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three dashboard panes.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardTab {
    #[default]
    Overview,
    TrendAnalysis,
    StrategicInsights,
}

impl DashboardTab {
    /// Tabs in display order.
    pub const ALL: [Self; 3] = [Self::Overview, Self::TrendAnalysis, Self::StrategicInsights];

    /// Stable key used on the command line and in config files.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::TrendAnalysis => "trend-analysis",
            Self::StrategicInsights => "strategic-insights",
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::TrendAnalysis => "Trend Analysis",
            Self::StrategicInsights => "Strategic Insights",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Overview => 0,
            Self::TrendAnalysis => 1,
            Self::StrategicInsights => 2,
        }
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Overview => Self::TrendAnalysis,
            Self::TrendAnalysis => Self::StrategicInsights,
            Self::StrategicInsights => Self::Overview,
        }
    }

    #[must_use]
    pub const fn prev(&self) -> Self {
        match self {
            Self::Overview => Self::StrategicInsights,
            Self::TrendAnalysis => Self::Overview,
            Self::StrategicInsights => Self::TrendAnalysis,
        }
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for tab in DashboardTab::ALL {
            assert_eq!(DashboardTab::from_key(tab.key()), Some(tab));
        }
        assert_eq!(DashboardTab::from_key("funnel"), None);
    }

    #[test]
    fn test_cycling_visits_every_tab() {
        let mut tab = DashboardTab::Overview;
        for expected in [
            DashboardTab::TrendAnalysis,
            DashboardTab::StrategicInsights,
            DashboardTab::Overview,
        ] {
            tab = tab.next();
            assert_eq!(tab, expected);
        }
        assert_eq!(DashboardTab::Overview.prev(), DashboardTab::StrategicInsights);
    }

    #[test]
    fn test_serde_matches_cli_keys() {
        let json = serde_json::to_string(&DashboardTab::TrendAnalysis).unwrap();
        assert_eq!(json, "\"trend-analysis\"");
        assert_eq!(
            DashboardTab::from_str("strategic-insights", true),
            Ok(DashboardTab::StrategicInsights)
        );
    }
}
