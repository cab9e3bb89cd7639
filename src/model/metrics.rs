//! Record shapes for the fraud-operations dataset.
//!
//! All records are immutable once seeded. Fraud rates are stored as
//! fractions (`0.08` renders as `8.0%`) while approval rates are already
//! percentages.

use super::identifiers::{InsightId, MacroInsightId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Headline system-health card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub name: String,
    pub display_value: String,
    pub trend_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

/// One day of transaction volume with approval and fraud rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    pub volume: u64,
    pub approval_rate: f64,
    pub fraud_rate: f64,
}

/// Health classification shown on a region tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionStatus {
    Opportunity,
    Watch,
    Alert,
    Stable,
}

impl RegionStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Opportunity => "opportunity",
            Self::Watch => "watch",
            Self::Alert => "alert",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for RegionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-region performance summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub code: String,
    pub label: String,
    pub fraud_rate: f64,
    pub approval_rate: f64,
    pub volume: u64,
    pub trend_label: String,
    pub status: RegionStatus,
    pub note: String,
    /// Seven daily activity samples, oldest first
    pub weekly_activity: Vec<f64>,
}

/// Whether an insight is an upside to pursue or a risk to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    Opportunity,
    Alert,
}

impl InsightCategory {
    /// Display order of the insight columns.
    pub const ALL: [Self; 2] = [Self::Opportunity, Self::Alert];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Opportunity => "opportunity",
            Self::Alert => "alert",
        }
    }
}

impl fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pre-written operational observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: InsightId,
    pub title: String,
    pub description: String,
    pub category: InsightCategory,
    pub details: Vec<String>,
}

/// A pre-written strategic recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroInsight {
    pub id: MacroInsightId,
    pub title: String,
    pub description: String,
}

/// Low/medium/high scale shared by funnel pressure and cohort risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureLevel {
    Low,
    Medium,
    High,
}

impl PressureLevel {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for PressureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of the conversion funnel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub name: String,
    pub volume: u64,
    /// Share of this stage's volume lost before the next stage, 0..=100
    pub drop_percent: f64,
    pub pressure: PressureLevel,
}

/// Share of detected fraud attempts by vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudTypeShare {
    pub fraud_type: String,
    pub share: u8,
    pub change: String,
}

/// Approval and fraud snapshot for a product line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductLine {
    pub product: String,
    pub approval_rate: f64,
    pub fraud_rate: f64,
    pub volume_label: String,
    pub note: String,
}

/// A user cohort on the watchlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortSegment {
    pub cohort: String,
    pub approval_rate: f64,
    pub volume_label: String,
    pub risk: PressureLevel,
    pub trend_label: String,
    pub note: String,
}

/// Daily support ticket counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportDay {
    pub label: String,
    pub total: u32,
    pub escalations: u32,
}
