//! Dashboard data model.
//!
//! Record types for the seeded dataset plus the typed identifiers that
//! key transient UI state.

mod identifiers;
mod metrics;

pub use identifiers::{FeedbackTarget, InsightId, MacroInsightId};
pub use metrics::{
    CohortSegment, FraudTypeShare, FunnelStage, Insight, InsightCategory, MacroInsight,
    MetricCard, PressureLevel, ProductLine, RegionStatus, RegionSummary, SupportDay, TrendPoint,
};
