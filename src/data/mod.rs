//! The static dashboard dataset.
//!
//! Everything the dashboard shows is seeded once from [`Dataset::demo`] and
//! never mutated afterwards. Transient UI state lives in [`crate::state`].

mod demo;

use crate::error::{DatasetErrorKind, PulseError, Result};
use crate::model::{
    CohortSegment, FraudTypeShare, FunnelStage, Insight, InsightCategory, InsightId,
    MacroInsight, MacroInsightId, MetricCard, ProductLine, RegionSummary, SupportDay, TrendPoint,
};
use serde::Serialize;
use std::collections::HashSet;

/// Number of steps in the conversion funnel.
pub const FUNNEL_STAGE_COUNT: usize = 6;

/// All records rendered by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub system_health: Vec<MetricCard>,
    pub trend: Vec<TrendPoint>,
    pub regions: Vec<RegionSummary>,
    pub fraud_types: Vec<FraudTypeShare>,
    pub product_lines: Vec<ProductLine>,
    pub cohorts: Vec<CohortSegment>,
    pub support_trend: Vec<SupportDay>,
    pub insights: Vec<Insight>,
    pub macro_insights: Vec<MacroInsight>,
    pub funnel: Vec<FunnelStage>,
}

/// Review counts shown on the status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct InsightCounts {
    pub opportunities: usize,
    pub alerts: usize,
    pub strategic: usize,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::demo()
    }
}

impl Dataset {
    /// The built-in demo snapshot.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            system_health: demo::system_health(),
            trend: demo::trend(),
            regions: demo::regions(),
            fraud_types: demo::fraud_types(),
            product_lines: demo::product_lines(),
            cohorts: demo::cohorts(),
            support_trend: demo::support_trend(),
            insights: demo::insights(),
            macro_insights: demo::macro_insights(),
            funnel: demo::funnel(),
        }
    }

    /// Check the invariants the UI state relies on.
    ///
    /// Titles double as user-facing keys, so they must be unique within each
    /// list; ids key drafts and notes.
    pub fn validate(&self) -> Result<()> {
        check_unique("insight", self.insights.iter().map(|i| (i.id.0, i.title.as_str())))?;
        check_unique(
            "strategic insight",
            self.macro_insights.iter().map(|m| (m.id.0, m.title.as_str())),
        )?;

        if self.funnel.len() != FUNNEL_STAGE_COUNT {
            return Err(PulseError::dataset(
                "funnel",
                DatasetErrorKind::FunnelStageCount {
                    expected: FUNNEL_STAGE_COUNT,
                    found: self.funnel.len(),
                },
            ));
        }
        if let Some(stage) = self
            .funnel
            .iter()
            .find(|s| !(0.0..=100.0).contains(&s.drop_percent))
        {
            return Err(PulseError::dataset(
                "funnel",
                DatasetErrorKind::DropOutOfRange {
                    stage: stage.name.clone(),
                    value: stage.drop_percent,
                },
            ));
        }

        Ok(())
    }

    #[must_use]
    pub fn insight(&self, id: InsightId) -> Option<&Insight> {
        self.insights.iter().find(|i| i.id == id)
    }

    #[must_use]
    pub fn macro_insight(&self, id: MacroInsightId) -> Option<&MacroInsight> {
        self.macro_insights.iter().find(|m| m.id == id)
    }

    /// Insights in one category, in dataset order.
    pub fn insights_in(&self, category: InsightCategory) -> impl Iterator<Item = &Insight> {
        self.insights.iter().filter(move |i| i.category == category)
    }

    /// Sum of all regional volumes.
    #[must_use]
    pub fn total_region_volume(&self) -> u64 {
        self.regions.iter().map(|r| r.volume).sum()
    }

    #[must_use]
    pub fn counts(&self) -> InsightCounts {
        InsightCounts {
            opportunities: self.insights_in(InsightCategory::Opportunity).count(),
            alerts: self.insights_in(InsightCategory::Alert).count(),
            strategic: self.macro_insights.len(),
        }
    }
}

fn check_unique<'a>(
    kind: &'static str,
    items: impl Iterator<Item = (u32, &'a str)>,
) -> Result<()> {
    let mut ids = HashSet::new();
    let mut titles = HashSet::new();
    for (id, title) in items {
        if !ids.insert(id) {
            return Err(PulseError::dataset(
                kind,
                DatasetErrorKind::DuplicateId { kind, id },
            ));
        }
        if !titles.insert(title) {
            return Err(PulseError::dataset(
                kind,
                DatasetErrorKind::DuplicateTitle {
                    kind,
                    title: title.to_string(),
                },
            ));
        }
    }
    Ok(())
}
