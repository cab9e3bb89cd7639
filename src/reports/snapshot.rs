//! Point-in-time view of the dashboard data.

use crate::analysis::DirectionalSummary;
use crate::data::Dataset;
use crate::derived::{
    classify_trend, dropped_volume, estimated_loss, format_currency, format_rate_percent,
    format_volume, sparkline_path, support_signal, volume_share, SupportSignal, TrendClass,
};
use crate::model::{MetricCard, PressureLevel, RegionStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Status line at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BannerSummary {
    pub system_status: &'static str,
    pub risk_posture: &'static str,
    pub opportunities: usize,
    pub alerts: usize,
    pub strategic_insights: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSnapshot {
    pub date: String,
    pub volume: u64,
    pub approval_rate: f64,
    pub fraud_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSnapshot {
    pub code: String,
    pub label: String,
    pub status: RegionStatus,
    pub volume: String,
    /// Percent of total regional volume, one decimal place
    pub share_percent: f64,
    pub fraud_rate: String,
    pub approval_rate: f64,
    pub trend: String,
    pub trend_class: TrendClass,
    pub sparkline_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunnelStageSnapshot {
    pub name: String,
    pub volume: String,
    pub drop_percent: f64,
    pub pressure: PressureLevel,
    pub dropped_volume: u64,
    pub estimated_loss: f64,
    pub estimated_loss_display: String,
}

/// Everything the summary command reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub tool_version: &'static str,
    pub banner: BannerSummary,
    pub health: Vec<MetricCard>,
    pub trend: Vec<TrendSnapshot>,
    pub regions: Vec<RegionSnapshot>,
    pub average_order_value: f64,
    pub funnel: Vec<FunnelStageSnapshot>,
    pub support: SupportSignal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rca: Option<DirectionalSummary>,
}

impl DashboardSnapshot {
    /// Derive a snapshot from the dataset, stamped with the current time.
    #[must_use]
    pub fn build(
        dataset: &Dataset,
        average_order_value: f64,
        rca: Option<DirectionalSummary>,
    ) -> Self {
        let counts = dataset.counts();
        let total_volume = dataset.total_region_volume();

        let regions = dataset
            .regions
            .iter()
            .map(|r| RegionSnapshot {
                code: r.code.clone(),
                label: r.label.clone(),
                status: r.status,
                volume: format_volume(r.volume),
                share_percent: (volume_share(r.volume, total_volume) * 10.0).round() / 10.0,
                fraud_rate: format_rate_percent(r.fraud_rate),
                approval_rate: r.approval_rate,
                trend: r.trend_label.clone(),
                trend_class: classify_trend(&r.trend_label),
                sparkline_path: sparkline_path(&r.weekly_activity),
            })
            .collect();

        let funnel = dataset
            .funnel
            .iter()
            .map(|stage| {
                let loss = estimated_loss(stage, average_order_value);
                FunnelStageSnapshot {
                    name: stage.name.clone(),
                    volume: format_volume(stage.volume),
                    drop_percent: stage.drop_percent,
                    pressure: stage.pressure,
                    dropped_volume: dropped_volume(stage),
                    estimated_loss: loss,
                    estimated_loss_display: format_currency(loss),
                }
            })
            .collect();

        let trend = dataset
            .trend
            .iter()
            .map(|p| TrendSnapshot {
                date: p.date.clone(),
                volume: p.volume,
                approval_rate: p.approval_rate,
                fraud_rate: format_rate_percent(p.fraud_rate),
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION"),
            banner: BannerSummary {
                system_status: "Healthy",
                risk_posture: "Low",
                opportunities: counts.opportunities,
                alerts: counts.alerts,
                strategic_insights: counts.strategic,
            },
            health: dataset.system_health.clone(),
            trend,
            regions,
            average_order_value,
            funnel,
            support: support_signal(&dataset.support_trend),
            rca,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::generate_directional_summary;

    #[test]
    fn test_region_shares_are_rounded() {
        let snapshot = DashboardSnapshot::build(&Dataset::demo(), 85.0, None);
        let total: f64 = snapshot.regions.iter().map(|r| r.share_percent).sum();
        assert!((total - 100.0).abs() < 0.5);
        for region in &snapshot.regions {
            assert_eq!(region.share_percent, (region.share_percent * 10.0).round() / 10.0);
        }
    }

    #[test]
    fn test_funnel_losses_use_order_value() {
        let dataset = Dataset::demo();
        let cheap = DashboardSnapshot::build(&dataset, 10.0, None);
        let pricey = DashboardSnapshot::build(&dataset, 20.0, None);
        for (a, b) in cheap.funnel.iter().zip(&pricey.funnel) {
            assert!((b.estimated_loss - 2.0 * a.estimated_loss).abs() < 1e-6);
        }
    }

    #[test]
    fn test_banner_matches_dataset_counts() {
        let dataset = Dataset::demo();
        let snapshot = DashboardSnapshot::build(&dataset, 85.0, None);
        let counts = dataset.counts();
        assert_eq!(snapshot.banner.opportunities, counts.opportunities);
        assert_eq!(snapshot.banner.alerts, counts.alerts);
        assert_eq!(snapshot.banner.strategic_insights, counts.strategic);
    }

    #[test]
    fn test_rca_is_carried_through() {
        let dataset = Dataset::demo();
        let summary = generate_directional_summary("Why is APAC slipping?", &dataset);
        let snapshot = DashboardSnapshot::build(&dataset, 85.0, Some(summary.clone()));
        assert_eq!(snapshot.rca, Some(summary));
    }
}
