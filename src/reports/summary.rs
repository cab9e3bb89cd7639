//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable snapshot for terminal usage.

use super::{DashboardSnapshot, ReportFormat, ReportGenerator};
use crate::derived::{capitalize, format_thousands, TrendClass};
use crate::error::Result;
use crate::model::{PressureLevel, RegionStatus};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn trend_color(class: TrendClass) -> &'static str {
    match class {
        TrendClass::Positive => "green",
        TrendClass::Negative => "red",
        TrendClass::Neutral => "dim",
    }
}

const fn status_color(status: RegionStatus) -> &'static str {
    match status {
        RegionStatus::Opportunity => "green",
        RegionStatus::Watch => "yellow",
        RegionStatus::Alert => "red",
        RegionStatus::Stable => "dim",
    }
}

const fn pressure_color(level: PressureLevel) -> &'static str {
    match level {
        PressureLevel::Low => "green",
        PressureLevel::Medium => "yellow",
        PressureLevel::High => "red",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, snapshot: &DashboardSnapshot) -> Result<String> {
        let mut lines = Vec::new();
        let banner = &snapshot.banner;

        // Header
        lines.push(self.color("Fraud Operations Pulse", "bold"));
        lines.push(self.color(
            &format!(
                "Demo dataset · Last 24h · generated {}",
                snapshot.generated_at.format("%Y-%m-%d %H:%M UTC")
            ),
            "dim",
        ));
        lines.push(self.color("─".repeat(48).as_str(), "dim"));
        lines.push(format!(
            "{} {}   {} {}",
            self.color("System Status:", "cyan"),
            self.color(banner.system_status, "green"),
            self.color("Risk Posture:", "cyan"),
            self.color(banner.risk_posture, "green"),
        ));
        lines.push(format!(
            "You have {} opportunities, {} alerts, and {} strategic insights to review.",
            banner.opportunities, banner.alerts, banner.strategic_insights
        ));
        lines.push(String::new());

        // Health cards
        lines.push(self.color("System health:", "bold"));
        for card in &snapshot.health {
            lines.push(format!(
                "  {:<28} {:>10}  {}",
                card.name,
                card.display_value,
                self.color(
                    &card.trend_label,
                    trend_color(crate::derived::classify_trend(&card.trend_label))
                )
            ));
        }
        lines.push(String::new());

        // Regions
        lines.push(self.color("Regions:", "bold"));
        for region in &snapshot.regions {
            lines.push(format!(
                "  {:<4} {:<16} {:<12} {:>9} {:>6.1}%  fraud {:>5}  {}",
                region.code,
                region.label,
                self.color(&capitalize(region.status.as_str()), status_color(region.status)),
                region.volume,
                region.share_percent,
                region.fraud_rate,
                self.color(&region.trend, trend_color(region.trend_class)),
            ));
        }
        lines.push(String::new());

        // Funnel
        lines.push(self.color(
            &format!(
                "Conversion funnel (AOV {}):",
                crate::derived::format_currency(snapshot.average_order_value)
            ),
            "bold",
        ));
        for stage in &snapshot.funnel {
            lines.push(format!(
                "  {:<20} {:>9}  drop {:>5.1}%  lost {:>7}  {}",
                stage.name,
                stage.volume,
                stage.drop_percent,
                stage.estimated_loss_display,
                self.color(stage.pressure.as_str(), pressure_color(stage.pressure)),
            ));
        }
        lines.push(String::new());

        // Support
        lines.push(format!(
            "{} {} tickets this week, {} escalations per day",
            self.color("Support signal:", "bold"),
            format_thousands(u64::from(snapshot.support.tickets_total)),
            snapshot.support.avg_escalations
        ));

        if let Some(rca) = &snapshot.rca {
            lines.push(String::new());
            lines.push(self.color(&format!("Root cause: {}", rca.query), "bold"));
            for (i, driver) in rca.drivers.iter().enumerate() {
                lines.push(format!("  {}. {driver}", i + 1));
            }
            lines.push(format!("  {} {}", self.color("Impact:", "yellow"), rca.impact));
            for action in &rca.actions {
                lines.push(format!("  - {action}"));
            }
            lines.push(self.color(&format!("  {}", rca.notice), "dim"));
        }

        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;

    fn snapshot() -> DashboardSnapshot {
        DashboardSnapshot::build(&Dataset::demo(), 85.0, None)
    }

    #[test]
    fn test_plain_output_has_no_escapes() {
        let text = SummaryReporter::new()
            .no_color()
            .generate(&snapshot())
            .expect("generate");
        assert!(!text.contains('\x1b'));
        assert!(text.contains("System Status: Healthy"));
        assert!(text.contains("You have 3 opportunities, 3 alerts, and 6 strategic insights"));
        assert!(text.contains("Conversion funnel (AOV $85):"));
    }

    #[test]
    fn test_colored_output_wraps_status() {
        let text = SummaryReporter::new().generate(&snapshot()).expect("generate");
        assert!(text.contains("\x1b[32mHealthy\x1b[0m"));
    }

    #[test]
    fn test_rca_section_only_when_present() {
        let dataset = Dataset::demo();
        let plain = SummaryReporter::new().no_color();
        assert!(!plain
            .generate(&snapshot())
            .expect("generate")
            .contains("Root cause:"));

        let summary = crate::analysis::generate_directional_summary("Why?", &dataset);
        let with_rca = DashboardSnapshot::build(&dataset, 85.0, Some(summary));
        let text = plain.generate(&with_rca).expect("generate");
        assert!(text.contains("Root cause: Why?"));
    }
}
