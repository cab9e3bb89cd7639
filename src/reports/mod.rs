//! Non-interactive dashboard snapshots.
//!
//! A [`DashboardSnapshot`] captures everything the overview shows, already
//! derived and formatted. Reporters turn it into output:
//! - Summary: compact, optionally colored text for shells
//! - JSON: structured data for scripts

mod json;
mod snapshot;
mod summary;
mod types;

pub use json::JsonReporter;
pub use snapshot::{
    BannerSummary, DashboardSnapshot, FunnelStageSnapshot, RegionSnapshot, TrendSnapshot,
};
pub use summary::SummaryReporter;
pub use types::ReportFormat;

use crate::error::Result;
use std::io::Write;

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a snapshot to a string.
    fn generate(&self, snapshot: &DashboardSnapshot) -> Result<String>;

    /// Write report to a writer
    fn write_report(&self, snapshot: &DashboardSnapshot, writer: &mut dyn Write) -> Result<()> {
        let report = self.generate(snapshot)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter(format: ReportFormat, colored: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            let reporter = SummaryReporter::new();
            if colored {
                Box::new(reporter)
            } else {
                Box::new(reporter.no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}
