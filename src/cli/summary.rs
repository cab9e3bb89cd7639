//! Summary command handler.
//!
//! Implements the `summary` subcommand: a non-interactive snapshot of the
//! dashboard for shells and scripts.

use super::ensure_valid;
use super::output::{should_use_color, write_output, OutputTarget};
use crate::analysis::{SampleSummaryEngine, SummaryEngine};
use crate::config::AppConfig;
use crate::data::Dataset;
use crate::reports::{create_reporter, DashboardSnapshot, ReportFormat};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Flags of the `summary` subcommand.
#[derive(Debug, Clone, Default)]
pub struct SummaryOptions {
    pub format: ReportFormat,
    pub output_file: Option<PathBuf>,
    /// Root-cause question to answer alongside the snapshot
    pub rca_query: Option<String>,
    pub no_color: bool,
}

/// Render the snapshot to a string.
pub fn render_summary(config: &AppConfig, options: &SummaryOptions) -> Result<String> {
    ensure_valid(config)?;

    let dataset = Dataset::demo();
    dataset.validate().context("built-in dataset is inconsistent")?;

    let rca = options
        .rca_query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(|q| {
            tracing::debug!(query = q, "Generating directional summary");
            SampleSummaryEngine.summarize(q, &dataset)
        });

    let snapshot =
        DashboardSnapshot::build(&dataset, config.funnel.average_order_value, rca);

    // Files never get escape codes
    let colored = options.output_file.is_none() && should_use_color(options.no_color);
    let reporter = create_reporter(options.format, colored);
    reporter
        .generate(&snapshot)
        .with_context(|| format!("failed to render {} summary", options.format))
}

/// Run the summary command
pub fn run_summary(config: &AppConfig, options: &SummaryOptions) -> Result<()> {
    let content = render_summary(config, options)?;
    write_output(&content, &OutputTarget::from_option(options.output_file.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_summary_with_rca() {
        let options = SummaryOptions {
            format: ReportFormat::Json,
            rca_query: Some("  Why is LATAM declining?  ".to_string()),
            ..SummaryOptions::default()
        };
        let json = render_summary(&AppConfig::default(), &options).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rca"]["query"], "Why is LATAM declining?");
    }

    #[test]
    fn test_blank_rca_query_is_ignored() {
        let options = SummaryOptions {
            format: ReportFormat::Json,
            rca_query: Some("   ".to_string()),
            ..SummaryOptions::default()
        };
        let json = render_summary(&AppConfig::default(), &options).unwrap();
        assert!(!json.contains("\"rca\""));
    }

    #[test]
    fn test_summary_to_file_is_uncolored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.txt");
        let options = SummaryOptions {
            output_file: Some(path.clone()),
            ..SummaryOptions::default()
        };
        run_summary(&AppConfig::default(), &options).unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.starts_with("Fraud Operations Pulse"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = AppConfig::default();
        config.funnel.average_order_value = 0.0;
        assert!(render_summary(&config, &SummaryOptions::default()).is_err());
    }
}
