//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod dashboard;
mod output;
mod summary;

pub use dashboard::{build_store, run_dashboard};
pub use output::{default_log_file, should_use_color, write_output, OutputTarget};
pub use summary::{render_summary, run_summary, SummaryOptions};

use crate::config::{AppConfig, Validatable};
use crate::error::{PulseError, Result};

/// Reject a configuration with any validation errors, listing all of them.
fn ensure_valid(config: &AppConfig) -> Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let listed: Vec<String> = errors.iter().map(ToString::to_string).collect();
    Err(PulseError::config(listed.join("; ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_valid_lists_every_error() {
        let mut config = AppConfig::default();
        config.tui.tick_rate_ms = 0;
        config.funnel.average_order_value = -1.0;
        let err = ensure_valid(&config).unwrap_err();
        assert!(matches!(err, PulseError::Config(_)));
        let message = err.to_string();
        assert!(message.starts_with("invalid configuration: "));
        assert!(message.contains("tick_rate_ms"));
        assert!(message.contains("average_order_value"));
        assert!(ensure_valid(&AppConfig::default()).is_ok());
    }
}
