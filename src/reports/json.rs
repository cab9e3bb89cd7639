//! JSON report generator.

use super::{DashboardSnapshot, ReportFormat, ReportGenerator};
use crate::error::Result;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, snapshot: &DashboardSnapshot) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(snapshot)?
        } else {
            serde_json::to_string(snapshot)?
        };
        Ok(json)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;

    #[test]
    fn test_json_shape() {
        let snapshot = DashboardSnapshot::build(&Dataset::demo(), 85.0, None);
        let json = JsonReporter::new()
            .pretty(false)
            .generate(&snapshot)
            .expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["banner"]["system_status"], "Healthy");
        assert_eq!(value["regions"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["funnel"].as_array().map(Vec::len), Some(6));
        assert_eq!(value["regions"][0]["status"], "opportunity");
        assert!(value.get("rca").is_none());
        assert!(!json.contains('\n'));
    }
}
