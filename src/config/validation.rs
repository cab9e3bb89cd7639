//! Configuration validation for fraud-pulse.

use super::defaults::{MAX_RCA_DELAY_MS, TICK_RATE_RANGE_MS};
use super::types::{AppConfig, FunnelConfig, PreferencesConfig, TuiConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.tui.validate());
        errors.extend(self.funnel.validate());
        errors.extend(self.preferences.validate());
        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !TICK_RATE_RANGE_MS.contains(&self.tick_rate_ms) {
            errors.push(ConfigError::new(
                "tui.tick_rate_ms",
                format!(
                    "Tick rate must be between {} and {} ms, got {}",
                    TICK_RATE_RANGE_MS.start(),
                    TICK_RATE_RANGE_MS.end(),
                    self.tick_rate_ms
                ),
            ));
        }
        if self.rca_delay_ms > MAX_RCA_DELAY_MS {
            errors.push(ConfigError::new(
                "tui.rca_delay_ms",
                format!(
                    "Reveal delay must be at most {MAX_RCA_DELAY_MS} ms, got {}",
                    self.rca_delay_ms
                ),
            ));
        }
        errors
    }
}

impl Validatable for FunnelConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !self.average_order_value.is_finite() || self.average_order_value <= 0.0 {
            errors.push(ConfigError::new(
                "funnel.average_order_value",
                format!(
                    "Average order value must be a positive amount, got {}",
                    self.average_order_value
                ),
            ));
        }
        errors
    }
}

impl Validatable for PreferencesConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                errors.push(ConfigError::new("preferences.path", "Path must not be empty"));
            } else if path.is_dir() {
                errors.push(ConfigError::new(
                    "preferences.path",
                    format!("Expected a file, found directory: {}", path.display()),
                ));
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_tick_rate_bounds() {
        let config = TuiConfig {
            tick_rate_ms: 5,
            ..TuiConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "tui.tick_rate_ms");
    }

    #[test]
    fn test_rca_delay_cap() {
        let config = TuiConfig {
            rca_delay_ms: MAX_RCA_DELAY_MS + 1,
            ..TuiConfig::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_average_order_value_must_be_positive() {
        for value in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let config = FunnelConfig {
                average_order_value: value,
            };
            assert!(!config.is_valid(), "{value} should be rejected");
        }
    }

    #[test]
    fn test_preference_path_must_not_be_directory() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = PreferencesConfig {
            persist: true,
            path: Some(tmp.path().to_path_buf()),
        };
        assert!(!config.is_valid());

        let config = PreferencesConfig {
            persist: true,
            path: Some(PathBuf::new()),
        };
        assert_eq!(config.validate()[0].message, "Path must not be empty");
    }

    #[test]
    fn test_errors_aggregate_across_sections() {
        let mut config = AppConfig::default();
        config.tui.tick_rate_ms = 0;
        config.funnel.average_order_value = 0.0;
        let fields: Vec<_> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["tui.tick_rate_ms", "funnel.average_order_value"]);
    }
}
