//! Configuration module for fraud-pulse.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - Command-line override merging
//!
//! # Configuration File
//!
//! Place a `.fraud-pulse.yaml` file in the current directory or
//! `~/.config/fraud-pulse/`:
//!
//! ```yaml
//! tui:
//!   default_tab: trend-analysis
//!   rca_delay_ms: 0
//! funnel:
//!   average_order_value: 120.0
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_AVERAGE_ORDER_VALUE, DEFAULT_RCA_DELAY_MS, DEFAULT_TICK_RATE_MS, MAX_RCA_DELAY_MS,
};
pub use types::{
    AppConfig, DashboardOverrides, FunnelConfig, PreferencesConfig, TuiConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    config_search_dirs, discover_config_file, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `.fraud-pulse.yaml` format.
///
/// Editors can use it for validation and autocompletion.
pub fn generate_json_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}
