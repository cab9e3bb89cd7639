//! Configuration type definitions for fraud-pulse.

use super::defaults::{
    DEFAULT_AVERAGE_ORDER_VALUE, DEFAULT_RCA_DELAY_MS, DEFAULT_TICK_RATE_MS,
};
use crate::state::{DashboardTab, FilePreferenceStore};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Application Configuration
// ============================================================================

/// Top-level configuration, usually read from `.fraud-pulse.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Interactive dashboard settings
    pub tui: TuiConfig,
    /// Funnel loss estimation
    pub funnel: FunnelConfig,
    /// Theme preference persistence
    pub preferences: PreferencesConfig,
}

impl AppConfig {
    /// Layer command-line overrides on top of file settings.
    pub fn apply_overrides(&mut self, overrides: &DashboardOverrides) {
        if let Some(tab) = overrides.tab {
            self.tui.default_tab = tab;
        }
        if let Some(delay) = overrides.rca_delay_ms {
            self.tui.rca_delay_ms = delay;
        }
        if overrides.no_persist {
            self.preferences.persist = false;
        }
    }
}

/// Values taken from `fraud-pulse dashboard` flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardOverrides {
    pub tab: Option<DashboardTab>,
    pub rca_delay_ms: Option<u64>,
    pub no_persist: bool,
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// Interactive dashboard settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Event loop tick in milliseconds
    #[schemars(range(min = 10, max = 1000))]
    pub tick_rate_ms: u64,
    /// Tab shown on launch
    pub default_tab: DashboardTab,
    /// Cosmetic delay before a root-cause summary is revealed, in milliseconds
    #[schemars(range(max = 10000))]
    pub rca_delay_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            default_tab: DashboardTab::default(),
            rca_delay_ms: DEFAULT_RCA_DELAY_MS,
        }
    }
}

impl TuiConfig {
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    #[must_use]
    pub const fn rca_delay(&self) -> Duration {
        Duration::from_millis(self.rca_delay_ms)
    }
}

// ============================================================================
// Funnel Configuration
// ============================================================================

/// Funnel loss estimation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FunnelConfig {
    /// Average order value in dollars used to price dropped transactions
    pub average_order_value: f64,
}

impl Default for FunnelConfig {
    fn default() -> Self {
        Self {
            average_order_value: DEFAULT_AVERAGE_ORDER_VALUE,
        }
    }
}

// ============================================================================
// Preference Persistence
// ============================================================================

/// Where (and whether) the theme preference is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PreferencesConfig {
    /// Persist theme changes between sessions
    pub persist: bool,
    /// Override the preference file location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            persist: true,
            path: None,
        }
    }
}

impl PreferencesConfig {
    /// Resolved preference file path, if one can be determined.
    #[must_use]
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(FilePreferenceStore::default_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.tui.tick_rate_ms, 100);
        assert_eq!(config.tui.default_tab, DashboardTab::Overview);
        assert_eq!(config.funnel.average_order_value, 85.0);
        assert!(config.preferences.persist);
    }

    #[test]
    fn test_overrides_only_touch_set_fields() {
        let mut config = AppConfig::default();
        config.apply_overrides(&DashboardOverrides {
            tab: Some(DashboardTab::StrategicInsights),
            ..DashboardOverrides::default()
        });
        assert_eq!(config.tui.default_tab, DashboardTab::StrategicInsights);
        assert_eq!(config.tui.rca_delay_ms, DEFAULT_RCA_DELAY_MS);
        assert!(config.preferences.persist);

        config.apply_overrides(&DashboardOverrides {
            rca_delay_ms: Some(0),
            no_persist: true,
            ..DashboardOverrides::default()
        });
        assert_eq!(config.tui.rca_delay(), Duration::ZERO);
        assert!(!config.preferences.persist);
    }

    #[test]
    fn test_explicit_preference_path_wins() {
        let prefs = PreferencesConfig {
            persist: true,
            path: Some(PathBuf::from("/tmp/prefs.json")),
        };
        assert_eq!(prefs.resolved_path(), Some(PathBuf::from("/tmp/prefs.json")));
    }
}
