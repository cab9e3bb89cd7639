//! Dashboard command handler.
//!
//! Implements the `dashboard` subcommand: builds the store from
//! configuration and hands it to the terminal loop.

use super::ensure_valid;
use crate::config::AppConfig;
use crate::data::Dataset;
use crate::state::{FilePreferenceStore, LogFeedbackSink, MemoryPreferenceStore, Store};
use crate::tui::{self, App, PaletteSurface};
use anyhow::{Context, Result};

/// Assemble the store the dashboard runs on.
///
/// With persistence disabled, or with no resolvable preference location,
/// the theme lives only in memory for this session.
pub fn build_store(config: &AppConfig, dataset: Dataset) -> Store {
    let builder = Store::builder(dataset)
        .initial_tab(config.tui.default_tab)
        .surface(PaletteSurface)
        .feedback_sink(LogFeedbackSink)
        .rca_delay(config.tui.rca_delay());

    let builder = if !config.preferences.persist {
        tracing::debug!("Theme persistence disabled");
        builder.preferences(MemoryPreferenceStore::new())
    } else if let Some(path) = config.preferences.resolved_path() {
        tracing::debug!("Theme preference file: {}", path.display());
        builder.preferences(FilePreferenceStore::new(path))
    } else {
        tracing::warn!("No config directory available; theme changes will not be saved");
        builder.preferences(FilePreferenceStore::at_default_location())
    };

    builder.build()
}

/// Run the dashboard command
pub fn run_dashboard(config: &AppConfig) -> Result<()> {
    ensure_valid(config)?;

    let dataset = Dataset::demo();
    dataset.validate().context("built-in dataset is inconsistent")?;

    let store = build_store(config, dataset);
    tracing::info!(
        tab = %config.tui.default_tab.key(),
        theme = %store.state().theme,
        "Starting dashboard"
    );

    let mut app = App::new(store).with_average_order_value(config.funnel.average_order_value);
    tui::run_dashboard(&mut app, config.tui.tick_rate()).context("terminal error")?;

    tracing::info!("Dashboard closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Action, DashboardTab, ThemeMode};

    #[test]
    fn test_build_store_uses_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.tui.default_tab = DashboardTab::StrategicInsights;
        config.preferences.path = Some(dir.path().join("prefs.json"));

        let mut store = build_store(&config, Dataset::demo());
        assert_eq!(store.state().active_tab, DashboardTab::StrategicInsights);

        store.dispatch(Action::ToggleTheme);
        let saved = std::fs::read_to_string(dir.path().join("prefs.json")).unwrap();
        assert!(saved.contains("dark"));

        let store = build_store(&config, Dataset::demo());
        assert_eq!(store.state().theme, ThemeMode::Dark);
    }

    #[test]
    fn test_no_persist_keeps_files_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.preferences.persist = false;
        config.preferences.path = Some(dir.path().join("prefs.json"));

        let mut store = build_store(&config, Dataset::demo());
        store.dispatch(Action::ToggleTheme);
        assert!(!dir.path().join("prefs.json").exists());
    }
}
