//! Config file to running store, end to end.

use fraud_pulse::cli::{build_store, render_summary, SummaryOptions};
use fraud_pulse::config::{load_or_default, AppConfig, DashboardOverrides, Validatable};
use fraud_pulse::state::{Action, DashboardTab, ThemeMode};
use fraud_pulse::{Dataset, PulseError, ReportFormat};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_config(dir: &Path, prefs_path: &Path) -> std::path::PathBuf {
    let path = dir.join(".fraud-pulse.yaml");
    let yaml = format!(
        "tui:\n  default_tab: strategic-insights\n  rca_delay_ms: 0\nfunnel:\n  average_order_value: 120.0\npreferences:\n  path: {}\n",
        prefs_path.display()
    );
    fs::write(&path, yaml).unwrap();
    path
}

#[test]
fn config_file_drives_the_store() {
    let dir = TempDir::new().unwrap();
    let prefs_path = dir.path().join("state").join("preferences.json");
    let config_path = write_config(dir.path(), &prefs_path);

    let (config, loaded_from) = load_or_default(Some(&config_path));
    assert_eq!(loaded_from.as_deref(), Some(config_path.as_path()));
    assert!(config.is_valid());

    let mut store = build_store(&config, Dataset::demo());
    assert_eq!(store.state().active_tab, DashboardTab::StrategicInsights);
    assert!(store.rca_delay().is_zero());

    store.dispatch(Action::ToggleTheme);
    assert!(prefs_path.exists());

    let reopened = build_store(&config, Dataset::demo());
    assert_eq!(reopened.state().theme, ThemeMode::Dark);
}

#[test]
fn cli_overrides_win_over_the_file() {
    let dir = TempDir::new().unwrap();
    let prefs_path = dir.path().join("preferences.json");
    let config_path = write_config(dir.path(), &prefs_path);

    let (mut config, _) = load_or_default(Some(&config_path));
    config.apply_overrides(&DashboardOverrides {
        tab: Some(DashboardTab::Overview),
        rca_delay_ms: None,
        no_persist: true,
    });

    let mut store = build_store(&config, Dataset::demo());
    assert_eq!(store.state().active_tab, DashboardTab::Overview);
    store.dispatch(Action::ToggleTheme);
    assert!(!prefs_path.exists());
}

#[test]
fn summary_uses_configured_order_value() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(dir.path(), &dir.path().join("p.json"));
    let (config, _) = load_or_default(Some(&config_path));

    let text = render_summary(
        &config,
        &SummaryOptions {
            format: ReportFormat::Summary,
            no_color: true,
            ..SummaryOptions::default()
        },
    )
    .unwrap();
    assert!(text.contains("Conversion funnel (AOV $120):"));
}

#[test]
fn broken_yaml_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fraud-pulse.yaml");
    fs::write(&path, "tui: [not, a, map").unwrap();

    let (config, loaded_from) = load_or_default(Some(&path));
    assert_eq!(config, AppConfig::default());
    assert!(loaded_from.is_none());
}

#[test]
fn out_of_range_values_are_reported_together() {
    let mut config = AppConfig::default();
    config.tui.tick_rate_ms = 0;
    config.funnel.average_order_value = -1.0;

    let errors = config.validate();
    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
    assert!(fields.contains(&"tui.tick_rate_ms"));
    assert!(fields.contains(&"funnel.average_order_value"));

    let err = render_summary(&config, &SummaryOptions::default()).unwrap_err();
    assert!(err.to_string().contains("invalid configuration"));
    assert!(matches!(
        err.downcast_ref::<PulseError>(),
        Some(PulseError::Config(_))
    ));
}
