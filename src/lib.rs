//! **A terminal dashboard for fraud-operations metrics.**
//!
//! `fraud-pulse` renders a static demo dataset describing transaction volume,
//! approval and fraud rates, regional performance, a six-stage conversion
//! funnel, product and cohort segments, support load, and a curated list of
//! opportunities, alerts, and strategic initiatives. Analysts navigate it from
//! the keyboard, annotate insights, log feedback, and ask a placeholder
//! root-cause assistant for a directional summary.
//!
//! ## Core Concepts & Modules
//!
//! - **[`data`]**: The immutable [`Dataset`] and its seeded demo values.
//! - **[`derived`]**: Pure helpers that turn raw records into display values
//!   (volume formatting, shares, sparklines, trend classes, funnel losses).
//! - **[`state`]**: The transient UI state. [`DashboardState::apply`] is a pure
//!   reducer; [`Store`] runs the side effects it asks for through swappable
//!   seams (preferences, presentation, feedback sink, summary engine).
//! - **[`analysis`]**: The [`SummaryEngine`] trait and its sample implementation.
//! - **[`reports`]**: Non-interactive snapshots in text or JSON.
//! - **[`tui`]**: The interactive ratatui front end.
//!
//! ## Driving the state without a terminal
//!
//! ```
//! use fraud_pulse::{Action, Dataset, DashboardTab, Store};
//!
//! let mut store = Store::builder(Dataset::demo()).build();
//! store.dispatch(Action::SelectTab(DashboardTab::TrendAnalysis));
//! assert_eq!(store.state().active_tab, DashboardTab::TrendAnalysis);
//! ```
//!
//! ## Rendering a snapshot
//!
//! ```
//! use fraud_pulse::{reports::create_reporter, DashboardSnapshot, Dataset, ReportFormat};
//!
//! let snapshot = DashboardSnapshot::build(&Dataset::demo(), 85.0, None);
//! let json = create_reporter(ReportFormat::Json, false).generate(&snapshot).unwrap();
//! assert!(json.contains("\"funnel\""));
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // usize/f64/u16 casts are pervasive in TUI layout math and rate calculations
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    clippy::similar_names
)]

pub mod analysis;
pub mod cli;
pub mod config;
pub mod data;
pub mod derived;
pub mod error;
pub mod model;
pub mod reports;
pub mod state;
pub mod tui;
pub mod utils;

// Re-export main types for convenience
pub use analysis::{DirectionalSummary, SampleSummaryEngine, SummaryEngine};
pub use config::{AppConfig, ConfigError, DashboardOverrides, Validatable};
pub use data::Dataset;
pub use error::{DatasetErrorKind, PulseError, Result};
pub use model::{FeedbackTarget, InsightId, MacroInsightId};
pub use reports::{DashboardSnapshot, ReportFormat, ReportGenerator};
pub use state::{
    Action, DashboardState, DashboardTab, Effect, FilePreferenceStore, MemoryPreferenceStore,
    PreferenceStore, Store, StoreBuilder, ThemeMode,
};
