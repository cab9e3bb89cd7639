//! Dashboard UI state.
//!
//! [`DashboardState`] is a plain value changed only through typed
//! [`Action`]s. Each transition returns the [`Effect`]s it needs, and the
//! [`Store`] executes them through its seams:
//!
//! - [`PreferenceStore`] persists the theme
//! - [`PresentationSurface`] mirrors the theme onto the terminal palette
//! - [`FeedbackSink`] receives submitted feedback
//! - [`SummaryEngine`](crate::analysis::SummaryEngine) answers root-cause queries

mod actions;
mod feedback;
mod panels;
mod preferences;
mod reducer;
mod store;
mod tabs;
mod theme;

pub use actions::{Action, Effect};
pub use feedback::{FeedbackForm, FeedbackForms, FeedbackRecord, Sentiment};
pub use panels::{FunnelPanel, RcaPanel, RcaPhase};
pub use preferences::{
    load_theme, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, Preferences,
};
pub use reducer::DashboardState;
pub use store::{
    FeedbackSink, LogFeedbackSink, NoopSurface, PresentationSurface, Store, StoreBuilder,
};
pub use tabs::DashboardTab;
pub use theme::ThemeMode;
