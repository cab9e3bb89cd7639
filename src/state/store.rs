//! State container that executes effects through pluggable seams.

use super::{
    load_theme, Action, DashboardState, DashboardTab, Effect, FeedbackRecord,
    MemoryPreferenceStore, PreferenceStore, Preferences, ThemeMode,
};
use crate::analysis::{DirectionalSummary, SampleSummaryEngine, SummaryEngine};
use crate::data::Dataset;
use std::time::{Duration, Instant};

/// Receives the active theme whenever it changes.
pub trait PresentationSurface: Send {
    fn apply(&mut self, theme: ThemeMode);
}

/// Surface that ignores theme changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSurface;

impl PresentationSurface for NoopSurface {
    fn apply(&mut self, _theme: ThemeMode) {}
}

/// Destination for submitted feedback.
pub trait FeedbackSink: Send {
    fn record(&mut self, record: &FeedbackRecord);
}

/// Writes feedback to the `fraud_pulse::feedback` tracing target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFeedbackSink;

impl FeedbackSink for LogFeedbackSink {
    fn record(&mut self, record: &FeedbackRecord) {
        tracing::info!(
            target: "fraud_pulse::feedback",
            kind = record.target.namespace(),
            id = %record.target,
            title = %record.title,
            sentiment = %record.sentiment,
            text = %record.text,
            "Feedback submitted"
        );
    }
}

#[derive(Debug)]
struct PendingReveal {
    due: Instant,
    summary: DirectionalSummary,
}

/// Owns [`DashboardState`] and runs the effects its transitions request.
pub struct Store {
    state: DashboardState,
    dataset: Dataset,
    preferences: Box<dyn PreferenceStore>,
    surface: Box<dyn PresentationSurface>,
    feedback_sink: Box<dyn FeedbackSink>,
    engine: Box<dyn SummaryEngine>,
    rca_delay: Duration,
    pending: Option<PendingReveal>,
    warning: Option<String>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("engine", &self.engine.name())
            .field("rca_delay", &self.rca_delay)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl Store {
    #[must_use]
    pub fn builder(dataset: Dataset) -> StoreBuilder {
        StoreBuilder::new(dataset)
    }

    #[must_use]
    pub const fn state(&self) -> &DashboardState {
        &self.state
    }

    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub const fn rca_delay(&self) -> Duration {
        self.rca_delay
    }

    /// Apply an action, running its effects immediately.
    pub fn dispatch(&mut self, action: Action) {
        self.dispatch_at(action, Instant::now());
    }

    /// Apply an action as if it happened at `now`.
    pub fn dispatch_at(&mut self, action: Action, now: Instant) {
        tracing::trace!(?action, "dispatch");
        let effects = self.state.apply(action, &self.dataset);
        for effect in effects {
            self.run(effect, now);
        }
    }

    /// Reveal a pending summary once its delay has passed.
    ///
    /// Returns `true` if something was revealed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.due);
        if !due {
            return false;
        }
        match self.pending.take() {
            Some(pending) => {
                self.dispatch_at(Action::RevealRca(pending.summary), now);
                true
            }
            None => false,
        }
    }

    /// Whether a summary is waiting for its reveal.
    #[must_use]
    pub const fn has_pending_reveal(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the last non-fatal failure (e.g. a preference write error).
    pub fn take_warning(&mut self) -> Option<String> {
        self.warning.take()
    }

    fn run(&mut self, effect: Effect, now: Instant) {
        match effect {
            Effect::PersistTheme(theme) => {
                if let Err(e) = self.preferences.save(&Preferences { theme }) {
                    tracing::warn!("Failed to save theme preference: {e}");
                    self.warning = Some(format!("Theme not saved: {e}"));
                }
            }
            Effect::ApplyPresentation(theme) => {
                tracing::debug!(%theme, "Applying theme");
                self.surface.apply(theme);
            }
            Effect::RecordFeedback(record) => {
                self.feedback_sink.record(&record);
            }
            Effect::ScheduleRcaReveal { query } => {
                let summary = self.engine.summarize(&query, &self.dataset);
                if self.rca_delay.is_zero() {
                    self.dispatch_at(Action::RevealRca(summary), now);
                } else {
                    self.pending = Some(PendingReveal {
                        due: now + self.rca_delay,
                        summary,
                    });
                }
            }
        }
    }
}

/// Builder for [`Store`].
///
/// Defaults: in-memory preferences, no presentation surface, log feedback
/// sink, the sample summary engine, and no reveal delay.
pub struct StoreBuilder {
    dataset: Dataset,
    initial_tab: DashboardTab,
    preferences: Box<dyn PreferenceStore>,
    surface: Box<dyn PresentationSurface>,
    feedback_sink: Box<dyn FeedbackSink>,
    engine: Box<dyn SummaryEngine>,
    rca_delay: Duration,
}

impl StoreBuilder {
    fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            initial_tab: DashboardTab::default(),
            preferences: Box::new(MemoryPreferenceStore::new()),
            surface: Box::new(NoopSurface),
            feedback_sink: Box::new(LogFeedbackSink),
            engine: Box::new(SampleSummaryEngine),
            rca_delay: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn initial_tab(mut self, tab: DashboardTab) -> Self {
        self.initial_tab = tab;
        self
    }

    #[must_use]
    pub fn preferences(mut self, store: impl PreferenceStore + 'static) -> Self {
        self.preferences = Box::new(store);
        self
    }

    #[must_use]
    pub fn surface(mut self, surface: impl PresentationSurface + 'static) -> Self {
        self.surface = Box::new(surface);
        self
    }

    #[must_use]
    pub fn feedback_sink(mut self, sink: impl FeedbackSink + 'static) -> Self {
        self.feedback_sink = Box::new(sink);
        self
    }

    #[must_use]
    pub fn engine(mut self, engine: impl SummaryEngine + 'static) -> Self {
        self.engine = Box::new(engine);
        self
    }

    #[must_use]
    pub const fn rca_delay(mut self, delay: Duration) -> Self {
        self.rca_delay = delay;
        self
    }

    /// Read the stored theme and mirror it onto the surface once.
    #[must_use]
    pub fn build(mut self) -> Store {
        let theme = load_theme(self.preferences.as_ref());
        tracing::debug!(%theme, source = %self.preferences.describe(), "Loaded theme");
        self.surface.apply(theme);

        Store {
            state: DashboardState::new(self.initial_tab, theme),
            dataset: self.dataset,
            preferences: self.preferences,
            surface: self.surface,
            feedback_sink: self.feedback_sink,
            engine: self.engine,
            rca_delay: self.rca_delay,
            pending: None,
            warning: None,
        }
    }
}
