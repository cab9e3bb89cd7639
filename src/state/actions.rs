//! Typed state transitions and their side effects.

use super::{DashboardTab, FeedbackRecord, Sentiment, ThemeMode};
use crate::analysis::DirectionalSummary;
use crate::model::{FeedbackTarget, InsightId};

/// Everything the UI can ask the dashboard state to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectTab(DashboardTab),
    /// Expand an insight, or collapse it if already expanded
    SelectInsight(InsightId),
    DeselectInsight,
    ToggleFeedback {
        target: FeedbackTarget,
        sentiment: Sentiment,
    },
    SetDraftText {
        target: FeedbackTarget,
        text: String,
    },
    SubmitFeedback(FeedbackTarget),
    CloseFeedback(FeedbackTarget),
    SetNote {
        insight: InsightId,
        text: String,
    },
    ToggleTheme,
    SelectFunnelStage(usize),
    CloseFunnelPanel,
    StartRca,
    SetRcaQuery(String),
    GenerateRca,
    RevealRca(DirectionalSummary),
    ResetRca,
    CloseRca,
}

/// Side effects requested by a transition, executed by the
/// [`Store`](super::Store).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PersistTheme(ThemeMode),
    ApplyPresentation(ThemeMode),
    RecordFeedback(FeedbackRecord),
    /// Produce a summary for `query` and reveal it once the delay passes
    ScheduleRcaReveal { query: String },
}
