//! The dashboard state and its transition function.

use super::{
    Action, DashboardTab, Effect, FeedbackForms, FeedbackRecord, FunnelPanel, RcaPanel, RcaPhase,
    ThemeMode,
};
use crate::data::Dataset;
use crate::model::{FeedbackTarget, InsightId};
use std::collections::HashMap;

/// Transient UI state, lost on exit except for the theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub active_tab: DashboardTab,
    /// At most one insight is expanded across every list
    pub expanded: Option<InsightId>,
    pub feedback: FeedbackForms,
    pub notes: HashMap<InsightId, String>,
    pub theme: ThemeMode,
    pub rca: RcaPanel,
    pub funnel: FunnelPanel,
}

impl DashboardState {
    #[must_use]
    pub fn new(active_tab: DashboardTab, theme: ThemeMode) -> Self {
        Self {
            active_tab,
            theme,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_expanded(&self, id: InsightId) -> bool {
        self.expanded == Some(id)
    }

    #[must_use]
    pub fn note(&self, id: InsightId) -> &str {
        self.notes.get(&id).map_or("", String::as_str)
    }

    /// Apply one action and return the effects it requests.
    ///
    /// Actions that reference unknown records, or that fail a UI guard such
    /// as a blank draft, leave the state untouched and return no effects.
    pub fn apply(&mut self, action: Action, dataset: &Dataset) -> Vec<Effect> {
        match action {
            Action::SelectTab(tab) => {
                self.active_tab = tab;
            }
            Action::SelectInsight(id) => {
                if dataset.insight(id).is_some() {
                    self.expanded = if self.expanded == Some(id) {
                        None
                    } else {
                        Some(id)
                    };
                }
            }
            Action::DeselectInsight => {
                self.expanded = None;
            }
            Action::ToggleFeedback { target, sentiment } => {
                if target_title(dataset, &target).is_some() {
                    self.feedback.toggle(target, sentiment);
                }
            }
            Action::SetDraftText { target, text } => {
                self.feedback.set_draft(&target, text);
            }
            Action::SubmitFeedback(target) => {
                let Some(title) = target_title(dataset, &target) else {
                    return Vec::new();
                };
                if let Some(form) = self.feedback.take_submittable(&target) {
                    return vec![Effect::RecordFeedback(FeedbackRecord {
                        target,
                        title: title.to_string(),
                        sentiment: form.sentiment,
                        text: form.draft.trim().to_string(),
                    })];
                }
            }
            Action::CloseFeedback(target) => {
                self.feedback.close(&target);
            }
            Action::SetNote { insight, text } => {
                if dataset.insight(insight).is_some() {
                    if text.is_empty() {
                        self.notes.remove(&insight);
                    } else {
                        self.notes.insert(insight, text);
                    }
                }
            }
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                return vec![
                    Effect::PersistTheme(self.theme),
                    Effect::ApplyPresentation(self.theme),
                ];
            }
            Action::SelectFunnelStage(index) => {
                if index < dataset.funnel.len() {
                    self.funnel.selected = Some(index);
                    self.rca.open = false;
                }
            }
            Action::CloseFunnelPanel => {
                self.funnel.selected = None;
            }
            Action::StartRca => {
                self.rca.open = true;
                self.funnel.selected = None;
            }
            Action::SetRcaQuery(query) => {
                self.rca.query = query;
            }
            Action::GenerateRca => {
                let query = self.rca.query.trim();
                if query.is_empty() || self.rca.is_pending() {
                    return Vec::new();
                }
                let query = query.to_string();
                self.rca.phase = RcaPhase::Pending {
                    query: query.clone(),
                };
                return vec![Effect::ScheduleRcaReveal { query }];
            }
            Action::RevealRca(summary) => {
                // Stale results from before a reset are dropped
                let matches = matches!(
                    &self.rca.phase,
                    RcaPhase::Pending { query } if *query == summary.query
                );
                if matches {
                    self.rca.phase = RcaPhase::Ready(summary);
                }
            }
            Action::ResetRca => {
                self.rca.reset();
            }
            Action::CloseRca => {
                self.rca.open = false;
            }
        }
        Vec::new()
    }
}

fn target_title<'a>(dataset: &'a Dataset, target: &FeedbackTarget) -> Option<&'a str> {
    match target {
        FeedbackTarget::Insight(id) => dataset.insight(*id).map(|i| i.title.as_str()),
        FeedbackTarget::Macro(id) => dataset.macro_insight(*id).map(|m| m.title.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::generate_directional_summary;
    use crate::model::MacroInsightId;
    use crate::state::Sentiment;

    fn setup() -> (DashboardState, Dataset) {
        (DashboardState::default(), Dataset::demo())
    }

    #[test]
    fn test_single_expansion() {
        let (mut state, data) = setup();
        state.apply(Action::SelectInsight(InsightId(1)), &data);
        state.apply(Action::SelectInsight(InsightId(2)), &data);
        assert_eq!(state.expanded, Some(InsightId(2)));

        state.apply(Action::SelectInsight(InsightId(2)), &data);
        assert_eq!(state.expanded, None);

        state.apply(Action::SelectInsight(InsightId(3)), &data);
        state.apply(Action::DeselectInsight, &data);
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn test_unknown_insight_is_ignored() {
        let (mut state, data) = setup();
        state.apply(Action::SelectInsight(InsightId(1)), &data);
        state.apply(Action::SelectInsight(InsightId(404)), &data);
        assert_eq!(state.expanded, Some(InsightId(1)));
    }

    #[test]
    fn test_submit_emits_trimmed_record() {
        let (mut state, data) = setup();
        let target = FeedbackTarget::Macro(MacroInsightId(2));
        state.apply(
            Action::ToggleFeedback {
                target,
                sentiment: Sentiment::Positive,
            },
            &data,
        );
        state.apply(
            Action::SetDraftText {
                target,
                text: "  worth a pilot  ".to_string(),
            },
            &data,
        );
        let effects = state.apply(Action::SubmitFeedback(target), &data);
        assert_eq!(
            effects,
            vec![Effect::RecordFeedback(FeedbackRecord {
                target,
                title: "High Decline Threshold".to_string(),
                sentiment: Sentiment::Positive,
                text: "worth a pilot".to_string(),
            })]
        );
        assert!(!state.feedback.is_open(&target));
    }

    #[test]
    fn test_notes_survive_collapse_and_tab_switch() {
        let (mut state, data) = setup();
        state.apply(Action::SelectInsight(InsightId(4)), &data);
        state.apply(
            Action::SetNote {
                insight: InsightId(4),
                text: "retrain Friday".to_string(),
            },
            &data,
        );
        state.apply(Action::DeselectInsight, &data);
        state.apply(Action::SelectTab(DashboardTab::StrategicInsights), &data);
        state.apply(Action::SelectTab(DashboardTab::TrendAnalysis), &data);
        assert_eq!(state.note(InsightId(4)), "retrain Friday");

        state.apply(
            Action::SetNote {
                insight: InsightId(4),
                text: String::new(),
            },
            &data,
        );
        assert!(state.notes.is_empty());
    }

    #[test]
    fn test_theme_toggle_requests_persist_and_apply() {
        let (mut state, data) = setup();
        let effects = state.apply(Action::ToggleTheme, &data);
        assert_eq!(
            effects,
            vec![
                Effect::PersistTheme(ThemeMode::Dark),
                Effect::ApplyPresentation(ThemeMode::Dark),
            ]
        );
    }

    #[test]
    fn test_blank_rca_query_is_noop() {
        let (mut state, data) = setup();
        state.apply(Action::StartRca, &data);
        state.apply(Action::SetRcaQuery("   ".to_string()), &data);
        assert!(state.apply(Action::GenerateRca, &data).is_empty());
        assert_eq!(state.rca.phase, RcaPhase::Input);
    }

    #[test]
    fn test_rca_flow_and_stale_reveal() {
        let (mut state, data) = setup();
        state.apply(Action::StartRca, &data);
        state.apply(Action::SetRcaQuery(" EU approvals ".to_string()), &data);
        let effects = state.apply(Action::GenerateRca, &data);
        assert_eq!(
            effects,
            vec![Effect::ScheduleRcaReveal {
                query: "EU approvals".to_string()
            }]
        );
        assert!(state.rca.is_pending());

        let summary = generate_directional_summary("EU approvals", &data);
        state.apply(Action::RevealRca(summary.clone()), &data);
        assert_eq!(state.rca.summary(), Some(&summary));

        state.apply(Action::ResetRca, &data);
        assert!(state.rca.query.is_empty());
        assert_eq!(state.rca.phase, RcaPhase::Input);

        // A late reveal after start-over does not resurrect the result
        state.apply(Action::RevealRca(summary), &data);
        assert_eq!(state.rca.phase, RcaPhase::Input);
    }

    #[test]
    fn test_panels_are_exclusive() {
        let (mut state, data) = setup();
        state.apply(Action::StartRca, &data);
        state.apply(Action::SelectFunnelStage(2), &data);
        assert!(!state.rca.open);
        assert_eq!(state.funnel.selected, Some(2));

        state.apply(Action::StartRca, &data);
        assert!(state.rca.open);
        assert!(!state.funnel.is_open());

        state.apply(Action::SelectFunnelStage(99), &data);
        assert!(!state.funnel.is_open());
    }
}
