//! Interactive dashboard application state.
//!
//! [`App`] owns the [`Store`] and adds what only the terminal needs: list
//! cursors, which text field has focus, the help overlay, and transient
//! status messages. Every data-level change goes through
//! [`Store::dispatch`].

use super::state::CardCursor;
use super::status::{StatusMessage, STATUS_TIMEOUT};
use super::widgets::TabSwitcher;
use crate::data::Dataset;
use crate::derived::DEFAULT_AVERAGE_ORDER_VALUE;
use crate::model::{FeedbackTarget, InsightCategory, InsightId, MacroInsightId};
use crate::state::{Action, DashboardState, DashboardTab, Sentiment, Store};
use std::time::Instant;

/// Pages of the overview tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverviewSection {
    Health,
    Regions,
    Funnel,
    Segments,
}

impl OverviewSection {
    pub const ALL: [Self; 4] = [Self::Health, Self::Regions, Self::Funnel, Self::Segments];

    pub const fn title(&self) -> &'static str {
        match self {
            Self::Health => "Health",
            Self::Regions => "Regions",
            Self::Funnel => "Conversion Funnel",
            Self::Segments => "Segments",
        }
    }
}

/// The text field that currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTarget {
    Draft(FeedbackTarget),
    Note(InsightId),
    RcaQuery,
}

pub struct App {
    store: Store,
    /// Cursor over insights, opportunities first then alerts
    pub insights: CardCursor,
    pub macros: CardCursor,
    pub funnel: CardCursor,
    pub sections: TabSwitcher<OverviewSection>,
    pub input: Option<InputTarget>,
    pub status: StatusMessage,
    pub show_help: bool,
    pub should_quit: bool,
    pub tick: u64,
    /// Used by the funnel panel to price dropped transactions
    pub average_order_value: f64,
}

impl App {
    pub fn new(store: Store) -> Self {
        let dataset = store.dataset();
        let insights = CardCursor::new(dataset.insights.len());
        let macros = CardCursor::new(dataset.macro_insights.len());
        let funnel = CardCursor::new(dataset.funnel.len());
        let sections = OverviewSection::ALL
            .into_iter()
            .fold(TabSwitcher::new(OverviewSection::Health), |tabs, s| {
                tabs.pane(s, s.title())
            });

        Self {
            store,
            insights,
            macros,
            funnel,
            sections,
            input: None,
            status: StatusMessage::with_auto_clear(STATUS_TIMEOUT),
            show_help: false,
            should_quit: false,
            tick: 0,
            average_order_value: DEFAULT_AVERAGE_ORDER_VALUE,
        }
    }

    #[must_use]
    pub const fn with_average_order_value(mut self, aov: f64) -> Self {
        self.average_order_value = aov;
        self
    }

    pub const fn store(&self) -> &Store {
        &self.store
    }

    pub const fn state(&self) -> &DashboardState {
        self.store.state()
    }

    pub const fn dataset(&self) -> &Dataset {
        self.store.dataset()
    }

    /// Dispatch an action and surface any non-fatal failure it caused.
    pub fn dispatch(&mut self, action: Action) {
        self.store.dispatch(action);
        if let Some(warning) = self.store.take_warning() {
            self.status.set(warning);
        }
    }

    /// Advance animations, reveal due summaries, and expire old messages.
    pub fn on_tick(&mut self, now: Instant) {
        self.tick = self.tick.wrapping_add(1);
        if self.store.poll(now) && self.state().rca.summary().is_some() {
            self.status.set("Directional summary ready");
        }
        self.status.expire(now);
    }

    // ------------------------------------------------------------------
    // Tabs
    // ------------------------------------------------------------------

    /// Controlled switcher over the dashboard tabs.
    pub fn tab_switcher(&self) -> TabSwitcher<DashboardTab> {
        DashboardTab::ALL
            .into_iter()
            .fold(TabSwitcher::new(DashboardTab::default()), |tabs, t| {
                tabs.pane(t, t.title())
            })
            .controlled(self.state().active_tab)
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        if let Some(tab) = self.tab_switcher().select(tab) {
            self.input = None;
            self.dispatch(Action::SelectTab(tab));
        }
    }

    pub fn next_tab(&mut self) {
        if let Some(tab) = self.tab_switcher().select_next() {
            self.select_tab(tab);
        }
    }

    pub fn prev_tab(&mut self) {
        if let Some(tab) = self.tab_switcher().select_prev() {
            self.select_tab(tab);
        }
    }

    // ------------------------------------------------------------------
    // Cursors
    // ------------------------------------------------------------------

    /// Insight ids in display order.
    pub fn insight_order(&self) -> Vec<InsightId> {
        let dataset = self.dataset();
        InsightCategory::ALL
            .iter()
            .flat_map(|&category| dataset.insights_in(category).map(|i| i.id))
            .collect()
    }

    pub fn cursor_insight(&self) -> Option<InsightId> {
        self.insight_order().get(self.insights.index()).copied()
    }

    pub fn cursor_macro(&self) -> Option<MacroInsightId> {
        self.dataset()
            .macro_insights
            .get(self.macros.index())
            .map(|m| m.id)
    }

    /// Feedback target under the cursor on the active tab.
    pub fn cursor_target(&self) -> Option<FeedbackTarget> {
        match self.state().active_tab {
            DashboardTab::TrendAnalysis => self.cursor_insight().map(FeedbackTarget::from),
            DashboardTab::StrategicInsights => self.cursor_macro().map(FeedbackTarget::from),
            DashboardTab::Overview => None,
        }
    }

    fn cursor_mut(&mut self) -> &mut CardCursor {
        let tab = self.state().active_tab;
        match tab {
            DashboardTab::Overview => &mut self.funnel,
            DashboardTab::TrendAnalysis => &mut self.insights,
            DashboardTab::StrategicInsights => &mut self.macros,
        }
    }

    pub fn cursor_down(&mut self) {
        self.cursor_mut().move_by(1);
        self.follow_funnel_cursor();
    }

    pub fn cursor_up(&mut self) {
        self.cursor_mut().move_by(-1);
        self.follow_funnel_cursor();
    }

    pub fn cursor_first(&mut self) {
        self.cursor_mut().first();
        self.follow_funnel_cursor();
    }

    pub fn cursor_last(&mut self) {
        self.cursor_mut().last();
        self.follow_funnel_cursor();
    }

    fn follow_funnel_cursor(&mut self) {
        if self.state().funnel.is_open() && self.state().active_tab == DashboardTab::Overview {
            self.dispatch(Action::SelectFunnelStage(self.funnel.index()));
        }
    }

    // ------------------------------------------------------------------
    // Insights and feedback
    // ------------------------------------------------------------------

    /// Expand the insight under the cursor, or collapse it.
    pub fn toggle_expand(&mut self) {
        if let Some(id) = self.cursor_insight() {
            self.dispatch(Action::SelectInsight(id));
        }
    }

    pub fn toggle_feedback(&mut self, sentiment: Sentiment) {
        let Some(target) = self.cursor_target() else {
            return;
        };
        self.dispatch(Action::ToggleFeedback { target, sentiment });
        if self.input == Some(InputTarget::Draft(target)) && !self.state().feedback.is_open(&target)
        {
            self.input = None;
        }
    }

    /// Focus the draft of the open form under the cursor.
    pub fn begin_draft(&mut self) {
        match self.cursor_target() {
            Some(target) if self.state().feedback.is_open(&target) => {
                self.input = Some(InputTarget::Draft(target));
            }
            Some(_) => self.status.set("Pick a response with [+] or [-] first"),
            None => {}
        }
    }

    /// Focus the note of the insight under the cursor, expanding it first.
    pub fn begin_note(&mut self) {
        let Some(id) = self.cursor_insight() else {
            return;
        };
        if !self.state().is_expanded(id) {
            self.dispatch(Action::SelectInsight(id));
        }
        self.input = Some(InputTarget::Note(id));
    }

    pub fn submit_feedback(&mut self) {
        let target = match self.input {
            Some(InputTarget::Draft(target)) => Some(target),
            _ => self.cursor_target(),
        };
        let Some(target) = target else {
            return;
        };
        let Some(form) = self.state().feedback.get(&target) else {
            return;
        };
        if !form.is_submittable() {
            self.status.set("Write a few words before submitting");
            return;
        }

        self.dispatch(Action::SubmitFeedback(target));
        if self.input == Some(InputTarget::Draft(target)) {
            self.input = None;
        }
        self.status.set(match target {
            FeedbackTarget::Insight(_) => "Feedback logged",
            FeedbackTarget::Macro(_) => "Decision logged",
        });
    }

    /// Close the open form under the cursor, else collapse the expanded insight.
    pub fn close_current(&mut self) {
        if let Some(target) = self.cursor_target() {
            if self.state().feedback.is_open(&target) {
                self.dispatch(Action::CloseFeedback(target));
                return;
            }
        }
        if self.state().active_tab == DashboardTab::TrendAnalysis
            && self.state().expanded.is_some()
        {
            self.dispatch(Action::DeselectInsight);
        }
    }

    // ------------------------------------------------------------------
    // Text input
    // ------------------------------------------------------------------

    /// Current contents of the focused field.
    pub fn input_text(&self) -> Option<String> {
        let state = self.state();
        match self.input? {
            InputTarget::Draft(target) => state.feedback.get(&target).map(|f| f.draft.clone()),
            InputTarget::Note(id) => Some(state.note(id).to_string()),
            InputTarget::RcaQuery => Some(state.rca.query.clone()),
        }
    }

    fn write_input(&mut self, text: String) {
        let Some(input) = self.input else {
            return;
        };
        let action = match input {
            InputTarget::Draft(target) => Action::SetDraftText { target, text },
            InputTarget::Note(insight) => Action::SetNote { insight, text },
            InputTarget::RcaQuery => Action::SetRcaQuery(text),
        };
        self.dispatch(action);
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(mut text) = self.input_text() {
            text.push(c);
            self.write_input(text);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(mut text) = self.input_text() {
            text.pop();
            self.write_input(text);
        }
    }

    /// Enter in a text field: submit drafts, generate analyses, finish notes.
    pub fn confirm_input(&mut self) {
        match self.input {
            Some(InputTarget::Draft(_)) => self.submit_feedback(),
            Some(InputTarget::RcaQuery) => {
                self.input = None;
                self.generate_rca();
            }
            Some(InputTarget::Note(_)) => self.input = None,
            None => {}
        }
    }

    pub fn cancel_input(&mut self) {
        self.input = None;
    }

    // ------------------------------------------------------------------
    // Assistant panels
    // ------------------------------------------------------------------

    pub fn open_funnel_stage(&mut self) {
        self.input = None;
        self.dispatch(Action::SelectFunnelStage(self.funnel.index()));
    }

    pub fn close_funnel_panel(&mut self) {
        self.dispatch(Action::CloseFunnelPanel);
    }

    /// Open the root-cause panel with the question field focused.
    pub fn start_rca(&mut self) {
        self.dispatch(Action::StartRca);
        self.input = if self.state().rca.summary().is_none() && !self.state().rca.is_pending() {
            Some(InputTarget::RcaQuery)
        } else {
            None
        };
    }

    pub fn edit_rca_query(&mut self) {
        if !self.state().rca.is_pending() {
            self.input = Some(InputTarget::RcaQuery);
        }
    }

    pub fn generate_rca(&mut self) {
        if self.state().rca.query.trim().is_empty() {
            self.status.set("Type a question to analyze");
            return;
        }
        self.dispatch(Action::GenerateRca);
    }

    pub fn reset_rca(&mut self) {
        self.dispatch(Action::ResetRca);
        self.input = Some(InputTarget::RcaQuery);
    }

    pub fn close_rca(&mut self) {
        self.input = None;
        self.dispatch(Action::CloseRca);
    }

    // ------------------------------------------------------------------
    // Misc
    // ------------------------------------------------------------------

    pub fn toggle_theme(&mut self) {
        self.dispatch(Action::ToggleTheme);
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryPreferenceStore;

    fn app() -> App {
        App::new(
            Store::builder(Dataset::demo())
                .preferences(MemoryPreferenceStore::new())
                .build(),
        )
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.push_char(c);
        }
    }

    #[test]
    fn test_insight_order_groups_by_category() {
        let app = app();
        assert_eq!(
            app.insight_order(),
            vec![
                InsightId(1),
                InsightId(5),
                InsightId(6),
                InsightId(2),
                InsightId(3),
                InsightId(4)
            ]
        );
    }

    #[test]
    fn test_tab_cycle_goes_through_store() {
        let mut app = app();
        app.next_tab();
        assert_eq!(app.state().active_tab, DashboardTab::TrendAnalysis);
        app.prev_tab();
        app.prev_tab();
        assert_eq!(app.state().active_tab, DashboardTab::StrategicInsights);
    }

    #[test]
    fn test_draft_typing_and_submit() {
        let mut app = app();
        app.select_tab(DashboardTab::TrendAnalysis);
        app.toggle_feedback(Sentiment::Positive);
        app.begin_draft();
        assert_eq!(
            app.input,
            Some(InputTarget::Draft(FeedbackTarget::Insight(InsightId(1))))
        );

        app.confirm_input();
        assert_eq!(app.status.peek(), Some("Write a few words before submitting"));
        assert!(app.input.is_some());

        type_text(&mut app, "ship it");
        app.pop_char();
        assert_eq!(app.input_text().as_deref(), Some("ship i"));

        app.confirm_input();
        assert!(app.input.is_none());
        assert!(app.state().feedback.is_empty());
        assert_eq!(app.status.peek(), Some("Feedback logged"));
    }

    #[test]
    fn test_note_expands_card() {
        let mut app = app();
        app.select_tab(DashboardTab::TrendAnalysis);
        app.cursor_down();
        app.begin_note();
        assert!(app.state().is_expanded(InsightId(5)));
        type_text(&mut app, "check BIN list");
        assert_eq!(app.state().note(InsightId(5)), "check BIN list");
    }

    #[test]
    fn test_close_current_prefers_form_over_expansion() {
        let mut app = app();
        app.select_tab(DashboardTab::TrendAnalysis);
        app.toggle_expand();
        app.toggle_feedback(Sentiment::Negative);

        app.close_current();
        assert!(app.state().feedback.is_empty());
        assert!(app.state().expanded.is_some());

        app.close_current();
        assert!(app.state().expanded.is_none());
    }

    #[test]
    fn test_rca_flow_with_zero_delay() {
        let mut app = app();
        app.start_rca();
        assert_eq!(app.input, Some(InputTarget::RcaQuery));

        app.confirm_input();
        assert!(app.state().rca.summary().is_none());

        app.edit_rca_query();
        type_text(&mut app, "Why is LATAM declining?");
        app.confirm_input();
        let summary = app.state().rca.summary().cloned();
        assert_eq!(
            summary.map(|s| s.query),
            Some("Why is LATAM declining?".to_string())
        );

        app.reset_rca();
        assert!(app.state().rca.query.is_empty());
        assert!(app.state().rca.summary().is_none());
    }

    #[test]
    fn test_funnel_cursor_follows_open_panel() {
        let mut app = app();
        app.open_funnel_stage();
        assert_eq!(app.state().funnel.selected, Some(0));
        app.cursor_down();
        assert_eq!(app.state().funnel.selected, Some(1));
        app.close_funnel_panel();
        app.cursor_down();
        assert_eq!(app.state().funnel.selected, None);
    }
}
