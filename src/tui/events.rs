//! Terminal event forwarding and key dispatch.

use super::app::App;
use crate::model::FeedbackTarget;
use crate::state::{DashboardTab, Sentiment};
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Terminal events.
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

/// Forwards crossterm events from a background thread.
///
/// A [`Event::Tick`] is sent whenever no input arrives within the tick rate.
/// All state changes happen on the thread that calls [`EventHandler::next`].
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    _tx: mpsc::Sender<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let event_tx = tx.clone();
        thread::spawn(move || loop {
            let forwarded = if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(CrosstermEvent::Key(key)) => event_tx.send(Event::Key(key)),
                    Ok(CrosstermEvent::Resize(w, h)) => event_tx.send(Event::Resize(w, h)),
                    _ => Ok(()),
                }
            } else {
                event_tx.send(Event::Tick)
            };
            if forwarded.is_err() {
                break;
            }
        });

        Self { rx, _tx: tx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx.recv().map_err(io::Error::other)
    }
}

/// Handle a key press.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // A focused text field swallows everything else
    if app.input.is_some() {
        match key.code {
            KeyCode::Esc => app.cancel_input(),
            KeyCode::Enter => app.confirm_input(),
            KeyCode::Backspace => app.pop_char(),
            KeyCode::Char(c) => app.push_char(c),
            _ => {}
        }
        return;
    }

    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    if app.state().rca.open {
        handle_rca_panel_key(app, key);
        return;
    }

    if app.state().funnel.is_open() {
        handle_funnel_panel_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('T') => app.toggle_theme(),
        KeyCode::Char('a') => app.start_rca(),
        KeyCode::Char('1') => app.select_tab(DashboardTab::Overview),
        KeyCode::Char('2') => app.select_tab(DashboardTab::TrendAnalysis),
        KeyCode::Char('3') => app.select_tab(DashboardTab::StrategicInsights),
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Home | KeyCode::Char('g') => app.cursor_first(),
        KeyCode::End | KeyCode::Char('G') => app.cursor_last(),
        _ => match app.state().active_tab {
            DashboardTab::Overview => handle_overview_key(app, key),
            DashboardTab::TrendAnalysis | DashboardTab::StrategicInsights => {
                handle_card_key(app, key);
            }
        },
    }
}

fn handle_overview_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(']') | KeyCode::Right => {
            app.sections.select_next();
        }
        KeyCode::Char('[') | KeyCode::Left => {
            app.sections.select_prev();
        }
        KeyCode::Enter => app.open_funnel_stage(),
        _ => {}
    }
}

fn handle_card_key(app: &mut App, key: KeyEvent) {
    let on_insight = matches!(app.cursor_target(), Some(FeedbackTarget::Insight(_)));
    match key.code {
        KeyCode::Enter if on_insight => app.toggle_expand(),
        KeyCode::Char('n') if on_insight => app.begin_note(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.toggle_feedback(Sentiment::Positive),
        KeyCode::Char('-') => app.toggle_feedback(Sentiment::Negative),
        KeyCode::Char('i') => app.begin_draft(),
        KeyCode::Char('s') => app.submit_feedback(),
        KeyCode::Esc => app.close_current(),
        _ => {}
    }
}

fn handle_rca_panel_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_rca(),
        KeyCode::Char('i') | KeyCode::Enter => app.edit_rca_query(),
        KeyCode::Char('g') => app.generate_rca(),
        KeyCode::Char('r') => app.reset_rca(),
        KeyCode::Char('T') => app.toggle_theme(),
        _ => {}
    }
}

fn handle_funnel_panel_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_funnel_panel(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Char('a') => app.start_rca(),
        KeyCode::Char('T') => app.toggle_theme(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use crate::model::InsightId;
    use crate::state::{MemoryPreferenceStore, Store, ThemeMode};

    fn app() -> App {
        App::new(
            Store::builder(Dataset::demo())
                .preferences(MemoryPreferenceStore::new())
                .build(),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.state().active_tab, DashboardTab::StrategicInsights);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state().active_tab, DashboardTab::Overview);
    }

    #[test]
    fn test_typing_does_not_trigger_shortcuts() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('i'));
        for c in "quit".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(!app.should_quit);
        let target = FeedbackTarget::Insight(InsightId(1));
        assert_eq!(app.state().feedback.get(&target).map(|f| f.draft.as_str()), Some("quit"));

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_theme_key_toggles() {
        let mut app = app();
        press(&mut app, KeyCode::Char('T'));
        assert_eq!(app.state().theme, ThemeMode::Dark);
    }

    #[test]
    fn test_panel_captures_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(app.state().funnel.is_open());

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.state().active_tab, DashboardTab::Overview);

        press(&mut app, KeyCode::Esc);
        assert!(!app.state().funnel.is_open());
    }

    #[test]
    fn test_help_overlay_closes_on_escape() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('1'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn test_home_and_end_jump_the_cursor() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::End);
        assert_eq!(app.cursor_insight(), app.insight_order().last().copied());
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.insights.index(), 0);
    }
}
