//! Single-select tab switcher.
//!
//! A switcher holds a fixed list of `(key, label)` panes. It is either
//! self-managed (selection lives in the switcher) or controlled (the owner
//! pushes the current key on every frame and applies changes itself).

use crate::tui::theme::colors;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};

/// Who owns the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabSwitcherMode<K> {
    /// The switcher tracks the selection itself
    Uncontrolled,
    /// The owner supplies the selection
    Controlled(K),
}

#[derive(Debug, Clone)]
pub struct TabSwitcher<K> {
    panes: Vec<(K, String)>,
    internal: K,
    mode: TabSwitcherMode<K>,
}

impl<K: Copy + PartialEq> TabSwitcher<K> {
    /// Create a self-managed switcher starting at `initial`.
    pub const fn new(initial: K) -> Self {
        Self {
            panes: Vec::new(),
            internal: initial,
            mode: TabSwitcherMode::Uncontrolled,
        }
    }

    /// Register a pane.
    #[must_use]
    pub fn pane(mut self, key: K, label: impl Into<String>) -> Self {
        self.panes.push((key, label.into()));
        self
    }

    /// Hand selection to the owner. The internal selection is left as is.
    #[must_use]
    pub fn controlled(mut self, value: K) -> Self {
        self.mode = TabSwitcherMode::Controlled(value);
        self
    }

    pub const fn mode(&self) -> TabSwitcherMode<K> {
        self.mode
    }

    /// The selection currently in effect.
    pub const fn current(&self) -> K {
        match self.mode {
            TabSwitcherMode::Controlled(value) => value,
            TabSwitcherMode::Uncontrolled => self.internal,
        }
    }

    /// Request a new selection.
    ///
    /// Returns the key when it differs from the current one, so a
    /// controlled owner can apply it. Only a self-managed switcher updates
    /// its own selection.
    pub fn select(&mut self, key: K) -> Option<K> {
        if key == self.current() {
            return None;
        }
        if self.mode == TabSwitcherMode::Uncontrolled {
            self.internal = key;
        }
        Some(key)
    }

    /// Step to the next registered pane, wrapping around.
    pub fn select_next(&mut self) -> Option<K> {
        let next = match self.active_index() {
            Some(i) => self.panes.get((i + 1) % self.panes.len()),
            None => self.panes.first(),
        };
        next.map(|(key, _)| *key).and_then(|key| self.select(key))
    }

    /// Step to the previous registered pane, wrapping around.
    pub fn select_prev(&mut self) -> Option<K> {
        let prev = match self.active_index() {
            Some(0) | None => self.panes.last(),
            Some(i) => self.panes.get(i - 1),
        };
        prev.map(|(key, _)| *key).and_then(|key| self.select(key))
    }

    pub fn has_pane(&self, key: K) -> bool {
        self.panes.iter().any(|(k, _)| *k == key)
    }

    /// Position of the current key among registered panes.
    pub fn active_index(&self) -> Option<usize> {
        let current = self.current();
        self.panes.iter().position(|(k, _)| *k == current)
    }

    /// Render the tab strip, numbering each pane from 1.
    pub fn render_bar(&self, frame: &mut Frame, area: Rect) {
        let active = self.active_index();
        let titles: Vec<Line> = self
            .panes
            .iter()
            .enumerate()
            .map(|(i, (_, label))| {
                let is_active = active == Some(i);
                let key_style = if is_active {
                    Style::default().fg(colors().accent).bold()
                } else {
                    Style::default().fg(colors().muted)
                };
                let title_style = if is_active {
                    Style::default().fg(colors().accent).bold()
                } else {
                    Style::default().fg(colors().text_muted)
                };
                Line::from(vec![
                    Span::styled(format!("[{}]", i + 1), key_style),
                    Span::styled(format!(" {label} "), title_style),
                ])
            })
            .collect();

        let mut tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(colors().border)),
            )
            .highlight_style(Style::default().fg(colors().accent))
            .divider(Span::styled(" │ ", Style::default().fg(colors().muted)));
        if let Some(i) = active {
            tabs = tabs.select(i);
        }

        frame.render_widget(tabs, area);
    }

    /// Render the active pane. Nothing is drawn when the current key has no
    /// registered pane.
    pub fn render_pane<F>(&self, frame: &mut Frame, area: Rect, render: F)
    where
        F: FnOnce(&mut Frame, Rect, K),
    {
        let current = self.current();
        if self.has_pane(current) {
            render(frame, area, current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Pane {
        A,
        B,
        C,
    }

    fn switcher() -> TabSwitcher<Pane> {
        TabSwitcher::new(Pane::A)
            .pane(Pane::A, "Alpha")
            .pane(Pane::B, "Beta")
    }

    #[test]
    fn test_uncontrolled_tracks_selection() {
        let mut tabs = switcher();
        assert_eq!(tabs.current(), Pane::A);
        assert_eq!(tabs.select(Pane::B), Some(Pane::B));
        assert_eq!(tabs.current(), Pane::B);
        assert_eq!(tabs.select(Pane::B), None);
    }

    #[test]
    fn test_controlled_reports_without_changing() {
        let mut tabs = switcher().controlled(Pane::A);
        assert_eq!(tabs.select(Pane::B), Some(Pane::B));
        assert_eq!(tabs.current(), Pane::A);
        assert_eq!(tabs.mode(), TabSwitcherMode::Controlled(Pane::A));
    }

    #[test]
    fn test_cycle_wraps() {
        let mut tabs = switcher();
        assert_eq!(tabs.select_next(), Some(Pane::B));
        assert_eq!(tabs.select_next(), Some(Pane::A));
        assert_eq!(tabs.select_prev(), Some(Pane::B));
    }

    #[test]
    fn test_unregistered_key_renders_nothing() {
        let tabs = TabSwitcher::new(Pane::C).pane(Pane::A, "Alpha");
        assert_eq!(tabs.active_index(), None);

        let mut terminal = Terminal::new(TestBackend::new(20, 4)).unwrap();
        let mut rendered = None;
        terminal
            .draw(|frame| {
                let area = frame.area();
                tabs.render_pane(frame, area, |_, _, key| rendered = Some(key));
            })
            .unwrap();
        assert_eq!(rendered, None);

        let tabs = tabs.controlled(Pane::A);
        terminal
            .draw(|frame| {
                let area = frame.area();
                tabs.render_pane(frame, area, |_, _, key| rendered = Some(key));
            })
            .unwrap();
        assert_eq!(rendered, Some(Pane::A));
    }
}
