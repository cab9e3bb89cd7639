//! Tab views for the TUI.

mod operations;
mod overview;
mod panels;
mod strategic;

pub use operations::render_operations;
pub use overview::render_overview;
pub use panels::{render_funnel_panel, render_rca_panel};
pub use strategic::render_strategic;

use crate::model::FeedbackTarget;
use crate::tui::app::{App, InputTarget};
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::wrap_words;
use ratatui::prelude::*;

/// Caret appended to a focused text field.
const CARET: &str = "▏";

/// Title of a bordered section, padded the way every block in the app is.
pub(crate) fn block_title(title: &str) -> String {
    format!(" {title} ")
}

/// Wrapped, indented lines of plain text.
fn indented(text: &str, width: usize, indent: usize, style: Style) -> Vec<Line<'static>> {
    let pad = " ".repeat(indent);
    wrap_words(text, width.saturating_sub(indent))
        .into_iter()
        .map(|l| Line::styled(format!("{pad}{l}"), style))
        .collect()
}

/// The text of a field, with a caret when it has focus.
fn field_text(text: &str, focused: bool) -> String {
    if focused {
        format!("{text}{CARET}")
    } else {
        text.to_string()
    }
}

/// Sentiment buttons and, when a form is open, the draft area.
fn feedback_lines(app: &App, target: FeedbackTarget, width: usize) -> Vec<Line<'static>> {
    use crate::state::Sentiment;

    let scheme = colors();
    let form = app.state().feedback.get(&target);
    let mut lines = Vec::new();

    let mut buttons = vec![Span::raw("    ")];
    for (key, sentiment) in [("+", Sentiment::Positive), ("-", Sentiment::Negative)] {
        let active = form.is_some_and(|f| f.sentiment == sentiment);
        let color = match sentiment {
            Sentiment::Positive => scheme.positive,
            Sentiment::Negative => scheme.negative,
        };
        let style = if active {
            Style::default().fg(scheme.badge_fg_dark).bg(color).bold()
        } else {
            Style::default().fg(color)
        };
        buttons.push(Span::styled(
            format!("[{key}] {}", sentiment.label(&target)),
            style,
        ));
        buttons.push(Span::raw("  "));
    }
    lines.push(Line::from(buttons));

    let Some(form) = form else {
        return lines;
    };

    let focused = app.input == Some(InputTarget::Draft(target));
    if form.draft.is_empty() && !focused {
        lines.extend(indented(
            form.sentiment.prompt(&target),
            width,
            6,
            Style::default().fg(scheme.text_muted).italic(),
        ));
    } else {
        lines.extend(indented(
            &field_text(&form.draft, focused),
            width,
            6,
            Styles::text(),
        ));
    }

    let submit = match target {
        FeedbackTarget::Insight(_) => "submit",
        FeedbackTarget::Macro(_) => "Submit log",
    };
    let submit_style = if form.is_submittable() {
        Styles::shortcut_key()
    } else {
        Style::default().fg(scheme.muted)
    };
    lines.push(Line::from(vec![
        Span::raw("      "),
        Span::styled("[i]", Styles::shortcut_key()),
        Span::styled("write ", Styles::shortcut_desc()),
        Span::styled(format!("[s]{submit}"), submit_style),
        Span::raw(" "),
        Span::styled("[Esc]", Styles::shortcut_key()),
        Span::styled("cancel", Styles::shortcut_desc()),
    ]));

    lines
}

/// Scroll offset that keeps the line at `cursor` inside a viewport of
/// `height` lines.
const fn scroll_to(cursor: usize, height: usize) -> u16 {
    let offset = if height == 0 || cursor < height.saturating_sub(2) {
        0
    } else {
        cursor + 3 - height
    };
    if offset > u16::MAX as usize {
        u16::MAX
    } else {
        offset as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_to_keeps_cursor_visible() {
        assert_eq!(scroll_to(0, 10), 0);
        assert_eq!(scroll_to(7, 10), 0);
        assert_eq!(scroll_to(8, 10), 1);
        assert_eq!(scroll_to(30, 10), 23);
        assert_eq!(scroll_to(5, 0), 0);
    }

    #[test]
    fn test_field_text_caret() {
        assert_eq!(field_text("abc", true), "abc▏");
        assert_eq!(field_text("abc", false), "abc");
    }
}
