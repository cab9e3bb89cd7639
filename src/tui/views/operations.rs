//! Trend analysis tab: expandable insight cards with feedback and notes.

use super::{block_title, feedback_lines, field_text, indented, scroll_to};
use crate::model::{FeedbackTarget, Insight, InsightCategory};
use crate::tui::app::{App, InputTarget};
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::{category_badge, truncate_str};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

pub fn render_operations(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let block = Block::default()
        .title(block_title("Trend Analysis"))
        .title_style(Styles::section_title())
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let cursor = app.cursor_insight();
    let mut lines = vec![Line::from(vec![
        Span::styled("Start a new analysis ", Style::default().fg(scheme.primary)),
        Span::styled("[a]", Styles::shortcut_key()),
    ])];
    let mut cursor_line = 0;

    for category in InsightCategory::ALL {
        lines.push(Line::from(""));
        let heading = match category {
            InsightCategory::Opportunity => "Opportunities",
            InsightCategory::Alert => "Alerts",
        };
        lines.push(Line::styled(
            heading,
            Style::default().fg(scheme.category_color(category)).bold(),
        ));

        for insight in app.dataset().insights_in(category) {
            let is_cursor = cursor == Some(insight.id);
            if is_cursor {
                cursor_line = lines.len();
            }
            lines.extend(insight_card(app, insight, is_cursor, width));
        }
    }

    let scroll = scroll_to(cursor_line, inner.height as usize);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

fn insight_card(app: &App, insight: &Insight, is_cursor: bool, width: usize) -> Vec<Line<'static>> {
    let scheme = colors();
    let expanded = app.state().is_expanded(insight.id);
    let target = FeedbackTarget::Insight(insight.id);

    let marker = if is_cursor { "▶ " } else { "  " };
    let fold = if expanded { "▾ " } else { "▸ " };
    let title_style = if is_cursor {
        Styles::selected()
    } else {
        Style::default().fg(scheme.text).bold()
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(marker, Style::default().fg(scheme.primary)),
        Span::styled(fold, Styles::text_muted()),
        category_badge(insight.category),
        Span::raw(" "),
        Span::styled(insight.title.clone(), title_style),
    ])];

    if expanded {
        lines.extend(indented(&insight.description, width, 4, Styles::text()));
        for detail in &insight.details {
            lines.extend(indented(
                &format!("• {detail}"),
                width,
                6,
                Styles::text_muted(),
            ));
        }

        let editing_note = app.input == Some(InputTarget::Note(insight.id));
        let note = app.state().note(insight.id);
        if note.is_empty() && !editing_note {
            lines.push(Line::styled(
                "    Note: press [n] to add one",
                Style::default().fg(scheme.muted).italic(),
            ));
        } else {
            lines.extend(indented(
                &format!("Note: {}", field_text(note, editing_note)),
                width,
                4,
                Style::default().fg(scheme.secondary),
            ));
        }
    } else {
        lines.push(Line::styled(
            format!(
                "    {}",
                truncate_str(&insight.description, width.saturating_sub(4))
            ),
            Styles::text_muted(),
        ));
    }

    if expanded || app.state().feedback.is_open(&target) || is_cursor {
        lines.extend(feedback_lines(app, target, width));
    }
    lines.push(Line::from(""));
    lines
}
