//! Strategic insights tab: macro recommendations awaiting a decision.

use super::{block_title, feedback_lines, indented, scroll_to};
use crate::model::FeedbackTarget;
use crate::tui::app::App;
use crate::tui::theme::{colors, Styles};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

pub fn render_strategic(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let block = Block::default()
        .title(block_title("Strategic Insights"))
        .title_style(Styles::section_title())
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let cursor = app.cursor_macro();
    let mut lines = vec![
        Line::styled(
            "Greenlight or block each initiative and log the reasoning.",
            Styles::text_muted(),
        ),
        Line::from(""),
    ];
    let mut cursor_line = 0;

    for (n, insight) in app.dataset().macro_insights.iter().enumerate() {
        let is_cursor = cursor == Some(insight.id);
        if is_cursor {
            cursor_line = lines.len();
        }
        let target = FeedbackTarget::Macro(insight.id);

        let marker = if is_cursor { "▶ " } else { "  " };
        let title_style = if is_cursor {
            Styles::selected()
        } else {
            Style::default().fg(scheme.text).bold()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(scheme.primary)),
            Span::styled(format!("{}. ", n + 1), Styles::text_muted()),
            Span::styled(insight.title.clone(), title_style),
        ]));
        lines.extend(indented(&insight.description, width, 4, Styles::text()));

        if is_cursor || app.state().feedback.is_open(&target) {
            lines.extend(feedback_lines(app, target, width));
        }
        lines.push(Line::from(""));
    }

    let scroll = scroll_to(cursor_line, inner.height as usize);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}
