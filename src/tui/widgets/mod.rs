//! Presentational widgets with no dashboard knowledge.

mod badges;
mod sparkline;
mod tabs;

pub use badges::{category_badge, pressure_badge, status_badge, trend_badge};
pub use sparkline::{HorizontalBar, MiniSparkline};
pub use tabs::{TabSwitcher, TabSwitcherMode};

use crate::tui::theme::colors;
use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Draw a centered overlay with a close hint on its bottom border.
pub fn render_overlay(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    content: Vec<Line<'static>>,
    size_percent: (u16, u16),
    accent: Color,
) {
    let overlay = centered_rect(size_percent.0, size_percent.1, area);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .title(Line::styled(format!(" {title} "), Style::default().fg(accent).bold()))
        .title_bottom(
            Line::styled(" Esc to close ", Style::default().fg(colors().text_muted))
                .right_aligned(),
        );
    frame.render_widget(
        Paragraph::new(content).block(block).wrap(Wrap { trim: true }),
        overlay,
    );
}

/// Right-hand slide-over area taking `percent_x` of the width.
pub fn slide_over_rect(percent_x: u16, r: Rect) -> Rect {
    let [_, panel] = Layout::horizontal([
        Constraint::Percentage(100 - percent_x),
        Constraint::Percentage(percent_x),
    ])
    .areas(r);
    panel
}

/// Area of `percent_x` by `percent_y` centered in `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(r);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Shorten `s` to at most `max_width` display columns, ending in `…`.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    let mut out = out.trim_end().to_string();
    out.push('…');
    out
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);
        let needed = if line.is_empty() { word_width } else { word_width + 1 };
        if line_width + needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if word_width > width {
            for ch in word.chars() {
                let w = UnicodeWidthChar::width(ch).unwrap_or(0);
                if line_width + w > width {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(ch);
                line_width += w;
            }
            continue;
        }
        if !line.is_empty() {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(word);
        line_width += word_width;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Smallest terminal the dashboard lays out in.
pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

#[must_use]
pub const fn fits_terminal(area: Rect) -> bool {
    area.width >= MIN_WIDTH && area.height >= MIN_HEIGHT
}

/// Replace the whole frame with a resize prompt.
pub fn render_size_warning(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let dim = |ok: bool| {
        if ok {
            Style::default().fg(scheme.success)
        } else {
            Style::default().fg(scheme.warning).bold()
        }
    };

    let lines = vec![
        Line::styled("Terminal too small", Style::default().fg(scheme.warning).bold()),
        Line::from(""),
        Line::from(vec![
            Span::styled("width  ", Style::default().fg(scheme.text_muted)),
            Span::styled(area.width.to_string(), dim(area.width >= MIN_WIDTH)),
            Span::styled(format!(" / {MIN_WIDTH}"), Style::default().fg(scheme.text_muted)),
        ]),
        Line::from(vec![
            Span::styled("height ", Style::default().fg(scheme.text_muted)),
            Span::styled(area.height.to_string(), dim(area.height >= MIN_HEIGHT)),
            Span::styled(format!(" / {MIN_HEIGHT}"), Style::default().fg(scheme.text_muted)),
        ]),
        Line::from(""),
        Line::styled(
            "Enlarge the window to see the dashboard",
            Style::default().fg(scheme.text_muted),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.warning)),
        )
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
