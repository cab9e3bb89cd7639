//! Slide-over assistant panels.

use super::{block_title, field_text, indented};
use crate::derived::{dropped_volume, estimated_loss, format_currency, format_thousands, format_volume};
use crate::state::RcaPhase;
use crate::tui::app::{App, InputTarget};
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::{pressure_badge, slide_over_rect};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

/// Share of the screen width the panels take.
const PANEL_WIDTH_PERCENT: u16 = 45;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

fn panel_block(title: &str) -> Block<'static> {
    let scheme = colors();
    Block::default()
        .title(block_title(title))
        .title_style(Style::default().fg(scheme.accent).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(scheme.border_focused))
        .style(Style::default().bg(scheme.background))
}

fn heading(text: &'static str) -> Line<'static> {
    Line::styled(text, Styles::section_title())
}

pub fn render_rca_panel(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let panel = slide_over_rect(PANEL_WIDTH_PERCENT, area);
    frame.render_widget(Clear, panel);

    let block = panel_block("Root-cause assistant");
    let inner = block.inner(panel);
    frame.render_widget(block, panel);
    let width = inner.width as usize;

    let rca = &app.state().rca;
    let mut lines = vec![
        Line::styled(
            "Ask what changed in the last 24 hours.",
            Styles::text_muted(),
        ),
        Line::from(""),
        heading("Question"),
    ];

    let editing = app.input == Some(InputTarget::RcaQuery);
    if rca.query.is_empty() && !editing {
        lines.push(Line::styled(
            "  e.g. Why did LATAM approvals drop?",
            Style::default().fg(scheme.muted).italic(),
        ));
    } else {
        lines.extend(indented(
            &field_text(&rca.query, editing),
            width,
            2,
            Styles::text(),
        ));
    }
    lines.push(Line::from(""));

    match &rca.phase {
        RcaPhase::Input => {
            lines.push(Line::from(vec![
                Span::styled("[g]", Styles::shortcut_key()),
                Span::styled("Generate directional summary", Styles::shortcut_desc()),
            ]));
        }
        RcaPhase::Pending { query } => {
            let frame_idx = (app.tick % SPINNER.len() as u64) as usize;
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", SPINNER[frame_idx]),
                    Style::default().fg(scheme.accent),
                ),
                Span::styled("Analyzing signals...", Style::default().fg(scheme.accent)),
            ]));
            lines.extend(indented(query, width, 2, Styles::text_muted()));
        }
        RcaPhase::Ready(summary) => {
            lines.push(heading("Top drivers"));
            for (i, driver) in summary.drivers.iter().enumerate() {
                lines.extend(indented(
                    &format!("{}. {driver}", i + 1),
                    width,
                    2,
                    Styles::text(),
                ));
            }
            lines.push(Line::from(""));
            lines.push(heading("Estimated impact"));
            lines.extend(indented(
                &summary.impact,
                width,
                2,
                Style::default().fg(scheme.warning),
            ));
            lines.push(Line::from(""));
            lines.push(heading("Suggested actions"));
            for action in &summary.actions {
                lines.extend(indented(&format!("• {action}"), width, 2, Styles::text()));
            }
            lines.push(Line::from(""));
            lines.extend(indented(
                summary.notice,
                width,
                0,
                Style::default().fg(scheme.text_muted).italic(),
            ));
            lines.push(Line::from(vec![
                Span::styled("[r]", Styles::shortcut_key()),
                Span::styled("Start over", Styles::shortcut_desc()),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn render_funnel_panel(frame: &mut Frame, area: Rect, app: &App) {
    let Some(stage) = app
        .state()
        .funnel
        .selected
        .and_then(|i| app.dataset().funnel.get(i))
    else {
        return;
    };

    let scheme = colors();
    let panel = slide_over_rect(PANEL_WIDTH_PERCENT, area);
    frame.render_widget(Clear, panel);

    let block = panel_block("Funnel assistant");
    let inner = block.inner(panel);
    frame.render_widget(block, panel);
    let width = inner.width as usize;

    let loss = estimated_loss(stage, app.average_order_value);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(stage.name.clone(), Style::default().fg(scheme.text).bold()),
            Span::raw("  "),
            pressure_badge(stage.pressure),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Volume        ", Styles::label()),
            Span::styled(format_volume(stage.volume), Styles::value()),
        ]),
        Line::from(vec![
            Span::styled("Drop-off      ", Styles::label()),
            Span::styled(
                format!("{:.1}%", stage.drop_percent),
                Style::default().fg(scheme.pressure_color(stage.pressure)).bold(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Dropped       ", Styles::label()),
            Span::styled(
                format!("{} tx", format_thousands(dropped_volume(stage))),
                Styles::value(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Est. loss     ", Styles::label()),
            Span::styled(
                format_currency(loss),
                Style::default().fg(scheme.negative).bold(),
            ),
        ]),
        Line::from(""),
    ];
    lines.extend(indented(
        &format!(
            "Assumes an average order value of {}.",
            format_currency(app.average_order_value)
        ),
        width,
        0,
        Style::default().fg(scheme.text_muted).italic(),
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use crate::state::{MemoryPreferenceStore, Store};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn app(delay: Duration) -> App {
        App::new(
            Store::builder(Dataset::demo())
                .preferences(MemoryPreferenceStore::new())
                .rca_delay(delay)
                .build(),
        )
    }

    fn screen(app: &App, render: fn(&mut Frame, Rect, &App)) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("terminal");
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, app);
            })
            .expect("draw");
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    fn ask(app: &mut App, question: &str) {
        app.start_rca();
        for c in question.chars() {
            app.push_char(c);
        }
        app.confirm_input();
    }

    #[test]
    fn test_rca_panel_shows_pending_then_result() {
        let mut app = app(Duration::from_secs(60));
        ask(&mut app, "Why is LATAM declining?");
        let text = screen(&app, render_rca_panel);
        assert!(text.contains("Analyzing signals..."));
        assert!(!text.contains("Top drivers"));

        let mut app = self::app(Duration::ZERO);
        ask(&mut app, "Why is LATAM declining?");
        let text = screen(&app, render_rca_panel);
        assert!(text.contains("Top drivers"));
        assert!(text.contains("Suggested actions"));
    }

    #[test]
    fn test_funnel_panel_prices_drop_off() {
        let mut app = app(Duration::ZERO).with_average_order_value(100.0);
        app.open_funnel_stage();
        let text = screen(&app, render_funnel_panel);
        assert!(text.contains("Funnel assistant"));
        assert!(text.contains("Est. loss"));
        assert!(text.contains("$100"));
    }

    #[test]
    fn test_funnel_panel_draws_nothing_when_closed() {
        let app = app(Duration::ZERO);
        let text = screen(&app, render_funnel_panel);
        assert!(!text.contains("Funnel assistant"));
    }
}
