//! Main UI rendering and the terminal loop.

use super::app::App;
use super::events::{handle_key_event, Event, EventHandler};
use super::theme::{colors, render_footer_hints, FooterHints, Styles};
use super::views;
use super::widgets::{fits_terminal, render_overlay, render_size_warning};
use crate::state::DashboardTab;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use std::io::{self, stdout};
use std::time::{Duration, Instant};

const TITLE: &str = "Fraud Operations Pulse";
const SUBTITLE: &str = "Live view of approval health, incident risk, and growth signals.";
const DATASET_BADGE: &str = "Demo dataset · Last 24h";
const COVERAGE: &str = "Monitoring 4 vendors · 5 regions";

/// Run the dashboard until the user quits.
pub fn run_dashboard(app: &mut App, tick_rate: Duration) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app, tick_rate);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> io::Result<()> {
    let events = EventHandler::new(tick_rate);
    tracing::debug!(?tick_rate, "dashboard loop started");

    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Resize(_, _) => {}
            Event::Tick => app.on_tick(Instant::now()),
        }

        if app.should_quit {
            tracing::debug!("dashboard loop finished");
            return Ok(());
        }
    }
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if !fits_terminal(area) {
        render_size_warning(frame, area);
        return;
    }

    frame.render_widget(
        Block::default().style(Style::default().bg(colors().background).fg(colors().text)),
        area,
    );

    // The banner summary wraps onto a second line on narrow terminals
    let banner_height = if area.width >= 130 { 5 } else { 6 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Header
            Constraint::Length(banner_height), // Status banner
            Constraint::Length(1), // Tabs
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0]);
    render_banner(frame, chunks[1], app);

    let tabs = app.tab_switcher();
    tabs.render_bar(frame, chunks[2]);
    tabs.render_pane(frame, chunks[3], |frame, area, tab| match tab {
        DashboardTab::Overview => views::render_overview(frame, area, app),
        DashboardTab::TrendAnalysis => views::render_operations(frame, area, app),
        DashboardTab::StrategicInsights => views::render_strategic(frame, area, app),
    });

    render_status_bar(frame, chunks[4], app);
    render_footer(frame, chunks[5], app);

    // Panels cover the content area only
    if app.state().rca.open {
        views::render_rca_panel(frame, chunks[3], app);
    } else if app.state().funnel.is_open() {
        views::render_funnel_panel(frame, chunks[3], app);
    }

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(TITLE, Styles::header_title()),
        Span::styled(" │ ", Style::default().fg(scheme.muted)),
        Span::styled(SUBTITLE, Style::default().fg(scheme.text_muted)),
    ]);
    frame.render_widget(Paragraph::new(title), rows[0]);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {DATASET_BADGE} "),
                Style::default().fg(scheme.badge_fg_dark).bg(scheme.secondary),
            ),
            Span::raw(" "),
            Span::styled(COVERAGE, Style::default().fg(scheme.text_muted)),
        ])),
        rows[1],
    );
}

fn render_banner(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let counts = app.dataset().counts();

    let lines = vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(scheme.success)),
            Span::styled("System Status: ", Style::default().fg(scheme.text_muted)),
            Span::styled("Healthy", Style::default().fg(scheme.success).bold()),
            Span::styled("   Risk Posture: ", Style::default().fg(scheme.text_muted)),
            Span::styled("Low", Style::default().fg(scheme.success).bold()),
        ]),
        Line::styled(
            "No major anomalies observed. Approval rate improving, vendor SLA stable, and fraud levels remain within expected range.",
            Style::default().fg(scheme.text),
        ),
        Line::from(vec![
            Span::styled("You have ", Style::default().fg(scheme.text_muted)),
            Span::styled(
                format!("{} opportunities", counts.opportunities),
                Style::default().fg(scheme.opportunity).bold(),
            ),
            Span::styled(", ", Style::default().fg(scheme.text_muted)),
            Span::styled(
                format!("{} alerts", counts.alerts),
                Style::default().fg(scheme.alert).bold(),
            ),
            Span::styled(", and ", Style::default().fg(scheme.text_muted)),
            Span::styled(
                format!("{} strategic insights", counts.strategic),
                Style::default().fg(scheme.secondary).bold(),
            ),
            Span::styled(" to review.", Style::default().fg(scheme.text_muted)),
        ]),
    ];

    let banner = Paragraph::new(lines)
        .wrap(ratatui::widgets::Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.success)),
        );
    frame.render_widget(banner, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let state = app.state();
    let sep = || Span::styled(" │ ", Style::default().fg(scheme.muted));

    let mode = state.theme;
    let glyph = if mode.is_dark() { "☾ " } else { "☀ " };
    let mut spans = vec![
        Span::styled(" Theme: ", Style::default().fg(scheme.text_muted)),
        Span::styled(glyph, Style::default().fg(scheme.accent)),
        Span::styled(mode.as_str(), Style::default().fg(scheme.primary).bold()),
        sep(),
        Span::styled("Tab: ", Style::default().fg(scheme.text_muted)),
        Span::styled(state.active_tab.title(), Style::default().fg(scheme.text)),
    ];

    if !state.feedback.is_empty() {
        spans.push(sep());
        spans.push(Span::styled(
            format!("{} open form(s)", state.feedback.len()),
            Style::default().fg(scheme.accent),
        ));
    }

    if state.rca.is_pending() {
        spans.push(sep());
        spans.push(Span::styled(
            "analysis running",
            Style::default().fg(scheme.warning).italic(),
        ));
    } else if state.rca.summary().is_some() && !state.rca.open {
        spans.push(sep());
        spans.push(Span::styled(
            "summary ready [a]",
            Style::default().fg(scheme.success),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Styles::status_bar());
    frame.render_widget(status, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    if let Some(msg) = app.status.peek() {
        let status_line = Line::from(vec![
            Span::styled("ℹ ", Style::default().fg(scheme.accent)),
            Span::styled(msg.to_string(), Style::default().fg(scheme.accent).bold()),
        ]);
        frame.render_widget(
            Paragraph::new(status_line).alignment(Alignment::Center),
            area,
        );
        return;
    }

    let hints = if app.input.is_some() {
        FooterHints::for_input()
    } else if app.state().rca.open {
        FooterHints::for_rca_panel()
    } else if app.state().funnel.is_open() {
        FooterHints::for_funnel_panel()
    } else {
        FooterHints::for_tab(app.state().active_tab)
    };

    let footer = Paragraph::new(Line::from(render_footer_hints(&hints)))
        .alignment(Alignment::Center)
        .style(Style::default().fg(scheme.text_muted));
    frame.render_widget(footer, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let key = |k: &'static str| Span::styled(format!("{k:<12}"), Style::default().fg(scheme.accent).bold());
    let desc = |d: &'static str| Span::styled(d, Style::default().fg(scheme.text));
    let section = |s: &'static str| Line::styled(s, Style::default().fg(scheme.primary).bold());

    let content = vec![
        section("Navigation"),
        Line::from(vec![key("1 2 3"), desc("Jump to a tab")]),
        Line::from(vec![key("Tab/S-Tab"), desc("Next or previous tab")]),
        Line::from(vec![key("↑↓ / jk"), desc("Move the cursor")]),
        Line::from(vec![key("Home/End gG"), desc("First or last card")]),
        Line::from(vec![key("[ ]"), desc("Overview section")]),
        Line::from(""),
        section("Cards"),
        Line::from(vec![key("Enter"), desc("Expand insight or open funnel stage")]),
        Line::from(vec![key("+ / -"), desc("Open or switch a feedback form")]),
        Line::from(vec![key("i"), desc("Write in the open form")]),
        Line::from(vec![key("s"), desc("Submit feedback")]),
        Line::from(vec![key("n"), desc("Edit the insight note")]),
        Line::from(vec![key("Esc"), desc("Close form or collapse insight")]),
        Line::from(""),
        section("Assistants"),
        Line::from(vec![key("a"), desc("Root-cause assistant")]),
        Line::from(vec![key("g"), desc("Generate summary")]),
        Line::from(vec![key("r"), desc("Start over")]),
        Line::from(""),
        section("General"),
        Line::from(vec![key("T"), desc("Toggle light/dark theme")]),
        Line::from(vec![key("?"), desc("Toggle this help")]),
        Line::from(vec![key("q / Ctrl+C"), desc("Quit")]),
    ];

    render_overlay(frame, area, "Keyboard shortcuts", content, (60, 80), scheme.primary);
}
