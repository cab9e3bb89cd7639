//! Overview tab: health cards, regions, funnel and segments.

use super::block_title;
use crate::data::Dataset;
use crate::derived::{
    classify_trend, format_rate_percent, format_thousands, format_volume, support_signal,
    volume_share,
};
use crate::model::{RegionSummary, TrendPoint};
use crate::tui::app::{App, OverviewSection};
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::{
    pressure_badge, status_badge, trend_badge, truncate_str, HorizontalBar, MiniSparkline,
};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

pub fn render_overview(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    app.sections.render_bar(frame, chunks[0]);
    app.sections
        .render_pane(frame, chunks[1], |frame, area, section| match section {
            OverviewSection::Health => render_health(frame, area, app.dataset()),
            OverviewSection::Regions => render_regions(frame, area, app.dataset()),
            OverviewSection::Funnel => render_funnel(frame, area, app),
            OverviewSection::Segments => render_segments(frame, area, app.dataset()),
        });
}

fn bordered(title: &str) -> Block<'static> {
    Block::default()
        .title(block_title(title))
        .title_style(Styles::section_title())
        .borders(Borders::ALL)
        .border_style(Styles::border())
}

// ============================================================================
// Health
// ============================================================================

fn render_health(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(8)])
        .split(area);

    render_metric_cards(frame, rows[0], dataset);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    render_trend_charts(frame, body[0], &dataset.trend);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(6)])
        .split(body[1]);

    render_fraud_types(frame, side[0], dataset);
    render_support_signal(frame, side[1], dataset);
}

fn render_metric_cards(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let cards = &dataset.system_health;
    if cards.is_empty() {
        return;
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
        .split(area);

    let scheme = colors();
    for (card, chunk) in cards.iter().zip(chunks.iter()) {
        let inner_width = chunk.width.saturating_sub(2) as usize;
        let mut lines = vec![
            Line::styled(
                card.display_value.clone(),
                Style::default().fg(scheme.text).bold(),
            ),
            Line::from(trend_badge(&card.trend_label)),
        ];
        if let Some(tooltip) = &card.tooltip {
            lines.push(Line::styled(
                truncate_str(&format!("ⓘ {tooltip}"), inner_width),
                Style::default().fg(scheme.text_muted).italic(),
            ));
        }

        let paragraph = Paragraph::new(lines).block(bordered(&truncate_str(
            &card.name,
            inner_width.saturating_sub(2),
        )));
        frame.render_widget(paragraph, *chunk);
    }
}

fn render_trend_charts(frame: &mut Frame, area: Rect, trend: &[TrendPoint]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(4)])
        .split(area);

    let scheme = colors();
    let bars: Vec<Bar> = trend
        .iter()
        .map(|point| {
            Bar::default()
                .value(point.volume)
                .label(Line::from(point.date.clone()))
                .text_value(format!(
                    "{} · {:.0}%",
                    format_thousands(point.volume),
                    point.approval_rate
                ))
                .style(Style::default().fg(scheme.primary))
        })
        .collect();

    let chart = BarChart::default()
        .block(bordered("Transaction Volume & Approval Rate"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(2)
        .value_style(Style::default().fg(scheme.badge_fg_dark).bg(scheme.primary));
    frame.render_widget(chart, chunks[0]);

    let rates: Vec<f64> = trend.iter().map(|p| p.fraud_rate).collect();
    let latest = trend
        .last()
        .map(|p| format_rate_percent(p.fraud_rate))
        .unwrap_or_default();
    let block = bordered("Fraud Rate");
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    let line_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(10), Constraint::Min(0)])
        .split(inner);
    frame.render_widget(
        Paragraph::new(Line::styled(latest, Style::default().fg(scheme.alert).bold())),
        line_chunks[0],
    );
    frame.render_widget(
        MiniSparkline::new(rates).color(scheme.alert),
        line_chunks[1],
    );
}

fn render_fraud_types(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let block = bordered("Fraud Types");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let palette = colors().chart_palette();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); dataset.fraud_types.len()])
        .split(inner);

    for (i, (share, row)) in dataset.fraud_types.iter().zip(rows.iter()).enumerate() {
        let bar = HorizontalBar::new(&share.fraud_type, u64::from(share.share), 100)
            .color(palette[i % palette.len()])
            .caption(format!("{}% {}", share.share, share.change));
        frame.render_widget(bar, *row);
    }
}

fn render_support_signal(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let scheme = colors();
    let signal = support_signal(&dataset.support_trend);
    let block = bordered("Support Signal");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    let summary = vec![
        Line::from(vec![
            Span::styled(format_thousands(u64::from(signal.tickets_total)), Styles::value()),
            Span::styled(" tickets this week", Styles::label()),
        ]),
        Line::from(vec![
            Span::styled(signal.avg_escalations.to_string(), Style::default().fg(scheme.warning).bold()),
            Span::styled(" escalations per day", Styles::label()),
        ]),
    ];
    frame.render_widget(Paragraph::new(summary), rows[0]);

    let totals: Vec<f64> = dataset
        .support_trend
        .iter()
        .map(|d| f64::from(d.total))
        .collect();
    frame.render_widget(MiniSparkline::new(totals).color(scheme.secondary), rows[1]);
}

// ============================================================================
// Regions
// ============================================================================

fn render_regions(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let total = dataset.total_region_volume();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut cells = Vec::with_capacity(4);
    for row in rows.iter() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);
        cells.extend(cols.iter().copied());
    }

    for (region, cell) in dataset.regions.iter().zip(cells) {
        render_region_tile(frame, cell, region, total);
    }
}

fn render_region_tile(frame: &mut Frame, area: Rect, region: &RegionSummary, total: u64) {
    let scheme = colors();
    let block = Block::default()
        .title(block_title(&format!("{} · {}", region.code, region.label)))
        .title_style(Styles::section_title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(scheme.status_color(region.status)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(inner);

    let share = volume_share(region.volume, total);
    let lines = vec![
        Line::from(vec![
            status_badge(region.status),
            Span::raw(" "),
            trend_badge(&region.trend_label),
        ]),
        Line::from(vec![
            Span::styled("Volume ", Styles::label()),
            Span::styled(format_volume(region.volume), Styles::value()),
            Span::styled(format!("  {share:.1}% of total"), Styles::text_muted()),
        ]),
        Line::from(vec![
            Span::styled("Fraud ", Styles::label()),
            Span::styled(
                format_rate_percent(region.fraud_rate),
                Style::default().fg(scheme.alert),
            ),
            Span::styled("  Approval ", Styles::label()),
            Span::styled(
                format!("{:.1}%", region.approval_rate),
                Style::default().fg(scheme.positive),
            ),
        ]),
        Line::styled(region.note.clone(), Styles::text_muted()),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[0]);

    let trend_color = scheme.trend_color(classify_trend(&region.trend_label));
    frame.render_widget(
        MiniSparkline::new(region.weekly_activity.clone()).color(trend_color),
        chunks[1],
    );
}

// ============================================================================
// Funnel
// ============================================================================

fn render_funnel(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let dataset = app.dataset();
    let block = bordered("Conversion Funnel");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(dataset.funnel.iter().map(|_| Constraint::Length(2)));
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "Select a stage and press Enter for the funnel assistant",
            Style::default().fg(scheme.text_muted).italic(),
        )),
        rows[0],
    );

    let top = dataset.funnel.first().map_or(0, |s| s.volume);
    let open_stage = app.state().funnel.selected;
    for (i, stage) in dataset.funnel.iter().enumerate() {
        let row = rows[i + 1];
        let is_cursor = app.funnel.index() == i;
        let is_open = open_stage == Some(i);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(30),
                Constraint::Length(14),
                Constraint::Length(9),
            ])
            .split(Rect { height: 1, ..row });

        let marker_style = if is_open {
            Style::default().fg(scheme.accent).bold()
        } else {
            Style::default().fg(scheme.primary)
        };
        let marker = if is_cursor { "▶" } else { " " };
        frame.render_widget(Paragraph::new(Span::styled(marker, marker_style)), cols[0]);

        let bar_color = if is_cursor {
            scheme.highlight
        } else {
            scheme.primary
        };
        frame.render_widget(
            HorizontalBar::new(&stage.name, stage.volume, top)
                .color(bar_color)
                .caption(format_volume(stage.volume)),
            cols[1],
        );

        let drop = if stage.drop_percent > 0.0 {
            Span::styled(
                format!(" ↓ {:.1}%", stage.drop_percent),
                Style::default().fg(scheme.pressure_color(stage.pressure)),
            )
        } else {
            Span::styled(" —", Styles::text_muted())
        };
        frame.render_widget(Paragraph::new(drop), cols[2]);
        frame.render_widget(Paragraph::new(pressure_badge(stage.pressure)), cols[3]);
    }
}

// ============================================================================
// Segments
// ============================================================================

fn render_segments(frame: &mut Frame, area: Rect, dataset: &Dataset) {
    let scheme = colors();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(dataset.product_lines.len() as u16 + 3),
            Constraint::Min(0),
        ])
        .split(area);

    let header_style = Style::default().fg(scheme.text_muted).bold();

    let products = Table::new(
        dataset.product_lines.iter().map(|p| {
            Row::new(vec![
                Cell::from(p.product.clone()),
                Cell::from(Span::styled(
                    format!("{:.0}%", p.approval_rate),
                    Style::default().fg(scheme.positive),
                )),
                Cell::from(Span::styled(
                    format_rate_percent(p.fraud_rate),
                    Style::default().fg(scheme.alert),
                )),
                Cell::from(p.volume_label.clone()),
                Cell::from(Span::styled(p.note.clone(), Styles::text_muted())),
            ])
        }),
        [
            Constraint::Length(16),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Min(10),
        ],
    )
    .header(Row::new(["Product", "Approval", "Fraud", "Volume", "Note"]).style(header_style))
    .block(bordered("Product Lines"));
    frame.render_widget(products, chunks[0]);

    let cohorts = Table::new(
        dataset.cohorts.iter().map(|c| {
            Row::new(vec![
                Cell::from(c.cohort.clone()),
                Cell::from(format!("{:.0}%", c.approval_rate)),
                Cell::from(c.volume_label.clone()),
                Cell::from(pressure_badge(c.risk)),
                Cell::from(trend_badge(&c.trend_label)),
                Cell::from(Span::styled(c.note.clone(), Styles::text_muted())),
            ])
        }),
        [
            Constraint::Length(20),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Length(10),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(["Cohort", "Approval", "Volume", "Risk", "Trend", "Note"]).style(header_style),
    )
    .block(bordered("Cohort Watchlist"));
    frame.render_widget(cohorts, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MemoryPreferenceStore, Store};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_overview(frame, area, app);
            })
            .expect("draw");
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        App::new(
            Store::builder(Dataset::demo())
                .preferences(MemoryPreferenceStore::new())
                .build(),
        )
    }

    #[test]
    fn test_health_section_shows_cards_and_charts() {
        let screen = render(&app());
        assert!(screen.contains("Transaction Volume & Approval Rate"));
        assert!(screen.contains("Fraud Rate"));
        assert!(screen.contains("Support Signal"));
    }

    #[test]
    fn test_regions_section_shows_share() {
        let mut app = app();
        app.sections.select(OverviewSection::Regions);
        let screen = render(&app);
        assert!(screen.contains("% of total"));
        assert!(screen.contains("Volume"));
    }

    #[test]
    fn test_funnel_section_marks_cursor() {
        let mut app = app();
        app.sections.select(OverviewSection::Funnel);
        let screen = render(&app);
        assert!(screen.contains("Conversion Funnel"));
        assert!(screen.contains('▶'));
    }
}
