//! Sparkline and bar widgets for metric tiles.

use crate::derived::{sparkline_points, SPARKLINE_BOTTOM, SPARKLINE_SPAN};
use crate::tui::theme::colors;
use ratatui::{prelude::*, widgets::Widget};

/// Block characters for sub-cell resolution.
const LEVELS: &[char] = &['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// A simple horizontal bar for comparing a value against a maximum.
pub struct HorizontalBar {
    label: String,
    value: u64,
    max_value: u64,
    color: Color,
    caption: Option<String>,
}

impl HorizontalBar {
    pub fn new(label: impl Into<String>, value: u64, max_value: u64) -> Self {
        Self {
            label: label.into(),
            value,
            max_value,
            color: colors().primary,
            caption: None,
        }
    }

    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Text drawn after the bar instead of the raw value.
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    fn filled_cells(&self, bar_width: usize) -> usize {
        if self.max_value == 0 {
            return 0;
        }
        let ratio = self.value.min(self.max_value) as f64 / self.max_value as f64;
        (ratio * bar_width as f64).round() as usize
    }
}

impl Widget for HorizontalBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 1 {
            return;
        }

        let caption = self
            .caption
            .clone()
            .unwrap_or_else(|| self.value.to_string());
        let label_width = 18.min(area.width as usize / 3);
        let caption_width = caption.chars().count() + 1;
        let bar_width = (area.width as usize).saturating_sub(label_width + caption_width + 1);

        let y = area.y;
        let right = area.x + area.width;
        let mut x = area.x;

        let label = super::truncate_str(&self.label, label_width);
        let label = format!("{label:label_width$} ");
        for ch in label.chars() {
            if x < right {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(ch)
                        .set_style(Style::default().fg(colors().text));
                }
                x += 1;
            }
        }

        let filled = self.filled_cells(bar_width);
        for i in 0..bar_width {
            if x < right {
                let (ch, style) = if i < filled {
                    ('█', Style::default().fg(self.color))
                } else {
                    ('░', Style::default().fg(colors().muted))
                };
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(ch).set_style(style);
                }
                x += 1;
            }
        }

        x += 1;
        for ch in caption.chars() {
            if x < right {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(ch)
                        .set_style(Style::default().fg(colors().primary).bold());
                }
                x += 1;
            }
        }
    }
}

/// A one-row sparkline for weekly activity.
///
/// Heights follow the same normalization as the exported sparkline paths,
/// so a constant series sits on the middle level.
pub struct MiniSparkline {
    values: Vec<f64>,
    color: Color,
}

impl MiniSparkline {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            color: colors().primary,
        }
    }

    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Level index (0..8) for each value.
    fn levels(&self) -> Vec<usize> {
        let top = LEVELS.len() - 1;
        let points = sparkline_points(&self.values);
        if points.len() != self.values.len() {
            return vec![top / 2; self.values.len()];
        }
        points
            .iter()
            .map(|(_, y)| {
                let ratio = (SPARKLINE_BOTTOM - y) / SPARKLINE_SPAN;
                ((ratio * top as f64).round() as usize).min(top)
            })
            .collect()
    }
}

impl Widget for MiniSparkline {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 1 || self.values.is_empty() {
            return;
        }

        let width = area.width as usize;
        let levels = self.levels();
        let step = levels.len() as f64 / width as f64;
        let y = area.y + area.height - 1;

        for x in 0..width {
            let idx = (x as f64 * step) as usize;
            if let Some(&level) = levels.get(idx) {
                if let Some(cell) = buf.cell_mut((area.x + x as u16, y)) {
                    cell.set_char(LEVELS[level])
                        .set_style(Style::default().fg(self.color));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_sparkline_levels_span_full_range() {
        let spark = MiniSparkline::new(vec![1.0, 5.0, 3.0]);
        assert_eq!(spark.levels(), vec![0, 7, 4]);
    }

    #[test]
    fn test_constant_series_sits_mid_level() {
        let spark = MiniSparkline::new(vec![2.0, 2.0, 2.0, 2.0]);
        assert_eq!(spark.levels(), vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_sparkline_renders_one_cell_per_value() {
        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::empty(area);
        MiniSparkline::new(vec![1.0, 5.0, 3.0]).render(area, &mut buf);
        assert_eq!(row(&buf, 0), "▁█▅");
    }

    #[test]
    fn test_horizontal_bar_fill() {
        let bar = HorizontalBar::new("Checkout", 50, 100);
        assert_eq!(bar.filled_cells(20), 10);
        let empty = HorizontalBar::new("Checkout", 50, 0);
        assert_eq!(empty.filled_cells(20), 0);
    }

    #[test]
    fn test_horizontal_bar_renders_caption() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        HorizontalBar::new("Login", 3, 4)
            .caption("75%")
            .render(area, &mut buf);
        let line = row(&buf, 0);
        assert!(line.starts_with("Login"));
        assert!(line.trim_end().ends_with("75%"));
    }
}
