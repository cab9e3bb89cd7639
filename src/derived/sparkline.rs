//! Sparkline geometry.
//!
//! Series are normalized into a 56x24 box: x is spread evenly over `0..=56`
//! and y is inverted so that the series maximum sits at `4` and the minimum
//! at `20`.

use std::fmt::Write as _;

/// Width of the sparkline box.
pub const SPARKLINE_WIDTH: f64 = 56.0;
/// Y coordinate of the series minimum.
pub const SPARKLINE_BOTTOM: f64 = 20.0;
/// Vertical span between minimum and maximum.
pub const SPARKLINE_SPAN: f64 = 16.0;
/// Y coordinate of the flat line used for empty or constant series.
pub const SPARKLINE_MID: f64 = 12.0;

/// Path drawn when a series cannot be scaled.
pub const FLAT_SPARKLINE_PATH: &str = "M0,12 L56,12";

/// Normalized `(x, y)` points for a series.
///
/// Empty and constant series degenerate to a two-point flat line at
/// [`SPARKLINE_MID`].
#[must_use]
pub fn sparkline_points(values: &[f64]) -> Vec<(f64, f64)> {
    let Some((min, max)) = bounds(values) else {
        return flat_line();
    };
    if max == min {
        return flat_line();
    }

    let last = (values.len() - 1).max(1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = i as f64 / last * SPARKLINE_WIDTH;
            let ratio = (value - min) / (max - min);
            (x, SPARKLINE_BOTTOM - ratio * SPARKLINE_SPAN)
        })
        .collect()
}

/// Polyline path (`M x,y L x,y ...`) for a series, one decimal per coordinate.
#[must_use]
pub fn sparkline_path(values: &[f64]) -> String {
    let Some((min, max)) = bounds(values) else {
        return FLAT_SPARKLINE_PATH.to_string();
    };
    if max == min {
        return FLAT_SPARKLINE_PATH.to_string();
    }

    let mut path = String::new();
    for (i, (x, y)) in sparkline_points(values).into_iter().enumerate() {
        if i > 0 {
            path.push(' ');
        }
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(path, "{cmd}{x:.1},{y:.1}");
    }
    path
}

fn flat_line() -> Vec<(f64, f64)> {
    vec![(0.0, SPARKLINE_MID), (SPARKLINE_WIDTH, SPARKLINE_MID)]
}

fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some((min, max))
}
