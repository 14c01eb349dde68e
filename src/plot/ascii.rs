//! ASCII/Unicode plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - monthly prices: `o`
//! - the current month (suggested price): `$`
//! - segments between months: `-` line
//! - a month label row under the grid

use crate::domain::TrendPoint;
use crate::report::format_price_short;

/// Render the six-month trend as a fixed-size character grid.
pub fn render_trend_plot(trend: &[TrendPoint], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    if trend.is_empty() {
        return "Trend: no data\n".to_string();
    }

    let x_max = (trend.len().max(2) - 1) as f64;
    let (y_min, y_max) = price_range(trend);
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    let cells: Vec<(usize, usize)> = trend
        .iter()
        .enumerate()
        .map(|(i, p)| {
            (
                map_x(i as f64, 0.0, x_max, width),
                map_y(p.price as f64, y_min, y_max, height),
            )
        })
        .collect();

    // Segments first so the month markers overlay them.
    for pair in cells.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        draw_line(&mut grid, x0, y0, x1, y1, '-');
    }

    let last = cells.len() - 1;
    for (i, &(x, y)) in cells.iter().enumerate() {
        grid[y][x] = if i == last { '$' } else { 'o' };
    }

    let mut out = String::new();
    let first = &trend[0];
    let final_point = &trend[last];
    out.push_str(&format!(
        "Trend: {}..{} | price=[{}, {}]\n",
        first.label,
        final_point.label,
        format_price_short(y_min.max(0.0).round() as u64),
        format_price_short(y_max.round() as u64),
    ));

    for row in grid {
        out.push_str(row.into_iter().collect::<String>().trim_end());
        out.push('\n');
    }
    out.push_str(label_row(trend, &cells, width).trim_end());
    out.push('\n');

    out
}

/// Month labels placed under their columns; a label that would overlap the
/// previous one is dropped.
fn label_row(trend: &[TrendPoint], cells: &[(usize, usize)], width: usize) -> String {
    let mut row = vec![' '; width];
    let mut next_free = 0usize;
    for (p, &(x, _)) in trend.iter().zip(cells) {
        let len = p.label.chars().count();
        let start = x.min(width.saturating_sub(len));
        if start < next_free || start + len > width {
            continue;
        }
        for (offset, ch) in p.label.chars().enumerate() {
            row[start + offset] = ch;
        }
        next_free = start + len + 1;
    }
    row.into_iter().collect()
}

fn price_range(trend: &[TrendPoint]) -> (f64, f64) {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in trend {
        min_y = min_y.min(p.price as f64);
        max_y = max_y.max(p.price as f64);
    }
    if max_y > min_y {
        (min_y, max_y)
    } else {
        // Flat series: centre it in a band of +/-5%.
        let half = (min_y.abs() * 0.05).max(1.0);
        (min_y - half, max_y + half)
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(t: f64, t_min: f64, t_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
