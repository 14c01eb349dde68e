//! Plotters-powered price trend chart widget for Ratatui.
//!
//! Plotters gives nicer axis rendering than Ratatui's built-in `Chart` widget.
//! Output is drawn into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::report::format_price_short;

/// A render-only chart description.
///
/// All series and bounds are computed outside the render call.
pub struct TrendPlottersChart<'a> {
    /// `(month index, price)` pairs, oldest first.
    pub series: &'a [(f64, f64)],
    /// Month abbreviation per index.
    pub labels: &'a [String],
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl<'a> Widget for TrendPlottersChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Plotters may fail to build a chart in a tiny area.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let x0 = self.x_bounds[0];
        let x1 = self.x_bounds[1];
        let y0 = self.y_bounds[0];
        let y1 = self.y_bounds[1];

        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        let labels = self.labels;
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc("month")
                .y_desc("price (PKR)")
                .x_labels(labels.len().max(2))
                .y_labels(5)
                .x_label_formatter(&|v| month_label(labels, *v))
                .y_label_formatter(&|v| format_price_short(v.max(0.0).round() as u64))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            let line_color = RGBColor(0, 255, 255); // cyan
            let current_color = RGBColor(0, 255, 0); // green

            chart.draw_series(LineSeries::new(self.series.iter().copied(), &line_color))?;

            // Pixels rather than `Circle`: the backend scales circle radii wrongly.
            chart.draw_series(self.series.iter().map(|&(x, y)| Pixel::new((x, y), WHITE)))?;
            if let Some(&(x, y)) = self.series.last() {
                chart.draw_series(std::iter::once(Pixel::new((x, y), current_color)))?;
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}

/// Label for a (possibly fractional) month index; blank between months.
pub fn month_label(labels: &[String], v: f64) -> String {
    let idx = v.round();
    if (v - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}
