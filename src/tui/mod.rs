//! Ratatui-based terminal UI.
//!
//! Two screens: the three-step evaluation wizard, then a results screen with
//! the estimate, the price breakdown and a Plotters trend chart.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph},
};
use tracing::info;

use crate::app::pipeline::{ValuationRun, reroll_trend, run_valuation_with_rng};
use crate::domain::Impact;
use crate::error::AppError;
use crate::form::{EvaluationForm, Field, FieldKind, MIN_CONDITION_LEN};
use crate::report::{format_price, format_price_short, group_thousands};

mod plotters_chart;

use plotters_chart::TrendPlottersChart;

/// Start the TUI.
pub fn run(as_of: NaiveDate, seed: Option<u64>) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::internal(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(as_of, seed);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::internal(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::internal(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Wizard,
    Results,
}

struct App {
    as_of: NaiveDate,
    rng: StdRng,
    form: EvaluationForm,
    screen: Screen,
    /// Index into the current step's fields.
    selected: usize,
    editing: bool,
    edit_buffer: String,
    status: String,
    run: Option<ValuationRun>,
}

impl App {
    fn new(as_of: NaiveDate, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            as_of,
            rng,
            form: EvaluationForm::new(),
            screen: Screen::Wizard,
            selected: 0,
            editing: false,
            edit_buffer: String::new(),
            status: "Select a make to begin.".to_string(),
            run: None,
        }
    }

    fn current_year(&self) -> i32 {
        self.as_of.year()
    }

    fn selected_field(&self) -> Field {
        let fields = self.form.step().fields();
        fields[self.selected.min(fields.len() - 1)]
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::internal(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::internal(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::internal(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.editing {
            self.handle_edit(code);
            return false;
        }
        match self.screen {
            Screen::Wizard => self.handle_wizard_key(code),
            Screen::Results => self.handle_results_key(code),
        }
    }

    fn handle_wizard_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                let last = self.form.step().fields().len() - 1;
                self.selected = (self.selected + 1).min(last);
            }
            KeyCode::Left => self.cycle_selected(-1),
            KeyCode::Right => self.cycle_selected(1),
            KeyCode::Enter => {
                let field = self.selected_field();
                if field.kind() == FieldKind::Choice {
                    self.advance();
                } else {
                    self.editing = true;
                    self.edit_buffer = self.form.get(field).to_string();
                    self.status = format!("Editing {}. Enter to apply, Esc to cancel.", field.title());
                }
            }
            KeyCode::Tab => self.advance(),
            KeyCode::Char('b') => {
                if self.form.back() {
                    self.selected = 0;
                    self.status = format!("Step {}: {}", self.form.step().number(), self.form.step().title());
                }
            }
            _ => {}
        }
        false
    }

    fn handle_results_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('b') => {
                self.screen = Screen::Wizard;
                self.status = "Back to the wizard; answers kept.".to_string();
            }
            KeyCode::Char('r') => {
                if let Some(run) = &mut self.run {
                    reroll_trend(run, &mut self.rng);
                    self.status = "Drew a new trend series.".to_string();
                }
            }
            KeyCode::Char('x') => self.export(),
            _ => {}
        }
        false
    }

    fn handle_edit(&mut self, code: KeyCode) {
        let field = self.selected_field();
        match code {
            KeyCode::Esc => {
                self.editing = false;
                self.status = "Edit canceled.".to_string();
            }
            KeyCode::Enter => {
                self.editing = false;
                self.form.set(field, self.edit_buffer.trim().to_string());
                self.status = format!("{} set.", field.title());
            }
            KeyCode::Backspace => {
                self.edit_buffer.pop();
            }
            KeyCode::Char(c) => match field.kind() {
                FieldKind::Number if c.is_ascii_digit() => self.edit_buffer.push(c),
                FieldKind::Text => self.edit_buffer.push(c),
                _ => {}
            },
            _ => {}
        }
    }

    fn cycle_selected(&mut self, delta: i32) {
        let field = self.selected_field();
        let year = self.current_year();
        if self.form.cycle(field, delta, year) {
            self.status = format!("{}: {}", field.title(), self.form.get(field));
        } else if field.kind() == FieldKind::Choice {
            self.status = match field {
                Field::Model => "Pick a make first.".to_string(),
                Field::Variant => "Pick a model first.".to_string(),
                _ => "No options.".to_string(),
            };
        } else {
            self.status = "Press Enter to type a value.".to_string();
        }
    }

    /// Next step, or submit on the last one.
    fn advance(&mut self) {
        if !self.form.can_proceed() {
            self.status = self.missing_hint();
            return;
        }
        if self.form.is_last_step() {
            self.submit();
        } else if self.form.next() {
            self.selected = 0;
            self.status = format!("Step {}: {}", self.form.step().number(), self.form.step().title());
        }
    }

    fn missing_hint(&self) -> String {
        let missing: Vec<&str> = self
            .form
            .step()
            .fields()
            .iter()
            .filter(|&&f| match f {
                Field::InteriorCondition | Field::ExteriorCondition => {
                    self.form.get(f).chars().count() < MIN_CONDITION_LEN
                }
                Field::EngineCapacity | Field::IsAccidental | Field::ModificationStatus => false,
                _ => self.form.get(f).is_empty(),
            })
            .map(|f| f.title())
            .collect();
        if self.form.step().number() == 3 {
            format!(
                "Needs at least {MIN_CONDITION_LEN} characters: {}",
                missing.join(", ")
            )
        } else {
            format!("Missing: {}", missing.join(", "))
        }
    }

    fn submit(&mut self) {
        let attributes = self.form.to_attributes(self.current_year());
        let run = run_valuation_with_rng(attributes, self.as_of, &mut self.rng);
        self.status = if run.base_price.is_some() {
            "Valuation ready. r re-roll trend, x export, b back.".to_string()
        } else {
            "No market data for this car.".to_string()
        };
        info!(query = %self.form.to_query_string(), "submitted evaluation");
        self.run = Some(run);
        self.screen = Screen::Results;
    }

    fn export(&mut self) {
        let Some(run) = &self.run else {
            return;
        };
        let path = PathBuf::from(format!("carval-valuation-{}.json", self.as_of));
        self.status = match crate::io::valuation::write_valuation_json(&path, &run.to_file()) {
            Ok(()) => format!("Wrote {}", path.display()),
            Err(err) => format!("Export failed: {err}"),
        };
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        match self.screen {
            Screen::Wizard => self.draw_wizard(frame, chunks[1]),
            Screen::Results => self.draw_results(frame, chunks[1]),
        }
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let step = self.form.step();
        let title = Line::from(vec![
            Span::styled("carval", Style::default().fg(Color::Cyan)),
            Span::raw(format!(
                " | step {}/3: {} | {}/12 fields | as of {}",
                step.number(),
                step.title(),
                self.form.filled_fields(),
                self.as_of
            )),
        ]);
        frame.render_widget(Paragraph::new(title), rows[0]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio((self.form.progress() / 100.0).clamp(0.0, 1.0));
        frame.render_widget(gauge, rows[1]);
    }

    fn draw_wizard(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let step = self.form.step();
        let items: Vec<ListItem> = step
            .fields()
            .iter()
            .map(|&f| {
                let value = self.form.get(f);
                let shown = if value.is_empty() { "-" } else { value };
                let hint = match f.kind() {
                    FieldKind::Choice => "←/→",
                    FieldKind::Number | FieldKind::Text => "Enter",
                };
                ListItem::new(format!("{:<18} {shown}  ({hint})", f.title()))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!("Step {}: {}", step.number(), step.title()))
                    .borders(Borders::ALL),
            )
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);

        if self.editing {
            let hint = Paragraph::new(format!("> {}_", self.edit_buffer))
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
            let rect = Rect {
                x: area.x + 2,
                y: area.y + area.height.saturating_sub(2),
                width: area.width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(hint, rect);
        }
    }

    fn draw_results(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let Some(run) = &self.run else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(46), Constraint::Min(0)])
            .split(area);

        frame.render_widget(summary_panel(run), chunks[0]);
        self.draw_chart(frame, chunks[1], run);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect, run: &ValuationRun) {
        let block = Block::default().title("Price Trend (6 months)").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        if !run.estimate.has_data() {
            let msg = Paragraph::new("No market data for this make/model/variant.")
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(msg, inner);
            return;
        }

        let (series, labels, x_bounds, y_bounds) = chart_series(run);
        let (chart_rect, insets) = chart_layout(inner);
        let widget = TrendPlottersChart {
            series: &series,
            labels: &labels,
            x_bounds,
            y_bounds,
        };
        frame.render_widget(widget, chart_rect);
        if let Some(insets) = insets {
            draw_axis_ticks(frame, inner, chart_rect, insets, &labels, y_bounds);
        }
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = match self.screen {
            Screen::Wizard => "↑/↓ select  ←/→ choose  Enter edit/next  Tab next  b back  q quit",
            Screen::Results => "r re-roll  x export JSON  b back  q quit",
        };
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn summary_panel(run: &ValuationRun) -> Paragraph<'static> {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        run.attributes.display_name(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(format!(
        "{} km | {} | {}",
        group_thousands(run.attributes.mileage),
        run.attributes.transmission.map(|t| t.label()).unwrap_or("-"),
        run.attributes.fuel_type.map(|f| f.label()).unwrap_or("-"),
    )));
    lines.push(Line::from(""));

    if run.base_price.is_some() {
        lines.push(Line::from(vec![
            Span::raw("Suggested: "),
            Span::styled(
                format_price(run.estimate.suggested),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(format!(
            "Range: {} - {}",
            format_price(run.estimate.min),
            format_price(run.estimate.max)
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "No market data",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(format!("Confidence: {:.0}%", run.estimate.confidence)));

    if run.base_price.is_some() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Breakdown",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )));
        for b in &run.breakdown {
            let (sign, color) = match b.impact {
                Impact::Positive => ("+", Color::Green),
                Impact::Negative => ("-", Color::Red),
                Impact::Neutral => (" ", Color::Gray),
            };
            lines.push(Line::from(vec![
                Span::raw(format!("{:<22}", b.label)),
                Span::styled(
                    format!("{sign}{}", format_price(b.amount.unsigned_abs())),
                    Style::default().fg(color),
                ),
            ]));
        }
    }

    Paragraph::new(Text::from(lines)).block(Block::default().title("Valuation").borders(Borders::ALL))
}

/// Build the chart series: x is the month index, y the price.
fn chart_series(run: &ValuationRun) -> (Vec<(f64, f64)>, Vec<String>, [f64; 2], [f64; 2]) {
    let series: Vec<(f64, f64)> = run
        .trend
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.price as f64))
        .collect();
    let labels: Vec<String> = run.trend.iter().map(|p| p.label.clone()).collect();

    let x_bounds = [0.0, (series.len().max(2) - 1) as f64];

    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(_, y) in &series {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if !y_min.is_finite() || !y_max.is_finite() || y_max <= y_min {
        let centre = if y_min.is_finite() { y_min } else { 0.0 };
        let half = (centre.abs() * 0.05).max(1.0);
        y_min = centre - half;
        y_max = centre + half;
    }
    let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);
    let y_bounds = [y_min - pad, y_max + pad];

    (series, labels, x_bounds, y_bounds)
}

#[derive(Debug, Clone, Copy)]
struct AxisInsets {
    left: u16,
    right: u16,
    top: u16,
    bottom: u16,
}

fn chart_layout(inner: Rect) -> (Rect, Option<AxisInsets>) {
    let insets = AxisInsets {
        left: 8,
        right: 2,
        top: 1,
        bottom: 2,
    };

    if inner.width <= insets.left + insets.right + 10 || inner.height <= insets.top + insets.bottom + 5 {
        return (inner, None);
    }

    let rect = Rect {
        x: inner.x + insets.left,
        y: inner.y + insets.top,
        width: inner.width - insets.left - insets.right,
        height: inner.height - insets.top - insets.bottom,
    };

    (rect, Some(insets))
}

fn draw_axis_ticks(
    frame: &mut ratatui::Frame<'_>,
    inner: Rect,
    chart: Rect,
    insets: AxisInsets,
    labels: &[String],
    y_bounds: [f64; 2],
) {
    let style = Style::default().fg(Color::Gray);

    // One x tick per month.
    let n = labels.len();
    for (i, label) in labels.iter().enumerate() {
        let u = if n > 1 { i as f64 / (n as f64 - 1.0) } else { 0.0 };
        let x = chart.x + ((chart.width - 1) as f64 * u).round() as u16;
        let label_len = label.len() as u16;
        let start = x.saturating_sub(label_len / 2);
        let y = chart.y + chart.height;
        if y >= inner.y + inner.height - 1 {
            continue;
        }
        frame.render_widget(
            Paragraph::new(label.as_str()).style(style),
            Rect {
                x: start,
                y,
                width: label_len,
                height: 1,
            },
        );
    }

    let ticks = 5usize;
    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let y_val = y_bounds[0] + u * (y_bounds[1] - y_bounds[0]);
        let y = chart.y + (chart.height - 1) - ((chart.height - 1) as f64 * u).round() as u16;
        let label = format_price_short(y_val.max(0.0).round() as u64);
        let label_len = label.len() as u16;
        let x = inner.x + insets.left.saturating_sub(1);
        let start = x.saturating_sub(label_len);
        if start < inner.x {
            continue;
        }
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width: label_len,
                height: 1,
            },
        );
    }

    let x_label = Paragraph::new("month")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    let x_rect = Rect {
        x: chart.x,
        y: chart.y + chart.height + 1,
        width: chart.width,
        height: 1,
    };
    if x_rect.y < inner.y + inner.height {
        frame.render_widget(x_label, x_rect);
    }

    let y_label = Paragraph::new("PKR").style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let y_rect = Rect {
        x: inner.x,
        y: inner.y,
        width: insets.left.saturating_sub(1),
        height: 1,
    };
    frame.render_widget(y_label, y_rect);
}
