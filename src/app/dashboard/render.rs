use super::Dashboard;
use crate::core::text_window::{truncate_to_width, visible_tail};
use crate::kernel::indicator::{RsiZone, OVERBOUGHT, OVERSOLD};
use crate::kernel::quote::summarize_record;
use crate::kernel::services::ports::FetchKind;
use crate::kernel::{DashboardTab, RegionId, WidgetState};
use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::Painter;
use crate::ui::core::style::{Mod, Style};
use unicode_width::UnicodeWidthStr;

const INPUT_PLACEHOLDER: &str = "type a symbol";
const GAUGE_WIDTH: u16 = 40;
/// The bundled quote program reports a 14-period RSI but no price history.
const NO_CLOSES_HINT: &str =
    "quote output has no closes: only the reported 14-period RSI is available";

impl Dashboard {
    pub fn render(&mut self, backend: &mut dyn Backend, area: Rect) {
        self.set_area(area);

        let mut painter = Painter::new();
        self.paint_header(&mut painter);
        self.paint_input(&mut painter);
        self.paint_button(&mut painter, FetchKind::Quote);
        self.paint_button(&mut painter, FetchKind::Options);
        self.paint_tabs(&mut painter);
        self.paint_content(&mut painter);
        self.paint_log(&mut painter);
        // The open list covers the panels below it.
        self.paint_dropdown(&mut painter);

        backend.draw(area, painter.cmds());
        backend.set_cursor(painter.cursor());
        self.dirty = false;
    }

    fn hovered(&self, id: RegionId) -> bool {
        self.store.state().hover.contains(&id)
    }

    fn paint_header(&self, painter: &mut Painter) {
        let rect = self.layout.header;
        if rect.is_empty() {
            return;
        }
        let title = Style::default()
            .fg(self.theme.header_fg)
            .add_mod(Mod::BOLD);
        painter.text(Pos::new(rect.x + 1, rect.y), "tickerdash", title, rect);

        let state = self.store.state();
        if state.in_flight.is_empty() {
            return;
        }
        let kinds: Vec<&str> = state.in_flight.iter().map(|k| k.label()).collect();
        let status = format!("fetching {}...", kinds.join(", "));
        let width = UnicodeWidthStr::width(status.as_str()) as u16;
        let x = rect.right().saturating_sub(width.saturating_add(1)).max(rect.x);
        painter.text(
            Pos::new(x, rect.y),
            status,
            Style::default().fg(self.theme.muted_fg),
            rect,
        );
    }

    fn paint_input(&self, painter: &mut Painter) {
        let rect = self.layout.input;
        if rect.is_empty() {
            return;
        }
        let input = &self.store.state().input;
        let border = if input.focused {
            self.theme.focus_border
        } else if self.hovered(RegionId::Input) {
            self.theme.accent_fg
        } else {
            self.theme.border
        };
        let style = Style::default().fg(border);
        painter.panel(rect, Some("Symbol"), style, style);

        let inner = rect.inset(1);
        if inner.is_empty() {
            return;
        }
        let text_pos = Pos::new(inner.x + 1, inner.y);
        if input.text.is_empty() && !input.focused {
            painter.text(
                text_pos,
                INPUT_PLACEHOLDER,
                Style::default().fg(self.theme.muted_fg),
                inner,
            );
            return;
        }

        // One cell of padding plus one for the cursor.
        let room = inner.w.saturating_sub(2) as usize;
        let shown = visible_tail(&input.text, room);
        painter.text(
            text_pos,
            shown,
            Style::default().fg(self.theme.text_fg),
            inner,
        );
        if input.focused {
            let cursor_x = text_pos.x + UnicodeWidthStr::width(shown) as u16;
            painter.set_cursor(Some(Pos::new(cursor_x.min(inner.right() - 1), inner.y)));
        }
    }

    fn paint_button(&self, painter: &mut Painter, kind: FetchKind) {
        let (rect, id, label) = match kind {
            FetchKind::Quote => (self.layout.quote_button, RegionId::QuoteButton, "Quote"),
            FetchKind::Options => (
                self.layout.options_button,
                RegionId::OptionsButton,
                "Options",
            ),
        };
        if rect.is_empty() {
            return;
        }
        let bg = if self.store.state().is_in_flight(kind) {
            self.theme.button_busy_bg
        } else if self.hovered(id) {
            self.theme.button_hover_bg
        } else {
            self.theme.button_bg
        };
        let style = Style::default().bg(bg).fg(self.theme.button_fg);
        painter.fill(rect, style);
        painter.text_centered(rect, label, style.add_mod(Mod::BOLD));
    }

    fn paint_dropdown(&self, painter: &mut Painter) {
        let rect = self.layout.dropdown;
        if rect.is_empty() {
            return;
        }
        let dropdown = &self.store.state().dropdown;
        let border = if dropdown.open || self.hovered(RegionId::Dropdown) {
            self.theme.focus_border
        } else {
            self.theme.border
        };
        let style = Style::default().fg(border);
        painter.panel(rect, Some("Indicator"), style, style);

        let inner = rect.inset(1);
        if let Some(option) = dropdown.selected_option() {
            let arrow = if dropdown.open { '▴' } else { '▾' };
            painter.text(
                Pos::new(inner.x + 1, inner.y),
                format!("{arrow} {}", option.label),
                Style::default().fg(self.theme.resolve(&option.color)),
                inner,
            );
        }

        if !dropdown.open {
            return;
        }
        for (i, (option, row)) in dropdown
            .options
            .iter()
            .zip(self.layout.dropdown_options.iter())
            .enumerate()
        {
            if row.is_empty() {
                continue;
            }
            let bg = if self.hovered(RegionId::DropdownOption(i)) {
                self.theme.dropdown_hover_bg
            } else {
                self.theme.dropdown_bg
            };
            painter.fill(*row, Style::default().bg(bg));
            let marker = if i == dropdown.selected { '•' } else { ' ' };
            painter.text(
                Pos::new(row.x + 1, row.y),
                format!("{marker} {}", option.label),
                Style::default()
                    .bg(bg)
                    .fg(self.theme.resolve(&option.color)),
                *row,
            );
        }
    }

    fn paint_tabs(&self, painter: &mut Painter) {
        let state = self.store.state();
        for (tab, rect) in DashboardTab::ALL.iter().zip(self.layout.tabs.iter()) {
            if rect.is_empty() {
                continue;
            }
            let style = if *tab == state.active_tab {
                Style::default()
                    .bg(self.theme.tab_active_bg)
                    .fg(self.theme.tab_active_fg)
                    .add_mod(Mod::BOLD)
            } else if self.hovered(RegionId::Tab(tab.index())) {
                Style::default()
                    .fg(self.theme.tab_hover_fg)
                    .add_mod(Mod::UNDERLINE)
            } else {
                Style::default().fg(self.theme.muted_fg)
            };
            painter.fill(*rect, style);
            painter.text(Pos::new(rect.x + 1, rect.y), tab.label(), style, *rect);
        }
    }

    fn paint_content(&self, painter: &mut Painter) {
        let rect = self.layout.content;
        if rect.h < 3 || rect.w < 4 {
            return;
        }
        let state = self.store.state();
        let frame = rect.inset_x(1);
        painter.panel(
            frame,
            Some(state.active_tab.label()),
            Style::default().fg(self.theme.border),
            Style::default().fg(self.theme.accent_fg),
        );

        let inner = frame.inset(1);
        let mut lines = PanelLines::new(inner);
        match state.active_tab {
            DashboardTab::Quote => self.quote_lines(state, &mut lines),
            DashboardTab::Options => self.options_lines(state, &mut lines),
            DashboardTab::Indicators => self.indicator_lines(state, &mut lines),
        }
        lines.paint(painter);
    }

    fn quote_lines(&self, state: &WidgetState, lines: &mut PanelLines) {
        let Some(quote) = &state.quote else {
            lines.push("No quote yet. Enter a symbol and press Quote.", self.muted());
            return;
        };
        let currency = quote.currency.as_deref().unwrap_or("");
        lines.push(
            format!("{}  {} {}", quote.symbol, fmt_price(quote.last_price), currency),
            Style::default().fg(self.theme.accent_fg).add_mod(Mod::BOLD),
        );
        lines.push(
            format!("Previous close  {}", fmt_price(quote.previous_close)),
            Style::default(),
        );
        if let Some((diff, pct)) = quote.change() {
            let color = if diff >= 0.0 {
                self.theme.positive_fg
            } else {
                self.theme.negative_fg
            };
            lines.push(
                format!("Change          {diff:+.2} ({pct:+.2}%)"),
                Style::default().fg(color),
            );
        }
        lines.push(
            format!(
                "RSI ({})        {}",
                state.dropdown.selected_period(),
                fmt_rsi(state.rsi)
            ),
            Style::default(),
        );
    }

    fn options_lines(&self, state: &WidgetState, lines: &mut PanelLines) {
        let Some(options) = &state.options else {
            lines.push(
                "No options data yet. Enter a symbol and press Options.",
                self.muted(),
            );
            return;
        };
        if let Some(error) = &options.error {
            lines.push(
                format!("{}: {error}", options.symbol),
                Style::default().fg(self.theme.error_fg),
            );
            return;
        }
        lines.push(
            format!(
                "{}  straddle rows {}  stacked rows {}",
                options.symbol, options.straddle_rows, options.stacked_rows
            ),
            Style::default().fg(self.theme.accent_fg).add_mod(Mod::BOLD),
        );
        for (title, rows) in [
            ("straddle", &options.preview.straddle_head),
            ("stacked", &options.preview.stacked_head),
        ] {
            for record in rows {
                lines.push(format!("{title}: {}", summarize_record(record)), Style::default());
            }
        }
    }

    fn indicator_lines(&self, state: &WidgetState, lines: &mut PanelLines) {
        let period = state.dropdown.selected_period();
        let label = state
            .dropdown
            .selected_option()
            .map(|o| o.label.as_str())
            .unwrap_or("RSI");
        let closes = state.quote.as_ref().map(|q| q.closes.len()).unwrap_or(0);
        lines.push(
            format!("{label}  period {period}  closes {closes}"),
            Style::default().fg(self.theme.accent_fg).add_mod(Mod::BOLD),
        );

        let Some(value) = state.rsi else {
            lines.push("RSI n/a (not enough data)", self.muted());
            if state.quote.as_ref().is_some_and(|q| q.closes.is_empty()) {
                lines.push(NO_CLOSES_HINT, self.muted());
            }
            return;
        };
        let zone = RsiZone::classify(value);
        let color = match zone {
            RsiZone::Overbought => self.theme.negative_fg,
            RsiZone::Oversold => self.theme.positive_fg,
            RsiZone::Neutral => self.theme.text_fg,
        };
        lines.push(
            format!("RSI {value:.2}  {}", zone.label()),
            Style::default().fg(color),
        );
        lines.push(gauge(value, GAUGE_WIDTH), Style::default().fg(color));
        lines.push(
            format!("oversold <= {OVERSOLD:.0}  overbought >= {OVERBOUGHT:.0}"),
            self.muted(),
        );
    }

    fn paint_log(&self, painter: &mut Painter) {
        let rect = self.layout.log;
        if rect.h < 3 || rect.w < 4 {
            return;
        }
        let frame = rect.inset_x(1);
        painter.panel(
            frame,
            Some("Log"),
            Style::default().fg(self.theme.border),
            Style::default().fg(self.theme.accent_fg),
        );

        let inner = frame.inset(1);
        let log = &self.store.state().log;
        let visible = inner.h as usize;
        for (row, line) in log.tail(visible).enumerate() {
            let style = if is_failure_line(line) {
                Style::default().fg(self.theme.error_fg)
            } else {
                Style::default()
            };
            let fitted = &line[..truncate_to_width(line, inner.w.saturating_sub(1) as usize)];
            painter.text(
                Pos::new(inner.x + 1, inner.y + row as u16),
                fitted,
                style,
                inner,
            );
        }
    }

    fn muted(&self) -> Style {
        Style::default().fg(self.theme.muted_fg)
    }
}

/// Collects panel rows and drops whatever does not fit.
struct PanelLines {
    area: Rect,
    rows: Vec<(String, Style)>,
}

impl PanelLines {
    fn new(area: Rect) -> Self {
        Self {
            area,
            rows: Vec::new(),
        }
    }

    fn push(&mut self, text: impl Into<String>, style: Style) {
        if self.rows.len() < self.area.h as usize {
            self.rows.push((text.into(), style));
        }
    }

    fn paint(self, painter: &mut Painter) {
        for (row, (text, style)) in self.rows.into_iter().enumerate() {
            painter.text(
                Pos::new(self.area.x + 1, self.area.y + row as u16),
                text,
                style,
                self.area,
            );
        }
    }
}

fn fmt_price(value: Option<f64>) -> String {
    value
        .filter(|v| v.is_finite())
        .map(|v| format!("{v:.2}"))
        .unwrap_or_else(|| "n/a".to_string())
}

fn fmt_rsi(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.2} ({})", RsiZone::classify(v).label()))
        .unwrap_or_else(|| "n/a".to_string())
}

/// `[#####.....]` with the filled share proportional to `value / 100`.
fn gauge(value: f64, width: u16) -> String {
    let width = width as usize;
    let filled = ((value.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        ".".repeat(width.saturating_sub(filled))
    )
}

fn is_failure_line(line: &str) -> bool {
    line == "No symbol provided"
        || line.starts_with("Failed to start")
        || line.contains("fetch exited with code")
        || line.contains("fetch timed out")
        || line.contains("terminated by a signal")
}
