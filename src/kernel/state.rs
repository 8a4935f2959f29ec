use std::collections::VecDeque;

use unicode_segmentation::UnicodeSegmentation;

use super::indicator::DEFAULT_RSI_PERIOD;
use super::quote::{OptionsSnapshot, QuoteSnapshot};
use super::regions::HoverSet;
use super::services::ports::{FetchKind, RsiPreset};
use crate::ui::core::geom::Pos;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputState {
    pub text: String,
    pub focused: bool,
}

impl TextInputState {
    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Removes the last grapheme. Returns `false` when already empty.
    pub fn backspace(&mut self) -> bool {
        match self.text.grapheme_indices(true).next_back() {
            Some((idx, _)) => {
                self.text.truncate(idx);
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    pub label: String,
    /// Color name or `#RRGGBB`; resolved by the renderer.
    pub color: String,
    pub period: usize,
}

impl From<&RsiPreset> for DropdownOption {
    fn from(preset: &RsiPreset) -> Self {
        Self {
            label: preset.label.clone(),
            color: preset.color.clone(),
            period: preset.period,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownState {
    pub open: bool,
    pub selected: usize,
    pub options: Vec<DropdownOption>,
}

impl DropdownState {
    pub fn selected_option(&self) -> Option<&DropdownOption> {
        self.options.get(self.selected)
    }

    pub fn selected_period(&self) -> usize {
        self.selected_option()
            .map(|o| o.period)
            .unwrap_or(DEFAULT_RSI_PERIOD)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DashboardTab {
    #[default]
    Quote,
    Options,
    Indicators,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Quote,
        DashboardTab::Options,
        DashboardTab::Indicators,
    ];

    pub fn index(self) -> usize {
        match self {
            DashboardTab::Quote => 0,
            DashboardTab::Options => 1,
            DashboardTab::Indicators => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Quote => "Quote",
            DashboardTab::Options => "Options",
            DashboardTab::Indicators => "Indicators",
        }
    }
}

/// Append-only message log with an optional line cap; the oldest lines are
/// evicted first.
#[derive(Debug, Clone, Default)]
pub struct LogState {
    lines: VecDeque<String>,
    capacity: Option<usize>,
    evicted: usize,
}

impl LogState {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity: capacity.map(|c| c.max(1)),
            evicted: 0,
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
        if let Some(cap) = self.capacity {
            while self.lines.len() > cap {
                self.lines.pop_front();
                self.evicted += 1;
            }
        }
    }

    /// Appends every line of a multi-line block; a trailing newline does not
    /// produce an empty line.
    pub fn push_block(&mut self, text: &str) {
        for line in text.lines() {
            self.push_line(line.trim_end_matches('\r'));
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines dropped so far by the capacity limit.
    pub fn evicted(&self) -> usize {
        self.evicted
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    /// The newest `n` lines, oldest first.
    pub fn tail(&self, n: usize) -> impl Iterator<Item = &str> {
        let skip = self.lines.len().saturating_sub(n);
        self.lines.iter().skip(skip).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default)]
pub struct WidgetState {
    pub input: TextInputState,
    pub dropdown: DropdownState,
    pub active_tab: DashboardTab,
    pub hover: HoverSet,
    pub pointer: Option<Pos>,
    pub log: LogState,
    pub quote: Option<QuoteSnapshot>,
    pub options: Option<OptionsSnapshot>,
    pub rsi: Option<f64>,
    pub in_flight: Vec<FetchKind>,
}

impl WidgetState {
    pub fn new(presets: &[RsiPreset], log_capacity: Option<usize>) -> Self {
        Self {
            dropdown: DropdownState {
                open: false,
                selected: 0,
                options: presets.iter().map(DropdownOption::from).collect(),
            },
            log: LogState::new(log_capacity),
            ..Self::default()
        }
    }

    pub fn is_in_flight(&self, kind: FetchKind) -> bool {
        self.in_flight.contains(&kind)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
