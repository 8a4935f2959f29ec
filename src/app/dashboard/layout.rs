//! Fixed dashboard layout in terminal cells.
//!
//! ```text
//!  tickerdash                                   fetching quote...
//!  ┌ Symbol ────────────┐ ┌───────┐ ┌─────────┐ ┌ Indicator ───┐
//!  │ MSFT               │ │ Quote │ │ Options │ │ ▾ RSI 14     │
//!  └────────────────────┘ └───────┘ └─────────┘ └──────────────┘
//!   Quote  Options  Indicators                   (option rows drop here)
//!  ┌ Quote ─────────────────────────────────────────────────────┐
//!  ...
//!  ┌ Log ───────────────────────────────────────────────────────┐
//! ```

use crate::kernel::{RegionId, RegionMap};
use crate::ui::core::geom::Rect;

pub(super) const HEADER_HEIGHT: u16 = 1;
pub(super) const CONTROLS_HEIGHT: u16 = 3;
pub(super) const TABS_HEIGHT: u16 = 1;
pub(super) const CONTENT_HEIGHT: u16 = 9;
pub(super) const INPUT_WIDTH: u16 = 22;
pub(super) const QUOTE_BUTTON_WIDTH: u16 = 9;
pub(super) const OPTIONS_BUTTON_WIDTH: u16 = 11;
pub(super) const DROPDOWN_WIDTH: u16 = 16;
const GAP: u16 = 1;
const MARGIN: u16 = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardLayout {
    pub area: Rect,
    pub header: Rect,
    pub input: Rect,
    pub quote_button: Rect,
    pub options_button: Rect,
    pub dropdown: Rect,
    /// One row per option directly below the control; painted over the
    /// panels while open.
    pub dropdown_options: Vec<Rect>,
    pub tabs: Vec<Rect>,
    pub content: Rect,
    pub log: Rect,
}

impl DashboardLayout {
    pub fn compute(area: Rect, tab_labels: &[&str], option_count: usize) -> Self {
        let (header, rest) = area.split_top(HEADER_HEIGHT);
        let (controls, rest) = rest.split_top(CONTROLS_HEIGHT);
        let (tab_row, rest) = rest.split_top(TABS_HEIGHT);
        let (content, log) = rest.split_top(CONTENT_HEIGHT);

        let (_, controls) = controls.split_left(MARGIN);
        let (input, controls) = controls.take_left(INPUT_WIDTH, GAP);
        let (quote_button, controls) = controls.take_left(QUOTE_BUTTON_WIDTH, GAP);
        let (options_button, controls) = controls.take_left(OPTIONS_BUTTON_WIDTH, GAP);
        let (dropdown, _) = controls.take_left(DROPDOWN_WIDTH, GAP);

        let dropdown_options = (0..option_count)
            .map(|i| {
                let y = dropdown.bottom().saturating_add(i as u16);
                Rect::new(dropdown.x, y, dropdown.w, 1).intersect(area)
            })
            .collect();

        let (_, mut tab_row) = tab_row.split_left(MARGIN);
        let tabs = tab_labels
            .iter()
            .map(|label| {
                let width = label.chars().count() as u16 + 2;
                let (tab, rest) = tab_row.split_left(width);
                tab_row = rest;
                tab
            })
            .collect();

        Self {
            area,
            header,
            input,
            quote_button,
            options_button,
            dropdown,
            dropdown_options,
            tabs,
            content,
            log,
        }
    }

    /// Registers every interactive rect. Option rows are always present; the
    /// region map ignores them while the dropdown is closed.
    pub fn regions(&self) -> RegionMap {
        let mut map = RegionMap::new();
        for (i, rect) in self.dropdown_options.iter().enumerate() {
            map.insert(RegionId::DropdownOption(i), *rect);
        }
        map.insert(RegionId::Dropdown, self.dropdown);
        map.insert(RegionId::Input, self.input);
        map.insert(RegionId::QuoteButton, self.quote_button);
        map.insert(RegionId::OptionsButton, self.options_button);
        for (i, rect) in self.tabs.iter().enumerate() {
            map.insert(RegionId::Tab(i), *rect);
        }
        map
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/dashboard/layout.rs"]
mod tests;
