//! 仪表盘：持有 store、布局缓存与取数执行器，统一分发输入并绘制。

use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::core::view::EventResult;
use crate::kernel::services::adapters::{AppMessage, AsyncRuntime, ProcessRunner};
use crate::kernel::services::ports::{
    FetchGateway, FetchMode, FetchRunner, FetchSettings, Settings,
};
use crate::kernel::{DashboardTab, RegionMap, Store, WidgetState};
use crate::ui::core::geom::{Pos, Rect};
use std::io;
use std::sync::mpsc::{self, Receiver};

mod bridge;
mod input;
pub mod layout;
mod render;
mod tick;

pub use layout::DashboardLayout;

const MAX_FETCH_DRAIN_PER_TICK: usize = 64;

/// Where fetch effects run.
pub enum FetchExecutor {
    /// Inside the event loop; the frame waits for the process.
    Blocking(FetchGateway),
    /// On the async runtime; outcomes arrive on `rx` and are folded in by
    /// `tick`.
    Background {
        runtime: AsyncRuntime,
        rx: Receiver<AppMessage>,
        commands: FetchSettings,
    },
}

impl FetchExecutor {
    pub fn from_settings(settings: &FetchSettings) -> io::Result<Self> {
        match settings.mode {
            FetchMode::Blocking => Ok(Self::blocking(Box::new(ProcessRunner::from_settings(
                settings,
            )))),
            FetchMode::Background => {
                let (tx, rx) = mpsc::channel();
                let runtime = AsyncRuntime::new(tx)?;
                Ok(Self::Background {
                    runtime,
                    rx,
                    commands: settings.clone(),
                })
            }
        }
    }

    pub fn blocking(runner: Box<dyn FetchRunner>) -> Self {
        Self::Blocking(FetchGateway::new(runner))
    }
}

pub struct Dashboard {
    store: Store,
    executor: FetchExecutor,
    theme: UiTheme,
    layout: DashboardLayout,
    regions: RegionMap,
    pointer: Option<Pos>,
    dirty: bool,
}

impl Dashboard {
    pub fn new(settings: &Settings, executor: FetchExecutor) -> Self {
        let state = WidgetState::new(&settings.indicator.presets, settings.log.capacity);
        let mut theme = UiTheme::from_settings(&settings.theme);
        theme.adapt_to_terminal_capabilities();
        let mut dashboard = Self {
            store: Store::new(state),
            executor,
            theme,
            layout: DashboardLayout::default(),
            regions: RegionMap::new(),
            pointer: None,
            dirty: true,
        };
        dashboard.set_area(Rect::default());
        dashboard
    }

    pub fn state(&self) -> &WidgetState {
        self.store.state()
    }

    pub fn layout(&self) -> &DashboardLayout {
        &self.layout
    }

    pub fn theme(&self) -> &UiTheme {
        &self.theme
    }

    /// Whether anything changed since the last render.
    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Recomputes layout and hit regions for a new drawing area.
    pub fn set_area(&mut self, area: Rect) {
        if area == self.layout.area && !self.layout.tabs.is_empty() {
            return;
        }
        let labels: Vec<&str> = DashboardTab::ALL.iter().map(|t| t.label()).collect();
        let option_count = self.store.state().dropdown.options.len();
        self.layout = DashboardLayout::compute(area, &labels, option_count);
        self.regions = self.layout.regions();
        self.dirty = true;
    }

    /// One frame of input: applies `events` in order, folds in finished
    /// background fetches and recomputes hover from the final pointer
    /// position. Stops at the first `Quit`.
    pub fn handle_frame(&mut self, events: &[InputEvent]) -> EventResult {
        let mut result = EventResult::Ignored;
        for event in events {
            result = result.merge(self.handle_input(event));
            if result.is_quit() {
                return result;
            }
        }
        if self.tick() {
            result = result.merge(EventResult::Consumed);
        }
        if self.update_hover() {
            result = result.merge(EventResult::Consumed);
        }
        result
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/dashboard.rs"]
mod tests;
