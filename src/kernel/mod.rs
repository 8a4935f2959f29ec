//! Headless dashboard core (state/action/effect).

pub mod action;
pub mod dispatch;
pub mod effect;
pub mod indicator;
pub mod quote;
pub mod regions;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use dispatch::plan_event;
pub use effect::Effect;
pub use indicator::{relative_strength_index, PriceSeries, RsiZone, DEFAULT_RSI_PERIOD};
pub use quote::{OptionsSnapshot, QuoteSnapshot};
pub use regions::{HoverSet, RegionId, RegionMap};
pub use state::{
    DashboardTab, DropdownOption, DropdownState, LogState, TextInputState, WidgetState,
};
pub use store::{DispatchResult, Store};
