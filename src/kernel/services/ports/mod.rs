//! Service ports: contracts the kernel relies on, free of OS specifics.

pub mod fetch;
pub mod settings;

pub use fetch::{
    sanitize_symbol, FetchGateway, FetchKind, FetchOutcome, FetchRequest, FetchRunner,
    ProcessOutput, Symbol,
};
pub use settings::{
    CommandSpec, FetchMode, FetchSettings, IndicatorSettings, LogSettings, RsiPreset, Settings,
    ThemeSettings,
};
