use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::fetch::FetchKind;
use crate::kernel::indicator::DEFAULT_RSI_PERIOD;

pub const DEFAULT_LOG_CAPACITY: usize = 2000;
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub fetch: FetchSettings,
    #[serde(default)]
    pub indicator: IndicatorSettings,
    #[serde(default)]
    pub log: LogSettings,
    #[serde(default)]
    pub theme: ThemeSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            fetch: FetchSettings::default(),
            indicator: IndicatorSettings::default(),
            log: LogSettings::default(),
            theme: ThemeSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// Run the fetch inside the event loop; the UI waits for the process.
    Blocking,
    /// Run the fetch on the async runtime and deliver the outcome by channel.
    #[default]
    Background,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchSettings {
    #[serde(default)]
    pub mode: FetchMode,
    /// Background fetches only; `null` waits forever.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: Option<u64>,
    #[serde(default = "default_quote_command")]
    pub quote: CommandSpec,
    #[serde(default = "default_options_command")]
    pub options: CommandSpec,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            mode: FetchMode::default(),
            timeout_ms: default_timeout_ms(),
            quote: default_quote_command(),
            options: default_options_command(),
        }
    }
}

impl FetchSettings {
    pub fn command(&self, kind: FetchKind) -> &CommandSpec {
        match kind {
            FetchKind::Quote => &self.quote,
            FetchKind::Options => &self.options,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// Program plus fixed leading arguments; the symbol is appended as the last
/// argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            working_dir: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSettings {
    #[serde(default = "default_presets")]
    pub presets: Vec<RsiPreset>,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            presets: default_presets(),
        }
    }
}

/// One indicator dropdown entry. Periods other than 14 need a quote program
/// that prints `closes`; the bundled `py/yfclient/fetch.py` does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsiPreset {
    pub label: String,
    pub period: usize,
    #[serde(default = "default_preset_color")]
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSettings {
    /// Maximum stored log lines; `null` keeps everything.
    #[serde(default = "default_log_capacity")]
    pub capacity: Option<usize>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            capacity: default_log_capacity(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_hover_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_fg: Option<String>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_timeout_ms() -> Option<u64> {
    Some(DEFAULT_FETCH_TIMEOUT_MS)
}

fn default_quote_command() -> CommandSpec {
    CommandSpec::new("python3", &["py/yfclient/fetch.py"])
}

fn default_options_command() -> CommandSpec {
    CommandSpec::new("python3", &["py/options/cli_fetch.py"])
}

fn default_presets() -> Vec<RsiPreset> {
    vec![
        RsiPreset {
            label: format!("RSI {DEFAULT_RSI_PERIOD}"),
            period: DEFAULT_RSI_PERIOD,
            color: "cyan".to_string(),
        },
        RsiPreset {
            label: "RSI 7".to_string(),
            period: 7,
            color: "yellow".to_string(),
        },
        RsiPreset {
            label: "RSI 21".to_string(),
            period: 21,
            color: "magenta".to_string(),
        },
    ]
}

fn default_preset_color() -> String {
    "white".to_string()
}

fn default_log_capacity() -> Option<usize> {
    Some(DEFAULT_LOG_CAPACITY)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
