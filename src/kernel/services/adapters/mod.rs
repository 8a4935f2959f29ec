//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod paths;
pub mod process;
pub mod runtime;
pub mod settings;

pub use paths::{ensure_data_dir, ensure_log_dir, get_cache_dir, get_log_dir, get_settings_dir};
pub use process::ProcessRunner;
pub use runtime::{AppMessage, AsyncRuntime};
pub use settings::{
    ensure_settings_file, get_settings_path, load_or_init_settings, load_settings_from,
    SettingsError,
};
