use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use crossterm::event;
use tickerdash::app::{Dashboard, FetchExecutor};
use tickerdash::core::event::InputEvent;
use tickerdash::kernel::services::adapters::{
    ensure_data_dir, get_settings_path, load_or_init_settings, SettingsError,
};
use tickerdash::kernel::services::ports::Settings;
use tickerdash::tui::crossterm::into_input_event;
use tickerdash::tui::terminal_guard::{TerminalGuard, TerminationSignal};
use tickerdash::ui::backend::terminal::RatatuiTerminal;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const MAX_EVENTS_PER_FRAME: usize = 256;

#[derive(Debug)]
enum StartupError {
    DataDir { path: PathBuf, source: io::Error },
    Settings(SettingsError),
    Runtime(io::Error),
    Terminal(io::Error),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::DataDir { path, source } => {
                write!(f, "cannot create data directory {}: {}", path.display(), source)
            }
            StartupError::Settings(err) => write!(f, "{err}"),
            StartupError::Runtime(err) => write!(f, "cannot start fetch runtime: {err}"),
            StartupError::Terminal(err) => write!(f, "terminal setup failed: {err}"),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::DataDir { source, .. } => Some(source),
            StartupError::Settings(err) => Some(err),
            StartupError::Runtime(err) => Some(err),
            StartupError::Terminal(err) => Some(err),
        }
    }
}

impl From<SettingsError> for StartupError {
    fn from(err: SettingsError) -> Self {
        StartupError::Settings(err)
    }
}

#[derive(Debug, Default)]
struct CliArgs {
    settings: Option<PathBuf>,
    data_dir: Option<PathBuf>,
}

fn parse_args() -> CliArgs {
    let mut args = CliArgs::default();
    for arg in std::env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--settings=") {
            args.settings = Some(PathBuf::from(value));
        } else if let Some(value) = arg.strip_prefix("--data-dir=") {
            args.data_dir = Some(PathBuf::from(value));
        } else {
            eprintln!("tickerdash: ignoring unknown argument {arg:?}");
        }
    }
    args
}

fn load_settings(args: &CliArgs) -> Result<Settings, StartupError> {
    let mut settings = match args.settings.clone().or_else(get_settings_path) {
        Some(path) => load_or_init_settings(&path)?,
        None => Settings::default(),
    };
    if let Some(dir) = &args.data_dir {
        settings.data_dir = dir.clone();
    }
    Ok(settings)
}

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("tickerdash: {err}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32, StartupError> {
    let args = parse_args();
    let settings = load_settings(&args)?;

    ensure_data_dir(&settings.data_dir).map_err(|source| StartupError::DataDir {
        path: settings.data_dir.clone(),
        source,
    })?;

    let _logging = logging::init(&settings.data_dir);
    tracing::info!(data_dir = %settings.data_dir.display(), mode = ?settings.fetch.mode, "starting");

    let executor = FetchExecutor::from_settings(&settings.fetch).map_err(StartupError::Runtime)?;
    let mut dashboard = Dashboard::new(&settings, executor);

    let guard = TerminalGuard::new().map_err(StartupError::Terminal)?;
    let mut terminal = RatatuiTerminal::new(io::stdout()).map_err(StartupError::Terminal)?;

    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    if let Err(err) =
        tickerdash::tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx)
    {
        tracing::warn!(error = %err, "signal handlers not installed");
    }
    #[cfg(not(unix))]
    drop(signal_tx);

    let code = match event_loop(&mut dashboard, &mut terminal, &signal_rx) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "event loop failed");
            1
        }
    };

    drop(terminal);
    drop(guard);
    tracing::info!(code, "exiting");
    Ok(code)
}

fn event_loop(
    dashboard: &mut Dashboard,
    terminal: &mut RatatuiTerminal,
    signals: &Receiver<TerminationSignal>,
) -> io::Result<i32> {
    let mut events: Vec<InputEvent> = Vec::new();
    loop {
        if let Ok(signal) = signals.try_recv() {
            return Ok(signal.exit_code());
        }

        if dashboard.needs_redraw() {
            terminal.draw(|backend, area| dashboard.render(backend, area))?;
        }

        events.clear();
        if event::poll(POLL_INTERVAL)? {
            loop {
                if let Some(ev) = into_input_event(event::read()?) {
                    events.push(ev);
                }
                if events.len() >= MAX_EVENTS_PER_FRAME || !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if dashboard.handle_frame(&events).is_quit() {
            return Ok(0);
        }
    }
}
