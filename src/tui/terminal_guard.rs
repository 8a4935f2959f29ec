//! Terminal mode RAII: raw mode, alternate screen and mouse capture are
//! enabled on construction and undone exactly once, whichever exit path runs
//! first (drop, explicit restore, or the signal thread).

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermTerminalOps;

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            crossterm::terminal::EnterAlternateScreen,
            crossterm::event::EnableMouseCapture
        )
    }

    fn restore(&self) -> io::Result<()> {
        let steps: [fn() -> io::Result<()>; 4] = [
            crossterm::terminal::disable_raw_mode,
            || crossterm::execute!(io::stdout(), crossterm::event::DisableMouseCapture),
            || crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen),
            || crossterm::execute!(io::stdout(), crossterm::cursor::Show),
        ];
        // Every step runs; the first failure is reported.
        steps
            .iter()
            .map(|step| step())
            .fold(Ok(()), |acc, res| acc.and(res))
    }
}

struct RestoreState {
    done: AtomicBool,
    ops: Arc<dyn TerminalOps>,
}

/// Cloneable handle that undoes terminal setup at most once.
#[derive(Clone)]
pub struct TerminalRestorer(Arc<RestoreState>);

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.0.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.0.ops.restore()
    }

    pub fn is_restored(&self) -> bool {
        self.0.done.load(Ordering::SeqCst)
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps))
    }

    /// A failed setup is rolled back before the error is returned.
    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        ops.setup().inspect_err(|_| {
            let _ = ops.restore();
        })?;
        let state = RestoreState {
            done: AtomicBool::new(false),
            ops,
        };
        Ok(Self {
            restorer: TerminalRestorer(Arc::new(state)),
        })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restorer.restore() {
            tracing::error!(error = %err, "terminal restore failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    #[cfg(unix)]
    pub fn from_raw(signo: i32) -> Option<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};
        match signo {
            SIGINT => Some(TerminationSignal::SigInt),
            SIGTERM => Some(TerminationSignal::SigTerm),
            _ => None,
        }
    }

    /// Conventional `128 + signo` shell exit status.
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

/// How long the event loop gets to exit on its own after a signal.
pub const SIGNAL_GRACE: std::time::Duration = std::time::Duration::from_secs(2);

/// Forwards SIGINT/SIGTERM to `tx`. If the event loop has not exited within
/// `SIGNAL_GRACE` the terminal is restored and the process exits directly.
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    tx: std::sync::mpsc::Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::Builder::new()
        .name("tickerdash-signals".to_string())
        .spawn(move || {
            for signo in signals.forever() {
                let Some(signal) = TerminationSignal::from_raw(signo) else {
                    continue;
                };
                tracing::info!(?signal, "termination signal received");
                let _ = tx.send(signal);

                std::thread::sleep(SIGNAL_GRACE);
                let _ = restorer.restore();
                std::process::exit(signal.exit_code());
            }
        })
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
