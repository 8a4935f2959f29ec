//! External fetch contract: symbol sanitization, request/outcome types and the
//! gateway that classifies a finished process.

use std::fmt;
use std::io;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchKind {
    Quote,
    Options,
}

impl FetchKind {
    pub const ALL: [FetchKind; 2] = [FetchKind::Quote, FetchKind::Options];

    pub fn label(self) -> &'static str {
        match self {
            FetchKind::Quote => "quote",
            FetchKind::Options => "options",
        }
    }
}

impl fmt::Display for FetchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keeps ASCII alphanumerics plus `.`, `-` and `_`; every other character is
/// dropped.
pub fn sanitize_symbol(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect()
}

/// A non-empty sanitized ticker symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// `None` when nothing survives sanitization.
    pub fn parse(raw: &str) -> Option<Self> {
        let clean = sanitize_symbol(raw);
        if clean.is_empty() {
            None
        } else {
            Some(Self(clean))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub symbol: Symbol,
    pub kind: FetchKind,
}

impl FetchRequest {
    pub fn new(raw_symbol: &str, kind: FetchKind) -> Option<Self> {
        Symbol::parse(raw_symbol).map(|symbol| Self { symbol, kind })
    }
}

/// What a finished external process left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub success: bool,
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Captured stdout. `partial` is set when the process exited non-zero but
    /// still printed something; the output is kept rather than discarded.
    Success { output: String, partial: bool },
    EmptyInput,
    LaunchFailure(String),
    NonZeroExit(Option<i32>),
    TimedOut(Duration),
}

impl FetchOutcome {
    pub fn from_output(output: ProcessOutput) -> Self {
        if output.success {
            return FetchOutcome::Success {
                output: output.stdout,
                partial: false,
            };
        }
        if output.stdout.is_empty() {
            return FetchOutcome::NonZeroExit(output.code);
        }
        FetchOutcome::Success {
            output: output.stdout,
            partial: true,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success { .. })
    }

    pub fn output(&self) -> Option<&str> {
        match self {
            FetchOutcome::Success { output, .. } => Some(output),
            _ => None,
        }
    }

    /// One-line description of a failed fetch for the log.
    pub fn describe_failure(&self, kind: FetchKind) -> Option<String> {
        match self {
            FetchOutcome::Success { .. } => None,
            FetchOutcome::EmptyInput => Some("No symbol provided".to_string()),
            FetchOutcome::LaunchFailure(reason) => {
                Some(format!("Failed to start {kind} fetch: {reason}"))
            }
            FetchOutcome::NonZeroExit(Some(code)) => {
                Some(format!("{kind} fetch exited with code {code}"))
            }
            FetchOutcome::NonZeroExit(None) => {
                Some(format!("{kind} fetch was terminated by a signal"))
            }
            FetchOutcome::TimedOut(after) => Some(format!(
                "{kind} fetch timed out after {:.1}s",
                after.as_secs_f64()
            )),
        }
    }
}

/// Launches the external program for a request and waits for it to exit.
pub trait FetchRunner {
    fn run(&self, request: &FetchRequest) -> io::Result<ProcessOutput>;
}

pub struct FetchGateway {
    runner: Box<dyn FetchRunner>,
}

impl FetchGateway {
    pub fn new(runner: Box<dyn FetchRunner>) -> Self {
        Self { runner }
    }

    /// Sanitizes `raw_symbol` and runs the fetch. An empty sanitized symbol
    /// returns `EmptyInput` without touching the runner.
    pub fn fetch(&self, raw_symbol: &str, kind: FetchKind) -> FetchOutcome {
        match FetchRequest::new(raw_symbol, kind) {
            Some(request) => self.fetch_request(&request),
            None => FetchOutcome::EmptyInput,
        }
    }

    pub fn fetch_request(&self, request: &FetchRequest) -> FetchOutcome {
        match self.runner.run(request) {
            Ok(output) => FetchOutcome::from_output(output),
            Err(e) => {
                tracing::warn!(
                    kind = %request.kind,
                    symbol = %request.symbol,
                    error = %e,
                    "fetch launch failed"
                );
                FetchOutcome::LaunchFailure(e.to_string())
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/fetch.rs"]
mod tests;
