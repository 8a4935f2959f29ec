//! Blocking fetch runner on top of `std::process::Command`.

use crate::kernel::services::ports::{
    CommandSpec, FetchKind, FetchRequest, FetchRunner, FetchSettings, ProcessOutput,
};
use std::io;
use std::process::{Command, Output, Stdio};

#[derive(Debug, Clone)]
pub struct ProcessRunner {
    quote: CommandSpec,
    options: CommandSpec,
}

impl ProcessRunner {
    pub fn new(quote: CommandSpec, options: CommandSpec) -> Self {
        Self { quote, options }
    }

    pub fn from_settings(settings: &FetchSettings) -> Self {
        Self::new(settings.quote.clone(), settings.options.clone())
    }

    pub fn command(&self, kind: FetchKind) -> &CommandSpec {
        match kind {
            FetchKind::Quote => &self.quote,
            FetchKind::Options => &self.options,
        }
    }
}

impl FetchRunner for ProcessRunner {
    fn run(&self, request: &FetchRequest) -> io::Result<ProcessOutput> {
        let spec = self.command(request.kind);
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args)
            .arg(request.symbol.as_str())
            .stdin(Stdio::null());
        if let Some(dir) = &spec.working_dir {
            cmd.current_dir(dir);
        }

        tracing::debug!(program = %spec.program, kind = %request.kind, symbol = %request.symbol, "running fetch");
        let output = cmd.output().map_err(|e| {
            io::Error::new(e.kind(), spawn_error_reason(&spec.program, &e))
        })?;
        Ok(into_process_output(request, output))
    }
}

/// Converts a finished process, forwarding stderr to the log.
pub(crate) fn into_process_output(request: &FetchRequest, output: Output) -> ProcessOutput {
    let stderr = String::from_utf8_lossy(&output.stderr);
    for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
        tracing::warn!(kind = %request.kind, symbol = %request.symbol, line = %line, "fetch stderr");
    }
    ProcessOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        success: output.status.success(),
        code: output.status.code(),
    }
}

pub(crate) fn spawn_error_reason(program: &str, err: &io::Error) -> String {
    format!("{program}: {err}")
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/process.rs"]
mod tests;
