use super::message::AppMessage;
use crate::kernel::services::adapters::process::{into_process_output, spawn_error_reason};
use crate::kernel::services::ports::{CommandSpec, FetchOutcome, FetchRequest};
use std::io;
use std::process::Stdio;
use std::sync::mpsc::Sender;
use std::time::Duration;

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
}

impl AsyncRuntime {
    pub fn new(tx: Sender<AppMessage>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("tickerdash-fetch")
            .enable_all()
            .build()?;
        Ok(Self { runtime, tx })
    }

    /// Runs `command` with the request's symbol appended and sends
    /// `AppMessage::FetchCompleted` when it finishes, fails to launch or
    /// exceeds `timeout`. The child is killed when the timeout fires.
    pub fn spawn_fetch(
        &self,
        request: FetchRequest,
        command: CommandSpec,
        timeout: Option<Duration>,
    ) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let outcome = run_fetch(&request, &command, timeout).await;
            tracing::debug!(kind = %request.kind, symbol = %request.symbol, ?outcome, "background fetch finished");
            let _ = tx.send(AppMessage::FetchCompleted { request, outcome });
        });
    }
}

async fn run_fetch(
    request: &FetchRequest,
    command: &CommandSpec,
    timeout: Option<Duration>,
) -> FetchOutcome {
    let mut cmd = tokio::process::Command::new(&command.program);
    cmd.args(&command.args)
        .arg(request.symbol.as_str())
        .stdin(Stdio::null())
        .kill_on_drop(true);
    if let Some(dir) = &command.working_dir {
        cmd.current_dir(dir);
    }

    let output = match timeout {
        Some(limit) => match tokio::time::timeout(limit, cmd.output()).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(kind = %request.kind, symbol = %request.symbol, ?limit, "fetch timed out");
                return FetchOutcome::TimedOut(limit);
            }
        },
        None => cmd.output().await,
    };

    match output {
        Ok(output) => FetchOutcome::from_output(into_process_output(request, output)),
        Err(e) => {
            tracing::warn!(kind = %request.kind, symbol = %request.symbol, error = %e, "fetch launch failed");
            FetchOutcome::LaunchFailure(spawn_error_reason(&command.program, &e))
        }
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/runtime.rs"]
mod tests;
