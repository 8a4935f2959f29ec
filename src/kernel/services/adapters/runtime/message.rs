use crate::kernel::services::ports::{FetchOutcome, FetchRequest};

/// Results produced off the UI thread, drained once per frame.
#[derive(Debug, Clone)]
pub enum AppMessage {
    FetchCompleted {
        request: FetchRequest,
        outcome: FetchOutcome,
    },
}
