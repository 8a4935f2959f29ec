//! Async runtime adapter: runs fetch effects off the UI thread and sends the
//! outcome back over a channel.

mod message;
mod runtime;

pub use message::AppMessage;
pub use runtime::AsyncRuntime;
