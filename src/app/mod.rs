pub mod dashboard;
pub mod theme;

pub use dashboard::{Dashboard, FetchExecutor};
