//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the dashboard core never depends on terminal
//! crates.

pub mod crossterm;
pub mod terminal_guard;
