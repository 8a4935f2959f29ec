//! UI layer (thin wrapper over `ratatui`).
//!
//! Geometry, styles and paint commands are plain data so the kernel and the
//! renderer can be exercised without a terminal. Only `backend::terminal`
//! references `ratatui` types.

pub mod backend;
pub mod core;
