//! Fetch and settings plumbing around the kernel.
//!
//! `ports` holds the data the store reasons about (settings, fetch requests
//! and outcomes); `adapters` spawns processes, reads files and owns the tokio
//! runtime.

pub mod adapters;
pub mod ports;
