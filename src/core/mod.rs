//! Frontend-independent input vocabulary.
//!
//! - event: input events consumed by the dispatcher
//! - view: result of handling an event
//! - text_window: fitting text into terminal cells

pub mod event;
pub mod text_window;
pub mod view;

pub use event::{InputEvent, KeyCode};
pub use view::EventResult;
