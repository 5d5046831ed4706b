//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`gridfall_types::Command`] values.
//! Intentionally independent of any UI framework; the driver owns the event
//! loop and simply feeds key events through [`handle_key_event`].

pub mod map;

pub use gridfall_types as types;

pub use map::{handle_key_event, should_quit};
