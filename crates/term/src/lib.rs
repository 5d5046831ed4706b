//! Terminal presentation module.
//!
//! - [`fb`]: framebuffer and style types (pure, no I/O)
//! - [`game_view`]: maps a [`gridfall_core::GameSession`] into a framebuffer
//! - [`renderer`]: flushes framebuffers to a real terminal

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use gridfall_core as core;
pub use gridfall_types as types;

pub use fb::FrameBuffer;
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
