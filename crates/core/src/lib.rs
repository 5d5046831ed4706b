//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 13x32 game grid with collision detection and line clearing
//! - [`shape`]: The four shape kinds with per-kind rotation tables
//! - [`session`]: Session orchestration - gravity, locking, spawning, scoring
//! - [`rng`]: Seedable uniform shape selection
//!
//! # Game Rules
//!
//! - **Per-kind rotation**: Each shape kind carries its own hand-authored
//!   rotation offset table and its own rotation validity predicate. There is
//!   no shared rotation formula and no wall kicks.
//! - **Deferred settlement**: A blocked shape stays on screen for one more
//!   gravity step before it locks, so the resting frame is observable.
//! - **Single-pass line clear**: Full rows are swept in one top-to-bottom
//!   scan that never restarts after a shift.
//! - **Scoring**: `score = lines * 10`, `level = min(score / 50, 12)`.
//!
//! # Example
//!
//! ```
//! use gridfall_core::GameSession;
//! use gridfall_types::Command;
//!
//! let mut session = GameSession::new(12345);
//!
//! // Apply player commands.
//! session.apply(Command::MoveRight);
//! session.apply(Command::Rotate);
//! session.apply(Command::HardDrop);
//!
//! // Advance one gravity step.
//! session.tick();
//! assert!(session.advance_or_spawn());
//! ```

pub mod board;
pub mod rng;
pub mod session;
pub mod shape;

pub use gridfall_types as types;

pub use board::Board;
pub use rng::{ShapePicker, SimpleRng};
pub use session::GameSession;
pub use shape::Shape;
