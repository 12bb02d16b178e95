//! # mancala
//!
//! A rules engine for Kalah-variant Mancala, plus the pieces needed to
//! play it over a network.
//!
//! ## Design Principles
//!
//! 1. **Engine without I/O**: [`rules::Game`] takes a move request
//!    (side, row) and returns a [`rules::GameStatus`]. It never reads
//!    input, touches sockets or formats text.
//!
//! 2. **Caller-owned board**: the game borrows a [`board::Board`] for the
//!    whole match, so the caller can render or seed it between rounds.
//!
//! 3. **Marble conservation**: no round ever creates or destroys a marble;
//!    `pits + homes == 12 * marbles_per_pit` holds before and after every
//!    move, end-game sweep included.
//!
//! ## Modules
//!
//! - `core`: sides, per-side storage and the marble counter (`Hole`)
//! - `board`: the 2×6 pit grid, homes, snapshots and text rendering
//! - `rules`: sowing, captures, extra turns and game-over detection
//! - `net`: the 4-byte move record and the two-socket peer link
//! - `config`: match configuration loaded from TOML
//! - `console`: the text prompt and turn loop for one match
//! - `error`: error types for everything that can fail outside the engine

pub mod core;
pub mod board;
pub mod rules;
pub mod net;
pub mod config;
pub mod console;
pub mod error;

// Re-export commonly used types
pub use crate::core::{Hole, Side, SideMap, ROWS};

pub use crate::board::{Board, DEFAULT_MARBLES_PER_PIT, MAX_MARBLES_PER_PIT};

pub use crate::rules::{Game, GameStatus};

pub use crate::net::{MoveChannel, MoveRecord, PeerLink};

pub use crate::config::MatchConfig;

pub use crate::console::Console;

pub use crate::error::{
    ConfigError, ConsoleError, HoleError, NetError, SnapshotError, WireError,
};
