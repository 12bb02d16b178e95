//! Kalah rules: sowing, captures, extra turns and the end-game sweep.
//!
//! [`Game`] is the only mutating entry point. It drives a borrowed
//! [`Board`](crate::board::Board) and reports every outcome through a
//! [`GameStatus`]; nothing in this module returns `Result`.

mod engine;
mod sowing;
mod status;

pub use engine::Game;
pub use status::GameStatus;
