//! Board storage: two rows of six pits and one home per side.
//!
//! The board is a pure data-access layer. It knows nothing about turns,
//! sowing or captures; those live in [`crate::rules`]. Accessors taking a
//! row outside `0..6` are silent no-ops, and getters return 0 for them.

mod grid;
mod render;

pub use grid::{Board, DEFAULT_MARBLES_PER_PIT, MAX_MARBLES_PER_PIT};
