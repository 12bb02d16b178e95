//! Core types: board sides, per-side storage and the marble counter.
//!
//! Everything above this layer (board, rules, transport) is expressed in
//! terms of `Side` and `Hole`.

pub mod side;
pub mod hole;

pub use side::{Side, SideMap, ROWS};
pub use hole::Hole;
