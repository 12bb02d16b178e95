//! Result codes returned by a round.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Status recorded after each call to [`Game::run_round`](super::Game::run_round).
///
/// Positive codes name the next side to move or the end of the game;
/// negative codes are errors. `RoundFailure` doubles as the pre-game
/// sentinel, before any round has been recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Side A moves next.
    SideA,
    /// Side B moves next.
    SideB,
    /// Game finished; see [`Game::get_winner`](super::Game::get_winner).
    GameOver,
    /// Fatal. Also the state of a game that has not played a round yet.
    RoundFailure,
    /// Fatal. A move arrived with a side outside {A, B}.
    InvalidSide,
    /// The chosen pit was empty; the same player must choose again.
    EmptyHoleError,
}

impl GameStatus {
    /// The status naming `side` as next to move.
    #[must_use]
    pub const fn from_side(side: Side) -> Self {
        match side {
            Side::A => GameStatus::SideA,
            Side::B => GameStatus::SideB,
        }
    }

    /// The side expected to move next, if this status names one.
    #[must_use]
    pub const fn to_move(self) -> Option<Side> {
        match self {
            GameStatus::SideA => Some(Side::A),
            GameStatus::SideB => Some(Side::B),
            _ => None,
        }
    }

    /// Whether the match cannot continue.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::GameOver | GameStatus::RoundFailure | GameStatus::InvalidSide
        )
    }

    /// Whether the match ended in error.
    #[must_use]
    pub const fn is_fatal(self) -> bool {
        matches!(self, GameStatus::RoundFailure | GameStatus::InvalidSide)
    }

    /// Numeric status code: positive on success, negative on error.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            GameStatus::SideA => 1,
            GameStatus::SideB => 2,
            GameStatus::GameOver => 3,
            GameStatus::RoundFailure => -1,
            GameStatus::InvalidSide => -2,
            GameStatus::EmptyHoleError => -3,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::SideA => write!(f, "side A to move"),
            GameStatus::SideB => write!(f, "side B to move"),
            GameStatus::GameOver => write!(f, "game over"),
            GameStatus::RoundFailure => write!(f, "round failure"),
            GameStatus::InvalidSide => write!(f, "invalid side"),
            GameStatus::EmptyHoleError => write!(f, "empty hole"),
        }
    }
}
