//! The game state machine: turn ownership, rounds, end-game sweep.

use tracing::debug;

use super::sowing::sow;
use super::status::GameStatus;
use crate::board::Board;
use crate::core::{Side, ROWS};

/// One game of Kalah played on a caller-owned board.
///
/// The game borrows its board for the whole match; the caller keeps
/// ownership and can inspect it between rounds through [`Game::board`].
///
/// ## Example
///
/// ```
/// use mancala::board::Board;
/// use mancala::core::Side;
/// use mancala::rules::{Game, GameStatus};
///
/// let mut board = Board::default();
/// let mut game = Game::new(&mut board);
///
/// // Four marbles from A's row 2 end in A's home: A moves again.
/// assert_eq!(game.run_round(Side::A, 2), GameStatus::SideA);
/// assert_eq!(game.board().get_home(Side::A), 1);
/// assert_eq!(game.get_rounds(), 1);
/// ```
#[derive(Debug)]
pub struct Game<'b> {
    board: &'b mut Board,
    rounds: u16,
    winner: Side,
    status: GameStatus,
}

impl<'b> Game<'b> {
    /// Bind a new game to `board`.
    pub fn new(board: &'b mut Board) -> Self {
        Self {
            board,
            rounds: 0,
            winner: Side::A,
            status: GameStatus::RoundFailure,
        }
    }

    /// Play the pit at (`side`, `row`) and return the resulting status.
    ///
    /// - A move by the side that is not expected to move is ignored and
    ///   the recorded status is returned unchanged. Before the first
    ///   round no side is expected, so either may open.
    /// - An empty (or off-board) source pit returns
    ///   [`GameStatus::EmptyHoleError`] without touching the board or
    ///   the recorded turn.
    /// - Otherwise the pit is sown, the next side is recorded (the same
    ///   side when the last marble landed in its home), the end-game
    ///   sweep runs if either row is empty, and the round is counted.
    pub fn run_round(&mut self, side: Side, row: usize) -> GameStatus {
        if let Some(expected) = self.status.to_move() {
            if expected != side {
                return self.status;
            }
        }

        if self.board.get_hole(side, row) == 0 {
            return GameStatus::EmptyHoleError;
        }

        let sowing = sow(self.board, side, row);

        self.status = if sowing.ended_in_home {
            debug!(%side, "extra turn");
            GameStatus::from_side(side)
        } else {
            GameStatus::from_side(side.opposite())
        };

        self.sweep_if_finished();

        self.rounds = self.rounds.saturating_add(1);
        self.status
    }

    /// Detect an empty row and, if found, sweep the other row home.
    fn sweep_if_finished(&mut self) {
        // When both rows are empty the later side in scan order wins out.
        let Some(empty_side) = Side::ALL
            .into_iter()
            .filter(|&s| self.board.is_side_empty(s))
            .last()
        else {
            return;
        };
        let remaining_side = empty_side.opposite();

        let mut surplus = 0u8;
        for row in 0..ROWS {
            surplus = surplus.saturating_add(self.board.get_hole(remaining_side, row));
            self.board.clear_hole(remaining_side, row);
        }
        self.board.add_home(remaining_side, surplus);

        self.winner = if self.board.get_home(Side::A) > self.board.get_home(Side::B) {
            Side::A
        } else {
            Side::B
        };
        self.status = GameStatus::GameOver;

        debug!(
            %empty_side,
            surplus,
            home_a = self.board.get_home(Side::A),
            home_b = self.board.get_home(Side::B),
            winner = %self.winner,
            "game over"
        );
    }

    /// Rounds successfully played since creation or the last reset.
    #[must_use]
    pub fn get_rounds(&self) -> u16 {
        self.rounds
    }

    /// Winner of the finished game. Side A until a game has ended; ties
    /// go to side B.
    #[must_use]
    pub fn get_winner(&self) -> Side {
        self.winner
    }

    /// Last recorded status (turn owner, game over, or the pre-game
    /// sentinel).
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &*self.board
    }

    /// Mutable board access, for seeding positions.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut *self.board
    }

    /// Reset board and game for a new match.
    pub fn reset(&mut self) {
        self.board.reset();
        self.rounds = 0;
        self.winner = Side::A;
        self.status = GameStatus::RoundFailure;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(board: &Board, side: Side) -> Vec<u8> {
        (0..ROWS).map(|r| board.get_hole(side, r)).collect()
    }

    #[test]
    fn test_fresh_game() {
        let mut board = Board::default();
        let game = Game::new(&mut board);

        assert_eq!(game.get_rounds(), 0);
        assert_eq!(game.get_winner(), Side::A);
        assert_eq!(game.status(), GameStatus::RoundFailure);
    }

    #[test]
    fn test_either_side_may_open() {
        for side in Side::ALL {
            let mut board = Board::default();
            let mut game = Game::new(&mut board);

            assert_eq!(game.run_round(side, 0), GameStatus::from_side(side.opposite()));
            assert_eq!(game.get_rounds(), 1);
        }
    }

    #[test]
    fn test_turn_guard_ignores_wrong_side() {
        let mut board = Board::default();
        let mut game = Game::new(&mut board);
        assert_eq!(game.run_round(Side::A, 0), GameStatus::SideB);

        let before = game.board().clone();
        assert_eq!(game.run_round(Side::A, 1), GameStatus::SideB);
        assert_eq!(game.board(), &before);
        assert_eq!(game.get_rounds(), 1);
    }

    #[test]
    fn test_empty_hole_keeps_turn() {
        let mut board = Board::default();
        let mut game = Game::new(&mut board);
        assert_eq!(game.run_round(Side::A, 0), GameStatus::SideB);

        game.board_mut().clear_hole(Side::B, 2);
        let before = game.board().clone();

        assert_eq!(game.run_round(Side::B, 2), GameStatus::EmptyHoleError);
        assert_eq!(game.board(), &before);
        assert_eq!(game.get_rounds(), 1);
        assert_eq!(game.status(), GameStatus::SideB);

        // A still cannot jump the queue.
        assert_eq!(game.run_round(Side::A, 1), GameStatus::SideB);
    }

    #[test]
    fn test_off_board_row_is_an_empty_hole() {
        let mut board = Board::default();
        let mut game = Game::new(&mut board);

        assert_eq!(game.run_round(Side::A, 6), GameStatus::EmptyHoleError);
        assert_eq!(game.get_rounds(), 0);
    }

    #[test]
    fn test_turns_alternate() {
        let mut board = Board::default();
        let mut game = Game::new(&mut board);

        assert_eq!(game.run_round(Side::A, 0), GameStatus::SideB);
        assert_eq!(game.run_round(Side::B, 0), GameStatus::SideA);
        assert_eq!(game.get_rounds(), 2);
    }

    #[test]
    fn test_extra_turn_for_side_b() {
        let mut board = Board::default();
        let mut game = Game::new(&mut board);

        // B3 holds 4: B2, B1, B0, home B.
        assert_eq!(game.run_round(Side::B, 3), GameStatus::SideB);
        assert_eq!(game.board().get_home(Side::B), 1);
        assert_eq!(row(game.board(), Side::B), vec![5, 5, 5, 0, 4, 4]);
    }

    #[test]
    fn test_sweep_moves_remaining_row_home() {
        let mut board = Board::new(0);
        board.set_hole(Side::A, 5, 1);
        board.set_hole(Side::B, 0, 3);
        board.set_hole(Side::B, 4, 2);
        let mut game = Game::new(&mut board);

        // A's last marble reaches home, leaving A's row empty.
        assert_eq!(game.run_round(Side::A, 5), GameStatus::GameOver);
        assert_eq!(game.board().get_home(Side::A), 1);
        assert_eq!(game.board().get_home(Side::B), 5);
        assert!(game.board().is_side_empty(Side::B));
        assert_eq!(game.get_winner(), Side::B);
        assert_eq!(game.get_rounds(), 1);
    }

    #[test]
    fn test_tie_goes_to_side_b() {
        let mut board = Board::new(0);
        board.set_hole(Side::A, 5, 1);
        board.set_hole(Side::B, 3, 1);
        let mut game = Game::new(&mut board);

        assert_eq!(game.run_round(Side::A, 5), GameStatus::GameOver);
        assert_eq!(game.board().get_home(Side::A), 1);
        assert_eq!(game.board().get_home(Side::B), 1);
        assert_eq!(game.get_winner(), Side::B);
    }

    #[test]
    fn test_side_a_wins_with_more_marbles() {
        let mut board = Board::new(0);
        board.set_hole(Side::A, 4, 2);
        board.add_home(Side::A, 5);
        board.set_hole(Side::B, 0, 1);
        let mut game = Game::new(&mut board);

        // A5, home A: row A still holds a marble, so play continues.
        assert_eq!(game.run_round(Side::A, 4), GameStatus::SideA);
        assert_eq!(game.run_round(Side::A, 5), GameStatus::GameOver);
        assert_eq!(game.board().get_home(Side::A), 7);
        assert_eq!(game.board().get_home(Side::B), 1);
        assert_eq!(game.get_winner(), Side::A);
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut board = Board::default();
        let mut game = Game::new(&mut board);
        game.run_round(Side::A, 2);
        game.run_round(Side::A, 0);

        game.reset();

        assert_eq!(game.get_rounds(), 0);
        assert_eq!(game.get_winner(), Side::A);
        assert_eq!(game.status(), GameStatus::RoundFailure);
        assert_eq!(game.board(), &Board::default());

        // Turn guard is cleared too.
        assert_eq!(game.run_round(Side::B, 0), GameStatus::SideA);
    }
}
