//! The sowing pass: pick up one pit and distribute its marbles.
//!
//! Traversal for the mover runs along its own row toward its home, banks
//! one marble there, crosses to the opponent's row (entering at the
//! opponent's entry row and moving in the opponent's direction), skips
//! the opponent's home and re-enters the mover's row at its entry row.
//!
//! ```text
//!   A: A[r+1..=5] -> home A -> B[5..=0] -> A[0..] -> ...
//!   B: B[r-1..=0] -> home B -> A[0..=5] -> B[5..] -> ...
//! ```

use tracing::{debug, trace};

use crate::board::Board;
use crate::core::{Side, ROWS};

/// Which row the cursor is walking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lane {
    Own,
    Opponent,
}

/// What happened during one sowing pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Sowing {
    /// Marbles picked up from the source pit.
    pub collected: u8,
    /// The last marble landed in the mover's home.
    pub ended_in_home: bool,
    /// Marbles taken from the opponent's mirror pit by a capture.
    pub captured: Option<u8>,
}

/// Map a cursor position to a pit row, if it is on the board.
fn on_board(cursor: isize) -> Option<usize> {
    usize::try_from(cursor).ok().filter(|&row| row < ROWS)
}

/// Empty (`side`, `row`) and sow its marbles.
///
/// The caller guarantees the source pit is non-empty.
pub(crate) fn sow(board: &mut Board, side: Side, row: usize) -> Sowing {
    let opponent = side.opposite();
    let collected = board.get_hole(side, row);
    board.clear_hole(side, row);

    let mut sowing = Sowing {
        collected,
        ..Sowing::default()
    };
    let mut lane = Lane::Own;
    let mut cursor = row as isize + side.direction();

    for remaining in (1..=collected).rev() {
        let last = remaining == 1;

        match lane {
            Lane::Own => match on_board(cursor) {
                None => {
                    board.add_home(side, 1);
                    cursor = opponent.entry_row() as isize;
                    lane = Lane::Opponent;
                    if last {
                        sowing.ended_in_home = true;
                    }
                }
                Some(pit) if last && board.get_hole(side, pit) == 0 => {
                    let stolen = board.get_hole(opponent, pit);
                    board.clear_hole(opponent, pit);
                    board.add_home(side, stolen.saturating_add(1));
                    sowing.captured = Some(stolen);
                    debug!(%side, pit, stolen, "capture");
                }
                Some(pit) => {
                    board.add(side, pit, 1);
                    cursor += side.direction();
                }
            },
            Lane::Opponent => {
                if let Some(pit) = on_board(cursor) {
                    board.add(opponent, pit, 1);
                }
                cursor += opponent.direction();
                if on_board(cursor).is_none() {
                    cursor = side.entry_row() as isize;
                    lane = Lane::Own;
                }
            }
        }
    }

    trace!(%side, row, collected, ended_in_home = sowing.ended_in_home, "sowed");
    sowing
}
