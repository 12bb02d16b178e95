//! The 2×6 pit grid plus the two homes.

use serde::{Deserialize, Serialize};

use crate::core::{Hole, Side, SideMap, ROWS};
use crate::error::SnapshotError;

/// Marbles per pit on a standard board.
pub const DEFAULT_MARBLES_PER_PIT: u8 = 4;

/// Largest per-pit count whose total (12 × N) still fits one home.
pub const MAX_MARBLES_PER_PIT: u8 = 21;

/// A Mancala board.
///
/// ```text
///                  _______
///                 |       |
///                 | ( B ) | <-- Home B
///                 |       |
///       Row 0 --> | O   O |
///       Row 1 --> | O   O |
///       Row 2 --> | O   O |
///       Row 3 --> | O   O |
///       Row 4 --> | O   O |
///       Row 5 --> | O   O |
///                 |       |
///      Home A --> | ( A ) |
///                 |_______|
/// ```
///
/// The left column belongs to side A, the right column to side B.
/// The board is a plain data-access layer: it enforces no game rules and
/// silently ignores any row outside `0..6`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    marbles_per_pit: u8,
    pits: SideMap<[Hole; ROWS]>,
    homes: SideMap<Hole>,
}

impl Board {
    /// Create a board with `marbles_per_pit` marbles in every pit.
    ///
    /// # Panics
    ///
    /// Panics if `marbles_per_pit` exceeds [`MAX_MARBLES_PER_PIT`].
    #[must_use]
    pub fn new(marbles_per_pit: u8) -> Self {
        assert!(
            marbles_per_pit <= MAX_MARBLES_PER_PIT,
            "At most {MAX_MARBLES_PER_PIT} marbles per pit supported"
        );

        Self {
            marbles_per_pit,
            pits: SideMap::with_value([Hole::new(marbles_per_pit); ROWS]),
            homes: SideMap::with_value(Hole::new(0)),
        }
    }

    /// Restore every pit to its starting count and empty both homes.
    pub fn reset(&mut self) {
        for (_, row) in self.pits.iter_mut() {
            row.iter_mut().for_each(Hole::reset);
        }
        for (_, home) in self.homes.iter_mut() {
            home.reset();
        }
    }

    /// Marbles in the pit at (`side`, `row`); 0 for rows outside the board.
    #[must_use]
    pub fn get_hole(&self, side: Side, row: usize) -> u8 {
        self.pits[side].get(row).map_or(0, Hole::get)
    }

    /// Overwrite the count of a pit. No-op for rows outside the board.
    pub fn set_hole(&mut self, side: Side, row: usize, n_marbles: u8) {
        if let Some(hole) = self.pits[side].get_mut(row) {
            hole.set(n_marbles);
        }
    }

    /// Empty a pit. No-op for rows outside the board.
    pub fn clear_hole(&mut self, side: Side, row: usize) {
        self.set_hole(side, row, 0);
    }

    /// Drop marbles into a pit. No-op for rows outside the board.
    pub fn add(&mut self, side: Side, row: usize, n_marbles: u8) {
        if let Some(hole) = self.pits[side].get_mut(row) {
            hole.add(n_marbles);
        }
    }

    /// Bank marbles in a side's home.
    pub fn add_home(&mut self, side: Side, n_marbles: u8) {
        self.homes[side].add(n_marbles);
    }

    #[must_use]
    pub fn get_home(&self, side: Side) -> u8 {
        self.homes[side].get()
    }

    #[must_use]
    pub fn marbles_per_pit(&self) -> u8 {
        self.marbles_per_pit
    }

    /// Sum of the six pits on one side.
    #[must_use]
    pub fn row_total(&self, side: Side) -> u32 {
        self.pits[side].iter().map(|h| u32::from(h.get())).sum()
    }

    /// True when all six pits of `side` are empty.
    #[must_use]
    pub fn is_side_empty(&self, side: Side) -> bool {
        self.pits[side].iter().all(Hole::is_empty)
    }

    /// Every marble on the board, pits and homes included.
    #[must_use]
    pub fn total_marbles(&self) -> u32 {
        Side::ALL
            .into_iter()
            .map(|side| self.row_total(side) + u32::from(self.get_home(side)))
            .sum()
    }

    /// Encode the board as a compact `bincode` snapshot.
    pub fn to_snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Restore a board from [`Board::to_snapshot`] output.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let board: Board = bincode::deserialize(bytes).map_err(SnapshotError::Decode)?;
        if board.marbles_per_pit > MAX_MARBLES_PER_PIT {
            return Err(SnapshotError::MarblesPerPit(board.marbles_per_pit));
        }

        let pits_consistent = board
            .pits
            .iter()
            .all(|(_, row)| row.iter().all(|hole| hole.initial() == board.marbles_per_pit));
        let homes_consistent = board.homes.iter().all(|(_, home)| home.initial() == 0);
        if !(pits_consistent && homes_consistent) {
            return Err(SnapshotError::InitialCounts(board.marbles_per_pit));
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_MARBLES_PER_PIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::default();

        for side in Side::ALL {
            for row in 0..ROWS {
                assert_eq!(board.get_hole(side, row), 4);
            }
            assert_eq!(board.get_home(side), 0);
            assert_eq!(board.row_total(side), 24);
        }
        assert_eq!(board.total_marbles(), 48);
    }

    #[test]
    fn test_custom_marbles_per_pit() {
        let board = Board::new(6);
        assert_eq!(board.marbles_per_pit(), 6);
        assert_eq!(board.get_hole(Side::B, 3), 6);
        assert_eq!(board.total_marbles(), 72);
    }

    #[test]
    #[should_panic(expected = "marbles per pit supported")]
    fn test_too_many_marbles_per_pit() {
        let _ = Board::new(MAX_MARBLES_PER_PIT + 1);
    }

    #[test]
    fn test_pit_mutators() {
        let mut board = Board::default();

        board.set_hole(Side::A, 2, 9);
        board.add(Side::A, 2, 1);
        board.clear_hole(Side::B, 5);

        assert_eq!(board.get_hole(Side::A, 2), 10);
        assert_eq!(board.get_hole(Side::B, 5), 0);
        assert_eq!(board.get_hole(Side::B, 2), 4);
    }

    #[test]
    fn test_out_of_range_rows_are_ignored() {
        let mut board = Board::default();
        let before = board.clone();

        board.set_hole(Side::A, 6, 1);
        board.add(Side::B, 99, 3);
        board.clear_hole(Side::A, usize::MAX);

        assert_eq!(board, before);
        assert_eq!(board.get_hole(Side::A, 6), 0);
    }

    #[test]
    fn test_homes_are_independent() {
        let mut board = Board::default();
        board.add_home(Side::A, 3);
        board.add_home(Side::B, 1);
        board.add_home(Side::B, 1);

        assert_eq!(board.get_home(Side::A), 3);
        assert_eq!(board.get_home(Side::B), 2);
    }

    #[test]
    fn test_side_empty() {
        let mut board = Board::default();
        assert!(!board.is_side_empty(Side::A));

        for row in 0..ROWS {
            board.clear_hole(Side::A, row);
        }
        assert!(board.is_side_empty(Side::A));
        assert!(!board.is_side_empty(Side::B));
    }

    #[test]
    fn test_reset() {
        let mut board = Board::new(5);
        board.clear_hole(Side::A, 0);
        board.add(Side::B, 4, 7);
        board.add_home(Side::A, 2);

        board.reset();

        assert_eq!(board, Board::new(5));
    }

    #[test]
    fn test_snapshot_restore() {
        let mut board = Board::default();
        board.clear_hole(Side::A, 1);
        board.add_home(Side::B, 4);

        let bytes = board.to_snapshot().unwrap();
        let restored = Board::from_snapshot(&bytes).unwrap();

        assert_eq!(restored, board);
    }

    #[test]
    fn test_snapshot_rejects_garbage() {
        assert!(matches!(
            Board::from_snapshot(&[1, 2]),
            Err(SnapshotError::Decode(_))
        ));
    }

    #[test]
    fn test_snapshot_rejects_inconsistent_reset_values() {
        // Pit initial counts that disagree with marbles_per_pit.
        let mut pits = Board::new(3);
        pits.pits[Side::B][2] = Hole::new(9);
        let bytes = pits.to_snapshot().unwrap();
        assert!(matches!(
            Board::from_snapshot(&bytes),
            Err(SnapshotError::InitialCounts(3))
        ));

        // A home that would not reset to empty.
        let mut homes = Board::new(3);
        homes.homes[Side::A] = Hole::new(2);
        let bytes = homes.to_snapshot().unwrap();
        assert!(matches!(
            Board::from_snapshot(&bytes),
            Err(SnapshotError::InitialCounts(3))
        ));
    }

    #[test]
    fn test_board_json_serialization() {
        let board = Board::new(3);
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
