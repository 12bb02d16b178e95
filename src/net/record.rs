//! The 4-byte move record exchanged between peers.
//!
//! ```text
//! byte 0..2  round number, big-endian
//! byte 2     side (A = 1, B = 0)
//! byte 3     row (0..=5)
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Side, ROWS};
use crate::error::WireError;

/// Encoded size of a [`MoveRecord`].
pub const RECORD_LEN: usize = 4;

/// Acknowledgement written back after each received record.
pub const ACK: &[u8; 3] = b"ack";

const SIDE_A_BYTE: u8 = 1;
const SIDE_B_BYTE: u8 = 0;

/// One move as sent to the opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Round counter of the sender after playing the move.
    pub round: u16,
    /// Side that played.
    pub side: Side,
    /// Source row, always in `0..6` once decoded.
    pub row: u8,
}

impl MoveRecord {
    #[must_use]
    pub const fn new(round: u16, side: Side, row: u8) -> Self {
        Self { round, side, row }
    }

    /// Source row as a board index.
    #[must_use]
    pub fn row_index(&self) -> usize {
        usize::from(self.row)
    }

    #[must_use]
    pub fn encode(&self) -> [u8; RECORD_LEN] {
        let [hi, lo] = self.round.to_be_bytes();
        let side = match self.side {
            Side::A => SIDE_A_BYTE,
            Side::B => SIDE_B_BYTE,
        };
        [hi, lo, side, self.row]
    }

    /// Decode the first [`RECORD_LEN`] bytes of `bytes`.
    pub fn decode(bytes: &[u8]) -> Result<Self, WireError> {
        let &[hi, lo, side, row] = bytes
            .get(..RECORD_LEN)
            .and_then(|b| <&[u8; RECORD_LEN]>::try_from(b).ok())
            .ok_or(WireError::Truncated {
                expected: RECORD_LEN,
                actual: bytes.len(),
            })?;

        let side = match side {
            SIDE_A_BYTE => Side::A,
            SIDE_B_BYTE => Side::B,
            other => return Err(WireError::InvalidSide(other)),
        };
        if usize::from(row) >= ROWS {
            return Err(WireError::RowOutOfRange(row));
        }

        Ok(Self {
            round: u16::from_be_bytes([hi, lo]),
            side,
            row,
        })
    }
}
