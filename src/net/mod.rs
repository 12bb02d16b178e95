//! Peer-to-peer move transport.
//!
//! The rules engine never touches the network. This module carries moves
//! between two players: [`MoveRecord`] is the 4-byte wire format and
//! [`PeerLink`] the TCP connection. Callers drive play through the
//! [`MoveChannel`] trait, so a console loop can be exercised against an
//! in-memory channel as easily as a socket.

mod peer;
mod record;

pub use peer::PeerLink;
pub use record::{MoveRecord, ACK, RECORD_LEN};

use crate::error::NetError;

/// A bidirectional, acknowledged stream of moves.
pub trait MoveChannel {
    /// Send one move and wait until the opponent acknowledges it.
    fn send_move(&mut self, record: MoveRecord) -> Result<(), NetError>;

    /// Block until the opponent's next move arrives.
    ///
    /// Implementations bound the wait with their own timeout and report
    /// it as [`NetError::Timeout`].
    fn recv_move(&mut self) -> Result<MoveRecord, NetError>;
}
