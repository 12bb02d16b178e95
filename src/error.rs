use std::path::PathBuf;

use crate::rules::GameStatus;

/// Errors raised by a single board hole.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HoleError {
    #[error("cannot remove {requested} marbles from a hole holding {available}")]
    Underflow { requested: u8, available: u8 },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors decoding a move record off the wire.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    #[error("move record needs {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("unknown side byte {0:#04x}")]
    InvalidSide(u8),

    #[error("row {0} is outside 0..=5")]
    RowOutOfRange(u8),
}

/// Errors on the peer-to-peer link.
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("could not resolve opponent address {0}")]
    Resolve(String),

    #[error("gave up connecting to {addr} after {attempts} attempts")]
    ConnectExhausted { addr: String, attempts: u32 },

    #[error("timed out waiting for the opponent")]
    Timeout,

    #[error("opponent closed the connection")]
    PeerClosed,

    #[error("expected acknowledgement, got {0:?}")]
    BadAck(Vec<u8>),

    #[error("malformed move record: {0}")]
    Wire(#[from] WireError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encoding or restoring a board snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to encode board: {0}")]
    Encode(bincode::Error),

    #[error("failed to decode board: {0}")]
    Decode(bincode::Error),

    #[error("snapshot holds {0} marbles per pit, above the supported maximum")]
    MarblesPerPit(u8),

    #[error("snapshot reset values disagree with {0} marbles per pit")]
    InitialCounts(u8),
}

/// Errors that end a console match.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("match aborted: {0}")]
    Aborted(GameStatus),

    #[error("input closed")]
    InputClosed,

    #[error("peer link failed: {0}")]
    Net(#[from] NetError),

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}
