//! Two-socket peer link.
//!
//! Each player listens on one port and connects to the other player's
//! listener, giving two independently-directed streams: moves flow out on
//! `outbound` and in on `inbound`, and every record is answered with
//! [`ACK`] on the stream it arrived on.
//!
//! Side B listens on `port` and then connects to `port + 1`; side A
//! connects to `port` first and then listens on `port + 1`, so the two
//! handshakes never wait on each other.

use std::io::{ErrorKind, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use super::record::{MoveRecord, ACK, RECORD_LEN};
use super::MoveChannel;
use crate::config::MatchConfig;
use crate::core::Side;
use crate::error::NetError;

/// An open connection to the opponent.
///
/// Both streams are closed when the link is dropped.
#[derive(Debug)]
pub struct PeerLink {
    inbound: TcpStream,
    outbound: TcpStream,
}

impl PeerLink {
    /// Perform the two-way handshake with `opponent` for the given side.
    ///
    /// Blocks until the opponent has connected. Connection attempts are
    /// retried according to `config`.
    pub fn establish(opponent: &str, side: Side, config: &MatchConfig) -> Result<Self, NetError> {
        let (listen_port, connect_port) = match side {
            Side::B => (config.port, config.port.saturating_add(1)),
            Side::A => (config.port.saturating_add(1), config.port),
        };

        info!(%side, opponent, listen_port, connect_port, "waiting for opponent to connect");

        let (inbound, outbound) = match side {
            Side::B => {
                let inbound = accept_one(listen_port)?;
                let outbound = connect_with_retry(opponent, connect_port, config)?;
                (inbound, outbound)
            }
            Side::A => {
                let outbound = connect_with_retry(opponent, connect_port, config)?;
                let inbound = accept_one(listen_port)?;
                (inbound, outbound)
            }
        };

        Self::from_streams(inbound, outbound, config.receive_timeout())
    }

    /// Wrap already-connected streams. `timeout` bounds every blocking read.
    pub fn from_streams(
        inbound: TcpStream,
        outbound: TcpStream,
        timeout: Option<Duration>,
    ) -> Result<Self, NetError> {
        for stream in [&inbound, &outbound] {
            stream.set_read_timeout(timeout)?;
            stream.set_nodelay(true)?;
        }
        Ok(Self { inbound, outbound })
    }

    /// Shut down both streams.
    pub fn close(self) -> Result<(), NetError> {
        for stream in [&self.inbound, &self.outbound] {
            match stream.shutdown(Shutdown::Both) {
                Err(e) if e.kind() != ErrorKind::NotConnected => return Err(e.into()),
                _ => {}
            }
        }
        info!("peer link closed");
        Ok(())
    }
}

impl MoveChannel for PeerLink {
    fn send_move(&mut self, record: MoveRecord) -> Result<(), NetError> {
        self.outbound.write_all(&record.encode()).map_err(map_io)?;

        let mut response = [0u8; ACK.len()];
        self.outbound.read_exact(&mut response).map_err(map_io)?;
        if response != *ACK {
            return Err(NetError::BadAck(response.to_vec()));
        }

        debug!(?record, "move sent");
        Ok(())
    }

    fn recv_move(&mut self) -> Result<MoveRecord, NetError> {
        let mut buffer = [0u8; RECORD_LEN];
        self.inbound.read_exact(&mut buffer).map_err(map_io)?;
        self.inbound.write_all(ACK).map_err(map_io)?;

        let record = MoveRecord::decode(&buffer)?;
        debug!(?record, "move received");
        Ok(record)
    }
}

/// Translate socket errors into link errors.
fn map_io(e: std::io::Error) -> NetError {
    match e.kind() {
        ErrorKind::WouldBlock | ErrorKind::TimedOut => NetError::Timeout,
        ErrorKind::UnexpectedEof
        | ErrorKind::ConnectionReset
        | ErrorKind::ConnectionAborted
        | ErrorKind::BrokenPipe => NetError::PeerClosed,
        _ => NetError::Io(e),
    }
}

/// Listen on `port` on all interfaces and take the first connection.
fn accept_one(port: u16) -> Result<TcpStream, NetError> {
    let listener = TcpListener::bind(("0.0.0.0", port))?;
    let (stream, peer) = listener.accept()?;
    info!(%peer, port, "opponent connected");
    Ok(stream)
}

fn resolve(host: &str, port: u16) -> Result<Vec<SocketAddr>, NetError> {
    let addrs: Vec<_> = (host, port)
        .to_socket_addrs()
        .map_err(|_| NetError::Resolve(format!("{host}:{port}")))?
        .collect();
    if addrs.is_empty() {
        return Err(NetError::Resolve(format!("{host}:{port}")));
    }
    Ok(addrs)
}

/// Connect to `host:port`, retrying while the opponent is not listening yet.
fn connect_with_retry(host: &str, port: u16, config: &MatchConfig) -> Result<TcpStream, NetError> {
    let addrs = resolve(host, port)?;
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        match TcpStream::connect(&addrs[..]) {
            Ok(stream) => {
                info!(host, port, attempts, "connected to opponent");
                return Ok(stream);
            }
            Err(e) => {
                if config.connect_attempts != 0 && attempts >= config.connect_attempts {
                    return Err(NetError::ConnectExhausted {
                        addr: format!("{host}:{port}"),
                        attempts,
                    });
                }
                debug!(host, port, attempts, error = %e, "connect failed, retrying");
                thread::sleep(config.connect_retry());
            }
        }
    }
}
