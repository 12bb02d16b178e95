//! Text console for one match: prompts, board printing and the turn loop.
//!
//! The console is generic over its input and output streams. The binary
//! hands it locked stdin/stdout; tests script it with byte buffers and an
//! in-memory [`MoveChannel`].

use std::fmt;
use std::io::{BufRead, Write};

use tracing::warn;

use crate::board::Board;
use crate::core::{Side, ROWS};
use crate::error::{ConsoleError, NetError, WireError};
use crate::net::{MoveChannel, MoveRecord};
use crate::rules::{Game, GameStatus};

/// Line-oriented player console.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line.
    pub fn say(&mut self, line: impl fmt::Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Print `message` and read one trimmed line.
    pub fn prompt(&mut self, message: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the player enters a row number.
    fn prompt_row(&mut self, side: Side) -> Result<u8, ConsoleError> {
        loop {
            let line = self.prompt(&format!("Side {side}, select a row: "))?;
            match line.parse::<u8>() {
                Ok(row) if usize::from(row) < ROWS => return Ok(row),
                _ => writeln!(self.output, "Enter a row between 0 and {}.", ROWS - 1)?,
            }
        }
    }

    /// Play one match to completion and return the winner.
    ///
    /// `me` is the side typed in at this console; `None` means both sides
    /// are local. Moves of the other side arrive through `channel`, and
    /// local moves are sent on it.
    pub fn run_match<C: MoveChannel>(
        &mut self,
        board: &mut Board,
        me: Option<Side>,
        mut channel: Option<&mut C>,
    ) -> Result<Side, ConsoleError> {
        let mut game = Game::new(board);
        let mut status = GameStatus::SideA;

        loop {
            writeln!(self.output, "\n________________________________\n")?;
            writeln!(self.output, "Round: {}", game.get_rounds())?;
            writeln!(self.output, "{}\n", game.board())?;

            if status.is_terminal() {
                if status.is_fatal() {
                    return Err(ConsoleError::Aborted(status));
                }
                writeln!(self.output, "Game Over.")?;
                return Ok(game.get_winner());
            }
            let Some(to_move) = status.to_move() else {
                return Err(ConsoleError::Aborted(status));
            };

            let remote = me.is_some_and(|me| me != to_move);
            status = match channel.as_deref_mut() {
                Some(link) if remote => self.remote_turn(&mut game, to_move, link)?,
                link => self.local_turn(&mut game, to_move, me.is_some(), link)?,
            };
        }
    }

    /// Read rows until one is playable, then forward the move.
    fn local_turn<C: MoveChannel>(
        &mut self,
        game: &mut Game<'_>,
        to_move: Side,
        announce: bool,
        mut channel: Option<&mut C>,
    ) -> Result<GameStatus, ConsoleError> {
        if announce {
            writeln!(self.output, "Your turn!")?;
        }

        loop {
            let row = self.prompt_row(to_move)?;
            let next = game.run_round(to_move, usize::from(row));
            if next == GameStatus::EmptyHoleError {
                writeln!(self.output, "That pit is empty, choose another.")?;
                continue;
            }

            if next.code() > 0 {
                if let Some(link) = channel.as_mut() {
                    link.send_move(MoveRecord::new(game.get_rounds(), to_move, row))?;
                }
            }
            return Ok(next);
        }
    }

    /// Wait for the opponent's move and apply it.
    fn remote_turn<C: MoveChannel>(
        &mut self,
        game: &mut Game<'_>,
        to_move: Side,
        channel: &mut C,
    ) -> Result<GameStatus, ConsoleError> {
        writeln!(self.output, "Waiting for opponent to move...")?;
        self.output.flush()?;

        let record = loop {
            match channel.recv_move() {
                Ok(record) if record.side != to_move => {
                    warn!(?record, "move from the wrong side ignored");
                }
                Ok(record) => break record,
                Err(NetError::Wire(WireError::InvalidSide(byte))) => {
                    warn!(byte, "received move with an invalid side");
                    return Ok(GameStatus::InvalidSide);
                }
                Err(NetError::Wire(e)) => {
                    warn!(error = %e, "received malformed move");
                    return Ok(GameStatus::RoundFailure);
                }
                Err(e) => return Err(e.into()),
            }
        };

        Ok(match game.run_round(record.side, record.row_index()) {
            GameStatus::EmptyHoleError => {
                warn!(?record, "opponent played an empty pit");
                GameStatus::RoundFailure
            }
            next => next,
        })
    }
}
