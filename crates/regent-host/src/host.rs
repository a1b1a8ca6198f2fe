//! Line-oriented command loop driving a single game session.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use regent_core::{Color, GameSession, Move};

use crate::command::{Command, HostOption, parse_command};
use crate::error::HostError;

/// Configuration knobs adjustable via `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    /// Print a `status` line after a move that ends the game.
    pub announce_status: bool,
    /// Print the board after every accepted move.
    pub show_board: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            announce_status: true,
            show_board: false,
        }
    }
}

/// Owns one game and answers host commands about it.
///
/// Commands are handled strictly one at a time, so the session never sees
/// concurrent access.
pub struct Host {
    session: GameSession,
    config: HostConfig,
}

impl Host {
    /// Create a host with a fresh game and default configuration.
    pub fn new() -> Self {
        Self::with_config(HostConfig::default())
    }

    /// Create a host with a fresh game and the given configuration.
    pub fn with_config(config: HostConfig) -> Self {
        Self {
            session: GameSession::new(),
            config,
        }
    }

    /// Return the game being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Return the current configuration.
    pub fn config(&self) -> HostConfig {
        self.config
    }

    /// Read commands from `input` until `quit` or end of input, writing
    /// responses to `output`.
    ///
    /// Malformed commands, including lines that are not valid UTF-8, get an
    /// `error` line; only I/O failures end the loop early.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<(), HostError> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let Ok(line) = std::str::from_utf8(&buf) else {
                warn!(len = buf.len(), "host input is not valid UTF-8");
                writeln!(output, "error invalid UTF-8")?;
                output.flush()?;
                continue;
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received host command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd, &mut output)?,
                Err(e) => {
                    warn!(error = %e, "host parse error");
                    writeln!(output, "error {e}")?;
                }
            }
            output.flush()?;
        }

        info!("host shutting down");
        Ok(())
    }

    /// Execute one parsed command, writing its response.
    pub fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), HostError> {
        match cmd {
            Command::Reset => {
                self.session.reset();
                writeln!(out, "ok")?;
            }
            Command::Move {
                from_row,
                from_col,
                to_row,
                to_col,
            } => self.handle_move(from_row, from_col, to_row, to_col, out)?,
            Command::Board => {
                for row in self.session.board_state() {
                    let cells: Vec<String> = row.iter().map(i32::to_string).collect();
                    writeln!(out, "{}", cells.join(" "))?;
                }
            }
            Command::SetBoard {
                grid,
                white_to_move,
            } => match self.session.set_board_state(&grid, white_to_move) {
                Ok(()) => writeln!(out, "ok")?,
                Err(e) => {
                    warn!(error = %e, "setboard rejected");
                    writeln!(out, "error {e}")?;
                }
            },
            Command::Check => writeln!(out, "{}", self.session.is_in_check())?,
            Command::Checkmate(color) => writeln!(out, "{}", self.session.is_checkmate(color))?,
            Command::Stalemate(color) => writeln!(out, "{}", self.session.is_stalemate(color))?,
            Command::Turn => writeln!(out, "{}", self.session.turn().name())?,
            Command::Score => writeln!(out, "{}", self.session.scores())?,
            Command::Promote { row, col, code } => {
                match self.session.promote_pawn(row, col, code) {
                    Ok(()) => writeln!(out, "ok")?,
                    Err(e) => {
                        warn!(error = %e, "promote rejected");
                        writeln!(out, "error {e}")?;
                    }
                }
            }
            Command::Moves => {
                let side: Color = self.session.turn();
                let moves: Vec<String> = self
                    .session
                    .legal_moves(side)
                    .iter()
                    .map(Move::to_string)
                    .collect();
                writeln!(out, "{}", moves.join(" "))?;
            }
            Command::Status => writeln!(out, "{}", self.session.status())?,
            Command::Display => writeln!(out, "{}", self.session.board().pretty())?,
            Command::SetOption(option) => self.handle_setoption(option),
            Command::Quit => {}
            Command::Unknown(keyword) => {
                debug!(%keyword, "ignoring unknown command");
            }
        }
        Ok(())
    }

    fn handle_move<W: Write>(
        &mut self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
        out: &mut W,
    ) -> Result<(), HostError> {
        match self.session.perform_move(from_row, from_col, to_row, to_col) {
            Ok(outcome) => {
                writeln!(out, "true")?;
                if self.config.show_board {
                    writeln!(out, "{}", self.session.board().pretty())?;
                }
                if self.config.announce_status && outcome.status.is_terminal() {
                    writeln!(out, "status {}", outcome.status)?;
                }
            }
            Err(e) => {
                debug!(error = %e, "move refused");
                writeln!(out, "false")?;
            }
        }
        Ok(())
    }

    fn handle_setoption(&mut self, option: HostOption) {
        match option {
            HostOption::AnnounceStatus(on) => self.config.announce_status = on,
            HostOption::ShowBoard(on) => self.config.show_board = on,
        }
        debug!(config = ?self.config, "option updated");
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new()
    }
}
