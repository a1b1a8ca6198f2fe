//! Host command parsing.

use regent_core::{BOARD_SIZE, CodeGrid, Color, Move};

use crate::error::HostError;

/// A runtime option set with `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOption {
    /// Print a `status` line after a move that ends the game.
    AnnounceStatus(bool),
    /// Print the board after every accepted move.
    ShowBoard(bool),
}

/// A parsed host command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `reset` -- start a new game.
    Reset,
    /// `move` -- attempt a move for the side to move.
    Move {
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    },
    /// `board` -- print the encoded grid.
    Board,
    /// `setboard` -- load a grid and side to move.
    SetBoard {
        grid: CodeGrid,
        white_to_move: bool,
    },
    /// `check` -- is the side to move in check?
    Check,
    /// `checkmate <color>`
    Checkmate(Color),
    /// `stalemate <color>`
    Stalemate(Color),
    /// `turn` -- print the side to move.
    Turn,
    /// `score` -- print both scores.
    Score,
    /// `promote` -- overwrite a square.
    Promote { row: i32, col: i32, code: i32 },
    /// `moves` -- list legal moves of the side to move.
    Moves,
    /// `status` -- ongoing, checkmate, or stalemate.
    Status,
    /// `display` -- pretty-print the board.
    Display,
    /// `setoption name <name> value <value>`
    SetOption(HostOption),
    /// `quit` -- leave the command loop.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of host input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, HostError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&keyword, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match keyword {
        "reset" => Ok(Command::Reset),
        "board" => Ok(Command::Board),
        "check" => Ok(Command::Check),
        "turn" => Ok(Command::Turn),
        "score" => Ok(Command::Score),
        "moves" => Ok(Command::Moves),
        "status" => Ok(Command::Status),
        "display" => Ok(Command::Display),
        "quit" => Ok(Command::Quit),
        "move" => parse_move(args),
        "setboard" => parse_setboard(args),
        "checkmate" => Ok(Command::Checkmate(parse_color("checkmate", args)?)),
        "stalemate" => Ok(Command::Stalemate(parse_color("stalemate", args)?)),
        "promote" => parse_promote(args),
        "setoption" => parse_setoption(args),
        _ => Ok(Command::Unknown(keyword.to_string())),
    }
}

/// Parse `move`: either four coordinates or one coordinate-text move.
fn parse_move(args: &[&str]) -> Result<Command, HostError> {
    match args {
        [text] => {
            let mv: Move = text.parse()?;
            Ok(Command::Move {
                from_row: mv.from().row() as i32,
                from_col: mv.from().col() as i32,
                to_row: mv.to().row() as i32,
                to_col: mv.to().col() as i32,
            })
        }
        [fr, fc, tr, tc] => Ok(Command::Move {
            from_row: parse_int(fr)?,
            from_col: parse_int(fc)?,
            to_row: parse_int(tr)?,
            to_col: parse_int(tc)?,
        }),
        _ => Err(HostError::WrongArgumentCount {
            command: "move",
            expected: 4,
            found: args.len(),
        }),
    }
}

/// Parse `setboard`: 64 codes in row-major order followed by the side to move.
fn parse_setboard(args: &[&str]) -> Result<Command, HostError> {
    let cells = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);
    let [codes @ .., color] = args else {
        return Err(HostError::WrongArgumentCount {
            command: "setboard",
            expected: cells + 1,
            found: 0,
        });
    };
    if codes.len() != cells {
        return Err(HostError::WrongArgumentCount {
            command: "setboard",
            expected: cells + 1,
            found: args.len(),
        });
    }

    let mut grid: CodeGrid = [[0; BOARD_SIZE as usize]; BOARD_SIZE as usize];
    for (i, token) in codes.iter().enumerate() {
        grid[i / BOARD_SIZE as usize][i % BOARD_SIZE as usize] = parse_int(token)?;
    }
    let white_to_move = color.parse::<Color>()? == Color::White;
    Ok(Command::SetBoard {
        grid,
        white_to_move,
    })
}

/// Parse `promote <row> <col> <code>`.
fn parse_promote(args: &[&str]) -> Result<Command, HostError> {
    let [row, col, code] = args else {
        return Err(HostError::WrongArgumentCount {
            command: "promote",
            expected: 3,
            found: args.len(),
        });
    };
    Ok(Command::Promote {
        row: parse_int(row)?,
        col: parse_int(col)?,
        code: parse_int(code)?,
    })
}

/// Parse `setoption name <name> value <value>`.
fn parse_setoption(args: &[&str]) -> Result<Command, HostError> {
    let ["name", name, "value", value] = args else {
        return Err(HostError::MalformedSetOption);
    };
    let flag = || {
        parse_bool(value).ok_or_else(|| HostError::InvalidOptionValue {
            name: name.to_string(),
            value: value.to_string(),
        })
    };
    match name.to_ascii_lowercase().as_str() {
        "announcestatus" => Ok(Command::SetOption(HostOption::AnnounceStatus(flag()?))),
        "showboard" => Ok(Command::SetOption(HostOption::ShowBoard(flag()?))),
        _ => Err(HostError::UnknownOption {
            name: name.to_string(),
        }),
    }
}

fn parse_color(command: &'static str, args: &[&str]) -> Result<Color, HostError> {
    match args {
        [color] => Ok(color.parse::<Color>()?),
        _ => Err(HostError::WrongArgumentCount {
            command,
            expected: 1,
            found: args.len(),
        }),
    }
}

fn parse_int(token: &str) -> Result<i32, HostError> {
    token.parse().map_err(|_| HostError::InvalidNumber {
        value: token.to_string(),
    })
}

fn parse_bool(token: &str) -> Option<bool> {
    match token.to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Some(true),
        "false" | "off" | "0" => Some(false),
        _ => None,
    }
}
