//! Core chess rules: board representation, move legality, check detection,
//! and game sessions with material scoring.

pub mod attacks;
mod board;
mod chess_move;
mod color;
mod error;
pub mod legality;
mod piece;
mod piece_kind;
mod session;
pub mod shape;
mod square;

pub use board::{Board, CodeGrid, PrettyBoard};
pub use chess_move::Move;
pub use color::Color;
pub use error::{EncodingError, IllegalMove, MoveError};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use session::{GameSession, GameStatus, MoveOutcome, Scores};
pub use square::{BOARD_SIZE, Square};
