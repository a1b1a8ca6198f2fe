//! Error types for the wire encoding and move validation.

use crate::color::Color;
use crate::square::Square;

/// Errors that occur when decoding host-supplied values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// A grid cell holds a value outside `-6..=6`.
    #[error("invalid piece code: {code}")]
    InvalidPieceCode {
        /// The offending code.
        code: i32,
    },
    /// A color string is not one of `white`, `black`, `w`, `b`.
    #[error("invalid color: \"{found}\"")]
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// Coordinates fall outside the 8x8 board.
    #[error("square ({row}, {col}) is off the board")]
    OffBoard {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },
    /// A move string is not of the form `e2e4`.
    #[error("invalid move text: \"{found}\"")]
    InvalidMoveText {
        /// The text that failed to parse.
        found: String,
    },
}

/// Why a proposed move was rejected.
///
/// Variants are listed in the order the checks are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    /// A coordinate falls outside `0..8`.
    #[error("coordinates are off the board")]
    OutOfBounds,
    /// Source and destination are the same square.
    #[error("source and destination are the same square")]
    SameSquare,
    /// There is no piece on the source square.
    #[error("no piece on {square}")]
    EmptySource {
        /// The empty source square.
        square: Square,
    },
    /// The piece on the source square belongs to the other side.
    #[error("piece on {square} does not belong to {mover:?}")]
    WrongColor {
        /// The source square.
        square: Square,
        /// The side attempting to move.
        mover: Color,
    },
    /// The destination holds a piece of the mover's own color.
    #[error("{square} is occupied by a friendly piece")]
    OwnPieceAtTarget {
        /// The destination square.
        square: Square,
    },
    /// The destination holds the opposing king.
    #[error("the king on {square} cannot be captured")]
    KingCapture {
        /// The destination square.
        square: Square,
    },
    /// The piece cannot travel that way, or its path is blocked.
    #[error("piece cannot move from {from} to {to}")]
    BadShape {
        /// Source square.
        from: Square,
        /// Destination square.
        to: Square,
    },
    /// The move would leave the mover's king attacked.
    #[error("move would leave the king in check")]
    LeavesKingInCheck,
}

/// Errors returned when a session refuses to execute a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The game has already ended in checkmate or stalemate.
    #[error("the game is over")]
    GameOver,
    /// The move is not legal for the side to move.
    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),
}

#[cfg(test)]
mod tests {
    use super::{EncodingError, IllegalMove, MoveError};

    #[test]
    fn encoding_error_display() {
        let err = EncodingError::InvalidPieceCode { code: 9 };
        assert_eq!(format!("{err}"), "invalid piece code: 9");
    }

    #[test]
    fn illegal_move_display() {
        let err = IllegalMove::LeavesKingInCheck;
        assert_eq!(format!("{err}"), "move would leave the king in check");
    }

    #[test]
    fn move_error_from_illegal_move() {
        let err: MoveError = IllegalMove::SameSquare.into();
        assert!(matches!(err, MoveError::Illegal(IllegalMove::SameSquare)));
        assert_eq!(
            format!("{err}"),
            "illegal move: source and destination are the same square"
        );
    }
}
