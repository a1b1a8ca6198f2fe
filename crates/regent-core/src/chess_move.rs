//! A move as a (source, destination) pair.

use std::fmt;
use std::str::FromStr;

use crate::error::EncodingError;
use crate::square::Square;

/// A move from one square to another.
///
/// There is no promotion field: pawns reaching the last row always become
/// queens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Create a move.
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// Return the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Return the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = EncodingError;

    /// Parse coordinate text such as `e2e4`.
    fn from_str(s: &str) -> Result<Move, EncodingError> {
        let invalid = || EncodingError::InvalidMoveText {
            found: s.to_string(),
        };
        if s.len() != 4 || !s.is_ascii() {
            return Err(invalid());
        }
        let from = Square::from_algebraic(&s[0..2]).ok_or_else(invalid)?;
        let to = Square::from_algebraic(&s[2..4]).ok_or_else(invalid)?;
        Ok(Move::new(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::square::Square;

    #[test]
    fn display_coordinate_text() {
        let mv = Move::new(Square::new(6, 4).unwrap(), Square::new(4, 4).unwrap());
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn parse_coordinate_text() {
        let mv: Move = "g8f6".parse().unwrap();
        assert_eq!(mv.from(), Square::new(0, 6).unwrap());
        assert_eq!(mv.to(), Square::new(2, 5).unwrap());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("e2".parse::<Move>().is_err());
        assert!("e2e9".parse::<Move>().is_err());
        assert!("e2e4q".parse::<Move>().is_err());
        assert!("é2e4".parse::<Move>().is_err());
    }
}
