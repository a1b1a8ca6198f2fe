//! Board coordinates in (row, column) form.

use std::fmt;

/// Width and height of the board.
pub const BOARD_SIZE: u8 = 8;

/// A square on the board, encoded as `row * 8 + col`.
///
/// Row 0 is Black's back rank (rank 8 in algebraic notation) and row 7 is
/// White's back rank (rank 1). Column 0 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a row and column, returning `None` if either is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row * BOARD_SIZE + col))
        } else {
            None
        }
    }

    /// Create a square from signed host coordinates.
    ///
    /// Negative or too-large coordinates yield `None`.
    pub fn from_coords(row: i32, col: i32) -> Option<Square> {
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Square::new(row, col)
    }

    /// Parse an algebraic notation string (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0];
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Square::new(b'8' - rank_byte, file_byte - b'a')
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (0..8).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    /// Return the column (0..8).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Return the square displaced by `(d_row, d_col)`, if it is on the board.
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Square> {
        Square::from_coords(self.row() as i32 + d_row, self.col() as i32 + d_col)
    }

    /// Iterate over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col()) as char;
        let rank = (b'8' - self.row()) as char;
        write!(f, "{file}{rank}")
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
