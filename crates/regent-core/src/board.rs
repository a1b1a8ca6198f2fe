//! The 8x8 board: piece placement and the host grid encoding.

use std::fmt;

use crate::color::Color;
use crate::error::EncodingError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::{BOARD_SIZE, Square};

/// Host-facing board encoding: `grid[row][col]` holds a signed piece code.
pub type CodeGrid = [[i32; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// Back-rank layout shared by both colors, column 0 to 7.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement on an 8x8 grid. `None` marks an empty square.
///
/// The board enforces no piece-count invariants: positions without a king,
/// or with pawns on a back rank, are representable.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Return the standard starting position, Black on rows 0-1 and White on rows 6-7.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            let col = col as u8;
            for (color, back_row) in [(Color::Black, 0), (Color::White, 7)] {
                if let Some(sq) = Square::new(back_row, col) {
                    board.set(sq, Some(Piece::new(kind, color)));
                }
                if let Some(sq) = Square::new(color.home_row(), col) {
                    board.set(sq, Some(Piece::new(PieceKind::Pawn, color)));
                }
            }
        }
        board
    }

    /// Decode a board from the host grid encoding.
    ///
    /// The position itself is not checked for legality; only the cell codes are.
    pub fn from_codes(grid: &CodeGrid) -> Result<Board, EncodingError> {
        let mut board = Board::empty();
        for sq in Square::all() {
            let code = grid[sq.row() as usize][sq.col() as usize];
            board.set(sq, Piece::from_code(code)?);
        }
        Ok(board)
    }

    /// Encode the board in the host grid encoding.
    pub fn to_codes(&self) -> CodeGrid {
        let mut grid = [[0; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for sq in Square::all() {
            grid[sq.row() as usize][sq.col() as usize] = Piece::encode(self.get(sq));
        }
        grid
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Overwrite the given square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Return `true` if the square holds no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Return the signed material value of a square: positive for White,
    /// negative for Black, zero when empty.
    #[inline]
    pub fn piece_value(square: Option<Piece>) -> i32 {
        square.map_or(0, Piece::value)
    }

    /// Return the first square (in row-major order) holding `color`'s king.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        Square::all().find(|&sq| self.get(sq) == Some(king))
    }

    /// Iterate over the squares holding pieces of `color`, in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.get(sq) {
            Some(piece) if piece.color() == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:?})", self.to_codes())
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, row 0 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0..BOARD_SIZE {
            write!(f, "{}  ", BOARD_SIZE - row)?;
            for col in 0..BOARD_SIZE {
                let c = Square::new(row, col)
                    .and_then(|sq| board.get(sq))
                    .map_or('.', Piece::letter);
                if col < BOARD_SIZE - 1 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
