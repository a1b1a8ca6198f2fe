//! Chess piece kinds and their material values.

use std::fmt;

/// The kind of a chess piece, without color information.
///
/// Discriminants are the wire codes used by the host grid encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Rook = 1,
    Knight = 2,
    Bishop = 3,
    Queen = 4,
    King = 5,
    Pawn = 6,
}

impl PieceKind {
    /// All piece kinds in wire-code order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Pawn,
    ];

    /// Return the wire code (1..=6).
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a kind by its wire code.
    #[inline]
    pub const fn from_code(code: u8) -> Option<PieceKind> {
        match code {
            1 => Some(PieceKind::Rook),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Queen),
            5 => Some(PieceKind::King),
            6 => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    /// Return the material value of this kind. The king is worth nothing.
    #[inline]
    pub const fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// Return `true` for pieces whose travel can be blocked (rook, bishop, queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen)
    }

    /// Return the lowercase letter for this kind.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
