//! Colored chess piece, packed as its signed wire code.

use std::fmt;

use crate::color::Color;
use crate::error::EncodingError;
use crate::piece_kind::PieceKind;

/// A colored chess piece, stored as the signed wire code.
///
/// The magnitude (1-6) is the [`PieceKind`] code and the sign is the
/// [`Color`]: positive for White, negative for Black. Zero is never a
/// valid `Piece`; an empty square is `None` in an `Option<Piece>`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(i8);

impl Piece {
    /// White rook. Code: 1.
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    /// White knight. Code: 2.
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    /// White bishop. Code: 3.
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    /// White queen. Code: 4.
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    /// White king. Code: 5.
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);
    /// White pawn. Code: 6.
    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);

    /// Black rook. Code: -1.
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    /// Black knight. Code: -2.
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    /// Black bishop. Code: -3.
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    /// Black queen. Code: -4.
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    /// Black king. Code: -5.
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);
    /// Black pawn. Code: -6.
    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        let code = kind.code() as i8;
        match color {
            Color::White => Piece(code),
            Color::Black => Piece(-code),
        }
    }

    /// Decode a square from its wire code.
    ///
    /// `0` decodes to `None`; codes outside `-6..=6` are rejected.
    pub fn from_code(code: i32) -> Result<Option<Piece>, EncodingError> {
        if code == 0 {
            return Ok(None);
        }
        let kind = u8::try_from(code.unsigned_abs())
            .ok()
            .and_then(PieceKind::from_code)
            .ok_or(EncodingError::InvalidPieceCode { code })?;
        let color = if code > 0 { Color::White } else { Color::Black };
        Ok(Some(Piece::new(kind, color)))
    }

    /// Encode a square as its wire code (`0` for empty).
    #[inline]
    pub fn encode(square: Option<Piece>) -> i32 {
        square.map_or(0, Piece::code)
    }

    /// Return the signed wire code.
    #[inline]
    pub const fn code(self) -> i32 {
        self.0 as i32
    }

    /// Return the piece kind (the magnitude of the code).
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self.0.unsigned_abs() {
            1 => PieceKind::Rook,
            2 => PieceKind::Knight,
            3 => PieceKind::Bishop,
            4 => PieceKind::Queen,
            5 => PieceKind::King,
            _ => PieceKind::Pawn,
        }
    }

    /// Return the color (the sign of the code).
    #[inline]
    pub const fn color(self) -> Color {
        if self.0 > 0 { Color::White } else { Color::Black }
    }

    /// Return the signed material value: positive for White, negative for Black.
    #[inline]
    pub const fn value(self) -> i32 {
        self.kind().value() as i32 * self.color().sign()
    }

    /// Return the display letter: uppercase for White, lowercase for Black.
    #[inline]
    pub fn letter(self) -> char {
        let base = self.kind().letter();
        match self.color() {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color() {
            Color::White => 'W',
            Color::Black => 'B',
        };
        let kind_char = self.kind().letter().to_ascii_uppercase();
        write!(f, "{}{}", color_prefix, kind_char)
    }
}
