//! Attack detection: whether a piece attacks a square, and whether a king is in check.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::shape;
use crate::square::Square;

/// Return `true` if `attacker`, standing on `from`, attacks `target`.
///
/// Sliders need a clear path. A pawn attacks the two squares diagonally in
/// front of it, "front" being its own direction of travel.
pub fn attacks(board: &Board, attacker: Piece, from: Square, target: Square) -> bool {
    match attacker.kind() {
        PieceKind::Rook => shape::rook(from, target) && shape::path_clear(board, from, target),
        PieceKind::Bishop => shape::bishop(from, target) && shape::path_clear(board, from, target),
        PieceKind::Queen => shape::queen(from, target) && shape::path_clear(board, from, target),
        PieceKind::Knight => shape::knight(from, target),
        PieceKind::King => shape::king(from, target),
        PieceKind::Pawn => {
            let d_row = target.row() as i32 - from.row() as i32;
            let d_col = target.col() as i32 - from.col() as i32;
            d_row == attacker.color().pawn_direction() && d_col.abs() == 1
        }
    }
}

/// Return `true` if any piece of `by_color` attacks `target`.
pub fn is_square_attacked(board: &Board, target: Square, by_color: Color) -> bool {
    board
        .pieces(by_color)
        .any(|(from, piece)| attacks(board, piece, from, target))
}

/// Return `true` if `color`'s king is attacked.
///
/// A board without a king for `color` is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king) => is_square_attacked(board, king, color.flip()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn board_with(pieces: &[(&str, Piece)]) -> Board {
        let mut board = Board::empty();
        for &(name, piece) in pieces {
            board.set(sq(name), Some(piece));
        }
        board
    }

    #[test]
    fn starting_position_no_check() {
        let board = Board::starting_position();
        assert!(!is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
    }

    #[test]
    fn missing_king_is_not_check() {
        let board = board_with(&[("e4", Piece::BLACK_QUEEN)]);
        assert!(!is_in_check(&board, Color::White));
    }

    #[test]
    fn rook_check_and_block() {
        let mut board = board_with(&[("e1", Piece::WHITE_KING), ("e8", Piece::BLACK_ROOK)]);
        assert!(is_in_check(&board, Color::White));
        board.set(sq("e4"), Some(Piece::WHITE_PAWN));
        assert!(!is_in_check(&board, Color::White));
    }

    #[test]
    fn bishop_and_queen_diagonals() {
        let board = board_with(&[("e1", Piece::WHITE_KING), ("a5", Piece::BLACK_BISHOP)]);
        assert!(is_in_check(&board, Color::White));
        let board = board_with(&[("e1", Piece::WHITE_KING), ("h4", Piece::BLACK_QUEEN)]);
        assert!(is_in_check(&board, Color::White));
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let mut board = Board::starting_position();
        board.set(sq("d3"), Some(Piece::BLACK_KNIGHT));
        assert!(is_in_check(&board, Color::White));
    }

    #[test]
    fn adjacent_king_attacks() {
        let board = board_with(&[("e1", Piece::WHITE_KING), ("e2", Piece::BLACK_KING)]);
        assert!(is_in_check(&board, Color::White));
        assert!(is_in_check(&board, Color::Black));
    }

    #[test]
    fn pawn_attacks_use_attacker_direction() {
        // A black pawn on d2 attacks e1 (it travels toward row 7).
        let board = board_with(&[("e1", Piece::WHITE_KING), ("d2", Piece::BLACK_PAWN)]);
        assert!(is_in_check(&board, Color::White));

        // A black pawn beside or behind the king does not.
        let board = board_with(&[("e2", Piece::WHITE_KING), ("d1", Piece::BLACK_PAWN)]);
        assert!(!is_in_check(&board, Color::White));

        // A white pawn on d7 attacks e8 (it travels toward row 0).
        let board = board_with(&[("e8", Piece::BLACK_KING), ("d7", Piece::WHITE_PAWN)]);
        assert!(is_in_check(&board, Color::Black));

        // Pawns never attack straight ahead.
        let board = board_with(&[("e8", Piece::BLACK_KING), ("e7", Piece::WHITE_PAWN)]);
        assert!(!is_in_check(&board, Color::Black));
    }

    #[test]
    fn square_attacked_by_color() {
        let board = Board::starting_position();
        assert!(is_square_attacked(&board, sq("f3"), Color::White));
        assert!(is_square_attacked(&board, sq("f6"), Color::Black));
        assert!(!is_square_attacked(&board, sq("e4"), Color::White));
    }
}
