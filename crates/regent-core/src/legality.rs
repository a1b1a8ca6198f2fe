//! Full legality checks for a single proposed move.

use std::ops::Deref;

use crate::attacks;
use crate::board::Board;
use crate::color::Color;
use crate::error::IllegalMove;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::shape;
use crate::square::Square;

/// A move played onto the board that is taken back when the guard drops.
///
/// Both touched squares are restored to their prior contents on every exit
/// path, so callers never observe the board mid-simulation once the guard
/// is gone.
struct Simulation<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    moved: Option<Piece>,
    captured: Option<Piece>,
}

impl<'a> Simulation<'a> {
    fn play(board: &'a mut Board, from: Square, to: Square) -> Simulation<'a> {
        let moved = board.get(from);
        let captured = board.get(to);
        board.set(to, moved);
        board.set(from, None);
        Simulation {
            board,
            from,
            to,
            moved,
            captured,
        }
    }
}

impl Deref for Simulation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        self.board.set(self.from, self.moved);
        self.board.set(self.to, self.captured);
    }
}

/// Check whether `color` may move the piece on `(from_row, from_col)` to
/// `(to_row, to_col)`, reporting the first rule the move breaks.
///
/// The board is mutated while the resulting king safety is tested and is
/// identical to its prior state when this returns.
pub fn check_move(
    board: &mut Board,
    from_row: i32,
    from_col: i32,
    to_row: i32,
    to_col: i32,
    color: Color,
) -> Result<(), IllegalMove> {
    let (Some(from), Some(to)) = (
        Square::from_coords(from_row, from_col),
        Square::from_coords(to_row, to_col),
    ) else {
        return Err(IllegalMove::OutOfBounds);
    };
    check_squares(board, from, to, color)
}

/// [`check_move`] for already-validated squares.
pub fn check_squares(
    board: &mut Board,
    from: Square,
    to: Square,
    color: Color,
) -> Result<(), IllegalMove> {
    if from == to {
        return Err(IllegalMove::SameSquare);
    }

    let piece = board
        .get(from)
        .ok_or(IllegalMove::EmptySource { square: from })?;
    if piece.color() != color {
        return Err(IllegalMove::WrongColor {
            square: from,
            mover: color,
        });
    }

    if let Some(target) = board.get(to) {
        if target.color() == color {
            return Err(IllegalMove::OwnPieceAtTarget { square: to });
        }
        // Kings are mated, never taken.
        if target.kind() == PieceKind::King {
            return Err(IllegalMove::KingCapture { square: to });
        }
    }

    if !shape::is_shape_valid(board, piece, from, to) {
        return Err(IllegalMove::BadShape { from, to });
    }

    let simulation = Simulation::play(board, from, to);
    if attacks::is_in_check(&simulation, color) {
        return Err(IllegalMove::LeavesKingInCheck);
    }
    Ok(())
}

/// Return `true` if the move passes every check in [`check_move`].
pub fn is_legal(
    board: &mut Board,
    from_row: i32,
    from_col: i32,
    to_row: i32,
    to_col: i32,
    color: Color,
) -> bool {
    check_move(board, from_row, from_col, to_row, to_col, color).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn check(board: &mut Board, from: &str, to: &str, color: Color) -> Result<(), IllegalMove> {
        check_squares(board, sq(from), sq(to), color)
    }

    #[test]
    fn out_of_bounds_rejected() {
        let mut board = Board::starting_position();
        assert_eq!(
            check_move(&mut board, 6, 4, -1, 4, Color::White),
            Err(IllegalMove::OutOfBounds)
        );
        assert_eq!(
            check_move(&mut board, 8, 0, 7, 0, Color::White),
            Err(IllegalMove::OutOfBounds)
        );
        assert!(!is_legal(&mut board, 6, 4, 6, 8, Color::White));
    }

    #[test]
    fn same_square_rejected() {
        let mut board = Board::starting_position();
        assert_eq!(check(&mut board, "e2", "e2", Color::White), Err(IllegalMove::SameSquare));
    }

    #[test]
    fn empty_and_enemy_sources_rejected() {
        let mut board = Board::starting_position();
        assert!(matches!(
            check(&mut board, "e4", "e5", Color::White),
            Err(IllegalMove::EmptySource { .. })
        ));
        assert!(matches!(
            check(&mut board, "e7", "e5", Color::White),
            Err(IllegalMove::WrongColor { .. })
        ));
    }

    #[test]
    fn friendly_target_rejected() {
        let mut board = Board::starting_position();
        assert!(matches!(
            check(&mut board, "a1", "a2", Color::White),
            Err(IllegalMove::OwnPieceAtTarget { .. })
        ));
    }

    #[test]
    fn king_capture_rejected() {
        let mut board = Board::empty();
        board.set(sq("e1"), Some(Piece::WHITE_KING));
        board.set(sq("a8"), Some(Piece::WHITE_ROOK));
        board.set(sq("e8"), Some(Piece::BLACK_KING));
        assert_eq!(
            check(&mut board, "a8", "e8", Color::White),
            Err(IllegalMove::KingCapture { square: sq("e8") })
        );
    }

    #[test]
    fn bad_shape_and_blocked_path_rejected() {
        let mut board = Board::starting_position();
        assert!(matches!(
            check(&mut board, "b1", "d3", Color::White),
            Err(IllegalMove::BadShape { .. })
        ));
        assert!(matches!(
            check(&mut board, "c1", "a3", Color::White),
            Err(IllegalMove::BadShape { .. })
        ));
        assert!(matches!(
            check(&mut board, "e2", "e5", Color::White),
            Err(IllegalMove::BadShape { .. })
        ));
    }

    #[test]
    fn pinned_piece_cannot_expose_king() {
        let mut board = Board::empty();
        board.set(sq("e1"), Some(Piece::WHITE_KING));
        board.set(sq("e2"), Some(Piece::WHITE_ROOK));
        board.set(sq("e8"), Some(Piece::BLACK_ROOK));
        board.set(sq("a8"), Some(Piece::BLACK_KING));
        assert_eq!(
            check(&mut board, "e2", "d2", Color::White),
            Err(IllegalMove::LeavesKingInCheck)
        );
        // Sliding along the pin line stays legal, including the capture.
        assert_eq!(check(&mut board, "e2", "e5", Color::White), Ok(()));
        assert_eq!(check(&mut board, "e2", "e8", Color::White), Ok(()));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let mut board = Board::empty();
        board.set(sq("e1"), Some(Piece::WHITE_KING));
        board.set(sq("d8"), Some(Piece::BLACK_ROOK));
        board.set(sq("a8"), Some(Piece::BLACK_KING));
        assert_eq!(
            check(&mut board, "e1", "d1", Color::White),
            Err(IllegalMove::LeavesKingInCheck)
        );
        assert_eq!(check(&mut board, "e1", "f1", Color::White), Ok(()));
    }

    #[test]
    fn simulation_restores_board() {
        let mut board = Board::empty();
        board.set(sq("e1"), Some(Piece::WHITE_KING));
        board.set(sq("e2"), Some(Piece::WHITE_ROOK));
        board.set(sq("e8"), Some(Piece::BLACK_ROOK));
        board.set(sq("d3"), Some(Piece::BLACK_PAWN));
        let before = board;

        // Rejected by the king-safety step.
        assert!(check(&mut board, "e2", "d2", Color::White).is_err());
        assert_eq!(board, before);

        // Accepted capture along the pin line.
        assert!(check(&mut board, "e2", "e8", Color::White).is_ok());
        assert_eq!(board, before);
    }

    #[test]
    fn legal_opening_moves() {
        let mut board = Board::starting_position();
        assert!(is_legal(&mut board, 6, 4, 4, 4, Color::White));
        assert!(is_legal(&mut board, 7, 6, 5, 5, Color::White));
        assert!(is_legal(&mut board, 1, 3, 3, 3, Color::Black));
        assert!(!is_legal(&mut board, 6, 4, 3, 4, Color::White));
    }
}
