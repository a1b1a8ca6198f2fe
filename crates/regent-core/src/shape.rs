//! Per-piece movement geometry and path clearance for sliding pieces.
//!
//! Every predicate here looks only at coordinates, except the pawn rule
//! (which depends on what stands in front of and beside the pawn) and
//! [`path_clear`]. None of them check who owns the destination square;
//! that is left to the legality layer.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Signed (row, col) displacement from `from` to `to`.
#[inline]
fn delta(from: Square, to: Square) -> (i32, i32) {
    (
        to.row() as i32 - from.row() as i32,
        to.col() as i32 - from.col() as i32,
    )
}

/// Same row or same column.
pub fn rook(from: Square, to: Square) -> bool {
    from.row() == to.row() || from.col() == to.col()
}

/// Equal, non-zero row and column distance.
pub fn bishop(from: Square, to: Square) -> bool {
    let (dr, dc) = delta(from, to);
    dr != 0 && dr.abs() == dc.abs()
}

/// Rook or bishop geometry.
pub fn queen(from: Square, to: Square) -> bool {
    rook(from, to) || bishop(from, to)
}

/// One step in any direction.
pub fn king(from: Square, to: Square) -> bool {
    let (dr, dc) = delta(from, to);
    dr.abs().max(dc.abs()) == 1
}

/// The L-shaped jump: two squares one way, one the other.
pub fn knight(from: Square, to: Square) -> bool {
    let (dr, dc) = delta(from, to);
    matches!((dr.abs(), dc.abs()), (2, 1) | (1, 2))
}

/// Pawn movement for a pawn of `color` standing on `from`.
///
/// Forward moves need an empty destination, and the two-square advance from
/// the home row also needs the square in between to be empty. Diagonal moves
/// are captures only: the destination must hold a piece of the other color
/// than the one on `from`.
pub fn pawn(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let dir = color.pawn_direction();
    let (dr, dc) = delta(from, to);

    if dc == 0 && board.is_empty(to) {
        if dr == dir {
            return true;
        }
        if from.row() == color.home_row() && dr == 2 * dir {
            return from.offset(dir, 0).is_some_and(|mid| board.is_empty(mid));
        }
    }

    if dc.abs() == 1 && dr == dir {
        return match (board.get(from), board.get(to)) {
            (Some(mover), Some(target)) => mover.color() != target.color(),
            _ => false,
        };
    }

    false
}

/// Return `true` if every square strictly between `from` and `to` is empty.
///
/// Steps one square at a time along the unit direction toward `to`. The
/// endpoints are never inspected. If `to` is not on a shared line the walk
/// leaves the board and the path is reported blocked.
pub fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let (dr, dc) = delta(from, to);
    let (step_r, step_c) = (dr.signum(), dc.signum());

    let mut current = from.offset(step_r, step_c);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        current = sq.offset(step_r, step_c);
    }
    false
}

/// Return `true` if `piece` on `from` may travel to `to`, including path
/// clearance for sliders. Destination ownership is not considered.
pub fn is_shape_valid(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    match piece.kind() {
        PieceKind::Rook => rook(from, to) && path_clear(board, from, to),
        PieceKind::Bishop => bishop(from, to) && path_clear(board, from, to),
        PieceKind::Queen => queen(from, to) && path_clear(board, from, to),
        PieceKind::Knight => knight(from, to),
        PieceKind::King => king(from, to),
        PieceKind::Pawn => pawn(board, from, to, piece.color()),
    }
}
