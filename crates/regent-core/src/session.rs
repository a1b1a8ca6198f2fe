//! A single game in progress: board, side to move, scores, and game-over state.

use std::fmt;

use tracing::{debug, info};

use crate::attacks;
use crate::board::{Board, CodeGrid};
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::{EncodingError, IllegalMove, MoveError};
use crate::legality;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Material collected by each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores {
    /// Points credited to White.
    pub white: u32,
    /// Points credited to Black.
    pub black: u32,
}

impl Scores {
    fn credit(&mut self, color: Color, points: u32) {
        match color {
            Color::White => self.white += points,
            Color::Black => self.black += points,
        }
    }
}

impl fmt::Display for Scores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.white, self.black)
    }
}

/// Whether the side to move can continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate {
        /// The side that delivered mate.
        winner: Color,
    },
    Stalemate,
}

impl GameStatus {
    /// Return `true` for checkmate and stalemate.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate {}", winner.name()),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move that was played.
    pub mv: Move,
    /// The piece that moved, as it stood before moving.
    pub moved: Piece,
    /// The piece removed from the destination, if any.
    pub captured: Option<Piece>,
    /// Whether the moving pawn was replaced by a queen.
    pub promoted: bool,
    /// Status of the opponent after the move.
    pub status: GameStatus,
}

/// The complete mutable state of one game.
///
/// Every query that decides legality temporarily plays moves on the board
/// and takes them back, so even read-style queries need `&mut self`.
/// Independent games need independent sessions.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    turn: Color,
    game_over: bool,
    scores: Scores,
}

impl GameSession {
    /// Create a session at the starting position with White to move.
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
            turn: Color::White,
            game_over: false,
            scores: Scores::default(),
        }
    }

    /// Restore the starting position, White to move, scores zeroed.
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("game reset");
    }

    /// Return the current board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Return `true` if White is to move.
    #[inline]
    pub fn is_white_turn(&self) -> bool {
        self.turn == Color::White
    }

    /// Return `true` once a move has ended the game.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Return both sides' scores.
    #[inline]
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Snapshot the board in the host grid encoding.
    pub fn board_state(&self) -> CodeGrid {
        self.board.to_codes()
    }

    /// Replace the board and side to move, and clear the game-over flag.
    ///
    /// The grid is decoded before anything changes; on error the session is
    /// untouched. Scores are kept. The position is not checked for legality.
    pub fn set_board_state(
        &mut self,
        grid: &CodeGrid,
        white_to_move: bool,
    ) -> Result<(), EncodingError> {
        let board = Board::from_codes(grid)?;
        let turn = if white_to_move { Color::White } else { Color::Black };
        self.set_board(board, turn);
        Ok(())
    }

    /// Typed counterpart of [`set_board_state`](Self::set_board_state).
    pub fn set_board(&mut self, board: Board, turn: Color) {
        self.board = board;
        self.turn = turn;
        self.game_over = false;
        debug!(%turn, "board state loaded");
    }

    /// Overwrite a square with the piece encoded by `code`.
    ///
    /// This is a direct state override: no legality check and no score credit.
    /// Code `0` clears the square.
    pub fn promote_pawn(&mut self, row: i32, col: i32, code: i32) -> Result<(), EncodingError> {
        let sq = Square::from_coords(row, col).ok_or(EncodingError::OffBoard { row, col })?;
        let piece = Piece::from_code(code)?;
        self.board.set(sq, piece);
        debug!(square = %sq, code, "square overridden");
        Ok(())
    }

    /// Return `true` if the side to move is in check.
    pub fn is_in_check(&self) -> bool {
        attacks::is_in_check(&self.board, self.turn)
    }

    /// Return `true` if `color`'s king is attacked.
    pub fn is_color_in_check(&self, color: Color) -> bool {
        attacks::is_in_check(&self.board, color)
    }

    /// Return `true` if `color` may make the given move on the current board.
    ///
    /// The side to move is not consulted.
    pub fn is_legal(
        &mut self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
        color: Color,
    ) -> bool {
        legality::is_legal(&mut self.board, from_row, from_col, to_row, to_col, color)
    }

    /// Attempt a move for the side to move, given as host coordinates.
    pub fn perform_move(
        &mut self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> Result<MoveOutcome, MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }
        let (Some(from), Some(to)) = (
            Square::from_coords(from_row, from_col),
            Square::from_coords(to_row, to_col),
        ) else {
            debug!(from_row, from_col, to_row, to_col, "move rejected: off the board");
            return Err(IllegalMove::OutOfBounds.into());
        };
        self.play(Move::new(from, to))
    }

    /// Boolean form of [`perform_move`](Self::perform_move): `true` if the move was played.
    pub fn move_piece(&mut self, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> bool {
        self.perform_move(from_row, from_col, to_row, to_col).is_ok()
    }

    /// Attempt a move for the side to move.
    ///
    /// On success the piece is moved, any capture is credited to the mover,
    /// a pawn reaching the far row becomes a queen (crediting its value), and
    /// the opponent's status is evaluated. The turn passes to the opponent
    /// unless the game ended. On failure nothing changes.
    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }

        let (from, to) = (mv.from(), mv.to());
        let mover = self.turn;
        if let Err(reason) = legality::check_squares(&mut self.board, from, to, mover) {
            debug!(%mv, %reason, "move rejected");
            return Err(reason.into());
        }

        let moved = self
            .board
            .get(from)
            .ok_or(IllegalMove::EmptySource { square: from })?;
        let captured = self.board.get(to);

        self.board.set(to, Some(moved));
        self.board.set(from, None);

        if let Some(victim) = captured {
            self.scores.credit(mover, Board::piece_value(Some(victim)).unsigned_abs());
        }

        let promoted = moved.kind() == PieceKind::Pawn && to.row() == mover.promotion_row();
        if promoted {
            let queen = Piece::new(PieceKind::Queen, mover);
            self.board.set(to, Some(queen));
            self.scores.credit(mover, PieceKind::Queen.value());
        }

        let opponent = mover.flip();
        let status = self.evaluate(opponent);
        if status.is_terminal() {
            self.game_over = true;
            info!(%mv, %status, "game over");
        } else {
            self.turn = opponent;
        }

        debug!(%mv, captured = ?captured, promoted, "move played");
        Ok(MoveOutcome {
            mv,
            moved,
            captured,
            promoted,
            status,
        })
    }

    /// Return `true` if `color` is in check and has no legal move.
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_color_in_check(color) && !self.has_legal_move(color)
    }

    /// Return `true` if `color` is not in check and has no legal move.
    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_color_in_check(color) && !self.has_legal_move(color)
    }

    /// Status of the side whose move it is, or of the side that was
    /// mated or stalemated if the game is over.
    pub fn status(&mut self) -> GameStatus {
        let side = if self.game_over { self.turn.flip() } else { self.turn };
        self.evaluate(side)
    }

    fn evaluate(&mut self, color: Color) -> GameStatus {
        if self.has_legal_move(color) {
            GameStatus::Ongoing
        } else if self.is_color_in_check(color) {
            GameStatus::Checkmate {
                winner: color.flip(),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    /// Return `true` if any (origin, destination) pair is legal for `color`.
    ///
    /// Probes every square holding a `color` piece against all 64
    /// destinations, stopping at the first legal one.
    pub fn has_legal_move(&mut self, color: Color) -> bool {
        for from in Square::all() {
            if !self.board.get(from).is_some_and(|p| p.color() == color) {
                continue;
            }
            for to in Square::all() {
                if legality::check_squares(&mut self.board, from, to, color).is_ok() {
                    return true;
                }
            }
        }
        false
    }

    /// Collect every legal move for `color` by the same exhaustive probe.
    pub fn legal_moves(&mut self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for from in Square::all() {
            if !self.board.get(from).is_some_and(|p| p.color() == color) {
                continue;
            }
            for to in Square::all() {
                if legality::check_squares(&mut self.board, from, to, color).is_ok() {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn play(session: &mut GameSession, text: &str) -> Result<MoveOutcome, MoveError> {
        session.play(text.parse().unwrap())
    }

    #[test]
    fn new_session_state() {
        let session = GameSession::new();
        assert!(session.is_white_turn());
        assert!(!session.is_game_over());
        assert_eq!(session.scores(), Scores::default());
        assert_eq!(*session.board(), Board::starting_position());
    }

    #[test]
    fn accepted_move_flips_turn() {
        let mut session = GameSession::new();
        let outcome = play(&mut session, "g1f3").unwrap();
        assert_eq!(outcome.moved, Piece::WHITE_KNIGHT);
        assert_eq!(outcome.captured, None);
        assert_eq!(outcome.status, GameStatus::Ongoing);
        assert_eq!(session.turn(), Color::Black);
    }

    #[test]
    fn wrong_side_rejected() {
        let mut session = GameSession::new();
        assert!(matches!(
            play(&mut session, "e7e5"),
            Err(MoveError::Illegal(IllegalMove::WrongColor { .. }))
        ));
        assert!(session.is_white_turn());
    }

    #[test]
    fn off_board_coordinates_rejected() {
        let mut session = GameSession::new();
        assert_eq!(
            session.perform_move(6, 4, -2, 4),
            Err(MoveError::Illegal(IllegalMove::OutOfBounds))
        );
        assert!(!session.move_piece(9, 9, 4, 4));
    }

    #[test]
    fn capture_credits_mover() {
        let mut session = GameSession::new();
        play(&mut session, "e2e4").unwrap();
        play(&mut session, "d7d5").unwrap();
        let outcome = play(&mut session, "e4d5").unwrap();
        assert_eq!(outcome.captured, Some(Piece::BLACK_PAWN));
        assert_eq!(session.scores(), Scores { white: 1, black: 0 });

        play(&mut session, "d8d5").unwrap();
        assert_eq!(session.scores(), Scores { white: 1, black: 1 });
    }

    #[test]
    fn promotion_becomes_queen_and_credits_nine() {
        let mut board = Board::empty();
        board.set(sq("a7"), Some(Piece::WHITE_PAWN));
        board.set(sq("e1"), Some(Piece::WHITE_KING));
        board.set(sq("h5"), Some(Piece::BLACK_KING));
        let mut session = GameSession::new();
        session.set_board(board, Color::White);

        let outcome = play(&mut session, "a7a8").unwrap();
        assert!(outcome.promoted);
        assert_eq!(session.board().get(sq("a8")), Some(Piece::WHITE_QUEEN));
        assert_eq!(session.scores().white, 9);
    }

    #[test]
    fn capture_promotion_credits_both() {
        let mut board = Board::empty();
        board.set(sq("b2"), Some(Piece::BLACK_PAWN));
        board.set(sq("a1"), Some(Piece::WHITE_ROOK));
        board.set(sq("h1"), Some(Piece::WHITE_KING));
        board.set(sq("e8"), Some(Piece::BLACK_KING));
        let mut session = GameSession::new();
        session.set_board(board, Color::Black);

        play(&mut session, "b2a1").unwrap();
        assert_eq!(session.board().get(sq("a1")), Some(Piece::BLACK_QUEEN));
        assert_eq!(session.scores(), Scores { white: 0, black: 5 + 9 });
    }

    #[test]
    fn promote_pawn_overrides_without_credit() {
        let mut session = GameSession::new();
        session.promote_pawn(0, 0, 4).unwrap();
        assert_eq!(session.board().get(sq("a8")), Some(Piece::WHITE_QUEEN));
        assert_eq!(session.scores(), Scores::default());
        assert!(session.promote_pawn(8, 0, 4).is_err());
        assert!(session.promote_pawn(0, 0, -7).is_err());
        assert_eq!(session.board().get(sq("a8")), Some(Piece::WHITE_QUEEN));
    }

    #[test]
    fn promote_pawn_zero_clears_square() {
        let mut session = GameSession::new();
        session.promote_pawn(1, 0, 0).unwrap();
        assert_eq!(session.board().get(sq("a7")), None);
        assert_eq!(session.board_state()[1][0], 0);
        assert_eq!(session.scores(), Scores::default());
    }

    #[test]
    fn set_board_state_rejects_bad_grid_atomically() {
        let mut session = GameSession::new();
        let mut grid = [[0; 8]; 8];
        grid[4][4] = 42;
        assert!(session.set_board_state(&grid, false).is_err());
        assert_eq!(*session.board(), Board::starting_position());
        assert!(session.is_white_turn());
    }

    #[test]
    fn game_over_blocks_moves() {
        let mut session = GameSession::new();
        for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            play(&mut session, mv).unwrap();
        }
        assert!(session.is_game_over());
        assert_eq!(play(&mut session, "a2a3"), Err(MoveError::GameOver));
        assert_eq!(
            session.status(),
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let mut session = GameSession::new();
        assert_eq!(session.legal_moves(Color::White).len(), 20);
        assert_eq!(session.legal_moves(Color::Black).len(), 20);
        assert_eq!(*session.board(), Board::starting_position());
    }

    #[test]
    fn status_display() {
        assert_eq!(GameStatus::Ongoing.to_string(), "ongoing");
        assert_eq!(
            GameStatus::Checkmate {
                winner: Color::White
            }
            .to_string(),
            "checkmate white"
        );
        assert_eq!(GameStatus::Stalemate.to_string(), "stalemate");
        assert_eq!(Scores { white: 3, black: 10 }.to_string(), "3 10");
    }
}
