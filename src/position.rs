// This file is part of the gambit library.
// Copyright (C) 2024-2026 The gambit developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use core::{error::Error, fmt};

use bitflags::bitflags;

use crate::{
    attacks,
    bitboard::Bitboard,
    board::Board,
    catalog::Mode,
    color::Color,
    m::{Move, MoveList},
    role::Role,
    square::Square,
    types::{Piece, Status},
};

bitflags! {
    /// Reasons for a [`Board`] not being acceptable as a [`Position`].
    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
    pub struct PositionErrorKinds: u32 {
        /// There are no pieces on the board.
        const EMPTY_BOARD = 1 << 0;

        /// A king is required for each side.
        const MISSING_KING = 1 << 1;

        /// There can be at most one king of each color.
        const TOO_MANY_KINGS = 1 << 2;

        /// No pawns on the first or last row. They would have promoted.
        const PAWNS_ON_BACKRANK = 1 << 3;

        /// A piece type that is not part of the catalog of the mode.
        const FOREIGN_ROLE = 1 << 4;

        /// More than 16 pieces of one color.
        const TOO_MANY_PIECES = 1 << 5;

        /// The en passant square is not behind a pawn that could just have
        /// double-stepped past it.
        const INVALID_EP_SQUARE = 1 << 6;

        /// The side that is not to move is in check.
        const OPPOSITE_CHECK = 1 << 7;
    }
}

const ERROR_DESCRIPTIONS: [(PositionErrorKinds, &str); 8] = [
    (PositionErrorKinds::EMPTY_BOARD, "empty board"),
    (PositionErrorKinds::MISSING_KING, "missing king"),
    (PositionErrorKinds::TOO_MANY_KINGS, "too many kings"),
    (PositionErrorKinds::PAWNS_ON_BACKRANK, "pawns on backrank"),
    (PositionErrorKinds::FOREIGN_ROLE, "piece type not in play"),
    (PositionErrorKinds::TOO_MANY_PIECES, "too many pieces"),
    (PositionErrorKinds::INVALID_EP_SQUARE, "invalid en passant square"),
    (PositionErrorKinds::OPPOSITE_CHECK, "opposite check"),
];

/// Error when trying to create a [`Position`] from an illegal setup.
///
/// The partially validated position is kept, so that some checks can be
/// waived.
#[derive(Clone)]
pub struct PositionError {
    errors: PositionErrorKinds,
    pos: Position,
}

impl PositionError {
    fn ignore(mut self, ignore: PositionErrorKinds) -> Result<Position, PositionError> {
        self.errors -= ignore;
        if self.errors.is_empty() {
            Ok(self.pos)
        } else {
            Err(self)
        }
    }

    /// Accepts a board without a king, e.g. to study a piece on its own.
    /// A side without a king is never in check, and so can never be
    /// checkmated.
    ///
    /// # Errors
    ///
    /// Returns the error again if there are other problems.
    pub fn ignore_missing_king(self) -> Result<Position, PositionError> {
        self.ignore(PositionErrorKinds::MISSING_KING)
    }

    /// Accepts a position where the side that is not to move is in check.
    ///
    /// # Errors
    ///
    /// Returns the error again if there are other problems.
    pub fn ignore_impossible_check(self) -> Result<Position, PositionError> {
        self.ignore(PositionErrorKinds::OPPOSITE_CHECK)
    }

    pub fn kinds(&self) -> PositionErrorKinds {
        self.errors
    }
}

impl fmt::Debug for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionError")
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("illegal position")?;
        let mut first = true;
        for (kind, description) in ERROR_DESCRIPTIONS {
            if self.errors.contains(kind) {
                f.write_str(if first { ": " } else { ", " })?;
                f.write_str(description)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl Error for PositionError {}

/// Why a move was refused.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum IllegalMoveReason {
    /// The game has ended.
    GameOver,
    /// There is no piece on the origin square.
    NoPiece,
    /// The piece on the origin square belongs to the side not to move.
    WrongTurn,
    /// The piece cannot move there, or the move would leave its own king in
    /// check.
    Illegal,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IllegalMoveReason::GameOver => "game is over",
            IllegalMoveReason::NoPiece => "no piece on origin square",
            IllegalMoveReason::WrongTurn => "not the turn of that piece",
            IllegalMoveReason::Illegal => "not a legal destination",
        })
    }
}

/// Error when trying to play an illegal move.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct PlayError {
    pub from: Square,
    pub to: Square,
    pub reason: IllegalMoveReason,
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal move {}{}: {}", self.from, self.to, self.reason)
    }
}

impl Error for PlayError {}

/// A game position: the board, the side to move, the en passant square
/// and the result so far.
///
/// All moves go through [`Position::play()`] or
/// [`Position::play_unchecked()`], which keep at most one king per side on
/// the board. For an undo history use [`Game`](crate::Game).
///
/// # Examples
///
/// ```
/// use gambit::{Mode, Position, Square};
///
/// let mut pos = Position::new(Mode::Standard);
/// assert_eq!(pos.legal_moves(Square::E2).count(), 2);
///
/// pos.play(Square::E2, Square::E4, None)?;
/// assert_eq!(pos.ep_square(), Some(Square::E3));
/// # Ok::<_, gambit::PlayError>(())
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Position {
    board: Board,
    mode: Mode,
    turn: Color,
    move_count: u32,
    ep_square: Option<Square>,
    status: Status,
}

impl Default for Position {
    fn default() -> Position {
        Position::new(Mode::Standard)
    }
}

impl Position {
    /// The starting position of the given mode, White to move.
    pub fn new(mode: Mode) -> Position {
        Position {
            board: Board::starting(mode),
            mode,
            turn: Color::White,
            move_count: 0,
            ep_square: None,
            status: Status::InProgress,
        }
    }

    /// Validates a hand-assembled board.
    ///
    /// The status of the resulting position (checkmate, stalemate) is
    /// evaluated for `turn` to move.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError`] listing every problem found. Some of them
    /// can be waived, see [`PositionError::ignore_missing_king()`] and
    /// [`PositionError::ignore_impossible_check()`].
    pub fn from_setup(
        board: Board,
        turn: Color,
        ep_square: Option<Square>,
        mode: Mode,
    ) -> Result<Position, PositionError> {
        let mut pos = Position {
            board,
            mode,
            turn,
            move_count: 0,
            ep_square,
            status: Status::InProgress,
        };

        let errors = pos.validate();
        if errors.contains(PositionErrorKinds::TOO_MANY_PIECES) {
            // Too many pieces could overflow the move lists.
            return Err(PositionError { errors, pos });
        }

        pos.status = pos.evaluate_status();

        if errors.is_empty() {
            Ok(pos)
        } else {
            Err(PositionError { errors, pos })
        }
    }

    fn validate(&self) -> PositionErrorKinds {
        let mut errors = PositionErrorKinds::empty();
        let board = &self.board;

        if board.is_empty() {
            errors |= PositionErrorKinds::EMPTY_BOARD;
        }

        for color in Color::ALL {
            match board.by_piece(color.king()).count() {
                0 => errors |= PositionErrorKinds::MISSING_KING,
                1 => (),
                _ => errors |= PositionErrorKinds::TOO_MANY_KINGS,
            }
        }

        if board.material().any(|&n| n > 16) {
            errors |= PositionErrorKinds::TOO_MANY_PIECES;
        }

        for (sq, piece) in board.pieces() {
            if piece.role == Role::Pawn && is_last_row(sq) {
                errors |= PositionErrorKinds::PAWNS_ON_BACKRANK;
            }
            if !self.mode.contains(piece.role) {
                errors |= PositionErrorKinds::FOREIGN_ROLE;
            }
        }

        if let Some(ep_square) = self.ep_square {
            if !self.is_plausible_ep_square(ep_square) {
                errors |= PositionErrorKinds::INVALID_EP_SQUARE;
            }
        }

        if attacks::is_in_check(board, !self.turn) {
            errors |= PositionErrorKinds::OPPOSITE_CHECK;
        }

        errors
    }

    /// The last move must have been a double-step of an enemy pawn over
    /// `ep_square`.
    fn is_plausible_ep_square(&self, ep_square: Square) -> bool {
        let them = !self.turn;
        let skipped_row = them.pawn_row() as i8 + them.forward();
        if ep_square.row() as i8 != skipped_row {
            return false;
        }
        let origin = ep_square.offset(-them.forward(), 0);
        let pawn = ep_square.offset(them.forward(), 0);
        self.board.piece_at(ep_square).is_none()
            && origin.is_some_and(|sq| self.board.piece_at(sq).is_none())
            && pawn.is_some_and(|sq| self.board.piece_at(sq) == Some(them.pawn()))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Number of moves (plies) played since the start.
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// The square a pawn skipped with a double-step on the immediately
    /// preceding move.
    #[inline]
    pub fn ep_square(&self) -> Option<Square> {
        self.ep_square
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// The side that delivered checkmate, if any.
    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.status.winner()
    }

    /// Moves of the piece on `sq` that follow its movement pattern, without
    /// regard to check or whose turn it is.
    pub fn pseudo_legal_moves(&self, sq: Square) -> Bitboard {
        attacks::pseudo_legal_moves(&self.board, sq, self.ep_square)
    }

    /// Legal destinations of the piece on `sq`.
    ///
    /// Empty if `sq` is empty or holds a piece of the side not to move.
    /// Every candidate is tried on a scratch board and dropped if it would
    /// leave the own king in check.
    pub fn legal_moves(&self, sq: Square) -> Bitboard {
        match self.board.piece_at(sq) {
            Some(piece) if piece.color == self.turn => (),
            _ => return Bitboard::EMPTY,
        }

        self.pseudo_legal_moves(sq)
            .into_iter()
            .filter(|&to| {
                let scratch = attacks::scratch_move(&self.board, sq, to, self.ep_square);
                !attacks::is_in_check(&scratch, self.turn)
            })
            .collect()
    }

    /// Whether the king of `color` is attacked. `false` if it has no king.
    pub fn is_in_check(&self, color: Color) -> bool {
        attacks::is_in_check(&self.board, color)
    }

    /// Whether the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.is_in_check(self.turn)
    }

    /// Enemy pieces giving check to the side to move.
    pub fn checkers(&self) -> Bitboard {
        attacks::checkers(&self.board, self.turn)
    }

    /// Whether any piece of the side to move has a legal move.
    pub fn has_legal_moves(&self) -> bool {
        self.board
            .by_color(self.turn)
            .into_iter()
            .any(|sq| self.legal_moves(sq).any())
    }

    /// The side to move is in check and has no legal move.
    pub fn is_checkmate(&self) -> bool {
        self.is_check() && !self.has_legal_moves()
    }

    /// The side to move is not in check but has no legal move.
    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && !self.has_legal_moves()
    }

    /// Every pseudo-legal move of `color`, regardless of whose turn it is.
    ///
    /// Pawn moves to the last row carry the default promotion of the mode.
    pub fn all_possible_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        let default_promotion = [self.mode.default_promotion()];
        for from in self.board.by_color(color) {
            self.push_moves(&mut moves, from, self.pseudo_legal_moves(from), &default_promotion);
        }
        moves
    }

    /// Every square `color` could move a piece to, e.g. to highlight
    /// threatened squares.
    pub fn threatened_squares(&self, color: Color) -> Bitboard {
        attacks::attacked_by(&self.board, color, self.ep_square)
    }

    /// Every legal move of the side to move, with one move for each
    /// allowed promotion.
    pub fn legal_move_list(&self) -> MoveList {
        let mut moves = MoveList::new();
        for from in self.board.by_color(self.turn) {
            self.push_moves(
                &mut moves,
                from,
                self.legal_moves(from),
                self.mode.promotion_roles(),
            );
        }
        moves
    }

    fn push_moves(&self, moves: &mut MoveList, from: Square, targets: Bitboard, promotions: &[Role]) {
        let Some(role) = self.board.role_at(from) else {
            return;
        };
        for to in targets {
            if role == Role::Pawn && is_last_row(to) {
                for &promotion in promotions {
                    moves.push(self.describe(role, from, to, Some(promotion)));
                }
            } else {
                moves.push(self.describe(role, from, to, None));
            }
        }
    }

    fn describe(&self, role: Role, from: Square, to: Square, promotion: Option<Role>) -> Move {
        if role == Role::Pawn
            && Some(to) == self.ep_square
            && from.col() != to.col()
            && self.board.piece_at(to).is_none()
        {
            Move::EnPassant { from, to }
        } else {
            Move::Normal {
                role,
                from,
                capture: self.board.role_at(to),
                to,
                promotion: if role == Role::Pawn && is_last_row(to) {
                    Some(self.mode.promotion_role(promotion))
                } else {
                    None
                },
            }
        }
    }

    /// Tests a move for legality.
    pub fn is_legal(&self, m: Move) -> bool {
        !self.is_game_over()
            && self.board.color_at(m.from()) == Some(self.turn)
            && self.board.role_at(m.from()) == Some(m.role())
            && self.legal_moves(m.from()).contains(m.to())
            && m.is_en_passant() == (self.describe(m.role(), m.from(), m.to(), None).is_en_passant())
    }

    /// Validates `from`-`to` and describes it as a [`Move`].
    ///
    /// A pawn reaching the last row is promoted to `promotion` if the mode
    /// allows it, otherwise to [`Mode::default_promotion()`]. `promotion`
    /// is ignored for other moves.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError`] if the game is over, `from` is empty or holds
    /// a piece of the side not to move, or `to` is not a legal destination.
    pub fn to_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<Role>,
    ) -> Result<Move, PlayError> {
        let refuse = |reason| PlayError { from, to, reason };

        if self.is_game_over() {
            return Err(refuse(IllegalMoveReason::GameOver));
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(refuse(IllegalMoveReason::NoPiece))?;
        if piece.color != self.turn {
            return Err(refuse(IllegalMoveReason::WrongTurn));
        }
        if !self.legal_moves(from).contains(to) {
            return Err(refuse(IllegalMoveReason::Illegal));
        }

        Ok(self.describe(piece.role, from, to, promotion))
    }

    /// Validates and plays a move.
    ///
    /// # Errors
    ///
    /// See [`Position::to_move()`]. The position is unchanged on error.
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Role>,
    ) -> Result<Move, PlayError> {
        let m = self.to_move(from, to, promotion)?;
        self.play_unchecked(m);
        Ok(m)
    }

    /// Plays a move. The move must be legal, e.g. taken from
    /// [`Position::legal_move_list()`] or checked with
    /// [`Position::is_legal()`].
    ///
    /// Resets the en passant square, flips the turn, counts the move and
    /// evaluates checkmate and stalemate for the side now to move.
    pub fn play_unchecked(&mut self, m: Move) {
        let color = self.turn;

        match m {
            Move::Normal {
                role,
                from,
                to,
                promotion,
                ..
            } => {
                self.ep_square = if role == Role::Pawn && from.row().abs_diff(to.row()) == 2 {
                    Square::from_coords((from.row() + to.row()) as i8 / 2, from.col() as i8)
                } else {
                    None
                };

                self.board.relocate(from, to);

                if role == Role::Pawn && is_last_row(to) {
                    let promoted = self.mode.promotion_role(promotion);
                    self.board.set_piece_at(to, Piece { color, role: promoted });
                }
            }
            Move::EnPassant { from, to } => {
                if let Some(victim) = m.en_passant_victim() {
                    self.board.remove_piece_at(victim);
                }
                self.board.relocate(from, to);
                self.ep_square = None;
            }
        }

        self.turn = !color;
        self.move_count += 1;
        self.status = self.evaluate_status();
    }

    fn evaluate_status(&self) -> Status {
        if self.has_legal_moves() {
            Status::InProgress
        } else if self.is_check() {
            Status::Checkmate {
                winner: !self.turn,
            }
        } else {
            Status::Stalemate
        }
    }

    /// Drops a terminal status after restoring an earlier position.
    pub(crate) fn reopen(&mut self) {
        self.status = Status::InProgress;
    }
}

fn is_last_row(sq: Square) -> bool {
    sq.row() == 0 || sq.row() == 7
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(pieces: &[(Square, Piece)], turn: Color) -> Result<Position, PositionError> {
        let mut board = Board::empty();
        for &(sq, piece) in pieces {
            board.set_piece_at(sq, piece);
        }
        Position::from_setup(board, turn, None, Mode::Standard)
    }

    #[test]
    fn test_start_position() {
        let pos = Position::default();
        assert_eq!(pos.turn(), Color::White);
        assert_eq!(pos.status(), Status::InProgress);
        assert_eq!(pos.legal_move_list().len(), 20);
        assert_eq!(pos.all_possible_moves(Color::Black).len(), 20);
    }

    #[test]
    fn test_legal_moves_of_opponent_piece_is_empty() {
        let pos = Position::default();
        assert_eq!(pos.legal_moves(Square::E7), Bitboard::EMPTY);
        assert_eq!(pos.legal_moves(Square::E4), Bitboard::EMPTY);
    }

    #[test]
    fn test_pinned_piece() {
        let pos = setup(
            &[
                (Square::E1, Color::White.king()),
                (Square::E2, Color::White.rook()),
                (Square::E8, Color::Black.rook()),
                (Square::A8, Color::Black.king()),
            ],
            Color::White,
        )
        .expect("valid");
        let moves = pos.legal_moves(Square::E2);
        assert!(moves.into_iter().all(|sq| sq.col() == 4));
        assert!(moves.contains(Square::E8));
        assert_eq!(moves.count(), 6);
    }

    #[test]
    fn test_king_cannot_step_into_check() {
        let pos = setup(
            &[
                (Square::E1, Color::White.king()),
                (Square::D8, Color::Black.rook()),
                (Square::A8, Color::Black.king()),
            ],
            Color::White,
        )
        .expect("valid");
        let moves = pos.legal_moves(Square::E1);
        assert!(!moves.contains(Square::D1));
        assert!(!moves.contains(Square::D2));
        assert!(moves.contains(Square::F2));
    }

    #[test]
    fn test_setup_errors() {
        let err = setup(&[(Square::E1, Color::White.king())], Color::White).unwrap_err();
        assert_eq!(err.kinds(), PositionErrorKinds::MISSING_KING);

        let err = setup(
            &[
                (Square::E1, Color::White.king()),
                (Square::E8, Color::Black.king()),
                (Square::A8, Color::White.pawn()),
                (Square::D1, Color::White.rook()),
                (Square::D8, Role::Jumper.of(Color::Black)),
            ],
            Color::Black,
        )
        .unwrap_err();
        assert_eq!(
            err.kinds(),
            PositionErrorKinds::PAWNS_ON_BACKRANK | PositionErrorKinds::FOREIGN_ROLE
        );

        let err = Position::from_setup(Board::empty(), Color::White, None, Mode::Fairy).unwrap_err();
        assert!(err.kinds().contains(PositionErrorKinds::EMPTY_BOARD));
    }

    #[test]
    fn test_opposite_check() {
        let err = setup(
            &[
                (Square::E1, Color::White.king()),
                (Square::E8, Color::Black.king()),
                (Square::E4, Color::White.rook()),
            ],
            Color::White,
        )
        .unwrap_err();
        assert_eq!(err.kinds(), PositionErrorKinds::OPPOSITE_CHECK);
        let pos = err.ignore_impossible_check().expect("only opposite check");
        assert!(pos.is_in_check(Color::Black));
    }

    #[test]
    fn test_ep_square_validation() {
        let mut board = Board::new();
        board.relocate(Square::E2, Square::E4);
        assert!(Position::from_setup(board.clone(), Color::Black, Some(Square::E3), Mode::Standard).is_ok());
        let err = Position::from_setup(board, Color::White, Some(Square::E3), Mode::Standard)
            .unwrap_err();
        assert_eq!(err.kinds(), PositionErrorKinds::INVALID_EP_SQUARE);
    }

    #[test]
    fn test_play_refusals() {
        let mut pos = Position::default();
        let err = pos.play(Square::E4, Square::E5, None).unwrap_err();
        assert_eq!(err.reason, IllegalMoveReason::NoPiece);
        let err = pos.play(Square::E7, Square::E5, None).unwrap_err();
        assert_eq!(err.reason, IllegalMoveReason::WrongTurn);
        let err = pos.play(Square::E2, Square::E5, None).unwrap_err();
        assert_eq!(err.reason, IllegalMoveReason::Illegal);
        let err = pos.play(Square::A1, Square::A3, None).unwrap_err();
        assert_eq!(err.reason, IllegalMoveReason::Illegal);
        assert_eq!(pos, Position::default());
    }

    #[test]
    fn test_ep_square_cleared_by_any_move() {
        let mut pos = Position::default();
        pos.play(Square::E2, Square::E4, None).expect("legal");
        assert_eq!(pos.ep_square(), Some(Square::E3));
        pos.play(Square::G8, Square::F6, None).expect("legal");
        assert_eq!(pos.ep_square(), None);
        pos.play(Square::D2, Square::D3, None).expect("legal");
        assert_eq!(pos.ep_square(), None);
    }

    #[test]
    fn test_stalemate() {
        let pos = setup(
            &[
                (Square::H8, Color::Black.king()),
                (Square::F7, Color::White.king()),
                (Square::G6, Color::White.queen()),
            ],
            Color::Black,
        )
        .expect("valid");
        assert!(pos.is_stalemate());
        assert!(!pos.is_checkmate());
        assert_eq!(pos.status(), Status::Stalemate);
        assert_eq!(pos.winner(), None);
    }

    #[test]
    fn test_error_display() {
        let err = setup(&[], Color::White).unwrap_err();
        let mut buf = arrayvec::ArrayString::<64>::new();
        core::fmt::write(&mut buf, format_args!("{err}")).expect("fits");
        assert_eq!(buf.as_str(), "illegal position: empty board, missing king");
    }
}
