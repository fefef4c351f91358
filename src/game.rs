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

use alloc::vec::Vec;

use crate::{
    bitboard::Bitboard,
    board::Board,
    catalog::Mode,
    color::Color,
    m::{Move, MoveList},
    position::{PlayError, Position},
    role::Role,
    square::Square,
    types::Status,
    uci::UciMove,
};

/// A [`Position`] together with the stack of positions before each move,
/// so that moves can be taken back.
///
/// # Examples
///
/// ```
/// use gambit::{Game, Mode, Square};
///
/// let mut game = Game::new(Mode::Fairy);
/// assert!(game.make_move(Square::E2, Square::E4, None));
/// assert!(!game.make_move(Square::E2, Square::E4, None));
///
/// assert!(game.undo_move());
/// assert_eq!(game.position(), Game::new(Mode::Fairy).position());
/// assert!(!game.undo_move());
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct Game {
    pos: Position,
    history: Vec<Position>,
}

impl Game {
    /// A new game from the starting layout of `mode`.
    pub fn new(mode: Mode) -> Game {
        Game::from_position(Position::new(mode))
    }

    /// Continues from `pos` with an empty history.
    pub fn from_position(pos: Position) -> Game {
        Game {
            pos,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.pos
    }

    pub fn into_position(self) -> Position {
        self.pos
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.pos.board()
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.pos.turn()
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.pos.status()
    }

    /// Number of moves that can be taken back.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Positions before each move still on the stack, oldest first.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// See [`Position::legal_moves()`].
    pub fn legal_moves(&self, sq: Square) -> Bitboard {
        self.pos.legal_moves(sq)
    }

    /// See [`Position::is_in_check()`].
    pub fn is_in_check(&self, color: Color) -> bool {
        self.pos.is_in_check(color)
    }

    /// See [`Position::is_checkmate()`].
    pub fn is_checkmate(&self) -> bool {
        self.pos.is_checkmate()
    }

    /// See [`Position::all_possible_moves()`].
    pub fn all_possible_moves(&self, color: Color) -> MoveList {
        self.pos.all_possible_moves(color)
    }

    /// Validates and plays a move, remembering the position before it.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError`] if the move is refused. Neither the position
    /// nor the history change in that case.
    pub fn try_play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Role>,
    ) -> Result<Move, PlayError> {
        let m = self.pos.to_move(from, to, promotion)?;
        self.history.push(self.pos.clone());
        self.pos.play_unchecked(m);
        Ok(m)
    }

    /// Plays a move given in UCI notation.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError`] if the move is refused.
    pub fn play_uci(&mut self, uci: &UciMove) -> Result<Move, PlayError> {
        self.try_play(uci.from, uci.to, uci.promotion)
    }

    /// Like [`Game::try_play()`], but only reports whether the move was
    /// accepted.
    pub fn make_move(&mut self, from: Square, to: Square, promotion: Option<Role>) -> bool {
        self.try_play(from, to, promotion).is_ok()
    }

    /// Takes back the last move. The restored position is never over,
    /// even if it was reached by an undo from a finished game.
    ///
    /// Returns `false` if there is nothing to take back.
    pub fn undo_move(&mut self) -> bool {
        match self.history.pop() {
            Some(mut previous) => {
                previous.reopen();
                self.pos = previous;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{types::Piece, IllegalMoveReason};

    #[test]
    fn test_failed_move_keeps_history() {
        let mut game = Game::default();
        let err = game.try_play(Square::E2, Square::E5, None).unwrap_err();
        assert_eq!(err.reason, IllegalMoveReason::Illegal);
        assert_eq!(game.history_len(), 0);
        assert!(!game.undo_move());
    }

    #[test]
    fn test_history_order() {
        let mut game = Game::default();
        assert!(game.make_move(Square::E2, Square::E4, None));
        assert!(game.make_move(Square::E7, Square::E5, None));
        assert_eq!(game.history_len(), 2);
        assert_eq!(game.history()[0], Position::default());
        assert_eq!(game.history()[1].turn(), Color::Black);
        assert_eq!(game.position().move_count(), 2);
    }

    #[test]
    fn test_undo_reopens_finished_game() {
        let mut game = Game::default();
        for (from, to) in [
            (Square::F2, Square::F3),
            (Square::E7, Square::E5),
            (Square::G2, Square::G4),
            (Square::D8, Square::H4),
        ] {
            assert!(game.make_move(from, to, None));
        }
        assert_eq!(
            game.status(),
            Status::Checkmate {
                winner: Color::Black
            }
        );
        let err = game.try_play(Square::A2, Square::A3, None).unwrap_err();
        assert_eq!(err.reason, IllegalMoveReason::GameOver);

        assert!(game.undo_move());
        assert_eq!(game.status(), Status::InProgress);
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(
            game.board().piece_at(Square::D8),
            Some(Piece {
                color: Color::Black,
                role: Role::Queen
            })
        );
    }

    #[test]
    fn test_play_uci() {
        let mut game = Game::new(Mode::Fairy);
        let uci: UciMove = "c1f4".parse().expect("valid uci");
        let m = game.play_uci(&uci).expect("wizard leap");
        assert_eq!(m.role(), Role::Wizard);
        assert_eq!(game.into_position().turn(), Color::Black);
    }
}
