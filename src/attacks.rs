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

//! Pseudo-legal destinations and attack detection.
//!
//! Everything here works on a bare [`Board`] and ignores whose turn it is
//! and whether the mover's own king ends up in check. See
//! [`Position`](crate::Position) for legal moves.
//!
//! # Examples
//!
//! ```
//! use gambit::{attacks, Board, Square};
//!
//! let board = Board::new();
//! let knight = attacks::pseudo_legal_moves(&board, Square::G1, None);
//! assert_eq!(knight.into_iter().collect::<Vec<_>>(), [Square::F3, Square::H3]);
//! ```

use crate::{
    bitboard::Bitboard,
    board::Board,
    catalog::{Delta, Movement},
    color::Color,
    role::Role,
    square::Square,
    types::Piece,
};

/// Destinations of the piece on `sq` according to its movement pattern and
/// the occupancy of the board, without regard to check.
///
/// `ep_square` is the square skipped by a pawn double-step on the
/// immediately preceding move, if any. Returns an empty set if `sq` is
/// empty.
pub fn pseudo_legal_moves(board: &Board, sq: Square, ep_square: Option<Square>) -> Bitboard {
    let Some(piece) = board.piece_at(sq) else {
        return Bitboard::EMPTY;
    };

    match piece.role.movement() {
        Movement::Leaper(deltas) => leaper_moves(board, sq, piece.color, deltas),
        Movement::Slider(dirs) => slider_moves(board, sq, piece.color, dirs),
        Movement::Pawn => pawn_moves(board, sq, piece.color, ep_square),
    }
}

fn leaper_moves(board: &Board, sq: Square, color: Color, deltas: &[Delta]) -> Bitboard {
    deltas
        .iter()
        .filter_map(|&(dr, dc)| sq.offset(dr, dc))
        .filter(|&to| board.color_at(to) != Some(color))
        .collect()
}

fn slider_moves(board: &Board, sq: Square, color: Color, dirs: &[Delta]) -> Bitboard {
    let mut moves = Bitboard::EMPTY;
    for &(dr, dc) in dirs {
        let mut cursor = sq;
        while let Some(to) = cursor.offset(dr, dc) {
            match board.color_at(to) {
                None => moves.add(to),
                Some(other) => {
                    if other != color {
                        moves.add(to);
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
    moves
}

fn pawn_moves(board: &Board, sq: Square, color: Color, ep_square: Option<Square>) -> Bitboard {
    let mut moves = Bitboard::EMPTY;
    let forward = color.forward();

    if let Some(single) = sq.offset(forward, 0) {
        if board.piece_at(single).is_none() {
            moves.add(single);

            if sq.row() == color.pawn_row() {
                if let Some(double) = single.offset(forward, 0) {
                    if board.piece_at(double).is_none() {
                        moves.add(double);
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        let Some(to) = sq.offset(forward, dc) else {
            continue;
        };
        match board.color_at(to) {
            Some(other) if other != color => moves.add(to),
            Some(_) => (),
            None if Some(to) == ep_square && is_en_passant_victim(board, sq, to, color) => {
                moves.add(to)
            }
            None => (),
        }
    }

    moves
}

/// Whether an enemy pawn stands beside `from`, in the column of `to`.
fn is_en_passant_victim(board: &Board, from: Square, to: Square, color: Color) -> bool {
    Square::from_coords(from.row() as i8, to.col() as i8)
        .and_then(|beside| board.piece_at(beside))
        == Some((!color).pawn())
}

/// Union of the pseudo-legal destinations of every piece of `color`.
pub fn attacked_by(board: &Board, color: Color, ep_square: Option<Square>) -> Bitboard {
    let mut attacked = Bitboard::EMPTY;
    for sq in board.by_color(color) {
        attacked |= pseudo_legal_moves(board, sq, ep_square);
    }
    attacked
}

/// Whether any piece of the opponent of `color` could move onto the king
/// of `color`.
///
/// Returns `false` if `color` has no king. That only happens on boards that
/// were assembled by hand.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.king_of(color) else {
        return false;
    };

    board
        .by_color(!color)
        .into_iter()
        .any(|sq| pseudo_legal_moves(board, sq, None).contains(king))
}

/// Plays `from`-`to` on a copy of the board, including the removal of a
/// pawn captured en passant, and returns the copy.
pub(crate) fn scratch_move(
    board: &Board,
    from: Square,
    to: Square,
    ep_square: Option<Square>,
) -> Board {
    let mut scratch = board.clone();
    if Some(to) == ep_square && board.role_at(from) == Some(Role::Pawn) {
        if let Some(victim) = Square::from_coords(from.row() as i8, to.col() as i8) {
            scratch.remove_piece_at(victim);
        }
    }
    scratch.relocate(from, to);
    scratch
}

/// Squares from which a piece could reach `target` in one move, for every
/// piece on the board.
pub fn attackers_of(board: &Board, target: Square) -> Bitboard {
    board
        .pieces()
        .filter(|&(sq, _)| pseudo_legal_moves(board, sq, None).contains(target))
        .map(|(sq, _)| sq)
        .collect()
}

/// Pieces of the opponent of `color` that give check to its king.
pub fn checkers(board: &Board, color: Color) -> Bitboard {
    board.king_of(color).map_or(Bitboard::EMPTY, |king| {
        attackers_of(board, king) & board.by_color(!color)
    })
}

/// Places `piece` on an otherwise empty board and returns its destinations.
pub fn destinations_on_empty_board(piece: Piece, sq: Square) -> Bitboard {
    let mut board = Board::empty();
    board.set_piece_at(sq, piece);
    pseudo_legal_moves(&board, sq, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Mode;

    fn set(squares: &[Square]) -> Bitboard {
        squares.iter().copied().collect()
    }

    #[test]
    fn test_jumper_in_center() {
        let sq = Square::from_coords(4, 4).expect("on board");
        let moves = destinations_on_empty_board(Role::Jumper.of(Color::White), sq);
        let expected: Bitboard = [(2, 4), (6, 4), (4, 2), (4, 6), (2, 2), (2, 6), (6, 2), (6, 6)]
            .into_iter()
            .filter_map(|(row, col)| Square::from_coords(row, col))
            .collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_jumper_skips_friendly() {
        let mut board = Board::empty();
        board.set_piece_at(Square::E4, Role::Jumper.of(Color::White));
        board.set_piece_at(Square::E6, Color::White.pawn());
        board.set_piece_at(Square::C2, Color::Black.pawn());
        // The piece on e5 is leapt over.
        board.set_piece_at(Square::E5, Color::Black.rook());
        let moves = pseudo_legal_moves(&board, Square::E4, None);
        assert!(!moves.contains(Square::E6));
        assert!(moves.contains(Square::C2));
        assert!(!moves.contains(Square::E5));
        assert_eq!(moves.count(), 7);
    }

    #[test]
    fn test_wizard_and_champion() {
        let wizard = destinations_on_empty_board(Role::Wizard.of(Color::Black), Square::D4);
        assert_eq!(
            wizard,
            set(&[
                Square::A1,
                Square::A7,
                Square::C3,
                Square::C5,
                Square::E3,
                Square::E5,
                Square::G1,
                Square::G7,
            ])
        );

        let champion = destinations_on_empty_board(Role::Champion.of(Color::Black), Square::E4);
        assert_eq!(
            champion,
            set(&[
                Square::C4,
                Square::D4,
                Square::E2,
                Square::E3,
                Square::E5,
                Square::E6,
                Square::F4,
                Square::G4,
            ])
        );
        assert!(!champion.contains(Square::C2));

        let champion = destinations_on_empty_board(Role::Champion.of(Color::White), Square::A1);
        assert_eq!(champion, set(&[Square::A2, Square::B1, Square::A3, Square::C1]));
    }

    #[test]
    fn test_wizard_leaps_over_pieces() {
        let mut board = Board::empty();
        board.set_piece_at(Square::E4, Role::Wizard.of(Color::White));
        board.set_piece_at(Square::D5, Color::Black.pawn());
        board.set_piece_at(Square::C6, Color::White.pawn());
        board.set_piece_at(Square::F3, Color::White.pawn());
        let moves = pseudo_legal_moves(&board, Square::E4, None);
        assert!(moves.contains(Square::D5));
        assert!(moves.contains(Square::B7));
        assert!(moves.contains(Square::H1));
        assert!(!moves.contains(Square::F3));
        assert!(!moves.contains(Square::C6));
        assert_eq!(moves.count(), 7);
    }

    #[test]
    fn test_slider_stops_at_first_piece() {
        let mut board = Board::empty();
        board.set_piece_at(Square::A1, Color::White.rook());
        board.set_piece_at(Square::A4, Color::Black.pawn());
        board.set_piece_at(Square::C1, Color::White.king());
        let moves = pseudo_legal_moves(&board, Square::A1, None);
        assert_eq!(moves, set(&[Square::A2, Square::A3, Square::A4, Square::B1]));
    }

    #[test]
    fn test_pawn_pushes() {
        let board = Board::new();
        assert_eq!(
            pseudo_legal_moves(&board, Square::E2, None),
            set(&[Square::E3, Square::E4])
        );
        assert_eq!(
            pseudo_legal_moves(&board, Square::D7, None),
            set(&[Square::D6, Square::D5])
        );
    }

    #[test]
    fn test_pawn_blocked() {
        let mut board = Board::new();
        board.set_piece_at(Square::E3, Color::Black.pawn());
        assert_eq!(pseudo_legal_moves(&board, Square::E2, None), Bitboard::EMPTY);

        let mut board = Board::new();
        board.set_piece_at(Square::E4, Color::Black.pawn());
        assert_eq!(
            pseudo_legal_moves(&board, Square::E2, None),
            set(&[Square::E3])
        );
    }

    #[test]
    fn test_pawn_no_double_step_off_start_row() {
        let mut board = Board::empty();
        board.set_piece_at(Square::E3, Color::White.pawn());
        assert_eq!(
            pseudo_legal_moves(&board, Square::E3, None),
            set(&[Square::E4])
        );
    }

    #[test]
    fn test_pawn_en_passant() {
        let mut board = Board::empty();
        board.set_piece_at(Square::E5, Color::White.pawn());
        board.set_piece_at(Square::D5, Color::Black.pawn());
        assert_eq!(
            pseudo_legal_moves(&board, Square::E5, Some(Square::D6)),
            set(&[Square::E6, Square::D6])
        );
        assert_eq!(
            pseudo_legal_moves(&board, Square::E5, None),
            set(&[Square::E6])
        );
        // No victim beside the pawn.
        assert_eq!(
            pseudo_legal_moves(&board, Square::E5, Some(Square::F6)),
            set(&[Square::E6])
        );
    }

    #[test]
    fn test_is_in_check() {
        let mut board = Board::empty();
        board.set_piece_at(Square::E1, Color::White.king());
        board.set_piece_at(Square::E8, Color::Black.rook());
        assert!(is_in_check(&board, Color::White));
        assert_eq!(checkers(&board, Color::White), set(&[Square::E8]));

        board.set_piece_at(Square::E2, Color::White.pawn());
        assert!(!is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
    }

    #[test]
    fn test_pawn_does_not_check_straight_ahead() {
        let mut board = Board::empty();
        board.set_piece_at(Square::E1, Color::White.king());
        board.set_piece_at(Square::E2, Color::Black.pawn());
        assert!(!is_in_check(&board, Color::White));
        board.set_piece_at(Square::D2, Color::Black.pawn());
        assert!(is_in_check(&board, Color::White));
    }

    #[test]
    fn test_missing_king_is_not_in_check() {
        let board = Board::starting(Mode::Standard);
        let mut board = board;
        board.remove_piece_at(Square::E1);
        assert!(!is_in_check(&board, Color::White));
    }

    #[test]
    fn test_scratch_move_en_passant() {
        let mut board = Board::empty();
        board.set_piece_at(Square::E5, Color::White.pawn());
        board.set_piece_at(Square::D5, Color::Black.pawn());
        let after = scratch_move(&board, Square::E5, Square::D6, Some(Square::D6));
        assert_eq!(after.piece_at(Square::D5), None);
        assert_eq!(after.piece_at(Square::D6), Some(Color::White.pawn()));
        assert_eq!(after.piece_at(Square::E5), None);
        // The input board is untouched.
        assert_eq!(board.piece_at(Square::D5), Some(Color::Black.pawn()));
    }
}
