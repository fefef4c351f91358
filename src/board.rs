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

use core::{
    fmt::{self, Write as _},
    iter::FusedIterator,
};

use crate::{
    bitboard::Bitboard,
    catalog::Mode,
    color::{ByColor, Color},
    role::Role,
    square::Square,
    types::Piece,
};

/// Piece positions on an 8×8 board.
///
/// The board does not know whose turn it is, and does not enforce any
/// invariant. See [`Position`](crate::Position) for the rules.
///
/// # Examples
///
/// ```
/// use gambit::{Board, Color, Square};
///
/// let board = Board::new();
/// assert_eq!(board.piece_at(Square::E1), Some(Color::White.king()));
///
/// // Rows are printed from rank 8 down to rank 1.
/// assert_eq!(board.to_string().lines().next(), Some("rnbqkbnr"));
/// ```
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Board {
        Board::starting(Mode::Standard)
    }

    pub const fn empty() -> Board {
        Board {
            squares: [None; 64],
        }
    }

    /// Starting layout of the given mode: back ranks on rows 0 and 7,
    /// pawns on rows 1 and 6.
    pub fn starting(mode: Mode) -> Board {
        let mut board = Board::empty();
        for (col, role) in (0..).zip(mode.back_rank()) {
            for color in Color::ALL {
                if let Some(sq) = Square::from_coords(color.backrank() as i8, col) {
                    board.set_piece_at(sq, role.of(color));
                }
                if let Some(sq) = Square::from_coords(color.pawn_row() as i8, col) {
                    board.set_piece_at(sq, color.pawn());
                }
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub fn role_at(&self, sq: Square) -> Option<Role> {
        self.piece_at(sq).map(|piece| piece.role)
    }

    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|piece| piece.color)
    }

    /// Puts a piece on a square, replacing any piece already there.
    #[inline]
    pub fn set_piece_at(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    #[inline]
    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Moves whatever stands on `from` to `to`, capturing anything on `to`.
    /// Returns the captured piece.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.remove_piece_at(from);
        let captured = self.remove_piece_at(to);
        self.squares[to.index()] = moving;
        captured
    }

    pub fn occupied(&self) -> Bitboard {
        self.pieces().map(|(sq, _)| sq).collect()
    }

    pub fn by_color(&self, color: Color) -> Bitboard {
        self.pieces()
            .filter(|(_, piece)| piece.color == color)
            .map(|(sq, _)| sq)
            .collect()
    }

    pub fn by_piece(&self, piece: Piece) -> Bitboard {
        self.pieces()
            .filter(|&(_, p)| p == piece)
            .map(|(sq, _)| sq)
            .collect()
    }

    /// Finds the king of the given color. If there are several, the one
    /// with the lowest square index is returned.
    pub fn king_of(&self, color: Color) -> Option<Square> {
        self.by_piece(color.king()).first()
    }

    /// Number of pieces of each color.
    pub fn material(&self) -> ByColor<usize> {
        ByColor::new_with(|color| self.by_color(color).count())
    }

    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(Option::is_none)
    }

    /// Iterates over all occupied squares in index order.
    pub fn pieces(&self) -> Pieces<'_> {
        Pieces {
            squares: self.squares.iter(),
            index: 0,
        }
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl fmt::Display for Board {
    /// Draws one line per row, starting with row 0 (rank 8). Empty squares
    /// are `.`, White pieces uppercase, Black pieces lowercase.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sq in Square::all() {
            f.write_char(self.piece_at(sq).map_or('.', Piece::char))?;
            if sq.col() == 7 {
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}

/// Iterator over the pieces of a [`Board`].
#[derive(Debug, Clone)]
pub struct Pieces<'a> {
    squares: core::slice::Iter<'a, Option<Piece>>,
    index: u8,
}

impl Iterator for Pieces<'_> {
    type Item = (Square, Piece);

    fn next(&mut self) -> Option<(Square, Piece)> {
        for cell in self.squares.by_ref() {
            let sq = Square::new(self.index);
            self.index += 1;
            if let Some(piece) = *cell {
                return Some((sq, piece));
            }
        }
        None
    }
}

impl FusedIterator for Pieces<'_> {}
