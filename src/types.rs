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

use core::fmt;

use crate::{color::Color, role::Role};

/// A piece with [`Color`] and [`Role`].
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    /// Uppercase letter for White, lowercase letter for Black.
    pub const fn char(self) -> char {
        match self.color {
            Color::White => self.role.upper_char(),
            Color::Black => self.role.char(),
        }
    }

    pub const fn from_char(ch: char) -> Option<Piece> {
        match Role::from_char(ch) {
            Some(role) => Some(role.of(Color::from_white(ch.is_ascii_uppercase()))),
            None => None,
        }
    }
}

/// Whether the game is still running, and how it ended.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum Status {
    #[default]
    InProgress,
    /// The side to move is in check and has no legal move.
    Checkmate { winner: Color },
    /// The side to move is not in check but has no legal move.
    Stalemate,
}

impl Status {
    pub const fn is_game_over(self) -> bool {
        !matches!(self, Status::InProgress)
    }

    pub const fn winner(self) -> Option<Color> {
        match self {
            Status::Checkmate { winner } => Some(winner),
            Status::InProgress | Status::Stalemate => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Status::InProgress => f.write_str("in progress"),
            Status::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            Status::Stalemate => f.write_str("stalemate"),
        }
    }
}
