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

//! Counts leaf nodes of the legal move tree, to check move generation
//! against known values.

use crate::position::Position;

/// Counts legal move paths of a given length.
///
/// Paths that end in checkmate or stalemate before reaching `depth` are not
/// counted.
///
/// # Examples
///
/// ```
/// use gambit::{perft, Mode, Position};
///
/// let pos = Position::new(Mode::Standard);
/// assert_eq!(perft(&pos, 1), 20);
/// assert_eq!(perft(&pos, 2), 400);
/// ```
pub fn perft(pos: &Position, depth: u32) -> u64 {
    if depth < 1 {
        1
    } else {
        let moves = pos.legal_move_list();

        if depth == 1 {
            moves.len() as u64
        } else {
            moves
                .into_iter()
                .map(|m| {
                    let mut child = pos.clone();
                    child.play_unchecked(m);
                    perft(&child, depth - 1)
                })
                .sum()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Mode;

    #[test]
    fn test_depth_zero() {
        assert_eq!(perft(&Position::new(Mode::Fairy), 0), 1);
    }

    #[test]
    fn test_fairy_start() {
        assert_eq!(perft(&Position::new(Mode::Fairy), 1), 23);
    }
}
