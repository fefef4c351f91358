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

//! Movement patterns of the piece types, and the two game modes that
//! select which of them are in play.
//!
//! The catalog is static data. Nothing here is mutable or can fail.
//!
//! # Examples
//!
//! ```
//! use gambit::{catalog::Movement, Mode, Role};
//!
//! assert!(matches!(Role::Jumper.movement(), Movement::Leaper(deltas) if deltas.len() == 8));
//! assert_eq!(Mode::Fairy.promotion_role(None), Role::Champion);
//! ```

use core::{error::Error, fmt, str::FromStr};

use crate::role::Role;

/// A displacement of `(rows, columns)`.
pub type Delta = (i8, i8);

/// How a piece type moves.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Movement {
    /// Each offset is applied once. Intervening squares are ignored.
    Leaper(&'static [Delta]),
    /// Each unit direction is repeated until the edge of the board or the
    /// first occupied square.
    Slider(&'static [Delta]),
    /// Forward steps, diagonal captures and en passant, depending on color.
    Pawn,
}

pub const ORTHOGONAL: [Delta; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const DIAGONAL: [Delta; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const ROYAL: [Delta; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const KNIGHT: [Delta; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Two squares orthogonally or two squares diagonally.
pub const JUMPER: [Delta; 8] = [
    (-2, 0),
    (2, 0),
    (0, -2),
    (0, 2),
    (-2, -2),
    (-2, 2),
    (2, -2),
    (2, 2),
];

/// One or two squares orthogonally, leaping.
pub const CHAMPION: [Delta; 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-2, 0),
    (2, 0),
    (0, -2),
    (0, 2),
];

/// One or three squares diagonally, leaping.
pub const WIZARD: [Delta; 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-3, -3),
    (-3, 3),
    (3, -3),
    (3, 3),
];

impl Role {
    /// Looks up the movement pattern of this piece type.
    pub const fn movement(self) -> Movement {
        match self {
            Role::Pawn => Movement::Pawn,
            Role::Knight => Movement::Leaper(&KNIGHT),
            Role::King => Movement::Leaper(&ROYAL),
            Role::Jumper => Movement::Leaper(&JUMPER),
            Role::Champion => Movement::Leaper(&CHAMPION),
            Role::Wizard => Movement::Leaper(&WIZARD),
            Role::Rook => Movement::Slider(&ORTHOGONAL),
            Role::Bishop => Movement::Slider(&DIAGONAL),
            Role::Queen => Movement::Slider(&ROYAL),
        }
    }
}

/// The piece set a game is played with.
///
/// Exactly one mode is active for the lifetime of a game.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum Mode {
    /// Pawn, Knight, Bishop, Rook, Queen, King.
    #[default]
    Standard,
    /// Pawn, Jumper, Wizard, Champion, King, Rook.
    Fairy,
}

impl Mode {
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Standard => "standard",
            Mode::Fairy => "fairy",
        }
    }

    /// The roles in play.
    pub const fn roles(self) -> &'static [Role] {
        match self {
            Mode::Standard => &[
                Role::Pawn,
                Role::Knight,
                Role::Bishop,
                Role::Rook,
                Role::Queen,
                Role::King,
            ],
            Mode::Fairy => &[
                Role::Pawn,
                Role::Jumper,
                Role::Wizard,
                Role::Champion,
                Role::King,
                Role::Rook,
            ],
        }
    }

    pub fn contains(self, role: Role) -> bool {
        self.roles().contains(&role)
    }

    /// Initial back rank, from column 0 (a-file) to column 7 (h-file).
    pub const fn back_rank(self) -> [Role; 8] {
        match self {
            Mode::Standard => [
                Role::Rook,
                Role::Knight,
                Role::Bishop,
                Role::Queen,
                Role::King,
                Role::Bishop,
                Role::Knight,
                Role::Rook,
            ],
            Mode::Fairy => [
                Role::Rook,
                Role::Jumper,
                Role::Wizard,
                Role::Champion,
                Role::King,
                Role::Wizard,
                Role::Jumper,
                Role::Rook,
            ],
        }
    }

    /// Roles a pawn may promote to.
    pub const fn promotion_roles(self) -> &'static [Role] {
        match self {
            Mode::Standard => &[Role::Queen, Role::Rook, Role::Bishop, Role::Knight],
            Mode::Fairy => &[Role::Champion, Role::Rook, Role::Wizard, Role::Jumper],
        }
    }

    /// Promotion used when the choice is absent or not allowed.
    pub const fn default_promotion(self) -> Role {
        match self {
            Mode::Standard => Role::Queen,
            Mode::Fairy => Role::Champion,
        }
    }

    /// Validates a promotion choice against [`Mode::promotion_roles()`],
    /// falling back to [`Mode::default_promotion()`].
    pub fn promotion_role(self, choice: Option<Role>) -> Role {
        choice
            .filter(|role| self.promotion_roles().contains(role))
            .unwrap_or(self.default_promotion())
    }

    pub const ALL: [Mode; 2] = [Mode::Standard, Mode::Fairy];
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error when parsing an invalid mode name.
#[derive(Clone, Debug)]
pub struct ParseModeError;

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid mode name")
    }
}

impl Error for ParseModeError {}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Mode, ParseModeError> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or(ParseModeError)
    }
}

serde_via_str!(Mode, 8, "mode name");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fairy_set() {
        for role in [Role::Jumper, Role::Wizard, Role::Champion] {
            assert!(Mode::Fairy.contains(role));
            assert!(!Mode::Standard.contains(role));
        }
        assert!(!Mode::Fairy.contains(Role::Queen));
        assert!(Mode::Fairy.contains(Role::Rook));
    }

    #[test]
    fn test_layouts_use_own_roles() {
        for mode in Mode::ALL {
            for role in mode.back_rank() {
                assert!(mode.contains(role), "{mode}: {role}");
            }
            for &role in mode.promotion_roles() {
                assert!(mode.contains(role), "{mode}: {role}");
                assert!(role != Role::Pawn && role != Role::King);
            }
        }
    }

    #[test]
    fn test_promotion_role() {
        assert_eq!(Mode::Standard.promotion_role(Some(Role::Rook)), Role::Rook);
        assert_eq!(Mode::Standard.promotion_role(None), Role::Queen);
        assert_eq!(Mode::Standard.promotion_role(Some(Role::King)), Role::Queen);
        assert_eq!(Mode::Standard.promotion_role(Some(Role::Wizard)), Role::Queen);
        assert_eq!(Mode::Fairy.promotion_role(Some(Role::Queen)), Role::Champion);
        assert_eq!(Mode::Fairy.promotion_role(Some(Role::Jumper)), Role::Jumper);
    }

    #[test]
    fn test_offsets_are_distinct() {
        for role in Role::ALL {
            if let Movement::Leaper(deltas) | Movement::Slider(deltas) = role.movement() {
                for (i, a) in deltas.iter().enumerate() {
                    assert!(!deltas[i + 1..].contains(a), "{role}: {a:?}");
                    assert_ne!(*a, (0, 0));
                }
            }
        }
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("Fairy".parse::<Mode>().ok(), Some(Mode::Fairy));
        assert!("atomic".parse::<Mode>().is_err());
    }
}
