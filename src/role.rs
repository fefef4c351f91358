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

use core::{error::Error, fmt, str::FromStr};

use crate::{color::Color, types::Piece};

/// Piece types of both the standard and the fairy catalog.
///
/// The standard set is `Pawn`, `Knight`, `Bishop`, `Rook`, `Queen`, `King`.
/// The fairy set is `Pawn`, `Jumper`, `Wizard`, `Champion`, `King`, `Rook`.
/// See [`Mode`](crate::Mode) for which roles are in play.
///
/// # Examples
///
/// ```
/// use gambit::Role;
///
/// assert_eq!(Role::from_char('J'), Some(Role::Jumper));
/// assert_eq!(Role::Champion.char(), 'c');
/// ```
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Role {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
    Jumper = 7,
    Wizard = 8,
    Champion = 9,
}

impl Role {
    /// Gets the piece type from its English letter.
    pub const fn from_char(ch: char) -> Option<Role> {
        match ch {
            'P' | 'p' => Some(Role::Pawn),
            'N' | 'n' => Some(Role::Knight),
            'B' | 'b' => Some(Role::Bishop),
            'R' | 'r' => Some(Role::Rook),
            'Q' | 'q' => Some(Role::Queen),
            'K' | 'k' => Some(Role::King),
            'J' | 'j' => Some(Role::Jumper),
            'W' | 'w' => Some(Role::Wizard),
            'C' | 'c' => Some(Role::Champion),
            _ => None,
        }
    }

    /// Gets a [`Piece`] of the given color.
    #[inline]
    pub const fn of(self, color: Color) -> Piece {
        Piece { color, role: self }
    }

    pub const fn char(self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
            Role::Jumper => 'j',
            Role::Wizard => 'w',
            Role::Champion => 'c',
        }
    }

    pub const fn upper_char(self) -> char {
        self.char().to_ascii_uppercase()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Role::Pawn => "pawn",
            Role::Knight => "knight",
            Role::Bishop => "bishop",
            Role::Rook => "rook",
            Role::Queen => "queen",
            Role::King => "king",
            Role::Jumper => "jumper",
            Role::Wizard => "wizard",
            Role::Champion => "champion",
        }
    }

    /// All roles of both catalogs, in discriminant order.
    pub const ALL: [Role; 9] = [
        Role::Pawn,
        Role::Knight,
        Role::Bishop,
        Role::Rook,
        Role::Queen,
        Role::King,
        Role::Jumper,
        Role::Wizard,
        Role::Champion,
    ];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error when parsing an invalid piece name or letter.
#[derive(Clone, Debug)]
pub struct ParseRoleError;

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid piece type")
    }
}

impl Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    /// Accepts a name in any case (`"Rook"`, `"rook"`) or a single letter.
    fn from_str(s: &str) -> Result<Role, ParseRoleError> {
        let mut chars = s.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Role::from_char(ch).ok_or(ParseRoleError);
        }
        Role::ALL
            .into_iter()
            .find(|role| role.name().eq_ignore_ascii_case(s))
            .ok_or(ParseRoleError)
    }
}

serde_via_str!(Role, 8, "piece type name");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_roundtrip() {
        for role in Role::ALL {
            assert_eq!(Role::from_char(role.char()), Some(role));
            assert_eq!(Role::from_char(role.upper_char()), Some(role));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Rook".parse::<Role>().ok(), Some(Role::Rook));
        assert_eq!("CHAMPION".parse::<Role>().ok(), Some(Role::Champion));
        assert_eq!("n".parse::<Role>().ok(), Some(Role::Knight));
        assert!("x".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
        assert!("dragon".parse::<Role>().is_err());
    }
}
