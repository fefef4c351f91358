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

//! Parse and write moves in the coordinate notation of the
//! Universal Chess Interface, e.g. `e2e4` or `e7e8c`.
//!
//! # Examples
//!
//! ```
//! use gambit::{uci::UciMove, Mode, Position, Role, Square};
//!
//! let uci: UciMove = "g1f3".parse()?;
//! assert_eq!(uci.from, Square::G1);
//!
//! let pos = Position::new(Mode::Standard);
//! let m = uci.to_move(&pos)?;
//! assert_eq!(m.role(), Role::Knight);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

use core::{error::Error, fmt, str::FromStr};

use crate::{m::Move, position::Position, role::Role, square::Square, PlayError};

/// Error when parsing an invalid UCI move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseUciError;

impl fmt::Display for ParseUciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid uci")
    }
}

impl Error for ParseUciError {}

/// A move as origin, destination and an optional promotion choice.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct UciMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
}

impl UciMove {
    /// Parses a move from ASCII: two square names, optionally followed by
    /// the lowercase letter of the promotion role.
    ///
    /// # Errors
    ///
    /// Returns [`ParseUciError`] if the input is not in this format.
    pub fn from_ascii(s: &[u8]) -> Result<UciMove, ParseUciError> {
        if s.len() != 4 && s.len() != 5 {
            return Err(ParseUciError);
        }

        let from = Square::from_ascii(&s[0..2]).map_err(|_| ParseUciError)?;
        let to = Square::from_ascii(&s[2..4]).map_err(|_| ParseUciError)?;
        let promotion = match s.get(4) {
            Some(&ch) => Some(Role::from_char(char::from(ch)).ok_or(ParseUciError)?),
            None => None,
        };

        Ok(UciMove {
            from,
            to,
            promotion,
        })
    }

    pub fn from_move(m: Move) -> UciMove {
        UciMove {
            from: m.from(),
            to: m.to(),
            promotion: m.promotion(),
        }
    }

    /// Converts to a legal [`Move`] in the context of `pos`.
    ///
    /// A promotion letter that the mode does not allow falls back to the
    /// default promotion.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError`] if the move is not legal.
    pub fn to_move(&self, pos: &Position) -> Result<Move, PlayError> {
        pos.to_move(self.from, self.to, self.promotion)
    }
}

impl From<Move> for UciMove {
    fn from(m: Move) -> UciMove {
        UciMove::from_move(m)
    }
}

impl FromStr for UciMove {
    type Err = ParseUciError;

    fn from_str(s: &str) -> Result<UciMove, ParseUciError> {
        UciMove::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for UciMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.char())?;
        }
        Ok(())
    }
}

serde_via_str!(UciMove, 5, "uci move");
