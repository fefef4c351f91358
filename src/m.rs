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
    fmt,
    fmt::{Display, Write as _},
};

use arrayvec::ArrayVec;

use crate::{Role, Square};

/// Information about a move.
///
/// # Display
///
/// `Move` implements [`Display`] using long algebraic notation, e.g.
/// `Ng1-f3`, `e5xd6` or `e7-e8=C`. For coordinate notation see
/// [`UciMove`](crate::uci::UciMove).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Move {
    /// A normal move, e.g., `Bd3xh7`.
    Normal {
        role: Role,
        from: Square,
        capture: Option<Role>,
        to: Square,
        promotion: Option<Role>,
    },
    /// An en passant capture, e.g., `e5xd6`.
    EnPassant { from: Square, to: Square },
}

impl Move {
    /// Gets the role of the moved piece.
    pub const fn role(self) -> Role {
        match self {
            Move::Normal { role, .. } => role,
            Move::EnPassant { .. } => Role::Pawn,
        }
    }

    pub const fn from(self) -> Square {
        match self {
            Move::Normal { from, .. } | Move::EnPassant { from, .. } => from,
        }
    }

    pub const fn to(self) -> Square {
        match self {
            Move::Normal { to, .. } | Move::EnPassant { to, .. } => to,
        }
    }

    /// Gets the role of the captured piece or `None`.
    pub const fn capture(self) -> Option<Role> {
        match self {
            Move::Normal { capture, .. } => capture,
            Move::EnPassant { .. } => Some(Role::Pawn),
        }
    }

    pub const fn is_capture(self) -> bool {
        matches!(
            self,
            Move::Normal {
                capture: Some(_),
                ..
            } | Move::EnPassant { .. }
        )
    }

    pub const fn is_en_passant(self) -> bool {
        matches!(self, Move::EnPassant { .. })
    }

    /// Gets the promotion role.
    pub const fn promotion(self) -> Option<Role> {
        match self {
            Move::Normal { promotion, .. } => promotion,
            Move::EnPassant { .. } => None,
        }
    }

    pub const fn is_promotion(self) -> bool {
        self.promotion().is_some()
    }

    /// Square of the pawn removed by an en passant capture: on the origin
    /// row, in the destination column.
    pub const fn en_passant_victim(self) -> Option<Square> {
        match self {
            Move::EnPassant { from, to } => {
                Square::from_coords(from.row() as i8, to.col() as i8)
            }
            Move::Normal { .. } => None,
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Normal {
                role,
                from,
                capture,
                to,
                promotion,
            } => {
                if role != Role::Pawn {
                    f.write_char(role.upper_char())?;
                }

                write!(
                    f,
                    "{}{}{}",
                    from,
                    if capture.is_some() { 'x' } else { '-' },
                    to
                )?;

                if let Some(p) = promotion {
                    write!(f, "={}", p.upper_char())?;
                }

                Ok(())
            }
            Move::EnPassant { from, to } => write!(f, "{from}x{to}"),
        }
    }
}

/// A container for moves that can be stored inline on the stack.
///
/// The capacity is enough for every move of a side with at most 16 pieces,
/// which [`Position::from_setup`](crate::Position::from_setup) enforces.
pub type MoveList = ArrayVec<Move, 512>;

#[cfg(test)]
mod tests {
    use core::mem;

    use super::*;

    #[test]
    fn test_move_size() {
        assert!(mem::size_of::<Move>() <= 8);
    }

    #[test]
    fn test_capture_and_promotion() {
        let quiet = Move::Normal {
            role: Role::Jumper,
            from: Square::B1,
            capture: None,
            to: Square::B3,
            promotion: None,
        };
        assert!(!quiet.is_capture());
        assert!(!quiet.is_promotion());

        let promotion = Move::Normal {
            role: Role::Pawn,
            from: Square::G7,
            capture: Some(Role::Rook),
            to: Square::H8,
            promotion: Some(Role::Champion),
        };
        assert!(promotion.is_capture());
        assert!(promotion.is_promotion());

        let en_passant = Move::EnPassant {
            from: Square::E5,
            to: Square::D6,
        };
        assert!(en_passant.is_capture());
        assert!(!en_passant.is_promotion());
    }

    #[test]
    fn test_en_passant_victim() {
        let m = Move::EnPassant {
            from: Square::E5,
            to: Square::D6,
        };
        assert_eq!(m.en_passant_victim(), Some(Square::D5));
        assert_eq!(m.capture(), Some(Role::Pawn));
    }
}
