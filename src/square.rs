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

use core::{error::Error, fmt, num::TryFromIntError, str::FromStr};

use crate::util::overflow_error;

/// A square of the 8×8 board, addressed by row and column.
///
/// Row 0 is Black's back rank (rank 8) and row 7 is White's back rank
/// (rank 1). Column 0 is the a-file. The algebraic name of a square is its
/// file letter followed by its rank digit, where `rank = 8 - row`.
///
/// # Examples
///
/// ```
/// use gambit::Square;
///
/// let sq: Square = "e2".parse()?;
/// assert_eq!(sq, Square::E2);
/// assert_eq!((sq.row(), sq.col()), (6, 4));
/// # Ok::<_, gambit::ParseSquareError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

impl Square {
    /// Gets the square at `row`, `col`, if both are in `0..8`.
    #[inline]
    pub const fn from_coords(row: i8, col: i8) -> Option<Square> {
        if 0 <= row && row < 8 && 0 <= col && col < 8 {
            Some(Square((row as u8) << 3 | col as u8))
        } else {
            None
        }
    }

    /// Gets the square with the given index (`row * 8 + col`).
    ///
    /// # Panics
    ///
    /// Panics if the index is not in the range `0..64`.
    #[inline]
    #[track_caller]
    pub const fn new(index: u8) -> Square {
        assert!(index < 64);
        Square(index)
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 >> 3
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 & 7
    }

    /// Index in `0..64`.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Rank number `1..=8` as used in algebraic notation.
    #[inline]
    pub const fn rank(self) -> u8 {
        8 - self.row()
    }

    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col()) as char
    }

    #[inline]
    pub const fn rank_char(self) -> char {
        (b'0' + self.rank()) as char
    }

    /// Shifts the square by `dr` rows and `dc` columns, or returns `None`
    /// when that leaves the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        Square::from_coords(self.row() as i8 + dr, self.col() as i8 + dc)
    }

    /// Parses a square name such as `e4`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSquareError`] if the input is not exactly a file letter
    /// `a`–`h` (in either case) followed by a rank digit `1`–`8`.
    pub fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        let [file, rank @ ..] = s else {
            return Err(ParseSquareError);
        };
        let file = file.to_ascii_lowercase();
        if rank.len() != 1 || !(b'a'..=b'h').contains(&file) {
            return Err(ParseSquareError);
        }
        let rank: u8 = btoi::btou(rank).map_err(|_| ParseSquareError)?;
        if !(1..=8).contains(&rank) {
            return Err(ParseSquareError);
        }
        Ok(Square((8 - rank) << 3 | (file - b'a')))
    }

    /// All 64 squares, from `a8` (row 0, column 0) to `h1`.
    pub fn all() -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        (0..64).map(Square)
    }
}

macro_rules! square_constants {
    ($($name:ident = $index:literal,)+) => {
        #[allow(missing_docs)]
        impl Square {
            $(pub const $name: Square = Square($index);)+
        }
    }
}

square_constants! {
    A8 = 0, B8 = 1, C8 = 2, D8 = 3, E8 = 4, F8 = 5, G8 = 6, H8 = 7,
    A7 = 8, B7 = 9, C7 = 10, D7 = 11, E7 = 12, F7 = 13, G7 = 14, H7 = 15,
    A6 = 16, B6 = 17, C6 = 18, D6 = 19, E6 = 20, F6 = 21, G6 = 22, H6 = 23,
    A5 = 24, B5 = 25, C5 = 26, D5 = 27, E5 = 28, F5 = 29, G5 = 30, H5 = 31,
    A4 = 32, B4 = 33, C4 = 34, D4 = 35, E4 = 36, F4 = 37, G4 = 38, H4 = 39,
    A3 = 40, B3 = 41, C3 = 42, D3 = 43, E3 = 44, F3 = 45, G3 = 46, H3 = 47,
    A2 = 48, B2 = 49, C2 = 50, D2 = 51, E2 = 52, F2 = 53, G2 = 54, H2 = 55,
    A1 = 56, B1 = 57, C1 = 58, D1 = 59, E1 = 60, F1 = 61, G1 = 62, H1 = 63,
}

impl TryFrom<u8> for Square {
    type Error = TryFromIntError;

    #[inline]
    fn try_from(index: u8) -> Result<Square, TryFromIntError> {
        if index < 64 {
            Ok(Square(index))
        } else {
            Err(overflow_error())
        }
    }
}

impl From<Square> for usize {
    #[inline]
    fn from(sq: Square) -> usize {
        sq.index()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write as _;
        f.write_char(self.file_char())?;
        f.write_char(self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write as _;
        f.write_char(self.file_char().to_ascii_uppercase())?;
        f.write_char(self.rank_char())
    }
}

/// Error when parsing an invalid square name.
#[derive(Clone, Debug)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

impl Error for ParseSquareError {}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

serde_via_str!(Square, 2, "square name");

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for Square {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Square> {
        u.int_in_range::<u8>(0..=63).map(Square)
    }

    #[inline]
    fn size_hint(_depth: usize) -> (usize, Option<usize>) {
        (1, Some(1))
    }
}
