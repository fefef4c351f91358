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

//! Rules of chess and of a fairy chess variant: legal move generation,
//! check and checkmate detection, and moves with an undo history.
//!
//! # Examples
//!
//! Generate legal moves in the starting position:
//!
//! ```
//! use gambit::{Mode, Position, Square};
//!
//! let pos = Position::new(Mode::Standard);
//! assert_eq!(pos.legal_move_list().len(), 20);
//! assert_eq!(pos.legal_moves(Square::G1).count(), 2);
//! ```
//!
//! Play and take back moves:
//!
//! ```
//! use gambit::{Color, Game, Mode, Square, Status};
//!
//! let mut game = Game::new(Mode::Standard);
//! for (from, to) in [
//!     (Square::F2, Square::F3),
//!     (Square::E7, Square::E5),
//!     (Square::G2, Square::G4),
//!     (Square::D8, Square::H4),
//! ] {
//!     assert!(game.make_move(from, to, None));
//! }
//! assert_eq!(game.status(), Status::Checkmate { winner: Color::Black });
//!
//! assert!(game.undo_move());
//! assert_eq!(game.status(), Status::InProgress);
//! ```
//!
//! Fairy pieces use the same interface. The [`catalog`] describes how each
//! piece moves:
//!
//! ```
//! use gambit::{Mode, Position, Role, Square};
//!
//! let pos = Position::new(Mode::Fairy);
//! assert_eq!(pos.board().role_at(Square::B1), Some(Role::Jumper));
//! assert_eq!(pos.legal_moves(Square::B1).count(), 2);
//! ```
//!
//! # Feature flags
//!
//! * `alloc`: Enables APIs which require the
//!   [`alloc`](https://doc.rust-lang.org/stable/alloc/index.html) crate
//!   (the undo history of [`Game`]).
//! * `std`: Implies `alloc`. Enabled by default.
//!   For `no_std` environments, this must be disabled with `default-features = false`.
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   types with unique natural representations.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.
//! * `arbitrary`: Implements
//!   [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for vocabulary types.

#![no_std]
#![doc(html_root_url = "https://docs.rs/gambit/0.3.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod util;
mod color;
#[cfg(feature = "alloc")]
mod game;
mod m;
mod perft;
mod position;
mod role;
mod square;
mod types;

pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod catalog;
pub mod uci;

pub use bitboard::Bitboard;
pub use board::Board;
pub use catalog::{Mode, ParseModeError};
pub use color::{ByColor, Color, ParseColorError};
#[cfg(feature = "alloc")]
pub use game::Game;
pub use m::{Move, MoveList};
pub use perft::perft;
pub use position::{IllegalMoveReason, PlayError, Position, PositionError, PositionErrorKinds};
pub use role::{ParseRoleError, Role};
pub use square::{ParseSquareError, Square};
pub use types::{Piece, Status};

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}
