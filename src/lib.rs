// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! # Hotel Ledger
//!
//! This library provides an in-memory reservation ledger for a hotel: a fixed
//! room inventory with type-derived nightly rates, and date-scoped bookings
//! that can never double-book a room.
//!
//! ## Core Components
//!
//! - [`Ledger`]: Central reservation store exposing book/cancel/list operations
//! - [`Catalog`]: Insertion-ordered room registry with duplicate rejection
//! - [`RoomType`]: Supported room categories (single, double) with fixed rates
//! - [`ReservationError`]: Error types for reservation failures
//!
//! ## Example
//!
//! ```
//! use hotel_ledger_rs::{BookingDate, Ledger, RoomNumber, RoomType};
//! use rust_decimal_macros::dec;
//!
//! let ledger = Ledger::new();
//! ledger.add_room(RoomNumber::from("89"), RoomType::Double).unwrap();
//!
//! // Book a room; the nightly rate comes back on success.
//! let rate = ledger
//!     .book(RoomNumber::from("89"), BookingDate::from("2030-01-01"))
//!     .unwrap();
//! assert_eq!(rate, dec!(130000));
//!
//! // The same slot cannot be booked twice.
//! assert!(ledger
//!     .book(RoomNumber::from("89"), BookingDate::from("2030-01-01"))
//!     .is_err());
//! ```
//!
//! ## Thread Safety
//!
//! All reservation state sits behind a single lock, so every booking or
//! cancellation runs its check-then-mutate sequence as one atomic step even
//! when the ledger is shared across threads.

pub mod base;
mod catalog;
pub mod error;
mod ledger;
mod reservation;
mod room;

pub use base::{BookingDate, RoomNumber};
pub use catalog::Catalog;
pub use error::ReservationError;
pub use ledger::{BookingPolicy, Ledger};
pub use reservation::{Reservation, Slot};
pub use room::{Room, RoomType};
