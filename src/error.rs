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

//! Error types for reservation processing.

use thiserror::Error;

/// Reservation processing errors.
///
/// Every failure is returned to the caller as a typed result and leaves the
/// ledger's state untouched. User-facing rendering is up to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    /// Catalog insertion with a room number that already exists
    #[error("room number already exists")]
    DuplicateRoomNumber,

    /// Booking referenced a room absent from the catalog
    #[error("no such room")]
    UnknownRoom,

    /// Booking collided with an existing reservation for the same room and date
    #[error("room is already booked for this date")]
    SlotAlreadyBooked,

    /// Strict policy: room already holds a reservation for some date
    #[error("room already holds an active reservation")]
    RoomAlreadyReserved,

    /// Cancellation found no reservation matching both room and date
    #[error("no such reservation")]
    NoSuchReservation,
}
