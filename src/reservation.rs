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

//! Reservation records.
//!
//! A reservation commits one room for one date. It is created by a successful
//! `book` call, removed only by a matching `cancel`, and never mutated in
//! place. The (room, date) pair is the unit of uniqueness the ledger enforces.

use crate::base::{BookingDate, RoomNumber};
use serde::{Deserialize, Serialize};

/// A (room, date) pair identifying one bookable slot.
pub type Slot = (RoomNumber, BookingDate);

/// One room committed for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub room_number: RoomNumber,
    pub date: BookingDate,
}

impl Reservation {
    pub fn new(room_number: RoomNumber, date: BookingDate) -> Self {
        Self { room_number, date }
    }

    /// The slot this reservation occupies.
    pub fn slot(&self) -> Slot {
        (self.room_number.clone(), self.date.clone())
    }

    /// True when this reservation matches both room and date exactly.
    pub fn matches(&self, room_number: &RoomNumber, date: &BookingDate) -> bool {
        &self.room_number == room_number && &self.date == date
    }
}
