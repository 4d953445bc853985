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

//! Reservation ledger.
//!
//! The [`Ledger`] is the central component: it owns the room [`Catalog`] and
//! the collection of active reservations, and exposes the book/cancel/list
//! operations that enforce the no-double-booking invariant.
//!
//! # Booking
//!
//! - **Book**: commit a room for a date, returning the nightly rate.
//! - **Cancel**: remove the exact (room, date) reservation.
//! - **List**: active reservations in booking order.
//! - **Availability**: rooms with no active reservation at all.
//!
//! # Thread Safety
//!
//! All reservation state sits behind a single [`Mutex`], so each operation's
//! check-then-mutate sequence runs as one atomic unit. Two concurrent `book`
//! calls for the same slot can never both pass the collision check.

use crate::ReservationError;
use crate::base::{BookingDate, RoomNumber};
use crate::catalog::Catalog;
use crate::reservation::{Reservation, Slot};
use crate::room::{Room, RoomType};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// How strictly a room is locked by an existing reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingPolicy {
    /// A room may hold one reservation per date; only exact (room, date)
    /// collisions are rejected.
    #[default]
    Permissive,
    /// A room with any active reservation rejects every further booking,
    /// regardless of date.
    Strict,
}

/// Mutable reservation state, guarded as one unit by the ledger's mutex.
#[derive(Debug, Default)]
struct LedgerData {
    /// Active reservations in booking order.
    reservations: Vec<Reservation>,
    /// Occupied (room, date) slots for O(1) collision checks.
    slots: HashSet<Slot>,
    /// Active reservation count per room, for strict policy and availability.
    per_room: HashMap<RoomNumber, usize>,
}

impl LedgerData {
    fn assert_invariants(&self) {
        debug_assert_eq!(
            self.reservations.len(),
            self.slots.len(),
            "Invariant violated: two reservations share a slot"
        );
        debug_assert_eq!(
            self.per_room.values().sum::<usize>(),
            self.reservations.len(),
            "Invariant violated: per-room counts out of sync"
        );
    }

    fn insert(&mut self, reservation: Reservation) {
        self.slots.insert(reservation.slot());
        *self
            .per_room
            .entry(reservation.room_number.clone())
            .or_insert(0) += 1;
        self.reservations.push(reservation);
        self.assert_invariants();
    }

    fn remove_at(&mut self, index: usize) {
        let reservation = self.reservations.remove(index);
        self.slots.remove(&reservation.slot());
        if let Some(count) = self.per_room.get_mut(&reservation.room_number) {
            *count -= 1;
            if *count == 0 {
                self.per_room.remove(&reservation.room_number);
            }
        }
        self.assert_invariants();
    }
}

/// Reservation ledger that owns the room catalog and all active bookings.
///
/// # Invariants
///
/// - No two rooms in the catalog share a room number.
/// - At most one active reservation exists per (room, date) slot.
/// - Under [`BookingPolicy::Strict`], at most one active reservation exists
///   per room across all dates.
/// - A failed operation leaves the ledger exactly as it found it.
pub struct Ledger {
    /// The hotel's room inventory.
    catalog: Catalog,
    /// Strictness applied by `book`.
    policy: BookingPolicy,
    /// Reservation state, serialized behind one lock.
    inner: Mutex<LedgerData>,
}

impl Ledger {
    /// Creates an empty ledger with the permissive booking policy.
    pub fn new() -> Self {
        Self::with_policy(BookingPolicy::Permissive)
    }

    /// Creates an empty ledger with the given booking policy.
    pub fn with_policy(policy: BookingPolicy) -> Self {
        Self {
            catalog: Catalog::new(),
            policy,
            inner: Mutex::new(LedgerData::default()),
        }
    }

    /// Creates a ledger pre-loaded with the demo inventory: double rooms
    /// 89-99 and single rooms 101-116.
    pub fn with_sample_inventory(policy: BookingPolicy) -> Self {
        let ledger = Self::with_policy(policy);
        for number in 89..=99 {
            ledger
                .add_room(RoomNumber(number.to_string()), RoomType::Double)
                .expect("demo inventory has no duplicate numbers");
        }
        for number in 101..=116 {
            ledger
                .add_room(RoomNumber(number.to_string()), RoomType::Single)
                .expect("demo inventory has no duplicate numbers");
        }
        ledger
    }

    /// The booking policy this ledger applies.
    pub fn policy(&self) -> BookingPolicy {
        self.policy
    }

    /// Registers a room in the catalog.
    ///
    /// # Errors
    ///
    /// [`ReservationError::DuplicateRoomNumber`] if the number already exists;
    /// the catalog is unchanged in that case.
    pub fn add_room(
        &self,
        number: RoomNumber,
        room_type: RoomType,
    ) -> Result<(), ReservationError> {
        self.catalog.add_room(number, room_type)
    }

    /// Looks up a room by number.
    pub fn find_room(&self, number: &RoomNumber) -> Option<Arc<Room>> {
        self.catalog.find_room(number)
    }

    /// All rooms in catalog registration order.
    pub fn rooms(&self) -> Vec<Arc<Room>> {
        self.catalog.rooms()
    }

    /// Books a room for a date and returns the nightly rate.
    ///
    /// The whole check-then-insert sequence runs under one lock, so no other
    /// call can slip a conflicting reservation in between.
    ///
    /// # Errors
    ///
    /// - [`ReservationError::SlotAlreadyBooked`] - the exact (room, date) slot
    ///   is taken.
    /// - [`ReservationError::UnknownRoom`] - the room is not in the catalog.
    /// - [`ReservationError::RoomAlreadyReserved`] - strict policy only: the
    ///   room holds a reservation for some other date.
    ///
    /// On any error the ledger is unchanged.
    pub fn book(
        &self,
        number: RoomNumber,
        date: BookingDate,
    ) -> Result<Decimal, ReservationError> {
        let mut data = self.inner.lock();

        // The exact slot is checked before the room lookup; a collision wins
        // over UnknownRoom.
        if data.slots.contains(&(number.clone(), date.clone())) {
            return Err(ReservationError::SlotAlreadyBooked);
        }

        let room = self
            .catalog
            .find_room(&number)
            .ok_or(ReservationError::UnknownRoom)?;

        if self.policy == BookingPolicy::Strict && data.per_room.contains_key(&number) {
            return Err(ReservationError::RoomAlreadyReserved);
        }

        data.insert(Reservation::new(number, date));
        Ok(room.rate)
    }

    /// Cancels the reservation matching both room and date.
    ///
    /// At most one reservation is removed per call; the slot invariant
    /// guarantees at most one match exists.
    ///
    /// # Errors
    ///
    /// [`ReservationError::NoSuchReservation`] when no exact match exists.
    pub fn cancel(&self, number: &RoomNumber, date: &BookingDate) -> Result<(), ReservationError> {
        let mut data = self.inner.lock();

        let index = data
            .reservations
            .iter()
            .position(|r| r.matches(number, date))
            .ok_or(ReservationError::NoSuchReservation)?;

        data.remove_at(index);
        Ok(())
    }

    /// Snapshot of all active reservations in booking order.
    ///
    /// An empty vector is a valid result; "no reservations" messaging is the
    /// caller's concern.
    pub fn reservations(&self) -> Vec<Reservation> {
        self.inner.lock().reservations.clone()
    }

    /// Number of active reservations.
    pub fn reservation_count(&self) -> usize {
        self.inner.lock().reservations.len()
    }

    /// Rooms with no active reservation, in catalog registration order.
    ///
    /// A room with a reservation on *any* date counts as unavailable; this
    /// query is deliberately not date-scoped.
    pub fn available_rooms(&self) -> Vec<Arc<Room>> {
        let data = self.inner.lock();
        self.catalog
            .rooms()
            .into_iter()
            .filter(|room| !data.per_room.contains_key(&room.number))
            .collect()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
