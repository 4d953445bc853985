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

//! Room catalog with duplicate rejection.
//!
//! The catalog is the hotel's static inventory: a map from room number to
//! [`Room`] that refuses duplicate numbers and preserves insertion order for
//! listing. Rooms are added at initialization and never removed.

use crate::ReservationError;
use crate::base::RoomNumber;
use crate::room::{Room, RoomType};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parking_lot::Mutex;
use std::sync::Arc;

/// Insertion-ordered room registry with duplicate detection.
///
/// Combines a [`DashMap`] for O(1) lookup and atomic check-and-insert with an
/// order list so [`Catalog::rooms`] can replay the inventory in the order it
/// was registered.
#[derive(Debug)]
pub struct Catalog {
    /// Rooms indexed by number for O(1) duplicate detection and lookup.
    rooms: DashMap<RoomNumber, Arc<Room>>,

    /// Room numbers in registration order, for stable listing.
    order: Mutex<Vec<RoomNumber>>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
            order: Mutex::new(Vec::new()),
        }
    }

    /// Registers a room, deriving its rate from `room_type`.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationError::DuplicateRoomNumber`] if a room with the
    /// same number already exists. The existing room is never overwritten.
    pub fn add_room(
        &self,
        number: RoomNumber,
        room_type: RoomType,
    ) -> Result<(), ReservationError> {
        // Entry API gives an atomic check-and-insert so two concurrent adds
        // of the same number cannot both succeed.
        match self.rooms.entry(number.clone()) {
            Entry::Occupied(_) => Err(ReservationError::DuplicateRoomNumber),
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(Room::new(number.clone(), room_type)));
                self.order.lock().push(number);
                Ok(())
            }
        }
    }

    /// Looks up a room by number. Pure read, no side effects.
    pub fn find_room(&self, number: &RoomNumber) -> Option<Arc<Room>> {
        self.rooms.get(number).map(|entry| Arc::clone(entry.value()))
    }

    /// Snapshot of all rooms in registration order.
    pub fn rooms(&self) -> Vec<Arc<Room>> {
        let order = self.order.lock();
        order
            .iter()
            .filter_map(|number| self.find_room(number))
            .collect()
    }

    /// Number of registered rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn add_and_find_room() {
        let catalog = Catalog::new();
        catalog
            .add_room(RoomNumber::from("89"), RoomType::Double)
            .unwrap();

        let room = catalog.find_room(&RoomNumber::from("89")).unwrap();
        assert_eq!(room.room_type, RoomType::Double);
        assert_eq!(room.rate, dec!(130000));
    }

    #[test]
    fn duplicate_number_is_rejected_not_overwritten() {
        let catalog = Catalog::new();
        catalog
            .add_room(RoomNumber::from("89"), RoomType::Double)
            .unwrap();

        let result = catalog.add_room(RoomNumber::from("89"), RoomType::Single);
        assert_eq!(result, Err(ReservationError::DuplicateRoomNumber));

        // First registration wins
        let room = catalog.find_room(&RoomNumber::from("89")).unwrap();
        assert_eq!(room.room_type, RoomType::Double);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn rooms_iterate_in_insertion_order() {
        let catalog = Catalog::new();
        for number in ["103", "101", "102"] {
            catalog
                .add_room(RoomNumber::from(number), RoomType::Single)
                .unwrap();
        }

        let rooms = catalog.rooms();
        let numbers: Vec<&str> = rooms.iter().map(|r| r.number.as_str()).collect();
        assert_eq!(numbers, vec!["103", "101", "102"]);
    }

    #[test]
    fn find_missing_room_returns_none() {
        let catalog = Catalog::new();
        assert!(catalog.find_room(&RoomNumber::from("999")).is_none());
    }
}
