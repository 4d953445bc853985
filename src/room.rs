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

//! Room inventory types.
//!
//! A [`Room`] is a flat record with a [`RoomType`] tag; the nightly rate is a
//! fixed per-type lookup, not a per-room attribute the caller chooses.

use crate::base::RoomNumber;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Room category with a fixed nightly rate.
///
/// Rates are in the currency's smallest meaningful unit (HUF).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Single,
    Double,
}

impl RoomType {
    /// Nightly rate for this room type.
    pub fn nightly_rate(&self) -> Decimal {
        match self {
            RoomType::Single => dec!(70000),
            RoomType::Double => dec!(130000),
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomType::Single => write!(f, "single"),
            RoomType::Double => write!(f, "double"),
        }
    }
}

/// A room in the hotel's inventory.
///
/// Created once at catalog insertion and never mutated; the rate is derived
/// from the room type at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub number: RoomNumber,
    pub room_type: RoomType,
    pub rate: Decimal,
}

impl Room {
    pub fn new(number: RoomNumber, room_type: RoomType) -> Self {
        Self {
            number,
            room_type,
            rate: room_type.nightly_rate(),
        }
    }
}
