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

//! Core identifier types for rooms and booking dates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a room.
///
/// Wraps a `String`; room numbers stay unique across the catalog for the
/// lifetime of the hotel instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RoomNumber(pub String);

impl RoomNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RoomNumber {
    fn from(s: &str) -> Self {
        RoomNumber(s.to_owned())
    }
}

/// An opaque booking date key.
///
/// The ledger never does date arithmetic; it only needs an equality-comparable,
/// totally-ordered key. Format and future-date validation happen on the caller
/// side before a `BookingDate` is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct BookingDate(pub String);

impl BookingDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BookingDate {
    fn from(s: &str) -> Self {
        BookingDate(s.to_owned())
    }
}
