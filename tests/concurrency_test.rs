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

//! Concurrent access tests.
//!
//! The ledger serializes every check-then-mutate sequence behind one lock;
//! these tests hammer it from many threads and verify that the slot invariant
//! survives and that racing bookings for the same slot produce exactly one
//! winner.

use hotel_ledger_rs::{
    BookingDate, BookingPolicy, Ledger, ReservationError, RoomNumber, RoomType,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::thread;

fn number(s: &str) -> RoomNumber {
    RoomNumber::from(s)
}

fn date(s: &str) -> BookingDate {
    BookingDate::from(s)
}

#[test]
fn racing_bookings_for_one_slot_have_exactly_one_winner() {
    let ledger = Arc::new(Ledger::new());
    ledger.add_room(number("89"), RoomType::Double).unwrap();

    let successes = Arc::new(AtomicU32::new(0));
    let collisions = Arc::new(AtomicU32::new(0));

    let mut handles = Vec::new();
    for _ in 0..16 {
        let ledger = Arc::clone(&ledger);
        let successes = Arc::clone(&successes);
        let collisions = Arc::clone(&collisions);
        handles.push(thread::spawn(move || {
            match ledger.book(number("89"), date("2030-01-01")) {
                Ok(_) => successes.fetch_add(1, Ordering::SeqCst),
                Err(ReservationError::SlotAlreadyBooked) => {
                    collisions.fetch_add(1, Ordering::SeqCst)
                }
                Err(e) => panic!("unexpected error: {}", e),
            };
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(successes.load(Ordering::SeqCst), 1);
    assert_eq!(collisions.load(Ordering::SeqCst), 15);
    assert_eq!(ledger.reservation_count(), 1);
}

#[test]
fn racing_strict_bookings_for_one_room_have_exactly_one_winner() {
    let ledger = Arc::new(Ledger::with_policy(BookingPolicy::Strict));
    ledger.add_room(number("101"), RoomType::Single).unwrap();

    let successes = Arc::new(AtomicU32::new(0));

    let mut handles = Vec::new();
    for day in 1..=12 {
        let ledger = Arc::clone(&ledger);
        let successes = Arc::clone(&successes);
        handles.push(thread::spawn(move || {
            let when = BookingDate(format!("2030-06-{:02}", day));
            if ledger.book(number("101"), when).is_ok() {
                successes.fetch_add(1, Ordering::SeqCst);
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(successes.load(Ordering::SeqCst), 1);
    assert_eq!(ledger.reservation_count(), 1);
}

#[test]
fn concurrent_duplicate_room_adds_have_exactly_one_winner() {
    let ledger = Arc::new(Ledger::new());
    let successes = Arc::new(AtomicU32::new(0));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let ledger = Arc::clone(&ledger);
        let successes = Arc::clone(&successes);
        handles.push(thread::spawn(move || {
            if ledger.add_room(number("89"), RoomType::Double).is_ok() {
                successes.fetch_add(1, Ordering::SeqCst);
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(successes.load(Ordering::SeqCst), 1);
    assert_eq!(ledger.rooms().len(), 1);
}

#[test]
fn mixed_book_and_cancel_hammering_preserves_the_slot_invariant() {
    let ledger = Arc::new(Ledger::with_sample_inventory(BookingPolicy::Permissive));

    let mut handles = Vec::new();
    for worker in 0..8u32 {
        let ledger = Arc::clone(&ledger);
        handles.push(thread::spawn(move || {
            for i in 0..50u32 {
                let room = number(if worker % 2 == 0 { "89" } else { "101" });
                let when = BookingDate(format!("2030-01-{:02}", (i % 28) + 1));
                // Book and cancel may both fail under contention; only the
                // invariant matters.
                let _ = ledger.book(room.clone(), when.clone());
                if i % 3 == 0 {
                    let _ = ledger.cancel(&room, &when);
                }
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    // No two active reservations share a (room, date) slot.
    let listed = ledger.reservations();
    let slots: HashSet<_> = listed.iter().map(|r| r.slot()).collect();
    assert_eq!(slots.len(), listed.len());
}

#[test]
fn readers_do_not_block_writers() {
    let ledger = Arc::new(Ledger::with_sample_inventory(BookingPolicy::Permissive));

    let reader = {
        let ledger = Arc::clone(&ledger);
        thread::spawn(move || {
            for _ in 0..200 {
                let _ = ledger.reservations();
                let _ = ledger.available_rooms();
                let _ = ledger.rooms();
            }
        })
    };

    let writer = {
        let ledger = Arc::clone(&ledger);
        thread::spawn(move || {
            for i in 0..200u32 {
                let when = BookingDate(format!("2031-01-{:02}", (i % 28) + 1));
                let _ = ledger.book(number("90"), when.clone());
                let _ = ledger.cancel(&number("90"), &when);
            }
        })
    };

    reader.join().unwrap();
    writer.join().unwrap();
}
