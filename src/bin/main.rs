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

use chrono::{Local, NaiveDate};
use clap::Parser;
use csv::{ReaderBuilder, Trim, Writer};
use hotel_ledger_rs::{BookingDate, BookingPolicy, Ledger, RoomNumber, RoomType};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;
use std::process;

/// Hotel Ledger - Process reservation command CSV files
///
/// Reads add_room/book/cancel commands from a CSV file and outputs the
/// resulting reservations (or available rooms) to stdout.
#[derive(Parser, Debug)]
#[command(name = "hotel-ledger-rs")]
#[command(about = "A reservation ledger that processes booking command CSVs", long_about = None)]
struct Args {
    /// Path to CSV file with commands
    ///
    /// Expected format: op,room,value
    /// Example: cargo run -- commands.csv > reservations.csv
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Reject any booking for a room that already holds a reservation,
    /// regardless of date
    #[arg(long)]
    strict: bool,

    /// Start from the demo inventory (doubles 89-99, singles 101-116)
    /// instead of an empty catalog
    #[arg(long)]
    sample_inventory: bool,

    /// Output available rooms instead of reservations
    #[arg(long)]
    available: bool,
}

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    let policy = if args.strict {
        BookingPolicy::Strict
    } else {
        BookingPolicy::Permissive
    };
    let ledger = if args.sample_inventory {
        Ledger::with_sample_inventory(policy)
    } else {
        Ledger::with_policy(policy)
    };

    // Open input file
    let file = match File::open(&args.input) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error opening file '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    // Process commands from CSV
    if let Err(e) = process_commands(BufReader::new(file), &ledger) {
        eprintln!("Error processing commands: {}", e);
        process::exit(1);
    }

    // Write results to stdout
    let result = if args.available {
        write_available_rooms(&ledger, std::io::stdout())
    } else {
        write_reservations(&ledger, std::io::stdout())
    };
    if let Err(e) = result {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}

/// Raw CSV record matching the input format.
///
/// Fields: `op, room, value`
/// - `op`: add_room, book, or cancel
/// - `room`: room number
/// - `value`: room type for add_room, date (YYYY-MM-DD) for book/cancel
#[derive(Debug, Deserialize)]
struct CsvRecord {
    op: String,
    room: String,
    value: String,
}

/// A validated ledger command.
#[derive(Debug)]
enum Command {
    AddRoom(RoomNumber, RoomType),
    Book(RoomNumber, BookingDate),
    Cancel(RoomNumber, BookingDate),
}

impl CsvRecord {
    /// Converts the record into a command, applying the caller-side date
    /// pre-check the ledger itself does not perform.
    ///
    /// Returns `None` for unknown ops, empty room numbers, unknown room
    /// types, malformed dates, and dates not in the future.
    fn into_command(self, today: NaiveDate) -> Option<Command> {
        if self.room.is_empty() {
            return None;
        }
        let room = RoomNumber(self.room);

        match self.op.to_lowercase().as_str() {
            "add_room" => {
                let room_type = match self.value.to_lowercase().as_str() {
                    "single" => RoomType::Single,
                    "double" => RoomType::Double,
                    _ => return None,
                };
                Some(Command::AddRoom(room, room_type))
            }
            "book" => {
                let date = validate_date(&self.value, today)?;
                Some(Command::Book(room, date))
            }
            "cancel" => {
                let date = validate_date(&self.value, today)?;
                Some(Command::Cancel(room, date))
            }
            _ => None,
        }
    }
}

/// Parses a `YYYY-MM-DD` date string and requires it to be after `today`.
///
/// The ledger treats dates as opaque keys; this front end owns format and
/// future-date validation.
fn validate_date(value: &str, today: NaiveDate) -> Option<BookingDate> {
    let parsed = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    if parsed <= today {
        return None;
    }
    Some(BookingDate(value.to_owned()))
}

/// Process commands from a CSV reader against the given ledger.
///
/// Streaming parse in the same shape as a transaction CSV pipeline: malformed
/// rows and rows failing the date pre-check are skipped with a note on
/// stderr, and ledger rejections are reported per row without stopping the
/// run.
///
/// # Errors
///
/// Returns a CSV error if the reader fails or the CSV structure is invalid.
pub fn process_commands<R: Read>(reader: R, ledger: &Ledger) -> Result<(), csv::Error> {
    let today = Local::now().date_naive();

    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All) // Handle whitespace in fields like " book "
        .has_headers(true) // Skip first row as header
        .from_reader(reader);

    for result in rdr.deserialize::<CsvRecord>() {
        match result {
            Ok(record) => {
                let Some(command) = record.into_command(today) else {
                    eprintln!("Skipping invalid command row");
                    continue;
                };

                match command {
                    Command::AddRoom(room, room_type) => {
                        if let Err(e) = ledger.add_room(room.clone(), room_type) {
                            eprintln!("Rejected for room {}: {}", room, e);
                        }
                    }
                    Command::Book(room, date) => match ledger.book(room.clone(), date) {
                        Ok(rate) => eprintln!("Booked room {} at rate {}", room, rate),
                        Err(e) => eprintln!("Rejected for room {}: {}", room, e),
                    },
                    Command::Cancel(room, date) => {
                        if let Err(e) = ledger.cancel(&room, &date) {
                            eprintln!("Rejected for room {}: {}", room, e);
                        }
                    }
                }
            }
            Err(e) => {
                // Skip malformed rows
                eprintln!("Skipping malformed row: {}", e);
                continue;
            }
        }
    }

    Ok(())
}

/// Write active reservations to a CSV writer in booking order.
///
/// # CSV Format
///
/// Columns: `room, date`
///
/// # Errors
///
/// Returns a CSV error if writing fails.
pub fn write_reservations<W: Write>(ledger: &Ledger, writer: W) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_writer(writer);

    wtr.write_record(["room", "date"])?;
    for reservation in ledger.reservations() {
        wtr.write_record([reservation.room_number.as_str(), reservation.date.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write rooms with no active reservation to a CSV writer, in catalog order.
///
/// # CSV Format
///
/// Columns: `room, type, rate`
///
/// # Errors
///
/// Returns a CSV error if writing fails.
pub fn write_available_rooms<W: Write>(ledger: &Ledger, writer: W) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_writer(writer);

    wtr.write_record(["room", "type", "rate"])?;
    for room in ledger.available_rooms() {
        wtr.write_record([
            room.number.as_str(),
            &room.room_type.to_string(),
            &room.rate.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
