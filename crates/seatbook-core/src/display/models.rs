//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the data structures stay free of
//! presentation logic. Output is markdown for the terminal renderer.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use crate::{
    models::{
        Availability, Booking, BookingReference, PassengerRecord, Preference, Role, SeatPosition,
        UnbookableKind,
    },
    visibility::DisplaySymbol,
};

/// Timestamp shown in the system time zone, e.g. `2025-03-01 14:05 CET`.
struct LocalTime<'a>(&'a Timestamp);

impl fmt::Display for LocalTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}

impl fmt::Display for SeatPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column_letter() {
            Some(letter) => write!(f, "{}{letter}", self.row_number()),
            None => write!(f, "row {}, column {}", self.row_number(), self.column + 1),
        }
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnbookableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Available => f.write_str("available"),
            Availability::Booked => f.write_str("already booked"),
            Availability::NotBookable(kind) => write!(f, "not bookable ({kind})"),
        }
    }
}

impl fmt::Display for DisplaySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplaySymbol::Free => f.write_str("F"),
            DisplaySymbol::Occupied => f.write_str("R"),
            DisplaySymbol::Booked(reference) => write!(f, "{reference}"),
            DisplaySymbol::Aisle => f.write_str("X"),
            DisplaySymbol::Storage => f.write_str("S"),
        }
    }
}

impl fmt::Display for PassengerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Passenger: {}", self.full_name())?;
        writeln!(f, "- Passport: {}", self.passport_number)?;
        writeln!(f, "- Seat: {}", self.seat)
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.reference)?;
        writeln!(f)?;
        write!(f, "{}", self.passenger)?;
        writeln!(f, "- Booked: {}", LocalTime(&self.booked_at))?;
        writeln!(f)
    }
}
