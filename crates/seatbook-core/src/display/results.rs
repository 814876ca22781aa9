//! Result wrapper types for displaying operation outcomes.
//!
//! Each wrapper carries exactly what its audience may see. A confirmation
//! shows the passenger their own reference; none of these types ever holds
//! another passenger's data.

use std::fmt;

use crate::models::{Availability, BookingReference, PassengerRecord, Preference, SeatPosition};

/// Outcome of a successful booking, shown to the person who made it.
///
/// # Examples
///
/// ```rust
/// use seatbook_core::{
///     display::BookingConfirmation,
///     models::{PassengerRecord, SeatPosition},
/// };
///
/// let confirmation = BookingConfirmation {
///     reference: "AB12CD34".parse().unwrap(),
///     passenger: PassengerRecord {
///         first_name: "Ada".to_string(),
///         last_name: "Lovelace".to_string(),
///         passport_number: "P1234567".to_string(),
///         seat: SeatPosition::new(0, 0),
///     },
/// };
///
/// let output = confirmation.to_string();
/// assert!(output.contains("Booking confirmed for Ada Lovelace"));
/// assert!(output.contains("- Reference: AB12CD34"));
/// ```
#[derive(Debug, Clone)]
pub struct BookingConfirmation {
    pub reference: BookingReference,
    pub passenger: PassengerRecord,
}

impl fmt::Display for BookingConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Booking confirmed for {}.", self.passenger.full_name())?;
        writeln!(f)?;
        writeln!(f, "- Seat: {}", self.passenger.seat)?;
        writeln!(f, "- Reference: {}", self.reference)?;
        writeln!(f)?;
        writeln!(f, "Keep this reference to cancel the booking later.")
    }
}

/// Outcome of freeing a seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreedSeat {
    pub position: SeatPosition,
    pub reference: BookingReference,
}

impl fmt::Display for FreedSeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Seat {} is free again; booking {} has been cancelled.",
            self.position, self.reference
        )
    }
}

/// Outcome of a seat recommendation. An empty result is a normal answer,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub preference: Preference,
    pub seat: Option<SeatPosition>,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.seat, self.preference) {
            (Some(seat), _) => writeln!(
                f,
                "Recommended seat: {seat} (row {}, seat {})",
                seat.row_number(),
                seat.column_letter().unwrap_or('?')
            ),
            (None, Preference::None) => writeln!(f, "No available seats."),
            (None, preference) => {
                writeln!(f, "No available seats matching your {preference} preference.")
            }
        }
    }
}

/// Availability of a single seat, phrased for the person who asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityReport {
    pub position: SeatPosition,
    pub availability: Availability,
}

impl fmt::Display for AvailabilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Seat {} is {}.", self.position, self.availability)
    }
}
