//! Passenger and booking records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{BookingReference, SeatPosition};

/// Passenger details as collected by the caller, before a seat is attached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerDetails {
    pub first_name: String,
    pub last_name: String,
    pub passport_number: String,
}

/// Passenger stored against a booking reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerRecord {
    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Passport number, stored as entered
    pub passport_number: String,

    /// Seat held by this passenger
    pub seat: SeatPosition,
}

impl PassengerRecord {
    pub fn new(details: PassengerDetails, seat: SeatPosition) -> Self {
        Self {
            first_name: details.first_name,
            last_name: details.last_name,
            passport_number: details.passport_number,
            seat,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Registry entry tying a reference to its passenger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub reference: BookingReference,
    pub passenger: PassengerRecord,

    /// When the booking was committed (UTC)
    pub booked_at: Timestamp,
}
