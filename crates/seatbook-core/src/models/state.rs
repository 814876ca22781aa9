//! Seat state enumerations.

use serde::{Deserialize, Serialize};

use super::BookingReference;

/// Why a cell can never be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnbookableKind {
    /// Walkway, either a whole aisle row or an aisle column
    Aisle,

    /// Galley or storage space inside a passenger row
    Storage,
}

impl UnbookableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnbookableKind::Aisle => "aisle",
            UnbookableKind::Storage => "storage",
        }
    }
}

/// State of a single cell in the seat grid.
///
/// `Unbookable` cells are fixed when the layout is built. At runtime only
/// `Free` and `Booked` ever change into one another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "state", content = "detail")]
pub enum SeatState {
    /// Seat can be booked
    Free,

    /// Aisle or storage cell
    Unbookable(UnbookableKind),

    /// Seat is held by the booking with this reference
    Booked(BookingReference),
}

impl SeatState {
    pub fn is_free(&self) -> bool {
        matches!(self, SeatState::Free)
    }

    pub fn is_bookable(&self) -> bool {
        !matches!(self, SeatState::Unbookable(_))
    }

    /// Reference holding the seat, if booked.
    pub fn reference(&self) -> Option<&BookingReference> {
        match self {
            SeatState::Booked(reference) => Some(reference),
            _ => None,
        }
    }

    /// Short state name used in transition errors and logs.
    ///
    /// Never includes the booking reference.
    pub fn name(&self) -> &'static str {
        match self {
            SeatState::Free => "free",
            SeatState::Unbookable(kind) => kind.as_str(),
            SeatState::Booked(_) => "booked",
        }
    }
}

/// Outcome of an availability check on a single seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    /// Seat is free to book
    Available,

    /// Seat is held by a booking
    Booked,

    /// Aisle or storage cell
    NotBookable(UnbookableKind),
}

impl From<&SeatState> for Availability {
    fn from(state: &SeatState) -> Self {
        match state {
            SeatState::Free => Availability::Available,
            SeatState::Booked(_) => Availability::Booked,
            SeatState::Unbookable(kind) => Availability::NotBookable(*kind),
        }
    }
}
