//! Parameter structures for seat booking operations
//!
//! These structures carry already-parsed input from an interface (the
//! interactive CLI today) into the [`crate::handlers`] without any
//! framework-specific derives. The interface owns parsing: it turns "12A"
//! into a [`SeatPosition`] and "window" into a [`Preference`], and rejects
//! anything it cannot parse before a handler is called. The core still
//! validates every position against the grid.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Prompt input   │    │  Core Params    │    │    Handlers     │
//! │ ("12A", "y")    │───▶│ (typed fields)  │───▶│ (registry ops)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use crate::models::{PassengerDetails, Preference, SeatPosition};

/// Parameters for operations on a single seat: availability checks and
/// staff freeing by position.
#[derive(Debug, Clone, Copy)]
pub struct Seat {
    /// Seat to operate on
    pub position: SeatPosition,
}

/// Parameters for asking for a recommended seat.
#[derive(Debug, Clone, Copy, Default)]
pub struct Recommend {
    /// Requested seat category
    pub preference: Preference,
}

/// Parameters for booking a seat.
#[derive(Debug, Clone)]
pub struct BookSeat {
    /// Seat to book, usually the one just recommended
    pub position: SeatPosition,
    /// Passenger details collected by the interface
    pub passenger: PassengerDetails,
}

/// Parameters for freeing a seat by booking reference.
#[derive(Debug, Clone, Default)]
pub struct FreeByReference {
    /// Reference as typed by the user; case and surrounding whitespace are
    /// ignored
    pub reference: String,
}
