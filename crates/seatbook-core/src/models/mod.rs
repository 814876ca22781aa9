//! Data models for seats, references, and bookings.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping the data structures free of
//! presentation logic.
//!
//! # Seat state
//!
//! Each grid cell holds a [`SeatState`]:
//!
//! - `Free`: bookable and unoccupied
//! - `Unbookable(Aisle | Storage)`: fixed when the layout is built
//! - `Booked(reference)`: held by the booking with that reference
//!
//! The booking identity lives in the cell only as a [`BookingReference`]; the
//! passenger belongs to the registry, keyed by the same reference.
//!
//! # Examples
//!
//! ```rust
//! use seatbook_core::models::{BookingReference, Preference, SeatPosition};
//!
//! let seat = SeatPosition::from_label(12, 'a').unwrap();
//! assert_eq!(seat, SeatPosition::new(11, 0));
//! assert_eq!(seat.to_string(), "12A");
//!
//! let reference: BookingReference = " ab12cd34 ".parse().unwrap();
//! assert_eq!(reference.as_str(), "AB12CD34");
//!
//! assert_eq!("Window".parse::<Preference>(), Ok(Preference::Window));
//! ```

pub mod passenger;
pub mod position;
pub mod preference;
pub mod reference;
pub mod state;


pub use passenger::{Booking, PassengerDetails, PassengerRecord};
pub use position::{column_index, column_letter, SeatPosition, MAX_COLUMNS};
pub use preference::{Preference, Role};
pub use reference::{BookingReference, REFERENCE_ALPHABET, REFERENCE_LENGTH};
pub use state::{Availability, SeatState, UnbookableKind};
