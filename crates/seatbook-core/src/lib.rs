//! Core library for the Seatbook cabin booking application.
//!
//! This crate owns the seat map of one cabin and everything that changes it:
//! booking and freeing seats, minting booking references, recommending seats
//! by preference, and deciding what each role is allowed to see.
//!
//! # Architecture
//!
//! - **Grid** ([`grid`]): fixed cabin geometry with per-cell state
//! - **References** ([`generator`]): unique 8-character booking references
//! - **Recommendation** ([`recommender`]): first free seat matching a
//!   preference
//! - **Registry** ([`registry`]): the single owner of seats and passenger
//!   records
//! - **Visibility** ([`visibility`]): role-based rendering of each cell
//! - **Display** ([`display`]): markdown output for the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use seatbook_core::{
//!     handlers::{handle_book, handle_recommend, handle_seat_map},
//!     models::{PassengerDetails, Preference, Role},
//!     params::{BookSeat, Recommend},
//!     RegistryBuilder,
//! };
//!
//! let mut registry = RegistryBuilder::new().build()?;
//!
//! let seat = handle_recommend(&registry, &Recommend { preference: Preference::Window })
//!     .seat
//!     .expect("empty cabin has window seats");
//!
//! let confirmation = handle_book(
//!     &mut registry,
//!     &BookSeat {
//!         position: seat,
//!         passenger: PassengerDetails {
//!             first_name: "Ada".to_string(),
//!             last_name: "Lovelace".to_string(),
//!             passport_number: "P1234567".to_string(),
//!         },
//!     },
//! )?;
//! println!("{confirmation}");
//!
//! // Customers see the seat as occupied, never the reference
//! let map = handle_seat_map(&registry, Role::Customer).to_string();
//! assert!(!map.contains(confirmation.reference.as_str()));
//! # Ok::<(), seatbook_core::SeatError>(())
//! ```

pub mod display;
pub mod error;
pub mod generator;
pub mod grid;
pub mod handlers;
pub mod models;
pub mod params;
pub mod recommender;
pub mod registry;
pub mod visibility;

// Re-export commonly used types
pub use display::{
    AvailabilityReport, BookingConfirmation, Bookings, FreedSeat, OperationStatus, Recommendation,
    SeatMap,
};
pub use error::{Result, SeatError};
pub use generator::ReferenceGenerator;
pub use grid::{LayoutSpec, RowSpec, SeatCounts, SeatGrid};
pub use models::{
    Availability, Booking, BookingReference, PassengerDetails, PassengerRecord, Preference, Role,
    SeatPosition, SeatState, UnbookableKind,
};
pub use params::{BookSeat, FreeByReference, Recommend, Seat};
pub use registry::{BookingRegistry, RegistryBuilder};
pub use visibility::{DisplaySymbol, VisibilityPolicy};
