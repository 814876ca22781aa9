//! Booking registry: the single owner of seat state and passenger records.
//!
//! [`BookingRegistry`] holds the [`SeatGrid`], the [`ReferenceGenerator`] and
//! the passenger records keyed by [`BookingReference`]. Booking a seat and
//! storing its passenger, or freeing a seat and dropping its passenger,
//! happen inside one `&mut self` call, so the grid and the records never
//! disagree.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │ BookingRegistry │    │    SeatGrid     │
//! │  (CLI / tests)  │───▶│ (booking_ops,   │───▶│ + Reference     │
//! │                 │    │  query_ops)     │    │   Generator     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: configures the layout and reference seed
//! - [`booking_ops`]: book, free by reference, free by seat
//! - [`query_ops`]: lookups, listings, availability, recommendation
//!
//! # Usage
//!
//! ```rust
//! use seatbook_core::{
//!     models::{PassengerDetails, Preference},
//!     RegistryBuilder,
//! };
//!
//! let mut registry = RegistryBuilder::new().build()?;
//!
//! let seat = registry.recommend(Preference::Window).expect("empty cabin");
//! let reference = registry.book(
//!     seat,
//!     PassengerDetails {
//!         first_name: "Ada".to_string(),
//!         last_name: "Lovelace".to_string(),
//!         passport_number: "P1234567".to_string(),
//!     },
//! )?;
//!
//! assert_eq!(registry.lookup_passenger(&reference).unwrap().seat, seat);
//! assert_eq!(registry.free(&reference)?, seat);
//! # Ok::<(), seatbook_core::SeatError>(())
//! ```

use std::collections::HashMap;

use crate::{
    generator::ReferenceGenerator,
    grid::SeatGrid,
    models::{Booking, BookingReference},
};

pub mod booking_ops;
pub mod builder;
pub mod query_ops;


pub use builder::RegistryBuilder;

/// Authoritative store of bookings for one cabin.
#[derive(Debug)]
pub struct BookingRegistry {
    pub(crate) grid: SeatGrid,
    pub(crate) references: ReferenceGenerator,
    pub(crate) bookings: HashMap<BookingReference, Booking>,
    /// Active references in the order they were booked
    pub(crate) order: Vec<BookingReference>,
}

impl BookingRegistry {
    /// Creates a registry over an already built grid.
    pub fn new(grid: SeatGrid, references: ReferenceGenerator) -> Self {
        Self {
            grid,
            references,
            bookings: HashMap::new(),
            order: Vec::new(),
        }
    }
}
