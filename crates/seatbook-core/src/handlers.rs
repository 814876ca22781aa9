//! Core handler functions for the booking workflows.
//!
//! Each handler takes a registry and a parameter struct and returns a
//! display-ready result, so an interface only has to collect input and print
//! what comes back.
//!
//! ```text
//! Interface → Handler → BookingRegistry → SeatGrid / ReferenceGenerator
//! ```
//!
//! ### Query Handlers
//! Borrow the registry immutably and never change state:
//! ```text
//! pub fn handle_check_availability(registry: &BookingRegistry, params: &Seat) -> Result<AvailabilityReport>
//! ```
//!
//! ### Command Handlers
//! Borrow the registry mutably and report what changed:
//! ```text
//! pub fn handle_book(registry: &mut BookingRegistry, params: &BookSeat) -> Result<BookingConfirmation>
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use seatbook_core::{
//!     handlers::{handle_book, handle_free_by_reference, handle_recommend},
//!     models::{PassengerDetails, Preference},
//!     params::{BookSeat, FreeByReference, Recommend},
//!     RegistryBuilder,
//! };
//!
//! let mut registry = RegistryBuilder::new().build()?;
//!
//! let recommendation = handle_recommend(&registry, &Recommend { preference: Preference::Aisle });
//! let seat = recommendation.seat.expect("empty cabin has aisle seats");
//!
//! let confirmation = handle_book(
//!     &mut registry,
//!     &BookSeat {
//!         position: seat,
//!         passenger: PassengerDetails {
//!             first_name: "Alan".to_string(),
//!             last_name: "Turing".to_string(),
//!             passport_number: "T1912000".to_string(),
//!         },
//!     },
//! )?;
//!
//! // References are matched case-insensitively
//! let typed = confirmation.reference.as_str().to_lowercase();
//! let freed = handle_free_by_reference(&mut registry, &FreeByReference { reference: typed })?;
//! assert_eq!(freed.position, seat);
//! # Ok::<(), seatbook_core::SeatError>(())
//! ```

use crate::{
    display::{AvailabilityReport, BookingConfirmation, Bookings, FreedSeat, Recommendation, SeatMap},
    error::{Result, SeatError},
    models::{BookingReference, Role},
    params::{BookSeat, FreeByReference, Recommend, Seat},
    BookingRegistry,
};

/// Handle checking whether a single seat can be booked.
///
/// # Errors
///
/// Returns `SeatError::OutOfRange` if the seat does not exist.
pub fn handle_check_availability(
    registry: &BookingRegistry,
    params: &Seat,
) -> Result<AvailabilityReport> {
    Ok(AvailabilityReport {
        position: params.position,
        availability: registry.availability(params.position)?,
    })
}

/// Handle recommending a seat for a preference.
///
/// Finding nothing is a normal outcome carried in the result.
pub fn handle_recommend(registry: &BookingRegistry, params: &Recommend) -> Recommendation {
    Recommendation {
        preference: params.preference,
        seat: registry.recommend(params.preference),
    }
}

/// Handle booking a seat for a passenger.
///
/// # Errors
///
/// Propagates the registry's rejection when the seat is missing, unbookable
/// or occupied, or a passenger field is blank.
pub fn handle_book(
    registry: &mut BookingRegistry,
    params: &BookSeat,
) -> Result<BookingConfirmation> {
    let reference = registry.book(params.position, params.passenger.clone())?;
    let passenger = registry
        .lookup_passenger(&reference)
        .cloned()
        .ok_or_else(|| SeatError::ReferenceNotFound {
            reference: reference.clone(),
        })?;

    Ok(BookingConfirmation {
        reference,
        passenger,
    })
}

/// Handle freeing a seat by the reference a passenger typed in.
///
/// # Errors
///
/// Returns `SeatError::InvalidInput` for text that cannot be a reference and
/// `SeatError::ReferenceNotFound` when no active booking carries it.
pub fn handle_free_by_reference(
    registry: &mut BookingRegistry,
    params: &FreeByReference,
) -> Result<FreedSeat> {
    let reference: BookingReference = params.reference.parse()?;
    let position = registry.free(&reference)?;
    Ok(FreedSeat {
        position,
        reference,
    })
}

/// Handle freeing whatever booking occupies a seat.
///
/// # Errors
///
/// Returns the registry's error when the seat is missing, unbookable or not
/// booked.
pub fn handle_free_seat(registry: &mut BookingRegistry, params: &Seat) -> Result<FreedSeat> {
    let reference = registry.free_at(params.position)?;
    Ok(FreedSeat {
        position: params.position,
        reference,
    })
}

/// Handle listing every active booking in booking order.
pub fn handle_list_bookings(registry: &BookingRegistry) -> Bookings<'_> {
    Bookings(registry.all_bookings())
}

/// Handle showing the cabin map as `role` may see it.
pub fn handle_seat_map(registry: &BookingRegistry, role: Role) -> SeatMap<'_> {
    SeatMap::new(registry.grid(), role)
}
