//! Read-only queries for the BookingRegistry.

use log::debug;

use super::BookingRegistry;
use crate::{
    error::Result,
    grid::SeatGrid,
    models::{Availability, Booking, BookingReference, PassengerRecord, Preference, SeatPosition},
    recommender,
};

impl BookingRegistry {
    /// The seat grid, for rendering and inspection.
    pub fn grid(&self) -> &SeatGrid {
        &self.grid
    }

    /// First free seat in scan order matching `preference`, if any.
    ///
    /// The result is advisory; [`BookingRegistry::book`] checks the seat
    /// again.
    pub fn recommend(&self, preference: Preference) -> Option<SeatPosition> {
        recommender::recommend(&self.grid, preference)
    }

    /// Reports whether the seat at `position` can be booked.
    ///
    /// # Errors
    ///
    /// Returns `SeatError::OutOfRange` if the position is outside the grid.
    pub fn availability(&self, position: SeatPosition) -> Result<Availability> {
        let availability = Availability::from(self.grid.get(position)?);
        debug!("Seat {position} availability: {availability:?}");
        Ok(availability)
    }

    /// Passenger stored under `reference`, if the booking is active.
    pub fn lookup_passenger(&self, reference: &BookingReference) -> Option<&PassengerRecord> {
        self.bookings.get(reference).map(|booking| &booking.passenger)
    }

    /// Full booking entry stored under `reference`, if active.
    pub fn booking(&self, reference: &BookingReference) -> Option<&Booking> {
        self.bookings.get(reference)
    }

    /// Active bookings in the order they were made.
    pub fn all_bookings(&self) -> Vec<&Booking> {
        self.order
            .iter()
            .filter_map(|reference| self.bookings.get(reference))
            .collect()
    }

    /// Number of active bookings.
    pub fn active_count(&self) -> usize {
        self.order.len()
    }

    /// Whether `reference` was ever issued, including freed bookings.
    pub fn was_issued(&self, reference: &BookingReference) -> bool {
        self.references.has_issued(reference)
    }

    /// Checks that every booked cell has exactly one record under the same
    /// reference and seat, and that no record lacks its cell.
    pub fn is_consistent(&self) -> bool {
        let booked: Vec<_> = self
            .grid
            .iter()
            .filter_map(|(position, state)| state.reference().map(|r| (position, r)))
            .collect();

        booked.len() == self.bookings.len()
            && self.order.len() == self.bookings.len()
            && booked.iter().all(|(position, reference)| {
                self.bookings
                    .get(*reference)
                    .is_some_and(|booking| booking.passenger.seat == *position)
            })
            && self
                .order
                .iter()
                .all(|reference| self.bookings.contains_key(reference))
    }
}
