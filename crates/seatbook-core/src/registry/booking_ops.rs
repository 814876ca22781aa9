//! Booking and freeing operations for the BookingRegistry.

use jiff::Timestamp;
use log::{info, warn};

use super::BookingRegistry;
use crate::{
    error::{Result, SeatError},
    models::{Booking, BookingReference, PassengerDetails, PassengerRecord, SeatPosition, SeatState},
};

impl BookingRegistry {
    /// Books the seat at `position` for a passenger and returns the new
    /// booking reference.
    ///
    /// The seat is checked again here even if it was just recommended, since
    /// a confirmation step usually sits between the two calls. Nothing
    /// changes when any check fails.
    ///
    /// # Errors
    ///
    /// - `SeatError::OutOfRange` if the position is outside the grid
    /// - `SeatError::Unbookable` for aisle and storage cells
    /// - `SeatError::SeatNotFree` if the seat is already booked
    /// - `SeatError::InvalidInput` if a passenger field is blank
    pub fn book(
        &mut self,
        position: SeatPosition,
        passenger: PassengerDetails,
    ) -> Result<BookingReference> {
        match self.grid.get(position)? {
            SeatState::Free => {}
            SeatState::Unbookable(kind) => {
                warn!("Rejected booking of {kind} cell {position}");
                return Err(SeatError::Unbookable {
                    position,
                    kind: *kind,
                });
            }
            SeatState::Booked(_) => {
                warn!("Rejected booking of occupied seat {position}");
                return Err(SeatError::SeatNotFree { position });
            }
        }
        validate_passenger(&passenger)?;

        let reference = self.references.next_reference();
        self.grid.set_booked(position, reference.clone())?;
        self.bookings.insert(
            reference.clone(),
            Booking {
                reference: reference.clone(),
                passenger: PassengerRecord::new(passenger, position),
                booked_at: Timestamp::now(),
            },
        );
        self.order.push(reference.clone());

        info!("Booked seat {position} under reference {reference}");
        Ok(reference)
    }

    /// Frees the seat held by `reference` and deletes its passenger record,
    /// returning the freed position.
    ///
    /// The reference is retired, not recycled: it will never be issued again.
    ///
    /// # Errors
    ///
    /// Returns `SeatError::ReferenceNotFound` if no active booking carries
    /// the reference, including one that was already freed.
    pub fn free(&mut self, reference: &BookingReference) -> Result<SeatPosition> {
        let Some(position) = self.grid.find_by_reference(reference) else {
            warn!("Free requested for unknown reference {reference}");
            return Err(SeatError::ReferenceNotFound {
                reference: reference.clone(),
            });
        };

        self.grid.set_free(position)?;
        self.remove_record(reference);

        info!("Freed seat {position} held by reference {reference}");
        Ok(position)
    }

    /// Frees whatever booking occupies `position`, returning its reference.
    ///
    /// # Errors
    ///
    /// - `SeatError::OutOfRange` if the position is outside the grid
    /// - `SeatError::Unbookable` for aisle and storage cells
    /// - `SeatError::NotBooked` if the seat is free
    pub fn free_at(&mut self, position: SeatPosition) -> Result<BookingReference> {
        match self.grid.get(position)? {
            SeatState::Booked(_) => {}
            SeatState::Unbookable(kind) => {
                return Err(SeatError::Unbookable {
                    position,
                    kind: *kind,
                });
            }
            SeatState::Free => return Err(SeatError::NotBooked { position }),
        }

        let reference = self.grid.set_free(position)?;
        self.remove_record(&reference);

        info!("Freed seat {position} held by reference {reference}");
        Ok(reference)
    }

    fn remove_record(&mut self, reference: &BookingReference) {
        self.bookings.remove(reference);
        self.order.retain(|active| active != reference);
    }
}

/// Passenger fields only need to be present; their format is the caller's
/// business.
fn validate_passenger(passenger: &PassengerDetails) -> Result<()> {
    let fields = [
        ("first_name", &passenger.first_name),
        ("last_name", &passenger.last_name),
        ("passport_number", &passenger.passport_number),
    ];
    for (field, value) in fields {
        if value.trim().is_empty() {
            return Err(SeatError::invalid_input(field).with_reason("must not be blank"));
        }
    }
    Ok(())
}
