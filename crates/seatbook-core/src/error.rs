//! Error types for the seat booking library.

use thiserror::Error;

use crate::models::{BookingReference, SeatPosition, UnbookableKind};

/// Error type for all seat inventory and booking operations.
///
/// Every variant is recoverable: callers translate them into user-facing
/// messages and carry on. Nothing in the core treats them as fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeatError {
    /// Position lies outside the grid bounds
    #[error("Seat {position} does not exist")]
    OutOfRange { position: SeatPosition },
    /// Position addresses an aisle or storage cell
    #[error("Seat {position} is not bookable ({kind})")]
    Unbookable {
        position: SeatPosition,
        kind: UnbookableKind,
    },
    /// Booking was attempted on an occupied seat
    #[error("Seat {position} is already booked")]
    SeatNotFree { position: SeatPosition },
    /// Freeing was attempted on a seat nobody holds
    #[error("Seat {position} is not booked")]
    NotBooked { position: SeatPosition },
    /// A seat state change that the state machine does not allow
    #[error("Seat {position} cannot change from {from} to {to}")]
    InvalidTransition {
        position: SeatPosition,
        from: &'static str,
        to: &'static str,
    },
    /// No active booking carries the given reference
    #[error("Booking reference {reference} not found")]
    ReferenceNotFound { reference: BookingReference },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Layout description that cannot produce a usable grid
    #[error("Invalid layout: {reason}")]
    InvalidLayout { reason: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> SeatError {
        SeatError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl SeatError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a layout error with the given reason.
    pub fn invalid_layout(reason: impl Into<String>) -> Self {
        SeatError::InvalidLayout {
            reason: reason.into(),
        }
    }

    /// Whether the error describes a seat that cannot be used right now, as
    /// opposed to malformed input or a missing booking.
    pub fn is_seat_rejection(&self) -> bool {
        matches!(
            self,
            SeatError::Unbookable { .. }
                | SeatError::SeatNotFree { .. }
                | SeatError::NotBooked { .. }
                | SeatError::InvalidTransition { .. }
        )
    }
}

/// Result type alias for seat booking operations
pub type Result<T> = std::result::Result<T, SeatError>;
