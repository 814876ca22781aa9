//! One-line status messages for the interactive session.

use std::fmt;

use crate::error::SeatError;

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Notice,
    Error,
}

/// Wrapper type for displaying a prefixed status message.
pub struct OperationStatus {
    pub message: String,
    pub kind: StatusKind,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Success,
        }
    }

    /// Create a new informational status.
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Notice,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Error,
        }
    }
}

impl From<&SeatError> for OperationStatus {
    fn from(error: &SeatError) -> Self {
        Self::failure(error.to_string())
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            StatusKind::Success => "Success:",
            StatusKind::Notice => "Note:",
            StatusKind::Error => "Error:",
        };
        writeln!(f, "{prefix} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeatPosition;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Seat booked");
        assert_eq!(success.to_string(), "Success: Seat booked\n");

        let notice = OperationStatus::notice("Booking cancelled");
        assert_eq!(notice.to_string(), "Note: Booking cancelled\n");

        let failure = OperationStatus::failure("Seat unavailable");
        assert_eq!(failure.to_string(), "Error: Seat unavailable\n");
    }

    #[test]
    fn test_status_from_seat_error() {
        let error = SeatError::SeatNotFree {
            position: SeatPosition::new(0, 0),
        };
        let status = OperationStatus::from(&error);
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.to_string(), "Error: Seat 1A is already booked\n");
    }
}
