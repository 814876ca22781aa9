//! Booking reference value type.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SeatError;

/// Number of characters in every booking reference.
pub const REFERENCE_LENGTH: usize = 8;

/// Symbols a booking reference is drawn from.
pub const REFERENCE_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Eight uppercase letters or digits naming one booking.
///
/// Parsing trims surrounding whitespace and uppercases the input, so a
/// reference retyped in lower case compares equal to the issued one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookingReference(String);

impl BookingReference {
    /// Wraps a freshly generated value. The generator only emits alphabet
    /// symbols of the right length.
    pub(crate) fn from_generated(value: String) -> Self {
        debug_assert!(Self::is_well_formed(&value));
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_well_formed(value: &str) -> bool {
        value.len() == REFERENCE_LENGTH
            && value
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    }
}

impl FromStr for BookingReference {
    type Err = SeatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        if Self::is_well_formed(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(SeatError::invalid_input("reference").with_reason(format!(
                "expected {REFERENCE_LENGTH} letters or digits, got '{}'",
                s.trim()
            )))
        }
    }
}

impl TryFrom<String> for BookingReference {
    type Error = SeatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BookingReference> for String {
    fn from(reference: BookingReference) -> Self {
        reference.0
    }
}

impl AsRef<str> for BookingReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
