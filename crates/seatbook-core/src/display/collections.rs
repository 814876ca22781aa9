//! Collection wrapper for displaying bookings.

use std::fmt;

use crate::models::Booking;

/// Newtype wrapper for displaying the staff booking listing.
///
/// Handles the empty listing gracefully and formats each entry with the
/// [`Booking`] Display implementation, in the order given.
pub struct Bookings<'a>(pub Vec<&'a Booking>);

impl Bookings<'_> {
    /// Check if the listing is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of bookings in the listing.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Bookings<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No bookings found.");
        }
        writeln!(f, "## Bookings ({})", self.0.len())?;
        writeln!(f)?;
        for booking in &self.0 {
            write!(f, "{booking}")?;
        }
        Ok(())
    }
}
