//! Role-based seat visibility.
//!
//! Staff see the literal seat state, including the booking reference. A
//! customer only learns that a booked seat is occupied. Every seat map goes
//! through [`VisibilityPolicy::render`], so references and passenger data
//! have no path into a customer-facing rendering.

use crate::models::{BookingReference, Role, SeatState, UnbookableKind};

/// What a single cell shows to a given role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplaySymbol {
    /// Seat can be booked
    Free,

    /// Booked seat as a customer sees it
    Occupied,

    /// Booked seat as staff see it
    Booked(BookingReference),

    /// Aisle cell
    Aisle,

    /// Storage cell
    Storage,
}

/// Maps raw seat state to what a role may see.
pub struct VisibilityPolicy;

impl VisibilityPolicy {
    /// Renders `state` for `role`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seatbook_core::{
    ///     models::{BookingReference, Role, SeatState},
    ///     visibility::{DisplaySymbol, VisibilityPolicy},
    /// };
    ///
    /// let reference: BookingReference = "AB12CD34".parse().unwrap();
    /// let state = SeatState::Booked(reference.clone());
    ///
    /// assert_eq!(
    ///     VisibilityPolicy::render(&state, Role::Customer),
    ///     DisplaySymbol::Occupied
    /// );
    /// assert_eq!(
    ///     VisibilityPolicy::render(&state, Role::Staff),
    ///     DisplaySymbol::Booked(reference)
    /// );
    /// ```
    pub fn render(state: &SeatState, role: Role) -> DisplaySymbol {
        match (state, role) {
            (SeatState::Free, _) => DisplaySymbol::Free,
            (SeatState::Unbookable(UnbookableKind::Aisle), _) => DisplaySymbol::Aisle,
            (SeatState::Unbookable(UnbookableKind::Storage), _) => DisplaySymbol::Storage,
            (SeatState::Booked(_), Role::Customer) => DisplaySymbol::Occupied,
            (SeatState::Booked(reference), Role::Staff) => {
                DisplaySymbol::Booked(reference.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbooked_cells_look_the_same_to_both_roles() {
        for role in [Role::Customer, Role::Staff] {
            assert_eq!(
                VisibilityPolicy::render(&SeatState::Free, role),
                DisplaySymbol::Free
            );
            assert_eq!(
                VisibilityPolicy::render(&SeatState::Unbookable(UnbookableKind::Aisle), role),
                DisplaySymbol::Aisle
            );
            assert_eq!(
                VisibilityPolicy::render(&SeatState::Unbookable(UnbookableKind::Storage), role),
                DisplaySymbol::Storage
            );
        }
    }

    #[test]
    fn test_customer_never_sees_reference() {
        let reference: BookingReference = "SECRET01".parse().unwrap();
        let state = SeatState::Booked(reference);

        let symbol = VisibilityPolicy::render(&state, Role::Customer);
        assert_eq!(symbol, DisplaySymbol::Occupied);
        assert!(!symbol.to_string().contains("SECRET01"));
    }

    #[test]
    fn test_staff_sees_reference() {
        let reference: BookingReference = "SECRET01".parse().unwrap();
        let state = SeatState::Booked(reference.clone());

        let symbol = VisibilityPolicy::render(&state, Role::Staff);
        assert_eq!(symbol, DisplaySymbol::Booked(reference));
        assert_eq!(symbol.to_string(), "SECRET01");
    }
}
