//! Preference-driven seat recommendation.

use log::debug;

use crate::{
    grid::SeatGrid,
    models::{Preference, SeatPosition},
};

/// Whether a column satisfies a preference on the given grid.
pub fn matches_preference(grid: &SeatGrid, preference: Preference, column: usize) -> bool {
    match preference {
        Preference::Window => grid.window_columns().contains(&column),
        Preference::Aisle => grid.aisle_adjacent_columns().contains(&column),
        Preference::None => true,
    }
}

/// Returns the first free seat in scan order that satisfies `preference`.
///
/// Scan order is row-major, top to bottom and left to right, so the earliest
/// row and then the earliest column always wins. Returns `None` when nothing
/// matches; there is no fallback to a seat outside the preference.
pub fn recommend(grid: &SeatGrid, preference: Preference) -> Option<SeatPosition> {
    let found = grid
        .iter()
        .filter(|(_, state)| state.is_free())
        .map(|(position, _)| position)
        .find(|position| matches_preference(grid, preference, position.column));

    match found {
        Some(position) => debug!(
            "Recommending {position} for {} preference",
            preference.as_str()
        ),
        None => debug!("No free seat matches {} preference", preference.as_str()),
    }
    found
}
