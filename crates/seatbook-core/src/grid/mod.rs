//! Seat matrix with fixed cabin geometry.
//!
//! A [`SeatGrid`] is built once from a [`LayoutSpec`] and keeps its
//! dimensions for life. Aisle and storage cells are fixed at construction;
//! afterwards only `Free ↔ Booked` transitions are possible. The mutating
//! methods are crate-private; only [`crate::BookingRegistry`] calls them.
//!
//! ```text
//!        A  B  C  D  E  F  G  H
//! Row 1  F  F  F  F  X  F  F  F
//! Row 2  F  F  F  F  X  F  F  F
//! Row 3  F  F  F  F  X  F  F  F
//! Row 4  X  X  X  X  X  X  X  X
//! Row 5  F  F  F  F  X  S  F  F
//! Row 6  F  F  F  F  X  S  F  F
//! Row 7  F  F  F  F  X  S  F  F
//! ```
//!
//! The grid is purely index based. Parsing "12A" style tokens is left to the
//! caller; every position it produces is still checked here.

use std::collections::BTreeSet;

use log::debug;
use serde::Serialize;

use crate::{
    error::{Result, SeatError},
    models::{BookingReference, SeatPosition, SeatState, UnbookableKind},
};

pub mod layout;

#[cfg(test)]
mod tests;

pub use layout::{LayoutSpec, RowSpec};

/// Tally of cell states across the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeatCounts {
    pub free: usize,
    pub booked: usize,
    pub unbookable: usize,
}

/// Row-major matrix of [`SeatState`] plus the geometry derived from its
/// layout.
#[derive(Debug, Clone)]
pub struct SeatGrid {
    cells: Vec<Vec<SeatState>>,
    columns: usize,
    aisle_rows: BTreeSet<usize>,
    aisle_columns: BTreeSet<usize>,
    window_columns: BTreeSet<usize>,
    aisle_adjacent_columns: BTreeSet<usize>,
}

impl SeatGrid {
    /// Builds a grid from a layout description.
    ///
    /// Aisle rows and aisle columns become `Unbookable(Aisle)`, storage cells
    /// in passenger rows become `Unbookable(Storage)`, and every other cell
    /// starts `Free`. Where an aisle column crosses a storage index the aisle
    /// wins.
    ///
    /// # Errors
    ///
    /// Returns `SeatError::InvalidLayout` if the layout fails validation.
    pub fn build(spec: &LayoutSpec) -> Result<Self> {
        spec.validate()?;

        let mut aisle_rows = BTreeSet::new();
        let cells = spec
            .rows
            .iter()
            .enumerate()
            .map(|(row, row_spec)| match row_spec {
                RowSpec::Aisle => {
                    aisle_rows.insert(row);
                    vec![SeatState::Unbookable(UnbookableKind::Aisle); spec.columns]
                }
                RowSpec::Passenger { storage } => (0..spec.columns)
                    .map(|column| {
                        if spec.aisle_columns.contains(&column) {
                            SeatState::Unbookable(UnbookableKind::Aisle)
                        } else if storage.contains(&column) {
                            SeatState::Unbookable(UnbookableKind::Storage)
                        } else {
                            SeatState::Free
                        }
                    })
                    .collect(),
            })
            .collect();

        let seat_columns: Vec<usize> = (0..spec.columns)
            .filter(|c| !spec.aisle_columns.contains(c))
            .collect();
        let window_columns = seat_columns
            .first()
            .into_iter()
            .chain(seat_columns.last())
            .copied()
            .collect();
        let aisle_adjacent_columns = seat_columns
            .iter()
            .copied()
            .filter(|c| {
                spec.aisle_columns.contains(&(c + 1))
                    || c.checked_sub(1)
                        .is_some_and(|left| spec.aisle_columns.contains(&left))
            })
            .collect();

        let grid = Self {
            cells,
            columns: spec.columns,
            aisle_rows,
            aisle_columns: spec.aisle_columns.clone(),
            window_columns,
            aisle_adjacent_columns,
        };
        debug!(
            "Built {}x{} seat grid with {} bookable seats",
            grid.rows(),
            grid.columns(),
            grid.counts().free
        );
        Ok(grid)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns in every row.
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn aisle_rows(&self) -> &BTreeSet<usize> {
        &self.aisle_rows
    }

    pub fn aisle_columns(&self) -> &BTreeSet<usize> {
        &self.aisle_columns
    }

    /// Leftmost and rightmost seat columns.
    pub fn window_columns(&self) -> &BTreeSet<usize> {
        &self.window_columns
    }

    /// Seat columns directly beside an aisle column.
    pub fn aisle_adjacent_columns(&self) -> &BTreeSet<usize> {
        &self.aisle_adjacent_columns
    }

    /// Whether the position lies inside the grid.
    pub fn contains(&self, position: SeatPosition) -> bool {
        position.row < self.rows() && position.column < self.columns
    }

    /// Returns the state of the seat at `position`.
    ///
    /// # Errors
    ///
    /// Returns `SeatError::OutOfRange` if the position is outside the grid.
    pub fn get(&self, position: SeatPosition) -> Result<&SeatState> {
        self.cells
            .get(position.row)
            .and_then(|row| row.get(position.column))
            .ok_or(SeatError::OutOfRange { position })
    }

    fn cell_mut(&mut self, position: SeatPosition) -> Result<&mut SeatState> {
        self.cells
            .get_mut(position.row)
            .and_then(|row| row.get_mut(position.column))
            .ok_or(SeatError::OutOfRange { position })
    }

    /// Moves a `Free` seat to `Booked(reference)`.
    pub(crate) fn set_booked(
        &mut self,
        position: SeatPosition,
        reference: BookingReference,
    ) -> Result<()> {
        let cell = self.cell_mut(position)?;
        if !cell.is_free() {
            return Err(SeatError::InvalidTransition {
                position,
                from: cell.name(),
                to: "booked",
            });
        }
        *cell = SeatState::Booked(reference);
        Ok(())
    }

    /// Moves a `Booked` seat back to `Free`, returning the reference it held.
    pub(crate) fn set_free(&mut self, position: SeatPosition) -> Result<BookingReference> {
        let cell = self.cell_mut(position)?;
        match std::mem::replace(&mut *cell, SeatState::Free) {
            SeatState::Booked(reference) => Ok(reference),
            other => {
                let from = other.name();
                *cell = other;
                Err(SeatError::InvalidTransition {
                    position,
                    from,
                    to: "free",
                })
            }
        }
    }

    /// Finds the seat held by `reference` with a linear scan.
    pub fn find_by_reference(&self, reference: &BookingReference) -> Option<SeatPosition> {
        self.iter()
            .find(|(_, state)| state.reference() == Some(reference))
            .map(|(position, _)| position)
    }

    /// Iterates every cell in scan order: top to bottom, left to right.
    pub fn iter(&self) -> impl Iterator<Item = (SeatPosition, &SeatState)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(column, state)| (SeatPosition::new(row, column), state))
        })
    }

    /// Every position in scan order.
    pub fn positions(&self) -> impl Iterator<Item = SeatPosition> + '_ {
        self.iter().map(|(position, _)| position)
    }

    /// Cells of a single row, if it exists.
    pub fn row(&self, row: usize) -> Option<&[SeatState]> {
        self.cells.get(row).map(Vec::as_slice)
    }

    /// Counts free, booked, and unbookable cells.
    pub fn counts(&self) -> SeatCounts {
        self.iter()
            .fold(SeatCounts::default(), |mut counts, (_, state)| {
                match state {
                    SeatState::Free => counts.free += 1,
                    SeatState::Booked(_) => counts.booked += 1,
                    SeatState::Unbookable(_) => counts.unbookable += 1,
                }
                counts
            })
    }
}
