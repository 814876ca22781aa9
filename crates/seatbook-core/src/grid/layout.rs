//! Declarative layout descriptions for building a [`SeatGrid`].
//!
//! [`SeatGrid`]: super::SeatGrid

use std::collections::BTreeSet;

use crate::{
    error::{Result, SeatError},
    models::MAX_COLUMNS,
};

/// Kind of a single row in a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowSpec {
    /// Row of seats, with optional storage cells at the given column indices
    Passenger { storage: BTreeSet<usize> },

    /// Walkway spanning the full width of the cabin
    Aisle,
}

impl RowSpec {
    /// Passenger row without storage cells.
    pub fn passenger() -> Self {
        RowSpec::Passenger {
            storage: BTreeSet::new(),
        }
    }

    /// Passenger row with storage at the given column indices.
    pub fn with_storage(columns: impl IntoIterator<Item = usize>) -> Self {
        RowSpec::Passenger {
            storage: columns.into_iter().collect(),
        }
    }
}

/// Fixed cabin geometry: width, aisle columns, and an ordered list of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSpec {
    /// Number of columns in every row
    pub columns: usize,

    /// Column indices that are walkway in every row
    pub aisle_columns: BTreeSet<usize>,

    /// Rows from front to back
    pub rows: Vec<RowSpec>,
}

impl LayoutSpec {
    /// Creates an empty layout of the given width.
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            aisle_columns: BTreeSet::new(),
            rows: Vec::new(),
        }
    }

    /// Marks a column as walkway in every row.
    pub fn aisle_column(mut self, column: usize) -> Self {
        self.aisle_columns.insert(column);
        self
    }

    /// Appends a row.
    pub fn row(mut self, row: RowSpec) -> Self {
        self.rows.push(row);
        self
    }

    /// Appends `count` identical rows.
    pub fn rows(mut self, count: usize, row: &RowSpec) -> Self {
        self.rows.extend(std::iter::repeat(row.clone()).take(count));
        self
    }

    /// The airline's cabin: seven rows of columns A to H with the aisle in
    /// column E, a cross aisle in row 4, and storage at column F in rows 5
    /// to 7.
    pub fn standard() -> Self {
        Self::new(8)
            .aisle_column(4)
            .rows(3, &RowSpec::passenger())
            .row(RowSpec::Aisle)
            .rows(3, &RowSpec::with_storage([5]))
    }

    /// Checks that the layout can produce a usable grid.
    ///
    /// # Errors
    ///
    /// Returns `SeatError::InvalidLayout` when the layout has no rows, no
    /// columns, more columns than there are column letters, an aisle or
    /// storage index outside the width, or no bookable column at all.
    pub fn validate(&self) -> Result<()> {
        if self.rows.is_empty() {
            return Err(SeatError::invalid_layout("layout has no rows"));
        }
        if self.columns == 0 || self.columns > MAX_COLUMNS {
            return Err(SeatError::invalid_layout(format!(
                "column count must be between 1 and {MAX_COLUMNS}, got {}",
                self.columns
            )));
        }
        if let Some(column) = self.aisle_columns.iter().find(|c| **c >= self.columns) {
            return Err(SeatError::invalid_layout(format!(
                "aisle column {column} is outside a {}-column layout",
                self.columns
            )));
        }
        if self.aisle_columns.len() == self.columns {
            return Err(SeatError::invalid_layout("every column is an aisle"));
        }
        for (index, row) in self.rows.iter().enumerate() {
            if let RowSpec::Passenger { storage } = row {
                if let Some(column) = storage.iter().find(|c| **c >= self.columns) {
                    return Err(SeatError::invalid_layout(format!(
                        "storage column {column} in row {} is outside a {}-column layout",
                        index + 1,
                        self.columns
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self::standard()
    }
}
