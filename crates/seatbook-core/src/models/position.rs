//! Seat addressing.

use serde::{Deserialize, Serialize};

/// Largest number of columns a layout may have; one letter per column.
pub const MAX_COLUMNS: usize = 26;

/// Zero-based (row, column) address of a cell in the seat grid.
///
/// Ordering follows scan order: rows first, then columns. At the boundary a
/// position is shown one-based with a lettered column, so `(0, 0)` is `1A`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SeatPosition {
    /// Zero-based row index
    pub row: usize,

    /// Zero-based column index
    pub column: usize,
}

impl SeatPosition {
    /// Creates a position from zero-based indices.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Creates a position from a one-based row number and a column letter.
    ///
    /// Returns `None` for row number zero or a character outside `A`..`Z`
    /// (either case). Whether the seat exists is for the grid to decide.
    pub fn from_label(row_number: usize, column_letter: char) -> Option<Self> {
        let row = row_number.checked_sub(1)?;
        let column = column_index(column_letter)?;
        Some(Self { row, column })
    }

    /// Creates a position from one-based row and column numbers.
    pub fn from_numbers(row_number: usize, column_number: usize) -> Option<Self> {
        Some(Self {
            row: row_number.checked_sub(1)?,
            column: column_number.checked_sub(1)?,
        })
    }

    /// One-based row number as shown to passengers.
    pub fn row_number(&self) -> usize {
        self.row + 1
    }

    /// Column letter as shown to passengers, if the column has one.
    pub fn column_letter(&self) -> Option<char> {
        column_letter(self.column)
    }
}

/// Letter for a zero-based column index (`0` → `A`).
pub fn column_letter(column: usize) -> Option<char> {
    if column < MAX_COLUMNS {
        u8::try_from(column).ok().map(|c| char::from(b'A' + c))
    } else {
        None
    }
}

/// Zero-based column index for a letter, case-insensitive.
pub fn column_index(letter: char) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some(usize::from(upper as u8 - b'A'))
    } else {
        None
    }
}
