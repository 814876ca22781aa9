//! Role-filtered seat map.

use std::fmt;

use crate::{
    grid::SeatGrid,
    models::{column_letter, Role},
    visibility::VisibilityPolicy,
};

/// Whole-cabin seat map for one role, rendered as a markdown table.
///
/// Every cell goes through [`VisibilityPolicy::render`]; a customer map shows
/// booked seats as `R` and nothing else about them.
///
/// # Examples
///
/// ```rust
/// use seatbook_core::{display::SeatMap, models::Role, RegistryBuilder};
///
/// let registry = RegistryBuilder::new().build().unwrap();
/// let output = SeatMap::new(registry.grid(), Role::Customer).to_string();
///
/// assert!(output.contains("| 1 | F | F | F | F | X | F | F | F |"));
/// assert!(output.contains("| 4 | X | X | X | X | X | X | X | X |"));
/// ```
pub struct SeatMap<'a> {
    grid: &'a SeatGrid,
    role: Role,
}

impl<'a> SeatMap<'a> {
    pub fn new(grid: &'a SeatGrid, role: Role) -> Self {
        Self { grid, role }
    }
}

impl fmt::Display for SeatMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Seating Layout ({} view)", self.role)?;
        writeln!(f)?;

        write!(f, "| Row |")?;
        for column in 0..self.grid.columns() {
            match column_letter(column) {
                Some(letter) => write!(f, " {letter} |")?,
                None => write!(f, " {} |", column + 1)?,
            }
        }
        writeln!(f)?;
        write!(f, "|----:|")?;
        for _ in 0..self.grid.columns() {
            write!(f, ":-:|")?;
        }
        writeln!(f)?;

        for row in 0..self.grid.rows() {
            write!(f, "| {} |", row + 1)?;
            for state in self.grid.row(row).unwrap_or_default() {
                write!(f, " {} |", VisibilityPolicy::render(state, self.role))?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        let booked_legend = match self.role {
            Role::Customer => "R = occupied",
            Role::Staff => "booked seats show their reference",
        };
        writeln!(
            f,
            "Legend: F = free, {booked_legend}, X = aisle, S = storage"
        )?;

        let counts = self.grid.counts();
        writeln!(
            f,
            "Free seats: {} of {}",
            counts.free,
            counts.free + counts.booked
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        grid::LayoutSpec,
        models::{BookingReference, SeatPosition},
    };

    fn grid_with_booking() -> SeatGrid {
        let mut grid = SeatGrid::build(&LayoutSpec::standard()).unwrap();
        let reference: BookingReference = "QWER7890".parse().unwrap();
        grid.set_booked(SeatPosition::new(0, 0), reference).unwrap();
        grid
    }

    #[test]
    fn test_customer_map_hides_reference() {
        let grid = grid_with_booking();
        let output = SeatMap::new(&grid, Role::Customer).to_string();

        assert!(output.contains("## Seating Layout (customer view)"));
        assert!(output.contains("| 1 | R | F | F | F | X | F | F | F |"));
        assert!(!output.contains("QWER7890"));
        assert!(output.contains("Free seats: 38 of 39"));
    }

    #[test]
    fn test_staff_map_shows_reference() {
        let grid = grid_with_booking();
        let output = SeatMap::new(&grid, Role::Staff).to_string();

        assert!(output.contains("## Seating Layout (staff view)"));
        assert!(output.contains("| 1 | QWER7890 | F |"));
    }

    #[test]
    fn test_map_header_and_storage_rows() {
        let grid = grid_with_booking();
        let output = SeatMap::new(&grid, Role::Customer).to_string();

        assert!(output.contains("| Row | A | B | C | D | E | F | G | H |"));
        assert!(output.contains("| 5 | F | F | F | F | X | S | F | F |"));
        assert!(output.contains("| 7 | F | F | F | F | X | S | F | F |"));
    }
}
