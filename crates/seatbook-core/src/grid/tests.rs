//! Tests for the seat grid.

use std::collections::BTreeSet;

use super::*;

fn standard_grid() -> SeatGrid {
    SeatGrid::build(&LayoutSpec::standard()).expect("standard layout is valid")
}

fn reference(value: &str) -> BookingReference {
    value.parse().expect("valid reference")
}

#[test]
fn test_standard_layout_dimensions_and_geometry() {
    let grid = standard_grid();

    assert_eq!(grid.rows(), 7);
    assert_eq!(grid.columns(), 8);
    assert_eq!(grid.aisle_rows(), &BTreeSet::from([3]));
    assert_eq!(grid.aisle_columns(), &BTreeSet::from([4]));
    assert_eq!(grid.window_columns(), &BTreeSet::from([0, 7]));
    assert_eq!(grid.aisle_adjacent_columns(), &BTreeSet::from([3, 5]));
}

#[test]
fn test_fresh_grid_cell_states() {
    let spec = LayoutSpec::standard();
    let grid = SeatGrid::build(&spec).unwrap();

    for (position, state) in grid.iter() {
        let expected = match &spec.rows[position.row] {
            RowSpec::Aisle => SeatState::Unbookable(UnbookableKind::Aisle),
            _ if spec.aisle_columns.contains(&position.column) => {
                SeatState::Unbookable(UnbookableKind::Aisle)
            }
            RowSpec::Passenger { storage } if storage.contains(&position.column) => {
                SeatState::Unbookable(UnbookableKind::Storage)
            }
            RowSpec::Passenger { .. } => SeatState::Free,
        };
        assert_eq!(state, &expected, "unexpected state at {position}");
    }
}

#[test]
fn test_fresh_grid_counts() {
    let counts = standard_grid().counts();
    // 6 rows x 7 seat columns, minus 3 storage cells
    assert_eq!(counts.free, 39);
    assert_eq!(counts.booked, 0);
    assert_eq!(counts.unbookable, 56 - 39);
}

#[test]
fn test_get_out_of_range() {
    let grid = standard_grid();

    assert!(grid.get(SeatPosition::new(6, 7)).is_ok());
    for position in [SeatPosition::new(7, 0), SeatPosition::new(0, 8)] {
        assert_eq!(
            grid.get(position),
            Err(SeatError::OutOfRange { position })
        );
        assert!(!grid.contains(position));
    }
}

#[test]
fn test_set_booked_then_free() {
    let mut grid = standard_grid();
    let seat = SeatPosition::new(1, 2);

    grid.set_booked(seat, reference("ABCD1234")).unwrap();
    assert_eq!(grid.get(seat), Ok(&SeatState::Booked(reference("ABCD1234"))));

    let released = grid.set_free(seat).unwrap();
    assert_eq!(released, reference("ABCD1234"));
    assert_eq!(grid.get(seat), Ok(&SeatState::Free));
}

#[test]
fn test_set_booked_rejects_non_free_cells() {
    let mut grid = standard_grid();
    let seat = SeatPosition::new(0, 0);
    grid.set_booked(seat, reference("AAAA0000")).unwrap();

    let err = grid.set_booked(seat, reference("BBBB1111")).unwrap_err();
    assert_eq!(
        err,
        SeatError::InvalidTransition {
            position: seat,
            from: "booked",
            to: "booked",
        }
    );
    // Original booking survives
    assert_eq!(grid.get(seat), Ok(&SeatState::Booked(reference("AAAA0000"))));

    let aisle = SeatPosition::new(3, 0);
    let err = grid.set_booked(aisle, reference("CCCC2222")).unwrap_err();
    assert!(matches!(
        err,
        SeatError::InvalidTransition { from: "aisle", .. }
    ));
    assert_eq!(
        grid.get(aisle),
        Ok(&SeatState::Unbookable(UnbookableKind::Aisle))
    );
}

#[test]
fn test_set_free_rejects_unbooked_cells() {
    let mut grid = standard_grid();

    let free = SeatPosition::new(0, 1);
    assert!(matches!(
        grid.set_free(free),
        Err(SeatError::InvalidTransition { from: "free", to: "free", .. })
    ));
    assert_eq!(grid.get(free), Ok(&SeatState::Free));

    let storage = SeatPosition::new(4, 5);
    assert!(matches!(
        grid.set_free(storage),
        Err(SeatError::InvalidTransition { from: "storage", .. })
    ));
    assert_eq!(
        grid.get(storage),
        Ok(&SeatState::Unbookable(UnbookableKind::Storage))
    );
}

#[test]
fn test_find_by_reference() {
    let mut grid = standard_grid();
    let seat = SeatPosition::new(5, 6);
    grid.set_booked(seat, reference("ZZZZ9999")).unwrap();

    assert_eq!(grid.find_by_reference(&reference("ZZZZ9999")), Some(seat));
    assert_eq!(grid.find_by_reference(&reference("YYYY8888")), None);
}

#[test]
fn test_iter_follows_scan_order() {
    let grid = standard_grid();
    let positions: Vec<_> = grid.positions().collect();

    assert_eq!(positions.len(), 56);
    assert_eq!(positions[0], SeatPosition::new(0, 0));
    assert_eq!(positions[1], SeatPosition::new(0, 1));
    assert_eq!(positions[8], SeatPosition::new(1, 0));
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_geometry_without_aisle_columns() {
    let spec = LayoutSpec::new(4)
        .row(RowSpec::passenger())
        .row(RowSpec::Aisle)
        .row(RowSpec::passenger());
    let grid = SeatGrid::build(&spec).unwrap();

    assert_eq!(grid.window_columns(), &BTreeSet::from([0, 3]));
    assert!(grid.aisle_adjacent_columns().is_empty());
    assert_eq!(grid.aisle_rows(), &BTreeSet::from([1]));
}

#[test]
fn test_window_columns_skip_edge_aisles() {
    let spec = LayoutSpec::new(5)
        .aisle_column(0)
        .aisle_column(4)
        .row(RowSpec::passenger());
    let grid = SeatGrid::build(&spec).unwrap();

    assert_eq!(grid.window_columns(), &BTreeSet::from([1, 3]));
    assert_eq!(grid.aisle_adjacent_columns(), &BTreeSet::from([1, 3]));
}

#[test]
fn test_build_rejects_invalid_layouts() {
    let cases = [
        LayoutSpec::new(8),
        LayoutSpec::new(0).row(RowSpec::passenger()),
        LayoutSpec::new(27).row(RowSpec::passenger()),
        LayoutSpec::new(4).aisle_column(4).row(RowSpec::passenger()),
        LayoutSpec::new(4).row(RowSpec::with_storage([9])),
        LayoutSpec::new(1).aisle_column(0).row(RowSpec::passenger()),
    ];

    for spec in cases {
        assert!(
            matches!(SeatGrid::build(&spec), Err(SeatError::InvalidLayout { .. })),
            "layout should be rejected: {spec:?}"
        );
    }
}
