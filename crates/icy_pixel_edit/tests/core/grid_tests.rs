//! Grid storage tests

use icy_pixel_edit::{Cell, Corner, EditError, FillStyle, Grid, Position};

use crate::helpers::{assert_all_solid, main_colors, solid_grid};

#[test]
fn test_new_grid_is_default() {
    let grid = Grid::new(3, 4);
    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.cols(), 4);
    assert_all_solid(&grid, 8, "new grid");
}

#[test]
fn test_negative_size_is_clamped() {
    let grid = Grid::new(-2, 5);
    assert!(grid.is_empty());
    assert_eq!(grid.rows(), 0);
    assert!(matches!(Grid::try_new(0, 5), Err(EditError::InvalidDimensions { rows: 0, cols: 5 })));
    assert!(Grid::try_new(1, 1).is_ok());
}

#[test]
fn test_out_of_bounds_access_is_ignored() {
    let mut grid = Grid::new(2, 2);
    assert!(!grid.set(Position::new(-1, 0), Cell::solid(1)));
    assert!(!grid.set(Position::new(0, 2), Cell::solid(1)));
    assert!(!grid.set(Position::new(2, 0), Cell::solid(1)));
    assert_eq!(grid.get(Position::new(5, 5)), Cell::default());
    assert_eq!(grid.try_get(Position::new(-1, -1)), None);
    assert_all_solid(&grid, 8, "after out of bounds writes");
}

#[test]
fn test_set_reports_change() {
    let mut grid = Grid::new(1, 1);
    assert!(grid.set((0, 0), Cell::solid(1)));
    assert!(!grid.set((0, 0), Cell::solid(1)));

    assert!(grid.set((0, 0), Cell::triangle(Corner::TopLeft, 1, 2)));
    // same paint, other orientation: still stored
    assert!(grid.set((0, 0), Cell::triangle(Corner::BottomRight, 2, 1)));
    assert_eq!(grid.get((0, 0)).fill_style(), FillStyle::Triangle(Corner::BottomRight));
}

#[test]
fn test_resize_preserves_overlap() {
    let mut grid = solid_grid(&[&[0, 1, 2], &[3, 4, 5]]);
    grid.resize(3, 2);
    assert_eq!(main_colors(&grid), vec![vec![0, 1], vec![3, 4], vec![8, 8]]);

    grid.resize(1, 4);
    assert_eq!(main_colors(&grid), vec![vec![0, 1, 8, 8]]);
}

#[test]
fn test_resize_keeps_split_cells() {
    let mut grid = Grid::new(2, 2);
    let split = Cell::triangle(Corner::BottomLeft, 3, 4);
    grid.set((1, 1), split);
    grid.resize(4, 4);
    assert_eq!(grid.get((1, 1)), split);
    assert_eq!(grid.get((3, 3)), Cell::default());
}

#[test]
fn test_clone_is_independent() {
    let mut grid = solid_grid(&[&[0, 1], &[2, 3]]);
    let snapshot = grid.clone();
    assert_eq!(snapshot.shared_rows(&grid), 2);

    grid.set((0, 0), Cell::solid(7));
    assert_eq!(snapshot.get((0, 0)), Cell::solid(0));
    assert_eq!(grid.get((0, 0)), Cell::solid(7));
    // only the written row was copied
    assert_eq!(snapshot.shared_rows(&grid), 1);
    assert_ne!(snapshot, grid);
}

#[test]
fn test_from_cells_repairs_length() {
    let short = Grid::from_cells(2, 2, &[Cell::solid(1)]);
    assert_eq!(main_colors(&short), vec![vec![1, 8], vec![8, 8]]);

    let long = Grid::from_cells(1, 2, &[Cell::solid(1), Cell::solid(2), Cell::solid(3)]);
    assert_eq!(main_colors(&long), vec![vec![1, 2]]);
}

#[test]
fn test_positions_are_row_major() {
    let grid = Grid::new(2, 2);
    let positions: Vec<Position> = grid.positions().collect();
    assert_eq!(positions, vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)]);
}
