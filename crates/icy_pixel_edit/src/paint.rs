//! Paint operations on a grid
//!
//! Pure functions of `(grid, parameters)`: each mutates the grid in place and
//! reports whether any cell actually changed. History and dirty tracking are
//! the caller's business (see `EditorSession`).

use crate::{brushes, Cell, Corner, Grid, PaletteIndex, Position, SelectionBuffer, SelectionRegion};

/// Paint one cell
///
/// Without a quadrant the cell becomes `Solid(color)`. With a quadrant the
/// half-pixel merge rule of [`Cell::merge_dab`] applies.
pub fn paint_cell(grid: &mut Grid, pos: Position, color: PaletteIndex, quadrant: Option<Corner>) -> bool {
    let Some(cell) = grid.try_get(pos) else {
        return false;
    };
    let new_cell = match quadrant {
        Some(quadrant) => cell.merge_dab(quadrant, color),
        None => Cell::solid(color),
    };
    grid.set(pos, new_cell)
}

/// Paint a solid Bresenham line, both endpoints included
pub fn paint_line(grid: &mut Grid, from: Position, to: Position, color: PaletteIndex) -> bool {
    apply_shape_pixels(grid, &brushes::line_points(from, to), color)
}

/// Set every listed cell to `Solid(color)` in one batch
pub fn apply_shape_pixels(grid: &mut Grid, points: &[Position], color: PaletteIndex) -> bool {
    let cell = Cell::solid(color);
    let mut changed = false;
    for &pos in points {
        changed |= grid.set(pos, cell);
    }
    changed
}

/// Detached copy of a region
pub fn copy_to_buffer(grid: &Grid, region: &SelectionRegion) -> SelectionBuffer {
    SelectionBuffer::copy_from(grid, region)
}

/// Reset every cell in `region` to the default cell
pub fn erase_region(grid: &mut Grid, region: &SelectionRegion) -> bool {
    let mut changed = false;
    for pos in region.positions() {
        changed |= grid.set(pos, Cell::default());
    }
    changed
}

/// Write a buffer with its top-left at `top_left`, clipped to the grid;
/// cells that are already identical are left alone
pub fn paste_buffer(grid: &mut Grid, buffer: &SelectionBuffer, top_left: Position) -> bool {
    let mut changed = false;
    for (local, cell) in buffer.iter() {
        changed |= grid.set(top_left.offset(local.row, local.col), cell);
    }
    changed
}
