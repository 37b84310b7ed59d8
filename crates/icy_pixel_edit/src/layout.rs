//! Canvas layout and pointer mapping
//!
//! Cells are drawn as `cell_size` squares separated by `spacing` pixels, with
//! a `spacing` border around the whole grid. An embedding layer converts raw
//! pointer positions to canvas pixels and calls [`CanvasLayout::map_pointer`].

use serde::{Deserialize, Serialize};

use crate::{brushes, Color, Corner, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasLayout {
    /// Edge length of a cell in canvas pixels
    pub cell_size: i32,
    /// Gap between cells and around the grid
    pub spacing: i32,
    /// Color of the gaps / cleared canvas
    pub background: Color,
}

impl Default for CanvasLayout {
    fn default() -> Self {
        Self {
            cell_size: 5,
            spacing: 1,
            background: Color::WHITE,
        }
    }
}

/// Grid cell (and quadrant) under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerHit {
    pub position: Position,
    pub quadrant: Option<Corner>,
}

impl CanvasLayout {
    fn pitch(&self) -> i32 {
        (self.cell_size + self.spacing).max(1)
    }

    /// Canvas size in pixels (width, height) for a grid
    pub fn canvas_size(&self, rows: i32, cols: i32) -> (i32, i32) {
        (self.spacing + cols * self.pitch(), self.spacing + rows * self.pitch())
    }

    /// Top-left canvas pixel of a cell
    pub fn cell_origin(&self, pos: Position) -> (i32, i32) {
        (self.spacing + pos.col * self.pitch(), self.spacing + pos.row * self.pitch())
    }

    /// Map canvas pixel coordinates to a cell of a `rows × cols` grid
    ///
    /// Returns `None` outside the grid. The gap to the right/below a cell
    /// counts as part of that cell.
    pub fn map_pointer(&self, x: f64, y: f64, rows: i32, cols: i32) -> Option<PointerHit> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let pitch = f64::from(self.pitch());
        let col = ((x - f64::from(self.spacing)) / pitch).floor() as i32;
        let row = ((y - f64::from(self.spacing)) / pitch).floor() as i32;
        if row < 0 || row >= rows || col < 0 || col >= cols {
            return None;
        }

        let position = Position::new(row, col);
        let (origin_x, origin_y) = self.cell_origin(position);
        let quadrant = brushes::quadrant_at(x - f64::from(origin_x), y - f64::from(origin_y), self.cell_size);
        Some(PointerHit { position, quadrant })
    }
}
