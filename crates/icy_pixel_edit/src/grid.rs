//! The cell grid
//!
//! Rows are stored behind `Arc` so cloning a grid for a history snapshot only
//! copies row pointers; the first write into a shared row copies that row.
//! Every access outside the grid is a silent no-op (reads yield the default
//! cell), which keeps line/shape rasterization free of bounds checks.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{Cell, Direction, EditError, Result};

/// Grid coordinate, may lie outside the grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// Neighbor in the given direction
    pub fn step(self, dir: Direction) -> Self {
        let (d_row, d_col) = dir.offset();
        self.offset(d_row, d_col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Position::new(row, col)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GridRecord", into = "GridRecord")]
pub struct Grid {
    rows: i32,
    cols: i32,
    lines: Vec<Arc<Vec<Cell>>>,
}

impl Grid {
    /// Create a grid filled with default cells; negative sizes are clamped to 0
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        let line = Arc::new(vec![Cell::default(); cols as usize]);
        Self {
            rows,
            cols,
            lines: (0..rows).map(|_| line.clone()).collect(),
        }
    }

    /// Create a grid, rejecting empty or negative dimensions
    pub fn try_new(rows: i32, cols: i32) -> Result<Self> {
        if rows <= 0 || cols <= 0 {
            return Err(EditError::InvalidDimensions { rows, cols });
        }
        Ok(Self::new(rows, cols))
    }

    /// Build a grid from row-major cells; a wrong cell count is repaired by
    /// truncating or padding with default cells
    pub fn from_cells(rows: i32, cols: i32, cells: &[Cell]) -> Self {
        let mut grid = Grid::new(rows, cols);
        let expected = grid.rows as usize * grid.cols as usize;
        if cells.len() != expected {
            log::warn!(
                "grid data has {} cells, expected {} for {}x{}; repairing with default cells",
                cells.len(),
                expected,
                grid.rows,
                grid.cols
            );
        }
        if grid.cols > 0 {
            for (row, chunk) in cells.chunks(grid.cols as usize).take(grid.rows as usize).enumerate() {
                let line = Arc::make_mut(&mut grid.lines[row]);
                line[..chunk.len()].copy_from_slice(chunk);
            }
        }
        grid
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn is_inside(&self, pos: impl Into<Position>) -> bool {
        let pos = pos.into();
        pos.row >= 0 && pos.row < self.rows && pos.col >= 0 && pos.col < self.cols
    }

    /// Cell at `pos`, or `None` outside the grid
    pub fn try_get(&self, pos: impl Into<Position>) -> Option<Cell> {
        let pos = pos.into();
        if !self.is_inside(pos) {
            return None;
        }
        Some(self.lines[pos.row as usize][pos.col as usize])
    }

    /// Cell at `pos`; the default cell outside the grid
    pub fn get(&self, pos: impl Into<Position>) -> Cell {
        self.try_get(pos).unwrap_or_default()
    }

    /// Store a cell. Returns whether the painted value changed; writes
    /// outside the grid are ignored.
    pub fn set(&mut self, pos: impl Into<Position>, cell: Cell) -> bool {
        let pos = pos.into();
        if !self.is_inside(pos) {
            return false;
        }
        let line = &mut self.lines[pos.row as usize];
        if line[pos.col as usize] == cell {
            return false;
        }
        Arc::make_mut(line)[pos.col as usize] = cell;
        true
    }

    /// Read-only row access for renderers
    pub fn line(&self, row: i32) -> Option<&[Cell]> {
        if row < 0 || row >= self.rows {
            return None;
        }
        Some(self.lines[row as usize].as_slice())
    }

    /// All in-grid positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.lines.iter().flat_map(|line| line.iter())
    }

    /// Resize, keeping every cell valid in both extents
    pub fn resize(&mut self, new_rows: i32, new_cols: i32) {
        let new_rows = new_rows.max(0);
        let new_cols = new_cols.max(0);
        if new_rows == self.rows && new_cols == self.cols {
            return;
        }

        let blank = Arc::new(vec![Cell::default(); new_cols as usize]);
        let mut lines = Vec::with_capacity(new_rows as usize);
        for row in 0..new_rows as usize {
            match self.lines.get(row) {
                Some(line) if new_cols == self.cols => lines.push(line.clone()),
                Some(line) => {
                    let mut new_line = vec![Cell::default(); new_cols as usize];
                    let keep = (new_cols.min(self.cols)) as usize;
                    new_line[..keep].copy_from_slice(&line[..keep]);
                    lines.push(Arc::new(new_line));
                }
                None => lines.push(blank.clone()),
            }
        }

        self.rows = new_rows;
        self.cols = new_cols;
        self.lines = lines;
    }

    /// Number of row buffers shared with another grid (snapshot diagnostics)
    pub fn shared_rows(&self, other: &Grid) -> usize {
        self.lines.iter().zip(other.lines.iter()).filter(|(a, b)| Arc::ptr_eq(a, b)).count()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Serialization: rows, cols, cells in row-major order
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug, Serialize, Deserialize)]
struct GridRecord {
    rows: i32,
    cols: i32,
    #[serde(default)]
    cells: Vec<Cell>,
}

impl From<GridRecord> for Grid {
    fn from(record: GridRecord) -> Self {
        Grid::from_cells(record.rows, record.cols, &record.cells)
    }
}

impl From<Grid> for GridRecord {
    fn from(grid: Grid) -> Self {
        GridRecord {
            rows: grid.rows,
            cols: grid.cols,
            cells: grid.cells().copied().collect(),
        }
    }
}
