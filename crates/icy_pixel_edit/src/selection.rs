//! Rectangular selections and detached cell buffers
//!
//! A [`SelectionRegion`] is an inclusive, grid-clipped rectangle. A
//! [`SelectionBuffer`] is a detached copy of the cells in such a region, used
//! for copy/cut/paste and for moving a selection. The buffer has its own
//! clipboard byte format so an embedding layer can put it on a system
//! clipboard.

use serde::{Deserialize, Serialize};

use crate::{Cell, Corner, EditError, FillStyle, Grid, Position, Result};

/// Custom clipboard type identifier for selection buffers
pub const PIXEL_CLIPBOARD_TYPE: &str = "application/x-icy-pixel-cells";

// ═══════════════════════════════════════════════════════════════════════════
// Selection Region
// ═══════════════════════════════════════════════════════════════════════════

/// Inclusive axis-aligned rectangle, `top <= bottom` and `left <= right`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRegion {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl SelectionRegion {
    /// Rectangle spanned by two corners in any order
    pub fn new(a: Position, b: Position) -> Self {
        Self {
            top: a.row.min(b.row),
            left: a.col.min(b.col),
            bottom: a.row.max(b.row),
            right: a.col.max(b.col),
        }
    }

    /// Whole-grid region, `None` for an empty grid
    pub fn full(grid: &Grid) -> Option<Self> {
        if grid.is_empty() {
            return None;
        }
        Some(Self::new(Position::new(0, 0), Position::new(grid.rows() - 1, grid.cols() - 1)))
    }

    pub fn top_left(&self) -> Position {
        Position::new(self.top, self.left)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= self.top && pos.row <= self.bottom && pos.col >= self.left && pos.col <= self.right
    }

    pub fn translate(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            top: self.top + d_row,
            left: self.left + d_col,
            bottom: self.bottom + d_row,
            right: self.right + d_col,
        }
    }

    /// Intersection with the grid, `None` if nothing remains
    pub fn clip(&self, grid: &Grid) -> Option<Self> {
        let clipped = Self {
            top: self.top.max(0),
            left: self.left.max(0),
            bottom: self.bottom.min(grid.rows() - 1),
            right: self.right.min(grid.cols() - 1),
        };
        if clipped.top > clipped.bottom || clipped.left > clipped.right {
            return None;
        }
        Some(clipped)
    }

    /// Positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let Self { top, left, bottom, right } = *self;
        (top..=bottom).flat_map(move |row| (left..=right).map(move |col| Position::new(row, col)))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Selection Buffer
// ═══════════════════════════════════════════════════════════════════════════

/// Detached `height × width` block of cells
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionBuffer {
    width: i32,
    height: i32,
    /// Row-major
    cells: Vec<Cell>,
}

impl SelectionBuffer {
    /// Copy the cells of `region`; positions outside the grid copy as default cells
    pub fn copy_from(grid: &Grid, region: &SelectionRegion) -> Self {
        Self {
            width: region.width(),
            height: region.height(),
            cells: region.positions().map(|pos| grid.get(pos)).collect(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Cell at buffer-local coordinates
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        if row < 0 || col < 0 || row >= self.height || col >= self.width {
            return None;
        }
        self.cells.get((row * self.width + col) as usize).copied()
    }

    /// Buffer-local position paired with its cell, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Position::new(i as i32 / width, i as i32 % width), *cell))
    }

    /// Serialize: width (u16 LE), height (u16 LE), then 3 bytes per cell
    /// (main, secondary, style; style 0 = solid, 1..=4 = triangle corner)
    ///
    /// Buffers wider or higher than `u16::MAX` cells cannot be encoded.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let too_large = || EditError::ClipboardTooLarge {
            width: self.width,
            height: self.height,
        };
        let width = u16::try_from(self.width).map_err(|_| too_large())?;
        let height = u16::try_from(self.height).map_err(|_| too_large())?;

        let mut data = Vec::with_capacity(4 + self.cells.len() * 3);
        data.extend_from_slice(&width.to_le_bytes());
        data.extend_from_slice(&height.to_le_bytes());
        for cell in &self.cells {
            data.push(cell.main_color());
            data.push(cell.secondary_color());
            data.push(style_to_byte(cell.fill_style()));
        }
        Ok(data)
    }

    /// Deserialize from bytes; unknown style bytes decode as solid cells
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < 4 {
            return Err(EditError::InvalidClipboardData);
        }
        let width = u16::from_le_bytes([data[0], data[1]]) as i32;
        let height = u16::from_le_bytes([data[2], data[3]]) as i32;
        if width == 0 || height == 0 {
            return Err(EditError::InvalidClipboardData);
        }

        let count = width as usize * height as usize;
        let body = &data[4..];
        if body.len() < count * 3 {
            return Err(EditError::InvalidClipboardData);
        }

        let cells = body
            .chunks_exact(3)
            .take(count)
            .map(|chunk| match byte_to_style(chunk[2]) {
                Some(style) => Cell::new(chunk[0], chunk[1], style),
                None => Cell::default(),
            })
            .collect();

        Ok(Self { width, height, cells })
    }
}

fn style_to_byte(style: FillStyle) -> u8 {
    match style {
        FillStyle::Solid => 0,
        FillStyle::Triangle(Corner::TopLeft) => 1,
        FillStyle::Triangle(Corner::TopRight) => 2,
        FillStyle::Triangle(Corner::BottomLeft) => 3,
        FillStyle::Triangle(Corner::BottomRight) => 4,
    }
}

fn byte_to_style(byte: u8) -> Option<FillStyle> {
    match byte {
        0 => Some(FillStyle::Solid),
        1 => Some(FillStyle::Triangle(Corner::TopLeft)),
        2 => Some(FillStyle::Triangle(Corner::TopRight)),
        3 => Some(FillStyle::Triangle(Corner::BottomLeft)),
        4 => Some(FillStyle::Triangle(Corner::BottomRight)),
        _ => None,
    }
}
