//! Layout-altering operations
//!
//! Each runs as a one-shot gesture whose snapshot carries layout and palette
//! next to the grid, so a single undo restores all of them.

use crate::{Color, EditError, Palette, Result};

use super::EditorSession;

impl EditorSession {
    /// Resize the grid, keeping every cell valid in both extents
    pub fn resize_grid(&mut self, rows: i32, cols: i32) -> Result<bool> {
        if rows <= 0 || cols <= 0 {
            return Err(EditError::InvalidDimensions { rows, cols });
        }
        Ok(self.apply_layout_change("Resize grid", |session| {
            if session.grid.rows() == rows && session.grid.cols() == cols {
                return false;
            }
            session.grid.resize(rows, cols);
            session.selection = session.selection.and_then(|s| s.clip(&session.grid));
            true
        }))
    }

    /// Set the cell edge length in canvas pixels (at least 1)
    pub fn set_cell_size(&mut self, cell_size: i32) -> bool {
        let cell_size = cell_size.max(1);
        self.apply_layout_change("Change cell size", |session| {
            if session.layout.cell_size == cell_size {
                return false;
            }
            session.layout.cell_size = cell_size;
            true
        })
    }

    /// Set the gap between cells (at least 0)
    pub fn set_spacing(&mut self, spacing: i32) -> bool {
        let spacing = spacing.max(0);
        self.apply_layout_change("Change spacing", |session| {
            if session.layout.spacing == spacing {
                return false;
            }
            session.layout.spacing = spacing;
            true
        })
    }

    /// Replace the palette; cells keep their indices even if the new palette
    /// is shorter (unknown indices render with the default color)
    pub fn set_palette(&mut self, palette: Palette) -> bool {
        self.apply_layout_change("Change palette", |session| {
            if session.palette == palette {
                return false;
            }
            if palette.len() < session.palette.len() {
                log::info!("palette shrinks from {} to {} colors", session.palette.len(), palette.len());
            }
            session.palette = palette;
            true
        })
    }

    pub fn set_background(&mut self, background: Color) -> bool {
        self.apply_layout_change("Change background", |session| {
            if session.layout.background == background {
                return false;
            }
            session.layout.background = background;
            true
        })
    }

    fn apply_layout_change(&mut self, description: &str, change: impl FnOnce(&mut Self) -> bool) -> bool {
        if self.gesture_blocks(description) {
            return false;
        }
        let token = self.history.begin_layout_gesture(&self.grid, self.layout_snapshot(), description);
        let changed = change(self);
        if changed {
            self.dirty.mark_full();
        }
        self.finish_gesture(token, changed, description);
        changed
    }
}
