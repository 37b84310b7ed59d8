//! Render notifications
//!
//! The core never draws. It records which cells changed and hands them to a
//! [`RenderSink`] when the embedding layer calls
//! [`EditorSession::flush_dirty`](crate::EditorSession::flush_dirty).

use std::collections::HashSet;

use crate::{Grid, Position};

/// Receiver for grid change notifications
pub trait RenderSink {
    /// Some cells changed; `positions` are inside the grid and unique
    fn cells_changed(&mut self, grid: &Grid, positions: &[Position]);

    /// Everything may have changed (fill, undo, resize, layout change)
    fn redraw(&mut self, grid: &Grid);
}

/// Pending render work
#[derive(Debug, Default)]
pub struct DirtyTracker {
    cells: Vec<Position>,
    seen: HashSet<Position>,
    full: bool,
}

impl DirtyTracker {
    pub fn mark(&mut self, pos: Position) {
        if self.full {
            return;
        }
        if self.seen.insert(pos) {
            self.cells.push(pos);
        }
    }

    pub fn mark_all(&mut self, positions: impl IntoIterator<Item = Position>) {
        for pos in positions {
            self.mark(pos);
        }
    }

    pub fn mark_full(&mut self) {
        self.full = true;
        self.cells.clear();
        self.seen.clear();
    }

    pub fn is_full(&self) -> bool {
        self.full
    }

    pub fn is_clean(&self) -> bool {
        !self.full && self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Deliver and reset; out-of-grid positions are dropped
    pub fn flush(&mut self, grid: &Grid, sink: &mut dyn RenderSink) {
        if self.full {
            sink.redraw(grid);
        } else if !self.cells.is_empty() {
            let positions: Vec<Position> = self.cells.iter().copied().filter(|&p| grid.is_inside(p)).collect();
            if !positions.is_empty() {
                sink.cells_changed(grid, &positions);
            }
        }
        self.full = false;
        self.cells.clear();
        self.seen.clear();
    }
}
