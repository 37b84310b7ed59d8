//! Internal helpers shared by the session operations
//!
//! Not part of the public API.

use crate::{GestureToken, LayoutSnapshot, Snapshot};

use super::EditorSession;

impl EditorSession {
    pub(crate) fn layout_snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            layout: self.layout,
            palette: self.palette.clone(),
        }
    }

    /// Replace grid (and configuration or selection, if captured) with `snapshot`;
    /// returns the replaced state in the same shape
    pub(crate) fn restore_snapshot(&mut self, snapshot: Snapshot) -> Snapshot {
        let current_layout = snapshot.layout.as_ref().map(|_| self.layout_snapshot());
        let current_selection = snapshot.selection.map(|_| self.selection);
        let current = Snapshot {
            grid: std::mem::replace(&mut self.grid, snapshot.grid),
            layout: current_layout,
            selection: current_selection,
            description: snapshot.description,
        };

        if let Some(LayoutSnapshot { layout, palette }) = snapshot.layout {
            self.layout = layout;
            self.palette = palette;
        }
        if let Some(selection) = snapshot.selection {
            self.selection = selection;
        }
        self.selection = self.selection.and_then(|s| s.clip(&self.grid));
        self.dirty.mark_full();
        self.is_modified = true;
        current
    }

    /// Resolve a gesture with the history and update modification state
    pub(crate) fn finish_gesture(&mut self, token: GestureToken, changed: bool, what: &str) {
        self.history.end_gesture(token, changed);
        if changed {
            self.is_modified = true;
            log::debug!("{} committed", what);
        } else {
            log::debug!("{} changed nothing, snapshot discarded", what);
        }
    }

    /// Operations that take their own snapshot cannot run inside a gesture
    pub(crate) fn gesture_blocks(&self, operation: &str) -> bool {
        if self.gesture.is_some() || self.history.is_gesture_active() {
            log::warn!("{} rejected while a gesture is in progress", operation);
            return true;
        }
        false
    }
}
