//! Undo/Redo system for the editor session
//!
//! Every gesture snapshots the grid before mutating it; undo swaps the
//! newest snapshot back in and keeps the replaced state for redo. Snapshots
//! taken by layout-altering operations also restore layout and palette.

use crate::UndoState;

use super::EditorSession;

impl EditorSession {
    /// Get undo stack length
    pub fn undo_stack_len(&self) -> usize {
        self.history.undo_len()
    }

    /// Get redo stack length
    pub fn redo_stack_len(&self) -> usize {
        self.history.redo_len()
    }

    /// Change the history depth, dropping the oldest snapshots if needed
    pub fn set_history_capacity(&mut self, capacity: usize) {
        self.history.set_capacity(capacity);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// UndoState Trait Implementation
// ═══════════════════════════════════════════════════════════════════════════

impl UndoState for EditorSession {
    fn undo_description(&self) -> Option<String> {
        self.history.undo_description()
    }

    fn can_undo(&self) -> bool {
        self.gesture.is_none() && self.history.undo_len() > 0
    }

    fn undo(&mut self) -> bool {
        if self.gesture_blocks("undo") {
            return false;
        }
        let Some(snapshot) = self.history.pop_undo() else {
            log::info!("nothing to undo");
            return false;
        };

        let description = snapshot.description.clone();
        let current = self.restore_snapshot(snapshot);
        self.history.push_redo(current);
        log::debug!("undo: {}", description);
        true
    }

    fn redo_description(&self) -> Option<String> {
        self.history.redo_description()
    }

    fn can_redo(&self) -> bool {
        self.gesture.is_none() && self.history.redo_len() > 0
    }

    fn redo(&mut self) -> bool {
        if self.gesture_blocks("redo") {
            return false;
        }
        let Some(snapshot) = self.history.pop_redo() else {
            log::info!("nothing to redo");
            return false;
        };

        let description = snapshot.description.clone();
        let current = self.restore_snapshot(snapshot);
        self.history.push_undo(current);
        log::debug!("redo: {}", description);
        true
    }
}
