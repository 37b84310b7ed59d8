//! Selection and clipboard operations
//!
//! The clipboard holds a detached [`SelectionBuffer`]; `clipboard_bytes` /
//! `set_clipboard_bytes` exchange it with a system clipboard using
//! [`PIXEL_CLIPBOARD_TYPE`](crate::PIXEL_CLIPBOARD_TYPE) data.

use crate::{paint, Position, Result, SelectionBuffer, SelectionRegion};

use super::EditorSession;

impl EditorSession {
    // ═══════════════════════════════════════════════════════════════════════
    // Selection
    // ═══════════════════════════════════════════════════════════════════════

    /// Select the whole grid
    pub fn select_all(&mut self) -> bool {
        if self.gesture_blocks("select all") {
            return false;
        }
        self.selection = SelectionRegion::full(&self.grid);
        self.selection.is_some()
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Select a rectangle spanned by two corners, clipped to the grid
    pub fn set_selection(&mut self, a: Position, b: Position) -> bool {
        self.selection = SelectionRegion::new(a, b).clip(&self.grid);
        self.selection.is_some()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Clipboard
    // ═══════════════════════════════════════════════════════════════════════

    /// Copy the selection to the clipboard; false without a selection
    pub fn copy(&mut self) -> bool {
        let Some(region) = self.selection else {
            log::info!("copy: nothing selected");
            return false;
        };
        self.clipboard = Some(paint::copy_to_buffer(&self.grid, &region));
        true
    }

    /// Copy the selection, then erase it; the selection stays in place
    pub fn cut(&mut self) -> bool {
        if self.gesture_blocks("cut") || !self.copy() {
            return false;
        }
        self.delete_selection();
        true
    }

    /// Reset the selected cells to the default cell
    pub fn delete_selection(&mut self) -> bool {
        if self.gesture_blocks("delete") {
            return false;
        }
        let Some(region) = self.selection else {
            return false;
        };

        let token = self.history.begin_gesture(&self.grid, "Delete");
        let changed = paint::erase_region(&mut self.grid, &region);
        if changed {
            self.dirty.mark_all(region.positions());
        }
        self.finish_gesture(token, changed, "delete");
        changed
    }

    /// Paste the clipboard with its top-left cell at `top_left`; the pasted
    /// area becomes the selection
    pub fn paste_at(&mut self, top_left: Position) -> bool {
        if self.gesture_blocks("paste") {
            return false;
        }
        let Some(buffer) = self.clipboard.take() else {
            log::info!("paste: clipboard is empty");
            return false;
        };

        let token = self.history.begin_selection_gesture(&self.grid, self.selection, "Paste");
        let changed = paint::paste_buffer(&mut self.grid, &buffer, top_left);
        let end = top_left.offset(buffer.height() - 1, buffer.width() - 1);
        self.selection = SelectionRegion::new(top_left, end).clip(&self.grid);
        self.clipboard = Some(buffer);
        if changed {
            self.dirty.mark_full();
        }
        self.finish_gesture(token, changed, "paste");
        changed
    }

    /// Clipboard contents in the binary clipboard format; `None` if empty
    pub fn clipboard_bytes(&self) -> Result<Option<Vec<u8>>> {
        self.clipboard.as_ref().map(SelectionBuffer::to_bytes).transpose()
    }

    /// Load clipboard contents from the binary clipboard format
    pub fn set_clipboard_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.clipboard = Some(SelectionBuffer::from_bytes(data)?);
        Ok(())
    }

    pub fn set_clipboard(&mut self, buffer: SelectionBuffer) {
        self.clipboard = Some(buffer);
    }
}
