//! Editor session
//!
//! The single owner of everything an editor window mutates: the grid, its
//! history, the layout/palette configuration, color slots, selection and the
//! in-flight gesture. The embedding layer feeds pointer events into the
//! dispatcher (`on_gesture_*`) and drains render work with
//! [`EditorSession::flush_dirty`].
//!
//! # Color slots
//!
//! The pointer button strictly selects the slot a gesture paints with:
//! primary button → primary color, secondary button → secondary color.
//! The pencil's optional toggle-erase mode is the only exception (see
//! [`EditorConfig::pencil_toggle_erase`]).
//!
//! # Module Organization
//!
//! - `state.rs` - Struct definition, constructors, getters, color slots
//! - `dispatcher.rs` - Gesture state machine for all tools
//! - `layout_operations.rs` - Resize, cell size, spacing, palette, background
//! - `clipboard.rs` - Selection, copy, cut, paste, delete
//! - `undo.rs` - Undo/redo system
//! - `internal.rs` - Snapshot restore and gesture bookkeeping

use crate::render::DirtyTracker;
use crate::{
    CanvasLayout, Cell, Document, EditorConfig, Grid, History, Palette, PaletteIndex, PointerButton, Position, RenderSink, Result, SelectionBuffer,
    SelectionRegion, Tool,
};

use super::gesture::Gesture;

// ═══════════════════════════════════════════════════════════════════════════
// Editor Session
// ═══════════════════════════════════════════════════════════════════════════

pub struct EditorSession {
    // ═══════════════════════════════════════════════════════════════════════
    // Document Data
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) grid: Grid,

    pub(crate) layout: CanvasLayout,

    pub(crate) palette: Palette,

    // ═══════════════════════════════════════════════════════════════════════
    // Colors
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) primary_color: PaletteIndex,

    pub(crate) secondary_color: PaletteIndex,

    /// Index painted by toggle-erase pencil strokes
    pub(crate) erase_color: PaletteIndex,

    pub(crate) pencil_toggle_erase: bool,

    // ═══════════════════════════════════════════════════════════════════════
    // Selection & Clipboard
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) selection: Option<SelectionRegion>,

    pub(crate) clipboard: Option<SelectionBuffer>,

    // ═══════════════════════════════════════════════════════════════════════
    // Gesture State
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) gesture: Option<Gesture>,

    /// Last pencil click, start point of shift+click lines
    pub(crate) last_click: Option<Position>,

    // ═══════════════════════════════════════════════════════════════════════
    // Undo & Render
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) history: History,

    pub(crate) dirty: DirtyTracker,

    /// Whether the document changed since the last save
    pub(crate) is_modified: bool,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

impl EditorSession {
    // ═══════════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════════

    /// Blank `rows × cols` grid with default configuration
    pub fn new(rows: i32, cols: i32) -> Self {
        Self::from_config(&EditorConfig {
            rows,
            cols,
            ..Default::default()
        })
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::with_grid(Grid::new(config.rows, config.cols), config)
    }

    /// Session for a loaded document; palette and layout come from the document
    pub fn from_document(document: &Document, config: &EditorConfig) -> Self {
        let mut session = Self::with_grid(document.to_grid(), config);
        session.palette = document.palette.clone();
        session.layout = document.layout;
        session
    }

    fn with_grid(grid: Grid, config: &EditorConfig) -> Self {
        Self {
            grid,
            layout: config.layout,
            palette: config.palette.clone(),
            primary_color: config.primary_color,
            secondary_color: config.secondary_color,
            erase_color: config.erase_color,
            pencil_toggle_erase: config.pencil_toggle_erase,
            selection: None,
            clipboard: None,
            gesture: None,
            last_click: None,
            history: History::new(config.history_capacity),
            dirty: DirtyTracker::default(),
            is_modified: false,
        }
    }

    pub fn to_document(&self) -> Document {
        Document::new(&self.grid, &self.palette, &self.layout)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, pos: impl Into<Position>) -> Cell {
        self.grid.get(pos)
    }

    pub fn layout(&self) -> &CanvasLayout {
        &self.layout
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn primary_color(&self) -> PaletteIndex {
        self.primary_color
    }

    pub fn secondary_color(&self) -> PaletteIndex {
        self.secondary_color
    }

    /// Color slot selected by a pointer button
    pub fn color_for(&self, button: PointerButton) -> PaletteIndex {
        match button {
            PointerButton::Primary => self.primary_color,
            PointerButton::Secondary => self.secondary_color,
        }
    }

    pub fn erase_color(&self) -> PaletteIndex {
        self.erase_color
    }

    pub fn pencil_toggle_erase(&self) -> bool {
        self.pencil_toggle_erase
    }

    pub fn selection(&self) -> Option<SelectionRegion> {
        self.selection
    }

    pub fn clipboard(&self) -> Option<&SelectionBuffer> {
        self.clipboard.as_ref()
    }

    pub fn last_click(&self) -> Option<Position> {
        self.last_click
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Tool of the gesture in progress
    pub fn active_tool(&self) -> Option<Tool> {
        self.gesture.as_ref().map(|g| g.tool())
    }

    /// Uncommitted shape cells and their color, while a shape is dragged
    pub fn shape_preview(&self) -> Option<(Vec<Position>, PaletteIndex)> {
        self.gesture.as_ref().and_then(|g| g.shape_preview())
    }

    /// Selection rectangle to draw: the one being defined or moved, else the
    /// committed selection
    pub fn selection_preview(&self) -> Option<SelectionRegion> {
        self.gesture.as_ref().and_then(|g| g.selection_preview()).or(self.selection)
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Setters
    // ═══════════════════════════════════════════════════════════════════════

    /// Assign a palette index to the slot of `button`
    pub fn set_color(&mut self, button: PointerButton, index: usize) -> Result<()> {
        let index = self.palette.check_index(index)?;
        match button {
            PointerButton::Primary => self.primary_color = index,
            PointerButton::Secondary => self.secondary_color = index,
        }
        log::debug!("{:?} color set to {}", button, index);
        Ok(())
    }

    /// Number key shortcut: '1'..='9' pick palette index 0..=8 for the
    /// primary slot. Returns whether the key was handled.
    pub fn select_color_by_key(&mut self, key: char) -> bool {
        let Some(digit) = key.to_digit(10) else {
            return false;
        };
        if digit == 0 {
            return false;
        }
        self.set_color(PointerButton::Primary, digit as usize - 1).is_ok()
    }

    pub fn set_pencil_toggle_erase(&mut self, enabled: bool) {
        self.pencil_toggle_erase = enabled;
    }

    /// Mark as clean (after save)
    pub fn mark_saved(&mut self) {
        self.is_modified = false;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Rendering
    // ═══════════════════════════════════════════════════════════════════════

    /// Deliver accumulated render work to `sink`
    pub fn flush_dirty(&mut self, sink: &mut dyn RenderSink) {
        self.dirty.flush(&self.grid, sink);
    }

    /// Cells marked dirty since the last flush (empty after a full-redraw mark)
    pub fn dirty_cells(&self) -> &[Position] {
        self.dirty.cells()
    }

    pub fn needs_full_redraw(&self) -> bool {
        self.dirty.is_full()
    }

    pub fn request_redraw(&mut self) {
        self.dirty.mark_full();
    }
}
