//! Snapshot based undo history
//!
//! Every gesture takes a full snapshot of the grid *before* it mutates
//! anything (`begin_gesture`). When the gesture ends it reports whether it
//! changed something; unchanged gestures drop their snapshot again so no-op
//! clicks never show up in the history.
//!
//! The stack is bounded: at capacity the oldest snapshot is evicted (FIFO),
//! undo restores the newest (LIFO). An eviction caused by a gesture that ends
//! up unchanged is reverted together with the discarded snapshot.

use std::collections::VecDeque;

use crate::{CanvasLayout, Grid, Palette, SelectionRegion, DEFAULT_HISTORY_CAPACITY};

/// Trait for types that support undo/redo operations
pub trait UndoState {
    /// Get description of the next undo operation
    fn undo_description(&self) -> Option<String>;

    /// Check if undo is available
    fn can_undo(&self) -> bool;

    /// Perform undo, returns whether state was restored
    fn undo(&mut self) -> bool;

    /// Get description of the next redo operation
    fn redo_description(&self) -> Option<String>;

    /// Check if redo is available
    fn can_redo(&self) -> bool;

    /// Perform redo, returns whether state was restored
    fn redo(&mut self) -> bool;
}

/// Configuration captured by layout-altering operations
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutSnapshot {
    pub layout: CanvasLayout,
    pub palette: Palette,
}

/// Immutable copy of the editor state
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub grid: Grid,
    pub layout: Option<LayoutSnapshot>,
    /// Selection before a gesture that moves or replaces it; `None` if the
    /// gesture leaves the selection alone
    pub selection: Option<Option<SelectionRegion>>,
    pub description: String,
}

/// Handle for an open gesture, resolved by exactly one of
/// [`History::end_gesture`] or [`History::cancel_gesture`]
#[must_use]
#[derive(Debug, PartialEq, Eq)]
pub struct GestureToken {
    id: u64,
}

#[derive(Debug)]
struct PendingGesture {
    id: u64,
    /// Snapshot pushed out by this gesture's push
    evicted: Option<Snapshot>,
}

#[derive(Debug)]
pub struct History {
    undo_stack: VecDeque<Snapshot>,
    redo_stack: Vec<Snapshot>,
    capacity: usize,
    pending: Option<PendingGesture>,
    next_id: u64,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// Create a history keeping at most `capacity` (at least 1) snapshots
    pub fn new(capacity: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            capacity: capacity.max(1),
            pending: None,
            next_id: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn is_gesture_active(&self) -> bool {
        self.pending.is_some()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.back().map(|s| s.description.clone())
    }

    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(|s| s.description.clone())
    }

    /// Snapshot the grid before a gesture mutates it
    pub fn begin_gesture(&mut self, grid: &Grid, description: impl Into<String>) -> GestureToken {
        self.begin(Snapshot {
            grid: grid.clone(),
            layout: None,
            selection: None,
            description: description.into(),
        })
    }

    /// Snapshot grid and selection before a gesture that moves or replaces the selection
    pub fn begin_selection_gesture(&mut self, grid: &Grid, selection: Option<SelectionRegion>, description: impl Into<String>) -> GestureToken {
        self.begin(Snapshot {
            grid: grid.clone(),
            layout: None,
            selection: Some(selection),
            description: description.into(),
        })
    }

    /// Snapshot grid and layout configuration before a layout-altering operation
    pub fn begin_layout_gesture(&mut self, grid: &Grid, layout: LayoutSnapshot, description: impl Into<String>) -> GestureToken {
        self.begin(Snapshot {
            grid: grid.clone(),
            layout: Some(layout),
            selection: None,
            description: description.into(),
        })
    }

    fn begin(&mut self, snapshot: Snapshot) -> GestureToken {
        if let Some(pending) = self.pending.take() {
            log::warn!("gesture {} was never resolved, keeping its snapshot", pending.id);
        }

        let evicted = self.push_bounded(snapshot);
        let id = self.next_id;
        self.next_id += 1;
        self.pending = Some(PendingGesture { id, evicted });
        GestureToken { id }
    }

    /// Resolve a gesture. Unchanged gestures drop their snapshot; changed
    /// ones keep it and invalidate the redo stack.
    pub fn end_gesture(&mut self, token: GestureToken, changed: bool) {
        let Some(pending) = self.take_pending(&token) else {
            return;
        };

        if changed {
            self.redo_stack.clear();
            return;
        }

        self.undo_stack.pop_back();
        if let Some(evicted) = pending.evicted {
            self.undo_stack.push_front(evicted);
        }
    }

    /// Abandon a gesture: drops its snapshot and hands it back so the caller
    /// can restore the pre-gesture state
    pub fn cancel_gesture(&mut self, token: GestureToken) -> Option<Snapshot> {
        let pending = self.take_pending(&token)?;
        let snapshot = self.undo_stack.pop_back();
        if let Some(evicted) = pending.evicted {
            self.undo_stack.push_front(evicted);
        }
        snapshot
    }

    /// Abandon a gesture whose pre-gesture state is not needed
    pub fn discard_gesture(&mut self, token: GestureToken) {
        if self.cancel_gesture(token).is_some() {
            log::debug!("gesture snapshot discarded");
        }
    }

    /// Take the newest snapshot for an undo; `None` if empty or a gesture is open
    pub fn pop_undo(&mut self) -> Option<Snapshot> {
        if self.pending.is_some() {
            return None;
        }
        self.undo_stack.pop_back()
    }

    /// Take the newest redo snapshot; `None` if empty or a gesture is open
    pub fn pop_redo(&mut self) -> Option<Snapshot> {
        if self.pending.is_some() {
            return None;
        }
        self.redo_stack.pop()
    }

    /// Store the state replaced by an undo
    pub fn push_redo(&mut self, snapshot: Snapshot) {
        self.redo_stack.push(snapshot);
    }

    /// Store the state replaced by a redo (keeps the redo stack)
    pub fn push_undo(&mut self, snapshot: Snapshot) {
        self.push_bounded(snapshot);
    }

    /// Change the capacity, evicting the oldest snapshots if needed
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        while self.undo_stack.len() > self.capacity {
            self.undo_stack.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.pending = None;
    }

    fn push_bounded(&mut self, snapshot: Snapshot) -> Option<Snapshot> {
        let evicted = if self.undo_stack.len() >= self.capacity {
            self.undo_stack.pop_front()
        } else {
            None
        };
        self.undo_stack.push_back(snapshot);
        evicted
    }

    fn take_pending(&mut self, token: &GestureToken) -> Option<PendingGesture> {
        match &self.pending {
            Some(pending) if pending.id == token.id => self.pending.take(),
            _ => {
                log::warn!("gesture token {} does not match the open gesture", token.id);
                None
            }
        }
    }
}
