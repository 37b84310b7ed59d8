//! Editor session module structure
//!
//! - `state.rs` - Struct definition, constructors, getters, color slots
//! - `dispatcher.rs` - Gesture state machine for all tools
//! - `layout_operations.rs` - Resize, cell size, spacing, palette, background
//! - `clipboard.rs` - Selection, copy, cut, paste, delete
//! - `undo.rs` - Undo/redo system
//! - `internal.rs` - Snapshot restore and gesture bookkeeping

mod gesture;

mod state;

mod clipboard;
mod dispatcher;
mod internal;
mod layout_operations;
mod undo;

pub use state::EditorSession;
