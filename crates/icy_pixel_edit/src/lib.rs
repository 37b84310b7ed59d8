//! Editing core for half-pixel mosaic grids
//!
//! A grid of palette-indexed cells, each either solid or split along a
//! diagonal into two colored halves. The crate provides the pure paint,
//! shape, selection and flood fill operations on a [`Grid`], a bounded
//! snapshot [`History`], and an [`EditorSession`] that dispatches pointer
//! gestures to the tools and keeps undo, selection and render state.
//!
//! Drawing, pointer capture and palette display belong to the embedding
//! layer; see [`CanvasLayout`] for pointer mapping and [`RenderSink`] for
//! change notifications.

mod cell;
pub use cell::*;

mod grid;
pub use grid::*;

mod palette;
pub use palette::*;

mod layout;
pub use layout::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

pub mod brushes;

pub mod paint;
pub use paint::{apply_shape_pixels, copy_to_buffer, erase_region, paint_cell, paint_line, paste_buffer};

mod flood_fill;
pub use flood_fill::*;

mod selection;
pub use selection::*;

mod undo_stack;
pub use undo_stack::*;

mod tools;
pub use tools::*;

mod render;
pub use render::*;

mod document;
pub use document::*;

mod edit_state;
pub use edit_state::EditorSession;
