//! Per-gesture tool state
//!
//! A gesture captures the tool when it starts; each variant carries only what
//! its tool needs until the gesture ends or is cancelled.

use crate::{Corner, GestureToken, Grid, PaletteIndex, Position, SelectionBuffer, SelectionRegion, ShapeKind, Tool};

pub(crate) enum Gesture {
    /// Freehand solid stroke, interpolated between successive positions
    Pencil {
        token: GestureToken,
        color: PaletteIndex,
        last: Position,
        changed: bool,
    },
    /// Per-cell half-pixel dabs
    HalfPixel {
        token: GestureToken,
        color: PaletteIndex,
        last: (Position, Option<Corner>),
        changed: bool,
    },
    /// Shape preview between `start` and `current`, committed on release
    Shape {
        token: GestureToken,
        kind: ShapeKind,
        color: PaletteIndex,
        start: Position,
        current: Position,
    },
    /// Growing selection rectangle
    SelectDefine { anchor: Position, lead: Position },
    /// Dragging the selected cells; the grid shows the provisional result
    SelectMove {
        token: GestureToken,
        base: Grid,
        region: SelectionRegion,
        buffer: SelectionBuffer,
        grab: Position,
        offset: (i32, i32),
    },
}

impl Gesture {
    pub fn tool(&self) -> Tool {
        match self {
            Gesture::Pencil { .. } => Tool::Pencil,
            Gesture::HalfPixel { .. } => Tool::HalfPixel,
            Gesture::Shape { kind, .. } => match kind {
                ShapeKind::Line => Tool::Line,
                ShapeKind::RectangleOutline => Tool::RectangleOutline,
                ShapeKind::RectangleFilled => Tool::RectangleFilled,
                ShapeKind::Circle => Tool::Circle,
            },
            Gesture::SelectDefine { .. } | Gesture::SelectMove { .. } => Tool::Select,
        }
    }

    /// Cells of the uncommitted shape
    pub fn shape_preview(&self) -> Option<(Vec<Position>, PaletteIndex)> {
        match self {
            Gesture::Shape { kind, color, start, current, .. } => Some((kind.points(*start, *current), *color)),
            _ => None,
        }
    }

    /// Rectangle shown while a selection is being defined or moved
    pub fn selection_preview(&self) -> Option<SelectionRegion> {
        match self {
            Gesture::SelectDefine { anchor, lead } => Some(SelectionRegion::new(*anchor, *lead)),
            Gesture::SelectMove { region, offset, .. } => Some(region.translate(offset.0, offset.1)),
            _ => None,
        }
    }
}
