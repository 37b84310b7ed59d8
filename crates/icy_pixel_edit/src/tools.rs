//! Tool definitions for grid editing
//!
//! Tools form a closed set; the dispatcher in `EditorSession` switches over
//! them exhaustively.

use serde::{Deserialize, Serialize};

use crate::{brushes, Corner, Position};

/// Available editing tools
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Freehand solid painting, drags are interpolated
    #[default]
    Pencil,
    /// Dabs diagonal halves of single cells
    HalfPixel,
    /// Straight line between press and release
    Line,
    /// Rectangle outline between press and release
    RectangleOutline,
    /// Filled rectangle between press and release
    RectangleFilled,
    /// Circle inside the press/release bounding box
    Circle,
    /// Triangle-aware flood fill
    Bucket,
    /// Rectangle selection, dragging inside a selection moves it
    Select,
    /// Pick a color from the grid into the button's slot
    Pipette,
}

/// Shapes committed on gesture end
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    RectangleOutline,
    RectangleFilled,
    Circle,
}

impl Tool {
    pub const ALL: [Tool; 9] = [
        Tool::Pencil,
        Tool::HalfPixel,
        Tool::Line,
        Tool::RectangleOutline,
        Tool::RectangleFilled,
        Tool::Circle,
        Tool::Bucket,
        Tool::Select,
        Tool::Pipette,
    ];

    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pencil => "Pencil",
            Tool::HalfPixel => "Half Pixel",
            Tool::Line => "Line",
            Tool::RectangleOutline => "Rectangle",
            Tool::RectangleFilled => "Filled Rectangle",
            Tool::Circle => "Circle",
            Tool::Bucket => "Bucket",
            Tool::Select => "Select",
            Tool::Pipette => "Pipette",
        }
    }

    /// Shape drawn by this tool, if it is a shape tool
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            Tool::Line => Some(ShapeKind::Line),
            Tool::RectangleOutline => Some(ShapeKind::RectangleOutline),
            Tool::RectangleFilled => Some(ShapeKind::RectangleFilled),
            Tool::Circle => Some(ShapeKind::Circle),
            _ => None,
        }
    }

    /// Whether the tool needs the quadrant under the pointer
    pub fn uses_quadrant(&self) -> bool {
        matches!(self, Tool::HalfPixel | Tool::Pipette)
    }
}

impl ShapeKind {
    /// Cells covered by the shape between two corner positions
    pub fn points(&self, start: Position, end: Position) -> Vec<Position> {
        match self {
            ShapeKind::Line => brushes::line_points(start, end),
            ShapeKind::RectangleOutline => brushes::rectangle_points(start, end, false),
            ShapeKind::RectangleFilled => brushes::rectangle_points(start, end, true),
            ShapeKind::Circle => brushes::circle_points(start, end),
        }
    }
}

/// Pointer button; selects the color slot a gesture paints with
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
}

/// One pointer event in grid space, produced by the embedding layer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureEvent {
    pub position: Position,
    pub quadrant: Option<Corner>,
    pub button: PointerButton,
    /// Shift held (pencil: line from the last click)
    pub shift: bool,
}

impl GestureEvent {
    pub fn new(position: impl Into<Position>, button: PointerButton) -> Self {
        Self {
            position: position.into(),
            quadrant: None,
            button,
            shift: false,
        }
    }

    pub fn primary(position: impl Into<Position>) -> Self {
        Self::new(position, PointerButton::Primary)
    }

    pub fn secondary(position: impl Into<Position>) -> Self {
        Self::new(position, PointerButton::Secondary)
    }

    pub fn with_quadrant(mut self, quadrant: Option<Corner>) -> Self {
        self.quadrant = quadrant;
        self
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }
}
