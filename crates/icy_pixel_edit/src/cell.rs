//! Cell model
//!
//! A cell is either painted with a single palette index or split along a
//! diagonal into two triangular halves. The half that touches the named
//! corner carries the *main* color, the other half the *secondary* color.
//!
//! ```text
//!  Triangle(TopLeft)     Triangle(BottomRight)
//!  +-------+             +-------+
//!  |M M M /|             |S S S /|
//!  |M M / S|             |S S / M|
//!  |M / S S|             |S / M M|
//!  |/ S S S|             |/ M M M|
//!  +-------+             +-------+
//! ```
//!
//! Cells are always kept normalized: a triangle whose two halves carry the
//! same index collapses to a solid cell, and solid cells keep their unused
//! secondary slot at [`DEFAULT_COLOR`].

use serde::{Deserialize, Serialize};

/// Index into the (externally owned) palette
pub type PaletteIndex = u8;

/// Palette index of a freshly created / erased cell
pub const DEFAULT_COLOR: PaletteIndex = 8;

// ═══════════════════════════════════════════════════════════════════════════
// Corner / Direction
// ═══════════════════════════════════════════════════════════════════════════

/// One of the four triangular quadrants of a cell, named by the corner it touches
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [Corner::TopLeft, Corner::TopRight, Corner::BottomLeft, Corner::BottomRight];

    /// The diagonally opposite corner
    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }

    pub fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    pub fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    /// Whether the main half of a `Triangle(self)` cell borders the edge in `dir`
    ///
    /// | main corner  | main half faces | secondary half faces |
    /// |--------------|-----------------|----------------------|
    /// | TopLeft      | up, left        | down, right          |
    /// | TopRight     | up, right       | down, left           |
    /// | BottomLeft   | down, left      | up, right            |
    /// | BottomRight  | down, right     | up, left             |
    pub fn faces(self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.is_top(),
            Direction::Down => !self.is_top(),
            Direction::Left => self.is_left(),
            Direction::Right => !self.is_left(),
        }
    }
}

/// Axis-aligned neighbor direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// (row, col) step towards the neighbor
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Fill style
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillStyle {
    #[default]
    Solid,
    /// Diagonal split, main color in the half touching the corner
    Triangle(Corner),
}

/// Which color slot of a cell is addressed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Half {
    Main,
    Secondary,
}

// ═══════════════════════════════════════════════════════════════════════════
// Cell
// ═══════════════════════════════════════════════════════════════════════════

/// One grid unit
///
/// Construct through [`Cell::solid`], [`Cell::triangle`] or [`Cell::new`];
/// all of them normalize. Equality compares the stored fields, so
/// `Triangle(TopLeft){a, b}` and `Triangle(BottomRight){b, a}` differ even
/// though they look the same; see [`Cell::same_paint`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CellRecord", into = "CellRecord")]
pub struct Cell {
    main_color: PaletteIndex,
    secondary_color: PaletteIndex,
    fill_style: FillStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::solid(DEFAULT_COLOR)
    }
}

impl Cell {
    pub fn new(main_color: PaletteIndex, secondary_color: PaletteIndex, fill_style: FillStyle) -> Self {
        match fill_style {
            FillStyle::Solid => Cell::solid(main_color),
            FillStyle::Triangle(corner) => Cell::triangle(corner, main_color, secondary_color),
        }
    }

    pub fn solid(color: PaletteIndex) -> Self {
        Self {
            main_color: color,
            secondary_color: DEFAULT_COLOR,
            fill_style: FillStyle::Solid,
        }
    }

    /// Split cell; collapses to `Solid(main)` if both halves share a color
    pub fn triangle(corner: Corner, main: PaletteIndex, secondary: PaletteIndex) -> Self {
        if main == secondary {
            return Cell::solid(main);
        }
        Self {
            main_color: main,
            secondary_color: secondary,
            fill_style: FillStyle::Triangle(corner),
        }
    }

    pub fn main_color(&self) -> PaletteIndex {
        self.main_color
    }

    pub fn secondary_color(&self) -> PaletteIndex {
        self.secondary_color
    }

    pub fn fill_style(&self) -> FillStyle {
        self.fill_style
    }

    pub fn is_solid(&self) -> bool {
        self.fill_style == FillStyle::Solid
    }

    pub fn color(&self, half: Half) -> PaletteIndex {
        match half {
            Half::Main => self.main_color,
            Half::Secondary => self.secondary_color,
        }
    }

    /// Color and slot this cell presents on the edge in direction `dir`
    pub fn facing(&self, dir: Direction) -> (PaletteIndex, Half) {
        match self.fill_style {
            FillStyle::Solid => (self.main_color, Half::Main),
            FillStyle::Triangle(corner) => {
                if corner.faces(dir) {
                    (self.main_color, Half::Main)
                } else {
                    (self.secondary_color, Half::Secondary)
                }
            }
        }
    }

    /// Color visible in the given quadrant
    ///
    /// The two quadrants cut by the diagonal report the main color.
    pub fn color_at(&self, quadrant: Corner) -> PaletteIndex {
        match self.fill_style {
            FillStyle::Triangle(corner) if quadrant == corner.opposite() => self.secondary_color,
            _ => self.main_color,
        }
    }

    /// Recolor one slot, keeping the split orientation
    pub fn with_half(&self, half: Half, color: PaletteIndex) -> Cell {
        match (self.fill_style, half) {
            (FillStyle::Solid, _) => Cell::solid(color),
            (FillStyle::Triangle(corner), Half::Main) => Cell::triangle(corner, color, self.secondary_color),
            (FillStyle::Triangle(corner), Half::Secondary) => Cell::triangle(corner, self.main_color, color),
        }
    }

    /// Apply a half-pixel dab of `color` aimed at `quadrant`
    ///
    /// Solid cells split with the dab color as main. On split cells, dabbing
    /// the main corner replaces main, dabbing the opposite corner makes that
    /// half the new main, and dabbing one of the two corners cut by the
    /// diagonal promotes the new color to main with the old main demoted.
    pub fn merge_dab(&self, quadrant: Corner, color: PaletteIndex) -> Cell {
        match self.fill_style {
            FillStyle::Solid => {
                if self.main_color == color {
                    return *self;
                }
                Cell::triangle(quadrant, color, self.main_color)
            }
            FillStyle::Triangle(corner) => {
                let (main, secondary) = (self.main_color, self.secondary_color);
                if quadrant == corner {
                    if color == main {
                        return *self;
                    }
                    Cell::triangle(corner, color, secondary)
                } else {
                    if quadrant == corner.opposite() && color == secondary {
                        return *self;
                    }
                    // opposite or cut corner: the dabbed half becomes main
                    Cell::triangle(quadrant, color, main)
                }
            }
        }
    }

    /// True if both cells show the same colors in every quadrant
    pub fn same_paint(&self, other: &Cell) -> bool {
        self.canonical() == other.canonical()
    }

    /// Bottom corners flipped to their opposite top corner with the colors swapped
    fn canonical(&self) -> (PaletteIndex, PaletteIndex, FillStyle) {
        match self.fill_style {
            FillStyle::Solid => (self.main_color, DEFAULT_COLOR, FillStyle::Solid),
            FillStyle::Triangle(corner) if !corner.is_top() => (self.secondary_color, self.main_color, FillStyle::Triangle(corner.opposite())),
            FillStyle::Triangle(corner) => (self.main_color, self.secondary_color, FillStyle::Triangle(corner)),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Serialization
// ═══════════════════════════════════════════════════════════════════════════

/// On-disk form of a cell; missing fields fall back to the default cell
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct CellRecord {
    #[serde(default = "default_color")]
    main_color: PaletteIndex,
    #[serde(default = "default_color")]
    secondary_color: PaletteIndex,
    #[serde(default)]
    fill_style: FillStyle,
}

fn default_color() -> PaletteIndex {
    DEFAULT_COLOR
}

impl From<CellRecord> for Cell {
    fn from(record: CellRecord) -> Self {
        Cell::new(record.main_color, record.secondary_color, record.fill_style)
    }
}

impl From<Cell> for CellRecord {
    fn from(cell: Cell) -> Self {
        CellRecord {
            main_color: cell.main_color,
            secondary_color: cell.secondary_color,
            fill_style: cell.fill_style,
        }
    }
}
