//! Brush/shape rasterization for the pixel grid
//!
//! Contains pure algorithms that turn a gesture into grid positions:
//! - Quadrant detection inside one cell
//! - Lines (Bresenham's algorithm)
//! - Rectangles (outline and filled)
//! - Circles (distance band approximation)
//!
//! Results may contain positions outside the grid; painting ignores them.

use crate::{Corner, Position};

/// Half-width of the band around the radius that counts as "on the circle"
pub const CIRCLE_THICKNESS: f64 = 0.8;

// ═══════════════════════════════════════════════════════════════════════════
// Quadrant Detection
// ═══════════════════════════════════════════════════════════════════════════

/// Determine which quadrant of a cell a pointer offset targets
///
/// `x`/`y` are the pointer offset in pixels from the top-left of the cell's
/// footprint, `cell_size` the footprint size. Cells of size 0 or 1 have no
/// quadrants.
///
/// For odd sizes the center pixel row/column breaks ties deterministically:
/// the exact center pixel is `TopLeft`, the vertical center line belongs to the
/// left quadrants (split by y) and the horizontal center line to the top
/// quadrants (split by x).
pub fn quadrant_at(x: f64, y: f64, cell_size: i32) -> Option<Corner> {
    if cell_size <= 1 || !x.is_finite() || !y.is_finite() {
        return None;
    }

    let px = (x.floor() as i32).clamp(0, cell_size - 1);
    let py = (y.floor() as i32).clamp(0, cell_size - 1);
    let half = cell_size / 2;

    let (left, top) = if cell_size % 2 == 0 {
        (px < half, py < half)
    } else {
        match (px == half, py == half) {
            (true, true) => (true, true),
            (true, false) => (true, py < half),
            (false, true) => (px < half, true),
            (false, false) => (px < half, py < half),
        }
    };

    Some(match (top, left) {
        (true, true) => Corner::TopLeft,
        (true, false) => Corner::TopRight,
        (false, true) => Corner::BottomLeft,
        (false, false) => Corner::BottomRight,
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Bresenham Line Algorithm
// ═══════════════════════════════════════════════════════════════════════════

/// Bresenham's line algorithm - returns the cells along the line
///
/// The result starts at `from`, ends at `to` and never visits a cell twice.
pub fn line_points(from: Position, to: Position) -> Vec<Position> {
    let d_col = (to.col - from.col).abs();
    let d_row = (to.row - from.row).abs();
    let step_col = if from.col < to.col { 1 } else { -1 };
    let step_row = if from.row < to.row { 1 } else { -1 };
    let mut err = d_col - d_row;

    let mut points = Vec::with_capacity((d_col.max(d_row) + 1) as usize);
    let mut cur = from;

    loop {
        points.push(cur);

        if cur == to {
            break;
        }

        let e2 = 2 * err;
        if e2 > -d_row {
            err -= d_row;
            cur.col += step_col;
        }
        if e2 < d_col {
            err += d_col;
            cur.row += step_row;
        }
    }

    points
}

// ═══════════════════════════════════════════════════════════════════════════
// Rectangle Algorithm
// ═══════════════════════════════════════════════════════════════════════════

/// Get cells for a rectangle (outline or filled)
///
/// Works regardless of corner order. Degenerate rectangles (one row or one
/// column) yield each cell once.
pub fn rectangle_points(a: Position, b: Position, filled: bool) -> Vec<Position> {
    let min_row = a.row.min(b.row);
    let max_row = a.row.max(b.row);
    let min_col = a.col.min(b.col);
    let max_col = a.col.max(b.col);

    let mut points = Vec::new();

    if filled {
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                points.push(Position::new(row, col));
            }
        }
        return points;
    }

    for col in min_col..=max_col {
        points.push(Position::new(min_row, col)); // top
        if max_row != min_row {
            points.push(Position::new(max_row, col)); // bottom
        }
    }
    for row in (min_row + 1)..max_row {
        points.push(Position::new(row, min_col)); // left
        if max_col != min_col {
            points.push(Position::new(row, max_col)); // right
        }
    }

    points
}

// ═══════════════════════════════════════════════════════════════════════════
// Circle Approximation
// ═══════════════════════════════════════════════════════════════════════════

/// Get cells for a circle spanning the bounding box between `a` and `b`
///
/// Center is the box center, radius half the box diagonal. A cell belongs to
/// the circle if its distance from the center is within
/// [`CIRCLE_THICKNESS`] of the radius. This is an approximation, not a
/// midpoint circle; the result can extend past the box.
pub fn circle_points(a: Position, b: Position) -> Vec<Position> {
    let center_row = f64::from(a.row + b.row) / 2.0;
    let center_col = f64::from(a.col + b.col) / 2.0;
    let radius = f64::from(b.row - a.row).hypot(f64::from(b.col - a.col)) / 2.0;

    let reach = (radius + CIRCLE_THICKNESS).ceil() as i32;
    let min_row = center_row.floor() as i32 - reach;
    let max_row = center_row.ceil() as i32 + reach;
    let min_col = center_col.floor() as i32 - reach;
    let max_col = center_col.ceil() as i32 + reach;

    let mut points = Vec::new();
    for row in min_row..=max_row {
        for col in min_col..=max_col {
            let dist = (f64::from(row) - center_row).hypot(f64::from(col) - center_col);
            if (dist - radius).abs() <= CIRCLE_THICKNESS {
                points.push(Position::new(row, col));
            }
        }
    }
    points
}
