//! Tests for quadrant detection and shape rasterization

use std::collections::HashSet;

use icy_pixel_edit::brushes::{circle_points, line_points, quadrant_at, rectangle_points, CIRCLE_THICKNESS};
use icy_pixel_edit::{Corner, Position};

fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

// ═══════════════════════════════════════════════════════════════════════════
// Quadrants
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_quadrant_tiny_cells_have_none() {
    assert_eq!(quadrant_at(0.0, 0.0, 1), None);
    assert_eq!(quadrant_at(0.5, 0.5, 0), None);
}

#[test]
fn test_quadrant_even_size() {
    assert_eq!(quadrant_at(0.0, 0.0, 4), Some(Corner::TopLeft));
    assert_eq!(quadrant_at(3.0, 0.0, 4), Some(Corner::TopRight));
    assert_eq!(quadrant_at(0.0, 3.0, 4), Some(Corner::BottomLeft));
    assert_eq!(quadrant_at(3.9, 3.9, 4), Some(Corner::BottomRight));
    assert_eq!(quadrant_at(1.99, 2.0, 4), Some(Corner::BottomLeft));
}

#[test]
fn test_quadrant_odd_size_ties() {
    // exact center
    assert_eq!(quadrant_at(2.0, 2.0, 5), Some(Corner::TopLeft));
    assert_eq!(quadrant_at(2.7, 2.3, 5), Some(Corner::TopLeft));
    // vertical center line: left side, split by y
    assert_eq!(quadrant_at(2.0, 0.0, 5), Some(Corner::TopLeft));
    assert_eq!(quadrant_at(2.0, 4.0, 5), Some(Corner::BottomLeft));
    // horizontal center line: top side, split by x
    assert_eq!(quadrant_at(0.0, 2.0, 5), Some(Corner::TopLeft));
    assert_eq!(quadrant_at(4.0, 2.0, 5), Some(Corner::TopRight));
    // off the center cross
    assert_eq!(quadrant_at(4.0, 4.0, 5), Some(Corner::BottomRight));
    assert_eq!(quadrant_at(3.0, 1.0, 5), Some(Corner::TopRight));
}

#[test]
fn test_quadrant_offsets_outside_cell_are_clamped() {
    assert_eq!(quadrant_at(-3.0, -3.0, 4), Some(Corner::TopLeft));
    assert_eq!(quadrant_at(10.0, 10.0, 4), Some(Corner::BottomRight));
}

// ═══════════════════════════════════════════════════════════════════════════
// Lines
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_horizontal_line() {
    let points = line_points(p(0, 0), p(0, 5));
    assert_eq!(points.len(), 6);
    for pt in &points {
        assert_eq!(pt.row, 0);
    }
}

#[test]
fn test_single_point_line() {
    assert_eq!(line_points(p(3, 3), p(3, 3)), vec![p(3, 3)]);
}

#[test]
fn test_line_endpoints_included() {
    let cases = [
        (p(0, 0), p(5, 5)),
        (p(5, 5), p(0, 0)),
        (p(0, 0), p(2, 9)),
        (p(7, 1), p(-3, 4)),
        (p(-2, -2), p(-9, 3)),
        (p(4, 0), p(0, 1)),
    ];
    for (from, to) in cases {
        let points = line_points(from, to);
        assert_eq!(points.first(), Some(&from), "{:?} -> {:?}", from, to);
        assert_eq!(points.last(), Some(&to), "{:?} -> {:?}", from, to);
    }
}

#[test]
fn test_line_is_connected_and_unique() {
    let points = line_points(p(1, 2), p(8, -5));
    let unique: HashSet<Position> = points.iter().copied().collect();
    assert_eq!(unique.len(), points.len());
    for pair in points.windows(2) {
        let d_row = (pair[1].row - pair[0].row).abs();
        let d_col = (pair[1].col - pair[0].col).abs();
        assert!(d_row <= 1 && d_col <= 1, "gap between {:?} and {:?}", pair[0], pair[1]);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Rectangles
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_rectangle_outline() {
    let points = rectangle_points(p(2, 2), p(0, 0), false);
    let set: HashSet<Position> = points.iter().copied().collect();
    assert_eq!(points.len(), 8);
    assert_eq!(set.len(), 8);
    assert!(!set.contains(&p(1, 1)));
}

#[test]
fn test_rectangle_degenerate() {
    assert_eq!(rectangle_points(p(0, 0), p(0, 3), false).len(), 4);
    assert_eq!(rectangle_points(p(0, 1), p(4, 1), false).len(), 5);
    assert_eq!(rectangle_points(p(1, 1), p(1, 1), false), vec![p(1, 1)]);
}

#[test]
fn test_rectangle_filled() {
    let points = rectangle_points(p(0, 0), p(2, 3), true);
    assert_eq!(points.len(), 12);
    assert!(points.contains(&p(1, 1)));
}

// ═══════════════════════════════════════════════════════════════════════════
// Circles
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_circle_band() {
    let points = circle_points(p(0, 0), p(4, 4));
    let radius = 32f64.sqrt() / 2.0;
    for pt in &points {
        let dist = (f64::from(pt.row) - 2.0).hypot(f64::from(pt.col) - 2.0);
        assert!((dist - radius).abs() <= CIRCLE_THICKNESS);
    }
    assert!(points.contains(&p(0, 0)));
    assert!(points.contains(&p(4, 4)));
    assert!(points.contains(&p(0, 1)));
    assert!(!points.contains(&p(2, 2)));
}

#[test]
fn test_circle_is_symmetric() {
    let points: HashSet<Position> = circle_points(p(0, 0), p(6, 6)).into_iter().collect();
    for pt in &points {
        assert!(points.contains(&p(6 - pt.row, pt.col)));
        assert!(points.contains(&p(pt.row, 6 - pt.col)));
    }
}
