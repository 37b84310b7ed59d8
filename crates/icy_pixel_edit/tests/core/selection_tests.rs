//! Selection region, selection buffer and clipboard format tests

use icy_pixel_edit::{copy_to_buffer, erase_region, paste_buffer, Cell, Corner, EditError, Grid, Position, SelectionBuffer, SelectionRegion};

use crate::helpers::{assert_all_solid, main_colors, solid_grid};

#[test]
fn test_region_normalizes_corners() {
    let region = SelectionRegion::new(Position::new(3, 4), Position::new(1, 0));
    assert_eq!(region.top_left(), Position::new(1, 0));
    assert_eq!(region.width(), 5);
    assert_eq!(region.height(), 3);
    assert!(region.contains(Position::new(2, 2)));
    assert!(!region.contains(Position::new(0, 2)));
}

#[test]
fn test_region_clip() {
    let grid = Grid::new(3, 3);
    let region = SelectionRegion::new(Position::new(-2, 1), Position::new(1, 7));
    assert_eq!(region.clip(&grid), Some(SelectionRegion::new(Position::new(0, 1), Position::new(1, 2))));

    let outside = SelectionRegion::new(Position::new(5, 5), Position::new(6, 6));
    assert_eq!(outside.clip(&grid), None);
    assert_eq!(SelectionRegion::full(&Grid::new(0, 0)), None);
}

#[test]
fn test_copy_out_of_grid_is_default() {
    let grid = solid_grid(&[&[1, 2], &[3, 4]]);
    let buffer = copy_to_buffer(&grid, &SelectionRegion::new(Position::new(1, 1), Position::new(2, 2)));
    assert_eq!(buffer.width(), 2);
    assert_eq!(buffer.height(), 2);
    assert_eq!(buffer.get(0, 0), Some(Cell::solid(4)));
    assert_eq!(buffer.get(0, 1), Some(Cell::default()));
    assert_eq!(buffer.get(1, 1), Some(Cell::default()));
    assert_eq!(buffer.get(2, 0), None);
}

#[test]
fn test_erase_region() {
    let mut grid = solid_grid(&[&[1, 2], &[3, 4]]);
    let region = SelectionRegion::new(Position::new(0, 0), Position::new(0, 1));
    assert!(erase_region(&mut grid, &region));
    assert_eq!(main_colors(&grid), vec![vec![8, 8], vec![3, 4]]);
    assert!(!erase_region(&mut grid, &region));
}

#[test]
fn test_paste_clips_and_reports_change() {
    let source = solid_grid(&[&[1, 2], &[3, 4]]);
    let buffer = copy_to_buffer(&source, &SelectionRegion::full(&source).unwrap());

    let mut grid = Grid::new(3, 3);
    assert!(paste_buffer(&mut grid, &buffer, Position::new(2, 2)));
    assert_eq!(main_colors(&grid), vec![vec![8, 8, 8], vec![8, 8, 8], vec![8, 8, 1]]);

    assert!(!paste_buffer(&mut grid, &buffer, Position::new(2, 2)));
    assert!(!paste_buffer(&mut grid, &buffer, Position::new(-5, -5)));
}

#[test]
fn test_paste_leaves_equal_cells_alone() {
    let mut grid = Grid::new(1, 2);
    let buffer = copy_to_buffer(&Grid::new(1, 2), &SelectionRegion::new(Position::new(0, 0), Position::new(0, 1)));
    assert!(!paste_buffer(&mut grid, &buffer, Position::new(0, 0)));
    assert_all_solid(&grid, 8, "equal paste");
}

#[test]
fn test_paste_overwrites_flipped_split_cell() {
    let mut source = Grid::new(1, 1);
    source.set((0, 0), Cell::triangle(Corner::BottomRight, 2, 1));
    let buffer = copy_to_buffer(&source, &SelectionRegion::new(Position::new(0, 0), Position::new(0, 0)));

    let mut grid = Grid::new(1, 1);
    grid.set((0, 0), Cell::triangle(Corner::TopLeft, 1, 2));
    assert!(paste_buffer(&mut grid, &buffer, Position::new(0, 0)));
    assert_eq!(grid.get((0, 0)), Cell::triangle(Corner::BottomRight, 2, 1));

    // the stored orientation decides later dabs on a cut corner
    let dabbed = grid.get((0, 0)).merge_dab(Corner::TopRight, 3);
    assert_eq!(dabbed, Cell::triangle(Corner::TopRight, 3, 2));
}

#[test]
fn test_clipboard_bytes_layout() {
    let mut grid = solid_grid(&[&[3, 8]]);
    grid.set((0, 1), Cell::triangle(Corner::TopRight, 1, 2));
    let buffer = SelectionBuffer::copy_from(&grid, &SelectionRegion::full(&grid).unwrap());

    let bytes = buffer.to_bytes().unwrap();
    assert_eq!(bytes, vec![2, 0, 1, 0, 3, 8, 0, 1, 2, 2]);

    let decoded = SelectionBuffer::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, buffer);
}

#[test]
fn test_clipboard_bytes_reject_oversized_buffer() {
    let grid = Grid::new(1, 1);
    let wide = SelectionBuffer::copy_from(&grid, &SelectionRegion::new(Position::new(0, 0), Position::new(0, 65535)));
    assert_eq!(wide.width(), 65536);
    assert!(matches!(wide.to_bytes(), Err(EditError::ClipboardTooLarge { width: 65536, height: 1 })));

    let widest = SelectionBuffer::copy_from(&grid, &SelectionRegion::new(Position::new(0, 0), Position::new(0, 65534)));
    let decoded = SelectionBuffer::from_bytes(&widest.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded.width(), 65535);
}

#[test]
fn test_clipboard_bytes_rejects_garbage() {
    assert!(matches!(SelectionBuffer::from_bytes(&[1, 0]), Err(EditError::InvalidClipboardData)));
    assert!(matches!(SelectionBuffer::from_bytes(&[0, 0, 1, 0]), Err(EditError::InvalidClipboardData)));
    assert!(matches!(SelectionBuffer::from_bytes(&[2, 0, 1, 0, 1, 1, 0]), Err(EditError::InvalidClipboardData)));
}

#[test]
fn test_clipboard_unknown_style_decodes_default() {
    let decoded = SelectionBuffer::from_bytes(&[1, 0, 1, 0, 4, 5, 99]).unwrap();
    assert_eq!(decoded.get(0, 0), Some(Cell::default()));
}
