//! Render notification tests

use icy_pixel_edit::{Position, Tool, UndoState};

use crate::helpers::{click, create_session, drag, RecordingSink};

#[test]
fn test_pencil_stroke_reports_cells() {
    let mut session = create_session(2, 4);
    drag(&mut session, Tool::Pencil, &[(0, 0), (0, 3)]);
    assert!(!session.needs_full_redraw());

    let mut sink = RecordingSink::default();
    session.flush_dirty(&mut sink);
    assert_eq!(sink.redraws, 0);
    assert_eq!(
        sink.changed,
        vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2), Position::new(0, 3)]
    );
    assert!(session.dirty_cells().is_empty());
}

#[test]
fn test_unchanged_click_reports_nothing() {
    let mut session = create_session(2, 2);
    click(&mut session, Tool::Pencil, 0, 0);
    session.flush_dirty(&mut RecordingSink::default());

    assert!(!click(&mut session, Tool::Pencil, 0, 0));
    let mut sink = RecordingSink::default();
    session.flush_dirty(&mut sink);
    assert!(sink.changed.is_empty());
    assert_eq!(sink.redraws, 0);
}

#[test]
fn test_shape_preview_marks_old_and_new_outline() {
    let mut session = create_session(3, 3);
    session.on_gesture_start(Tool::Line, crate::helpers::at(0, 0));
    session.on_gesture_move(crate::helpers::at(0, 2));
    session.flush_dirty(&mut RecordingSink::default());

    session.on_gesture_move(crate::helpers::at(2, 0));
    let mut sink = RecordingSink::default();
    session.flush_dirty(&mut sink);
    for pos in [(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)] {
        assert!(sink.changed.contains(&Position::from(pos)), "{:?} not reported", pos);
    }
    // the preview never touched the grid
    assert_eq!(session.cell((0, 2)), icy_pixel_edit::Cell::default());
    session.on_gesture_cancel();
}

#[test]
fn test_fill_undo_and_resize_request_redraw() {
    let mut session = create_session(3, 3);

    click(&mut session, Tool::Bucket, 1, 1);
    assert!(session.needs_full_redraw());
    let mut sink = RecordingSink::default();
    session.flush_dirty(&mut sink);
    assert_eq!(sink.redraws, 1);
    assert!(sink.changed.is_empty());

    session.undo();
    session.flush_dirty(&mut sink);
    assert_eq!(sink.redraws, 2);

    session.resize_grid(2, 2).unwrap();
    session.flush_dirty(&mut sink);
    assert_eq!(sink.redraws, 3);

    // nothing pending after a flush
    session.flush_dirty(&mut sink);
    assert_eq!(sink.redraws, 3);
}

#[test]
fn test_request_redraw() {
    let mut session = create_session(1, 1);
    session.request_redraw();
    let mut sink = RecordingSink::default();
    session.flush_dirty(&mut sink);
    assert_eq!(sink.redraws, 1);
}
