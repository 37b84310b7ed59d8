//! Selection and clipboard tests

use icy_pixel_edit::{Cell, Position, SelectionRegion, Tool, UndoState};

use crate::helpers::{click, create_session, drag, main_colors};

#[test]
fn test_copy_requires_selection() {
    let mut session = create_session(2, 2);
    assert!(!session.copy());
    assert!(session.clipboard().is_none());
    assert!(session.clipboard_bytes().unwrap().is_none());
    assert!(!session.paste_at(Position::new(0, 0)));
}

#[test]
fn test_copy_paste() {
    let mut session = create_session(3, 3);
    click(&mut session, Tool::Pencil, 0, 0);
    assert!(session.set_selection(Position::new(0, 0), Position::new(0, 1)));
    assert!(session.copy());

    let undo_before = session.undo_stack_len();
    assert!(session.paste_at(Position::new(2, 1)));
    assert_eq!(main_colors(session.grid()), vec![vec![0, 8, 8], vec![8, 8, 8], vec![8, 0, 8]]);
    assert_eq!(session.selection(), Some(SelectionRegion::new(Position::new(2, 1), Position::new(2, 2))));
    assert_eq!(session.undo_stack_len(), undo_before + 1);

    // clipboard survives the paste
    assert!(session.clipboard().is_some());
    assert!(!session.paste_at(Position::new(2, 1)));
    assert_eq!(session.undo_stack_len(), undo_before + 1);
}

#[test]
fn test_cut_erases_and_copies() {
    let mut session = create_session(2, 2);
    drag(&mut session, Tool::RectangleFilled, &[(0, 0), (1, 1)]);
    session.select_all();

    assert!(session.cut());
    assert_eq!(main_colors(session.grid()), vec![vec![8, 8], vec![8, 8]]);
    let clipboard = session.clipboard().unwrap();
    assert_eq!(clipboard.get(1, 1), Some(Cell::solid(0)));

    assert!(session.undo());
    assert_eq!(main_colors(session.grid()), vec![vec![0, 0], vec![0, 0]]);
}

#[test]
fn test_delete_selection() {
    let mut session = create_session(2, 3);
    drag(&mut session, Tool::Pencil, &[(0, 0), (0, 2)]);
    session.set_selection(Position::new(0, 1), Position::new(1, 2));
    let undo_before = session.undo_stack_len();

    assert!(session.delete_selection());
    assert_eq!(main_colors(session.grid())[0], vec![0, 8, 8]);
    assert!(!session.delete_selection());
    assert_eq!(session.undo_stack_len(), undo_before + 1);
}

#[test]
fn test_select_all_and_clear() {
    let mut session = create_session(3, 4);
    assert!(session.select_all());
    assert_eq!(session.selection(), Some(SelectionRegion::new(Position::new(0, 0), Position::new(2, 3))));
    session.clear_selection();
    assert_eq!(session.selection(), None);
    assert!(!session.set_selection(Position::new(5, 5), Position::new(6, 6)));
}

#[test]
fn test_clipboard_bytes_between_sessions() {
    let mut source = create_session(2, 2);
    click(&mut source, Tool::Pencil, 1, 1);
    source.select_all();
    source.copy();
    let bytes = source.clipboard_bytes().unwrap().unwrap();

    let mut target = create_session(2, 2);
    target.set_clipboard_bytes(&bytes).unwrap();
    assert!(target.paste_at(Position::new(0, 0)));
    assert_eq!(target.grid(), source.grid());

    assert!(target.set_clipboard_bytes(&[0xFF]).is_err());
}

#[test]
fn test_clipboard_operations_rejected_during_gesture() {
    let mut session = create_session(2, 2);
    session.select_all();
    session.copy();
    session.on_gesture_start(Tool::Pencil, crate::helpers::at(0, 0));
    assert!(!session.paste_at(Position::new(0, 0)));
    assert!(!session.delete_selection());
    session.on_gesture_cancel();
}
