//! Shared test helpers for editor session tests

#![allow(dead_code)]

use icy_pixel_edit::{Corner, EditorConfig, EditorSession, GestureEvent, Grid, PaletteIndex, Position, RenderSink, Tool};

/// Session with a small default-filled grid
pub fn create_session(rows: i32, cols: i32) -> EditorSession {
    EditorSession::new(rows, cols)
}

pub fn create_session_with_history(rows: i32, cols: i32, history_capacity: usize) -> EditorSession {
    EditorSession::from_config(&EditorConfig {
        rows,
        cols,
        history_capacity,
        ..Default::default()
    })
}

pub fn at(row: i32, col: i32) -> GestureEvent {
    GestureEvent::primary(Position::new(row, col))
}

pub fn at_quadrant(row: i32, col: i32, quadrant: Corner) -> GestureEvent {
    at(row, col).with_quadrant(Some(quadrant))
}

/// Press, move through `path`, release at the last point
pub fn drag(session: &mut EditorSession, tool: Tool, path: &[(i32, i32)]) -> bool {
    let Some(&(row, col)) = path.first() else {
        return false;
    };
    let mut changed = session.on_gesture_start(tool, at(row, col));
    for &(row, col) in &path[1..] {
        changed |= session.on_gesture_move(at(row, col));
    }
    let &(row, col) = path.last().unwrap();
    changed | session.on_gesture_end(at(row, col))
}

/// Primary click with a tool
pub fn click(session: &mut EditorSession, tool: Tool, row: i32, col: i32) -> bool {
    drag(session, tool, &[(row, col)])
}

/// Main colors of all cells, row by row
pub fn main_colors(grid: &Grid) -> Vec<Vec<PaletteIndex>> {
    (0..grid.rows())
        .map(|row| (0..grid.cols()).map(|col| grid.get(Position::new(row, col)).main_color()).collect())
        .collect()
}

/// Render sink recording what it was told
#[derive(Default)]
pub struct RecordingSink {
    pub changed: Vec<Position>,
    pub redraws: usize,
}

impl RenderSink for RecordingSink {
    fn cells_changed(&mut self, _grid: &Grid, positions: &[Position]) {
        self.changed.extend_from_slice(positions);
    }

    fn redraw(&mut self, _grid: &Grid) {
        self.redraws += 1;
    }
}
