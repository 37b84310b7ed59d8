//! Gesture scripts
//!
//! A script is a TOML list of steps replayed against an [`EditorSession`]:
//!
//! ```toml
//! [[step]]
//! action = "press"
//! tool = "pencil"
//! row = 1
//! col = 2
//!
//! [[step]]
//! action = "move"
//! x = 40.5          # canvas pixels, mapped through the document layout
//! y = 12.0
//!
//! [[step]]
//! action = "release"
//! row = 3
//! col = 2
//!
//! [[step]]
//! action = "undo"
//! ```
//!
//! Pointer steps take either `row`/`col` (with an optional `quadrant`) or
//! canvas `x`/`y`.

use std::path::Path;

use anyhow::{bail, Context};
use icy_pixel_edit::{Corner, EditorSession, GestureEvent, Grid, PointerButton, Position, RenderSink, Tool, UndoState};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Script {
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Press(PointerStep),
    Move(PointerStep),
    Release(PointerStep),
    /// Pointer left the canvas
    Leave,
    Undo,
    Redo,
    Color {
        #[serde(default)]
        button: PointerButton,
        index: usize,
    },
    Resize {
        rows: i32,
        cols: i32,
    },
    SelectAll,
    Copy,
    Cut,
    Paste {
        row: i32,
        col: i32,
    },
    Delete,
}

#[derive(Debug, Default, Deserialize)]
pub struct PointerStep {
    pub tool: Option<Tool>,
    pub row: Option<i32>,
    pub col: Option<i32>,
    pub quadrant: Option<Corner>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    #[serde(default)]
    pub button: PointerButton,
    #[serde(default)]
    pub shift: bool,
}

impl PointerStep {
    /// Grid event for this step; `None` if the canvas point misses the grid
    fn event(&self, session: &EditorSession) -> anyhow::Result<Option<GestureEvent>> {
        let (position, quadrant) = match (self.row, self.col, self.x, self.y) {
            (Some(row), Some(col), _, _) => (Position::new(row, col), self.quadrant),
            (_, _, Some(x), Some(y)) => {
                let grid = session.grid();
                let Some(hit) = session.layout().map_pointer(x, y, grid.rows(), grid.cols()) else {
                    return Ok(None);
                };
                (hit.position, hit.quadrant)
            }
            _ => bail!("pointer step needs row/col or x/y"),
        };
        Ok(Some(
            GestureEvent::new(position, self.button).with_quadrant(quadrant).with_shift(self.shift),
        ))
    }
}

/// Outcome of a replay
#[derive(Debug, Default)]
pub struct Report {
    pub steps: usize,
    pub changed: usize,
    pub cells_reported: usize,
    pub redraws: usize,
}

impl RenderSink for Report {
    fn cells_changed(&mut self, _grid: &Grid, positions: &[Position]) {
        self.cells_reported += positions.len();
    }

    fn redraw(&mut self, _grid: &Grid) {
        self.redraws += 1;
    }
}

impl Script {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let txt = std::fs::read_to_string(path).with_context(|| format!("reading script {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("parsing script {}", path.display()))
    }

    pub fn from_toml_str(txt: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    pub fn run(&self, session: &mut EditorSession) -> anyhow::Result<Report> {
        let mut report = Report::default();
        for (i, step) in self.steps.iter().enumerate() {
            let changed = run_step(session, step).with_context(|| format!("step {}", i + 1))?;
            log::debug!("step {}: {:?} -> {}", i + 1, step, changed);
            report.steps += 1;
            if changed {
                report.changed += 1;
            }
            session.flush_dirty(&mut report);
        }
        Ok(report)
    }
}

fn run_step(session: &mut EditorSession, step: &Step) -> anyhow::Result<bool> {
    let changed = match step {
        Step::Press(pointer) => {
            let Some(tool) = pointer.tool else {
                bail!("press needs a tool");
            };
            match pointer.event(session)? {
                Some(event) => session.on_gesture_start(tool, event),
                None => {
                    log::warn!("press outside the grid ignored");
                    false
                }
            }
        }
        Step::Move(pointer) => match pointer.event(session)? {
            Some(event) => session.on_gesture_move(event),
            None => false,
        },
        Step::Release(pointer) => match pointer.event(session)? {
            Some(event) => session.on_gesture_end(event),
            None => {
                session.on_gesture_cancel();
                false
            }
        },
        Step::Leave => {
            session.on_gesture_cancel();
            false
        }
        Step::Undo => session.undo(),
        Step::Redo => session.redo(),
        Step::Color { button, index } => {
            session.set_color(*button, *index)?;
            false
        }
        Step::Resize { rows, cols } => session.resize_grid(*rows, *cols)?,
        Step::SelectAll => {
            session.select_all();
            false
        }
        Step::Copy => {
            session.copy();
            false
        }
        Step::Cut => session.cut(),
        Step::Paste { row, col } => session.paste_at(Position::new(*row, *col)),
        Step::Delete => session.delete_selection(),
    };
    Ok(changed)
}
