//! Tool dispatcher
//!
//! `Idle → GestureActive(tool) → Idle`. A gesture starts on pointer press,
//! receives moves, and ends on release or is cancelled when the pointer
//! leaves the canvas. The tool is fixed when the gesture starts.
//!
//! | Tool       | start                          | move                       | end / cancel                          |
//! |------------|--------------------------------|----------------------------|---------------------------------------|
//! | Pencil     | paint cell (shift: line)       | line from last position    | commit / commit                       |
//! | Half pixel | dab quadrant                   | dab on cell/quadrant change| commit / commit                       |
//! | Shapes     | record start                   | update preview             | apply shape / drop preview            |
//! | Bucket     | flood fill (one shot)          | -                          | -                                     |
//! | Select     | define or move (inside sel.)   | grow / move provisionally  | commit / restore                      |
//! | Pipette    | pick color into slot           | -                          | -                                     |
//!
//! Every dispatcher call returns whether the grid changed.

use crate::{brushes, flood_fill_cells, paint, Cell, Corner, GestureEvent, PaletteIndex, PointerButton, Position, SelectionRegion, ShapeKind, Tool};

use super::gesture::Gesture;
use super::EditorSession;

impl EditorSession {
    // ═══════════════════════════════════════════════════════════════════════
    // Gesture Start
    // ═══════════════════════════════════════════════════════════════════════

    pub fn on_gesture_start(&mut self, tool: Tool, event: GestureEvent) -> bool {
        if self.gesture.is_some() {
            log::warn!("gesture started while another one is active, cancelling the old one");
            self.on_gesture_cancel();
        }
        if !self.grid.is_inside(event.position) {
            return false;
        }

        let color = self.color_for(event.button);
        match tool {
            Tool::Pencil => self.start_pencil(event, color),
            Tool::HalfPixel => self.start_half_pixel(event, color),
            Tool::Line => self.start_shape(ShapeKind::Line, event.position, color),
            Tool::RectangleOutline => self.start_shape(ShapeKind::RectangleOutline, event.position, color),
            Tool::RectangleFilled => self.start_shape(ShapeKind::RectangleFilled, event.position, color),
            Tool::Circle => self.start_shape(ShapeKind::Circle, event.position, color),
            Tool::Bucket => self.fill(event.position, color),
            Tool::Select => self.start_select(event.position),
            Tool::Pipette => {
                self.pick_color(event);
                false
            }
        }
    }

    fn start_pencil(&mut self, event: GestureEvent, color: PaletteIndex) -> bool {
        let pos = event.position;
        if event.shift {
            if let Some(from) = self.last_click {
                let token = self.history.begin_gesture(&self.grid, "Pencil line");
                let changed = self.paint_solid(&brushes::line_points(from, pos), color);
                self.finish_gesture(token, changed, "pencil line");
                self.last_click = Some(pos);
                return changed;
            }
        }

        let color = if self.pencil_toggle_erase && self.grid.get(pos) == Cell::solid(color) {
            self.erase_color
        } else {
            color
        };
        let token = self.history.begin_gesture(&self.grid, "Pencil");
        let changed = self.paint_solid(&[pos], color);
        self.last_click = Some(pos);
        self.gesture = Some(Gesture::Pencil {
            token,
            color,
            last: pos,
            changed,
        });
        changed
    }

    fn start_half_pixel(&mut self, event: GestureEvent, color: PaletteIndex) -> bool {
        let token = self.history.begin_gesture(&self.grid, "Half pixel");
        let changed = self.dab(event.position, event.quadrant, color);
        self.gesture = Some(Gesture::HalfPixel {
            token,
            color,
            last: (event.position, event.quadrant),
            changed,
        });
        changed
    }

    fn start_shape(&mut self, kind: ShapeKind, start: Position, color: PaletteIndex) -> bool {
        let description = match kind {
            ShapeKind::Line => "Line",
            ShapeKind::RectangleOutline => "Rectangle",
            ShapeKind::RectangleFilled => "Filled rectangle",
            ShapeKind::Circle => "Circle",
        };
        let token = self.history.begin_gesture(&self.grid, description);
        self.gesture = Some(Gesture::Shape {
            token,
            kind,
            color,
            start,
            current: start,
        });
        self.mark_shape_preview();
        false
    }

    /// Bucket: single-shot flood fill
    fn fill(&mut self, start: Position, color: PaletteIndex) -> bool {
        let token = self.history.begin_gesture(&self.grid, "Fill");
        let filled = flood_fill_cells(&mut self.grid, start, color);
        let changed = !filled.is_empty();
        if changed {
            self.dirty.mark_full();
        }
        self.finish_gesture(token, changed, "fill");
        changed
    }

    fn start_select(&mut self, pos: Position) -> bool {
        match self.selection {
            Some(region) if region.contains(pos) => {
                let token = self.history.begin_selection_gesture(&self.grid, self.selection, "Move selection");
                self.gesture = Some(Gesture::SelectMove {
                    token,
                    base: self.grid.clone(),
                    region,
                    buffer: paint::copy_to_buffer(&self.grid, &region),
                    grab: pos,
                    offset: (0, 0),
                });
            }
            _ => {
                self.gesture = Some(Gesture::SelectDefine { anchor: pos, lead: pos });
            }
        }
        false
    }

    /// Pipette: the pressed cell's color (or the color of the pressed half)
    /// goes into the slot of the button
    fn pick_color(&mut self, event: GestureEvent) {
        let cell = self.grid.get(event.position);
        let color = match event.quadrant {
            Some(quadrant) => cell.color_at(quadrant),
            None => cell.main_color(),
        };
        if let Err(err) = self.set_color(event.button, color as usize) {
            log::warn!("pipette picked an unusable color: {}", err);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Gesture Move
    // ═══════════════════════════════════════════════════════════════════════

    pub fn on_gesture_move(&mut self, event: GestureEvent) -> bool {
        let Some(mut gesture) = self.gesture.take() else {
            return false;
        };
        let pos = event.position;
        let inside = self.grid.is_inside(pos);

        let changed = match &mut gesture {
            Gesture::Pencil { color, last, changed, .. } => {
                let mut painted = false;
                if inside && pos != *last {
                    painted = self.paint_solid(&brushes::line_points(*last, pos), *color);
                    *last = pos;
                    *changed |= painted;
                }
                painted
            }
            Gesture::HalfPixel { color, last, changed, .. } => {
                let mut painted = false;
                if inside && (pos, event.quadrant) != *last {
                    painted = self.dab(pos, event.quadrant, *color);
                    *last = (pos, event.quadrant);
                    *changed |= painted;
                }
                painted
            }
            Gesture::Shape { kind, start, current, .. } => {
                if pos != *current {
                    self.dirty.mark_all(kind.points(*start, *current));
                    *current = pos;
                    self.dirty.mark_all(kind.points(*start, *current));
                }
                false
            }
            Gesture::SelectDefine { lead, .. } => {
                *lead = self.clamp_to_grid(pos);
                false
            }
            Gesture::SelectMove {
                base,
                region,
                buffer,
                grab,
                offset,
                ..
            } => {
                let new_offset = (pos.row - grab.row, pos.col - grab.col);
                if new_offset != *offset {
                    *offset = new_offset;
                    let mut grid = base.clone();
                    paint::erase_region(&mut grid, region);
                    paint::paste_buffer(&mut grid, buffer, region.top_left().offset(new_offset.0, new_offset.1));
                    self.grid = grid;
                    self.dirty.mark_full();
                    true
                } else {
                    false
                }
            }
        };

        self.gesture = Some(gesture);
        changed
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Gesture End
    // ═══════════════════════════════════════════════════════════════════════

    /// Release: the final position counts as a last move, then the gesture commits
    pub fn on_gesture_end(&mut self, event: GestureEvent) -> bool {
        if self.gesture.is_none() {
            return false;
        }
        self.on_gesture_move(event);
        let Some(gesture) = self.gesture.take() else {
            return false;
        };

        match gesture {
            Gesture::Pencil { token, last, changed, .. } => {
                self.last_click = Some(last);
                self.finish_gesture(token, changed, "pencil stroke");
                changed
            }
            Gesture::HalfPixel { token, changed, .. } => {
                self.finish_gesture(token, changed, "half pixel stroke");
                changed
            }
            Gesture::Shape {
                token,
                kind,
                color,
                start,
                current,
            } => {
                let points = kind.points(start, current);
                let changed = self.paint_solid(&points, color);
                self.finish_gesture(token, changed, "shape");
                changed
            }
            Gesture::SelectDefine { anchor, lead } => {
                if anchor == lead {
                    log::debug!("empty selection, selection cancelled");
                    self.selection = None;
                } else {
                    self.selection = SelectionRegion::new(anchor, lead).clip(&self.grid);
                }
                false
            }
            Gesture::SelectMove {
                token, base, region, offset, ..
            } => {
                let changed = offset != (0, 0) && self.grid != base;
                if offset == (0, 0) {
                    self.grid = base;
                }
                self.selection = region.translate(offset.0, offset.1).clip(&self.grid);
                self.finish_gesture(token, changed, "selection move");
                changed
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Gesture Cancel
    // ═══════════════════════════════════════════════════════════════════════

    /// Pointer left the canvas. Strokes keep what they painted; previews are
    /// dropped and a provisional selection move is rolled back.
    pub fn on_gesture_cancel(&mut self) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };

        match gesture {
            Gesture::Pencil { token, last, changed, .. } => {
                self.last_click = Some(last);
                self.finish_gesture(token, changed, "pencil stroke");
            }
            Gesture::HalfPixel { token, changed, .. } => {
                self.finish_gesture(token, changed, "half pixel stroke");
            }
            Gesture::Shape {
                token, kind, start, current, ..
            } => {
                self.history.discard_gesture(token);
                self.dirty.mark_all(kind.points(start, current));
                log::debug!("shape preview discarded");
            }
            Gesture::SelectDefine { .. } => {
                log::debug!("selection rectangle discarded");
            }
            Gesture::SelectMove { token, base, .. } => {
                self.grid = match self.history.cancel_gesture(token) {
                    Some(snapshot) => snapshot.grid,
                    None => base,
                };
                self.dirty.mark_full();
                log::debug!("selection move rolled back");
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Helpers
    // ═══════════════════════════════════════════════════════════════════════

    fn paint_solid(&mut self, points: &[Position], color: PaletteIndex) -> bool {
        let changed = paint::apply_shape_pixels(&mut self.grid, points, color);
        if changed {
            self.dirty.mark_all(points.iter().copied());
        }
        changed
    }

    fn dab(&mut self, pos: Position, quadrant: Option<Corner>, color: PaletteIndex) -> bool {
        let changed = paint::paint_cell(&mut self.grid, pos, color, quadrant);
        if changed {
            self.dirty.mark(pos);
        }
        changed
    }

    fn mark_shape_preview(&mut self) {
        if let Some((points, _)) = self.shape_preview() {
            self.dirty.mark_all(points);
        }
    }

    fn clamp_to_grid(&self, pos: Position) -> Position {
        Position::new(pos.row.clamp(0, (self.grid.rows() - 1).max(0)), pos.col.clamp(0, (self.grid.cols() - 1).max(0)))
    }

    /// Convenience for embedding layers that track the button separately
    pub fn on_click(&mut self, tool: Tool, pos: Position, button: PointerButton) -> bool {
        let event = GestureEvent::new(pos, button);
        let changed = self.on_gesture_start(tool, event);
        changed | self.on_gesture_end(event)
    }
}
