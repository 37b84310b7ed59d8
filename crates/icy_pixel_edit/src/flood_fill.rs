//! Triangle-aware flood fill
//!
//! A region is a set of half-cells that are color-contiguous across shared
//! edges. A split cell shows a different color on each of its edges, so the
//! fill decides per edge which half of a neighbor is touched:
//!
//! 1. The seed decides the replaced color: a solid seed replaces its color,
//!    a split seed replaces its main half unless that already has the fill
//!    color, in which case the secondary half is replaced.
//! 2. The fill crosses from a cell into a neighbor only if the edge it leaves
//!    through shows either the fill color or the replaced color.
//! 3. The neighbor is recolored (only the half facing back) if that half shows
//!    the replaced color.
//!
//! Recoloring always normalizes, so a split cell whose remaining half already
//! has the fill color becomes solid.

use std::collections::{HashSet, VecDeque};

use crate::{Direction, FillStyle, Grid, Half, PaletteIndex, Position};

/// Queue pops allowed per grid cell before the fill gives up
const ITERATION_FACTOR: usize = 10;

/// Flood fill from `start`; returns whether anything changed
pub fn flood_fill(grid: &mut Grid, start: Position, fill_color: PaletteIndex) -> bool {
    !flood_fill_cells(grid, start, fill_color).is_empty()
}

/// Flood fill from `start`; returns every recolored position in fill order
///
/// Filling with the color the seed already shows (on both halves for split
/// cells) is a no-op and returns an empty list.
pub fn flood_fill_cells(grid: &mut Grid, start: Position, fill_color: PaletteIndex) -> Vec<Position> {
    let mut filled = Vec::new();
    let Some(seed) = grid.try_get(start) else {
        return filled;
    };

    let (replaced_color, seed_half) = match seed.fill_style() {
        FillStyle::Solid => {
            if seed.main_color() == fill_color {
                return filled;
            }
            (seed.main_color(), Half::Main)
        }
        FillStyle::Triangle(_) => {
            if seed.main_color() != fill_color {
                (seed.main_color(), Half::Main)
            } else if seed.secondary_color() != fill_color {
                (seed.secondary_color(), Half::Secondary)
            } else {
                return filled;
            }
        }
    };

    grid.set(start, seed.with_half(seed_half, fill_color));
    filled.push(start);

    let mut visited = HashSet::new();
    visited.insert(start);
    let mut queue = VecDeque::new();
    queue.push_back(start);

    let max_iterations = (grid.rows() as usize * grid.cols() as usize).saturating_mul(ITERATION_FACTOR);
    let mut iterations = 0usize;

    while let Some(pos) = queue.pop_front() {
        iterations += 1;
        if iterations > max_iterations {
            log::warn!(
                "flood fill from ({}, {}) hit the iteration cap of {}; keeping partial result of {} cells",
                start.row,
                start.col,
                max_iterations,
                filled.len()
            );
            break;
        }

        let current = grid.get(pos);
        for dir in Direction::ALL {
            let next = pos.step(dir);
            if visited.contains(&next) {
                continue;
            }
            let Some(neighbor) = grid.try_get(next) else {
                continue;
            };

            let (source_color, _) = current.facing(dir);
            if source_color != fill_color && source_color != replaced_color {
                continue;
            }

            let (target_color, target_half) = neighbor.facing(dir.opposite());
            if target_color != replaced_color {
                continue;
            }

            grid.set(next, neighbor.with_half(target_half, fill_color));
            visited.insert(next);
            filled.push(next);
            queue.push_back(next);
        }
    }

    log::debug!("flood fill from ({}, {}) recolored {} cells", start.row, start.col, filled.len());
    filled
}
