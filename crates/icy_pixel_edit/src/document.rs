//! Document persistence (JSON)
//!
//! A document stores the grid as `rows`, `cols` and a row-major `cells` list,
//! together with the palette and the canvas layout:
//!
//! ```json
//! {
//!   "version": 1,
//!   "rows": 2, "cols": 2,
//!   "cells": [
//!     { "main_color": 0, "secondary_color": 8, "fill_style": "solid" },
//!     { "main_color": 0, "secondary_color": 8, "fill_style": { "triangle": "top_left" } },
//!     ...
//!   ],
//!   "palette": ["#00008B", ...],
//!   "layout": { "cell_size": 5, "spacing": 1, "background": "#FFFFFF" }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CanvasLayout, Cell, EditError, Grid, Palette, Result};

/// Current document format version
pub const DOCUMENT_VERSION: u32 = 1;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Document {
    #[serde(default = "default_version")]
    pub version: u32,
    pub rows: i32,
    pub cols: i32,
    #[serde(default)]
    pub cells: Vec<Cell>,
    #[serde(default)]
    pub palette: Palette,
    #[serde(default)]
    pub layout: CanvasLayout,
}

fn default_version() -> u32 {
    DOCUMENT_VERSION
}

impl Document {
    pub fn new(grid: &Grid, palette: &Palette, layout: &CanvasLayout) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            rows: grid.rows(),
            cols: grid.cols(),
            cells: grid.cells().copied().collect(),
            palette: palette.clone(),
            layout: *layout,
        }
    }

    /// Rebuild the grid; a wrong cell count is repaired with default cells
    pub fn to_grid(&self) -> Grid {
        Grid::from_cells(self.rows, self.cols, &self.cells)
    }

    pub fn from_json(txt: &str) -> Result<Self> {
        let doc: Document = serde_json::from_str(txt)?;
        if doc.version > DOCUMENT_VERSION {
            return Err(EditError::UnsupportedVersion { version: doc.version });
        }
        if doc.rows <= 0 || doc.cols <= 0 {
            return Err(EditError::InvalidDimensions { rows: doc.rows, cols: doc.cols });
        }
        Ok(doc)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path).map_err(|e| EditError::ReadFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&txt)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let txt = self.to_json()?;
        fs::write(path, txt).map_err(|e| EditError::WriteFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
