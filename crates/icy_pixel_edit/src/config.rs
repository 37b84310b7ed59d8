//! Editor configuration (TOML)
//!
//! Every key is optional; missing keys take the defaults below.
//!
//! ```toml
//! rows = 200
//! cols = 400
//! history_capacity = 50
//! palette = ["#00008B", "#0000CD", "#4169E1", "#6495ED", "#ADD8E6",
//!            "#FFD700", "#EEE8AA", "#FFFFFF", "#E0E0E0"]
//!
//! [layout]
//! cell_size = 5
//! spacing = 1
//! background = "#FFFFFF"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CanvasLayout, EditError, Palette, PaletteIndex, Result, DEFAULT_COLOR};

/// Default undo depth
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub rows: i32,
    pub cols: i32,
    pub palette: Palette,

    /// Index painted by the pencil's toggle-erase mode
    pub erase_color: PaletteIndex,

    /// Initial color of the primary button slot
    pub primary_color: PaletteIndex,
    /// Initial color of the secondary button slot
    pub secondary_color: PaletteIndex,

    /// Maximum number of undo snapshots
    pub history_capacity: usize,

    /// Pencil strokes that start on a cell already holding the stroke color
    /// erase instead of paint
    pub pencil_toggle_erase: bool,

    pub layout: CanvasLayout,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            rows: 200,
            cols: 400,
            palette: Palette::default(),
            erase_color: DEFAULT_COLOR,
            primary_color: 0,
            secondary_color: DEFAULT_COLOR,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            pencil_toggle_erase: false,
            layout: CanvasLayout::default(),
        }
    }
}

impl EditorConfig {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        let config: EditorConfig = toml::from_str(txt)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path).map_err(|e| EditError::ReadFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&txt)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let txt = self.to_toml_string()?;
        fs::write(path, txt).map_err(|e| EditError::WriteFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Reject sizes and color slots the editor cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(EditError::InvalidDimensions { rows: self.rows, cols: self.cols });
        }
        for index in [self.erase_color, self.primary_color, self.secondary_color] {
            self.palette.check_index(index as usize)?;
        }
        Ok(())
    }
}
