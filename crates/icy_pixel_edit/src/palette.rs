//! Palette handling
//!
//! Cells only store indices. The palette travels alongside the grid as
//! configuration so that it can be saved, snapshotted and restored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{EditError, PaletteIndex, Result, DEFAULT_COLOR};

/// 8-bit RGB color, serialized as `#RRGGBB`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.trim().strip_prefix('#').ok_or_else(|| EditError::InvalidColor(s.to_string()))?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(EditError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| EditError::InvalidColor(s.to_string()));
        Ok(Color::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Ordered list of display colors
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Color>,
}

/// Blues, golds, white and the pale gray used as background
const MOSAIC_PALETTE: [Color; 9] = [
    Color::new(0x00, 0x00, 0x8B),
    Color::new(0x00, 0x00, 0xCD),
    Color::new(0x41, 0x69, 0xE1),
    Color::new(0x64, 0x95, 0xED),
    Color::new(0xAD, 0xD8, 0xE6),
    Color::new(0xFF, 0xD7, 0x00),
    Color::new(0xEE, 0xE8, 0xAA),
    Color::new(0xFF, 0xFF, 0xFF),
    Color::new(0xE0, 0xE0, 0xE0),
];

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: MOSAIC_PALETTE.to_vec(),
        }
    }
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn get(&self, index: PaletteIndex) -> Option<Color> {
        self.colors.get(index as usize).copied()
    }

    /// Display color for an index; unknown indices fall back to the default
    /// cell color, then to white, so rendering never fails on bad data.
    pub fn display_color(&self, index: PaletteIndex) -> Color {
        self.get(index).or_else(|| self.get(DEFAULT_COLOR)).unwrap_or(Color::WHITE)
    }

    pub fn check_index(&self, index: usize) -> Result<PaletteIndex> {
        if index >= self.colors.len() || index > PaletteIndex::MAX as usize {
            return Err(EditError::InvalidPaletteIndex { index, len: self.colors.len() });
        }
        Ok(index as PaletteIndex)
    }
}
