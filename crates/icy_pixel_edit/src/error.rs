//! Unified error types for icy_pixel_edit

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for icy_pixel_edit operations
///
/// Painting, filling and history operations never fail (out of range
/// coordinates are ignored); only configuration, persistence and clipboard
/// decoding report errors.
#[derive(Debug, Error)]
pub enum EditError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file '{path}': {message}")]
    ReadFile { path: PathBuf, message: String },

    #[error("Failed to write file '{path}': {message}")]
    WriteFile { path: PathBuf, message: String },

    // === Configuration Errors ===
    #[error("Invalid configuration: {0}")]
    ParseConfig(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    SerializeConfig(#[from] toml::ser::Error),

    // === Document Errors ===
    #[error("Invalid document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("Unsupported document version: {version}")]
    UnsupportedVersion { version: u32 },

    // === Model Errors ===
    #[error("Invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: i32, cols: i32 },

    #[error("Palette index {index} out of range (palette has {len} colors)")]
    InvalidPaletteIndex { index: usize, len: usize },

    #[error("Invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),

    #[error("Invalid clipboard data format")]
    InvalidClipboardData,

    #[error("Selection of {width}x{height} cells is too large for the clipboard format")]
    ClipboardTooLarge { width: i32, height: i32 },
}

pub type Result<T> = std::result::Result<T, EditError>;
