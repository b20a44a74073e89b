//! Error types for the hitbox designer crate.
//!
//! This module provides structured error types for coordinate transforms,
//! point store mutations, and the two external collaborators (image loading
//! and text export).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while editing a hitbox.
#[derive(Error, Debug)]
pub enum HitboxError {
    /// The configured half-extents cannot define a logical coordinate space.
    #[error("Invalid canvas extent: half-width {half_width}, half-height {half_height} (both must be > 0)")]
    InvalidExtent { half_width: f64, half_height: f64 },

    /// The rendered canvas box has no usable area.
    #[error("Degenerate canvas box: {width}x{height} pixels")]
    DegenerateCanvas { width: f64, height: f64 },

    /// A point index does not exist in the current sequence.
    #[error("Point index out of range: {index} (len: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The image provider could not produce a backdrop.
    #[error("Image load failed: {0}")]
    ImageLoad(#[from] ImageLoadError),

    /// The file exporter could not write the export.
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

/// Errors reported by an image provider.
#[derive(Error, Debug)]
pub enum ImageLoadError {
    /// The image file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but is not a decodable image.
    #[error("Failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
}

/// Errors reported by a file exporter.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The export could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The requested file name cannot be used.
    #[error("Invalid export file name: {0:?}")]
    InvalidFileName(String),
}

/// Result type alias for hitbox operations.
pub type HitboxResult<T> = Result<T, HitboxError>;
