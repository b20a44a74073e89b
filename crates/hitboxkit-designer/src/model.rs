//! Value types shared by the transform, store, renderer and serializer.
//!
//! Logical space has its origin at the visual centre of the canvas and +Y
//! pointing up. Pixel space is the canvas' rendered bounding box with (0,0)
//! at the top-left and +Y pointing down.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A polygon vertex in user-defined logical units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LogicalPoint {
    pub x: f64,
    pub y: f64,
}

impl LogicalPoint {
    /// Creates a new logical point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for LogicalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0 prints as "-0" in Rust; exported coordinates never carry the sign.
        let x = if self.x == 0.0 { 0.0 } else { self.x };
        let y = if self.y == 0.0 { 0.0 } else { self.y };
        write!(f, "{{ x: {}, y: {} }}", x, y)
    }
}

/// Logical half-range mapped to the canvas edges.
///
/// The canvas spans `[-half_width, +half_width]` horizontally and
/// `[-half_height, +half_height]` vertically. Values are not checked on
/// construction; the transform rejects non-positive extents when used.
/// Missing fields deserialize to the default 40 x 40.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasExtent {
    pub half_width: f64,
    pub half_height: f64,
}

impl CanvasExtent {
    /// Creates a new extent.
    pub fn new(half_width: f64, half_height: f64) -> Self {
        Self {
            half_width,
            half_height,
        }
    }

    /// Returns true when both half-extents are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.half_width.is_finite()
            && self.half_height.is_finite()
            && self.half_width > 0.0
            && self.half_height > 0.0
    }
}

impl Default for CanvasExtent {
    fn default() -> Self {
        Self::new(40.0, 40.0)
    }
}

impl fmt::Display for CanvasExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "±{} x ±{}", self.half_width, self.half_height)
    }
}

/// Pointer position in pixels, relative to the canvas box's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
}

impl SurfacePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared distance to another surface point.
    pub fn distance_squared(&self, other: &SurfacePoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Rendered size of the canvas' bounding box in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBox {
    pub width: f64,
    pub height: f64,
}

impl CanvasBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns true when the box has a finite, strictly positive area.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Returns the pixel at the centre of the box.
    pub fn center(&self) -> SurfacePoint {
        SurfacePoint::new(self.width / 2.0, self.height / 2.0)
    }

    /// Returns true when `point` lies inside the box, edges included.
    pub fn contains(&self, point: &SurfacePoint) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

/// Position expressed as percentages of the canvas box (0..=100 on each axis
/// for points inside the extent).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentPoint {
    pub x_percent: f64,
    pub y_percent: f64,
}

impl PercentPoint {
    pub fn new(x_percent: f64, y_percent: f64) -> Self {
        Self {
            x_percent,
            y_percent,
        }
    }
}

/// Free-text name used for the export header and the export file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HitboxLabel(String);

impl HitboxLabel {
    /// Label used when none is configured, and as the file name fallback.
    pub const DEFAULT: &'static str = "hitbox";

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds `<label>.<extension>` for the file exporter.
    ///
    /// Blank labels fall back to [`HitboxLabel::DEFAULT`]. Path separators
    /// and NUL are replaced with `_` so the result always names a single file.
    pub fn file_name(&self, extension: &str) -> String {
        let trimmed = self.0.trim();
        let stem: String = if trimmed.is_empty() {
            Self::DEFAULT.to_string()
        } else {
            trimmed
                .chars()
                .map(|c| match c {
                    '/' | '\\' | '\0' => '_',
                    other => other,
                })
                .collect()
        };
        let extension = extension.trim_start_matches('.');
        if extension.is_empty() {
            stem
        } else {
            format!("{}.{}", stem, extension)
        }
    }
}

impl Default for HitboxLabel {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl fmt::Display for HitboxLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HitboxLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for HitboxLabel {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}
