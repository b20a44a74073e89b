//! Coordinate transformation between the canvas box and logical space.
//!
//! Handles conversion between pixel coordinates (screen space) and logical
//! coordinates (hitbox space). Logical space is centred on the canvas and
//! spans the configured half-extents on each axis.

use std::fmt;

use crate::error::{HitboxError, HitboxResult};
use crate::model::{CanvasBox, CanvasExtent, LogicalPoint, PercentPoint, SurfacePoint};

/// Number of decimal digits kept on every point derived from a pixel.
pub const DECIMAL_PLACES: i32 = 2;

/// Rounds a coordinate to [`DECIMAL_PLACES`] digits, half away from zero.
///
/// The stored point carries the rounded value; this is not display rounding.
pub fn quantize(value: f64) -> f64 {
    let scale = 10f64.powi(DECIMAL_PLACES);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Checks an extent before it is used to divide.
pub fn validate_extent(extent: &CanvasExtent) -> HitboxResult<()> {
    if extent.is_valid() {
        Ok(())
    } else {
        Err(HitboxError::InvalidExtent {
            half_width: extent.half_width,
            half_height: extent.half_height,
        })
    }
}

/// Checks a canvas box before it is used to divide.
pub fn validate_canvas(canvas: &CanvasBox) -> HitboxResult<()> {
    if canvas.is_valid() {
        Ok(())
    } else {
        Err(HitboxError::DegenerateCanvas {
            width: canvas.width,
            height: canvas.height,
        })
    }
}

/// Converts a pixel position inside a `box_width` x `box_height` canvas into a
/// quantized logical point.
///
/// Formula:
/// ```text
/// x = (px / box_width) * 2 * half_width - half_width
/// y = -((py / box_height) * 2 * half_height - half_height)   // flip Y-axis
/// ```
pub fn pixel_to_logical(
    px: f64,
    py: f64,
    box_width: f64,
    box_height: f64,
    extent: &CanvasExtent,
) -> HitboxResult<LogicalPoint> {
    let transform = CanvasTransform::new(*extent, CanvasBox::new(box_width, box_height))?;
    Ok(transform.pixel_to_logical(&SurfacePoint::new(px, py)))
}

/// Converts a logical point into percentages of the canvas box.
///
/// Formula:
/// ```text
/// x_percent = (x + half_width) / (2 * half_width) * 100
/// y_percent = (-y + half_height) / (2 * half_height) * 100
/// ```
pub fn logical_to_percent(point: &LogicalPoint, extent: &CanvasExtent) -> HitboxResult<PercentPoint> {
    validate_extent(extent)?;
    Ok(percent_unchecked(point, extent))
}

fn percent_unchecked(point: &LogicalPoint, extent: &CanvasExtent) -> PercentPoint {
    let x_percent = (point.x + extent.half_width) / (extent.half_width * 2.0) * 100.0;
    let y_percent = (-point.y + extent.half_height) / (extent.half_height * 2.0) * 100.0;
    PercentPoint::new(x_percent, y_percent)
}

/// Converts a percentage position back to pixels for a given canvas box.
pub fn percent_to_pixel(percent: &PercentPoint, canvas: &CanvasBox) -> SurfacePoint {
    SurfacePoint::new(
        percent.x_percent / 100.0 * canvas.width,
        percent.y_percent / 100.0 * canvas.height,
    )
}

/// A validated pairing of extent and canvas box.
///
/// Construction fails for degenerate inputs, so every method is total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    extent: CanvasExtent,
    canvas: CanvasBox,
}

impl CanvasTransform {
    /// Creates a transform, rejecting non-positive extents or canvas sizes.
    pub fn new(extent: CanvasExtent, canvas: CanvasBox) -> HitboxResult<Self> {
        validate_extent(&extent)?;
        validate_canvas(&canvas)?;
        Ok(Self { extent, canvas })
    }

    /// Gets the logical extent.
    pub fn extent(&self) -> CanvasExtent {
        self.extent
    }

    /// Gets the canvas box.
    pub fn canvas(&self) -> CanvasBox {
        self.canvas
    }

    /// Converts pixel coordinates to a quantized logical point.
    ///
    /// Pixel coordinates are in screen space (0,0 at top-left).
    /// Logical coordinates are centred (0,0 in the middle, +Y up).
    pub fn pixel_to_logical(&self, pixel: &SurfacePoint) -> LogicalPoint {
        let x = (pixel.x / self.canvas.width) * self.extent.half_width * 2.0
            - self.extent.half_width;
        // Flip Y-axis: lower pixel Y (top of screen) maps to higher logical Y
        let y = (pixel.y / self.canvas.height) * self.extent.half_height * 2.0
            - self.extent.half_height;
        LogicalPoint::new(quantize(x), quantize(-y))
    }

    /// Converts a logical point to percentages of the canvas box.
    pub fn logical_to_percent(&self, point: &LogicalPoint) -> PercentPoint {
        percent_unchecked(point, &self.extent)
    }

    /// Converts a logical point to pixel coordinates.
    pub fn logical_to_pixel(&self, point: &LogicalPoint) -> SurfacePoint {
        percent_to_pixel(&self.logical_to_percent(point), &self.canvas)
    }
}

impl fmt::Display for CanvasTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Extent: {} | Canvas: {:.0}x{:.0}px",
            self.extent, self.canvas.width, self.canvas.height
        )
    }
}
