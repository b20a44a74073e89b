//! Path and marker projection of the point sequence.
//!
//! Everything here is expressed in percentages of the canvas box so a
//! renderer can draw at any size without re-running the transform.

use std::fmt::Write as _;

use crate::error::HitboxResult;
use crate::model::{CanvasBox, CanvasExtent, LogicalPoint, PercentPoint, SurfacePoint};
use crate::transform::{percent_to_pixel, CanvasTransform};

/// Closed polygon outline in percentage space.
///
/// The closing edge from the last vertex back to the first is implicit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewPath {
    vertices: Vec<PercentPoint>,
}

impl PreviewPath {
    /// Vertices in drawing order.
    pub fn vertices(&self) -> &[PercentPoint] {
        &self.vertices
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices scaled into pixel positions for a concrete canvas box.
    pub fn to_pixels(&self, canvas: &CanvasBox) -> Vec<SurfacePoint> {
        self.vertices
            .iter()
            .map(|v| percent_to_pixel(v, canvas))
            .collect()
    }

    /// SVG path data, e.g. `M 50% 50% L 75% 25% Z`.
    ///
    /// Empty string when the path is empty.
    pub fn to_svg_path_data(&self) -> String {
        let mut data = String::new();
        for (i, v) in self.vertices.iter().enumerate() {
            let cmd = if i == 0 { "M" } else { " L" };
            let _ = write!(data, "{} {}% {}%", cmd, v.x_percent, v.y_percent);
        }
        if !data.is_empty() {
            data.push_str(" Z");
        }
        data
    }
}

/// A point marker with its 1-based display index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub position: PercentPoint,
    pub display_index: usize,
}

impl Marker {
    /// Zero-based index into the point sequence.
    pub fn point_index(&self) -> usize {
        self.display_index.saturating_sub(1)
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preview {
    pub path: PreviewPath,
    pub markers: Vec<Marker>,
}

/// Projects points into a closed path and a marker list.
///
/// The path is empty for fewer than 2 points; markers are produced for every
/// point. Fails only when the extent cannot define a coordinate space.
pub fn render_preview(points: &[LogicalPoint], extent: &CanvasExtent) -> HitboxResult<Preview> {
    // Canvas size is irrelevant to percentages; a unit box satisfies validation.
    let transform = CanvasTransform::new(*extent, CanvasBox::new(1.0, 1.0))?;

    let markers: Vec<Marker> = points
        .iter()
        .enumerate()
        .map(|(i, p)| Marker {
            position: transform.logical_to_percent(p),
            display_index: i + 1,
        })
        .collect();

    let path = if markers.len() < 2 {
        PreviewPath::default()
    } else {
        PreviewPath {
            vertices: markers.iter().map(|m| m.position).collect(),
        }
    };

    Ok(Preview { path, markers })
}
