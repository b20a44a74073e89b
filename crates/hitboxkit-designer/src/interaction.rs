//! Pointer interaction state machine.
//!
//! Interprets click / press / move / release against the point store and the
//! coordinate transform. Two states exist: [`DragState::Idle`] and
//! [`DragState::Dragging`]. A click only adds a point while idle, so a single
//! physical gesture can never both move a marker and add a point.

use tracing::debug;

use crate::error::{HitboxError, HitboxResult};
use crate::model::{CanvasBox, CanvasExtent, SurfacePoint};
use crate::point_store::PointStore;
use crate::preview::Marker;
use crate::transform::{percent_to_pixel, CanvasTransform};

/// Default hit radius of a point marker, in pixels.
pub const DEFAULT_MARKER_RADIUS_PX: f64 = 6.0;

/// Drag state owned by the interaction layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Dragging the point at this index.
    Dragging(usize),
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    /// Index being dragged, if any.
    pub fn dragged_index(&self) -> Option<usize> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(index) => Some(*index),
        }
    }

    /// Ends the drag if it references an index that no longer exists.
    pub fn clamp_to(self, len: usize) -> DragState {
        match self {
            DragState::Dragging(index) if index >= len => DragState::Idle,
            other => other,
        }
    }
}

/// Pointer input already classified for the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Click on empty canvas at `pos` within a canvas box of `canvas`.
    Click { pos: SurfacePoint, canvas: CanvasBox },
    /// Pointer went down on the marker for point `index`.
    PressOnMarker { index: usize },
    /// Pointer moved to `pos`.
    Move { pos: SurfacePoint, canvas: CanvasBox },
    /// Pointer released anywhere on the surface.
    Release,
}

/// What a pointer event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    Appended(usize),
    DragStarted(usize),
    Moved(usize),
    DragEnded(usize),
    /// The event is not meaningful in the current state.
    Ignored,
}

impl PointerOutcome {
    /// True when the event changed points or drag state.
    pub fn is_change(&self) -> bool {
        !matches!(self, PointerOutcome::Ignored)
    }
}

/// Applies one pointer event.
///
/// On error nothing has been mutated yet: every fallible step runs before the
/// first write.
pub fn apply_pointer(
    points: &mut PointStore,
    drag: &mut DragState,
    extent: &CanvasExtent,
    event: &PointerEvent,
) -> HitboxResult<PointerOutcome> {
    match (*drag, event) {
        (DragState::Idle, PointerEvent::Click { pos, canvas }) => {
            let point = CanvasTransform::new(*extent, *canvas)?.pixel_to_logical(pos);
            points.append(point);
            debug!("Added point {} at {}", points.len() - 1, point);
            Ok(PointerOutcome::Appended(points.len() - 1))
        }
        (DragState::Dragging(index), PointerEvent::Click { .. }) => {
            debug!("Click suppressed while dragging point {}", index);
            Ok(PointerOutcome::Ignored)
        }
        (DragState::Idle, PointerEvent::PressOnMarker { index }) => {
            if *index >= points.len() {
                return Err(HitboxError::IndexOutOfRange {
                    index: *index,
                    len: points.len(),
                });
            }
            *drag = DragState::Dragging(*index);
            debug!("Drag started on point {}", index);
            Ok(PointerOutcome::DragStarted(*index))
        }
        (DragState::Dragging(current), PointerEvent::PressOnMarker { .. }) => {
            debug!("Press ignored, point {} is already being dragged", current);
            Ok(PointerOutcome::Ignored)
        }
        (DragState::Dragging(index), PointerEvent::Move { pos, canvas }) => {
            let point = CanvasTransform::new(*extent, *canvas)?.pixel_to_logical(pos);
            points.replace_at(index, point)?;
            Ok(PointerOutcome::Moved(index))
        }
        (DragState::Idle, PointerEvent::Move { .. }) => Ok(PointerOutcome::Ignored),
        (DragState::Dragging(index), PointerEvent::Release) => {
            *drag = DragState::Idle;
            debug!("Drag ended on point {}", index);
            Ok(PointerOutcome::DragEnded(index))
        }
        (DragState::Idle, PointerEvent::Release) => Ok(PointerOutcome::Ignored),
    }
}

/// Finds the marker under `pos`, preferring the topmost (highest index).
pub fn hit_test_marker(
    markers: &[Marker],
    pos: &SurfacePoint,
    canvas: &CanvasBox,
    radius_px: f64,
) -> Option<usize> {
    if !canvas.is_valid() || radius_px <= 0.0 {
        return None;
    }
    let radius_sq = radius_px * radius_px;
    markers
        .iter()
        .rev()
        .find(|m| percent_to_pixel(&m.position, canvas).distance_squared(pos) <= radius_sq)
        .map(Marker::point_index)
}
