//! Editing session: versioned state, pure reducer and change subscription.
//!
//! [`reduce`] is the only place state transitions happen. [`HitboxSession`]
//! holds the current [`SessionState`], runs events through the reducer and
//! notifies subscribers when the version moves. A presentation layer owns no
//! editing state of its own; it dispatches and redraws.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::collaborators::{FileExporter, ImageProvider};
use crate::error::HitboxResult;
use crate::export::serialize_hitbox;
use crate::interaction::{
    apply_pointer, hit_test_marker, DragState, PointerEvent, DEFAULT_MARKER_RADIUS_PX,
};
use crate::model::{CanvasBox, CanvasExtent, HitboxLabel, SurfacePoint};
use crate::point_store::PointStore;
use crate::preview::{render_preview, Preview};

/// Snapshot of everything the editor knows.
///
/// `I` is the image provider's displayable handle.
#[derive(Clone)]
pub struct SessionState<I> {
    extent: CanvasExtent,
    points: PointStore,
    drag: DragState,
    label: HitboxLabel,
    image: Option<I>,
    version: u64,
}

impl<I> SessionState<I> {
    /// Creates an empty state with the given label and extent.
    pub fn new(label: HitboxLabel, extent: CanvasExtent) -> Self {
        Self {
            extent,
            points: PointStore::new(),
            drag: DragState::Idle,
            label,
            image: None,
            version: 0,
        }
    }

    pub fn extent(&self) -> CanvasExtent {
        self.extent
    }

    pub fn points(&self) -> &PointStore {
        &self.points
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn label(&self) -> &HitboxLabel {
        &self.label
    }

    pub fn image(&self) -> Option<&I> {
        self.image.as_ref()
    }

    /// Incremented by every event that changed something.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Path and markers for the current points.
    pub fn preview(&self) -> HitboxResult<Preview> {
        render_preview(self.points.as_slice(), &self.extent)
    }

    /// Export text for the current points and label.
    pub fn export_text(&self) -> String {
        serialize_hitbox(self.points.as_slice(), &self.label)
    }
}

impl<I> Default for SessionState<I> {
    fn default() -> Self {
        Self::new(HitboxLabel::default(), CanvasExtent::default())
    }
}

impl<I> fmt::Debug for SessionState<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionState")
            .field("extent", &self.extent)
            .field("points", &self.points.len())
            .field("drag", &self.drag)
            .field("label", &self.label)
            .field("has_image", &self.image.is_some())
            .field("version", &self.version)
            .finish()
    }
}

/// Every input the editor accepts.
#[derive(Clone)]
pub enum EditorEvent<I> {
    Pointer(PointerEvent),
    /// Remove the last point.
    Undo,
    /// Remove every point.
    Clear,
    SetLabel(String),
    SetExtent(CanvasExtent),
    /// Replace or drop the backdrop image.
    SetImage(Option<I>),
}

impl<I> EditorEvent<I> {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            EditorEvent::Pointer(PointerEvent::Click { .. }) => "click",
            EditorEvent::Pointer(PointerEvent::PressOnMarker { .. }) => "press",
            EditorEvent::Pointer(PointerEvent::Move { .. }) => "move",
            EditorEvent::Pointer(PointerEvent::Release) => "release",
            EditorEvent::Undo => "undo",
            EditorEvent::Clear => "clear",
            EditorEvent::SetLabel(_) => "set-label",
            EditorEvent::SetExtent(_) => "set-extent",
            EditorEvent::SetImage(_) => "set-image",
        }
    }
}

/// Computes the state that follows `state` after `event`.
///
/// Pure: `state` is never modified. On error the caller keeps `state`.
pub fn reduce<I: Clone>(
    state: &SessionState<I>,
    event: EditorEvent<I>,
) -> HitboxResult<SessionState<I>> {
    let mut next = state.clone();

    let changed = match event {
        EditorEvent::Pointer(pointer) => {
            apply_pointer(&mut next.points, &mut next.drag, &next.extent, &pointer)?.is_change()
        }
        EditorEvent::Undo => {
            let removed = next.points.truncate_last().is_some();
            next.drag = next.drag.clamp_to(next.points.len());
            removed
        }
        EditorEvent::Clear => {
            let changed = !next.points.is_empty() || !next.drag.is_idle();
            next.points.clear();
            next.drag = DragState::Idle;
            changed
        }
        EditorEvent::SetLabel(label) => {
            let label = HitboxLabel::new(label);
            let changed = label != next.label;
            next.label = label;
            changed
        }
        EditorEvent::SetExtent(extent) => {
            // Not validated here: a bad extent is reported when the transform uses it.
            let changed = extent != next.extent;
            next.extent = extent;
            changed
        }
        EditorEvent::SetImage(image) => {
            next.image = image;
            true
        }
    };

    if changed {
        next.version += 1;
    }
    Ok(next)
}

/// Handle returned by [`HitboxSession::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<I> = Box<dyn Fn(&SessionState<I>)>;

/// Owner of the editing state.
pub struct HitboxSession<I> {
    state: SessionState<I>,
    listeners: Vec<(SubscriptionId, Listener<I>)>,
    next_subscription: u64,
    marker_radius_px: f64,
}

impl<I: Clone> HitboxSession<I> {
    pub fn new(state: SessionState<I>) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_subscription: 0,
            marker_radius_px: DEFAULT_MARKER_RADIUS_PX,
        }
    }

    /// Sets the pointer hit radius used by [`HitboxSession::pointer_down`].
    pub fn with_marker_radius(mut self, radius_px: f64) -> Self {
        self.marker_radius_px = radius_px;
        self
    }

    pub fn marker_radius(&self) -> f64 {
        self.marker_radius_px
    }

    pub fn state(&self) -> &SessionState<I> {
        &self.state
    }

    /// Registers a listener called after every change.
    ///
    /// Listeners run synchronously inside `dispatch` and must not call back
    /// into the session.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&SessionState<I>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Runs `event` through the reducer.
    ///
    /// Returns whether the state changed. On error the state is untouched.
    pub fn dispatch(&mut self, event: EditorEvent<I>) -> HitboxResult<bool> {
        let name = event.name();
        let next = match reduce(&self.state, event) {
            Ok(next) => next,
            Err(e) => {
                warn!("Rejected {} event: {}", name, e);
                return Err(e);
            }
        };

        let changed = next.version != self.state.version;
        self.state = next;
        if changed {
            debug!("{} -> version {}", name, self.state.version);
            for (_, listener) in &self.listeners {
                listener(&self.state);
            }
        }
        Ok(changed)
    }

    /// Pointer pressed at `pos`. Starts a drag when it lands on a marker.
    pub fn pointer_down(&mut self, pos: SurfacePoint, canvas: CanvasBox) -> HitboxResult<bool> {
        if !self.state.drag.is_idle() {
            return Ok(false);
        }
        let preview = self.state.preview()?;
        match hit_test_marker(&preview.markers, &pos, &canvas, self.marker_radius_px) {
            Some(index) => self.dispatch(EditorEvent::Pointer(PointerEvent::PressOnMarker { index })),
            None => Ok(false),
        }
    }

    /// Pointer moved to `pos`. Only meaningful during a drag.
    pub fn pointer_move(&mut self, pos: SurfacePoint, canvas: CanvasBox) -> HitboxResult<bool> {
        if self.state.drag.is_idle() {
            return Ok(false);
        }
        self.dispatch(EditorEvent::Pointer(PointerEvent::Move { pos, canvas }))
    }

    /// Pointer released at `pos`. Ends a drag, otherwise counts as a click.
    ///
    /// A release outside the canvas box only ends a drag; it never adds a point.
    pub fn pointer_up(&mut self, pos: SurfacePoint, canvas: CanvasBox) -> HitboxResult<bool> {
        let event = if !self.state.drag.is_idle() {
            PointerEvent::Release
        } else if canvas.contains(&pos) {
            PointerEvent::Click { pos, canvas }
        } else {
            debug!("Release outside canvas at ({}, {}) ignored", pos.x, pos.y);
            return Ok(false);
        };
        self.dispatch(EditorEvent::Pointer(event))
    }

    pub fn undo(&mut self) -> HitboxResult<bool> {
        self.dispatch(EditorEvent::Undo)
    }

    pub fn clear(&mut self) -> HitboxResult<bool> {
        let changed = self.dispatch(EditorEvent::Clear)?;
        if changed {
            info!("Cleared hitbox '{}'", self.state.label);
        }
        Ok(changed)
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> HitboxResult<bool> {
        self.dispatch(EditorEvent::SetLabel(label.into()))
    }

    pub fn set_extent(&mut self, extent: CanvasExtent) -> HitboxResult<bool> {
        self.dispatch(EditorEvent::SetExtent(extent))
    }

    /// File name and text for the current hitbox.
    pub fn export(&self, extension: &str) -> (String, String) {
        (
            self.state.label.file_name(extension),
            self.state.export_text(),
        )
    }

    /// Writes the export text as `file_name` through `exporter` and returns
    /// where it went. [`HitboxSession::export`] gives the suggested name.
    pub fn export_with<E: FileExporter>(
        &self,
        exporter: &E,
        file_name: &str,
    ) -> HitboxResult<PathBuf> {
        let text = self.state.export_text();
        let path = exporter.export_text(file_name, &text)?;
        info!(
            "Exported {} points as '{}'",
            self.state.points.len(),
            self.state.label
        );
        Ok(path)
    }

    /// Loads a backdrop through `provider` and installs it.
    ///
    /// A failed load leaves the state, including any previous image, intact.
    pub fn load_image_with<P>(&mut self, provider: &P, path: &Path) -> HitboxResult<bool>
    where
        P: ImageProvider<Image = I>,
    {
        let image = match provider.load_image(path) {
            Ok(image) => image,
            Err(e) => {
                warn!("Backdrop not loaded: {}", e);
                return Err(e.into());
            }
        };
        info!("Loaded backdrop {}", path.display());
        self.dispatch(EditorEvent::SetImage(Some(image)))
    }
}

impl<I: Clone> Default for HitboxSession<I> {
    fn default() -> Self {
        Self::new(SessionState::default())
    }
}
