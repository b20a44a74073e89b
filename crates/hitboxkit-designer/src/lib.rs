//! # HitboxKit Designer
//!
//! Editing core for polygon hitboxes: click points onto a canvas, drag them
//! around, and export the result as a coordinate list.
//!
//! ## Core Components
//!
//! - **Transform**: pixel space ↔ centred logical space, quantized to 2 decimals
//! - **Point Store**: ordered vertices with copy-on-write snapshots
//! - **Interaction**: idle / dragging state machine over pointer events
//! - **Preview**: closed path and numbered markers in percentage space
//! - **Export**: the `// <label> shape` text block
//! - **Session**: pure reducer, versioned state and change subscription
//!
//! ## Architecture
//!
//! ```text
//! pointer events ──► Interaction ──► Point Store ──► Preview ──► renderer
//!                        │                 │
//!                    Transform          Export ──► FileExporter
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use hitboxkit_designer::{CanvasBox, HitboxSession, SurfacePoint};
//!
//! let mut session: HitboxSession<()> = HitboxSession::default();
//! let canvas = CanvasBox::new(600.0, 600.0);
//!
//! // Press and release on empty canvas adds a point.
//! session.pointer_down(SurfacePoint::new(300.0, 300.0), canvas)?;
//! session.pointer_up(SurfacePoint::new(300.0, 300.0), canvas)?;
//!
//! let (file_name, text) = session.export("js");
//! assert_eq!(file_name, "hitbox.js");
//! assert!(text.contains("{ x: 0, y: 0 }"));
//! # Ok::<(), hitboxkit_designer::HitboxError>(())
//! ```

pub mod collaborators;
pub mod error;
pub mod export;
pub mod interaction;
pub mod model;
pub mod point_store;
pub mod preview;
pub mod session;
pub mod transform;

pub use collaborators::{
    DecodedImage, DecodedImageProvider, DirectoryExporter, FileExporter, ImageProvider,
};
pub use error::{ExportError, HitboxError, HitboxResult, ImageLoadError};
pub use export::serialize_hitbox;
pub use interaction::{
    apply_pointer, hit_test_marker, DragState, PointerEvent, PointerOutcome,
    DEFAULT_MARKER_RADIUS_PX,
};
pub use model::{CanvasBox, CanvasExtent, HitboxLabel, LogicalPoint, PercentPoint, SurfacePoint};
pub use point_store::PointStore;
pub use preview::{render_preview, Marker, Preview, PreviewPath};
pub use session::{reduce, EditorEvent, HitboxSession, SessionState, SubscriptionId};
pub use transform::{
    logical_to_percent, percent_to_pixel, pixel_to_logical, quantize, CanvasTransform,
    DECIMAL_PLACES,
};
