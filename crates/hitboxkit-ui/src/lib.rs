//! # HitboxKit UI
//!
//! GTK-based user interface for HitboxKit. Owns no editing state: every
//! widget dispatches into the shared [`HitboxSession`] and redraws when the
//! session reports a change.

pub mod gtk_app;
pub mod helpers;
pub mod ui;

use std::cell::RefCell;
use std::rc::Rc;

use hitboxkit_designer::{DecodedImage, HitboxSession};

// Re-export settings for convenience
pub use hitboxkit_settings::{Config, SettingsManager};

/// The session as shared between widgets on the GTK main thread.
pub type SharedSession = Rc<RefCell<HitboxSession<DecodedImage>>>;
