//! HitboxKit Settings Crate
//!
//! Handles application configuration and its persistence.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{Config, EditorSettings, ExportSettings, UiSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use manager::SettingsManager;
