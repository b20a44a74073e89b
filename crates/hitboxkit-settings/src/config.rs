//! Configuration for HitboxKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Editor defaults (label, logical extents, marker size)
//! - UI preferences (window and canvas size, backdrop opacity)
//! - Export defaults (target directory, file extension)
//!
//! Configuration only seeds a new editing session. Points are never stored.

use hitboxkit_designer::{CanvasExtent, HitboxLabel};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsResult};

/// Defaults for a new editing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Label used for the header and the export file name
    pub default_label: String,
    /// Logical half-extents mapped to the canvas edges, stored as
    /// `half_width` / `half_height` keys
    #[serde(flatten)]
    pub extent: CanvasExtent,
    /// Marker radius in pixels, also the drag hit radius
    pub marker_radius_px: f64,
}

impl EditorSettings {
    pub fn label(&self) -> HitboxLabel {
        HitboxLabel::new(self.default_label.clone())
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            default_label: HitboxLabel::DEFAULT.to_string(),
            extent: CanvasExtent::default(),
            marker_radius_px: 6.0,
        }
    }
}

/// UI preference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Window width
    pub window_width: u32,
    /// Window height
    pub window_height: u32,
    /// Edge length of the square drawing surface in pixels
    pub canvas_size_px: u32,
    /// Opacity of the reference image, 0.0 to 1.0
    pub backdrop_opacity: f64,
    /// Draw the centre cross-hair and origin caption
    pub show_axes: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            window_width: 900,
            window_height: 900,
            canvas_size_px: 600,
            backdrop_opacity: 0.7,
            show_axes: true,
        }
    }
}

/// Export defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Folder the save dialog opens in
    pub directory: PathBuf,
    /// File extension without the dot
    pub extension: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
            extension: "js".to_string(),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Editor defaults
    pub editor: EditorSettings,
    /// UI preferences
    pub ui: UiSettings,
    /// Export defaults
    pub export: ExportSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    ///
    /// Extents are not checked here; the editor reports a bad extent when it
    /// first transforms a point.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.editor.marker_radius_px.is_finite() && self.editor.marker_radius_px > 0.0) {
            return Err(ConfigError::out_of_range(
                "editor.marker_radius_px",
                self.editor.marker_radius_px,
            ));
        }

        if self.ui.window_width == 0 || self.ui.window_height == 0 {
            return Err(ConfigError::out_of_range(
                "ui.window",
                format!("{}x{}", self.ui.window_width, self.ui.window_height),
            ));
        }

        if self.ui.canvas_size_px == 0 {
            return Err(ConfigError::out_of_range("ui.canvas_size_px", 0));
        }

        if !(0.0..=1.0).contains(&self.ui.backdrop_opacity) {
            return Err(ConfigError::out_of_range(
                "ui.backdrop_opacity",
                self.ui.backdrop_opacity,
            ));
        }

        let ext = self.export.extension.trim_start_matches('.');
        if ext.is_empty() || ext.contains(['/', '\\', '\0']) {
            return Err(ConfigError::InvalidValue {
                key: "export.extension".to_string(),
                reason: format!("{:?} is not a file extension", self.export.extension),
            });
        }

        Ok(())
    }
}
