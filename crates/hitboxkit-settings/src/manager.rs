//! Settings manager: locates, loads and saves the config file.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};

const APP_DIR: &str = "hitboxkit";
const CONFIG_FILE: &str = "config.json";

/// Owns the loaded [`Config`] and the file it came from.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    config: Config,
    path: PathBuf,
}

impl SettingsManager {
    /// Platform config directory for HitboxKit.
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    /// Full path of the default config file.
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Defaults bound to `path`, without reading it.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config: Config::default(),
            path: path.into(),
        }
    }

    /// Loads the default config file, falling back to defaults.
    pub fn load_or_default() -> Self {
        match Self::config_file_path() {
            Ok(path) => Self::load_from(path),
            Err(e) => {
                warn!("{}; using default settings", e);
                Self::with_path(CONFIG_FILE)
            }
        }
    }

    /// Loads `path`. A missing file gives defaults; an unreadable or invalid
    /// one is logged and also gives defaults.
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if !path.exists() {
            debug!("No settings at {}, using defaults", path.display());
            return Self::with_path(path);
        }
        match Config::load_from_file(&path) {
            Ok(config) => {
                info!("Loaded settings from {}", path.display());
                Self { config, path }
            }
            Err(e) => {
                warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::with_path(path)
            }
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the config, creating its directory if needed.
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::SaveError(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }
        self.config.save_to_file(&self.path)?;
        info!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
