//! Image loading and text export services used by the session.
//!
//! The session only talks to the [`ImageProvider`] and [`FileExporter`]
//! traits. The implementations here decode images with the `image` crate and
//! write exports into a directory on disk.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{ExportError, ImageLoadError};

/// Loads a user-selected file into a displayable image handle.
///
/// The handle is opaque to the editor; it is only stored and handed back to
/// the presentation layer.
pub trait ImageProvider {
    type Image: Clone;

    fn load_image(&self, path: &Path) -> Result<Self::Image, ImageLoadError>;
}

/// Persists an exported text blob under a file name.
pub trait FileExporter {
    /// Writes `content` and returns where it went.
    fn export_text(&self, file_name: &str, content: &str) -> Result<PathBuf, ExportError>;
}

/// An image decoded to tightly packed 8-bit RGBA.
#[derive(Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    rgba: Arc<[u8]>,
}

impl DecodedImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel data, row-major, 4 bytes per pixel.
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }
}

impl fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

/// Decodes PNG, JPEG, GIF, BMP and WebP files from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodedImageProvider;

impl DecodedImageProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ImageProvider for DecodedImageProvider {
    type Image = DecodedImage;

    fn load_image(&self, path: &Path) -> Result<DecodedImage, ImageLoadError> {
        let bytes = fs::read(path).map_err(|source| ImageLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = image::load_from_memory(&bytes).map_err(|e| ImageLoadError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        debug!("Decoded {} ({}x{})", path.display(), width, height);
        Ok(DecodedImage {
            width,
            height,
            rgba: Arc::from(rgba.into_raw()),
        })
    }
}

/// Writes exports as files inside one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryExporter {
    directory: PathBuf,
}

impl DirectoryExporter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

fn check_file_name(file_name: &str) -> Result<(), ExportError> {
    let bad = file_name.trim().is_empty()
        || file_name == "."
        || file_name == ".."
        || file_name.contains(['/', '\\', '\0']);
    if bad {
        Err(ExportError::InvalidFileName(file_name.to_string()))
    } else {
        Ok(())
    }
}

impl FileExporter for DirectoryExporter {
    fn export_text(&self, file_name: &str, content: &str) -> Result<PathBuf, ExportError> {
        check_file_name(file_name)?;
        fs::create_dir_all(&self.directory)?;
        let path = self.directory.join(file_name);
        fs::write(&path, content)?;
        info!("Exported {} bytes to {}", content.len(), path.display());
        Ok(path)
    }
}
