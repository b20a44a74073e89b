//! Small helpers shared by the GTK widgets.

use std::path::{Path, PathBuf};

use anyhow::Context;
use hitboxkit_designer::{DirectoryExporter, HitboxSession};

/// Copy text to clipboard using arboard crate
pub fn copy_to_clipboard(text: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text.to_string()) {
            Ok(_) => {
                // Some clipboard managers only take ownership after a short delay.
                std::thread::sleep(std::time::Duration::from_millis(100));
                true
            }
            Err(e) => {
                tracing::warn!("Clipboard write failed: {}", e);
                false
            }
        },
        Err(e) => {
            tracing::warn!("Clipboard unavailable: {}", e);
            false
        }
    }
}

/// Formats the status line summary for a point count.
pub fn points_caption(count: usize) -> String {
    format!("Points: {}", count)
}

/// Writes the session's export text to `path`, as picked in a save dialog.
pub fn export_to_path<I: Clone>(
    session: &HitboxSession<I>,
    path: &Path,
) -> anyhow::Result<PathBuf> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("{} is not a usable file name", path.display()))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    session
        .export_with(&DirectoryExporter::new(directory), file_name)
        .with_context(|| format!("Failed to export hitbox to {}", path.display()))
}
