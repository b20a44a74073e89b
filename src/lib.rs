//! # HitboxKit
//!
//! Draw polygon hitboxes over a reference image and export them as
//! coordinate lists for game code.
//!
//! ## Architecture
//!
//! HitboxKit is organized as a workspace with multiple crates:
//!
//! 1. **hitboxkit-designer** - Transform, point store, interaction, preview, export
//! 2. **hitboxkit-settings** - Configuration files and defaults
//! 3. **hitboxkit-ui** - GTK4 editor window and canvas
//! 4. **hitboxkit** - Main binary that integrates all crates

pub use hitboxkit_designer as designer;

pub use hitboxkit_designer::{
    CanvasBox, CanvasExtent, DecodedImage, DecodedImageProvider, DirectoryExporter, DragState,
    EditorEvent, ExportError, FileExporter, HitboxError, HitboxLabel, HitboxResult,
    HitboxSession, ImageLoadError, ImageProvider, LogicalPoint, PointStore, SessionState,
    SurfacePoint,
};

pub use hitboxkit_settings::{Config, SettingsError, SettingsManager};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Honours `RUST_LOG`; anything it does not mention logs at INFO.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Windows release builds have no console, so log next to the executable
    #[cfg(all(target_os = "windows", not(debug_assertions)))]
    {
        use std::fs::OpenOptions;

        let log_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| std::path::PathBuf::from("."));

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_dir.join("hitboxkit.log"))
        {
            Ok(file) => {
                let fmt_layer = fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt_layer)
                    .try_init()?;
            }
            Err(_) => {
                tracing_subscriber::registry().with(env_filter).try_init()?;
            }
        }
    }

    #[cfg(not(all(target_os = "windows", not(debug_assertions))))]
    {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    tracing::debug!("HitboxKit {} built {}", VERSION, BUILD_DATE);
    Ok(())
}
