// On Windows, hide the console window for GUI applications
#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

use hitboxkit::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("Starting HitboxKit {}", hitboxkit::VERSION);

    hitboxkit_ui::gtk_app::main();

    Ok(())
}
