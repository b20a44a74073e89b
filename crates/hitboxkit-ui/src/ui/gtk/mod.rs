pub mod controls;
pub mod editor_window;
pub mod file_dialog;
pub mod hitbox_canvas;
pub mod status_bar;
