//! File dialog and message helpers.
//!
//! Uses `FileChooserDialog` rather than `FileChooserNative`, since the native
//! variant depends on the XDG Desktop Portal being present.

use std::path::Path;

use gtk4::prelude::*;
use gtk4::{
    ButtonsType, FileChooserAction, FileChooserDialog, FileFilter, MessageDialog, MessageType,
    ResponseType, Widget,
};

/// Create a `FileChooserDialog` for picking a backdrop image.
pub fn open_image_dialog(parent: Option<&impl IsA<gtk4::Window>>) -> FileChooserDialog {
    let dlg = FileChooserDialog::new(
        Some("Upload Image"),
        parent,
        FileChooserAction::Open,
        &[
            ("Cancel", ResponseType::Cancel),
            ("Open", ResponseType::Accept),
        ],
    );
    dlg.set_default_size(900, 700);
    dlg.set_modal(true);

    let images = FileFilter::new();
    images.set_name(Some("Images"));
    images.add_mime_type("image/*");
    dlg.add_filter(&images);

    let all = FileFilter::new();
    all.set_name(Some("All Files"));
    all.add_pattern("*");
    dlg.add_filter(&all);

    dlg
}

/// Create a `FileChooserDialog` for saving an export.
///
/// Starts in `folder` with `file_name` filled in.
pub fn export_dialog(
    parent: Option<&impl IsA<gtk4::Window>>,
    folder: &Path,
    file_name: &str,
) -> FileChooserDialog {
    let dlg = FileChooserDialog::new(
        Some("Export Hitbox"),
        parent,
        FileChooserAction::Save,
        &[
            ("Cancel", ResponseType::Cancel),
            ("Save", ResponseType::Accept),
        ],
    );
    dlg.set_default_size(900, 700);
    dlg.set_modal(true);

    if folder.is_dir() {
        if let Err(e) = dlg.set_current_folder(Some(&gio::File::for_path(folder))) {
            tracing::debug!("Cannot open export dialog in {}: {}", folder.display(), e);
        }
    }
    dlg.set_current_name(file_name);
    dlg
}

/// Try to obtain the parent `gtk4::Window` from any widget.
pub fn parent_window(widget: &impl IsA<Widget>) -> Option<gtk4::Window> {
    widget
        .root()
        .and_then(|r| r.downcast::<gtk4::Window>().ok())
}

/// Show a modal error dialog with a title and detail message.
///
/// If a parent window is provided the dialog is set as transient and modal.
/// The dialog auto-destroys when the user clicks OK.
pub fn show_error_dialog(title: &str, message: &str, parent: Option<&gtk4::Window>) {
    let mut builder = MessageDialog::builder()
        .message_type(MessageType::Error)
        .buttons(ButtonsType::Ok)
        .text(title)
        .secondary_text(message);

    if let Some(win) = parent {
        builder = builder.transient_for(win).modal(true);
    }

    let dialog = builder.build();
    dialog.connect_response(|d, _| d.destroy());
    dialog.show();
}
