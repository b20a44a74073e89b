//! Main editor view: controls, canvas, export preview and status bar.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{Box, Label, Orientation, PolicyType, ResponseType, ScrolledWindow, TextView};
use tracing::{info, warn};

use hitboxkit_designer::{
    DecodedImage, DecodedImageProvider, HitboxResult, HitboxSession, SessionState,
};
use hitboxkit_settings::Config;

use crate::helpers::{copy_to_clipboard, export_to_path};
use crate::ui::gtk::controls::EditorControls;
use crate::ui::gtk::file_dialog::{
    export_dialog, open_image_dialog, parent_window, show_error_dialog,
};
use crate::ui::gtk::hitbox_canvas::HitboxCanvas;
use crate::ui::gtk::status_bar::StatusBar;
use crate::SharedSession;

pub struct HitboxEditor {
    pub widget: Box,
    session: SharedSession,
    canvas: Rc<HitboxCanvas>,
    status_bar: StatusBar,
    config: Config,
}

impl HitboxEditor {
    pub fn new(config: Config) -> Rc<Self> {
        let state = SessionState::new(config.editor.label(), config.editor.extent);
        let session: SharedSession = Rc::new(RefCell::new(
            HitboxSession::new(state).with_marker_radius(config.editor.marker_radius_px),
        ));

        let widget = Box::new(Orientation::Vertical, 8);
        widget.add_css_class("hitbox-editor");
        widget.set_margin_start(16);
        widget.set_margin_end(16);
        widget.set_margin_top(12);

        let title = Label::new(Some("Hitbox Editor"));
        title.add_css_class("title-2");
        widget.append(&title);
        let subtitle = Label::new(Some("Click on the canvas to create hitbox points"));
        subtitle.add_css_class("dim-label");
        widget.append(&subtitle);

        let controls = EditorControls::new(&config.editor);
        widget.append(&controls.widget);

        let status_bar = StatusBar::new();
        let canvas = HitboxCanvas::new(session.clone(), &config.ui, status_bar.clone());
        canvas.widget.set_vexpand(true);
        widget.append(&canvas.widget);

        // Export preview, only shown once there is something to export
        let preview_view = TextView::builder()
            .editable(false)
            .cursor_visible(false)
            .monospace(true)
            .build();
        preview_view.add_css_class("export-preview");
        let preview_scroller = ScrolledWindow::builder()
            .child(&preview_view)
            .hscrollbar_policy(PolicyType::Automatic)
            .vscrollbar_policy(PolicyType::Automatic)
            .min_content_height(80)
            .max_content_height(160)
            .propagate_natural_height(true)
            .visible(false)
            .build();
        widget.append(&preview_scroller);
        widget.append(&status_bar.widget);

        let editor = Rc::new(Self {
            widget,
            session: session.clone(),
            canvas: canvas.clone(),
            status_bar: status_bar.clone(),
            config,
        });

        // Redraw on every change; listeners must not touch the session.
        let buffer = preview_view.buffer();
        let area = canvas.area.clone();
        let status = status_bar.clone();
        let refresh = move |state: &SessionState<DecodedImage>| {
            area.queue_draw();
            preview_scroller.set_visible(!state.points().is_empty());
            buffer.set_text(&state.export_text());
            status.set_dragging(state.drag().dragged_index());
            status.set_extent(&format!("Extent {}", state.extent()));
        };
        refresh(session.borrow().state());
        session.borrow_mut().subscribe(refresh);

        editor.connect_controls(&controls);
        editor
    }

    fn connect_controls(self: &Rc<Self>, controls: &EditorControls) {
        let editor = self.clone();
        controls.label_entry.connect_changed(move |entry| {
            let result = editor.session.borrow_mut().set_label(entry.text().as_str());
            editor.report(result);
        });

        for spin in [&controls.half_width, &controls.half_height] {
            let editor = self.clone();
            let c = controls.clone();
            spin.connect_value_changed(move |_| {
                let result = editor.session.borrow_mut().set_extent(c.extent());
                editor.report(result);
            });
        }

        let editor = self.clone();
        controls.upload_btn.connect_clicked(move |_| editor.upload_image());
        let editor = self.clone();
        controls.export_btn.connect_clicked(move |_| editor.export());
        let editor = self.clone();
        controls.undo_btn.connect_clicked(move |_| editor.undo());
        let editor = self.clone();
        controls.clear_btn.connect_clicked(move |_| editor.clear());
        let editor = self.clone();
        controls.copy_btn.connect_clicked(move |_| editor.copy_export());
    }

    fn report(&self, result: HitboxResult<bool>) {
        if let Err(e) = result {
            self.status_bar.set_error(&e.to_string());
        }
    }

    pub fn undo(&self) {
        let result = self.session.borrow_mut().undo();
        self.report(result);
    }

    pub fn clear(&self) {
        let result = self.session.borrow_mut().clear();
        if result.is_ok() {
            self.status_bar.set_message("Cleared all points");
        }
        self.report(result);
    }

    pub fn copy_export(&self) {
        let text = self.session.borrow().state().export_text();
        if copy_to_clipboard(&text) {
            self.status_bar.set_message("Copied export text to clipboard");
        } else {
            self.status_bar.set_error("Clipboard is not available");
        }
    }

    pub fn upload_image(self: &Rc<Self>) {
        let parent = parent_window(&self.widget);
        let dialog = open_image_dialog(parent.as_ref());

        let editor = self.clone();
        dialog.connect_response(move |d, response| {
            if response == ResponseType::Accept {
                if let Some(path) = d.file().and_then(|f| f.path()) {
                    editor.load_backdrop(&path);
                }
            }
            d.close();
        });

        dialog.show();
    }

    /// Loads `path` as the backdrop. A failure is reported and editing goes on.
    pub fn load_backdrop(&self, path: &Path) {
        let result = self
            .session
            .borrow_mut()
            .load_image_with(&DecodedImageProvider::new(), path);

        match result {
            Ok(_) => {
                let session = self.session.borrow();
                self.canvas.set_backdrop(session.state().image());
                self.status_bar
                    .set_message(&format!("Loaded {}", path.display()));
            }
            Err(e) => {
                self.status_bar
                    .set_error(&format!("{}. Continuing without a new backdrop.", e));
            }
        }
    }

    pub fn export(self: &Rc<Self>) {
        let (file_name, _) = self
            .session
            .borrow()
            .export(&self.config.export.extension);
        let parent = parent_window(&self.widget);
        let dialog = export_dialog(parent.as_ref(), &self.config.export.directory, &file_name);

        let editor = self.clone();
        dialog.connect_response(move |d, response| {
            if response == ResponseType::Accept {
                if let Some(path) = d.file().and_then(|f| f.path()) {
                    editor.write_export(&path);
                }
            }
            d.close();
        });

        dialog.show();
    }

    fn write_export(&self, path: &Path) {
        let result = export_to_path(&self.session.borrow(), path);
        match result {
            Ok(written) => {
                info!("Hitbox exported to {}", written.display());
                self.status_bar
                    .set_message(&format!("Exported {}", written.display()));
            }
            Err(e) => {
                warn!("{:#}", e);
                let parent = parent_window(&self.widget);
                show_error_dialog("Export Failed", &format!("{:#}", e), parent.as_ref());
            }
        }
    }
}
