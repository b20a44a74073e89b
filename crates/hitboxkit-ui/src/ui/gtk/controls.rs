//! Label, extent and action controls above the canvas.

use gtk4::prelude::*;
use gtk4::{Align, Box, Button, Entry, Label, Orientation, SpinButton};

use hitboxkit_designer::CanvasExtent;
use hitboxkit_settings::EditorSettings;

/// Largest half-extent the spin buttons accept, in either direction.
const EXTENT_LIMIT: f64 = 100_000.0;

#[derive(Clone)]
pub struct EditorControls {
    pub widget: Box,
    pub label_entry: Entry,
    pub half_width: SpinButton,
    pub half_height: SpinButton,
    pub upload_btn: Button,
    pub export_btn: Button,
    pub undo_btn: Button,
    pub clear_btn: Button,
    pub copy_btn: Button,
}

fn field(title: &str, input: &impl IsA<gtk4::Widget>) -> Box {
    let column = Box::new(Orientation::Vertical, 4);
    column.set_hexpand(true);
    let label = Label::new(Some(title));
    label.set_halign(Align::Start);
    label.add_css_class("field-label");
    column.append(&label);
    column.append(input);
    column
}

fn extent_spin(value: f64) -> SpinButton {
    // Zero and negative values are accepted here and reported by the editor.
    let spin = SpinButton::with_range(-EXTENT_LIMIT, EXTENT_LIMIT, 1.0);
    spin.set_digits(2);
    spin.set_value(value);
    spin
}

impl EditorControls {
    pub fn new(settings: &EditorSettings) -> Self {
        let widget = Box::new(Orientation::Vertical, 8);

        // Inputs row
        let inputs = Box::new(Orientation::Horizontal, 8);
        let label_entry = Entry::new();
        label_entry.set_text(&settings.default_label);
        let half_width = extent_spin(settings.extent.half_width);
        let half_height = extent_spin(settings.extent.half_height);

        inputs.append(&field("Hitbox Name:", &label_entry));
        inputs.append(&field("Max X:", &half_width));
        inputs.append(&field("Max Y:", &half_height));
        widget.append(&inputs);

        // Actions row
        let actions = Box::new(Orientation::Horizontal, 8);
        let upload_btn = Button::with_label("Upload Image");
        upload_btn.add_css_class("suggested-action");
        upload_btn.set_tooltip_text(Some("Load a reference image (Ctrl+O)"));
        let export_btn = Button::with_label("Export");
        export_btn.add_css_class("export-button");
        export_btn.set_tooltip_text(Some("Save the hitbox as a .js fragment (Ctrl+E)"));
        let undo_btn = Button::with_label("Undo");
        undo_btn.set_tooltip_text(Some("Remove the last point (Ctrl+Z)"));
        let clear_btn = Button::with_label("Clear");
        clear_btn.add_css_class("destructive-action");
        let copy_btn = Button::with_label("Copy");
        copy_btn.set_tooltip_text(Some("Copy the export text to the clipboard"));

        for btn in [&upload_btn, &export_btn, &undo_btn, &clear_btn, &copy_btn] {
            actions.append(btn);
        }
        widget.append(&actions);

        Self {
            widget,
            label_entry,
            half_width,
            half_height,
            upload_btn,
            export_btn,
            undo_btn,
            clear_btn,
            copy_btn,
        }
    }

    pub fn extent(&self) -> CanvasExtent {
        CanvasExtent::new(self.half_width.value(), self.half_height.value())
    }
}
