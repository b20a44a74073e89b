use gtk4::prelude::*;
use gtk4::{Align, Box, Label, Orientation};

/// One-line status strip under the editor.
#[derive(Clone)]
pub struct StatusBar {
    pub widget: Box,
    message_label: Label,
    extent_label: Label,
    drag_label: Label,
}

impl StatusBar {
    pub fn new() -> Self {
        let widget = Box::new(Orientation::Horizontal, 0);
        widget.set_height_request(30);
        widget.add_css_class("status-bar");
        widget.set_margin_start(5);
        widget.set_margin_end(5);
        widget.set_margin_top(2);
        widget.set_margin_bottom(2);

        // Left side: last action or error
        let left_box = Box::new(Orientation::Horizontal, 10);
        left_box.set_hexpand(true);
        left_box.set_halign(Align::Start);
        left_box.set_valign(Align::Center);

        let message_label = Label::new(Some("Click on the canvas to add hitbox points"));
        message_label.add_css_class("status-text");
        message_label.set_ellipsize(gtk4::pango::EllipsizeMode::End);
        left_box.append(&message_label);
        widget.append(&left_box);

        // Right side: extent and drag state
        let right_box = Box::new(Orientation::Horizontal, 10);
        right_box.set_halign(Align::End);
        right_box.set_valign(Align::Center);

        let drag_label = Label::new(None);
        drag_label.add_css_class("status-text");
        right_box.append(&drag_label);

        right_box.append(&Label::new(Some("|")));

        let extent_label = Label::new(None);
        extent_label.add_css_class("status-text");
        extent_label.add_css_class("monospace");
        right_box.append(&extent_label);

        widget.append(&right_box);

        Self {
            widget,
            message_label,
            extent_label,
            drag_label,
        }
    }

    pub fn set_message(&self, message: &str) {
        self.message_label.remove_css_class("status-error");
        self.message_label.set_text(message);
    }

    /// Shows a non-fatal error; editing continues.
    pub fn set_error(&self, message: &str) {
        self.message_label.add_css_class("status-error");
        self.message_label.set_text(message);
    }

    pub fn set_extent(&self, text: &str) {
        self.extent_label.set_text(text);
    }

    pub fn set_dragging(&self, index: Option<usize>) {
        match index {
            Some(i) => self.drag_label.set_text(&format!("Moving point {}", i + 1)),
            None => self.drag_label.set_text("Idle"),
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
