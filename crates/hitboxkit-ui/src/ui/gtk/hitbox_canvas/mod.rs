//! Hitbox Canvas - drawing surface and pointer handling for the editor
//!
//! This module contains the HitboxCanvas struct which handles:
//! - Backdrop image display under the drawing surface
//! - Path, marker and guide rendering
//! - Pointer gestures, forwarded to the session as press / move / release

mod input;
mod rendering;

use std::cell::Cell;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{Align, DrawingArea, GestureDrag, Overlay, Picture};

use hitboxkit_designer::{CanvasBox, DecodedImage, HitboxResult};
use hitboxkit_settings::UiSettings;

use crate::ui::gtk::status_bar::StatusBar;
use crate::SharedSession;

/// Options read once from the UI settings.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DrawOptions {
    pub show_axes: bool,
    pub marker_radius: f64,
}

#[derive(Clone)]
pub struct HitboxCanvas {
    pub widget: Overlay,
    pub area: DrawingArea,
    backdrop: Picture,
    session: SharedSession,
    status_bar: StatusBar,
    // Pixel where the current drag gesture began
    drag_origin: Rc<Cell<(f64, f64)>>,
}

impl HitboxCanvas {
    pub fn new(session: SharedSession, ui: &UiSettings, status_bar: StatusBar) -> Rc<Self> {
        let size = ui.canvas_size_px as i32;

        let widget = Overlay::new();
        widget.add_css_class("hitbox-canvas");
        widget.set_halign(Align::Center);
        widget.set_valign(Align::Center);

        // The base fixes the size; overlays are not measured, so a large
        // backdrop cannot stretch the surface.
        let base = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
        base.set_size_request(size, size);
        widget.set_child(Some(&base));

        let backdrop = Picture::new();
        backdrop.set_can_shrink(true);
        backdrop.set_can_target(false);
        backdrop.set_opacity(ui.backdrop_opacity);
        widget.add_overlay(&backdrop);

        let area = DrawingArea::builder()
            .content_width(size)
            .content_height(size)
            .css_classes(vec!["hitbox-surface"])
            .focusable(true)
            .build();
        area.set_cursor_from_name(Some("crosshair"));
        widget.add_overlay(&area);

        let options = DrawOptions {
            show_axes: ui.show_axes,
            marker_radius: session.borrow().marker_radius(),
        };

        let session_draw = session.clone();
        area.set_draw_func(move |_area, cr, width, height| {
            let Ok(session) = session_draw.try_borrow() else {
                return;
            };
            Self::draw(cr, session.state(), width as f64, height as f64, &options);
        });

        let canvas = Rc::new(Self {
            widget,
            area: area.clone(),
            backdrop,
            session,
            status_bar,
            drag_origin: Rc::new(Cell::new((0.0, 0.0))),
        });

        // One gesture yields either a click or a drag, never both.
        let drag_gesture = GestureDrag::new();
        drag_gesture.set_button(1); // Left click only
        let canvas_drag = canvas.clone();
        drag_gesture.connect_drag_begin(move |_gesture, x, y| {
            canvas_drag.handle_drag_begin(x, y);
        });

        let canvas_drag_update = canvas.clone();
        drag_gesture.connect_drag_update(move |_gesture, offset_x, offset_y| {
            canvas_drag_update.handle_drag_update(offset_x, offset_y);
        });

        let canvas_drag_end = canvas.clone();
        drag_gesture.connect_drag_end(move |_gesture, offset_x, offset_y| {
            canvas_drag_end.handle_drag_end(offset_x, offset_y);
        });
        area.add_controller(drag_gesture);

        canvas
    }

    /// Current size of the drawing surface.
    pub fn canvas_box(&self) -> CanvasBox {
        CanvasBox::new(self.area.width() as f64, self.area.height() as f64)
    }

    /// Shows `image` behind the surface, or removes the backdrop.
    pub fn set_backdrop(&self, image: Option<&DecodedImage>) {
        match image {
            Some(image) => {
                let bytes = glib::Bytes::from(image.rgba());
                let texture = gtk4::gdk::MemoryTexture::new(
                    image.width() as i32,
                    image.height() as i32,
                    gtk4::gdk::MemoryFormat::R8g8b8a8,
                    &bytes,
                    image.stride(),
                );
                self.backdrop.set_paintable(Some(&texture));
            }
            None => self.backdrop.set_paintable(None::<&gtk4::gdk::Texture>),
        }
    }

    pub fn queue_draw(&self) {
        self.area.queue_draw();
    }

    /// Shows a failed pointer action in the status bar.
    pub(crate) fn report(&self, result: HitboxResult<bool>) {
        if let Err(e) = result {
            self.status_bar.set_error(&e.to_string());
        }
    }
}
