//! Rendering and drawing methods for the hitbox canvas

use super::*;
use gtk4::cairo::{Context, FontSlant, FontWeight};
use hitboxkit_designer::{percent_to_pixel, DecodedImage, Preview, SessionState};

const LABEL_FONT_SIZE: f64 = 12.0;
const LABEL_OFFSET: (f64, f64) = (10.0, 5.0);

impl HitboxCanvas {
    pub(super) fn draw(
        cr: &Context,
        state: &SessionState<DecodedImage>,
        width: f64,
        height: f64,
        options: &DrawOptions,
    ) {
        // Background and backdrop come from the widgets underneath.
        let canvas = CanvasBox::new(width, height);

        if options.show_axes {
            Self::draw_origin_crosshair(cr, width, height);
        }

        match state.preview() {
            Ok(preview) => {
                Self::draw_path(cr, &preview, &canvas);
                Self::draw_markers(cr, &preview, &canvas, state, options.marker_radius);
            }
            Err(e) => Self::draw_notice(cr, &e.to_string(), height),
        }

        Self::draw_point_counter(cr, state.points().len(), width, height);
    }

    fn draw_origin_crosshair(cr: &Context, width: f64, height: f64) {
        let _ = cr.save();

        cr.set_line_width(1.0);
        cr.set_source_rgba(1.0, 1.0, 1.0, 0.2);
        cr.move_to(width / 2.0, 0.0);
        cr.line_to(width / 2.0, height);
        cr.move_to(0.0, height / 2.0);
        cr.line_to(width, height / 2.0);
        let _ = cr.stroke();

        cr.set_source_rgb(1.0, 1.0, 1.0);
        cr.select_font_face("Sans", FontSlant::Normal, FontWeight::Normal);
        cr.set_font_size(LABEL_FONT_SIZE);
        cr.move_to(10.0, 20.0);
        let _ = cr.show_text("Origin (0,0) at center");

        let _ = cr.restore();
    }

    fn draw_path(cr: &Context, preview: &Preview, canvas: &CanvasBox) {
        let vertices = preview.path.to_pixels(canvas);
        let Some((first, rest)) = vertices.split_first() else {
            return;
        };

        let _ = cr.save();
        cr.move_to(first.x, first.y);
        for v in rest {
            cr.line_to(v.x, v.y);
        }
        cr.close_path();

        cr.set_source_rgba(1.0, 1.0, 0.0, 0.2);
        let _ = cr.fill_preserve();

        cr.set_source_rgba(1.0, 1.0, 0.0, 0.8);
        cr.set_line_width(2.0);
        cr.set_dash(&[5.0, 5.0], 0.0); // Dashed line
        let _ = cr.stroke();
        cr.set_dash(&[], 0.0);
        let _ = cr.restore();
    }

    fn draw_markers(
        cr: &Context,
        preview: &Preview,
        canvas: &CanvasBox,
        state: &SessionState<DecodedImage>,
        radius: f64,
    ) {
        let dragged = state.drag().dragged_index();

        let _ = cr.save();
        cr.select_font_face("Sans", FontSlant::Normal, FontWeight::Normal);
        cr.set_font_size(LABEL_FONT_SIZE);

        for marker in &preview.markers {
            let p = percent_to_pixel(&marker.position, canvas);

            cr.new_sub_path();
            cr.arc(p.x, p.y, radius, 0.0, 2.0 * std::f64::consts::PI);
            if dragged == Some(marker.point_index()) {
                cr.set_source_rgb(1.0, 0.6, 0.0);
            } else {
                cr.set_source_rgb(1.0, 1.0, 0.0);
            }
            let _ = cr.fill_preserve();
            cr.set_source_rgb(0.0, 0.0, 0.0);
            cr.set_line_width(1.0);
            let _ = cr.stroke();

            cr.set_source_rgb(1.0, 1.0, 1.0);
            cr.move_to(p.x + LABEL_OFFSET.0, p.y + LABEL_OFFSET.1);
            let _ = cr.show_text(&marker.display_index.to_string());
        }

        let _ = cr.restore();
    }

    fn draw_point_counter(cr: &Context, count: usize, width: f64, height: f64) {
        let text = crate::helpers::points_caption(count);

        let _ = cr.save();
        cr.select_font_face("Sans", FontSlant::Normal, FontWeight::Normal);
        cr.set_font_size(LABEL_FONT_SIZE);
        let text_width = cr
            .text_extents(&text)
            .map(|ext| ext.width())
            .unwrap_or(60.0);

        let padding = 8.0;
        let box_w = text_width + padding * 2.0;
        let box_h = LABEL_FONT_SIZE + padding * 2.0;
        let x = width - box_w - 8.0;
        let y = height - box_h - 8.0;

        cr.set_source_rgba(0.0, 0.0, 0.0, 0.7);
        cr.rectangle(x, y, box_w, box_h);
        let _ = cr.fill();

        cr.set_source_rgb(1.0, 1.0, 1.0);
        cr.move_to(x + padding, y + padding + LABEL_FONT_SIZE - 2.0);
        let _ = cr.show_text(&text);
        let _ = cr.restore();
    }

    /// Shown instead of the path when the extent cannot be used.
    fn draw_notice(cr: &Context, message: &str, height: f64) {
        let _ = cr.save();
        cr.select_font_face("Sans", FontSlant::Normal, FontWeight::Bold);
        cr.set_font_size(LABEL_FONT_SIZE);
        cr.set_source_rgb(1.0, 0.4, 0.4);
        cr.move_to(10.0, height / 2.0 - 10.0);
        let _ = cr.show_text(message);
        let _ = cr.restore();
    }
}
