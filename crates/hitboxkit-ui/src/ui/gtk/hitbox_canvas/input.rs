//! Pointer handling for the hitbox canvas

use super::*;
use hitboxkit_designer::SurfacePoint;

impl HitboxCanvas {
    pub(super) fn handle_drag_begin(&self, x: f64, y: f64) {
        self.area.grab_focus();
        self.drag_origin.set((x, y));

        let canvas = self.canvas_box();
        let result = self
            .session
            .borrow_mut()
            .pointer_down(SurfacePoint::new(x, y), canvas);
        self.report(result);
    }

    pub(super) fn handle_drag_update(&self, offset_x: f64, offset_y: f64) {
        let pos = self.gesture_position(offset_x, offset_y);
        let canvas = self.canvas_box();
        let result = self.session.borrow_mut().pointer_move(pos, canvas);
        self.report(result);
    }

    /// Ends the gesture wherever the pointer is, even outside the surface.
    pub(super) fn handle_drag_end(&self, offset_x: f64, offset_y: f64) {
        let pos = self.gesture_position(offset_x, offset_y);
        let canvas = self.canvas_box();
        let result = self.session.borrow_mut().pointer_up(pos, canvas);
        self.report(result);
    }

    fn gesture_position(&self, offset_x: f64, offset_y: f64) -> SurfacePoint {
        let (start_x, start_y) = self.drag_origin.get();
        SurfacePoint::new(start_x + offset_x, start_y + offset_y)
    }
}
