use std::cell::RefCell;
use std::rc::Rc;

use hitboxkit_designer::{
    CanvasBox, CanvasExtent, DragState, EditorEvent, HitboxError, HitboxLabel, HitboxSession,
    LogicalPoint, PointerEvent, SessionState, SurfacePoint,
};

const BOX: CanvasBox = CanvasBox {
    width: 600.0,
    height: 600.0,
};

fn session() -> HitboxSession<()> {
    HitboxSession::new(SessionState::new(
        HitboxLabel::new("ship"),
        CanvasExtent::new(40.0, 40.0),
    ))
}

fn tap(session: &mut HitboxSession<()>, x: f64, y: f64) {
    let pos = SurfacePoint::new(x, y);
    session.pointer_down(pos, BOX).unwrap();
    session.pointer_up(pos, BOX).unwrap();
}

#[test]
fn test_tap_on_empty_canvas_adds_point() {
    let mut s = session();
    tap(&mut s, 300.0, 300.0);
    assert_eq!(s.state().points().len(), 1);
    assert_eq!(s.state().points()[0], LogicalPoint::new(0.0, 0.0));
}

#[test]
fn test_drag_marker_moves_without_adding() {
    let mut s = session();
    tap(&mut s, 300.0, 300.0);
    tap(&mut s, 450.0, 150.0);

    // Press on the second marker, drag it, release somewhere else.
    assert!(s.pointer_down(SurfacePoint::new(451.0, 151.0), BOX).unwrap());
    assert_eq!(s.state().drag(), DragState::Dragging(1));
    s.pointer_move(SurfacePoint::new(500.0, 200.0), BOX).unwrap();
    s.pointer_move(SurfacePoint::new(600.0, 600.0), BOX).unwrap();
    s.pointer_up(SurfacePoint::new(600.0, 600.0), BOX).unwrap();

    let points = s.state().points();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0], LogicalPoint::new(0.0, 0.0));
    assert_eq!(points[1], LogicalPoint::new(40.0, -40.0));
    assert_eq!(s.state().drag(), DragState::Idle);
}

#[test]
fn test_move_without_press_does_nothing() {
    let mut s = session();
    tap(&mut s, 300.0, 300.0);
    let version = s.state().version();
    assert!(!s.pointer_move(SurfacePoint::new(0.0, 0.0), BOX).unwrap());
    assert_eq!(s.state().version(), version);
}

#[test]
fn test_press_on_missing_marker_is_an_error() {
    let mut s = session();
    let err = s
        .dispatch(EditorEvent::Pointer(PointerEvent::PressOnMarker { index: 2 }))
        .unwrap_err();
    assert!(matches!(err, HitboxError::IndexOutOfRange { index: 2, len: 0 }));
    assert_eq!(s.state().drag(), DragState::Idle);
}

#[test]
fn test_clear_during_drag_forces_idle() {
    let mut s = session();
    tap(&mut s, 300.0, 300.0);
    s.pointer_down(SurfacePoint::new(300.0, 300.0), BOX).unwrap();
    assert_eq!(s.state().drag(), DragState::Dragging(0));

    s.clear().unwrap();
    assert!(s.state().points().is_empty());
    assert_eq!(s.state().drag(), DragState::Idle);

    // The next release is an ordinary click again.
    s.pointer_up(SurfacePoint::new(300.0, 300.0), BOX).unwrap();
    assert_eq!(s.state().points().len(), 1);
}

#[test]
fn test_undo_keeps_drag_on_surviving_point() {
    let mut s = session();
    tap(&mut s, 300.0, 300.0);
    tap(&mut s, 450.0, 150.0);
    s.pointer_down(SurfacePoint::new(300.0, 300.0), BOX).unwrap();
    s.undo().unwrap();
    assert_eq!(s.state().drag(), DragState::Dragging(0));
    assert_eq!(s.state().points().len(), 1);
}

#[test]
fn test_extent_change_applies_to_later_clicks_only() {
    let mut s = session();
    tap(&mut s, 600.0, 0.0);
    s.set_extent(CanvasExtent::new(10.0, 5.0)).unwrap();
    tap(&mut s, 600.0, 0.0);
    let points = s.state().points();
    assert_eq!(points[0], LogicalPoint::new(40.0, 40.0));
    assert_eq!(points[1], LogicalPoint::new(10.0, 5.0));
}

#[test]
fn test_zero_extent_reports_and_keeps_state() {
    let mut s = session();
    tap(&mut s, 300.0, 300.0);
    s.set_extent(CanvasExtent::new(0.0, 0.0)).unwrap();

    let err = s.pointer_up(SurfacePoint::new(10.0, 10.0), BOX).unwrap_err();
    assert!(matches!(err, HitboxError::InvalidExtent { .. }));
    assert_eq!(s.state().points().len(), 1);
    assert!(s.state().preview().is_err());
}

#[test]
fn test_listeners_see_new_state() {
    let mut s = session();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    s.subscribe(move |state| sink.borrow_mut().push(state.points().len()));

    tap(&mut s, 300.0, 300.0);
    tap(&mut s, 100.0, 100.0);
    s.undo().unwrap();
    s.clear().unwrap();

    assert_eq!(*seen.borrow(), vec![1, 2, 1, 0]);
}

#[test]
fn test_version_counts_changes() {
    let mut s = session();
    assert_eq!(s.state().version(), 0);
    s.set_label("ship").unwrap(); // unchanged
    assert_eq!(s.state().version(), 0);
    s.set_label("boss").unwrap();
    tap(&mut s, 1.0, 1.0);
    assert_eq!(s.state().version(), 2);
}

#[test]
fn test_set_image_and_drop_it() {
    let mut s: HitboxSession<u32> = HitboxSession::default();
    s.dispatch(EditorEvent::SetImage(Some(7))).unwrap();
    assert_eq!(s.state().image(), Some(&7));
    s.dispatch(EditorEvent::SetImage(None)).unwrap();
    assert_eq!(s.state().image(), None);
}

#[test]
fn test_export_uses_label_file_name() {
    let mut s = session();
    tap(&mut s, 300.0, 300.0);
    s.set_label("").unwrap();
    let (file_name, text) = s.export("js");
    assert_eq!(file_name, "hitbox.js");
    assert!(text.starts_with("//  shape\n: ["));
}

#[test]
fn test_custom_marker_radius() {
    let mut s = session().with_marker_radius(20.0);
    tap(&mut s, 300.0, 300.0);
    assert!(s.pointer_down(SurfacePoint::new(315.0, 300.0), BOX).unwrap());
    assert_eq!(s.marker_radius(), 20.0);
}

#[test]
fn test_release_outside_canvas_adds_nothing() {
    let mut s = session();
    s.pointer_down(SurfacePoint::new(590.0, 300.0), BOX).unwrap();
    assert!(!s.pointer_up(SurfacePoint::new(650.0, 300.0), BOX).unwrap());
    assert!(s.state().points().is_empty());
}

#[test]
fn test_drag_released_outside_canvas_ends_cleanly() {
    let mut s = session();
    tap(&mut s, 300.0, 300.0);
    s.pointer_down(SurfacePoint::new(300.0, 300.0), BOX).unwrap();
    s.pointer_move(SurfacePoint::new(-30.0, 300.0), BOX).unwrap();
    assert!(s.pointer_up(SurfacePoint::new(-30.0, 300.0), BOX).unwrap());
    assert_eq!(s.state().drag(), DragState::Idle);
    assert_eq!(s.state().points().len(), 1);
    assert_eq!(s.state().points()[0], LogicalPoint::new(-44.0, 0.0));
}
