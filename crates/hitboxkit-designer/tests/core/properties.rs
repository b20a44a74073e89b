use hitboxkit_designer::{
    logical_to_percent, pixel_to_logical, reduce, CanvasBox, CanvasExtent, DragState,
    EditorEvent, LogicalPoint, PointStore, PointerEvent, SessionState, SurfacePoint,
};
use proptest::prelude::*;

fn extent_strategy() -> impl Strategy<Value = CanvasExtent> {
    (0.5f64..500.0, 0.5f64..500.0).prop_map(|(w, h)| CanvasExtent::new(w, h))
}

fn point_strategy() -> impl Strategy<Value = LogicalPoint> {
    (-100.0f64..100.0, -100.0f64..100.0).prop_map(|(x, y)| LogicalPoint::new(x, y))
}

proptest! {
    #[test]
    fn prop_pixel_round_trips_within_quantization(
        fx in 0.0f64..=1.0,
        fy in 0.0f64..=1.0,
        width in 10.0f64..2000.0,
        height in 10.0f64..2000.0,
        extent in extent_strategy(),
    ) {
        let (px, py) = (fx * width, fy * height);
        let point = pixel_to_logical(px, py, width, height, &extent).unwrap();
        let percent = logical_to_percent(&point, &extent).unwrap();

        // Error measured back in logical units.
        let dx = (percent.x_percent - px / width * 100.0) / 100.0 * 2.0 * extent.half_width;
        let dy = (percent.y_percent - py / height * 100.0) / 100.0 * 2.0 * extent.half_height;
        prop_assert!(dx.abs() <= 0.01, "dx = {}", dx);
        prop_assert!(dy.abs() <= 0.01, "dy = {}", dy);
    }

    #[test]
    fn prop_append_then_truncate_restores(
        initial in prop::collection::vec(point_strategy(), 0..20),
        extra in point_strategy(),
    ) {
        let mut store: PointStore = initial.iter().copied().collect();
        let before = store.clone();
        store.append(extra);
        prop_assert_eq!(store.truncate_last(), Some(extra));
        prop_assert_eq!(store, before);
    }

    #[test]
    fn prop_clear_always_empties(
        initial in prop::collection::vec(point_strategy(), 0..20),
        dragging in prop::option::of(0usize..20),
    ) {
        let mut state: SessionState<()> = SessionState::default();
        for p in &initial {
            let pos = SurfacePoint::new(300.0 + p.x, 300.0 - p.y);
            state = reduce(&state, EditorEvent::Pointer(PointerEvent::Click {
                pos,
                canvas: CanvasBox::new(600.0, 600.0),
            })).unwrap();
        }
        if let Some(i) = dragging.filter(|i| *i < initial.len()) {
            state = reduce(&state, EditorEvent::Pointer(PointerEvent::PressOnMarker { index: i }))
                .unwrap();
        }
        let cleared = reduce(&state, EditorEvent::Clear).unwrap();
        prop_assert!(cleared.points().is_empty());
        prop_assert_eq!(cleared.drag(), DragState::Idle);
    }

    #[test]
    fn prop_drag_changes_only_dragged_index(
        initial in prop::collection::vec(point_strategy(), 1..12),
        pick in any::<prop::sample::Index>(),
        moves in prop::collection::vec((0.0f64..600.0, 0.0f64..600.0), 0..15),
        stray_clicks in 0usize..3,
    ) {
        let canvas = CanvasBox::new(600.0, 600.0);
        let mut state: SessionState<()> = SessionState::default();
        for p in &initial {
            let pos = SurfacePoint::new(300.0 + p.x, 300.0 - p.y);
            state = reduce(&state, EditorEvent::Pointer(PointerEvent::Click { pos, canvas }))
                .unwrap();
        }
        let before = state.points().clone();
        let index = pick.index(before.len());

        state = reduce(&state, EditorEvent::Pointer(PointerEvent::PressOnMarker { index })).unwrap();
        for (x, y) in &moves {
            state = reduce(&state, EditorEvent::Pointer(PointerEvent::Move {
                pos: SurfacePoint::new(*x, *y),
                canvas,
            })).unwrap();
        }
        for _ in 0..stray_clicks {
            state = reduce(&state, EditorEvent::Pointer(PointerEvent::Click {
                pos: SurfacePoint::new(1.0, 1.0),
                canvas,
            })).unwrap();
        }
        state = reduce(&state, EditorEvent::Pointer(PointerEvent::Release)).unwrap();

        prop_assert_eq!(state.drag(), DragState::Idle);
        prop_assert_eq!(state.points().len(), before.len());
        for i in 0..before.len() {
            if i != index {
                prop_assert_eq!(state.points()[i], before[i]);
            }
        }
    }

    #[test]
    fn prop_stored_values_have_two_decimals(
        px in 0.0f64..600.0,
        py in 0.0f64..600.0,
        extent in extent_strategy(),
    ) {
        let p = pixel_to_logical(px, py, 600.0, 600.0, &extent).unwrap();
        prop_assert!(((p.x * 100.0).round() - p.x * 100.0).abs() < 1e-6);
        prop_assert!(((p.y * 100.0).round() - p.y * 100.0).abs() < 1e-6);
    }
}

#[test]
fn test_center_click_scenario() {
    let state: SessionState<()> = SessionState::default();
    let state = reduce(
        &state,
        EditorEvent::Pointer(PointerEvent::Click {
            pos: SurfacePoint::new(300.0, 300.0),
            canvas: CanvasBox::new(600.0, 600.0),
        }),
    )
    .unwrap();
    assert_eq!(state.points()[0], LogicalPoint::new(0.0, 0.0));
}
