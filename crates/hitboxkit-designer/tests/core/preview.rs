use hitboxkit_designer::{
    render_preview, CanvasBox, CanvasExtent, HitboxError, LogicalPoint, PercentPoint,
};

#[test]
fn test_empty_sequence_has_empty_path_and_no_markers() {
    let preview = render_preview(&[], &CanvasExtent::default()).unwrap();
    assert!(preview.path.is_empty());
    assert!(preview.markers.is_empty());
}

#[test]
fn test_two_points_form_a_path() {
    let points = [LogicalPoint::new(-40.0, 40.0), LogicalPoint::new(40.0, -40.0)];
    let preview = render_preview(&points, &CanvasExtent::default()).unwrap();
    assert_eq!(
        preview.path.vertices(),
        &[PercentPoint::new(0.0, 0.0), PercentPoint::new(100.0, 100.0)]
    );
    let indices: Vec<usize> = preview.markers.iter().map(|m| m.display_index).collect();
    assert_eq!(indices, vec![1, 2]);
}

#[test]
fn test_path_scales_to_any_canvas() {
    let points = [
        LogicalPoint::new(0.0, 0.0),
        LogicalPoint::new(20.0, 0.0),
        LogicalPoint::new(20.0, 20.0),
    ];
    let preview = render_preview(&points, &CanvasExtent::default()).unwrap();
    let pixels = preview.path.to_pixels(&CanvasBox::new(800.0, 400.0));
    assert_eq!(pixels.len(), 3);
    assert_eq!((pixels[2].x, pixels[2].y), (600.0, 100.0));
}

#[test]
fn test_invalid_extent_propagates() {
    let err = render_preview(&[LogicalPoint::default()], &CanvasExtent::new(40.0, 0.0))
        .unwrap_err();
    assert!(matches!(err, HitboxError::InvalidExtent { .. }));
}
