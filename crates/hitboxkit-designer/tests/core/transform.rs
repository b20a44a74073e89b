use hitboxkit_designer::{
    logical_to_percent, pixel_to_logical, CanvasBox, CanvasExtent, CanvasTransform, HitboxError,
    LogicalPoint, SurfacePoint,
};

#[test]
fn test_center_click_is_origin() {
    let extent = CanvasExtent::new(40.0, 40.0);
    let p = pixel_to_logical(300.0, 300.0, 600.0, 600.0, &extent).unwrap();
    assert_eq!(p, LogicalPoint::new(0.0, 0.0));
}

#[test]
fn test_positive_y_goes_up() {
    let extent = CanvasExtent::default();
    let upper = pixel_to_logical(300.0, 100.0, 600.0, 600.0, &extent).unwrap();
    let lower = pixel_to_logical(300.0, 500.0, 600.0, 600.0, &extent).unwrap();
    assert!(upper.y > 0.0);
    assert!(lower.y < 0.0);
}

#[test]
fn test_result_is_quantized() {
    // 1 px on a 600 px box at ±40 is 0.1333.. units
    let p = pixel_to_logical(301.0, 299.0, 600.0, 600.0, &CanvasExtent::default()).unwrap();
    assert_eq!(p, LogicalPoint::new(0.13, 0.13));
}

#[test]
fn test_non_square_box_and_extent() {
    let extent = CanvasExtent::new(100.0, 25.0);
    let p = pixel_to_logical(150.0, 50.0, 800.0, 200.0, &extent).unwrap();
    // x = 150/800*200 - 100 = -62.5, y = -(50/200*50 - 25) = 12.5
    assert_eq!(p, LogicalPoint::new(-62.5, 12.5));
}

#[test]
fn test_percent_of_extremes() {
    let extent = CanvasExtent::new(40.0, 20.0);
    let tl = logical_to_percent(&LogicalPoint::new(-40.0, 20.0), &extent).unwrap();
    assert_eq!((tl.x_percent, tl.y_percent), (0.0, 0.0));
    let br = logical_to_percent(&LogicalPoint::new(40.0, -20.0), &extent).unwrap();
    assert_eq!((br.x_percent, br.y_percent), (100.0, 100.0));
}

#[test]
fn test_negative_extent_is_configuration_error() {
    let err = pixel_to_logical(10.0, 10.0, 600.0, 600.0, &CanvasExtent::new(-40.0, 40.0))
        .unwrap_err();
    assert!(matches!(err, HitboxError::InvalidExtent { .. }));
}

#[test]
fn test_transform_rejects_degenerate_canvas() {
    let err = CanvasTransform::new(CanvasExtent::default(), CanvasBox::new(600.0, 0.0))
        .unwrap_err();
    assert!(matches!(err, HitboxError::DegenerateCanvas { .. }));
}

#[test]
fn test_logical_to_pixel_returns_to_click() {
    let transform =
        CanvasTransform::new(CanvasExtent::default(), CanvasBox::new(600.0, 600.0)).unwrap();
    let point = transform.pixel_to_logical(&SurfacePoint::new(450.0, 150.0));
    assert_eq!(point, LogicalPoint::new(20.0, 20.0));
    let back = transform.logical_to_pixel(&point);
    assert!((back.x - 450.0).abs() < 1e-9);
    assert!((back.y - 150.0).abs() < 1e-9);
}
