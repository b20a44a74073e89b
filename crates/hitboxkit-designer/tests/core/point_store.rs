use hitboxkit_designer::{HitboxError, LogicalPoint, PointStore};

fn store_of(points: &[(f64, f64)]) -> PointStore {
    points
        .iter()
        .map(|&(x, y)| LogicalPoint::new(x, y))
        .collect()
}

#[test]
fn test_order_is_insertion_order() {
    let mut store = PointStore::new();
    store.append(LogicalPoint::new(3.0, 3.0));
    store.append(LogicalPoint::new(1.0, 1.0));
    store.append(LogicalPoint::new(2.0, 2.0));
    let xs: Vec<f64> = store.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![3.0, 1.0, 2.0]);
}

#[test]
fn test_duplicates_allowed() {
    let mut store = PointStore::new();
    store.append(LogicalPoint::new(1.0, 1.0));
    store.append(LogicalPoint::new(1.0, 1.0));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_replace_at_changes_only_that_index() {
    let mut store = store_of(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
    store.replace_at(1, LogicalPoint::new(-5.0, 5.0)).unwrap();
    assert_eq!(store, store_of(&[(1.0, 1.0), (-5.0, 5.0), (3.0, 3.0)]));
}

#[test]
fn test_replace_at_out_of_range() {
    let mut store = store_of(&[(1.0, 1.0)]);
    let err = store.replace_at(7, LogicalPoint::default()).unwrap_err();
    assert_eq!(err.to_string(), "Point index out of range: 7 (len: 1)");
    assert!(matches!(err, HitboxError::IndexOutOfRange { .. }));
}

#[test]
fn test_truncate_last_returns_removed_point() {
    let mut store = store_of(&[(1.0, 1.0), (2.0, 2.0)]);
    assert_eq!(store.truncate_last(), Some(LogicalPoint::new(2.0, 2.0)));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_snapshot_survives_every_mutation() {
    let mut store = store_of(&[(1.0, 1.0), (2.0, 2.0)]);
    let snapshot = store.snapshot();

    store.truncate_last();
    assert_eq!(snapshot.len(), 2);

    let snapshot = store.snapshot();
    store.append(LogicalPoint::new(9.0, 9.0));
    store.replace_at(0, LogicalPoint::new(0.0, 0.0)).unwrap();
    assert_eq!(*snapshot, vec![LogicalPoint::new(1.0, 1.0)]);
}

#[test]
fn test_clear_empties() {
    let mut store = store_of(&[(1.0, 1.0), (2.0, 2.0)]);
    store.clear();
    assert!(store.is_empty());
    store.clear();
    assert!(store.is_empty());
}
