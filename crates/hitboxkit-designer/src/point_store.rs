use crate::error::{HitboxError, HitboxResult};
use crate::model::LogicalPoint;
use std::ops::Index;
use std::sync::Arc;

/// Ordered polygon vertices with copy-on-write snapshots.
///
/// `PointStore` is responsible for:
/// - Keeping vertices in insertion order (the order defines the polygon edges)
/// - Exposing the only legal mutations: append, replace, truncate, clear
/// - Handing out immutable snapshots that later mutations never alter
///
/// # Snapshot Model
///
/// The sequence lives behind an `Arc`. [`PointStore::snapshot`] clones the
/// `Arc`, and every mutation goes through `Arc::make_mut`, which copies the
/// vector only while a snapshot is still alive. A reader holding a snapshot
/// therefore never observes a half-applied change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointStore {
    points: Arc<Vec<LogicalPoint>>,
}

impl PointStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given vertices in order.
    pub fn from_points(points: Vec<LogicalPoint>) -> Self {
        Self {
            points: Arc::new(points),
        }
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Gets a point by index.
    pub fn get(&self, index: usize) -> Option<&LogicalPoint> {
        self.points.get(index)
    }

    /// Gets the last point, if any.
    pub fn last(&self) -> Option<&LogicalPoint> {
        self.points.last()
    }

    /// Iterates over points in vertex order.
    pub fn iter(&self) -> std::slice::Iter<'_, LogicalPoint> {
        self.points.iter()
    }

    /// Borrows the points as a slice.
    pub fn as_slice(&self) -> &[LogicalPoint] {
        &self.points
    }

    /// Returns an immutable snapshot of the current sequence.
    pub fn snapshot(&self) -> Arc<Vec<LogicalPoint>> {
        Arc::clone(&self.points)
    }

    /// Appends a point to the end of the sequence.
    pub fn append(&mut self, point: LogicalPoint) {
        Arc::make_mut(&mut self.points).push(point);
    }

    /// Replaces the point at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HitboxError::IndexOutOfRange`] when `index` does not exist;
    /// the sequence is left untouched.
    pub fn replace_at(&mut self, index: usize, point: LogicalPoint) -> HitboxResult<()> {
        let len = self.points.len();
        if index >= len {
            return Err(HitboxError::IndexOutOfRange { index, len });
        }
        Arc::make_mut(&mut self.points)[index] = point;
        Ok(())
    }

    /// Removes and returns the final point. No-op on an empty sequence.
    pub fn truncate_last(&mut self) -> Option<LogicalPoint> {
        if self.points.is_empty() {
            return None;
        }
        Arc::make_mut(&mut self.points).pop()
    }

    /// Empties the sequence.
    pub fn clear(&mut self) {
        if self.points.is_empty() {
            return;
        }
        // Detach instead of clearing in place so outstanding snapshots keep their data.
        self.points = Arc::new(Vec::new());
    }
}

impl Index<usize> for PointStore {
    type Output = LogicalPoint;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a PointStore {
    type Item = &'a LogicalPoint;
    type IntoIter = std::slice::Iter<'a, LogicalPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<LogicalPoint> for PointStore {
    fn from_iter<T: IntoIterator<Item = LogicalPoint>>(iter: T) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}
