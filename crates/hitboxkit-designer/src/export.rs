//! Text serialization of a hitbox.
//!
//! Output is a JS object-literal fragment:
//!
//! ```text
//! // ship shape
//! ship: [
//!   { x: 1, y: 2 },
//!   { x: 3, y: 4 }
//! ],
//! ```

use crate::model::{HitboxLabel, LogicalPoint};

const ENTRY_SEPARATOR: &str = ",\n  ";

/// Formats the points under `label`.
///
/// Coordinates are written as stored. An empty sequence keeps the indented
/// body line, giving `label: [\n  \n],`.
pub fn serialize_hitbox(points: &[LogicalPoint], label: &HitboxLabel) -> String {
    let body = points
        .iter()
        .map(LogicalPoint::to_string)
        .collect::<Vec<_>>()
        .join(ENTRY_SEPARATOR);
    format!("// {label} shape\n{label}: [\n  {body}\n],")
}
