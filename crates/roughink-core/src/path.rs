//! Folding operation sequences into path geometry.

use crate::geometry::Operation;
use kurbo::{BezPath, PathEl};

/// Build a path from an ordered operation sequence.
///
/// Each `Move` opens a new subpath. Drawing operations that appear before the
/// first `Move` have no current point and are skipped. Subpaths are never
/// closed implicitly.
pub fn build_path(operations: &[Operation]) -> BezPath {
    let mut path = BezPath::new();
    let mut has_current_point = false;
    let mut skipped = 0usize;

    for op in operations {
        match *op {
            Operation::Move(p) => {
                path.move_to(p);
                has_current_point = true;
            }
            _ if !has_current_point => skipped += 1,
            Operation::LineTo(p) => path.line_to(p),
            Operation::BezierCurveTo {
                point,
                control_point1,
                control_point2,
            } => path.curve_to(control_point1, control_point2, point),
            Operation::QuadraticCurveTo {
                point,
                control_point,
            } => path.quad_to(control_point, point),
        }
    }

    if skipped > 0 {
        log::debug!("Skipped {} operations with no current point", skipped);
    }
    path
}

/// Number of subpaths in a path.
pub fn subpath_count(path: &BezPath) -> usize {
    path.elements()
        .iter()
        .filter(|el| matches!(el, PathEl::MoveTo(_)))
        .count()
}
