//! Path construction operations and operation sets.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A single path construction instruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    /// Start a new subpath at `point`.
    Move(Point),
    /// Straight segment from the current point.
    LineTo(Point),
    /// Cubic Bézier segment ending at `point`.
    BezierCurveTo {
        point: Point,
        control_point1: Point,
        control_point2: Point,
    },
    /// Quadratic Bézier segment ending at `point`.
    QuadraticCurveTo { point: Point, control_point: Point },
}

impl Operation {
    /// The point this operation leaves as the current point.
    pub fn end_point(&self) -> Point {
        match *self {
            Operation::Move(p) | Operation::LineTo(p) => p,
            Operation::BezierCurveTo { point, .. } | Operation::QuadraticCurveTo { point, .. } => {
                point
            }
        }
    }

    /// Whether this operation opens a new subpath.
    pub fn is_move(&self) -> bool {
        matches!(self, Operation::Move(_))
    }
}

/// How a set of operations should be painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderIntent {
    /// Plain stroked outline.
    Path,
    /// Fill drawn as repeated sketchy strokes.
    FillSketch,
    /// Solid fill.
    FillPath,
    /// Solid fill of a path-described shape.
    Path2DFill,
    /// Pattern fill of a path-described shape, drawn as strokes.
    Path2DPattern,
}

/// A group of operations sharing one render intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationSet {
    #[serde(rename = "type")]
    pub intent: RenderIntent,
    pub operations: Vec<Operation>,
}

impl OperationSet {
    /// Create a new operation set.
    pub fn new(intent: RenderIntent, operations: Vec<Operation>) -> Self {
        Self { intent, operations }
    }

    /// Number of `Move` operations, i.e. the subpaths this set opens.
    pub fn move_count(&self) -> usize {
        self.operations.iter().filter(|op| op.is_move()).count()
    }
}
