//! Drawings and the sketch generator boundary.

use crate::geometry::OperationSet;
use crate::options::Options;
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Operation sets plus the options they were generated with, for one logical shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub sets: Vec<OperationSet>,
    pub options: Options,
}

impl Drawing {
    /// Create a new drawing.
    pub fn new(sets: Vec<OperationSet>, options: Options) -> Self {
        Self { sets, options }
    }

    /// Create a drawing with no operation sets.
    pub fn empty(options: Options) -> Self {
        Self::new(Vec::new(), options)
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Logical shape descriptor handed to a sketch generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Drawable {
    Line {
        from: Point,
        to: Point,
    },
    Rectangle {
        origin: Point,
        size: Size,
    },
    Ellipse {
        center: Point,
        size: Size,
    },
    Circle {
        center: Point,
        diameter: f64,
    },
    /// Open polyline through the points.
    LinearPath(Vec<Point>),
    /// Closed polygon through the points.
    Polygon(Vec<Point>),
    /// Elliptical arc between two angles in radians.
    Arc {
        center: Point,
        size: Size,
        start: f64,
        stop: f64,
        closed: bool,
    },
    /// Smooth curve through the points.
    Curve(Vec<Point>),
    /// Rectangle filling the whole container.
    FullRectangle,
    /// Circle inscribed in the container.
    FullCircle,
}

impl Drawable {
    /// Resolve container-relative descriptors against the container size.
    pub fn resolve(&self, size: Size) -> Drawable {
        match self {
            Drawable::FullRectangle => Drawable::Rectangle {
                origin: Point::ZERO,
                size,
            },
            Drawable::FullCircle => Drawable::Circle {
                center: Point::new(size.width / 2.0, size.height / 2.0),
                diameter: size.width.min(size.height),
            },
            other => other.clone(),
        }
    }
}

/// Produces drawings from shape descriptors.
///
/// Generators are passed explicitly to whatever renders a sketch. Returning
/// `None` means no drawing was produced for the descriptor, which callers
/// treat as an empty contribution.
pub trait Generator {
    fn generate(&self, drawable: &Drawable, options: &Options, size: Size) -> Option<Drawing>;
}
