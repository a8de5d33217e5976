//! Style resolution from render intent and options.

use peniko::Color;
use roughink_core::{Options, RenderIntent};

/// Whether a path is stroked or filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    Stroke,
    Fill,
}

/// Concrete paint directive for one path.
#[derive(Debug, Clone, Copy)]
pub enum Paint {
    Stroke { color: Color, width: f64 },
    Fill { color: Color },
}

impl Paint {
    pub fn mode(&self) -> PaintMode {
        match self {
            Paint::Stroke { .. } => PaintMode::Stroke,
            Paint::Fill { .. } => PaintMode::Fill,
        }
    }

    pub fn color(&self) -> Color {
        match *self {
            Paint::Stroke { color, .. } | Paint::Fill { color } => color,
        }
    }

    /// Stroke width, or `None` for fills.
    pub fn width(&self) -> Option<f64> {
        match *self {
            Paint::Stroke { width, .. } => Some(width),
            Paint::Fill { .. } => None,
        }
    }
}

/// Fill weight with the "auto" sentinel resolved: negative means half the stroke width.
pub fn resolved_fill_weight(options: &Options) -> f64 {
    if options.fill_weight >= 0.0 {
        options.fill_weight
    } else {
        options.stroke_width / 2.0
    }
}

/// Width of the strokes that draw a sketch or pattern fill.
pub fn sketch_stroke_width(options: &Options) -> f64 {
    resolved_fill_weight(options).max(options.stroke_width / 2.0)
}

/// Map a render intent to a paint directive.
pub fn resolve_paint(intent: RenderIntent, options: &Options) -> Paint {
    match intent {
        RenderIntent::Path => Paint::Stroke {
            color: options.stroke_color(),
            width: options.stroke_width,
        },
        RenderIntent::FillSketch | RenderIntent::Path2DPattern => Paint::Stroke {
            color: options.fill_color(),
            width: sketch_stroke_width(options),
        },
        RenderIntent::FillPath | RenderIntent::Path2DFill => Paint::Fill {
            color: options.fill_color(),
        },
    }
}
