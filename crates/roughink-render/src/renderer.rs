//! Render coordination and the backend seam.

use crate::style::{Paint, resolve_paint};
use kurbo::BezPath;
use peniko::Color;
use roughink_core::{Drawing, RenderIntent, build_path};

/// One styled contribution of a drawing.
#[derive(Debug, Clone)]
pub struct StyledPath {
    /// Intent of the operation set this path came from.
    pub intent: RenderIntent,
    pub path: BezPath,
    pub paint: Paint,
}

/// Builds styled paths from drawings.
///
/// Holds no state between calls; every render returns a fresh sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathRenderer;

impl PathRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render every operation set of `drawing`, in order.
    ///
    /// Later entries are painted over earlier ones.
    pub fn render(&self, drawing: &Drawing) -> Vec<StyledPath> {
        if drawing.is_empty() {
            log::debug!("Drawing has no operation sets");
            return Vec::new();
        }
        log::debug!("Rendering drawing with {} operation sets", drawing.sets.len());
        drawing
            .sets
            .iter()
            .map(|set| {
                log::trace!(
                    "{:?} set with {} operations in {} subpaths",
                    set.intent,
                    set.operations.len(),
                    set.move_count()
                );
                StyledPath {
                    intent: set.intent,
                    path: build_path(&set.operations),
                    paint: resolve_paint(set.intent, &drawing.options),
                }
            })
            .collect()
    }

    /// Render a drawing the generator may not have produced.
    pub fn render_optional(&self, drawing: Option<&Drawing>) -> Vec<StyledPath> {
        drawing.map(|d| self.render(d)).unwrap_or_default()
    }
}

/// Trait for rendering backends that consume styled paths.
pub trait PaintBackend {
    /// Stroke `path` with the given color and width.
    fn stroke(&mut self, path: &BezPath, color: Color, width: f64);

    /// Fill the interior of `path`.
    fn fill(&mut self, path: &BezPath, color: Color);
}

/// Paint styled paths onto a backend in order.
pub fn paint_all<B: PaintBackend + ?Sized>(backend: &mut B, paths: &[StyledPath]) {
    for styled in paths {
        match styled.paint {
            Paint::Stroke { color, width } => backend.stroke(&styled.path, color, width),
            Paint::Fill { color } => backend.fill(&styled.path, color),
        }
    }
}
