//! Vello-based paint backend.

use crate::renderer::PaintBackend;
use kurbo::{Affine, BezPath, Stroke};
use peniko::{Color, Fill};
use vello::Scene;

/// Records styled paths into a Vello scene.
pub struct VelloBackend {
    scene: Scene,
    /// Transform applied to every path (e.g. container placement or HiDPI scale).
    transform: Affine,
}

impl Default for VelloBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloBackend {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            transform: Affine::IDENTITY,
        }
    }

    /// Set the transform applied to subsequent paths.
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take the scene, leaving an empty one for the next render.
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Discard everything recorded so far.
    pub fn reset(&mut self) {
        self.scene.reset();
    }
}

impl PaintBackend for VelloBackend {
    fn stroke(&mut self, path: &BezPath, color: Color, width: f64) {
        let stroke = Stroke::new(width);
        self.scene.stroke(&stroke, self.transform, color, None, path);
    }

    fn fill(&mut self, path: &BezPath, color: Color) {
        self.scene.fill(Fill::NonZero, self.transform, color, None, path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{PathRenderer, paint_all};
    use kurbo::Point;
    use roughink_core::{Drawing, Operation, OperationSet, Options, RenderIntent};

    #[test]
    fn test_backend_creation() {
        let backend = VelloBackend::new();
        assert!(backend.scene().encoding().is_empty());
    }

    #[test]
    fn test_paint_drawing() {
        let drawing = Drawing::new(
            vec![OperationSet::new(
                RenderIntent::Path,
                vec![
                    Operation::Move(Point::new(0.0, 0.0)),
                    Operation::LineTo(Point::new(10.0, 0.0)),
                ],
            )],
            Options::default(),
        );
        let mut backend = VelloBackend::new();
        paint_all(&mut backend, &PathRenderer::new().render(&drawing));
        assert!(!backend.scene().encoding().is_empty());

        backend.reset();
        assert!(backend.scene().encoding().is_empty());
    }
}
