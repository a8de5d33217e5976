//! A set of drawables sharing one style, rendered through a generator.

use crate::renderer::{PathRenderer, StyledPath};
use kurbo::Size;
use roughink_core::{Drawable, Generator, Options};

/// Shapes to sketch and the options to sketch them with.
#[derive(Debug, Clone, Default)]
pub struct Sketch {
    pub options: Options,
    pub drawables: Vec<Drawable>,
}

impl Sketch {
    /// Create an empty sketch with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the options.
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Append a drawable.
    pub fn draw(mut self, drawable: Drawable) -> Self {
        self.drawables.push(drawable);
        self
    }

    /// Append a rectangle covering the container.
    pub fn rectangle(self) -> Self {
        self.draw(Drawable::FullRectangle)
    }

    /// Append a circle inscribed in the container.
    pub fn circle(self) -> Self {
        self.draw(Drawable::FullCircle)
    }

    /// Generate and render every drawable for a container of `size`.
    ///
    /// Drawables the generator produces nothing for are skipped.
    pub fn render(&self, generator: &dyn Generator, size: Size) -> Vec<StyledPath> {
        let renderer = PathRenderer::new();
        self.drawables
            .iter()
            .flat_map(|drawable| {
                let drawing = generator.generate(drawable, &self.options, size);
                if drawing.is_none() {
                    log::debug!("Generator produced no drawing for {:?}", drawable);
                }
                renderer.render_optional(drawing.as_ref())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::PaintMode;
    use kurbo::Point;
    use roughink_core::{CenteredTransform, Drawing, Operation, OperationSet, RenderIntent};

    /// Outlines rectangles and fills them solid; produces nothing for other shapes.
    struct RectOnlyGenerator;

    impl Generator for RectOnlyGenerator {
        fn generate(&self, drawable: &Drawable, options: &Options, size: Size) -> Option<Drawing> {
            let Drawable::Rectangle { origin, size } = drawable.resolve(size) else {
                return None;
            };
            let corners = [
                origin,
                Point::new(origin.x + size.width, origin.y),
                Point::new(origin.x + size.width, origin.y + size.height),
                Point::new(origin.x, origin.y + size.height),
                origin,
            ];
            let operations: Vec<Operation> = std::iter::once(Operation::Move(corners[0]))
                .chain(corners[1..].iter().map(|&p| Operation::LineTo(p)))
                .collect();
            Some(Drawing::new(
                vec![
                    OperationSet::new(RenderIntent::FillPath, operations.clone()),
                    OperationSet::new(RenderIntent::Path, operations),
                ],
                options.clone(),
            ))
        }
    }

    #[test]
    fn test_empty_sketch() {
        let rendered = Sketch::new().render(&RectOnlyGenerator, Size::new(100.0, 100.0));
        assert!(rendered.is_empty());
    }

    #[test]
    fn test_full_rectangle_covers_container() {
        let rendered = Sketch::new()
            .rectangle()
            .render(&RectOnlyGenerator, Size::new(120.0, 80.0));
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].paint.mode(), PaintMode::Fill);
        assert_eq!(rendered[1].paint.mode(), PaintMode::Stroke);

        let bounds = rendered[1].path.bounds().unwrap();
        assert!((bounds.width() - 120.0).abs() < f64::EPSILON);
        assert!((bounds.height() - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_drawings_are_skipped() {
        let rendered = Sketch::new()
            .circle()
            .rectangle()
            .circle()
            .render(&RectOnlyGenerator, Size::new(50.0, 50.0));
        assert_eq!(rendered.len(), 2);
    }

    #[test]
    fn test_options_reach_paint() {
        let rendered = Sketch::new()
            .with_options(Options::default().with_stroke_width(6.0))
            .rectangle()
            .render(&RectOnlyGenerator, Size::new(10.0, 10.0));
        assert_eq!(rendered[1].paint.width(), Some(6.0));
    }

    #[test]
    fn test_render_is_repeatable() {
        let sketch = Sketch::new().rectangle().rectangle();
        let generator = RectOnlyGenerator;
        let small = sketch.render(&generator, Size::new(10.0, 10.0));
        let large = sketch.render(&generator, Size::new(40.0, 40.0));
        assert_eq!(small.len(), 4);
        assert_eq!(large.len(), 4);
        let bounds = large[3].path.bounds().unwrap();
        assert!((bounds.width() - 40.0).abs() < f64::EPSILON);
    }
}
