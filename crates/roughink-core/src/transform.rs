//! Transforms that pivot around a path's own bounding box.

use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Bounding-box-centered transforms on path geometry.
///
/// Every operation measures the path's current bounds, moves the bounds center
/// to the origin, applies the transform, and moves it back. A path without any
/// segments has no bounds and is left unchanged.
pub trait CenteredTransform {
    /// Axis-aligned box over all points including curve control points, or
    /// `None` if the path has no segments.
    fn bounds(&self) -> Option<Rect>;

    /// Apply `transform` pivoting on the bounds center.
    fn apply_centered(&mut self, transform: Affine) -> &mut Self;

    /// Non-uniform scale around the bounds center.
    fn scale_centered(&mut self, sx: f64, sy: f64) -> &mut Self;

    /// Translate by `delta`.
    fn offset(&mut self, delta: Vec2) -> &mut Self;

    /// Translate so the bounds center lands on `to`.
    fn move_center(&mut self, to: Point) -> &mut Self;

    /// Uniform scale by `min(scale_w, max(scale_h, 0))`.
    ///
    /// This is not the usual aspect-preserving fit: a negative height ratio
    /// is clamped to zero instead of being taken as the tighter constraint.
    /// Use [`CenteredTransform::fit_into_aspect`] for `min(scale_w, scale_h)`.
    fn fit_into(&mut self, rect: Rect) -> &mut Self;

    /// Uniform scale by `min(scale_w, scale_h)`.
    fn fit_into_aspect(&mut self, rect: Rect) -> &mut Self;
}

impl CenteredTransform for BezPath {
    fn bounds(&self) -> Option<Rect> {
        self.segments().next()?;
        Some(self.control_box())
    }

    fn apply_centered(&mut self, transform: Affine) -> &mut Self {
        let Some(bounds) = self.bounds() else {
            return self;
        };
        let center = bounds.center().to_vec2();
        let xform = Affine::translate(center) * transform * Affine::translate(-center);
        self.apply_affine(xform);
        self
    }

    fn scale_centered(&mut self, sx: f64, sy: f64) -> &mut Self {
        if !sx.is_finite() || !sy.is_finite() {
            log::debug!("Ignoring non-finite scale ({}, {})", sx, sy);
            return self;
        }
        self.apply_centered(Affine::scale_non_uniform(sx, sy))
    }

    fn offset(&mut self, delta: Vec2) -> &mut Self {
        if !delta.is_finite() {
            log::debug!("Ignoring non-finite offset {:?}", delta);
            return self;
        }
        self.apply_centered(Affine::translate(delta))
    }

    fn move_center(&mut self, to: Point) -> &mut Self {
        let Some(bounds) = self.bounds() else {
            return self;
        };
        // Center relative to the box origin, target shifted into the same frame.
        let center = Point::new(bounds.width() / 2.0, bounds.height() / 2.0);
        let zeroed_to = Point::new(to.x - bounds.x0, to.y - bounds.y0);
        self.offset(zeroed_to - center)
    }

    fn fit_into(&mut self, rect: Rect) -> &mut Self {
        let Some((scale_w, scale_h)) = fit_ratios(self, rect) else {
            return self;
        };
        let factor = scale_w.min(scale_h.max(0.0));
        self.scale_centered(factor, factor)
    }

    fn fit_into_aspect(&mut self, rect: Rect) -> &mut Self {
        let Some((scale_w, scale_h)) = fit_ratios(self, rect) else {
            return self;
        };
        let factor = scale_w.min(scale_h);
        self.scale_centered(factor, factor)
    }
}

/// Width and height ratios of `rect` to the path bounds, if both are finite.
fn fit_ratios(path: &BezPath, rect: Rect) -> Option<(f64, f64)> {
    let bounds = path.bounds()?;
    if bounds.width() == 0.0 || bounds.height() == 0.0 {
        log::debug!("Degenerate bounds {:?}, skipping fit", bounds);
        return None;
    }
    let scale_w = rect.width() / bounds.width();
    let scale_h = rect.height() / bounds.height();
    if !scale_w.is_finite() || !scale_h.is_finite() {
        log::debug!("Non-finite fit ratios ({}, {})", scale_w, scale_h);
        return None;
    }
    Some((scale_w, scale_h))
}
