//! RoughInk Render Library
//!
//! Turns drawings into styled path geometry for a rendering backend.
//! A Vello backend is available behind the `vello-renderer` feature.

mod renderer;
mod sketch;
mod style;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{PaintBackend, PathRenderer, StyledPath, paint_all};
pub use sketch::Sketch;
pub use style::{Paint, PaintMode, resolve_paint, resolved_fill_weight, sketch_stroke_width};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloBackend;
