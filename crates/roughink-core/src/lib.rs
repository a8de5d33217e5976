//! RoughInk Core Library
//!
//! Platform-agnostic data structures and geometry for hand-drawn vector shapes:
//! operation sets produced by a sketch generator, the style options that drive
//! them, and the path building and transform utilities used at render time.

pub mod drawing;
pub mod geometry;
pub mod options;
pub mod path;
pub mod transform;

pub use drawing::{Drawable, Drawing, Generator};
pub use geometry::{Operation, OperationSet, RenderIntent};
pub use options::{FillStyle, Options, OptionsError, OptionsResult, SerializableColor};
pub use path::{build_path, subpath_count};
pub use transform::CenteredTransform;
