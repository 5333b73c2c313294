//! Drawing parameters and the shape renderer contract.
//!
//! Decorations never produce geometry themselves. They compute *what* to draw
//! (a line between two points, a rectangle) and *how* it should look
//! ([`StyleConfig`]) and hand both to a [`ShapeRenderer`], which returns a
//! [`ShapeNode`] ready to be attached to an overlay surface.

mod fill;
mod layer;
mod shape;
mod stroke;
mod style;

pub use fill::{FillDefinition, FillPattern};
pub use layer::{LayeredOutput, StackLayer, SvgNode};
pub use shape::{Primitive, ShapeNode, ShapeRenderer};
pub use stroke::StrokeDefinition;
pub use style::StyleConfig;
