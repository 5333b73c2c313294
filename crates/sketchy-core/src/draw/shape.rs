//! Sketched shapes and the renderer that produces them.

use std::fmt;

use crate::{
    draw::{StyleConfig, SvgNode},
    geometry::{Bounds, Point},
};

/// The geometric request a shape was rendered from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// A segment between two points
    Line { from: Point, to: Point },
    /// An axis-aligned rectangle
    Rectangle(Bounds),
}

/// A rendered, attachable shape.
///
/// Keeps the primitive and style it was produced from next to the SVG node,
/// so consumers can inspect what was drawn without parsing SVG.
pub struct ShapeNode {
    primitive: Primitive,
    style: StyleConfig,
    node: SvgNode,
}

impl ShapeNode {
    pub fn new(primitive: Primitive, style: StyleConfig, node: SvgNode) -> Self {
        Self {
            primitive,
            style,
            node,
        }
    }

    pub fn primitive(&self) -> Primitive {
        self.primitive
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the rendered SVG node.
    pub fn node(&self) -> &SvgNode {
        &self.node
    }
}

impl fmt::Debug for ShapeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeNode")
            .field("primitive", &self.primitive)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

/// Produces hand-drawn shapes.
///
/// Implementations own whatever randomness they use, hence `&mut self`.
/// Decorations only decide which primitive to request with which style.
pub trait ShapeRenderer {
    /// Renders a sketched line segment from `from` to `to`.
    fn line(&mut self, from: Point, to: Point, style: &StyleConfig) -> ShapeNode;

    /// Renders a sketched rectangle covering `bounds`.
    fn rectangle(&mut self, bounds: Bounds, style: &StyleConfig) -> ShapeNode;
}
