//! The host document capability.
//!
//! Decorations are drawn into a document they do not own. This module
//! describes what the decoration pipeline needs from that document:
//!
//! - [`HostDocument`]: element lookup, geometry, computed style reads,
//!   positioning and background writes, and overlay attachment
//! - [`ElementId`]: a non-owning handle to an element
//! - [`OverlaySurface`]: the presentational vector layer attached to a
//!   decorated element
//! - [`DocumentError`]: the failure raised for stale element handles

use std::{fmt, str::FromStr};

use svg::node::element as svg_element;
use thiserror::Error;

use crate::{
    color::Color,
    draw::{ShapeNode, StackLayer, SvgNode},
    geometry::{Bounds, Point, Size},
    identifier::Id,
};

/// Non-owning handle to an element of a host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element#{}", self.0)
    }
}

/// Errors raised by a host document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("unknown element {0}")]
    UnknownElement(ElementId),
}

/// CSS layout positioning scheme of an element.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Positioning {
    /// Not positioned; absolutely-positioned children align to an ancestor
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl Positioning {
    /// Returns true if the element establishes a positioning context.
    pub fn is_positioned(self) -> bool {
        self != Self::Static
    }

    pub fn to_css_value(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Relative => "relative",
            Self::Absolute => "absolute",
            Self::Fixed => "fixed",
            Self::Sticky => "sticky",
        }
    }
}

impl FromStr for Positioning {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(Self::Static),
            "relative" => Ok(Self::Relative),
            "absolute" => Ok(Self::Absolute),
            "fixed" => Ok(Self::Fixed),
            "sticky" => Ok(Self::Sticky),
            _ => Err(format!(
                "invalid position `{s}`, valid values: static, relative, absolute, fixed, sticky"
            )),
        }
    }
}

/// Color-valued computed style properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorProperty {
    /// `background-color`
    Background,
    /// `color`
    Foreground,
}

/// A presentational vector layer attached as the last child of an element.
///
/// The surface never takes part in hit testing: pointer events always pass
/// through to the element underneath. Its placement is relative to the
/// element's positioning context.
#[derive(Debug, Default)]
pub struct OverlaySurface {
    size: Size,
    offset: Point,
    layer: StackLayer,
    children: Vec<ShapeNode>,
}

impl OverlaySurface {
    /// Creates an empty, zero-sized surface at the element's origin.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the `(left, top)` offset of the surface.
    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn layer(&self) -> StackLayer {
        self.layer
    }

    /// Overlays are purely presentational.
    pub fn accepts_pointer_events(&self) -> bool {
        false
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    pub fn set_layer(&mut self, layer: StackLayer) {
        self.layer = layer;
    }

    /// Removes every shape from the surface.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Appends a shape as the last child of the surface.
    pub fn append(&mut self, shape: ShapeNode) {
        self.children.push(shape);
    }

    pub fn children(&self) -> &[ShapeNode] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Renders the surface as a nested `<svg>` placed at `origin + offset`.
    ///
    /// `origin` is the page position of the element's positioning context.
    pub fn to_svg(&self, origin: Point) -> SvgNode {
        let position = origin.add_point(self.offset);
        let mut surface = svg_element::SVG::new()
            .set("x", position.x())
            .set("y", position.y())
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("overflow", "visible")
            .set("pointer-events", "none")
            .set("data-layer", self.layer.name());
        if let Some(z_index) = self.layer.z_index() {
            surface = surface.set("style", format!("z-index:{z_index}"));
        }

        for child in &self.children {
            surface = surface.add(child.node().clone());
        }

        Box::new(surface)
    }
}

/// What the decoration pipeline needs from the document it decorates.
///
/// Lookups that may legitimately find nothing return `Option`; operations on
/// a given element fail only when the handle does not belong to the document.
pub trait HostDocument {
    /// Returns the document root (`body`).
    fn root(&self) -> ElementId;

    /// Finds the element whose `id` attribute equals `id`.
    fn element_by_id(&self, id: &str) -> Option<ElementId>;

    /// Returns every element with the given tag, in tree order.
    fn elements_by_tag(&self, tag: Id) -> Vec<ElementId>;

    /// Returns every element carrying the given class, in tree order.
    fn elements_by_class(&self, class: Id) -> Vec<ElementId>;

    /// Returns the lowercased tag name of an element.
    fn tag_name(&self, element: ElementId) -> Result<Id, DocumentError>;

    fn has_class(&self, element: ElementId, class: Id) -> Result<bool, DocumentError>;

    fn attribute(&self, element: ElementId, name: &str) -> Result<Option<&str>, DocumentError>;

    /// Returns the element's offset box: position relative to its nearest
    /// positioned ancestor, and its own size.
    fn offset_bounds(&self, element: ElementId) -> Result<Bounds, DocumentError>;

    /// Returns the nearest positioned ancestor, or the root.
    ///
    /// The root itself has no offset parent.
    fn offset_parent(&self, element: ElementId) -> Result<Option<ElementId>, DocumentError>;

    fn computed_color(
        &self,
        element: ElementId,
        property: ColorProperty,
    ) -> Result<Color, DocumentError>;

    fn positioning(&self, element: ElementId) -> Result<Positioning, DocumentError>;

    fn set_positioning(
        &mut self,
        element: ElementId,
        positioning: Positioning,
    ) -> Result<(), DocumentError>;

    fn set_background_color(&mut self, element: ElementId, color: Color)
    -> Result<(), DocumentError>;

    /// Returns the element's direct-child overlay surface, if any.
    fn overlay(&self, element: ElementId) -> Result<Option<&OverlaySurface>, DocumentError>;

    fn overlay_mut(
        &mut self,
        element: ElementId,
    ) -> Result<Option<&mut OverlaySurface>, DocumentError>;

    /// Attaches `surface` as the element's last child and returns it.
    fn attach_overlay(
        &mut self,
        element: ElementId,
        surface: OverlaySurface,
    ) -> Result<&mut OverlaySurface, DocumentError>;
}
