//! Decoration strategies.
//!
//! A decoration knows how to draw one category of element into that
//! element's overlay surface. The set of decorations is closed and
//! enumerated by [`Decoration`]; each variant wraps a concrete type
//! implementing [`Decorate`].
//!
//! Every draw fully replaces the previous content of the overlay. Geometry is
//! read from the document on each draw, while resolved colors are kept by the
//! decoration instance once they have been read.

mod border;
mod fill;
mod menu;
mod page;

pub use border::{DefaultBorder, LabelBorder};
pub use fill::PatternFill;
pub use menu::MenuGlyph;
pub use page::RuledPage;

use log::trace;

use sketchy_core::{
    color::Color,
    document::{DocumentError, ElementId, HostDocument},
    draw::{ShapeNode, ShapeRenderer, StackLayer, StrokeDefinition, StyleConfig},
    geometry::{Bounds, Insets, Point, Size},
};

use crate::surface::ensure_surface;

/// Distance between an outlined box and the edge of its overlay.
///
/// Overlays of border-style decorations are this much larger than the target
/// on every side, so that a bowing stroke is not clipped.
pub const BORDER_MARGIN: f32 = 10.0;

/// Drawing behavior of a decoration.
pub trait Decorate {
    /// Returns the element the decoration is attached to.
    fn element(&self) -> ElementId;

    /// Draws the decoration, replacing whatever the overlay held before.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] if an element handle is stale.
    fn draw(
        &mut self,
        document: &mut dyn HostDocument,
        renderer: &mut dyn ShapeRenderer,
    ) -> Result<(), DocumentError>;
}

/// Discriminant of a [`Decoration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    LabelBorder,
    DefaultBorder,
    HachureFill,
    ZigZagFill,
    ParametrizedFill,
    MenuGlyph,
    RuledPage,
}

impl DecorationKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::LabelBorder => "label-border",
            Self::DefaultBorder => "default-border",
            Self::HachureFill => "hachure-fill",
            Self::ZigZagFill => "zigzag-fill",
            Self::ParametrizedFill => "parametrized-fill",
            Self::MenuGlyph => "menu-glyph",
            Self::RuledPage => "ruled-page",
        }
    }
}

/// A decoration bound to one element.
#[derive(Debug, Clone)]
pub enum Decoration {
    LabelBorder(LabelBorder),
    DefaultBorder(DefaultBorder),
    HachureFill(PatternFill),
    ZigZagFill(PatternFill),
    ParametrizedFill(PatternFill),
    MenuGlyph(MenuGlyph),
    RuledPage(RuledPage),
}

impl Decoration {
    pub fn kind(&self) -> DecorationKind {
        match self {
            Self::LabelBorder(_) => DecorationKind::LabelBorder,
            Self::DefaultBorder(_) => DecorationKind::DefaultBorder,
            Self::HachureFill(_) => DecorationKind::HachureFill,
            Self::ZigZagFill(_) => DecorationKind::ZigZagFill,
            Self::ParametrizedFill(_) => DecorationKind::ParametrizedFill,
            Self::MenuGlyph(_) => DecorationKind::MenuGlyph,
            Self::RuledPage(_) => DecorationKind::RuledPage,
        }
    }

    fn as_decorate(&self) -> &dyn Decorate {
        match self {
            Self::LabelBorder(decoration) => decoration,
            Self::DefaultBorder(decoration) => decoration,
            Self::HachureFill(decoration)
            | Self::ZigZagFill(decoration)
            | Self::ParametrizedFill(decoration) => decoration,
            Self::MenuGlyph(decoration) => decoration,
            Self::RuledPage(decoration) => decoration,
        }
    }

    fn as_decorate_mut(&mut self) -> &mut dyn Decorate {
        match self {
            Self::LabelBorder(decoration) => decoration,
            Self::DefaultBorder(decoration) => decoration,
            Self::HachureFill(decoration)
            | Self::ZigZagFill(decoration)
            | Self::ParametrizedFill(decoration) => decoration,
            Self::MenuGlyph(decoration) => decoration,
            Self::RuledPage(decoration) => decoration,
        }
    }
}

impl Decorate for Decoration {
    fn element(&self) -> ElementId {
        self.as_decorate().element()
    }

    fn draw(
        &mut self,
        document: &mut dyn HostDocument,
        renderer: &mut dyn ShapeRenderer,
    ) -> Result<(), DocumentError> {
        self.as_decorate_mut().draw(document, renderer)
    }
}

/// Style of the hand-drawn outline shared by borders and fills.
fn border_style() -> StyleConfig {
    let stroke = StrokeDefinition::new(Color::new("#333").expect("Invalid color"), 2.0);
    StyleConfig::new(stroke)
        .with_roughness(2.5)
        .with_bowing(1.5)
}

/// Overlay placement for a box outlined [`BORDER_MARGIN`] outside of it.
///
/// `offset` is the top-left corner of the box in the overlay's positioning
/// context. Returns the overlay bounds and the rectangle to draw, in overlay
/// coordinates.
fn margin_placement(offset: Point, size: Size) -> (Bounds, Bounds) {
    let overlay =
        Bounds::new_from_top_left(offset, size).add_padding(Insets::uniform(BORDER_MARGIN));
    let outline = Bounds::new_from_top_left(Point::new(BORDER_MARGIN, BORDER_MARGIN), size);
    (overlay, outline)
}

/// Replaces the overlay content of `element` with `shapes`.
///
/// The overlay is created first if needed, then cleared, placed at `bounds`
/// on `layer`, and filled in order.
fn replace_overlay(
    document: &mut dyn HostDocument,
    element: ElementId,
    bounds: Bounds,
    layer: StackLayer,
    shapes: Vec<ShapeNode>,
) -> Result<(), DocumentError> {
    let surface = ensure_surface(document, element)?;
    surface.clear();
    surface.set_offset(bounds.min_point());
    surface.set_size(bounds.to_size());
    surface.set_layer(layer);
    trace!(
        element:% = element,
        shapes = shapes.len(),
        layer = layer.name();
        "Replacing overlay content"
    );
    for shape in shapes {
        surface.append(shape);
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::{cell::RefCell, rc::Rc};

    use svg::node::element::Group;

    use sketchy_core::{
        draw::{Primitive, ShapeNode, ShapeRenderer, StyleConfig},
        geometry::{Bounds, Point},
    };

    /// A renderer that records every request and draws nothing.
    #[derive(Debug, Default, Clone)]
    pub struct RecordingRenderer {
        requests: Rc<RefCell<Vec<(Primitive, StyleConfig)>>>,
    }

    impl RecordingRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn requests(&self) -> Vec<(Primitive, StyleConfig)> {
            self.requests.borrow().clone()
        }

        pub fn clear(&self) {
            self.requests.borrow_mut().clear();
        }

        fn record(&self, primitive: Primitive, style: &StyleConfig) -> ShapeNode {
            self.requests.borrow_mut().push((primitive, style.clone()));
            ShapeNode::new(primitive, style.clone(), Box::new(Group::new()))
        }
    }

    impl ShapeRenderer for RecordingRenderer {
        fn line(&mut self, from: Point, to: Point, style: &StyleConfig) -> ShapeNode {
            self.record(Primitive::Line { from, to }, style)
        }

        fn rectangle(&mut self, bounds: Bounds, style: &StyleConfig) -> ShapeNode {
            self.record(Primitive::Rectangle(bounds), style)
        }
    }
}
