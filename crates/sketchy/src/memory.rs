//! An in-memory host document.
//!
//! [`MemoryDocument`] is a small element tree with laid-out boxes and the
//! handful of computed style properties the decorations read. It is built
//! from a [`PageSpec`], typically deserialized from a TOML page description:
//!
//! ```toml
//! [viewport]
//! width = 800
//! height = 600
//!
//! [body]
//! background = "white"
//!
//! [[body.children]]
//! tag = "nav"
//! id = "navbar"
//! width = 800
//! height = 60
//! ```
//!
//! Element coordinates are relative to the parent's box. There is no layout
//! engine: boxes stay where the page puts them, and resizing the viewport only
//! resizes the root.

use indexmap::IndexMap;
use log::trace;
use serde::Deserialize;

use sketchy_core::{
    color::Color,
    document::{ColorProperty, DocumentError, ElementId, HostDocument, OverlaySurface, Positioning},
    geometry::{Bounds, Point, Size},
    identifier::Id,
};

use crate::error::SketchyError;

/// Largest accepted width, height or coordinate magnitude, in page units.
pub const MAX_DIMENSION: f32 = 100_000.0;

/// Checks a width or height: finite, non-negative and at most [`MAX_DIMENSION`].
fn check_extent(what: &str, value: f32) -> Result<f32, SketchyError> {
    if value.is_finite() && (0.0..=MAX_DIMENSION).contains(&value) {
        Ok(value)
    } else {
        Err(SketchyError::Page(format!(
            "invalid {what} `{value}`, expected a number between 0 and {MAX_DIMENSION}"
        )))
    }
}

/// Checks an offset: finite with a magnitude of at most [`MAX_DIMENSION`].
fn check_offset(what: &str, value: f32) -> Result<f32, SketchyError> {
    if value.is_finite() && value.abs() <= MAX_DIMENSION {
        Ok(value)
    } else {
        Err(SketchyError::Page(format!(
            "invalid {what} `{value}`, expected a magnitude of at most {MAX_DIMENSION}"
        )))
    }
}

fn check_viewport(viewport: Size) -> Result<Size, SketchyError> {
    Ok(Size::new(
        check_extent("viewport width", viewport.width())?,
        check_extent("viewport height", viewport.height())?,
    ))
}

/// Viewport dimensions of a page.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewportSpec {
    width: f32,
    height: f32,
}

impl ViewportSpec {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn to_size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// A page description: the viewport and the `body` element tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageSpec {
    viewport: ViewportSpec,
    #[serde(default)]
    body: ElementSpec,
}

impl PageSpec {
    pub fn new(viewport: ViewportSpec, body: ElementSpec) -> Self {
        Self { viewport, body }
    }

    pub fn viewport(&self) -> ViewportSpec {
        self.viewport
    }

    pub fn body(&self) -> &ElementSpec {
        &self.body
    }
}

/// Description of one element and its subtree.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElementSpec {
    tag: String,
    id: Option<String>,
    class: Vec<String>,
    attributes: IndexMap<String, String>,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    position: Option<String>,
    background: Option<String>,
    color: Option<String>,
    text: Option<String>,
    children: Vec<ElementSpec>,
}

impl ElementSpec {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class.push(class.to_string());
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    /// Sets the box, relative to the parent's box.
    pub fn with_bounds(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_position(mut self, position: Positioning) -> Self {
        self.position = Some(position.to_css_value().to_string());
        self
    }

    pub fn with_background(mut self, color: &str) -> Self {
        self.background = Some(color.to_string());
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[ElementSpec] {
        &self.children
    }
}

/// Element style as parsed from an [`ElementSpec`].
struct ParsedStyle {
    positioning: Positioning,
    background: Color,
    foreground: Option<Color>,
}

impl ParsedStyle {
    fn from_spec(spec: &ElementSpec) -> Result<Self, SketchyError> {
        let positioning = spec
            .position
            .as_deref()
            .map(str::parse::<Positioning>)
            .transpose()
            .map_err(SketchyError::Page)?
            .unwrap_or_default();

        let background = spec
            .background
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| SketchyError::Page(format!("invalid background: {err}")))?
            .unwrap_or_else(Color::transparent);

        let foreground = spec
            .color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| SketchyError::Page(format!("invalid color: {err}")))?;

        Ok(Self {
            positioning,
            background,
            foreground,
        })
    }
}

#[derive(Debug)]
struct Node {
    tag: Id,
    id: Option<String>,
    classes: Vec<Id>,
    attributes: IndexMap<String, String>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    /// Border box in page coordinates
    bounds: Bounds,
    positioning: Positioning,
    background: Color,
    /// Own `color`; `None` inherits from the parent
    foreground: Option<Color>,
    text: Option<String>,
    overlay: Option<OverlaySurface>,
}

impl Node {
    fn new(tag: Id, parent: Option<ElementId>, bounds: Bounds) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            attributes: IndexMap::new(),
            parent,
            children: Vec::new(),
            bounds,
            positioning: Positioning::Static,
            background: Color::transparent(),
            foreground: None,
            text: None,
            overlay: None,
        }
    }
}

/// An element tree held in memory.
#[derive(Debug)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
}

impl MemoryDocument {
    /// Creates a document holding an empty `body` sized to the viewport.
    pub fn new(viewport: Size) -> Self {
        let root = Node::new(
            Id::tag("body"),
            None,
            Bounds::new_from_top_left(Point::default(), viewport),
        );
        Self { nodes: vec![root] }
    }

    /// Builds a document from a page description.
    ///
    /// # Errors
    ///
    /// Returns [`SketchyError::Page`] for elements without a tag, a `body`
    /// with a different tag, invalid colors and positions, or sizes and
    /// offsets that are negative, not finite or above [`MAX_DIMENSION`].
    pub fn from_page(page: &PageSpec) -> Result<Self, SketchyError> {
        let viewport = check_viewport(page.viewport().to_size())?;
        let body = page.body();
        if !body.tag.is_empty() && !body.tag.eq_ignore_ascii_case("body") {
            return Err(SketchyError::Page(format!(
                "the page root must be `body`, found `{}`",
                body.tag
            )));
        }

        let mut document = Self::new(viewport);
        let root = document.root();
        let style = ParsedStyle::from_spec(body)?;
        {
            let node = &mut document.nodes[root.index()];
            node.id = body.id.clone();
            node.classes = body.class.iter().map(|class| Id::new(class)).collect();
            node.attributes = body.attributes.clone();
            node.positioning = style.positioning;
            node.background = style.background;
            node.foreground = style.foreground;
            node.text = body.text.clone();
        }

        for child in body.children() {
            document.append(root, child.clone())?;
        }

        Ok(document)
    }

    /// Appends `spec` and its subtree as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`SketchyError::Page`] for invalid element descriptions and
    /// [`SketchyError::Document`] if `parent` is not part of this document.
    pub fn append(
        &mut self,
        parent: ElementId,
        spec: ElementSpec,
    ) -> Result<ElementId, SketchyError> {
        let parent_bounds = self.node(parent)?.bounds;

        if spec.tag.trim().is_empty() {
            return Err(SketchyError::Page("element without a tag".to_string()));
        }
        let style = ParsedStyle::from_spec(&spec)?;
        let offset = Point::new(check_offset("x", spec.x)?, check_offset("y", spec.y)?);
        let size = Size::new(
            check_extent("width", spec.width)?,
            check_extent("height", spec.height)?,
        );

        let top_left = parent_bounds.min_point().add_point(offset);
        let bounds = Bounds::new_from_top_left(top_left, size);

        let element = ElementId::new(self.nodes.len());
        let mut node = Node::new(Id::tag(spec.tag.trim()), Some(parent), bounds);
        node.id = spec.id;
        node.classes = spec.class.iter().map(|class| Id::new(class)).collect();
        node.attributes = spec.attributes;
        node.positioning = style.positioning;
        node.background = style.background;
        node.foreground = style.foreground;
        node.text = spec.text;

        self.nodes.push(node);
        self.nodes[parent.index()].children.push(element);
        trace!(element:% = element, tag = spec.tag.as_str(); "Appended element");

        for child in spec.children {
            self.append(element, child)?;
        }

        Ok(element)
    }

    /// Resizes the viewport, which resizes the root element.
    ///
    /// # Errors
    ///
    /// Returns [`SketchyError::Page`] if either dimension is negative, not
    /// finite or above [`MAX_DIMENSION`]. The document is left unchanged.
    pub fn resize_viewport(&mut self, viewport: Size) -> Result<(), SketchyError> {
        let viewport = check_viewport(viewport)?;
        let root = &mut self.nodes[0];
        root.bounds = Bounds::new_from_top_left(root.bounds.min_point(), viewport);
        Ok(())
    }

    pub fn viewport(&self) -> Size {
        self.nodes[0].bounds.to_size()
    }

    /// Returns the element's border box in page coordinates.
    pub fn page_bounds(&self, element: ElementId) -> Result<Bounds, DocumentError> {
        Ok(self.node(element)?.bounds)
    }

    /// Moves or resizes an element's box, given in page coordinates.
    ///
    /// Descendants are not moved.
    pub fn set_page_bounds(
        &mut self,
        element: ElementId,
        bounds: Bounds,
    ) -> Result<(), DocumentError> {
        self.node_mut(element)?.bounds = bounds;
        Ok(())
    }

    pub fn parent(&self, element: ElementId) -> Result<Option<ElementId>, DocumentError> {
        Ok(self.node(element)?.parent)
    }

    pub fn children(&self, element: ElementId) -> Result<&[ElementId], DocumentError> {
        Ok(&self.node(element)?.children)
    }

    pub fn text(&self, element: ElementId) -> Result<Option<&str>, DocumentError> {
        Ok(self.node(element)?.text.as_deref())
    }

    /// Returns every element in tree order, starting with the root.
    pub fn tree_order(&self) -> Vec<ElementId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(element) = stack.pop() {
            order.push(element);
            stack.extend(self.nodes[element.index()].children.iter().rev().copied());
        }
        order
    }

    /// Returns the number of elements carrying an overlay surface.
    pub fn overlay_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.overlay.is_some()).count()
    }

    fn node(&self, element: ElementId) -> Result<&Node, DocumentError> {
        self.nodes
            .get(element.index())
            .ok_or(DocumentError::UnknownElement(element))
    }

    fn node_mut(&mut self, element: ElementId) -> Result<&mut Node, DocumentError> {
        self.nodes
            .get_mut(element.index())
            .ok_or(DocumentError::UnknownElement(element))
    }
}

impl HostDocument for MemoryDocument {
    fn root(&self) -> ElementId {
        ElementId::new(0)
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.tree_order()
            .into_iter()
            .find(|element| self.nodes[element.index()].id.as_deref() == Some(id))
    }

    fn elements_by_tag(&self, tag: Id) -> Vec<ElementId> {
        self.tree_order()
            .into_iter()
            .filter(|element| self.nodes[element.index()].tag == tag)
            .collect()
    }

    fn elements_by_class(&self, class: Id) -> Vec<ElementId> {
        self.tree_order()
            .into_iter()
            .filter(|element| self.nodes[element.index()].classes.contains(&class))
            .collect()
    }

    fn tag_name(&self, element: ElementId) -> Result<Id, DocumentError> {
        Ok(self.node(element)?.tag)
    }

    fn has_class(&self, element: ElementId, class: Id) -> Result<bool, DocumentError> {
        Ok(self.node(element)?.classes.contains(&class))
    }

    fn attribute(&self, element: ElementId, name: &str) -> Result<Option<&str>, DocumentError> {
        Ok(self.node(element)?.attributes.get(name).map(String::as_str))
    }

    fn offset_bounds(&self, element: ElementId) -> Result<Bounds, DocumentError> {
        let bounds = self.node(element)?.bounds;
        match self.offset_parent(element)? {
            Some(parent) => {
                let origin = self.nodes[parent.index()].bounds.min_point();
                Ok(bounds.translate(Point::new(-origin.x(), -origin.y())))
            }
            None => Ok(bounds),
        }
    }

    fn offset_parent(&self, element: ElementId) -> Result<Option<ElementId>, DocumentError> {
        let mut current = self.node(element)?.parent;
        while let Some(ancestor) = current {
            let node = &self.nodes[ancestor.index()];
            if node.positioning.is_positioned() || node.parent.is_none() {
                return Ok(Some(ancestor));
            }
            current = node.parent;
        }
        Ok(None)
    }

    fn computed_color(
        &self,
        element: ElementId,
        property: ColorProperty,
    ) -> Result<Color, DocumentError> {
        let node = self.node(element)?;
        match property {
            ColorProperty::Background => Ok(node.background),
            ColorProperty::Foreground => {
                let mut current = Some(node);
                while let Some(node) = current {
                    if let Some(color) = node.foreground {
                        return Ok(color);
                    }
                    current = node.parent.map(|parent| &self.nodes[parent.index()]);
                }
                Ok(Color::default())
            }
        }
    }

    fn positioning(&self, element: ElementId) -> Result<Positioning, DocumentError> {
        Ok(self.node(element)?.positioning)
    }

    fn set_positioning(
        &mut self,
        element: ElementId,
        positioning: Positioning,
    ) -> Result<(), DocumentError> {
        self.node_mut(element)?.positioning = positioning;
        Ok(())
    }

    fn set_background_color(
        &mut self,
        element: ElementId,
        color: Color,
    ) -> Result<(), DocumentError> {
        self.node_mut(element)?.background = color;
        Ok(())
    }

    fn overlay(&self, element: ElementId) -> Result<Option<&OverlaySurface>, DocumentError> {
        Ok(self.node(element)?.overlay.as_ref())
    }

    fn overlay_mut(
        &mut self,
        element: ElementId,
    ) -> Result<Option<&mut OverlaySurface>, DocumentError> {
        Ok(self.node_mut(element)?.overlay.as_mut())
    }

    fn attach_overlay(
        &mut self,
        element: ElementId,
        surface: OverlaySurface,
    ) -> Result<&mut OverlaySurface, DocumentError> {
        let node = self.node_mut(element)?;
        Ok(node.overlay.insert(surface))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn sample_page() -> PageSpec {
        let body = ElementSpec::new("body").with_background("white").with_child(
            ElementSpec::new("form")
                .with_id("formSketch")
                .with_bounds(100.0, 50.0, 400.0, 300.0)
                .with_position(Positioning::Relative)
                .with_color("navy")
                .with_child(
                    ElementSpec::new("label")
                        .with_attribute("for", "name")
                        .with_bounds(20.0, 20.0, 80.0, 20.0),
                )
                .with_child(
                    ElementSpec::new("input")
                        .with_id("name")
                        .with_class("field")
                        .with_bounds(20.0, 50.0, 200.0, 30.0),
                ),
        );
        PageSpec::new(ViewportSpec::new(800.0, 600.0), body)
    }

    #[test]
    fn test_from_page_builds_tree() {
        let document = MemoryDocument::from_page(&sample_page()).unwrap();
        let form = document.element_by_id("formSketch").unwrap();

        assert_eq!(document.tree_order().len(), 4);
        assert_eq!(document.tag_name(form).unwrap(), "form");
        assert_eq!(document.children(form).unwrap().len(), 2);
        assert_eq!(document.elements_by_tag(Id::tag("LABEL")).len(), 1);
        assert_eq!(document.elements_by_class(Id::new("field")).len(), 1);
        assert!(document.elements_by_class(Id::new("Field")).is_empty());
    }

    #[test]
    fn test_page_bounds_are_nested() {
        let document = MemoryDocument::from_page(&sample_page()).unwrap();
        let input = document.element_by_id("name").unwrap();

        let bounds = document.page_bounds(input).unwrap();
        assert_approx_eq!(f32, bounds.min_x(), 120.0);
        assert_approx_eq!(f32, bounds.min_y(), 100.0);
        assert_approx_eq!(f32, bounds.width(), 200.0);
    }

    #[test]
    fn test_offset_bounds_relative_to_positioned_ancestor() {
        let document = MemoryDocument::from_page(&sample_page()).unwrap();
        let form = document.element_by_id("formSketch").unwrap();
        let input = document.element_by_id("name").unwrap();

        assert_eq!(document.offset_parent(input).unwrap(), Some(form));
        let offset = document.offset_bounds(input).unwrap();
        assert_approx_eq!(f32, offset.min_x(), 20.0);
        assert_approx_eq!(f32, offset.min_y(), 50.0);
        assert_approx_eq!(f32, offset.height(), 30.0);
    }

    #[test]
    fn test_offset_parent_falls_back_to_root() {
        let mut document = MemoryDocument::new(Size::new(800.0, 600.0));
        let root = document.root();
        let section = document
            .append(root, ElementSpec::new("section").with_bounds(10.0, 10.0, 300.0, 300.0))
            .unwrap();
        let div = document
            .append(section, ElementSpec::new("div").with_bounds(5.0, 5.0, 50.0, 50.0))
            .unwrap();

        assert_eq!(document.offset_parent(div).unwrap(), Some(root));
        assert_eq!(document.offset_parent(root).unwrap(), None);
        assert_approx_eq!(f32, document.offset_bounds(div).unwrap().min_x(), 15.0);
    }

    #[test]
    fn test_foreground_is_inherited() {
        let document = MemoryDocument::from_page(&sample_page()).unwrap();
        let input = document.element_by_id("name").unwrap();

        let color = document
            .computed_color(input, ColorProperty::Foreground)
            .unwrap();
        assert_eq!(color, Color::new("navy").unwrap());

        let root = document.root();
        assert_eq!(
            document.computed_color(root, ColorProperty::Foreground).unwrap(),
            Color::default()
        );
    }

    #[test]
    fn test_background_defaults_to_transparent() {
        let document = MemoryDocument::from_page(&sample_page()).unwrap();
        let input = document.element_by_id("name").unwrap();

        assert!(
            document
                .computed_color(input, ColorProperty::Background)
                .unwrap()
                .is_transparent()
        );
    }

    #[test]
    fn test_resize_viewport_resizes_root() {
        let mut document = MemoryDocument::from_page(&sample_page()).unwrap();
        document.resize_viewport(Size::new(1024.0, 768.0)).unwrap();

        assert_eq!(document.viewport(), Size::new(1024.0, 768.0));
        let root = document.root();
        assert_approx_eq!(f32, document.offset_bounds(root).unwrap().width(), 1024.0);
    }

    #[test]
    fn test_invalid_page_values() {
        let bad_color = PageSpec::new(
            ViewportSpec::new(100.0, 100.0),
            ElementSpec::default().with_child(ElementSpec::new("div").with_background("nope")),
        );
        assert!(matches!(
            MemoryDocument::from_page(&bad_color),
            Err(SketchyError::Page(_))
        ));

        let mut document = MemoryDocument::new(Size::new(100.0, 100.0));
        let root = document.root();
        let mut bad_position = ElementSpec::new("div");
        bad_position.position = Some("floating".to_string());
        assert!(matches!(
            document.append(root, bad_position),
            Err(SketchyError::Page(_))
        ));

        assert!(matches!(
            document.append(root, ElementSpec::default()),
            Err(SketchyError::Page(_))
        ));

        let wrong_root = PageSpec::new(ViewportSpec::new(100.0, 100.0), ElementSpec::new("main"));
        assert!(matches!(
            MemoryDocument::from_page(&wrong_root),
            Err(SketchyError::Page(_))
        ));
    }

    #[test]
    fn test_out_of_range_dimensions_are_rejected() {
        for (width, height) in [
            (f32::INFINITY, 100.0),
            (100.0, f32::NAN),
            (1.0e9, 10.0),
            (-1.0, 10.0),
        ] {
            let page = PageSpec::new(ViewportSpec::new(width, height), ElementSpec::default());
            assert!(
                matches!(MemoryDocument::from_page(&page), Err(SketchyError::Page(_))),
                "viewport {width}x{height} should be rejected"
            );
        }

        let mut document = MemoryDocument::new(Size::new(100.0, 100.0));
        let root = document.root();
        for child in [
            ElementSpec::new("div").with_bounds(0.0, 0.0, -5.0, 10.0),
            ElementSpec::new("div").with_bounds(0.0, 0.0, 10.0, f32::INFINITY),
            ElementSpec::new("div").with_bounds(f32::NEG_INFINITY, 0.0, 10.0, 10.0),
            ElementSpec::new("div").with_bounds(0.0, 2.0e6, 10.0, 10.0),
        ] {
            assert!(matches!(
                document.append(root, child),
                Err(SketchyError::Page(_))
            ));
        }
        assert_eq!(document.children(root).unwrap().len(), 0);

        let within = ElementSpec::new("div").with_bounds(-20.0, 0.0, MAX_DIMENSION, 0.0);
        assert!(document.append(root, within).is_ok());

        assert!(matches!(
            document.resize_viewport(Size::new(f32::INFINITY, 10.0)),
            Err(SketchyError::Page(_))
        ));
        assert_eq!(document.viewport(), Size::new(100.0, 100.0));
    }

    #[test]
    fn test_unknown_element_errors() {
        let mut document = MemoryDocument::new(Size::new(100.0, 100.0));
        let stale = ElementId::new(7);

        assert_eq!(
            document.tag_name(stale).unwrap_err(),
            DocumentError::UnknownElement(stale)
        );
        assert!(document.set_background_color(stale, Color::default()).is_err());
        assert!(matches!(
            document.append(stale, ElementSpec::new("div")),
            Err(SketchyError::Document(_))
        ));
    }

    #[test]
    fn test_attach_overlay() {
        let mut document = MemoryDocument::new(Size::new(100.0, 100.0));
        let root = document.root();

        assert!(document.overlay(root).unwrap().is_none());
        document.attach_overlay(root, OverlaySurface::new()).unwrap();
        assert!(document.overlay(root).unwrap().is_some());
        assert_eq!(document.overlay_count(), 1);
    }

    #[test]
    fn test_deserialize_page() {
        let source = r##"
            [viewport]
            width = 640
            height = 480

            [body]
            background = "#fafafa"

            [[body.children]]
            tag = "nav"
            id = "navbar"
            class = ["top"]
            width = 640
            height = 48

            [[body.children.children]]
            tag = "button"
            class = ["SketchyBurger"]
            x = 8
            y = 8
            width = 32
            height = 32
            attributes = { "aria-label" = "menu" }
        "##;
        let page: PageSpec = toml::from_str(source).unwrap();
        let document = MemoryDocument::from_page(&page).unwrap();

        let button = document.elements_by_class(Id::new("SketchyBurger"))[0];
        assert_eq!(document.attribute(button, "aria-label").unwrap(), Some("menu"));
        assert_approx_eq!(f32, document.page_bounds(button).unwrap().min_x(), 8.0);
        assert_eq!(document.viewport(), Size::new(640.0, 480.0));
    }
}
