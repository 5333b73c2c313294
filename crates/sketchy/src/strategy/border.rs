//! Outline decorations.

use log::debug;

use sketchy_core::{
    document::{DocumentError, ElementId, HostDocument},
    draw::{ShapeRenderer, StackLayer},
    geometry::Point,
};

use super::{Decorate, border_style, margin_placement, replace_overlay};
use crate::surface::ensure_surface;

/// Outlines the form control a `label` refers to through its `for` attribute.
///
/// Drawing does nothing when the label has no `for` attribute or when no
/// element carries the referenced id.
#[derive(Debug, Clone)]
pub struct LabelBorder {
    label: ElementId,
}

impl LabelBorder {
    pub fn new(label: ElementId) -> Self {
        Self { label }
    }

    /// Finds the control the label refers to.
    fn control(&self, document: &dyn HostDocument) -> Result<Option<ElementId>, DocumentError> {
        let control = document
            .attribute(self.label, "for")?
            .and_then(|id| document.element_by_id(id));
        Ok(control)
    }
}

impl Decorate for LabelBorder {
    fn element(&self) -> ElementId {
        self.label
    }

    fn draw(
        &mut self,
        document: &mut dyn HostDocument,
        renderer: &mut dyn ShapeRenderer,
    ) -> Result<(), DocumentError> {
        let Some(control) = self.control(document)? else {
            debug!(label:% = self.label; "Label has no associated control, skipping");
            return Ok(());
        };

        ensure_surface(document, self.label)?;

        let control_size = document.offset_bounds(control)?.to_size();
        let offset =
            page_position(document, control)?.sub_point(page_position(document, self.label)?);
        let (overlay, outline) = margin_placement(offset, control_size);
        debug!(
            label:% = self.label,
            control:% = control,
            width = control_size.width(),
            height = control_size.height();
            "Drawing label border"
        );

        let shape = renderer.rectangle(outline, &border_style());
        replace_overlay(document, self.label, overlay, StackLayer::Content, vec![shape])
    }
}

/// Outlines the element itself.
#[derive(Debug, Clone)]
pub struct DefaultBorder {
    element: ElementId,
}

impl DefaultBorder {
    pub fn new(element: ElementId) -> Self {
        Self { element }
    }
}

impl Decorate for DefaultBorder {
    fn element(&self) -> ElementId {
        self.element
    }

    fn draw(
        &mut self,
        document: &mut dyn HostDocument,
        renderer: &mut dyn ShapeRenderer,
    ) -> Result<(), DocumentError> {
        ensure_surface(document, self.element)?;

        let size = document.offset_bounds(self.element)?.to_size();
        let (overlay, outline) = margin_placement(Point::default(), size);
        debug!(
            element:% = self.element,
            width = size.width(),
            height = size.height();
            "Drawing default border"
        );

        let shape = renderer.rectangle(outline, &border_style());
        replace_overlay(document, self.element, overlay, StackLayer::Content, vec![shape])
    }
}

/// Position of an element's box relative to the root, following offset parents.
fn page_position(document: &dyn HostDocument, element: ElementId) -> Result<Point, DocumentError> {
    let mut position = document.offset_bounds(element)?.min_point();
    let mut current = document.offset_parent(element)?;
    while let Some(parent) = current {
        position = position.add_point(document.offset_bounds(parent)?.min_point());
        current = document.offset_parent(parent)?;
    }
    Ok(position)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use sketchy_core::{
        document::Positioning,
        draw::Primitive,
        geometry::{Bounds, Size},
    };

    use super::*;
    use crate::{
        memory::{ElementSpec, MemoryDocument},
        strategy::test_support::RecordingRenderer,
    };

    fn form_document() -> (MemoryDocument, ElementId, ElementId) {
        let mut document = MemoryDocument::new(Size::new(800.0, 600.0));
        let root = document.root();
        let form = document
            .append(
                root,
                ElementSpec::new("form")
                    .with_bounds(100.0, 100.0, 400.0, 300.0)
                    .with_position(Positioning::Relative),
            )
            .unwrap();
        let label = document
            .append(
                form,
                ElementSpec::new("label")
                    .with_attribute("for", "email")
                    .with_bounds(20.0, 20.0, 60.0, 20.0),
            )
            .unwrap();
        document
            .append(
                form,
                ElementSpec::new("input")
                    .with_id("email")
                    .with_bounds(20.0, 50.0, 240.0, 30.0),
            )
            .unwrap();
        (document, form, label)
    }

    #[test]
    fn test_label_border_surrounds_control() {
        let (mut document, _, label) = form_document();
        let mut renderer = RecordingRenderer::new();

        LabelBorder::new(label)
            .draw(&mut document, &mut renderer)
            .unwrap();

        let surface = document.overlay(label).unwrap().unwrap();
        assert_approx_eq!(f32, surface.offset().x(), -10.0);
        assert_approx_eq!(f32, surface.offset().y(), 20.0);
        assert_eq!(surface.size(), Size::new(260.0, 50.0));
        assert_eq!(surface.layer(), StackLayer::Content);

        assert_eq!(
            renderer.requests()[0].0,
            Primitive::Rectangle(Bounds::new_from_top_left(
                Point::new(10.0, 10.0),
                Size::new(240.0, 30.0)
            ))
        );
    }

    #[test]
    fn test_label_wrapping_its_control() {
        let mut document = MemoryDocument::new(Size::new(800.0, 600.0));
        let root = document.root();
        let label = document
            .append(
                root,
                ElementSpec::new("label")
                    .with_attribute("for", "agree")
                    .with_bounds(40.0, 40.0, 200.0, 40.0)
                    .with_child(
                        ElementSpec::new("input")
                            .with_id("agree")
                            .with_bounds(150.0, 10.0, 20.0, 20.0),
                    ),
            )
            .unwrap();
        let mut renderer = RecordingRenderer::new();

        LabelBorder::new(label)
            .draw(&mut document, &mut renderer)
            .unwrap();

        let surface = document.overlay(label).unwrap().unwrap();
        assert_eq!(surface.offset(), Point::new(140.0, 0.0));
        assert_eq!(surface.size(), Size::new(40.0, 40.0));
    }

    #[test]
    fn test_label_without_control_is_a_no_op() {
        let mut document = MemoryDocument::new(Size::new(800.0, 600.0));
        let root = document.root();
        let dangling = document
            .append(
                root,
                ElementSpec::new("label").with_attribute("for", "missing"),
            )
            .unwrap();
        let unbound = document.append(root, ElementSpec::new("label")).unwrap();
        let mut renderer = RecordingRenderer::new();

        for label in [dangling, unbound] {
            LabelBorder::new(label)
                .draw(&mut document, &mut renderer)
                .unwrap();

            assert!(document.overlay(label).unwrap().is_none());
            assert_eq!(document.positioning(label).unwrap(), Positioning::Static);
        }
        assert!(renderer.requests().is_empty());
        assert_eq!(document.overlay_count(), 0);
    }

    #[test]
    fn test_label_follows_control_on_redraw() {
        let (mut document, _, label) = form_document();
        let control = document.element_by_id("email").unwrap();
        let mut renderer = RecordingRenderer::new();
        let mut decoration = LabelBorder::new(label);

        decoration.draw(&mut document, &mut renderer).unwrap();
        document
            .set_page_bounds(
                control,
                Bounds::new_from_top_left(Point::new(120.0, 200.0), Size::new(100.0, 30.0)),
            )
            .unwrap();
        decoration.draw(&mut document, &mut renderer).unwrap();

        let surface = document.overlay(label).unwrap().unwrap();
        assert_eq!(surface.offset(), Point::new(-10.0, 70.0));
        assert_eq!(surface.size(), Size::new(120.0, 50.0));
        assert_eq!(surface.child_count(), 1);
    }

    #[test]
    fn test_page_position_accumulates_offsets() {
        let (document, form, label) = form_document();

        assert_eq!(page_position(&document, form).unwrap(), Point::new(100.0, 100.0));
        assert_eq!(page_position(&document, label).unwrap(), Point::new(120.0, 120.0));
    }
}
