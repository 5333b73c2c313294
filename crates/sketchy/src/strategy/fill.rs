//! Patterned background fills.

use log::{debug, trace};

use sketchy_core::{
    color::Color,
    document::{ColorProperty, DocumentError, ElementId, HostDocument},
    draw::{FillDefinition, FillPattern, ShapeRenderer, StackLayer},
    geometry::Point,
};

use super::{Decorate, border_style, margin_placement, replace_overlay};
use crate::surface::ensure_surface;

/// Outlines an element and shades it with a pattern in its own background
/// color, drawn behind the element's content.
///
/// The background color is read once, on the first draw, and kept for the
/// lifetime of the decoration. Drawing makes the element's own background
/// transparent so that the drawn fill shows.
#[derive(Debug, Clone)]
pub struct PatternFill {
    element: ElementId,
    pattern: FillPattern,
    weight: f32,
    gap: f32,
    color: Option<Color>,
}

impl PatternFill {
    fn new(element: ElementId, pattern: FillPattern, weight: f32, gap: f32) -> Self {
        Self {
            element,
            pattern,
            weight,
            gap,
            color: None,
        }
    }

    /// Dense cross-hatching.
    pub fn hachure(element: ElementId) -> Self {
        Self::new(element, FillPattern::CrossHatch, 3.0, 16.0)
    }

    /// Heavy zig-zag strokes.
    pub fn zigzag(element: ElementId) -> Self {
        Self::new(element, FillPattern::ZigZag, 12.0, 12.0)
    }

    /// A fill with a pattern chosen by name.
    ///
    /// A missing or blank name selects cross-hatching.
    pub fn parametrized(element: ElementId, pattern: Option<&str>) -> Self {
        Self::new(element, FillPattern::from_name(pattern), 6.0, 11.0)
    }

    pub fn pattern(&self) -> &FillPattern {
        &self.pattern
    }

    /// Returns the fill color, once resolved.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    fn resolve_color(&mut self, document: &dyn HostDocument) -> Result<Color, DocumentError> {
        if let Some(color) = self.color {
            return Ok(color);
        }
        let color = document.computed_color(self.element, ColorProperty::Background)?;
        trace!(element:% = self.element, color:% = color; "Resolved fill color");
        Ok(*self.color.insert(color))
    }
}

impl Decorate for PatternFill {
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
        let color = self.resolve_color(document)?;
        let (overlay, outline) = margin_placement(Point::default(), size);
        debug!(
            element:% = self.element,
            pattern = self.pattern.name(),
            width = size.width(),
            height = size.height();
            "Drawing pattern fill"
        );

        let fill =
            FillDefinition::new(color, self.pattern.clone()).with_density(self.weight, self.gap);
        let shape = renderer.rectangle(outline, &border_style().with_fill(fill));
        replace_overlay(document, self.element, overlay, StackLayer::Behind, vec![shape])?;

        document.set_background_color(self.element, Color::transparent())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use sketchy_core::geometry::Size;

    use super::*;
    use crate::{
        memory::{ElementSpec, MemoryDocument},
        strategy::test_support::RecordingRenderer,
    };

    fn filled_document(background: &str) -> (MemoryDocument, ElementId) {
        let mut document = MemoryDocument::new(Size::new(800.0, 600.0));
        let root = document.root();
        let element = document
            .append(
                root,
                ElementSpec::new("section")
                    .with_class("hached")
                    .with_bounds(10.0, 10.0, 300.0, 200.0)
                    .with_background(background),
            )
            .unwrap();
        (document, element)
    }

    #[test]
    fn test_hachure_fill_style() {
        let (mut document, element) = filled_document("#ffcc00");
        let mut renderer = RecordingRenderer::new();
        let mut decoration = PatternFill::hachure(element);

        decoration.draw(&mut document, &mut renderer).unwrap();

        let requests = renderer.requests();
        let style = &requests[0].1;
        let fill = style.fill().unwrap();
        assert_eq!(fill.pattern(), &FillPattern::CrossHatch);
        assert_eq!(fill.color(), Color::new("#ffcc00").unwrap());
        assert_approx_eq!(f32, fill.weight(), 3.0);
        assert_approx_eq!(f32, fill.gap(), 16.0);
        assert!(style.stroke().is_some());

        let surface = document.overlay(element).unwrap().unwrap();
        assert_eq!(surface.layer(), StackLayer::Behind);
        assert_eq!(surface.offset(), Point::new(-10.0, -10.0));
        assert_eq!(surface.size(), Size::new(320.0, 220.0));
    }

    #[test]
    fn test_zigzag_fill_density() {
        let (mut document, element) = filled_document("teal");
        let mut renderer = RecordingRenderer::new();

        PatternFill::zigzag(element)
            .draw(&mut document, &mut renderer)
            .unwrap();

        let requests = renderer.requests();
        let fill = requests[0].1.fill().unwrap();
        assert_eq!(fill.pattern(), &FillPattern::ZigZag);
        assert_approx_eq!(f32, fill.weight(), 12.0);
        assert_approx_eq!(f32, fill.gap(), 12.0);
    }

    #[test]
    fn test_parametrized_defaults() {
        let element = ElementId::new(1);

        assert_eq!(
            PatternFill::parametrized(element, None).pattern(),
            &FillPattern::CrossHatch
        );
        assert_eq!(
            PatternFill::parametrized(element, Some("  ")).pattern(),
            &FillPattern::CrossHatch
        );
        assert_eq!(
            PatternFill::parametrized(element, Some("dots")).pattern(),
            &FillPattern::Dots
        );
        assert_eq!(
            PatternFill::parametrized(element, Some("sunburst")).pattern(),
            &FillPattern::Named("sunburst".to_string())
        );
    }

    #[test]
    fn test_color_is_resolved_once() {
        let (mut document, element) = filled_document("#123456");
        let mut renderer = RecordingRenderer::new();
        let mut decoration = PatternFill::parametrized(element, Some("dots"));

        assert_eq!(decoration.color(), None);
        decoration.draw(&mut document, &mut renderer).unwrap();
        assert_eq!(decoration.color(), Some(Color::new("#123456").unwrap()));

        // The element is transparent now; the kept color still wins
        decoration.draw(&mut document, &mut renderer).unwrap();
        let requests = renderer.requests();
        assert_eq!(
            requests[1].1.fill().map(|fill| fill.color()),
            Some(Color::new("#123456").unwrap())
        );
    }
}
