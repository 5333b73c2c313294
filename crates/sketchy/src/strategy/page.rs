//! The ruled-paper page background.

use log::debug;

use sketchy_core::{
    color::Color,
    document::{DocumentError, ElementId, HostDocument},
    draw::{ShapeRenderer, StackLayer, StrokeDefinition, StyleConfig},
    geometry::{Bounds, Insets, Point},
};

use super::{Decorate, replace_overlay};
use crate::surface::ensure_surface;

const RULE_SPACING: f32 = 20.0;
const PAGE_MARGIN: f32 = 10.0;
/// Most rules drawn in each direction, whatever the page size.
const MAX_RULES: usize = 10_000;

/// Number of rules at `0, RULE_SPACING, ...` strictly inside `length`.
fn rule_count(length: f32) -> usize {
    if !(length > 0.0) {
        return 0;
    }
    // Saturating cast: an infinite length maps to usize::MAX
    ((length / RULE_SPACING).ceil() as usize).min(MAX_RULES)
}

/// Draws a grid of faint rules and a page margin behind all content.
///
/// Meant for the document root.
#[derive(Debug, Clone)]
pub struct RuledPage {
    element: ElementId,
}

impl RuledPage {
    pub fn new(element: ElementId) -> Self {
        Self { element }
    }
}

impl Decorate for RuledPage {
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
        let (width, height) = (size.width(), size.height());

        let rule_style = StyleConfig::new(StrokeDefinition::new(
            Color::new("#ddd").expect("Invalid color"),
            0.5,
        ))
        .with_roughness(0.5);
        let margin_style = StyleConfig::new(StrokeDefinition::new(
            Color::new("#bbb").expect("Invalid color"),
            1.5,
        ))
        .with_roughness(0.5);

        let mut shapes = Vec::new();

        let horizontal = rule_count(height);
        for index in 0..horizontal {
            let y = index as f32 * RULE_SPACING;
            shapes.push(renderer.line(Point::new(0.0, y), Point::new(width, y), &rule_style));
        }

        for index in 0..rule_count(width) {
            let x = index as f32 * RULE_SPACING;
            shapes.push(renderer.line(Point::new(x, 0.0), Point::new(x, height), &rule_style));
        }

        let page = Bounds::new_from_top_left(Point::default(), size);
        shapes.push(renderer.rectangle(page.inset(Insets::uniform(PAGE_MARGIN)), &margin_style));

        debug!(
            element:% = self.element,
            horizontal_rules = horizontal,
            vertical_rules = shapes.len() - horizontal - 1;
            "Drawing ruled page"
        );

        replace_overlay(document, self.element, page, StackLayer::Behind, shapes)
    }
}
