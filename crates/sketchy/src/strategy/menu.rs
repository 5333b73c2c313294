//! The hamburger menu glyph.

use log::{debug, trace};

use sketchy_core::{
    color::Color,
    document::{ColorProperty, DocumentError, ElementId, HostDocument},
    draw::{FillDefinition, FillPattern, ShapeRenderer, StackLayer, StrokeDefinition, StyleConfig},
    geometry::{Bounds, Insets, Point},
};

use super::{Decorate, replace_overlay};
use crate::surface::ensure_surface;

const BAR_COUNT: usize = 3;
const BAR_SPACING: f32 = 15.0;
const BAR_INSET: f32 = 5.0;
const BAR_WIDTH: f32 = 6.0;
/// The background overhangs the element slightly so the rough edge covers it.
const BACKGROUND_OVERHANG: f32 = 3.0;

/// Paints a hamburger menu icon over an element: a solid background and
/// three short horizontal bars, above the element's content.
///
/// Colors not given at construction are read from the element's computed
/// style on the first draw and kept afterwards.
#[derive(Debug, Clone)]
pub struct MenuGlyph {
    element: ElementId,
    foreground: Option<Color>,
    background: Option<Color>,
}

impl MenuGlyph {
    pub fn new(element: ElementId) -> Self {
        Self {
            element,
            foreground: None,
            background: None,
        }
    }

    /// Creates a glyph with preset colors; `None` is resolved on first draw.
    pub fn with_colors(
        element: ElementId,
        foreground: Option<Color>,
        background: Option<Color>,
    ) -> Self {
        Self {
            element,
            foreground,
            background,
        }
    }

    pub fn foreground(&self) -> Option<Color> {
        self.foreground
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    fn resolve_colors(
        &mut self,
        document: &dyn HostDocument,
    ) -> Result<(Color, Color), DocumentError> {
        let background = match self.background {
            Some(color) => color,
            None => *self
                .background
                .insert(document.computed_color(self.element, ColorProperty::Background)?),
        };
        let foreground = match self.foreground {
            Some(color) => color,
            None => *self
                .foreground
                .insert(document.computed_color(self.element, ColorProperty::Foreground)?),
        };
        trace!(
            element:% = self.element,
            foreground:% = foreground,
            background:% = background;
            "Resolved menu glyph colors"
        );
        Ok((foreground, background))
    }
}

impl Decorate for MenuGlyph {
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
        let (foreground, background) = self.resolve_colors(document)?;
        debug!(
            element:% = self.element,
            width = size.width(),
            height = size.height();
            "Drawing menu glyph"
        );

        let mut shapes = Vec::with_capacity(BAR_COUNT + 1);

        let overhang = Insets::new(0.0, BACKGROUND_OVERHANG, BACKGROUND_OVERHANG, 0.0);
        let backdrop = Bounds::new_from_top_left(Point::default(), size.add_padding(overhang));
        let backdrop_fill =
            FillDefinition::new(background, FillPattern::Solid).with_density(6.0, 9.0);
        let backdrop_style = StyleConfig::fill_only(backdrop_fill).with_roughness(0.5);
        shapes.push(renderer.rectangle(backdrop, &backdrop_style));

        let bar_style = StyleConfig::new(StrokeDefinition::new(foreground, BAR_WIDTH))
            .with_roughness(0.5)
            .with_bowing(0.5);
        for index in 0..BAR_COUNT {
            let y = index as f32 * BAR_SPACING;
            shapes.push(renderer.line(
                Point::new(BAR_INSET, y),
                Point::new(size.width() - BAR_INSET, y),
                &bar_style,
            ));
        }

        let overlay = Bounds::new_from_top_left(Point::default(), size);
        replace_overlay(document, self.element, overlay, StackLayer::Above, shapes)?;

        document.set_background_color(self.element, Color::transparent())
    }
}
