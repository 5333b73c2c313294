//! Stroke definitions for sketched lines and outlines.
//!
//! A hand-drawn stroke is an open path that overshoots at its ends, so every
//! stroke is rendered with round caps and round joins; only the pencil color
//! and width vary.

use crate::color::Color;

/// The pencil used for a sketched line or outline.
///
/// # Examples
///
/// ```
/// use sketchy_core::draw::StrokeDefinition;
/// use sketchy_core::color::Color;
///
/// let stroke = StrokeDefinition::new(Color::new("#333").unwrap(), 2.0);
/// assert_eq!(stroke.width(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Whether the stroke leaves any mark at all.
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && !self.color.is_transparent()
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
        }
    }
}

/// Apply the stroke attributes of a sketched path to an SVG element.
///
/// # Examples
///
/// ```
/// use sketchy_core::draw::StrokeDefinition;
/// use sketchy_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::new(Color::new("black").unwrap(), 2.0);
/// let path = svg_element::Path::new().set("d", "M 0 0 L 10 10");
///
/// let path = sketchy_core::apply_stroke!(path, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", "round")
            .set("stroke-linejoin", "round")
    }};
}
