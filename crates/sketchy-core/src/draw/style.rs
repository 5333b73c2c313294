//! The parameter set handed to a shape renderer for one primitive.

use crate::draw::{FillDefinition, StrokeDefinition};

/// Immutable style of one sketched primitive.
///
/// Combines the outline stroke, the hand-drawn jitter (`roughness` scales the
/// random offset of every point, `bowing` scales how far a line bends away
/// from straight) and an optional fill.
///
/// A style without a stroke draws only its fill.
///
/// # Examples
///
/// ```
/// use sketchy_core::color::Color;
/// use sketchy_core::draw::{FillDefinition, FillPattern, StrokeDefinition, StyleConfig};
///
/// let style = StyleConfig::new(StrokeDefinition::new(Color::new("#333").unwrap(), 2.0))
///     .with_roughness(2.5)
///     .with_bowing(1.5)
///     .with_fill(FillDefinition::new(Color::new("gold").unwrap(), FillPattern::CrossHatch));
///
/// assert_eq!(style.roughness(), 2.5);
/// assert!(style.fill().is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    stroke: Option<StrokeDefinition>,
    roughness: f32,
    bowing: f32,
    fill: Option<FillDefinition>,
}

impl StyleConfig {
    /// Creates a stroked style with unit roughness and bowing and no fill.
    pub fn new(stroke: StrokeDefinition) -> Self {
        Self {
            stroke: Some(stroke),
            ..Self::default()
        }
    }

    /// Creates a style that paints a fill without an outline.
    pub fn fill_only(fill: FillDefinition) -> Self {
        Self {
            stroke: None,
            fill: Some(fill),
            ..Self::default()
        }
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn with_bowing(mut self, bowing: f32) -> Self {
        self.bowing = bowing;
        self
    }

    pub fn with_fill(mut self, fill: FillDefinition) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }

    pub fn roughness(&self) -> f32 {
        self.roughness
    }

    pub fn bowing(&self) -> f32 {
        self.bowing
    }

    pub fn fill(&self) -> Option<&FillDefinition> {
        self.fill.as_ref()
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke: Some(StrokeDefinition::default()),
            roughness: 1.0,
            bowing: 1.0,
            fill: None,
        }
    }
}
