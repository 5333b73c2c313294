//! Fill definitions for sketched shapes.
//!
//! A fill is the interior texture of a sketched rectangle: a color, a
//! [`FillPattern`] and two density parameters. `weight` is the stroke width of
//! the pattern lines (or the dot diameter), `gap` the distance between them.

use std::{fmt, str::FromStr};

use crate::color::Color;

/// Interior texture of a filled shape.
///
/// Pattern names follow the vocabulary of hand-drawn sketch renderers. Any
/// name that is not recognized is kept verbatim as [`FillPattern::Named`] so
/// that a renderer may support it or fall back to its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillPattern {
    /// Parallel diagonal lines
    Hachure,
    /// Uniform fill without texture
    Solid,
    /// Diagonal lines in both directions (default for parametrized fills)
    CrossHatch,
    /// Diagonal lines joined into one continuous zig-zag
    ZigZag,
    /// A grid of small dots
    Dots,
    /// Caller-specified pattern name
    Named(String),
}

impl FillPattern {
    /// Resolves an optional, caller-supplied pattern name.
    ///
    /// Missing or blank names resolve to [`FillPattern::CrossHatch`].
    ///
    /// ```
    /// use sketchy_core::draw::FillPattern;
    ///
    /// assert_eq!(FillPattern::from_name(None), FillPattern::CrossHatch);
    /// assert_eq!(FillPattern::from_name(Some("  ")), FillPattern::CrossHatch);
    /// assert_eq!(FillPattern::from_name(Some("dots")), FillPattern::Dots);
    /// ```
    pub fn from_name(name: Option<&str>) -> Self {
        name.and_then(|name| name.parse().ok())
            .unwrap_or(Self::CrossHatch)
    }

    /// Returns the canonical name of this pattern.
    pub fn name(&self) -> &str {
        match self {
            Self::Hachure => "hachure",
            Self::Solid => "solid",
            Self::CrossHatch => "cross-hatch",
            Self::ZigZag => "zig-zag",
            Self::Dots => "dots",
            Self::Named(name) => name,
        }
    }
}

impl FromStr for FillPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("fill pattern name is empty".to_string()),
            "hachure" => Ok(Self::Hachure),
            "solid" => Ok(Self::Solid),
            "cross-hatch" | "crosshatch" => Ok(Self::CrossHatch),
            "zig-zag" | "zigzag" => Ok(Self::ZigZag),
            "dots" => Ok(Self::Dots),
            other => Ok(Self::Named(other.to_string())),
        }
    }
}

impl fmt::Display for FillPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fill color, pattern and density.
///
/// # Examples
///
/// ```
/// use sketchy_core::color::Color;
/// use sketchy_core::draw::{FillDefinition, FillPattern};
///
/// let fill = FillDefinition::new(Color::new("tomato").unwrap(), FillPattern::ZigZag)
///     .with_density(12.0, 12.0);
/// assert_eq!(fill.weight(), 12.0);
/// assert_eq!(fill.gap(), 12.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FillDefinition {
    color: Color,
    pattern: FillPattern,
    weight: f32,
    gap: f32,
}

impl FillDefinition {
    /// Creates a fill with the default density (weight 1, gap 8).
    pub fn new(color: Color, pattern: FillPattern) -> Self {
        Self {
            color,
            pattern,
            weight: 1.0,
            gap: 8.0,
        }
    }

    /// Sets pattern line weight and gap (builder style).
    pub fn with_density(mut self, weight: f32, gap: f32) -> Self {
        self.weight = weight;
        self.gap = gap;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn pattern(&self) -> &FillPattern {
        &self.pattern
    }

    pub fn weight(&self) -> f32 {
        self.weight
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }
}
