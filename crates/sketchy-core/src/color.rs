//! Color handling for sketchy decorations
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Colors are parsed from CSS strings, which is also the
//! form in which a host document reports computed style colors.

use std::str::FromStr;

use color::DynamicColor;

/// A CSS color.
///
/// Decorations read element colors once, when they are created, and keep
/// them as `Color` values from then on.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use sketchy_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns a fully transparent color.
    ///
    /// This is what a fill decoration writes into an element's background so
    /// that the drawn fill becomes the only visible background.
    ///
    /// ```
    /// use sketchy_core::color::Color;
    ///
    /// assert!(Color::transparent().is_transparent());
    /// ```
    pub fn transparent() -> Self {
        Self::default().with_alpha(0.0)
    }

    /// Returns the same color with its alpha replaced.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Returns true if this color has no visible coverage.
    pub fn is_transparent(&self) -> bool {
        self.alpha() <= 0.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let red = Color::new("#ff0000");
        assert!(red.is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
        assert!(invalid.unwrap_err().contains("not-a-color"));
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_string(), "black");
        assert!(!color.is_transparent());
    }

    #[test]
    fn test_color_transparent() {
        let color = Color::transparent();
        assert!(color.is_transparent());
        assert_eq!(color.alpha(), 0.0);
    }

    #[test]
    fn test_color_with_alpha() {
        let color = Color::new("red").unwrap();
        let translucent = color.with_alpha(0.5);
        assert!((translucent.alpha() - 0.5).abs() < 0.001);
        assert!(!translucent.is_transparent());
    }

    #[test]
    fn test_color_from_str() {
        let parsed: Color = "blue".parse().unwrap();
        assert_eq!(parsed, Color::new("blue").unwrap());
        assert!("nope".parse::<Color>().is_err());
    }

    #[test]
    fn test_computed_style_forms() {
        let opaque = Color::new("rgb(255, 0, 0)").unwrap();
        assert_eq!(opaque.alpha(), 1.0);

        let cleared = Color::new("rgba(0, 0, 0, 0)").unwrap();
        assert!(cleared.is_transparent());
        assert!(Color::new("transparent").unwrap().is_transparent());
    }
}
