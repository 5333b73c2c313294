//! Geometric primitives for decoration placement.
//!
//! Element boxes, overlay offsets and the primitives handed to a shape
//! renderer are all expressed with these types. Every value is `Copy`.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular box defined by minimum and maximum coordinates
//! - [`Insets`] - Spacing values for four sides
//!
//! # Coordinate System
//!
//! Coordinates follow the document/SVG convention:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward

/// A 2D point.
///
/// # Examples
///
/// ```
/// # use sketchy_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Length of the vector from the origin to this point
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Grows the size by the insets on every side, the way an overlay
    /// surface outgrows the element it decorates.
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.left + insets.right,
            height: self.height + insets.top + insets.bottom,
        }
    }
}

/// Represents a rectangular box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Moves the bounds by the specified offset.
    ///
    /// ```
    /// # use sketchy_core::geometry::{Bounds, Point, Size};
    /// let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(50.0, 30.0));
    ///
    /// let moved = bounds.translate(Point::new(100.0, 50.0));
    /// assert_eq!(moved.min_x(), 110.0);
    /// assert_eq!(moved.min_y(), 70.0);
    /// assert_eq!(moved.width(), 50.0);
    /// ```
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }

    /// Expands the bounds outward by the given insets.
    pub fn add_padding(&self, insets: Insets) -> Self {
        Self {
            min_x: self.min_x - insets.left(),
            min_y: self.min_y - insets.top(),
            max_x: self.max_x + insets.right(),
            max_y: self.max_y + insets.bottom(),
        }
    }

    /// Shrinks the bounds inward by the given insets.
    ///
    /// ```
    /// # use sketchy_core::geometry::{Bounds, Insets, Point, Size};
    /// let page = Bounds::new_from_top_left(Point::default(), Size::new(400.0, 300.0));
    ///
    /// let margin = page.inset(Insets::uniform(10.0));
    /// assert_eq!(margin.min_x(), 10.0);
    /// assert_eq!(margin.width(), 380.0);
    /// assert_eq!(margin.height(), 280.0);
    /// ```
    pub fn inset(&self, insets: Insets) -> Self {
        Self {
            min_x: self.min_x + insets.left(),
            min_y: self.min_y + insets.top(),
            max_x: self.max_x - insets.right(),
            max_y: self.max_y - insets.bottom(),
        }
    }
}

/// Spacing on the four sides of a box, used for overlay margins and page
/// margins.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn top(self) -> f32 {
        self.top
    }

    pub fn right(self) -> f32 {
        self.right
    }

    pub fn bottom(self) -> f32 {
        self.bottom
    }

    pub fn left(self) -> f32 {
        self.left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_default() {
        let point = Point::default();
        assert_eq!(point.x(), 0.0);
        assert_eq!(point.y(), 0.0);
    }

    #[test]
    fn test_point_sub_and_hypot() {
        let a = Point::new(4.0, 6.0);
        let b = Point::new(1.0, 2.0);
        let diff = a.sub_point(b);
        assert_eq!(diff, Point::new(3.0, 4.0));
        assert_eq!(diff.hypot(), 5.0);
    }

    #[test]
    fn test_size_add_padding() {
        let size = Size::new(100.0, 40.0).add_padding(Insets::uniform(10.0));
        assert_eq!(size.width(), 120.0);
        assert_eq!(size.height(), 60.0);
    }

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(5.0, 10.0), Size::new(20.0, 30.0));
        assert_eq!(bounds.min_x(), 5.0);
        assert_eq!(bounds.min_y(), 10.0);
        assert_eq!(bounds.max_x(), 25.0);
        assert_eq!(bounds.max_y(), 40.0);
        assert_eq!(bounds.to_size(), Size::new(20.0, 30.0));
        assert_eq!(bounds.min_point(), Point::new(5.0, 10.0));
    }

    #[test]
    fn test_bounds_padding_and_inset_are_inverse() {
        let bounds = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(50.0, 20.0));
        let insets = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(bounds.add_padding(insets).inset(insets), bounds);
    }

    #[test]
    fn test_padding_matches_size_growth() {
        let bounds = Bounds::new_from_top_left(Point::new(30.0, 40.0), Size::new(50.0, 20.0));
        let insets = Insets::uniform(10.0);

        let padded = bounds.add_padding(insets);
        assert_eq!(padded.min_point(), Point::new(20.0, 30.0));
        assert_eq!(padded.to_size(), bounds.to_size().add_padding(insets));
    }
}
