//! Hand-drawn shape rendering.
//!
//! [`RoughRenderer`] is the [`ShapeRenderer`] used by default. Every straight
//! segment is drawn as a quadratic stroke whose endpoints are jittered and
//! whose middle bows away from the straight line, and (in multi-stroke mode)
//! every segment is drawn twice with different randomness, which produces
//! the familiar doubled pencil look.
//!
//! Fills are drawn under the outline with the pattern from the style's
//! [`FillDefinition`].

use std::f32::consts::SQRT_2;

use log::{debug, trace};
use rand::{Rng, SeedableRng, rngs::StdRng};
use svg::node::element as svg_element;

use sketchy_core::{
    apply_stroke,
    draw::{
        FillDefinition, FillPattern, Primitive, ShapeNode, ShapeRenderer, StrokeDefinition,
        StyleConfig, SvgNode,
    },
    geometry::{Bounds, Point},
};

/// Upper bound of the endpoint jitter at roughness 1, in user units.
const MAX_RANDOMNESS_OFFSET: f32 = 2.0;

/// Most hatch lines in one direction; wider areas get a wider gap.
const MAX_HATCH_LINES: usize = 4096;

/// Most dots in one dot fill; larger areas get a wider gap.
const MAX_DOTS: usize = 65_536;

/// Direction of parallel hatch lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HatchDirection {
    /// Lines going down to the right (`x - y = c`)
    Falling,
    /// Lines going up to the right (`x + y = c`)
    Rising,
}

/// A [`ShapeRenderer`] producing rough, hand-drawn SVG paths.
///
/// # Examples
///
/// ```
/// use sketchy::rough::RoughRenderer;
/// use sketchy::draw::{ShapeRenderer, StyleConfig};
/// use sketchy::geometry::Point;
///
/// let mut renderer = RoughRenderer::with_seed(7);
/// let style = StyleConfig::default();
/// let shape = renderer.line(Point::new(0.0, 0.0), Point::new(100.0, 0.0), &style);
/// assert!(shape.node().to_string().contains("<path"));
/// ```
#[derive(Debug, Clone)]
pub struct RoughRenderer {
    rng: StdRng,
    multi_stroke: bool,
}

impl RoughRenderer {
    /// Creates a renderer seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            multi_stroke: true,
        }
    }

    /// Creates a renderer whose output is reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            multi_stroke: true,
        }
    }

    /// Enables or disables the doubled stroke (builder style).
    pub fn with_multi_stroke(mut self, multi_stroke: bool) -> Self {
        self.multi_stroke = multi_stroke;
        self
    }

    fn passes(&self) -> usize {
        if self.multi_stroke { 2 } else { 1 }
    }

    /// Random value in `[-amount, amount)`, or zero for non-positive amounts.
    fn offset(&mut self, amount: f32) -> f32 {
        if amount > 0.0 && amount.is_finite() {
            self.rng.random_range(-amount..amount)
        } else {
            0.0
        }
    }

    fn jitter(&mut self, point: Point, amount: f32) -> Point {
        Point::new(
            point.x() + self.offset(amount),
            point.y() + self.offset(amount),
        )
    }

    /// Appends one bowed, jittered pass over a segment to `path`.
    fn segment_pass(
        &mut self,
        path: &mut String,
        from: Point,
        to: Point,
        roughness: f32,
        bowing: f32,
    ) {
        let delta = to.sub_point(from);
        let length = delta.hypot();
        let max_offset = MAX_RANDOMNESS_OFFSET.min(length / 10.0) * roughness;

        let start = self.jitter(from, max_offset);
        let end = self.jitter(to, max_offset);

        let bow = self.offset(bowing * roughness * length / 200.0);
        let (normal_x, normal_y) = if length > 0.001 {
            (-delta.y() / length, delta.x() / length)
        } else {
            (0.0, 0.0)
        };
        let mid = from.midpoint(to);
        let control = Point::new(
            normal_x.mul_add(bow, mid.x()),
            normal_y.mul_add(bow, mid.y()),
        );

        path.push_str(&format!(
            "M{:.2} {:.2} Q{:.2} {:.2} {:.2} {:.2} ",
            start.x(),
            start.y(),
            control.x(),
            control.y(),
            end.x(),
            end.y()
        ));
    }

    /// Builds path data for a set of independent segments.
    fn segments_path(
        &mut self,
        segments: &[(Point, Point)],
        roughness: f32,
        bowing: f32,
    ) -> String {
        let mut path = String::new();
        for _ in 0..self.passes() {
            for &(from, to) in segments {
                self.segment_pass(&mut path, from, to, roughness, bowing);
            }
        }
        path.trim_end().to_string()
    }

    fn stroked_path(
        &mut self,
        segments: &[(Point, Point)],
        stroke: &StrokeDefinition,
        roughness: f32,
        bowing: f32,
    ) -> svg_element::Path {
        let data = self.segments_path(segments, roughness, bowing);
        let path = svg_element::Path::new().set("d", data).set("fill", "none");
        apply_stroke!(path, stroke)
    }

    fn fill_node(&mut self, bounds: Bounds, fill: &FillDefinition, roughness: f32) -> SvgNode {
        let pattern_stroke = StrokeDefinition::new(fill.color(), fill.weight());

        match fill.pattern() {
            FillPattern::Solid => Box::new(self.solid_fill(bounds, fill, roughness)),
            FillPattern::Hachure => {
                let lines = hachure_lines(bounds, fill.gap(), HatchDirection::Falling);
                Box::new(self.stroked_path(&lines, &pattern_stroke, roughness, 1.0))
            }
            FillPattern::CrossHatch => {
                let mut lines = hachure_lines(bounds, fill.gap(), HatchDirection::Falling);
                lines.extend(hachure_lines(bounds, fill.gap(), HatchDirection::Rising));
                Box::new(self.stroked_path(&lines, &pattern_stroke, roughness, 1.0))
            }
            FillPattern::ZigZag => Box::new(self.zigzag_fill(bounds, fill, roughness)),
            FillPattern::Dots => Box::new(self.dots_fill(bounds, fill, roughness)),
            FillPattern::Named(name) => {
                debug!(pattern = name.as_str(); "Unknown fill pattern, using hachure");
                let lines = hachure_lines(bounds, fill.gap(), HatchDirection::Falling);
                Box::new(self.stroked_path(&lines, &pattern_stroke, roughness, 1.0))
            }
        }
    }

    fn solid_fill(
        &mut self,
        bounds: Bounds,
        fill: &FillDefinition,
        roughness: f32,
    ) -> svg_element::Path {
        let amount = roughness * 0.5;
        let corners = [
            Point::new(bounds.min_x(), bounds.min_y()),
            Point::new(bounds.max_x(), bounds.min_y()),
            Point::new(bounds.max_x(), bounds.max_y()),
            Point::new(bounds.min_x(), bounds.max_y()),
        ];

        let mut data = String::new();
        for (index, corner) in corners.into_iter().enumerate() {
            let point = self.jitter(corner, amount);
            let command = if index == 0 { 'M' } else { 'L' };
            data.push_str(&format!("{command}{:.2} {:.2} ", point.x(), point.y()));
        }
        data.push('Z');

        svg_element::Path::new()
            .set("d", data)
            .set("fill", fill.color().to_string())
            .set("fill-opacity", fill.color().alpha())
            .set("stroke", "none")
    }

    fn zigzag_fill(
        &mut self,
        bounds: Bounds,
        fill: &FillDefinition,
        roughness: f32,
    ) -> svg_element::Path {
        let lines = hachure_lines(bounds, fill.gap(), HatchDirection::Falling);
        let amount = roughness * 0.5;

        let mut data = String::new();
        for (index, (from, to)) in lines.into_iter().enumerate() {
            let (first, second) = if index % 2 == 0 { (from, to) } else { (to, from) };
            for point in [first, second] {
                let point = self.jitter(point, amount);
                let command = if data.is_empty() { 'M' } else { 'L' };
                data.push_str(&format!("{command}{:.2} {:.2} ", point.x(), point.y()));
            }
        }

        let stroke = StrokeDefinition::new(fill.color(), fill.weight());
        let path = svg_element::Path::new()
            .set("d", data.trim_end().to_string())
            .set("fill", "none");
        apply_stroke!(path, &stroke)
    }

    fn dots_fill(
        &mut self,
        bounds: Bounds,
        fill: &FillDefinition,
        roughness: f32,
    ) -> svg_element::Group {
        let radius = (fill.weight() / 2.0).max(0.5);
        let mut group = svg_element::Group::new()
            .set("fill", fill.color().to_string())
            .set("fill-opacity", fill.color().alpha());

        for center in dot_centers(bounds, fill.gap()) {
            let center = self.jitter(center, roughness * 0.5);
            group = group.add(
                svg_element::Circle::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("r", radius),
            );
        }

        group
    }
}

impl Default for RoughRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeRenderer for RoughRenderer {
    fn line(&mut self, from: Point, to: Point, style: &StyleConfig) -> ShapeNode {
        let mut group = svg_element::Group::new().set("data-primitive", "line");

        if let Some(stroke) = style.stroke().filter(|stroke| stroke.is_visible()) {
            group = group.add(self.stroked_path(
                &[(from, to)],
                stroke,
                style.roughness(),
                style.bowing(),
            ));
        }

        ShapeNode::new(Primitive::Line { from, to }, style.clone(), Box::new(group))
    }

    fn rectangle(&mut self, bounds: Bounds, style: &StyleConfig) -> ShapeNode {
        trace!(
            x = bounds.min_x(),
            y = bounds.min_y(),
            width = bounds.width(),
            height = bounds.height();
            "Sketching rectangle"
        );
        let mut group = svg_element::Group::new().set("data-primitive", "rectangle");

        if let Some(fill) = style.fill() {
            group = group.add(self.fill_node(bounds, fill, style.roughness()));
        }

        if let Some(stroke) = style.stroke().filter(|stroke| stroke.is_visible()) {
            let top_left = Point::new(bounds.min_x(), bounds.min_y());
            let top_right = Point::new(bounds.max_x(), bounds.min_y());
            let bottom_right = Point::new(bounds.max_x(), bounds.max_y());
            let bottom_left = Point::new(bounds.min_x(), bounds.max_y());
            let sides = [
                (top_left, top_right),
                (top_right, bottom_right),
                (bottom_right, bottom_left),
                (bottom_left, top_left),
            ];
            group = group.add(self.stroked_path(
                &sides,
                stroke,
                style.roughness(),
                style.bowing(),
            ));
        }

        ShapeNode::new(Primitive::Rectangle(bounds), style.clone(), Box::new(group))
    }
}

/// Number of samples at `(i + 0.5) * step` strictly inside `0..span`.
fn sample_count(span: f32, step: f32) -> usize {
    // Saturating cast; callers cap the result
    (span / step - 0.5).ceil().max(0.0) as usize
}

/// Clips parallel 45° lines, `gap` apart, to `bounds`.
///
/// At most [`MAX_HATCH_LINES`] lines are produced; past that the gap widens.
fn hachure_lines(bounds: Bounds, gap: f32, direction: HatchDirection) -> Vec<(Point, Point)> {
    let width = bounds.width();
    let height = bounds.height();
    if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
        return Vec::new();
    }

    let (first, last) = match direction {
        HatchDirection::Falling => (-height, width),
        HatchDirection::Rising => (0.0, width + height),
    };
    let span = last - first;

    // Parallel lines `x ± y = c` are `|Δc| / √2` apart
    let step = (gap.max(1.0) * SQRT_2).max(span / MAX_HATCH_LINES as f32);
    let count = sample_count(span, step).min(MAX_HATCH_LINES);
    let origin = bounds.min_point();
    let mut lines = Vec::with_capacity(count);

    for index in 0..count {
        let c = first + step * (index as f32 + 0.5);
        let (x_start, x_end) = match direction {
            HatchDirection::Falling => (c.max(0.0), width.min(height + c)),
            HatchDirection::Rising => ((c - height).max(0.0), width.min(c)),
        };
        if x_end > x_start {
            let y_at = |x: f32| match direction {
                HatchDirection::Falling => x - c,
                HatchDirection::Rising => c - x,
            };
            lines.push((
                Point::new(origin.x() + x_start, origin.y() + y_at(x_start)),
                Point::new(origin.x() + x_end, origin.y() + y_at(x_end)),
            ));
        }
    }

    lines
}

/// Centers of a dot grid, `gap` apart, inside `bounds`.
///
/// At most [`MAX_DOTS`] centers are produced; past that the gap widens.
fn dot_centers(bounds: Bounds, gap: f32) -> Vec<Point> {
    let width = bounds.width();
    let height = bounds.height();
    if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
        return Vec::new();
    }

    let gap = gap.max(1.0).max((width * height / MAX_DOTS as f32).sqrt());
    let columns = sample_count(width, gap).min(MAX_DOTS);
    let rows = sample_count(height, gap).min(MAX_DOTS / columns.max(1));

    let mut centers = Vec::with_capacity(columns * rows);
    for row in 0..rows {
        let y = bounds.min_y() + gap * (row as f32 + 0.5);
        for column in 0..columns {
            centers.push(Point::new(bounds.min_x() + gap * (column as f32 + 0.5), y));
        }
    }

    centers
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use sketchy_core::geometry::Size;

    use super::*;

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..800.0, 0.0f32..800.0)
            .prop_map(|(x, y, w, h)| Bounds::new_from_top_left(Point::new(x, y), Size::new(w, h)))
    }

    proptest! {
        #[test]
        fn rendered_paths_are_finite(
            bounds in bounds_strategy(),
            roughness in 0.0f32..5.0,
            seed in any::<u64>(),
        ) {
            let style = StyleConfig::default().with_roughness(roughness);
            let rendered = RoughRenderer::with_seed(seed)
                .rectangle(bounds, &style)
                .node()
                .to_string();
            prop_assert!(!rendered.contains("NaN"));
            prop_assert!(!rendered.contains("inf"));
        }

        #[test]
        fn hachure_endpoints_stay_in_bounds(bounds in bounds_strategy(), gap in 0.5f32..40.0) {
            for direction in [HatchDirection::Falling, HatchDirection::Rising] {
                for (from, to) in hachure_lines(bounds, gap, direction) {
                    for point in [from, to] {
                        prop_assert!(point.x() >= bounds.min_x() - 0.01);
                        prop_assert!(point.x() <= bounds.max_x() + 0.01);
                        prop_assert!(point.y() >= bounds.min_y() - 0.01);
                        prop_assert!(point.y() <= bounds.max_y() + 0.01);
                    }
                }
            }
        }
    }
}
