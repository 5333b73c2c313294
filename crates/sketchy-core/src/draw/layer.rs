//! Stacking layers for overlays and layered SVG output.
//!
//! An overlay is painted relative to the content of the element it decorates:
//! behind it (fills and page backgrounds), level with it, or above it.
//!
//! # Overview
//!
//! - [`StackLayer`]: Where an overlay sits relative to sibling content
//! - [`LayeredOutput`]: A structure for collecting SVG nodes by layer
//!
//! # Example
//!
//! ```
//! # use sketchy_core::draw::{LayeredOutput, StackLayer};
//! # use svg::node::element::Rectangle;
//! let mut output = LayeredOutput::new();
//!
//! output.add_to_layer(StackLayer::Above, Box::new(Rectangle::new()));
//! output.add_to_layer(StackLayer::Behind, Box::new(Rectangle::new()));
//!
//! // Behind renders first, then Above
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Paint order of an overlay relative to sibling content.
///
/// Layers are rendered from bottom to top in the order of variant declaration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StackLayer {
    /// Painted below the element's content (`z-index: -1`)
    Behind,
    /// Painted in normal flow order (no `z-index`)
    #[default]
    Content,
    /// Painted above sibling content (`z-index: 1`)
    Above,
}

impl StackLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Behind => "behind",
            Self::Content => "content",
            Self::Above => "above",
        }
    }

    /// Returns the CSS `z-index` this layer corresponds to, if any.
    pub fn z_index(&self) -> Option<i32> {
        match self {
            Self::Behind => Some(-1),
            Self::Content => None,
            Self::Above => Some(1),
        }
    }
}

/// SVG nodes grouped by stacking layer.
///
/// Nodes keep their insertion order inside a layer; layers are emitted
/// bottom to top.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(StackLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: StackLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a `data-layer`
    /// attribute identifying the layer. Empty layers are skipped.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable: insertion order survives within a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}
