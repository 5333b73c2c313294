//! SVG snapshots of a decorated document.
//!
//! [`SvgExporter`] flattens a [`MemoryDocument`] into one standalone SVG
//! document the size of the viewport:
//!
//! - the page background
//! - element boxes and text, in tree order
//! - every overlay surface, placed relative to its element
//!
//! Boxes and overlays are grouped by [`StackLayer`], so a fill drawn behind
//! an element ends up under every element box.

use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use sketchy_core::{
    color::Color,
    document::{ColorProperty, HostDocument},
    draw::{LayeredOutput, StackLayer},
};

use crate::{error::SketchyError, memory::MemoryDocument};

/// Baseline offset of element text from the top of its box.
const TEXT_BASELINE: f32 = 16.0;

/// Renders decorated documents to SVG.
#[derive(Debug, Clone, Default)]
pub struct SvgExporter {
    background: Option<Color>,
}

impl SvgExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the page background; by default the `body` background is used.
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    /// Renders the document.
    ///
    /// # Errors
    ///
    /// Returns [`SketchyError::Document`] if the document tree is inconsistent.
    pub fn render(&self, document: &MemoryDocument) -> Result<Document, SketchyError> {
        let viewport = document.viewport();
        let root = document.root();

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", viewport.width(), viewport.height()),
            )
            .set("width", viewport.width())
            .set("height", viewport.height());

        let background = match self.background {
            Some(color) => color,
            None => document.computed_color(root, ColorProperty::Background)?,
        };
        if !background.is_transparent() {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", viewport.width())
                    .set("height", viewport.height())
                    .set("fill", background.to_string())
                    .set("fill-opacity", background.alpha()),
            );
        }

        let mut output = LayeredOutput::new();
        let mut overlays = 0;
        for element in document.tree_order() {
            let bounds = document.page_bounds(element)?;

            if element != root {
                let fill = document.computed_color(element, ColorProperty::Background)?;
                if !fill.is_transparent() {
                    output.add_to_layer(
                        StackLayer::Content,
                        Box::new(
                            svg_element::Rectangle::new()
                                .set("x", bounds.min_x())
                                .set("y", bounds.min_y())
                                .set("width", bounds.width())
                                .set("height", bounds.height())
                                .set("fill", fill.to_string())
                                .set("fill-opacity", fill.alpha()),
                        ),
                    );
                }
            }

            if let Some(text) = document.text(element)? {
                let color = document.computed_color(element, ColorProperty::Foreground)?;
                output.add_to_layer(
                    StackLayer::Content,
                    Box::new(
                        svg_element::Text::new(text)
                            .set("x", bounds.min_x())
                            .set("y", bounds.min_y() + TEXT_BASELINE)
                            .set("fill", color.to_string()),
                    ),
                );
            }

            if let Some(surface) = document.overlay(element)? {
                output.add_to_layer(surface.layer(), surface.to_svg(bounds.min_point()));
                overlays += 1;
            }
        }

        debug!(
            width = viewport.width(),
            height = viewport.height(),
            overlays = overlays;
            "SVG document rendered"
        );

        for node in output.render() {
            doc = doc.add(node);
        }
        Ok(doc)
    }

    /// Writes a rendered document to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SketchyError::Io`] if the file cannot be created or written.
    pub fn write_document(&self, doc: &Document, path: &Path) -> Result<(), SketchyError> {
        info!(path = path.display().to_string(); "Creating SVG file");
        let mut file = File::create(path).map_err(|err| {
            error!(path = path.display().to_string(), err:err; "Failed to create SVG file");
            err
        })?;

        write!(file, "{doc}").map_err(|err| {
            error!(path = path.display().to_string(), err:err; "Failed to write SVG content");
            err
        })?;

        Ok(())
    }
}
