//! Sketchy - hand-drawn decorations for document elements.
//!
//! Borders, patterned fills, a menu glyph and a ruled-paper page background,
//! drawn with a rough pencil look into overlay surfaces attached to the
//! decorated elements.
//!
//! The pipeline:
//!
//! - [`selector::select`] picks one [`strategy::Decoration`] per element
//! - [`manager::DecorationManager`] keeps the decorated elements and redraws
//!   them when the viewport changes
//! - [`session::Session`] decides which elements of a page are decorated
//! - [`export::SvgExporter`] turns the decorated document into an SVG snapshot

pub mod config;
pub mod export;
pub mod manager;
pub mod memory;
pub mod rough;
pub mod selector;
pub mod session;
pub mod strategy;
pub mod surface;

mod error;

pub use sketchy_core::{color, document, draw, geometry, identifier};

pub use error::SketchyError;

use std::path::Path;

use log::{debug, info};

use config::AppConfig;
use export::SvgExporter;
use geometry::Size;
use memory::{MemoryDocument, PageSpec};
use rough::RoughRenderer;
use session::Session;

/// Builder for loading, decorating and rendering pages.
///
/// # Examples
///
/// ```rust
/// use sketchy::{SketchBuilder, config::AppConfig, geometry::Size};
///
/// let source = r#"
///     [viewport]
///     width = 400
///     height = 300
///
///     [[body.children]]
///     tag = "footer"
///     y = 260
///     width = 400
///     height = 40
/// "#;
///
/// let builder = SketchBuilder::new(AppConfig::default());
/// let mut document = builder.load_document(source).expect("Failed to load page");
/// builder.decorate(&mut document, &[Size::new(640.0, 480.0)]).expect("Failed to decorate");
///
/// let svg = builder.render_svg(&document).expect("Failed to render");
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Default)]
pub struct SketchBuilder {
    config: AppConfig,
}

impl SketchBuilder {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a TOML page description.
    ///
    /// # Errors
    ///
    /// Returns [`SketchyError::Parse`], carrying the source and the span of
    /// the offending input, if the page is not valid.
    pub fn parse_page(&self, source: &str) -> Result<PageSpec, SketchyError> {
        info!("Parsing page");
        let page = toml::from_str(source)
            .map_err(|err| SketchyError::new_parse_error(err.message(), err.span(), source))?;
        debug!("Page parsed successfully");
        Ok(page)
    }

    /// Parse a page description and build its document.
    ///
    /// # Errors
    ///
    /// Returns [`SketchyError::Parse`] for malformed input and
    /// [`SketchyError::Page`] for invalid element values.
    pub fn load_document(&self, source: &str) -> Result<MemoryDocument, SketchyError> {
        let page = self.parse_page(source)?;
        let document = MemoryDocument::from_page(&page)?;
        info!(elements = document.tree_order().len(); "Document built");
        Ok(document)
    }

    /// Decorate the configured targets, then replay viewport resizes.
    ///
    /// Each size in `resizes` resizes the viewport and redraws every
    /// decoration, in order.
    ///
    /// # Errors
    ///
    /// Returns [`SketchyError::Config`] for invalid target selectors,
    /// [`SketchyError::Page`] for an out-of-range resize and
    /// [`SketchyError::Document`] for document failures.
    pub fn decorate(
        &self,
        document: &mut MemoryDocument,
        resizes: &[Size],
    ) -> Result<Session<RoughRenderer>, SketchyError> {
        let targets = self.config.targets().parse()?;
        let mut session = Session::new(self.config.render().renderer(), targets);
        session.load(document)?;

        for size in resizes {
            info!(width = size.width(), height = size.height(); "Resizing viewport");
            document.resize_viewport(*size)?;
            session.resize(document)?;
        }

        Ok(session)
    }

    /// Render a document to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`SketchyError::Config`] if the configured background color is
    /// invalid.
    pub fn render_svg(&self, document: &MemoryDocument) -> Result<String, SketchyError> {
        let doc = self.exporter()?.render(document)?;

        info!("SVG rendered successfully");
        Ok(doc.to_string())
    }

    /// Render a document and write the SVG to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SketchyError::Config`] for an invalid background color and
    /// [`SketchyError::Io`] if the file cannot be written.
    pub fn write_svg(
        &self,
        document: &MemoryDocument,
        path: impl AsRef<Path>,
    ) -> Result<(), SketchyError> {
        let exporter = self.exporter()?;
        let doc = exporter.render(document)?;
        exporter.write_document(&doc, path.as_ref())
    }

    fn exporter(&self) -> Result<SvgExporter, SketchyError> {
        let background = self
            .config
            .export()
            .background_color()
            .map_err(SketchyError::Config)?;

        Ok(SvgExporter::new().with_background(background))
    }
}
