//! CLI logic for the Sketchy decoration tool.
//!
//! This module loads a page description, decorates it, replays the requested
//! viewport resizes and writes the resulting SVG snapshot.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use sketchy::{SketchBuilder, SketchyError};

/// Run the Sketchy CLI application
///
/// This function processes the input page through the Sketchy pipeline
/// and writes the resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `SketchyError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Page parsing errors
/// - Invalid page values
/// - Document errors while decorating
pub fn run(args: &Args) -> Result<(), SketchyError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing page"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(seed) = args.seed {
        app_config.render_mut().set_seed(Some(seed));
    }

    let source = fs::read_to_string(&args.input)?;

    let builder = SketchBuilder::new(app_config);
    let mut document = builder.load_document(&source)?;
    let session = builder.decorate(&mut document, &args.resize)?;
    info!(
        decorations = session.manager().len(),
        resizes = args.resize.len();
        "Page decorated"
    );

    builder.write_svg(&document, &args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
