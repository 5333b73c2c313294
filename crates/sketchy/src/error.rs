//! Error types for sketchy operations.
//!
//! This module provides the main error type [`SketchyError`] which wraps
//! the error conditions that can occur while loading, decorating and
//! exporting a page.

use std::{io, ops::Range};

use thiserror::Error;

use sketchy_core::document::DocumentError;

/// The main error type for sketchy operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the page source and the byte span of the
/// offending input, so that callers can render a labeled snippet.
#[derive(Debug, Error)]
pub enum SketchyError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{message}")]
    Parse {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Invalid page: {0}")]
    Page(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),
}

impl SketchyError {
    /// Create a new `Parse` error with the associated page source.
    pub fn new_parse_error(
        message: impl Into<String>,
        span: Option<Range<usize>>,
        src: impl Into<String>,
    ) -> Self {
        Self::Parse {
            message: message.into(),
            span,
            src: src.into(),
        }
    }
}
