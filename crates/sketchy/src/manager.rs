//! Tracking and redrawing decorated elements.

use log::{debug, warn};

use sketchy_core::{
    document::{DocumentError, ElementId, HostDocument},
    draw::ShapeRenderer,
};

use crate::{
    selector::select,
    strategy::{Decorate, Decoration},
};

/// An element and the decoration chosen for it.
#[derive(Debug, Clone)]
pub struct DecorationEntry {
    element: ElementId,
    decoration: Decoration,
}

impl DecorationEntry {
    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn decoration(&self) -> &Decoration {
        &self.decoration
    }
}

/// Owns the decorated elements of one document session.
///
/// Entries are only ever appended. The decoration of an element is chosen
/// once, when the element is added, and kept for the rest of the session.
#[derive(Debug)]
pub struct DecorationManager<R: ShapeRenderer> {
    renderer: R,
    entries: Vec<DecorationEntry>,
}

impl<R: ShapeRenderer> DecorationManager<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            entries: Vec::new(),
        }
    }

    /// Decorates `element` and draws it once.
    ///
    /// The entry is kept even if the first draw fails, so that a later
    /// [`redraw_all`](Self::redraw_all) retries it.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] if `element` does not belong to `document`.
    pub fn add_element(
        &mut self,
        document: &mut dyn HostDocument,
        element: ElementId,
    ) -> Result<(), DocumentError> {
        let mut decoration = select(document, element)?;
        debug!(
            element:% = element,
            decoration = decoration.kind().name(),
            entries = self.entries.len() + 1;
            "Adding decorated element"
        );

        let drawn = decoration.draw(document, &mut self.renderer);
        self.entries.push(DecorationEntry {
            element,
            decoration,
        });
        drawn
    }

    /// Redraws every entry in insertion order.
    ///
    /// Every entry is attempted even when an earlier one fails.
    ///
    /// # Errors
    ///
    /// Returns the first [`DocumentError`] encountered.
    pub fn redraw_all(&mut self, document: &mut dyn HostDocument) -> Result<(), DocumentError> {
        debug!(entries = self.entries.len(); "Redrawing all decorations");

        let mut first_error = None;
        for entry in &mut self.entries {
            if let Err(err) = entry.decoration.draw(document, &mut self.renderer) {
                warn!(element:% = entry.element, err:% = err; "Failed to redraw decoration");
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn entries(&self) -> &[DecorationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
