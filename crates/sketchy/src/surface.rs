//! Overlay surface access.

use log::debug;

use sketchy_core::document::{
    DocumentError, ElementId, HostDocument, OverlaySurface, Positioning,
};

/// Returns the element's overlay surface, creating it on first use.
///
/// An existing surface is returned untouched; callers clear it themselves
/// before redrawing. A new surface is attached as the element's last child
/// and, when the element is not positioned, the element is made `relative`
/// so that the surface aligns to it rather than to an ancestor.
///
/// # Errors
///
/// Returns [`DocumentError::UnknownElement`] if `element` does not belong to
/// `document`.
pub fn ensure_surface(
    document: &mut dyn HostDocument,
    element: ElementId,
) -> Result<&mut OverlaySurface, DocumentError> {
    if document.overlay(element)?.is_none() {
        if !document.positioning(element)?.is_positioned() {
            debug!(element:% = element; "Establishing positioning context for overlay");
            document.set_positioning(element, Positioning::Relative)?;
        }
        return document.attach_overlay(element, OverlaySurface::new());
    }

    document
        .overlay_mut(element)?
        .ok_or(DocumentError::UnknownElement(element))
}
