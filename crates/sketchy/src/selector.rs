//! Classification of elements into decorations.

use log::debug;

use sketchy_core::{
    document::{DocumentError, ElementId, HostDocument},
    identifier::Id,
};

use crate::strategy::{Decoration, DefaultBorder, LabelBorder, MenuGlyph, PatternFill, RuledPage};

/// Chooses the decoration for `element`.
///
/// Rules are tried in order and the first match wins:
///
/// 1. a `label` element outlines the control it refers to
/// 2. class `hached` gets a cross-hatched fill
/// 3. class `zigzag` gets a zig-zag fill
/// 4. class `dots` gets a dotted fill
/// 5. class `SketchyBurger` gets the menu glyph
/// 6. the `body` element gets the ruled page background
/// 7. anything else gets a plain outline
///
/// Class names are case-sensitive, tag names are not.
///
/// # Errors
///
/// Returns [`DocumentError::UnknownElement`] if `element` does not belong to
/// `document`.
pub fn select(
    document: &dyn HostDocument,
    element: ElementId,
) -> Result<Decoration, DocumentError> {
    let tag = document.tag_name(element)?;
    let has_class = |class: &str| document.has_class(element, Id::new(class));

    let decoration = if tag == "label" {
        Decoration::LabelBorder(LabelBorder::new(element))
    } else if has_class("hached")? {
        Decoration::HachureFill(PatternFill::hachure(element))
    } else if has_class("zigzag")? {
        Decoration::ZigZagFill(PatternFill::zigzag(element))
    } else if has_class("dots")? {
        Decoration::ParametrizedFill(PatternFill::parametrized(element, Some("dots")))
    } else if has_class("SketchyBurger")? {
        Decoration::MenuGlyph(MenuGlyph::new(element))
    } else if tag == "body" {
        Decoration::RuledPage(RuledPage::new(element))
    } else {
        Decoration::DefaultBorder(DefaultBorder::new(element))
    };

    debug!(
        element:% = element,
        tag:% = tag,
        decoration = decoration.kind().name();
        "Selected decoration"
    );
    Ok(decoration)
}
