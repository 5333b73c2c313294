//! Integration tests for the SketchBuilder API and the decoration pipeline

use sketchy::{
    SketchBuilder, SketchyError,
    config::{AppConfig, ExportConfig, RenderConfig, TargetsConfig},
    document::{ColorProperty, HostDocument, Positioning},
    draw::StackLayer,
    geometry::Size,
    manager::DecorationManager,
    memory::MemoryDocument,
    rough::RoughRenderer,
    strategy::DecorationKind,
};

const LANDING_PAGE: &str = r##"
    [viewport]
    width = 800
    height = 600

    [body]
    background = "#fffdf5"
    color = "#222"

    [[body.children]]
    tag = "nav"
    id = "navbar"
    width = 800
    height = 60

    [[body.children.children]]
    tag = "button"
    class = ["menu-button", "SketchyBurger"]
    x = 740
    y = 10
    width = 40
    height = 40
    background = "white"

    [[body.children]]
    tag = "section"
    id = "history"
    class = ["hached"]
    x = 40
    y = 100
    width = 720
    height = 160
    background = "#ffe08a"
    text = "Our history"

    [[body.children]]
    tag = "form"
    id = "formSketch"
    x = 40
    y = 300
    width = 400
    height = 200
    position = "relative"

    [[body.children.children]]
    tag = "label"
    x = 20
    y = 20
    width = 80
    height = 20
    text = "Email"
    attributes = { for = "email" }

    [[body.children.children]]
    tag = "input"
    id = "email"
    x = 20
    y = 50
    width = 240
    height = 30

    [[body.children.children]]
    tag = "label"
    x = 20
    y = 100
    width = 80
    height = 20
    text = "Orphan"
    attributes = { for = "nowhere" }

    [[body.children]]
    tag = "footer"
    y = 540
    width = 800
    height = 60
"##;

fn seeded_builder(seed: u64) -> SketchBuilder {
    SketchBuilder::new(AppConfig::new(
        RenderConfig::new(Some(seed), true),
        TargetsConfig::default(),
        ExportConfig::default(),
    ))
}

#[test]
fn test_builder_api_exists() {
    let _builder = SketchBuilder::default();
}

#[test]
fn test_landing_page_decorations() {
    let builder = seeded_builder(1);
    let mut document = builder.load_document(LANDING_PAGE).expect("Failed to load page");

    let session = builder.decorate(&mut document, &[]).expect("Failed to decorate");

    let kinds: Vec<DecorationKind> = session
        .manager()
        .entries()
        .iter()
        .map(|entry| entry.decoration().kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            DecorationKind::HachureFill,
            DecorationKind::DefaultBorder,
            DecorationKind::LabelBorder,
            DecorationKind::LabelBorder,
            DecorationKind::DefaultBorder,
            DecorationKind::DefaultBorder,
            DecorationKind::RuledPage,
            DecorationKind::MenuGlyph,
        ]
    );

    // The orphan label draws nothing
    assert_eq!(document.overlay_count(), 7);

    let history = document.element_by_id("history").unwrap();
    assert!(
        document
            .computed_color(history, ColorProperty::Background)
            .unwrap()
            .is_transparent()
    );
    assert_eq!(
        document.overlay(history).unwrap().unwrap().layer(),
        StackLayer::Behind
    );
    assert_eq!(document.positioning(history).unwrap(), Positioning::Relative);
}

#[test]
fn test_resize_keeps_one_overlay_per_element() {
    let builder = seeded_builder(2);
    let mut document = builder.load_document(LANDING_PAGE).unwrap();

    let counts_before: Vec<usize> = document
        .tree_order()
        .into_iter()
        .filter_map(|element| document.overlay(element).unwrap().map(|s| s.child_count()))
        .collect();
    assert!(counts_before.is_empty());

    builder
        .decorate(
            &mut document,
            &[Size::new(1024.0, 768.0), Size::new(800.0, 600.0)],
        )
        .unwrap();

    let root = document.root();
    let page = document.overlay(root).unwrap().unwrap();
    assert_eq!(page.size(), Size::new(800.0, 600.0));
    // 30 horizontal, 40 vertical, 1 margin
    assert_eq!(page.child_count(), 71);
    assert_eq!(document.overlay_count(), 7);
}

#[test]
fn test_render_is_reproducible_with_seed() {
    let render = |seed| {
        let builder = seeded_builder(seed);
        let mut document = builder.load_document(LANDING_PAGE).unwrap();
        builder.decorate(&mut document, &[]).unwrap();
        builder.render_svg(&document).unwrap()
    };

    let svg = render(5);
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("Our history"));
    assert_eq!(svg, render(5));
    assert_ne!(svg, render(6));
}

#[test]
fn test_manager_with_custom_document() {
    let mut document = MemoryDocument::new(Size::new(300.0, 200.0));
    let root = document.root();
    let mut manager = DecorationManager::new(RoughRenderer::with_seed(9));

    manager.add_element(&mut document, root).unwrap();
    manager.redraw_all(&mut document).unwrap();

    assert_eq!(manager.len(), 1);
    assert_eq!(
        manager.entries()[0].decoration().kind(),
        DecorationKind::RuledPage
    );
}

#[test]
fn test_parse_invalid_page_returns_error() {
    let builder = SketchBuilder::default();

    let result = builder.load_document("this is not a page");
    assert!(matches!(result, Err(SketchyError::Parse { .. })));

    let result = builder.load_document("[body]\nbackground = \"white\"\n");
    assert!(result.is_err(), "a page without viewport is invalid");
}

#[test]
fn test_unbounded_viewport_is_rejected() {
    let builder = SketchBuilder::default();

    let viewports = [
        "width = inf\nheight = 600",
        "width = 1e9\nheight = 10",
        "width = 800\nheight = nan",
    ];
    for viewport in viewports {
        let page = format!("[viewport]\n{viewport}\n");
        assert!(
            matches!(builder.load_document(&page), Err(SketchyError::Page(_))),
            "`{viewport}` should be rejected"
        );
    }

    let mut document = builder.load_document(LANDING_PAGE).unwrap();
    let result = builder.decorate(&mut document, &[Size::new(f32::INFINITY, 600.0)]);
    assert!(matches!(result, Err(SketchyError::Page(_))));
    assert_eq!(document.viewport(), Size::new(800.0, 600.0));
}

#[test]
fn test_write_svg_to_file() {
    let builder = seeded_builder(4);
    let mut document = builder.load_document(LANDING_PAGE).unwrap();
    builder.decorate(&mut document, &[]).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("landing.svg");
    builder.write_svg(&document, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, builder.render_svg(&document).unwrap());

    let missing = dir.path().join("missing").join("landing.svg");
    assert!(matches!(
        builder.write_svg(&document, &missing),
        Err(SketchyError::Io(_))
    ));
}
