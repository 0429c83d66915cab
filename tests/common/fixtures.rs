use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use domsvg::{InMemoryDocument, NodeId, Point, Rect, TextFlow};
use image::{ImageFormat, Rgba, RgbaImage};
use serde_json::{Value, json};
use std::io::Cursor;

/// An 800x600 `body` with no styles
pub fn body_document() -> (InMemoryDocument, NodeId) {
    let mut doc = InMemoryDocument::new();
    let body = doc.add_root("body", Rect::new(0.0, 0.0, 800.0, 600.0));
    (doc, body)
}

/// A body holding a single child element at `rect`
pub fn single_child_document(tag: &str, rect: Rect) -> (InMemoryDocument, NodeId, NodeId) {
    let (mut doc, body) = body_document();
    let child = doc
        .add_element(body, tag, rect)
        .expect("body accepts children");
    (doc, body, child)
}

/// Set several computed properties at once
pub fn set_styles(
    doc: &mut InMemoryDocument,
    element: NodeId,
    styles: &[(&str, &str)],
) -> Result<(), domsvg::SourceError> {
    for (name, value) in styles {
        doc.set_style(element, name, value)?;
    }
    Ok(())
}

/// 8px-advance, 16px-row text flow anchored at `rect`'s origin
pub fn flow_in(rect: Rect) -> TextFlow {
    TextFlow {
        origin: Point::new(rect.left, rect.top),
        advance: 8.0,
        line_height: 16.0,
        max_width: rect.width,
    }
}

/// One box per character on a single row, 10px wide and 20px tall
pub fn single_row_boxes(content: &str, left: f32, top: f32) -> Vec<Rect> {
    (0..content.chars().count())
        .map(|i| Rect::new(left + i as f32 * 10.0, top, 10.0, 20.0))
        .collect()
}

/// Encode a solid-color PNG of the given size
pub fn solid_png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba(color));
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("in-memory PNG encoding succeeds");
    bytes.into_inner()
}

pub fn solid_png_base64(width: u32, height: u32, color: [u8; 4]) -> String {
    STANDARD.encode(solid_png(width, height, color))
}

/// A JSON fixture element
pub fn element(tag: &str, rect: [f32; 4], style: Value, children: Vec<Value>) -> Value {
    json!({
        "type": "element",
        "tag": tag,
        "rect": { "left": rect[0], "top": rect[1], "width": rect[2], "height": rect[3] },
        "style": style,
        "children": children
    })
}

/// A JSON fixture text node laid out by the default flow
pub fn text(content: &str) -> Value {
    json!({ "type": "text", "content": content })
}

/// The page used by most pipeline tests: a pink body with a paragraph
pub fn hello_world_fixture() -> Value {
    element(
        "body",
        [0.0, 0.0, 800.0, 600.0],
        json!({ "background-color": "rgb(219, 112, 147)" }),
        vec![element(
            "p",
            [8.0, 8.0, 784.0, 16.0],
            json!({
                "color": "rgb(0, 0, 0)",
                "font-size": "16px",
                "line-height": "normal"
            }),
            vec![text("Hello World")],
        )],
    )
}
