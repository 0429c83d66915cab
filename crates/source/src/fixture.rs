//! JSON description of a pre-laid-out visual tree.
//!
//! ```json
//! {
//!   "type": "element", "tag": "body",
//!   "rect": { "left": 0, "top": 0, "width": 800, "height": 600 },
//!   "style": { "background-color": "rgb(219, 112, 147)" },
//!   "children": [
//!     { "type": "text", "content": "Hello World" }
//!   ]
//! }
//! ```

use crate::document::{InMemoryDocument, TextFlow};
use crate::error::SourceError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use domsvg_traits::LayoutOracle;
use domsvg_types::{NodeId, Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Character advance used when a text fixture gives no layout.
pub const DEFAULT_ADVANCE: f32 = 8.0;
/// Row height used when a text fixture gives no layout.
pub const DEFAULT_LINE_HEIGHT: f32 = 16.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum FixtureNode {
    Element {
        tag: String,
        rect: Rect,
        #[serde(default)]
        style: BTreeMap<String, String>,
        #[serde(default)]
        content_size: Option<Size>,
        #[serde(default)]
        offset: Option<Point>,
        /// Base64-encoded image bytes for image elements.
        #[serde(default)]
        image_base64: Option<String>,
        #[serde(default)]
        children: Vec<FixtureNode>,
    },
    Text {
        content: String,
        #[serde(default)]
        boxes: Option<Vec<Rect>>,
        #[serde(default)]
        flow: Option<TextFlow>,
    },
}

impl InMemoryDocument {
    /// Builds a document from a fixture whose root must be an element.
    pub fn from_fixture(root: &FixtureNode) -> Result<Self, SourceError> {
        let mut doc = InMemoryDocument::new();
        match root {
            FixtureNode::Element { tag, rect, .. } => {
                let id = doc.add_root(tag, *rect);
                doc.fill_element(id, root)?;
            }
            FixtureNode::Text {
                content,
                boxes,
                flow,
            } => {
                let boxes = match (boxes, flow) {
                    (Some(boxes), _) => boxes.clone(),
                    (None, Some(flow)) => flow.char_boxes(content),
                    (None, None) => TextFlow {
                        origin: Point::new(0.0, 0.0),
                        advance: DEFAULT_ADVANCE,
                        line_height: DEFAULT_LINE_HEIGHT,
                        max_width: f32::INFINITY,
                    }
                    .char_boxes(content),
                };
                doc.add_detached_text(content, boxes)?;
            }
        }
        Ok(doc)
    }

    pub fn from_json_str(json: &str) -> Result<Self, SourceError> {
        let root: FixtureNode = serde_json::from_str(json)?;
        Self::from_fixture(&root)
    }

    fn fill_element(&mut self, id: NodeId, node: &FixtureNode) -> Result<(), SourceError> {
        let FixtureNode::Element {
            style,
            content_size,
            offset,
            image_base64,
            children,
            ..
        } = node
        else {
            return Ok(());
        };

        for (name, value) in style {
            self.set_style(id, name, value)?;
        }
        if let Some(size) = content_size {
            self.set_content_size(id, *size)?;
        }
        if let Some(offset) = offset {
            self.set_offset(id, *offset)?;
        }
        if let Some(encoded) = image_base64 {
            self.set_image_data(id, STANDARD.decode(encoded.trim())?)?;
        }

        for child in children {
            match child {
                FixtureNode::Element { tag, rect, .. } => {
                    let child_id = self.add_element(id, tag, *rect)?;
                    self.fill_element(child_id, child)?;
                }
                FixtureNode::Text {
                    content,
                    boxes,
                    flow,
                } => {
                    let flow = match flow {
                        Some(flow) => *flow,
                        None => self.default_flow(id)?,
                    };
                    match boxes {
                        Some(boxes) => self.add_text(id, content, boxes.clone())?,
                        None => self.add_text_flow(id, content, flow)?,
                    };
                }
            }
        }
        Ok(())
    }

    fn default_flow(&self, parent: NodeId) -> Result<TextFlow, SourceError> {
        let rect = self.bounding_geometry(parent)?;
        Ok(TextFlow {
            origin: Point::new(rect.left, rect.top),
            advance: DEFAULT_ADVANCE,
            line_height: DEFAULT_LINE_HEIGHT,
            max_width: rect.width,
        })
    }
}
