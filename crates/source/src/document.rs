use crate::error::SourceError;
use crate::raster;
use domsvg_style::PropertyMap;
use domsvg_traits::{LayoutOracle, NodeKind, OracleError, VisualTree};
use domsvg_types::{NodeId, Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Encoded image bytes (PNG, JPEG or GIF) shared between documents.
pub type SharedImageData = Arc<Vec<u8>>;

/// A fixed-advance text layout: every character is `advance` wide, rows are
/// `line_height` tall, and words wrap greedily at `max_width`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFlow {
    pub origin: Point,
    pub advance: f32,
    pub line_height: f32,
    pub max_width: f32,
}

impl TextFlow {
    /// Lays `content` out and returns one box per character.
    pub fn char_boxes(&self, content: &str) -> Vec<Rect> {
        let mut boxes = Vec::with_capacity(content.chars().count());
        let mut x = self.origin.x;
        let mut y = self.origin.y;

        for (index, word) in content.split(' ').enumerate() {
            if index > 0 {
                boxes.push(Rect::new(x, y, self.advance, self.line_height));
                x += self.advance;
            }

            let word_width = word.chars().count() as f32 * self.advance;
            if x > self.origin.x && x + word_width > self.origin.x + self.max_width {
                x = self.origin.x;
                y += self.line_height;
            }

            for _ in word.chars() {
                boxes.push(Rect::new(x, y, self.advance, self.line_height));
                x += self.advance;
            }
        }

        boxes
    }
}

#[derive(Debug, Clone)]
struct ElementData {
    tag: String,
    properties: PropertyMap,
    rect: Rect,
    content_size: Option<Size>,
    offset: Option<Point>,
    image: Option<SharedImageData>,
}

#[derive(Debug, Clone)]
struct TextData {
    content: String,
    char_boxes: Vec<Rect>,
}

#[derive(Debug, Clone)]
enum NodeData {
    Element(ElementData),
    Text(TextData),
}

#[derive(Debug, Clone)]
struct Entry {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A visual tree whose style and geometry were resolved ahead of time.
///
/// This is the simplest oracle: every answer is a lookup. It is used by the
/// CLI (loaded from a JSON fixture) and by tests.
///
/// # Example
///
/// ```ignore
/// let mut doc = InMemoryDocument::new();
/// let body = doc.add_root("body", Rect::new(0.0, 0.0, 800.0, 600.0));
/// doc.set_style(body, "background-color", "rgb(255, 0, 0)")?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    nodes: Vec<Entry>,
    root: Option<NodeId>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first element added with [`add_root`](Self::add_root).
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, data: NodeData, parent: Option<NodeId>) -> Result<NodeId, SourceError> {
        let id = NodeId::new(self.nodes.len());
        if let Some(parent) = parent {
            match &self.entry(parent)?.data {
                NodeData::Element(_) => {}
                NodeData::Text(_) => return Err(SourceError::NotAContainer(parent)),
            }
        }
        self.nodes.push(Entry {
            data,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(id);
        }
        Ok(id)
    }

    fn new_element(tag: &str, rect: Rect) -> NodeData {
        NodeData::Element(ElementData {
            tag: tag.to_string(),
            properties: PropertyMap::new(),
            rect,
            content_size: None,
            offset: None,
            image: None,
        })
    }

    /// Adds a parentless element and makes it the document root if there is
    /// none yet.
    pub fn add_root(&mut self, tag: &str, rect: Rect) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Entry {
            data: Self::new_element(tag, rect),
            parent: None,
            children: Vec::new(),
        });
        self.root.get_or_insert(id);
        id
    }

    pub fn add_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        rect: Rect,
    ) -> Result<NodeId, SourceError> {
        self.push(Self::new_element(tag, rect), Some(parent))
    }

    /// Adds a text node with one explicit box per character.
    pub fn add_text(
        &mut self,
        parent: NodeId,
        content: &str,
        char_boxes: Vec<Rect>,
    ) -> Result<NodeId, SourceError> {
        self.insert_text(Some(parent), content, char_boxes)
    }

    /// Adds a text node laid out by `flow`.
    pub fn add_text_flow(
        &mut self,
        parent: NodeId,
        content: &str,
        flow: TextFlow,
    ) -> Result<NodeId, SourceError> {
        self.insert_text(Some(parent), content, flow.char_boxes(content))
    }

    /// Adds a text node that belongs to no element.
    pub fn add_detached_text(
        &mut self,
        content: &str,
        char_boxes: Vec<Rect>,
    ) -> Result<NodeId, SourceError> {
        self.insert_text(None, content, char_boxes)
    }

    fn insert_text(
        &mut self,
        parent: Option<NodeId>,
        content: &str,
        char_boxes: Vec<Rect>,
    ) -> Result<NodeId, SourceError> {
        let chars = content.chars().count();
        if chars != char_boxes.len() {
            return Err(SourceError::BoxCountMismatch {
                chars,
                boxes: char_boxes.len(),
            });
        }
        self.push(
            NodeData::Text(TextData {
                content: content.to_string(),
                char_boxes,
            }),
            parent,
        )
    }

    pub fn set_style(
        &mut self,
        element: NodeId,
        name: &str,
        value: &str,
    ) -> Result<(), SourceError> {
        self.element_mut(element)?
            .properties
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    pub fn set_content_size(&mut self, element: NodeId, size: Size) -> Result<(), SourceError> {
        self.element_mut(element)?.content_size = Some(size);
        Ok(())
    }

    pub fn set_offset(&mut self, element: NodeId, offset: Point) -> Result<(), SourceError> {
        self.element_mut(element)?.offset = Some(offset);
        Ok(())
    }

    /// Attaches encoded image bytes that [`LayoutOracle::rasterize`] will draw.
    pub fn set_image_data(
        &mut self,
        element: NodeId,
        data: impl Into<SharedImageData>,
    ) -> Result<(), SourceError> {
        self.element_mut(element)?.image = Some(data.into());
        Ok(())
    }

    fn entry(&self, node: NodeId) -> Result<&Entry, OracleError> {
        self.nodes
            .get(node.index())
            .ok_or(OracleError::UnknownNode(node))
    }

    fn element(&self, node: NodeId) -> Result<&ElementData, OracleError> {
        match &self.entry(node)?.data {
            NodeData::Element(element) => Ok(element),
            NodeData::Text(_) => Err(OracleError::NotAnElement(node)),
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Result<&mut ElementData, OracleError> {
        let entry = self
            .nodes
            .get_mut(node.index())
            .ok_or(OracleError::UnknownNode(node))?;
        match &mut entry.data {
            NodeData::Element(element) => Ok(element),
            NodeData::Text(_) => Err(OracleError::NotAnElement(node)),
        }
    }

    fn text(&self, node: NodeId) -> Result<&TextData, OracleError> {
        match &self.entry(node)?.data {
            NodeData::Text(text) => Ok(text),
            NodeData::Element(_) => Err(OracleError::NotText(node)),
        }
    }
}

impl VisualTree for InMemoryDocument {
    fn kind(&self, node: NodeId) -> Result<NodeKind<'_>, OracleError> {
        Ok(match &self.entry(node)?.data {
            NodeData::Element(element) => NodeKind::Element { tag: &element.tag },
            NodeData::Text(text) => NodeKind::Text {
                content: &text.content,
            },
        })
    }

    fn parent(&self, node: NodeId) -> Result<Option<NodeId>, OracleError> {
        Ok(self.entry(node)?.parent)
    }

    fn children(&self, node: NodeId) -> Result<&[NodeId], OracleError> {
        Ok(&self.entry(node)?.children)
    }
}

impl LayoutOracle for InMemoryDocument {
    fn computed_style(&self, element: NodeId) -> Result<PropertyMap, OracleError> {
        Ok(self.element(element)?.properties.clone())
    }

    fn bounding_geometry(&self, element: NodeId) -> Result<Rect, OracleError> {
        Ok(self.element(element)?.rect)
    }

    fn content_size(&self, element: NodeId) -> Result<Size, OracleError> {
        let element = self.element(element)?;
        Ok(element
            .content_size
            .unwrap_or_else(|| Size::new(element.rect.width, element.rect.height)))
    }

    fn offset_position(&self, element: NodeId) -> Result<Point, OracleError> {
        let element = self.element(element)?;
        Ok(element
            .offset
            .unwrap_or_else(|| Point::new(element.rect.left, element.rect.top)))
    }

    fn sub_range_geometry(
        &self,
        text: NodeId,
        start: usize,
        end: usize,
    ) -> Result<Rect, OracleError> {
        let boxes = &self.text(text)?.char_boxes;
        if start > end || end > boxes.len() {
            return Err(OracleError::RangeOutOfBounds {
                node: text,
                start,
                end,
                len: boxes.len(),
            });
        }

        if start == end {
            // A collapsed range sits at the leading edge of the next character,
            // or the trailing edge of the last one.
            return Ok(match (boxes.get(start), boxes.last()) {
                (Some(next), _) => Rect::new(next.left, next.top, 0.0, next.height),
                (None, Some(last)) => Rect::new(last.right(), last.top, 0.0, last.height),
                (None, None) => Rect::default(),
            });
        }

        let first = boxes[start];
        Ok(boxes[start + 1..end]
            .iter()
            .fold(first, |acc, rect| acc.union(rect)))
    }

    fn rasterize(&self, image: NodeId, width: u32, height: u32) -> Result<String, OracleError> {
        let data = self
            .element(image)?
            .image
            .clone()
            .ok_or_else(|| OracleError::Rasterize {
                node: image,
                message: "no image data attached".to_string(),
            })?;
        raster::to_data_url(&data, width, height).map_err(|message| OracleError::Rasterize {
            node: image,
            message,
        })
    }

    fn name(&self) -> &'static str {
        "InMemoryDocument"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_flow_wraps_words() {
        let flow = TextFlow {
            origin: Point::new(0.0, 0.0),
            advance: 10.0,
            line_height: 20.0,
            max_width: 60.0,
        };
        let boxes = flow.char_boxes("Hello World");
        assert_eq!(boxes.len(), 11);
        assert_eq!(boxes[0], Rect::new(0.0, 0.0, 10.0, 20.0));
        // The separator stays on the first row, the second word wraps.
        assert_eq!(boxes[5].top, 0.0);
        assert_eq!(boxes[6], Rect::new(0.0, 20.0, 10.0, 20.0));
    }

    #[test]
    fn test_sub_range_geometry_unions_characters() -> Result<(), SourceError> {
        let mut doc = InMemoryDocument::new();
        let root = doc.add_root("p", Rect::new(0.0, 0.0, 100.0, 20.0));
        let flow = TextFlow {
            origin: Point::new(5.0, 0.0),
            advance: 10.0,
            line_height: 20.0,
            max_width: 100.0,
        };
        let text = doc.add_text_flow(root, "abc de", flow)?;

        assert_eq!(
            doc.sub_range_geometry(text, 0, 3)?,
            Rect::new(5.0, 0.0, 30.0, 20.0)
        );
        assert_eq!(
            doc.sub_range_geometry(text, 6, 6)?,
            Rect::new(65.0, 0.0, 0.0, 20.0)
        );
        assert!(matches!(
            doc.sub_range_geometry(text, 2, 9),
            Err(OracleError::RangeOutOfBounds { len: 6, .. })
        ));
        Ok(())
    }

    #[test]
    fn test_tree_structure() -> Result<(), SourceError> {
        let mut doc = InMemoryDocument::new();
        let root = doc.add_root("div", Rect::new(0.0, 0.0, 10.0, 10.0));
        let child = doc.add_element(root, "span", Rect::default())?;
        let text = doc.add_text(child, "", Vec::new())?;

        assert_eq!(doc.root(), Some(root));
        assert_eq!(doc.children(root)?, &[child]);
        assert_eq!(doc.parent(text)?, Some(child));
        assert_eq!(doc.kind(child)?, NodeKind::Element { tag: "span" });
        assert!(matches!(
            doc.add_element(text, "b", Rect::default()),
            Err(SourceError::NotAContainer(_))
        ));
        assert!(matches!(
            doc.bounding_geometry(text),
            Err(OracleError::NotAnElement(_))
        ));
        Ok(())
    }

    #[test]
    fn test_box_count_must_match() {
        let mut doc = InMemoryDocument::new();
        let root = doc.add_root("div", Rect::default());
        assert!(matches!(
            doc.add_text(root, "ab", vec![Rect::default()]),
            Err(SourceError::BoxCountMismatch { chars: 2, boxes: 1 })
        ));
    }

    #[test]
    fn test_defaults_follow_the_border_box() -> Result<(), OracleError> {
        let mut doc = InMemoryDocument::new();
        let root = doc.add_root("div", Rect::new(3.0, 4.0, 30.0, 40.0));
        assert_eq!(doc.content_size(root)?, Size::new(30.0, 40.0));
        assert_eq!(doc.offset_position(root)?, Point::new(3.0, 4.0));
        Ok(())
    }
}
