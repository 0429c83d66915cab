use crate::error::RenderError;
use crate::writer::write_document;
use std::fmt;

/// Handle to an element of one [`SvgDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SvgNodeId(usize);

impl fmt::Display for SvgNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "svg#{}", self.0)
    }
}

/// A single output element: a tag name, ordered attributes, children and
/// optional character data.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<SvgNodeId>,
    parent: Option<SvgNodeId>,
    text: Option<String>,
}

impl SvgElement {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn children(&self) -> &[SvgNodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<SvgNodeId> {
        self.parent
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// An in-memory vector document.
///
/// Elements live in an arena and are linked by [`SvgNodeId`]. An element that
/// was created but never appended is simply not reachable from the root.
/// Two documents built by the same sequence of operations compare equal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgDocument {
    elements: Vec<SvgElement>,
    root: Option<SvgNodeId>,
}

impl SvgDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, name: impl Into<String>) -> SvgNodeId {
        let id = SvgNodeId(self.elements.len());
        self.elements.push(SvgElement {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            parent: None,
            text: None,
        });
        id
    }

    /// Sets an attribute, replacing an existing value in place.
    pub fn set_attribute(&mut self, id: SvgNodeId, name: &str, value: impl Into<String>) {
        let value = value.into();
        let attributes = &mut self.elements[id.0].attributes;
        match attributes.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => attributes.push((name.to_string(), value)),
        }
    }

    pub fn set_text(&mut self, id: SvgNodeId, text: impl Into<String>) {
        self.elements[id.0].text = Some(text.into());
    }

    pub fn append_child(&mut self, parent: SvgNodeId, child: SvgNodeId) {
        self.elements[child.0].parent = Some(parent);
        self.elements[parent.0].children.push(child);
    }

    pub fn set_root(&mut self, id: SvgNodeId) {
        self.root = Some(id);
    }

    pub fn root(&self) -> Option<SvgNodeId> {
        self.root
    }

    pub fn get(&self, id: SvgNodeId) -> Option<&SvgElement> {
        self.elements.get(id.0)
    }

    pub fn element(&self, id: SvgNodeId) -> &SvgElement {
        &self.elements[id.0]
    }

    /// `id` and everything below it, in document order.
    pub fn descendants(&self, id: SvgNodeId) -> Vec<SvgNodeId> {
        let mut result = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            result.push(current);
            stack.extend(self.elements[current.0].children.iter().rev());
        }
        result
    }

    fn reachable(&self) -> Vec<SvgNodeId> {
        self.root.map(|root| self.descendants(root)).unwrap_or_default()
    }

    /// First reachable element whose `id` attribute equals `id`.
    pub fn find_by_id(&self, id: &str) -> Option<SvgNodeId> {
        self.find_by_attribute("id", id)
    }

    /// First reachable element carrying `name="value"`.
    pub fn find_by_attribute(&self, name: &str, value: &str) -> Option<SvgNodeId> {
        self.reachable()
            .into_iter()
            .find(|id| self.elements[id.0].attribute(name) == Some(value))
    }

    /// All reachable elements with the given tag name, in document order.
    pub fn elements_by_name(&self, name: &str) -> Vec<SvgNodeId> {
        self.reachable()
            .into_iter()
            .filter(|id| self.elements[id.0].name == name)
            .collect()
    }

    /// Concatenated character data of `id` and its descendants.
    pub fn text_content(&self, id: SvgNodeId) -> String {
        self.descendants(id)
            .into_iter()
            .filter_map(|id| self.elements[id.0].text.as_deref())
            .collect()
    }

    /// Serializes the reachable tree as XML.
    pub fn to_xml_string(&self) -> Result<String, RenderError> {
        let mut buffer = Vec::new();
        write_document(self, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
