//! The seam between the converter and whatever engine laid the page out.
//!
//! The converter never computes style or geometry itself. It walks a
//! [`VisualTree`] and asks a [`LayoutOracle`] for resolved values, so any
//! engine (a headless browser bridge, a test fixture, a native layout crate)
//! can drive it.

use domsvg_style::PropertyMap;
use domsvg_types::{NodeId, Point, Rect, Size};
use std::fmt::Debug;
use thiserror::Error;

/// Error type for oracle queries.
///
/// The converter treats every one of these as fatal: it has no way to paint
/// a node whose style or geometry cannot be resolved.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OracleError {
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("Node {0} is not an element")]
    NotAnElement(NodeId),

    #[error("Node {0} is not a text node")]
    NotText(NodeId),

    #[error("Range {start}..{end} is out of bounds for text node {node} of length {len}")]
    RangeOutOfBounds {
        node: NodeId,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("Failed to rasterize image {node}: {message}")]
    Rasterize { node: NodeId, message: String },
}

/// What a visual node is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'a> {
    Element { tag: &'a str },
    Text { content: &'a str },
}

/// Read-only structure of a visual tree.
pub trait VisualTree: Debug {
    /// The kind of `node`, borrowing its tag name or character data.
    fn kind(&self, node: NodeId) -> Result<NodeKind<'_>, OracleError>;

    /// The parent element, or `None` for the tree root.
    fn parent(&self, node: NodeId) -> Result<Option<NodeId>, OracleError>;

    /// Child nodes in document order. Text nodes have none.
    fn children(&self, node: NodeId) -> Result<&[NodeId], OracleError>;
}

/// Resolved style, geometry and rasterization for nodes of a visual tree.
///
/// All geometry is in document pixels and already accounts for transforms
/// and offset parents.
pub trait LayoutOracle: Debug {
    /// The computed style snapshot of an element.
    fn computed_style(&self, element: NodeId) -> Result<PropertyMap, OracleError>;

    /// The border box of an element.
    fn bounding_geometry(&self, element: NodeId) -> Result<Rect, OracleError>;

    /// The inner (client) size of an element, excluding borders and scrollbars.
    fn content_size(&self, element: NodeId) -> Result<Size, OracleError>;

    /// The element's top-left corner relative to its offset parent.
    fn offset_position(&self, element: NodeId) -> Result<Point, OracleError>;

    /// The box of the characters `start..end` of a text node.
    ///
    /// Indices count characters, not bytes.
    fn sub_range_geometry(&self, text: NodeId, start: usize, end: usize)
    -> Result<Rect, OracleError>;

    /// Draws an image element into a `width`×`height` bitmap and returns an
    /// embeddable payload (typically a `data:` URL).
    fn rasterize(&self, image: NodeId, width: u32, height: u32) -> Result<String, OracleError>;

    /// Returns a human-readable name for this oracle (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Anything that is both a tree and an oracle for it.
pub trait VisualDocument: VisualTree + LayoutOracle {}

impl<T: VisualTree + LayoutOracle + ?Sized> VisualDocument for T {}
