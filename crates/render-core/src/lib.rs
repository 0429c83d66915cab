//! Output-side abstractions for vector document generation.
//!
//! This crate provides the tree the converter writes into:
//! - `SvgDocument`, an arena of `SvgElement`s addressed by `SvgNodeId`
//! - lookup helpers used by callers and tests to inspect the result
//! - XML serialization of a finished document

mod document;
mod error;
mod writer;

pub use document::{SvgDocument, SvgElement, SvgNodeId};
pub use error::RenderError;
pub use writer::write_document;

/// The SVG namespace, set on every generated root.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
/// The XLink namespace used by `xlink:href` on images.
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";
