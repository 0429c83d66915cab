//! # domsvg
//!
//! Snapshots a rendered document tree as a static SVG: every visible element
//! becomes a group with its background and borders, text becomes positioned
//! `<tspan>` rows, and images are embedded as bitmaps.
//!
//! The work happens in the workspace crates; this crate re-exports them and
//! adds the fixture-to-SVG pipeline behind the `domsvg` binary.

pub mod error;

pub use domsvg_core::{
    ConversionContext, ConvertConfig, ConvertError, Line, LineBoxPolicy, convert, dom_to_svg,
    get_lines,
};
pub use domsvg_render_core::{RenderError, SvgDocument, SvgElement, SvgNodeId};
pub use domsvg_source::{FixtureNode, InMemoryDocument, SourceError, TextFlow};
pub use domsvg_style::{
    Background, BackgroundPosition, BackgroundSize, ComputedStyle, LinearGradient,
    parse_background_image, parse_background_position, parse_background_size,
};
pub use domsvg_traits::{LayoutOracle, NodeKind, OracleError, VisualDocument, VisualTree};
pub use domsvg_types::{NodeId, Point, Rect, Size};
pub use error::PipelineError;

/// Loads a JSON fixture (see [`FixtureNode`]) and converts it to an SVG tree.
pub fn fixture_to_document(json: &str, config: ConvertConfig) -> Result<SvgDocument, PipelineError> {
    let document = InMemoryDocument::from_json_str(json)?;
    let root = document.root().ok_or(PipelineError::MissingRoot)?;
    log::debug!("Loaded fixture with {} nodes", document.len());
    Ok(dom_to_svg(&document, root, config)?)
}

/// Converts a JSON fixture straight to SVG markup.
pub fn fixture_to_svg(json: &str, config: ConvertConfig) -> Result<String, PipelineError> {
    let svg = fixture_to_document(json, config)?;
    Ok(svg.to_xml_string()?)
}
