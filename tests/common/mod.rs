pub mod fixtures;
pub mod svg_assertions;

use domsvg::{ConvertConfig, InMemoryDocument, NodeId, PipelineError, SvgDocument, dom_to_svg};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Convert a document from its root with the default configuration
pub fn convert_document(doc: &InMemoryDocument) -> Result<SvgDocument, PipelineError> {
    convert_document_with(doc, ConvertConfig::default())
}

/// Convert a document from its root with a custom configuration
pub fn convert_document_with(
    doc: &InMemoryDocument,
    config: ConvertConfig,
) -> Result<SvgDocument, PipelineError> {
    let root = doc.root().ok_or(PipelineError::MissingRoot)?;
    Ok(dom_to_svg(doc, root, config)?)
}

/// Convert a subtree starting at `node` with the default configuration
pub fn convert_node(doc: &InMemoryDocument, node: NodeId) -> Result<SvgDocument, PipelineError> {
    Ok(dom_to_svg(doc, node, ConvertConfig::default())?)
}

/// Load a JSON fixture and convert it with the default configuration
pub fn convert_fixture(fixture: &Value) -> Result<SvgDocument, PipelineError> {
    let json = serde_json::to_string(fixture).map_err(domsvg::SourceError::from)?;
    domsvg::fixture_to_document(&json, ConvertConfig::default())
}

/// Save SVG output to a file for manual debugging
#[allow(dead_code)]
pub fn save_for_debug(svg: &SvgDocument, name: &str) -> Result<(), PipelineError> {
    std::fs::write(format!("test_output_{}.svg", name), svg.to_xml_string()?)?;
    Ok(())
}
