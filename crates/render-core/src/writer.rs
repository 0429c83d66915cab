use crate::document::{SvgDocument, SvgNodeId};
use crate::error::RenderError;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// Streams the tree reachable from the document root as XML into `writer`.
///
/// Elements without children or text are written self-closing. Character
/// data and attribute values are escaped.
pub fn write_document<W: Write>(document: &SvgDocument, writer: W) -> Result<(), RenderError> {
    let root = document.root().ok_or(RenderError::EmptyDocument)?;
    let mut xml = Writer::new(writer);
    write_element(document, root, &mut xml)
}

fn write_element<W: Write>(
    document: &SvgDocument,
    id: SvgNodeId,
    xml: &mut Writer<W>,
) -> Result<(), RenderError> {
    let element = document.element(id);
    let mut start = BytesStart::new(element.name());
    for attribute in element.attributes() {
        start.push_attribute(attribute);
    }

    if element.children().is_empty() && element.text().is_none() {
        xml.write_event(Event::Empty(start))?;
        return Ok(());
    }

    xml.write_event(Event::Start(start))?;
    if let Some(text) = element.text() {
        xml.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in element.children() {
        write_element(document, *child, xml)?;
    }
    xml.write_event(Event::End(BytesEnd::new(element.name())))?;
    Ok(())
}
