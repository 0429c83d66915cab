use domsvg::{SvgDocument, SvgNodeId};

/// Attribute value of `id`, or an empty string when it is missing
pub fn attr<'a>(svg: &'a SvgDocument, id: SvgNodeId, name: &str) -> &'a str {
    svg.element(id).attribute(name).unwrap_or_default()
}

/// Tag names of the direct children of `id`
pub fn child_names(svg: &SvgDocument, id: SvgNodeId) -> Vec<String> {
    svg.element(id)
        .children()
        .iter()
        .map(|child| svg.element(*child).name().to_string())
        .collect()
}

/// Children of `id` with the given tag name
pub fn children_named(svg: &SvgDocument, id: SvgNodeId, name: &str) -> Vec<SvgNodeId> {
    svg.element(id)
        .children()
        .iter()
        .copied()
        .filter(|child| svg.element(*child).name() == name)
        .collect()
}

/// The root `<svg>` element, panicking if the document is empty
pub fn root(svg: &SvgDocument) -> SvgNodeId {
    svg.root().expect("conversion created an output root")
}

/// The `<defs>` element under the root
pub fn defs(svg: &SvgDocument) -> SvgNodeId {
    let root = root(svg);
    children_named(svg, root, "defs")
        .first()
        .copied()
        .expect("output root has a defs container")
}

/// Find the first reachable element with `id`, panicking with a readable message otherwise
pub fn by_id(svg: &SvgDocument, id: &str) -> SvgNodeId {
    svg.find_by_id(id)
        .unwrap_or_else(|| panic!("no element with id '{}' in output", id))
}

/// Assert that an element with the given id exists in the SVG
#[macro_export]
macro_rules! assert_svg_has_id {
    ($svg:expr, $id:expr) => {
        assert!(
            $svg.find_by_id($id).is_some(),
            "expected an element with id '{}' in:\n{}",
            $id,
            $svg.to_xml_string().unwrap_or_default()
        );
    };
}

/// Assert that no element with the given id exists in the SVG
#[macro_export]
macro_rules! assert_svg_lacks_id {
    ($svg:expr, $id:expr) => {
        assert!(
            $svg.find_by_id($id).is_none(),
            "did not expect an element with id '{}' in:\n{}",
            $id,
            $svg.to_xml_string().unwrap_or_default()
        );
    };
}
