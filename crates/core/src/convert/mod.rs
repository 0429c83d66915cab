//! The recursive tree-to-SVG walk.
//!
//! Every visited node emits at most one output subtree under the context's
//! cursor. Elements open a group and become the cursor for their children;
//! text nodes become `<text>` containers; image elements become bitmaps.

mod element;
mod paint;
mod text;

use crate::context::ConversionContext;
use crate::error::ConvertError;
use domsvg_render_core::{SVG_NAMESPACE, SvgNodeId, XLINK_NAMESPACE};
use domsvg_traits::{NodeKind, VisualDocument};
use domsvg_types::{NodeId, Size};

/// Formats a coordinate the way it appears in output attributes.
pub(crate) fn num(value: f32) -> String {
    value.to_string()
}

/// Converts `node` and its subtree into the context's output document.
///
/// The first call on a fresh context creates the `<svg>` root, sized to the
/// node's content box, with an opaque `document-background` rectangle as
/// its first child. Later calls (the walk recurses through this function)
/// append under the current cursor. Returns the output root.
pub fn convert<D>(node: NodeId, ctx: &mut ConversionContext<'_, D>) -> Result<SvgNodeId, ConvertError>
where
    D: VisualDocument + ?Sized,
{
    let root = match ctx.root() {
        Some(root) => root,
        None => create_root(node, ctx)?,
    };
    ctx.ensure_defs(root);

    let document = ctx.document();
    match document.kind(node)? {
        NodeKind::Element { tag } => {
            log::trace!("Visiting <{}> {}", tag, node);
            element::convert_element(node, tag, ctx)?;
        }
        NodeKind::Text { .. } => {
            log::trace!("Visiting text {}", node);
            text::convert_text(node, ctx)?;
        }
    }

    Ok(root)
}

fn create_root<D>(node: NodeId, ctx: &mut ConversionContext<'_, D>) -> Result<SvgNodeId, ConvertError>
where
    D: VisualDocument + ?Sized,
{
    let document = ctx.document();
    let size = match document.kind(node)? {
        NodeKind::Element { .. } => document.content_size(node)?,
        NodeKind::Text { .. } => Size::zero(),
    };
    let width = num(size.width);
    let height = num(size.height);
    let background_fill = ctx.config().document_background.clone();

    let out = ctx.output_mut();
    let svg = out.create_element("svg");
    out.set_attribute(svg, "xmlns", SVG_NAMESPACE);
    out.set_attribute(svg, "xmlns:xlink", XLINK_NAMESPACE);
    out.set_attribute(svg, "width", width.as_str());
    out.set_attribute(svg, "height", height.as_str());
    out.set_attribute(svg, "viewBox", format!("0 0 {} {}", width, height));
    out.set_root(svg);

    let background = out.create_element("rect");
    out.set_attribute(background, "width", width.as_str());
    out.set_attribute(background, "height", height.as_str());
    out.set_attribute(background, "x", "0");
    out.set_attribute(background, "y", "0");
    out.set_attribute(background, "fill", background_fill);
    out.set_attribute(background, "id", "document-background");
    out.set_attribute(background, "data-background", "document");
    out.append_child(svg, background);

    log::debug!(
        "Created {}x{} output root for {} using {}",
        width,
        height,
        node,
        document.name()
    );
    Ok(svg)
}
