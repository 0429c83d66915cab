use super::num;
use crate::context::ConversionContext;
use crate::error::ConvertError;
use crate::segment::get_lines;
use domsvg_style::ComputedStyle;
use domsvg_traits::VisualDocument;
use domsvg_types::NodeId;

pub(super) fn convert_text<D>(
    node: NodeId,
    ctx: &mut ConversionContext<'_, D>,
) -> Result<(), ConvertError>
where
    D: VisualDocument + ?Sized,
{
    let document = ctx.document();
    let Some(parent) = document.parent(node)? else {
        log::warn!("Skipping text node {} without a parent element", node);
        return Ok(());
    };

    let style = ComputedStyle::from_properties(&document.computed_style(parent)?);
    let line_height = style.line_height_px(ctx.config().normal_line_height_factor);
    let offset = document.offset_position(parent)?;
    let lines = get_lines(document, node, ctx.config().line_box_policy)?;

    let Some(cursor) = ctx.cursor() else {
        return Ok(());
    };
    let out = ctx.output_mut();
    let container = out.create_element("text");
    out.set_attribute(container, "x", num(offset.x));
    out.set_attribute(container, "y", num(offset.y));
    out.set_attribute(container, "style", text_style(&style));

    for line in lines {
        let span = out.create_element("tspan");
        out.set_attribute(span, "x", num(line.rect.left));
        out.set_attribute(span, "y", num(line.rect.top + line_height / 2.0));
        out.set_text(span, line.text);
        out.append_child(container, span);
    }

    out.append_child(cursor, container);
    Ok(())
}

/// Inline style carrying the parent's resolved text properties.
fn text_style(style: &ComputedStyle) -> String {
    [
        ("fill", &style.color),
        ("font-family", &style.font_family),
        ("font-size", &style.font_size),
        ("font-weight", &style.font_weight),
    ]
    .iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(name, value)| format!("{}: {};", name, value))
    .collect::<Vec<_>>()
    .join(" ")
}
