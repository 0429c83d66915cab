use super::{convert, num, paint};
use crate::context::ConversionContext;
use crate::error::ConvertError;
use domsvg_render_core::SvgNodeId;
use domsvg_style::{BoxSide, ComputedStyle};
use domsvg_traits::VisualDocument;
use domsvg_types::{NodeId, Rect};

pub(super) fn convert_element<D>(
    node: NodeId,
    tag: &str,
    ctx: &mut ConversionContext<'_, D>,
) -> Result<(), ConvertError>
where
    D: VisualDocument + ?Sized,
{
    let document = ctx.document();
    let rect = document.bounding_geometry(node)?;
    let style = ComputedStyle::from_properties(&document.computed_style(node)?);
    let name = tag.to_ascii_lowercase();

    // Invisible subtrees contribute nothing, not even their text.
    if !style.is_rendered() {
        log::debug!(
            "Skipping invisible <{}> {} (display: {}, opacity: {}, visibility: {})",
            name,
            node,
            style.display,
            style.opacity,
            style.visibility
        );
        return Ok(());
    }

    if ctx.config().is_image_tag(&name) {
        return emit_image(node, rect, ctx);
    }

    let Some(parent) = ctx.cursor() else {
        return Ok(());
    };
    let out = ctx.output_mut();
    let group = out.create_element("g");
    out.set_attribute(group, "id", name.as_str());
    out.set_attribute(group, "data-id", name.as_str());
    out.append_child(parent, group);

    ctx.with_cursor(group, |ctx| {
        if rect.has_area() {
            paint_box(group, &name, rect, &style, ctx);
        }
        for child in document.children(node)? {
            convert(*child, ctx)?;
        }
        Ok(())
    })
}

/// Image elements are leaves: the bitmap replaces the whole subtree.
fn emit_image<D>(
    node: NodeId,
    rect: Rect,
    ctx: &mut ConversionContext<'_, D>,
) -> Result<(), ConvertError>
where
    D: VisualDocument + ?Sized,
{
    let width = rect.width.max(0.0).round() as u32;
    let height = rect.height.max(0.0).round() as u32;
    let payload = ctx.document().rasterize(node, width, height)?;

    let Some(parent) = ctx.cursor() else {
        return Ok(());
    };
    let out = ctx.output_mut();
    let image = out.create_element("image");
    out.set_attribute(image, "id", "img");
    out.set_attribute(image, "x", num(rect.left));
    out.set_attribute(image, "y", num(rect.top));
    out.set_attribute(image, "width", num(rect.width));
    out.set_attribute(image, "height", num(rect.height));
    out.set_attribute(image, "xlink:href", payload);
    out.append_child(parent, image);
    Ok(())
}

/// Emits the side borders of `rect` followed by its background rectangle.
fn paint_box<D>(
    group: SvgNodeId,
    name: &str,
    rect: Rect,
    style: &ComputedStyle,
    ctx: &mut ConversionContext<'_, D>,
) where
    D: VisualDocument + ?Sized,
{
    let fill = paint::background_paint(style, ctx)
        .unwrap_or_else(|| style.background_fill().to_string());

    let out = ctx.output_mut();
    let background = out.create_element("rect");
    out.set_attribute(background, "width", num(rect.width));
    out.set_attribute(background, "height", num(rect.height));
    out.set_attribute(background, "x", num(rect.left));
    out.set_attribute(background, "y", num(rect.top));
    out.set_attribute(background, "fill", fill);
    out.set_attribute(background, "id", format!("{}-background", name));
    out.set_attribute(background, "data-background", name);

    for side in BoxSide::ALL {
        let border = style.border(side);
        if !border.is_visible() {
            continue;
        }
        let ((x1, y1), (x2, y2)) = border_endpoints(side, rect);
        let line = out.create_element("line");
        out.set_attribute(line, "stroke", border.color.as_str());
        out.set_attribute(line, "stroke-width", border.width.as_str());
        out.set_attribute(line, "x1", num(x1));
        out.set_attribute(line, "x2", num(x2));
        out.set_attribute(line, "y1", num(y1));
        out.set_attribute(line, "y2", num(y2));
        out.append_child(group, line);
    }

    out.append_child(group, background);
}

/// Start and end point of a border side. The sides run clockwise around the
/// box, so each stroke starts where the previous one ended.
fn border_endpoints(side: BoxSide, rect: Rect) -> ((f32, f32), (f32, f32)) {
    let (left, top, right, bottom) = (rect.left, rect.top, rect.right(), rect.bottom());
    match side {
        BoxSide::Top => ((left, top), (right, top)),
        BoxSide::Right => ((right, top), (right, bottom)),
        BoxSide::Bottom => ((right, bottom), (left, bottom)),
        BoxSide::Left => ((left, bottom), (left, top)),
    }
}
