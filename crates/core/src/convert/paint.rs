//! Paint servers for element backgrounds.
//!
//! A background image or gradient becomes a `<pattern>` (plus a
//! `<linearGradient>` for gradients) inside the shared `<defs>`, and the
//! background rectangle is filled with a reference to it.

use super::num;
use crate::context::ConversionContext;
use domsvg_render_core::SvgNodeId;
use domsvg_style::{
    Background, BackgroundPosition, BackgroundSize, ComputedStyle, LinearGradient,
    parse_background_image, parse_background_position, parse_background_size,
};
use domsvg_traits::VisualDocument;

/// Registers the paint server for `style`'s background, if it has one, and
/// returns the fill value referencing it.
///
/// Returns `None` when the background is a plain color, or when an image
/// background lacks a parsed size and position.
pub(super) fn background_paint<D>(
    style: &ComputedStyle,
    ctx: &mut ConversionContext<'_, D>,
) -> Option<String>
where
    D: VisualDocument + ?Sized,
{
    let size = parse_background_size(&style.background_size);
    let position = parse_background_position(&style.background_position);

    match parse_background_image(&style.background_image) {
        Background::None => None,
        Background::Image { url } => match (size, position) {
            (
                BackgroundSize::Parsed { width, height },
                BackgroundPosition::Parsed { left, top },
            ) => Some(image_pattern(&url, (width, height), (left, top), ctx)),
            _ => {
                log::debug!(
                    "Background image '{}' has no usable size/position ({:?}, {:?})",
                    url,
                    size,
                    position
                );
                None
            }
        },
        Background::LinearGradient(gradient) => {
            Some(gradient_pattern(&gradient, size, position, ctx))
        }
    }
}

fn defs<D>(ctx: &mut ConversionContext<'_, D>) -> Option<SvgNodeId>
where
    D: VisualDocument + ?Sized,
{
    let root = ctx.root()?;
    Some(ctx.ensure_defs(root))
}

fn image_pattern<D>(
    url: &str,
    (width, height): (f32, f32),
    (left, top): (f32, f32),
    ctx: &mut ConversionContext<'_, D>,
) -> String
where
    D: VisualDocument + ?Sized,
{
    let id = format!("background-image-{}", ctx.next_paint_id());
    let defs = defs(ctx);

    let out = ctx.output_mut();
    let pattern = out.create_element("pattern");
    out.set_attribute(pattern, "width", num(width));
    out.set_attribute(pattern, "height", num(height));
    out.set_attribute(pattern, "patternUnits", "userSpaceOnUse");
    out.set_attribute(pattern, "id", id.as_str());

    let image = out.create_element("image");
    out.set_attribute(image, "width", num(width));
    out.set_attribute(image, "height", num(height));
    out.set_attribute(image, "x", num(left));
    out.set_attribute(image, "y", num(top));
    out.set_attribute(image, "xlink:href", url);
    out.append_child(pattern, image);

    if let Some(defs) = defs {
        out.append_child(defs, pattern);
    }
    log::debug!("Registered image pattern '{}' for '{}'", id, url);
    format!("url(#{})", id)
}

fn gradient_pattern<D>(
    gradient: &LinearGradient,
    size: BackgroundSize,
    position: BackgroundPosition,
    ctx: &mut ConversionContext<'_, D>,
) -> String
where
    D: VisualDocument + ?Sized,
{
    let n = ctx.next_paint_id();
    let pattern_id = format!("background-image-{}", n);
    let gradient_id = format!("linear-gradient-{}", n);
    let defs = defs(ctx);

    let out = ctx.output_mut();
    let pattern = out.create_element("pattern");
    let tile = match size {
        BackgroundSize::Parsed { width, height } => {
            out.set_attribute(pattern, "width", num(width));
            out.set_attribute(pattern, "height", num(height));
            out.set_attribute(pattern, "patternUnits", "userSpaceOnUse");
            (num(width), num(height))
        }
        BackgroundSize::None => {
            out.set_attribute(pattern, "width", "1");
            out.set_attribute(pattern, "height", "1");
            out.set_attribute(pattern, "patternUnits", "objectBoundingBox");
            ("1".to_string(), "1".to_string())
        }
    };
    out.set_attribute(pattern, "id", pattern_id.as_str());

    let linear = out.create_element("linearGradient");
    out.set_attribute(linear, "id", gradient_id.as_str());
    if let Some(degrees) = gradient.angle_degrees() {
        // CSS measures from "to top", SVG gradients run left to right.
        out.set_attribute(
            linear,
            "gradientTransform",
            format!("rotate({} 0.5 0.5)", num(degrees - 90.0)),
        );
    }
    for (offset, color) in gradient.stop_offsets() {
        let stop = out.create_element("stop");
        out.set_attribute(stop, "stop-color", color);
        out.set_attribute(stop, "offset", format!("{}%", num(offset)));
        out.append_child(linear, stop);
    }

    let tile_rect = out.create_element("rect");
    out.set_attribute(tile_rect, "width", tile.0);
    out.set_attribute(tile_rect, "height", tile.1);
    let (x, y) = match position {
        BackgroundPosition::Parsed { left, top } => (num(left), num(top)),
        BackgroundPosition::None => ("0".to_string(), "0".to_string()),
    };
    out.set_attribute(tile_rect, "x", x);
    out.set_attribute(tile_rect, "y", y);
    out.set_attribute(tile_rect, "fill", format!("url(#{})", gradient_id));
    out.append_child(pattern, tile_rect);

    if let Some(defs) = defs {
        out.append_child(defs, linear);
        out.append_child(defs, pattern);
    }
    log::debug!(
        "Registered linear gradient '{}' with {} stops at '{}'",
        gradient_id,
        gradient.stops.len(),
        gradient.angle
    );
    format!("url(#{})", gradient_id)
}
