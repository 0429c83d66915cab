//! A fixed-schema snapshot of the computed properties the converter reads.

use crate::parsers::css_value_to_number;
use std::collections::HashMap;

/// Resolved CSS property name to resolved value, as a layout engine reports it.
pub type PropertyMap = HashMap<String, String>;

/// Fill used when an element has no background color at all.
pub const TRANSPARENT_FILL: &str = "rgba(0, 0, 0, 0)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl BoxSide {
    /// All sides in painting order.
    pub const ALL: [BoxSide; 4] = [BoxSide::Top, BoxSide::Right, BoxSide::Bottom, BoxSide::Left];

    pub fn name(self) -> &'static str {
        match self {
            BoxSide::Top => "top",
            BoxSide::Right => "right",
            BoxSide::Bottom => "bottom",
            BoxSide::Left => "left",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorderSide {
    pub color: String,
    pub width: String,
}

impl BorderSide {
    /// A side is painted when it has a color that is not transparent and a
    /// positive width. Missing values count as unpainted.
    pub fn is_visible(&self) -> bool {
        let color = self.color.trim();
        if color.is_empty() || color == "transparent" || color == TRANSPARENT_FILL {
            return false;
        }
        css_value_to_number(&self.width).is_some_and(|width| width > 0.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputedStyle {
    pub display: String,
    pub opacity: String,
    pub visibility: String,
    pub background_color: Option<String>,
    pub background_image: String,
    pub background_size: String,
    pub background_position: String,
    pub border_top: BorderSide,
    pub border_right: BorderSide,
    pub border_bottom: BorderSide,
    pub border_left: BorderSide,
    pub color: String,
    pub font_family: String,
    pub font_size: String,
    pub font_weight: String,
    pub line_height: String,
}

impl ComputedStyle {
    /// Reads every property the converter needs out of a property map.
    ///
    /// Missing entries become empty strings, except `background-image`
    /// which defaults to `none` and `background-color` which becomes `None`.
    pub fn from_properties(properties: &PropertyMap) -> Self {
        let get = |name: &str| properties.get(name).cloned().unwrap_or_default();
        let border = |side: BoxSide| BorderSide {
            color: get(&format!("border-{}-color", side.name())),
            width: get(&format!("border-{}-width", side.name())),
        };

        Self {
            display: get("display"),
            opacity: get("opacity"),
            visibility: get("visibility"),
            background_color: properties
                .get("background-color")
                .filter(|value| !value.trim().is_empty())
                .cloned(),
            background_image: properties
                .get("background-image")
                .cloned()
                .unwrap_or_else(|| "none".to_string()),
            background_size: get("background-size"),
            background_position: get("background-position"),
            border_top: border(BoxSide::Top),
            border_right: border(BoxSide::Right),
            border_bottom: border(BoxSide::Bottom),
            border_left: border(BoxSide::Left),
            color: get("color"),
            font_family: get("font-family"),
            font_size: get("font-size"),
            font_weight: get("font-weight"),
            line_height: get("line-height"),
        }
    }

    /// False for `display: none`, `opacity: 0` and `visibility: hidden`.
    pub fn is_rendered(&self) -> bool {
        if self.display.trim() == "none" || self.visibility.trim() == "hidden" {
            return false;
        }
        css_value_to_number(&self.opacity) != Some(0.0)
    }

    pub fn border(&self, side: BoxSide) -> &BorderSide {
        match side {
            BoxSide::Top => &self.border_top,
            BoxSide::Right => &self.border_right,
            BoxSide::Bottom => &self.border_bottom,
            BoxSide::Left => &self.border_left,
        }
    }

    /// The computed background color, or a fully transparent fill.
    pub fn background_fill(&self) -> &str {
        self.background_color.as_deref().unwrap_or(TRANSPARENT_FILL)
    }

    /// Effective line height in pixels.
    ///
    /// `normal` (and anything unparsable) resolves to `normal_factor` times the
    /// font size.
    pub fn line_height_px(&self, normal_factor: f32) -> f32 {
        let normal = || css_value_to_number(&self.font_size).unwrap_or(0.0) * normal_factor;
        if self.line_height.trim() == "normal" {
            return normal();
        }
        css_value_to_number(&self.line_height).unwrap_or_else(normal)
    }
}
