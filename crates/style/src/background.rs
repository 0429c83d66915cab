//! Resolution of `background-*` values into typed paint descriptions.
//!
//! Every parser here is total: a value it does not understand degrades to the
//! `None` variant instead of producing an error, so a single odd background
//! never aborts a conversion.

use crate::parsers::{leading_number, linear_gradient_open, url_open};

/// Direction used when a gradient lists only its two color stops.
pub const DEFAULT_GRADIENT_ANGLE: &str = "180deg";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Background {
    #[default]
    None,
    Image {
        url: String,
    },
    LinearGradient(LinearGradient),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub angle: String,
    /// Color stops exactly as written, in source order.
    pub stops: Vec<String>,
}

impl LinearGradient {
    /// Stops paired with an evenly distributed offset in percent.
    ///
    /// Length hints inside a stop string are not interpreted; stop `i` of `n`
    /// always sits at `(100 / n) * i`.
    pub fn stop_offsets(&self) -> impl Iterator<Item = (f32, &str)> {
        let step = 100.0 / self.stops.len() as f32;
        self.stops
            .iter()
            .enumerate()
            .map(move |(index, stop)| (step * index as f32, stop.as_str()))
    }

    /// The angle in degrees, when it is written as `<number>deg`.
    pub fn angle_degrees(&self) -> Option<f32> {
        let number = self.angle.trim().strip_suffix("deg")?;
        number.trim().parse::<f32>().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BackgroundSize {
    #[default]
    None,
    Parsed {
        width: f32,
        height: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BackgroundPosition {
    #[default]
    None,
    Parsed {
        left: f32,
        top: f32,
    },
}

/// Parses a computed `background-image` value.
///
/// Recognizes `url("...")` and `linear-gradient(...)` (optionally vendor
/// prefixed). Anything else, `none` included, is `Background::None`.
pub fn parse_background_image(value: &str) -> Background {
    let value = value.trim();
    if value == "none" {
        return Background::None;
    }

    if let Ok((rest, _)) = url_open(value) {
        if let Some(url) = rest.strip_suffix("\")").filter(|url| !url.is_empty()) {
            return Background::Image {
                url: url.to_string(),
            };
        }
    }

    if let Ok((rest, _)) = linear_gradient_open(value) {
        if let Some(args) = rest.strip_suffix(')').filter(|args| !args.is_empty()) {
            return match parse_linear_gradient(args) {
                Some(gradient) => Background::LinearGradient(gradient),
                None => {
                    log::debug!("Ignoring gradient with too few arguments: '{}'", value);
                    Background::None
                }
            };
        }
    }

    Background::None
}

/// Parses a computed `background-size` of exactly two numeric tokens.
///
/// Each token contributes its leading number, so units are ignored; tokens
/// without one (`auto`, `cover`) are dropped before counting.
pub fn parse_background_size(value: &str) -> BackgroundSize {
    match parse_pair(value) {
        Some((width, height)) => BackgroundSize::Parsed { width, height },
        None => BackgroundSize::None,
    }
}

/// Parses a computed `background-position` of exactly two numeric tokens,
/// read the same way as [`parse_background_size`].
pub fn parse_background_position(value: &str) -> BackgroundPosition {
    match parse_pair(value) {
        Some((left, top)) => BackgroundPosition::Parsed { left, top },
        None => BackgroundPosition::None,
    }
}

fn parse_pair(value: &str) -> Option<(f32, f32)> {
    let numbers: Vec<f32> = value
        .split_whitespace()
        .filter_map(leading_number)
        .collect();

    match numbers.as_slice() {
        [first, second] => Some((*first, *second)),
        _ => None,
    }
}

fn parse_linear_gradient(args: &str) -> Option<LinearGradient> {
    let mut parts = split_top_level_commas(args);

    match parts.len() {
        2 => Some(LinearGradient {
            angle: DEFAULT_GRADIENT_ANGLE.to_string(),
            stops: parts,
        }),
        n if n > 2 => {
            let angle = parts.remove(0);
            Some(LinearGradient {
                angle,
                stops: parts,
            })
        }
        _ => None,
    }
}

/// Splits a function argument list on the commas that are not nested inside
/// parentheses, trimming each argument.
///
/// `"45deg, rgba(0,0,0,.5), blue"` yields three arguments.
pub fn split_top_level_commas(value: &str) -> Vec<String> {
    let mut parts = Vec::new();
    if value.is_empty() {
        return parts;
    }

    let mut depth = 0usize;
    let mut start = 0;
    for (index, ch) in value.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(value[start..index].trim().to_string());
                start = index + ch.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(value[start..].trim().to_string());

    parts
}
