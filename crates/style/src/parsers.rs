//! Low-level nom parser functions for resolved CSS values.
//!
//! Computed styles come out of a layout engine already resolved, so the only
//! lengths seen here are plain numbers with an optional `px` suffix.

use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit1, one_of};
use nom::combinator::{map_res, opt, recognize};
use nom::sequence::preceded;
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),
}

// --- Helper Parsers ---

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(one_of("+-")),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

/// Parses a pixel length (e.g., "12px", "1.5", ".5px").
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, value) = parse_f32(input)?;
    let (input, _) = opt(tag_no_case("px")).parse(input)?;
    Ok((input, value))
}

/// Matches the opening of a `linear-gradient(` call, with or without a
/// vendor prefix, and returns what follows the parenthesis.
pub fn linear_gradient_open(input: &str) -> IResult<&str, &str> {
    preceded(
        opt(alt((
            tag_no_case("-webkit-"),
            tag_no_case("-moz-"),
            tag_no_case("-ms-"),
        ))),
        tag_no_case("linear-gradient("),
    )
    .parse(input)
}

/// Matches the opening `url("` of a quoted url value.
pub fn url_open(input: &str) -> IResult<&str, &str> {
    tag_no_case("url(\"").parse(input)
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

/// Converts a resolved CSS value such as `"16px"` to its number.
///
/// Returns `None` for keywords, percentages and anything else that is not a
/// bare pixel length.
pub fn css_value_to_number(raw: &str) -> Option<f32> {
    run_parser(parse_length, raw).ok()
}

/// Reads the number a resolved CSS token starts with, ignoring whatever
/// follows it.
///
/// `"0%"` and `"12px"` both yield their number; `"auto"` yields `None`.
pub fn leading_number(raw: &str) -> Option<f32> {
    parse_length(raw.trim_start()).ok().map(|(_, value)| value)
}
