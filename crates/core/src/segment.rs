//! Splits a text node into the visual rows it occupies.

use crate::config::LineBoxPolicy;
use crate::error::ConvertError;
use domsvg_traits::{NodeKind, OracleError, VisualDocument};
use domsvg_types::{NodeId, Rect};

/// A run of words sharing one visual row.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    pub rect: Rect,
}

/// Segments a text node into lines.
///
/// The content is split on single spaces. Each word is measured through the
/// oracle's sub-range geometry; a word whose box starts strictly below the
/// current line opens a new line, otherwise it is appended after a single
/// space. Consecutive spaces therefore survive as empty words.
///
/// Character offsets advance past each word *and* its separator, so every
/// word is measured over exactly its own characters.
pub fn get_lines<D>(
    document: &D,
    text: NodeId,
    policy: LineBoxPolicy,
) -> Result<Vec<Line>, ConvertError>
where
    D: VisualDocument + ?Sized,
{
    let NodeKind::Text { content } = document.kind(text)? else {
        return Err(OracleError::NotText(text).into());
    };

    let mut lines: Vec<Line> = Vec::new();
    let mut index = 0;

    for word in content.split(' ') {
        let len = word.chars().count();
        let rect = document.sub_range_geometry(text, index, index + len)?;
        index += len + 1;

        let starts_row = lines.last().is_none_or(|line| rect.top > line.rect.top);
        match lines.last_mut() {
            Some(line) if !starts_row => {
                line.text.push(' ');
                line.text.push_str(word);
                if policy == LineBoxPolicy::Union {
                    line.rect = line.rect.union(&rect);
                }
            }
            _ => {
                log::trace!("Line {} of {} starts at {:?}", lines.len(), text, rect);
                lines.push(Line {
                    text: word.to_string(),
                    rect,
                });
            }
        }
    }

    Ok(lines)
}
