//! # domsvg-core
//!
//! Converts a styled, laid-out visual tree into a static SVG document.
//!
//! - **convert**: the depth-first walk emitting groups, backgrounds, borders,
//!   text and images
//! - **segment**: splitting text nodes into positioned visual lines
//! - **context**: the mutable state threaded through one conversion
//! - **config**: conversion knobs
//!
//! Style and geometry come from a [`domsvg_traits::LayoutOracle`]; this crate
//! never lays anything out itself.

// Re-export foundation crates
pub use domsvg_render_core as render;
pub use domsvg_style as style;
pub use domsvg_traits as traits;
pub use domsvg_types as types;

pub mod config;
pub mod context;
pub mod convert;
pub mod error;
pub mod segment;

pub use config::{ConvertConfig, LineBoxPolicy};
pub use context::ConversionContext;
pub use convert::convert;
pub use error::ConvertError;
pub use segment::{Line, get_lines};

use domsvg_render_core::SvgDocument;
use domsvg_traits::VisualDocument;
use domsvg_types::NodeId;

/// Converts the subtree rooted at `root` into a fresh SVG document.
pub fn dom_to_svg<D>(
    document: &D,
    root: NodeId,
    config: ConvertConfig,
) -> Result<SvgDocument, ConvertError>
where
    D: VisualDocument + ?Sized,
{
    let mut ctx = ConversionContext::with_config(document, config);
    convert(root, &mut ctx)?;
    Ok(ctx.into_output())
}
