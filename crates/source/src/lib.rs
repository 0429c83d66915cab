//! In-memory visual documents.
//!
//! [`InMemoryDocument`] implements both [`domsvg_traits::VisualTree`] and
//! [`domsvg_traits::LayoutOracle`] from data resolved up front, either built
//! programmatically or loaded from a JSON [`FixtureNode`].

mod document;
mod error;
mod fixture;
pub mod raster;

pub use document::{InMemoryDocument, SharedImageData, TextFlow};
pub use error::SourceError;
pub use fixture::{DEFAULT_ADVANCE, DEFAULT_LINE_HEIGHT, FixtureNode};
