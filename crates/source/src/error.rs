use domsvg_traits::OracleError;
use domsvg_types::NodeId;
use thiserror::Error;

/// Errors raised while building or loading an in-memory document.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("JSON fixture error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid base64 image data: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Node {0} cannot have children")]
    NotAContainer(NodeId),

    #[error("Text node has {chars} characters but {boxes} character boxes")]
    BoxCountMismatch { chars: usize, boxes: usize },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}
