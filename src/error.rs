use domsvg_core::ConvertError;
use domsvg_render_core::RenderError;
use domsvg_source::SourceError;
use thiserror::Error;

/// Everything that can go wrong between reading a fixture and writing SVG.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Loading the visual document failed: {0}")]
    Source(#[from] SourceError),

    #[error("Conversion failed: {0}")]
    Convert(#[from] ConvertError),

    #[error("Writing SVG failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Fixture has no root node")]
    MissingRoot,
}
