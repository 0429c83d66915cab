//! Error types for conversion.

use domsvg_traits::OracleError;
use thiserror::Error;

/// Failures that abort a conversion.
///
/// Malformed style values and orphaned text nodes are not errors: they
/// degrade silently. Only an oracle that cannot answer stops the walk.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Oracle query failed: {0}")]
    Oracle(#[from] OracleError),
}
