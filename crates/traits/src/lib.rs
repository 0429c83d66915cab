pub mod oracle;

pub use oracle::{LayoutOracle, NodeKind, OracleError, VisualDocument, VisualTree};
