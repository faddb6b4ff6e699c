//! Contact matching and field-precedence merge between two decoded logs.

/// Required-column validation and the enrichment merge pass.
pub mod engine;
/// Composite contact identity key.
pub mod key;
