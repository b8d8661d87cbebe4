// Error taxonomy shared across the library

use thiserror::Error;

/// Errors surfaced by store, export and config operations.
///
/// Persistence *load* failures never appear here: an unreadable blob is
/// logged and recovered by falling back to seed data.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Required input field missing or malformed. No partial write happens.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Update or lookup against an id that is not in the collection.
    #[error("record not found: {0}")]
    NotFound(String),

    /// Bulk operation invoked with zero selected rows.
    #[error("no rows selected")]
    NoSelection,

    /// Client-side file save failed. Terminal, never retried.
    #[error("export failed: {0}")]
    ExportFailed(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Durable write of the collection blob failed.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Configuration file unreadable.
    #[error("config error: {0}")]
    Config(String),
}
