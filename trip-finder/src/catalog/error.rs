//! Catalog loading error types.

use std::path::PathBuf;

/// Errors that can occur while loading the flight catalog.
///
/// Any of these aborts the whole load; the planner never sees a partial
/// catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file couldn't be opened
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV framing error (unreadable input, ragged rows)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row was well-formed CSV but not a valid flight
    #[error("line {line}: {message}")]
    Row { line: u64, message: String },
}

impl CatalogError {
    pub(crate) fn row(line: u64, message: impl Into<String>) -> Self {
        CatalogError::Row {
            line,
            message: message.into(),
        }
    }
}
