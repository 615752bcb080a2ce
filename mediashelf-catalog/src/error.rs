use thiserror::Error;

/// Errors that can occur while loading or querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The raw-row source cannot be opened or read; always fatal to a
    /// load, no partial catalog is returned.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Reader-level CSV failure surfaced under strict loading.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row failed to load under strict loading.
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    /// A lookup identifier does not match the expected shape.
    #[error("{0}")]
    InvalidIdentifier(String),
}

impl CatalogError {
    pub fn malformed_row(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            reason: reason.into(),
        }
    }

    pub fn invalid_identifier(msg: impl Into<String>) -> Self {
        Self::InvalidIdentifier(msg.into())
    }
}
