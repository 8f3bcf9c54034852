use thiserror::Error;

/// Convenience result type for publish operations.
pub type PublishResult<T> = Result<T, PublishError>;

/// Error type returned by every stage of a publish run.
///
/// Loader and validator errors abort before any output file is written. Emitter errors
/// ([`PublishError::Io`], [`PublishError::Json`]) leave already-written files in place.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The input could not be opened (local) or fetched (remote).
    #[error("source unavailable: {source_id}: {message}")]
    SourceUnavailable { source_id: String, message: String },

    /// The input is not well-formed CSV.
    ///
    /// `row` is 1-based with the header as row 1, or 0 when the failure is not tied to a row.
    #[error("failed to parse csv at row {row}: {message}")]
    ParseError { row: u64, message: String },

    /// One or more required columns are absent from the header.
    #[error("missing required columns: {columns:?}")]
    MissingColumns { columns: Vec<String> },

    /// Two or more columns share a name.
    #[error("duplicated column names detected: {columns:?}")]
    DuplicateColumns { columns: Vec<String> },

    /// Underlying I/O error while writing outputs.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PublishError {
    /// Classify a CSV reader error: I/O failures mean the source went away, anything else is
    /// malformed content.
    pub(crate) fn from_csv(source_id: &str, err: csv::Error) -> Self {
        let row = err.position().map(|p| p.line()).unwrap_or(0);
        match err.kind() {
            csv::ErrorKind::Io(_) => Self::SourceUnavailable {
                source_id: source_id.to_owned(),
                message: err.to_string(),
            },
            _ => Self::ParseError {
                row,
                message: err.to_string(),
            },
        }
    }
}
