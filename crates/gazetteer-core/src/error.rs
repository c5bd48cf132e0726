// crates/gazetteer-core/src/error.rs
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GazetteerError>;

/// Everything that can abort a whole conversion or analysis run.
///
/// Per-row problems never surface here: the loaders count and log them and
/// keep going. Only failures outside the row loop (missing input, unreadable
/// header, write failures) are reported through this type.
#[derive(Debug, Error)]
pub enum GazetteerError {
    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl From<tempfile::PersistError> for GazetteerError {
    fn from(err: tempfile::PersistError) -> Self {
        GazetteerError::Io(err.error)
    }
}
