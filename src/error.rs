use thiserror::Error;

/// Convenience result type for ETL operations.
pub type EtlResult<T> = Result<T, EtlError>;

/// Error type shared across discovery, parsing, transformation, and load.
///
/// There is no recovery path: any of these aborts the run. Rows committed
/// before the failure stay committed (each statement autocommits).
#[derive(Debug, Error)]
pub enum EtlError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal failed (missing root, unreadable entry).
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A file (or one line of it) is not a valid record of the expected shape.
    #[error("malformed record: {message}")]
    MalformedRecord { message: String },

    /// A field value could not be converted to its column type.
    #[error("invalid value in field '{field}': {message} (raw='{raw}')")]
    InvalidField {
        field: &'static str,
        raw: String,
        message: String,
    },

    /// Epoch-millisecond timestamp outside the representable datetime range.
    #[error("timestamp out of range: {ts} ms")]
    TimestampOutOfRange { ts: i64 },

    /// Database connection or statement failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
