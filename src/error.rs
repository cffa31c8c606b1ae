use thiserror::Error;

use crate::types::FileFormat;

/// Convenience result type for intake operations.
pub type IntakeResult<T> = Result<T, IntakeError>;

/// Error type returned by the intake pipeline.
///
/// This is a single error enum shared across the delimited/record (and optional spreadsheet)
/// parsers. Errors never escape a batch: the session captures them per file.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// The file's classified format is unrecognized or has no registered parser.
    #[error("unsupported format '{format}' for file '{name}'")]
    UnsupportedFormat { name: String, format: FileFormat },

    /// Delimited-text parse failure.
    #[error("delimited parse error: {0}")]
    Delimited(#[from] csv::Error),

    /// Structured-record parse failure (malformed JSON).
    #[error("record parse error: {0}")]
    Record(#[from] serde_json::Error),

    #[cfg(feature = "excel")]
    /// Spreadsheet parse failure (feature-gated behind `excel`).
    #[error("spreadsheet error: {0}")]
    Sheet(#[from] calamine::Error),

    /// Format-specific structural failure (empty sheet, disabled parser, etc.).
    #[error("parse error: {message}")]
    Parse { message: String },
}
