//! Error types.
//!
//! Only structural failures are errors. Field values that do not parse are
//! replaced by defaults during mapping and never reach these types.

use thiserror::Error;

/// Failure reading or writing line-format text.
#[derive(Debug, Error)]
pub enum LineFormatError {
    /// A `<` was never closed by `>`.
    #[error("unterminated data specifier at offset {offset}")]
    UnterminatedTag {
        /// Byte offset of the opening `<`.
        offset: usize,
    },
    /// A data specifier had an empty name or a non-numeric length.
    #[error("malformed data specifier `<{spec}>` at offset {offset}")]
    MalformedTag {
        /// Text between the angle brackets.
        spec: String,
        /// Byte offset of the opening `<`.
        offset: usize,
    },
    /// The text ended before the declared data length was read.
    #[error("field {name} declares {declared} characters but only {available} remain")]
    Truncated {
        /// Field name.
        name: String,
        /// Declared length.
        declared: usize,
        /// Characters left in the input.
        available: usize,
    },
    /// A field name cannot be written as a data specifier.
    #[error("field name `{name}` cannot be written")]
    InvalidName {
        /// Offending name.
        name: String,
    },
    /// The underlying writer failed.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure converting a whole document.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Line-format reader or writer failed.
    #[error(transparent)]
    LineFormat(#[from] LineFormatError),
    /// Structured JSON form could not be read or written.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    /// A conversion worker did not finish.
    #[error("conversion worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Result alias for document-level conversion.
pub type ConvertResult<T> = Result<T, ConvertError>;
