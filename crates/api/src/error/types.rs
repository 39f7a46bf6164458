//! Error type definitions for extraction and emission

use std::path::PathBuf;

use thiserror::Error;

use crate::types::Field;

/// Primary error type for the katgen crates
#[derive(Debug, Error)]
pub enum Error {
    /// Structurally malformed input or record set
    #[error(transparent)]
    Format(#[from] FormatError),

    /// An input path does not exist or could not be read
    #[error("cannot read {}: {source}", path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration or output schema
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Wrap an I/O failure on `path`
    pub fn resource(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Resource {
            path: path.into(),
            source,
        }
    }

    /// Shorthand for [`Error::Config`]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Self::Format(FormatError::Hex(e))
    }
}

/// Result type for katgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Input text that does not follow the expected structure
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("missing {0} header")]
    MissingHeader(&'static str),

    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("{context}: length mismatch - expected {expected} bytes, got {actual}")]
    LengthMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("malformed array literal: {0}")]
    MalformedArray(String),

    #[error("invalid integer literal `{0}`")]
    InvalidLiteral(String),

    #[error("unterminated literal starting at byte {offset}")]
    UnterminatedLiteral { offset: usize },

    #[error("record {index} has no {field} field")]
    MissingRecordField { index: usize, field: Field },

    #[error("record {index}: {field} is {actual} bytes, schema declares {expected}")]
    WidthMismatch {
        index: usize,
        field: Field,
        expected: usize,
        actual: usize,
    },
}

/// Why a single suite field could not be extracted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldFailure {
    /// No matching declaration in the block
    Missing,
    /// A declaration was found but its initializer could not be read
    Malformed(String),
    /// A fixed-size field with the wrong number of elements
    WidthMismatch { expected: usize, actual: usize },
    /// A literal that does not fit the field's element type
    OutOfRange(String),
}

impl std::fmt::Display for FieldFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => f.write_str("missing"),
            Self::Malformed(msg) => write!(f, "malformed ({msg})"),
            Self::WidthMismatch { expected, actual } => {
                write!(f, "expected {expected} bytes, got {actual}")
            }
            Self::OutOfRange(lit) => write!(f, "literal `{lit}` out of range"),
        }
    }
}

/// A required field of a suite block that could not be extracted.
///
/// Recovered locally by the extractor: the block is skipped and the error
/// ends up in the skip diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct PartialFieldError {
    pub field: Field,
    pub reason: FieldFailure,
}

impl PartialFieldError {
    pub fn new(field: Field, reason: FieldFailure) -> Self {
        Self { field, reason }
    }

    pub fn missing(field: Field) -> Self {
        Self::new(field, FieldFailure::Missing)
    }
}

impl From<FormatError> for FieldFailure {
    fn from(e: FormatError) -> Self {
        FieldFailure::Malformed(e.to_string())
    }
}
