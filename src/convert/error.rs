use crate::encoding::EncodingError;
use crate::schema::SchemaError;
use crate::writer::WriterError;

/// Coarse classification of a conversion failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Data row field count differs from the header
    HeaderMismatch,
    /// A field could not be parsed
    ParseFailure,
    /// Header or record type could not be built
    SchemaInconsistency,
    /// A value disagrees with its record type
    EncodingFailure,
    /// Input or output failed
    IoFailure,
}

/// Errors that abort a conversion run
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Data row field count differs from the header
    #[error("length of record ({found} fields) doesn't match heading ({expected} columns)")]
    HeaderMismatch {
        /// Header column count
        expected: usize,
        /// Fields in the row
        found: usize,
    },

    /// A field could not be parsed
    #[error("failed to parse column {column}: {reason}")]
    ParseFailure {
        /// Zero-based column index
        column: usize,
        /// What went wrong
        reason: String,
    },

    /// Schema error
    #[error("Schema error: {0}")]
    SchemaError(#[from] SchemaError),

    /// Writer error
    #[error("Writer error: {0}")]
    WriterError(#[from] WriterError),

    /// CSV input error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failure attributed to an input line (1-based, header is line 1)
    #[error("line {line}: {cause}")]
    AtLine {
        /// Offending input line
        line: u64,
        /// Underlying failure
        cause: Box<ConvertError>,
    },

    /// The converter was used after finishing or after a fatal error
    #[error("converter is closed")]
    Closed,
}

impl ConvertError {
    /// Attach an input line number
    pub fn at_line(self, line: u64) -> Self {
        match self {
            already @ ConvertError::AtLine { .. } => already,
            other => ConvertError::AtLine {
                line,
                cause: Box::new(other),
            },
        }
    }

    /// Input line the failure is attributed to, if any
    pub fn line(&self) -> Option<u64> {
        match self {
            ConvertError::AtLine { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Classify the failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::HeaderMismatch { .. } => ErrorKind::HeaderMismatch,
            ConvertError::ParseFailure { .. } => ErrorKind::ParseFailure,
            ConvertError::SchemaError(_) => ErrorKind::SchemaInconsistency,
            ConvertError::WriterError(WriterError::EncodingError(_))
            | ConvertError::WriterError(WriterError::UnitTooLarge(_))
            | ConvertError::WriterError(WriterError::UndeclaredType(_))
            | ConvertError::WriterError(WriterError::JsonError(_)) => ErrorKind::EncodingFailure,
            ConvertError::WriterError(_) => ErrorKind::IoFailure,
            ConvertError::CsvError(e) if e.is_io_error() => ErrorKind::IoFailure,
            ConvertError::CsvError(_) => ErrorKind::ParseFailure,
            ConvertError::IoError(_) => ErrorKind::IoFailure,
            ConvertError::AtLine { cause, .. } => cause.kind(),
            ConvertError::Closed => ErrorKind::IoFailure,
        }
    }
}

impl From<EncodingError> for ConvertError {
    fn from(e: EncodingError) -> Self {
        ConvertError::WriterError(WriterError::EncodingError(e))
    }
}
