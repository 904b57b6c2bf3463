use crate::infer::ScalarType;

/// Errors that can occur while encoding or decoding payloads
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    /// Value count differs from the record type's column count
    #[error("Record has {found} values but record type has {expected} columns")]
    ArityMismatch {
        /// Columns in the record type
        expected: usize,
        /// Values supplied
        found: usize,
    },

    /// A value's tag disagrees with its column's declared type
    #[error("Column {column} ({name:?}) is declared {expected} but value is {found}")]
    TypeMismatch {
        /// Zero-based column index
        column: usize,
        /// Column name
        name: String,
        /// Declared column type
        expected: ScalarType,
        /// Type of the supplied value
        found: ScalarType,
    },

    /// String or name longer than a u32 length prefix can describe
    #[error("Value of {0} bytes is too long for a u32 length prefix")]
    TooLong(usize),

    /// Payload ended before all declared fields were read
    #[error("Unexpected end of payload")]
    UnexpectedEof,

    /// Payload has bytes left after the last declared field
    #[error("{0} trailing bytes after last field")]
    TrailingBytes(usize),

    /// Unknown type code in a descriptor
    #[error("Invalid type code: {0}")]
    InvalidTypeCode(u8),

    /// Bool byte other than 0 or 1
    #[error("Invalid bool byte: {0}")]
    InvalidBool(u8),

    /// String bytes are not valid UTF-8
    #[error("Invalid UTF-8 in string field: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
