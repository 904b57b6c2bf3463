use crate::schema::TypeId;

/// Errors that can occur during reading
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Not a binary record stream
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Stream ended in the middle of a unit
    #[error("Stream truncated inside unit {0}")]
    Truncated(u64),

    /// Unit kind byte is neither descriptor nor record
    #[error("Invalid unit kind: {0}")]
    InvalidUnitKind(u8),

    /// Record unit names a type id that was never declared
    #[error("Record references undeclared type {0}")]
    UnknownType(TypeId),

    /// A type id was declared twice
    #[error("Duplicate descriptor for type {0}")]
    DuplicateDescriptor(TypeId),

    /// Payload could not be decoded
    #[error("Decoding error: {0}")]
    EncodingError(#[from] crate::encoding::EncodingError),
}
