/// Errors that can occur during writing
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// I/O error on the output sink
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Record or descriptor could not be encoded
    #[error("Encoding error: {0}")]
    EncodingError(#[from] crate::encoding::EncodingError),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Payload does not fit in a u32 length frame
    #[error("Unit payload of {0} bytes exceeds frame limit")]
    UnitTooLarge(usize),

    /// A record arrived before its descriptor
    #[error("Record type {0} written before its descriptor")]
    UndeclaredType(crate::schema::TypeId),

    /// Writer used after finish()
    #[error("Writer already finished")]
    Finished,
}
