/// Errors raised while building headers and record types
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The same column name appears twice in the header
    #[error("Duplicate column name in header: {0:?}")]
    DuplicateColumn(String),

    /// A signature does not have one type per header column
    #[error("Signature has {signature} types but header has {header} columns")]
    LengthMismatch {
        /// Number of header columns
        header: usize,
        /// Number of types in the signature
        signature: usize,
    },

    /// More distinct record shapes than a TypeId can address
    #[error("Type id space exhausted after {0} record types")]
    TypeIdsExhausted(usize),
}
