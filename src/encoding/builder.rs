//! # RecordBuilder
//!
//! Encodes value vectors into record payloads using a scratch buffer that is
//! reused across calls, so steady-state encoding does not allocate.
//!
//! ```rust
//! use cz::encoding::RecordBuilder;
//! use cz::infer::{ScalarType, ScalarValue};
//! use cz::schema::{Header, RecordType, TypeId};
//!
//! let header = Header::new(["a", "b"])?;
//! let rt = RecordType::new(TypeId(0), &header, &[ScalarType::Float64, ScalarType::Null])?;
//!
//! let mut builder = RecordBuilder::new();
//! let bytes = builder.encode(&[ScalarValue::Float64(1.0), ScalarValue::Null], &rt)?;
//! assert_eq!(bytes.len(), 8);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::EncodingError;
use crate::infer::ScalarValue;
use crate::schema::RecordType;

/// Reusable encoder for record and descriptor payloads.
///
/// A builder is owned by one writer; use one builder per thread.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    scratch: Vec<u8>,
}

impl RecordBuilder {
    /// Create a builder with an empty scratch buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with pre-allocated scratch space
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            scratch: Vec::with_capacity(capacity),
        }
    }

    /// Encode `values` against `record_type`.
    ///
    /// The returned slice borrows the scratch buffer and is valid until the
    /// next call.
    pub fn encode(
        &mut self,
        values: &[ScalarValue],
        record_type: &RecordType,
    ) -> Result<&[u8], EncodingError> {
        self.scratch.clear();

        if values.len() != record_type.len() {
            return Err(EncodingError::ArityMismatch {
                expected: record_type.len(),
                found: values.len(),
            });
        }

        for (column, (value, col)) in values.iter().zip(record_type.columns()).enumerate() {
            if value.scalar_type() != col.ty {
                return Err(EncodingError::TypeMismatch {
                    column,
                    name: col.name.clone(),
                    expected: col.ty,
                    found: value.scalar_type(),
                });
            }

            match value {
                ScalarValue::Float64(v) => self.scratch.extend_from_slice(&v.to_le_bytes()),
                ScalarValue::Bool(b) => self.scratch.push(u8::from(*b)),
                ScalarValue::String(s) => put_str(&mut self.scratch, s)?,
                ScalarValue::Null => {}
            }
        }

        Ok(&self.scratch)
    }

    /// Encode the descriptor of `record_type`
    pub fn encode_descriptor(&mut self, record_type: &RecordType) -> Result<&[u8], EncodingError> {
        self.scratch.clear();

        put_len(&mut self.scratch, record_type.len())?;
        for col in record_type.columns() {
            put_str(&mut self.scratch, &col.name)?;
            self.scratch.push(col.ty.code());
        }

        Ok(&self.scratch)
    }

    /// Current scratch capacity in bytes
    pub fn capacity(&self) -> usize {
        self.scratch.capacity()
    }
}

fn put_len(buf: &mut Vec<u8>, len: usize) -> Result<(), EncodingError> {
    let len = u32::try_from(len).map_err(|_| EncodingError::TooLong(len))?;
    buf.extend_from_slice(&len.to_le_bytes());
    Ok(())
}

fn put_str(buf: &mut Vec<u8>, s: &str) -> Result<(), EncodingError> {
    put_len(buf, s.len())?;
    buf.extend_from_slice(s.as_bytes());
    Ok(())
}
