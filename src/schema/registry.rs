use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Header, SchemaError, TypeId};
use crate::infer::ScalarType;

/// One named, typed column of a record type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name from the header
    pub name: String,
    /// Scalar type of the column in this record type
    #[serde(rename = "type")]
    pub ty: ScalarType,
}

/// Resolved descriptor pairing header names with one signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordType {
    id: TypeId,
    columns: Vec<Column>,
}

impl RecordType {
    /// Pair `header` names with `signature` types positionally
    pub fn new(id: TypeId, header: &Header, signature: &[ScalarType]) -> Result<Self, SchemaError> {
        if header.len() != signature.len() {
            return Err(SchemaError::LengthMismatch {
                header: header.len(),
                signature: signature.len(),
            });
        }

        let columns = header
            .iter()
            .zip(signature)
            .map(|(name, &ty)| Column {
                name: name.to_string(),
                ty,
            })
            .collect();

        Ok(Self { id, columns })
    }

    /// Build directly from columns, as decoded from a descriptor unit
    pub fn from_columns(id: TypeId, columns: Vec<Column>) -> Self {
        Self { id, columns }
    }

    /// Interned id of this record type
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Columns in order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true for a zero-column record type
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column types in order
    pub fn types(&self) -> impl Iterator<Item = ScalarType> + '_ {
        self.columns.iter().map(|c| c.ty)
    }
}

/// Lazily built cache of record types, keyed by id
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    types: HashMap<TypeId, Arc<RecordType>>,
}

impl SchemaRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the record type for `id`, building it on first use.
    ///
    /// Later calls return the same shared instance and ignore `signature`.
    pub fn resolve(
        &mut self,
        id: TypeId,
        header: &Header,
        signature: &[ScalarType],
    ) -> Result<Arc<RecordType>, SchemaError> {
        if let Some(existing) = self.types.get(&id) {
            return Ok(Arc::clone(existing));
        }

        let record_type = Arc::new(RecordType::new(id, header, signature)?);
        self.types.insert(id, Arc::clone(&record_type));
        Ok(record_type)
    }

    /// Returns true if `id` has already been resolved
    pub fn contains(&self, id: TypeId) -> bool {
        self.types.contains_key(&id)
    }

    /// Previously resolved record type
    pub fn get(&self, id: TypeId) -> Option<&Arc<RecordType>> {
        self.types.get(&id)
    }

    /// Number of resolved record types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true before the first resolution
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
