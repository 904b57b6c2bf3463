use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::SchemaError;
use crate::infer::ScalarType;

/// Small integer handle of an interned signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Raw id value
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered per-column types of one record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeSignature(Box<[ScalarType]>);

impl TypeSignature {
    /// Types in column order
    pub fn types(&self) -> &[ScalarType] {
        &self.0
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for a zero-column signature
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[ScalarType]> for TypeSignature {
    fn from(types: &[ScalarType]) -> Self {
        Self(types.into())
    }
}

impl From<Vec<ScalarType>> for TypeSignature {
    fn from(types: Vec<ScalarType>) -> Self {
        Self(types.into_boxed_slice())
    }
}

// Hash and Eq of the newtype agree with the slice, so map lookups can borrow.
impl Borrow<[ScalarType]> for TypeSignature {
    fn borrow(&self) -> &[ScalarType] {
        &self.0
    }
}

/// Structural interner from signatures to [`TypeId`]s.
///
/// The first occurrence of a signature allocates the next id; later
/// occurrences return the same id. Lookups borrow the caller's slice, so a hit
/// never allocates.
#[derive(Debug, Default)]
pub struct TypeTable {
    ids: HashMap<TypeSignature, TypeId>,
    signatures: Vec<TypeSignature>,
    last: Option<TypeId>,
}

impl TypeTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of `signature`, interning it if unseen
    pub fn lookup_or_insert(&mut self, signature: &[ScalarType]) -> Result<TypeId, SchemaError> {
        // Consecutive rows usually share a shape.
        if let Some(last) = self.last {
            if self.signatures[last.0 as usize].types() == signature {
                return Ok(last);
            }
        }

        let id = match self.ids.get(signature) {
            Some(&id) => id,
            None => {
                let next = u32::try_from(self.signatures.len())
                    .map_err(|_| SchemaError::TypeIdsExhausted(self.signatures.len()))?;
                let id = TypeId(next);
                let owned = TypeSignature::from(signature);
                self.signatures.push(owned.clone());
                self.ids.insert(owned, id);
                id
            }
        };

        self.last = Some(id);
        Ok(id)
    }

    /// Look up an already interned signature
    pub fn get(&self, signature: &[ScalarType]) -> Option<TypeId> {
        self.ids.get(signature).copied()
    }

    /// Signature interned under `id`
    pub fn signature(&self, id: TypeId) -> Option<&TypeSignature> {
        self.signatures.get(id.0 as usize)
    }

    /// Number of distinct signatures seen
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// Returns true before the first insertion
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}
