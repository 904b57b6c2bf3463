use std::collections::HashSet;
use std::sync::Arc;

use super::SchemaError;

/// Column names taken from the first input row.
///
/// Cloning is cheap; all record types of a run share the same name list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    columns: Arc<[String]>,
}

impl Header {
    /// Build a header, rejecting duplicate column names
    pub fn new<I, S>(names: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = names.into_iter().map(Into::into).collect();

        let mut seen = HashSet::with_capacity(columns.len());
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(SchemaError::DuplicateColumn(name.clone()));
            }
        }

        Ok(Self {
            columns: columns.into(),
        })
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the header has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in order
    pub fn names(&self) -> &[String] {
        &self.columns
    }

    /// Iterate over column names
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }
}
