use std::fmt;

use serde::{Deserialize, Serialize};

/// Scalar type of a single field, without payload.
///
/// The discriminants double as the wire type codes of a descriptor unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ScalarType {
    /// Empty field
    Null = 0,
    /// IEEE-754 double
    Float64 = 1,
    /// Boolean literal
    Bool = 2,
    /// Arbitrary UTF-8 text
    String = 3,
}

impl ScalarType {
    /// Wire type code used in descriptor units
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Map a wire type code back to its type
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ScalarType::Null),
            1 => Some(ScalarType::Float64),
            2 => Some(ScalarType::Bool),
            3 => Some(ScalarType::String),
            _ => None,
        }
    }

    /// Lowercase display name
    pub fn name(self) -> &'static str {
        match self {
            ScalarType::Null => "null",
            ScalarType::Float64 => "float64",
            ScalarType::Bool => "bool",
            ScalarType::String => "string",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed field value
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// 64-bit float, never infinite
    Float64(f64),
    /// Boolean
    Bool(bool),
    /// Text, kept exactly as read
    String(String),
    /// Empty field
    Null,
}

impl ScalarValue {
    /// Type tag of this value
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            ScalarValue::Float64(_) => ScalarType::Float64,
            ScalarValue::Bool(_) => ScalarType::Bool,
            ScalarValue::String(_) => ScalarType::String,
            ScalarValue::Null => ScalarType::Null,
        }
    }

    /// Returns true for [`ScalarValue::Null`]
    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    /// Value equality that treats two NaNs as equal.
    ///
    /// `PartialEq` follows IEEE semantics, which makes NaN fields compare unequal
    /// to themselves after a round trip.
    pub fn same_as(&self, other: &ScalarValue) -> bool {
        match (self, other) {
            (ScalarValue::Float64(a), ScalarValue::Float64(b)) => {
                a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
            }
            _ => self == other,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Float64(v) => write!(f, "{}", v),
            ScalarValue::Bool(v) => write!(f, "{}", v),
            ScalarValue::String(s) => write!(f, "{:?}", s),
            ScalarValue::Null => f.write_str("null"),
        }
    }
}
