//! # Field Type Inference
//!
//! Every field of a data row is turned into a [`ScalarValue`] by [`parse_field`].
//! Inference is total and locale-independent: any text maps to exactly one
//! variant, and the same text always maps to the same variant.
//!
//! ## Inference Rules
//!
//! Rules are tried in order and the first match wins. Keywords are compared
//! ASCII case-insensitively.
//!
//! | Input | Result |
//! |-------|--------|
//! | empty or whitespace only | `Null` |
//! | `inf`, `+inf` | `Float64(f64::MAX)` |
//! | `-inf` | `Float64(-f64::MAX)` |
//! | `nan` | `Float64(NaN)` |
//! | finite decimal or exponential literal | `Float64` |
//! | `true`, `t`, `false`, `f` | `Bool` |
//! | anything else | `String` (untrimmed) |
//!
//! Infinities are clamped to the largest finite magnitude; a stream never
//! carries an infinite float.
//!
//! In [`ParseMode::StringsOnly`] every field is kept verbatim as a `String`.

mod parser;
mod value;


pub use parser::{parse_field, ParseMode};
pub use value::{ScalarType, ScalarValue};
