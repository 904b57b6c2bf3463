use serde::{Deserialize, Serialize};

use super::ScalarValue;

/// How field text is turned into values for a whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Infer Float64/Bool/String/Null per field
    #[default]
    Infer,
    /// Keep every field as a verbatim String
    StringsOnly,
}

/// Parse one field of a data row.
///
/// Never fails: text that matches no other rule becomes a `String`.
pub fn parse_field(text: &str, mode: ParseMode) -> ScalarValue {
    if mode == ParseMode::StringsOnly {
        return ScalarValue::String(text.to_string());
    }

    if text.trim().is_empty() {
        return ScalarValue::Null;
    }
    if text.eq_ignore_ascii_case("inf") || text.eq_ignore_ascii_case("+inf") {
        return ScalarValue::Float64(f64::MAX);
    }
    if text.eq_ignore_ascii_case("-inf") {
        return ScalarValue::Float64(-f64::MAX);
    }
    if text.eq_ignore_ascii_case("nan") {
        return ScalarValue::Float64(f64::NAN);
    }
    if let Some(v) = parse_float(text) {
        return ScalarValue::Float64(v);
    }
    if let Some(b) = parse_bool(text) {
        return ScalarValue::Bool(b);
    }

    ScalarValue::String(text.to_string())
}

/// Finite float literals only; overflow and spelled-out infinities are rejected.
fn parse_float(text: &str) -> Option<f64> {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("t") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") || text.eq_ignore_ascii_case("f") {
        Some(false)
    } else {
        None
    }
}
