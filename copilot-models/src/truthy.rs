//! JavaScript-style truthiness over JSON values, matching how the credential writer and
//! the catalog producer treat loosely typed flags.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `false`, `null`, `0`, `NaN` and `""` are falsy; everything else, including `[]` and `{}`,
/// is truthy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Serde adapter: decodes any JSON value present in the field as its truthiness.
pub(crate) fn deserialize_truthy<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Some(is_truthy(&value)))
}
