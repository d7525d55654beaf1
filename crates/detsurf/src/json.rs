//! Field access over `serde_json::Value` documents.
//!
//! Every decoder in the crate reads through these helpers so that missing or
//! mistyped fields surface uniformly as [`SurfaceJsonError`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, SurfaceJsonError};

/// Required field of an object document.
pub(crate) fn field<'a>(doc: &'a Value, key: &str) -> Result<&'a Value> {
    match doc {
        Value::Object(map) => map.get(key).ok_or_else(|| SurfaceJsonError::missing(key)),
        _ => Err(SurfaceJsonError::wrong_kind("<document>", "an object")),
    }
}

/// Optional field: `None` when absent or `null`.
pub(crate) fn optional_field<'a>(doc: &'a Value, key: &str) -> Option<&'a Value> {
    doc.get(key).filter(|v| !v.is_null())
}

/// True for `null`, `{}`, `[]` and `""`.
pub(crate) fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

pub(crate) fn as_u64(value: &Value, path: &str) -> Result<u64> {
    value
        .as_u64()
        .ok_or_else(|| SurfaceJsonError::wrong_kind(path, "an unsigned integer"))
}

/// Numeric array of any length; `null` entries stand for non-finite values and read as NaN.
pub(crate) fn as_f64_vec(value: &Value, path: &str) -> Result<Vec<f64>> {
    let items = value
        .as_array()
        .ok_or_else(|| SurfaceJsonError::wrong_kind(path, "an array of numbers"))?;
    items
        .iter()
        .map(|v| match v {
            Value::Null => Ok(f64::NAN),
            _ => v
                .as_f64()
                .ok_or_else(|| SurfaceJsonError::wrong_kind(path, "an array of numbers")),
        })
        .collect()
}

/// Numeric array of exactly `N` entries.
pub(crate) fn as_f64_array<const N: usize>(value: &Value, path: &str) -> Result<[f64; N]> {
    let values = as_f64_vec(value, path)?;
    values
        .try_into()
        .map_err(|_| SurfaceJsonError::wrong_kind(path, "a numeric array of the expected length"))
}

/// Deserialize a typed value (tags, material) from a sub-document.
pub(crate) fn typed<T: DeserializeOwned>(value: &Value, path: &str) -> Result<T> {
    T::deserialize(value).map_err(|source| SurfaceJsonError::Json {
        field: path.to_string(),
        source,
    })
}
