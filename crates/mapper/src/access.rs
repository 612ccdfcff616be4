//! Safe Accessor: reading deep fields of payloads where any link may be missing.
//!
//! Navigation through [`Navigate`] distinguishes two failures:
//!
//! * stepping through `null` (or a missing key) raises [`MapperError::AbsentField`];
//! * a present value of the wrong shape raises [`MapperError::Malformed`].
//!
//! [`safe`] recovers only the first kind, so genuine defects in a resolver or a
//! collaborator still surface instead of silently turning into `null`.

use crate::error::{MapperError, MapperResult};
use serde_json::{Map, Value};
use tracing::trace;

static NULL: Value = Value::Null;

/// Fallible navigation over JSON values. Missing keys read as `null`.
pub trait Navigate {
    /// Reads `key` of an object.
    fn field(&self, key: &str) -> MapperResult<&Value>;

    /// Reads a chain of object keys.
    fn path(&self, keys: &[&str]) -> MapperResult<&Value>;

    /// Borrows the elements of an array.
    fn items(&self) -> MapperResult<&[Value]>;

    /// Borrows a string.
    fn text(&self) -> MapperResult<&str>;
}

impl Navigate for Value {
    fn field(&self, key: &str) -> MapperResult<&Value> {
        match self {
            Self::Null => Err(MapperError::absent(key.to_owned())),
            Self::Object(map) => Ok(map.get(key).unwrap_or(&NULL)),
            other => Err(MapperError::malformed(format!(
                "cannot read `{key}` of a {}",
                kind_name(other)
            ))),
        }
    }

    fn path(&self, keys: &[&str]) -> MapperResult<&Value> {
        let mut current = self;
        for (depth, key) in keys.iter().enumerate() {
            current = current.field(key).map_err(|err| match err {
                MapperError::AbsentField { context, .. } => {
                    MapperError::AbsentField { path: keys[..=depth].join(".").into(), context }
                }
                other => other,
            })?;
        }
        Ok(current)
    }

    fn items(&self) -> MapperResult<&[Value]> {
        match self {
            Self::Null => Err(MapperError::absent("[]")),
            Self::Array(items) => Ok(items),
            other => Err(MapperError::malformed(format!(
                "expected an array, found a {}",
                kind_name(other)
            ))),
        }
    }

    fn text(&self) -> MapperResult<&str> {
        match self {
            Self::Null => Err(MapperError::absent("\"\"")),
            Self::String(text) => Ok(text),
            other => Err(MapperError::malformed(format!(
                "expected a string, found a {}",
                kind_name(other)
            ))),
        }
    }
}

/// Runs `accessor` and substitutes `fallback` if it navigated through an absent value.
///
/// Any other error is returned unchanged.
pub fn safe<T, F>(accessor: F, fallback: T) -> MapperResult<T>
where
    F: FnOnce() -> MapperResult<T>,
{
    match accessor() {
        Err(MapperError::AbsentField { path, .. }) => {
            trace!(%path, "Absent value, using fallback");
            Ok(fallback)
        }
        other => other,
    }
}

/// Like [`safe`], with `None` as the fallback.
pub fn optional<T, F>(accessor: F) -> MapperResult<Option<T>>
where
    F: FnOnce() -> MapperResult<T>,
{
    safe(|| accessor().map(Some), None)
}

/// Reads `path` from `value`, yielding `null` if any link is absent.
pub fn pluck(value: &Value, path: &[&str]) -> MapperResult<Value> {
    safe(|| value.path(path).cloned(), Value::Null)
}

/// Truthiness of a payload value: `null`, `false`, `0`, `NaN` and `""` are falsy.
#[must_use]
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Turns a `null` component into an empty object and borrows its fields.
pub fn ensure_object(value: &mut Value) -> MapperResult<&mut Map<String, Value>> {
    if value.is_null() {
        *value = Value::Object(Map::new());
    }
    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(MapperError::malformed(format!(
            "component must be an object, found a {}",
            kind_name(other)
        ))),
    }
}

/// Renders a scalar for interpolation into text: strings verbatim, the rest as JSON.
#[must_use]
pub fn plain_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

pub(crate) const fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
