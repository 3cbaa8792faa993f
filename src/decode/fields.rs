//! Field accessors
//!
//! Key lookup plus type coercion over a JSON object. The strict accessors
//! fail with `FieldMissing` / `TypeMismatch`; the `_or` variants swallow
//! either error and return the supplied default.

use crate::error::{Error, Result};
use crate::records::RecordKind;
use crate::types::{json_type_name, JsonObject, JsonValue};
use tracing::debug;

const TEXT: &str = "string";
const INTEGER: &str = "32-bit integer";
const DECIMAL: &str = "decimal";
const INTEGER_LIST: &str = "array of 32-bit integers";
const OBJECT: &str = "object";

/// Reads typed fields out of one document on behalf of a record kind
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldReader<'a> {
    kind: RecordKind,
    object: Option<&'a JsonObject>,
}

impl<'a> FieldReader<'a> {
    /// Reader that requires the document to be an object
    pub(crate) fn strict(kind: RecordKind, document: &'a JsonValue) -> Result<Self> {
        match document {
            JsonValue::Object(object) => Ok(Self {
                kind,
                object: Some(object),
            }),
            other => Err(Error::type_mismatch(kind, "$", OBJECT, json_type_name(other))),
        }
    }

    /// Reader that treats a non-object document as having no keys
    pub(crate) fn lenient(kind: RecordKind, document: &'a JsonValue) -> Self {
        Self {
            kind,
            object: document.as_object(),
        }
    }

    fn lookup(&self, field: &str) -> Result<&'a JsonValue> {
        self.object
            .and_then(|object| object.get(field))
            .ok_or_else(|| Error::field_missing(self.kind, field))
    }

    fn mismatch(&self, field: impl Into<String>, expected: &'static str, found: &JsonValue) -> Error {
        Error::type_mismatch(self.kind, field, expected, json_type_name(found))
    }

    // ------------------------------------------------------------------------
    // Required accessors
    // ------------------------------------------------------------------------

    pub(crate) fn text(&self, field: &str) -> Result<String> {
        let value = self.lookup(field)?;
        as_text(value).ok_or_else(|| self.mismatch(field, TEXT, value))
    }

    pub(crate) fn integer(&self, field: &str) -> Result<i32> {
        let value = self.lookup(field)?;
        as_integer(value).ok_or_else(|| self.mismatch(field, INTEGER, value))
    }

    pub(crate) fn decimal(&self, field: &str) -> Result<f64> {
        let value = self.lookup(field)?;
        as_decimal(value).ok_or_else(|| self.mismatch(field, DECIMAL, value))
    }

    pub(crate) fn integer_list(&self, field: &str) -> Result<Vec<i32>> {
        let value = self.lookup(field)?;
        let items = value
            .as_array()
            .ok_or_else(|| self.mismatch(field, INTEGER_LIST, value))?;

        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                as_integer(item).ok_or_else(|| self.mismatch(format!("{field}[{i}]"), INTEGER, item))
            })
            .collect()
    }

    // ------------------------------------------------------------------------
    // Default-on-mismatch accessors
    // ------------------------------------------------------------------------

    pub(crate) fn text_or(&self, field: &str, default: &str) -> String {
        self.text(field)
            .unwrap_or_else(|e| self.fallback(field, &e, default.to_string()))
    }

    pub(crate) fn integer_or(&self, field: &str, default: i32) -> i32 {
        self.integer(field)
            .unwrap_or_else(|e| self.fallback(field, &e, default))
    }

    pub(crate) fn decimal_or(&self, field: &str, default: f64) -> f64 {
        self.decimal(field)
            .unwrap_or_else(|e| self.fallback(field, &e, default))
    }

    fn fallback<T: std::fmt::Debug>(&self, field: &str, cause: &Error, default: T) -> T {
        debug!(kind = %self.kind, field, default = ?default, cause = %cause, "Field defaulted");
        default
    }
}

// ============================================================================
// Coercions
// ============================================================================

fn as_text(value: &JsonValue) -> Option<String> {
    value.as_str().map(String::from)
}

/// Integer coercion: any number or boolean whose value fits in `i32`.
///
/// Floats truncate toward zero (`1.9` → `1`); `true` / `false` become 1 / 0.
fn as_integer(value: &JsonValue) -> Option<i32> {
    if let Some(b) = value.as_bool() {
        return Some(i32::from(b));
    }
    if let Some(n) = value.as_i64() {
        return i32::try_from(n).ok();
    }

    let n = value.as_f64()?.trunc();
    let in_range = n >= f64::from(i32::MIN) && n <= f64::from(i32::MAX);
    in_range.then_some(n as i32)
}

/// Decimal coercion: any number, or a boolean as 1.0 / 0.0
fn as_decimal(value: &JsonValue) -> Option<f64> {
    value
        .as_bool()
        .map(|b| if b { 1.0 } else { 0.0 })
        .or_else(|| value.as_f64())
}
