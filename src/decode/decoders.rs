//! Decoder implementations
//!
//! Per-kind field extraction, the static and runtime entry points, and
//! document extraction from a wrapper value.

use super::fields::FieldReader;
use super::types::{Decode, TaggedDocument};
use crate::error::{Error, Result};
use crate::records::{OrderRecord, ProductRecord, Record, RecordKind, UserRecord};
use crate::types::JsonValue;
use tracing::trace;

// ============================================================================
// Entry Points
// ============================================================================

/// Decode a document as the record type `K`
///
/// ```
/// use dto_visit::decode::decode;
/// use dto_visit::records::UserRecord;
///
/// let doc = serde_json::json!({"name": "ada", "email": "ada@example.com", "id": 7});
/// let user: UserRecord = decode(&doc).unwrap();
/// assert_eq!(user.id, 7);
/// ```
pub fn decode<K: Decode>(document: &JsonValue) -> Result<K> {
    let kind = K::KIND;
    trace!(%kind, "Decoding document");
    K::decode(document)
}

/// Decode a document as the kind chosen at runtime
pub fn decode_as(kind: RecordKind, document: &JsonValue) -> Result<Record> {
    match kind {
        RecordKind::User => decode::<UserRecord>(document).map(Record::from),
        RecordKind::Product => decode::<ProductRecord>(document).map(Record::from),
        RecordKind::Order => decode::<OrderRecord>(document).map(Record::from),
    }
}

/// Decode a tagged document by its own kind
pub fn decode_tagged(tagged: &TaggedDocument) -> Result<Record> {
    decode_as(tagged.kind, &tagged.document)
}

// ============================================================================
// Per-Kind Extraction
// ============================================================================

pub(super) fn decode_user(document: &JsonValue) -> Result<UserRecord> {
    let fields = FieldReader::strict(RecordKind::User, document)?;

    Ok(UserRecord {
        name: fields.text("name")?,
        email: fields.text("email")?,
        id: fields.integer("id")?,
    })
}

/// Product never fails: absent or mistyped fields take their defaults.
///
/// Known asymmetry with User and Order, which reject the same input.
pub(super) fn decode_product(document: &JsonValue) -> ProductRecord {
    let fields = FieldReader::lenient(RecordKind::Product, document);
    let defaults = ProductRecord::default();

    ProductRecord {
        name: fields.text_or("name", &defaults.name),
        price: fields.decimal_or("price", defaults.price),
        stock: fields.integer_or("stock", defaults.stock),
        id: fields.integer_or("id", defaults.id),
    }
}

pub(super) fn decode_order(document: &JsonValue) -> Result<OrderRecord> {
    let fields = FieldReader::strict(RecordKind::Order, document)?;

    Ok(OrderRecord {
        products: fields.integer_list("products")?,
        total: fields.decimal("total")?,
        id: fields.integer("id")?,
        user: fields.integer("user")?,
    })
}

// ============================================================================
// Document Extraction
// ============================================================================

/// Parse JSON text into a document tree
pub fn parse_document(body: &str) -> Result<JsonValue> {
    serde_json::from_str(body).map_err(Error::from)
}

/// Parse JSON text holding one tagged document or an array of them
pub fn parse_tagged(body: &str) -> Result<Vec<TaggedDocument>> {
    match parse_document(body)? {
        JsonValue::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(Error::from))
            .collect(),
        single => Ok(vec![serde_json::from_value(single)?]),
    }
}

/// Extract the documents to decode from a parsed value
///
/// Without a path, an array yields its elements and anything else yields
/// itself. Wildcard paths go through JSONPath unless they also use a
/// negative index, which only the dot-notation walker understands.
pub fn extract_documents(value: &JsonValue, record_path: Option<&str>) -> Result<Vec<JsonValue>> {
    match record_path {
        Some(path) if path.contains('*') && !path.contains("[-") => {
            extract_with_jsonpath(value, path)
        }
        Some(path) => match extract_simple_path(value, path) {
            Some(JsonValue::Array(arr)) => Ok(arr.clone()),
            Some(v) => Ok(vec![v.clone()]),
            None => Ok(vec![]),
        },
        None => match value {
            JsonValue::Array(arr) => Ok(arr.clone()),
            _ => Ok(vec![value.clone()]),
        },
    }
}

/// Navigate a simple dot-notation path such as `data.items[-1]`
///
/// A `[*]` segment stops navigation and yields the array it selects.
fn extract_simple_path<'a>(value: &'a JsonValue, path: &str) -> Option<&'a JsonValue> {
    let path = path.strip_prefix("$.").unwrap_or(path);
    if path.is_empty() || path == "$" {
        return Some(value);
    }

    let mut current = value;
    for part in path.split('.') {
        let Some(bracket_pos) = part.find('[') else {
            current = current.get(part)?;
            continue;
        };

        let name = &part[..bracket_pos];
        let index_str = part[bracket_pos + 1..].strip_suffix(']')?;

        if !name.is_empty() {
            current = current.get(name)?;
        }

        let arr = current.as_array()?;
        if index_str == "*" {
            return Some(current);
        }

        let index = index_str.parse::<i64>().ok()?;
        let len = i64::try_from(arr.len()).ok()?;
        let idx = if index < 0 { len + index } else { index };
        current = arr.get(usize::try_from(idx).ok()?)?;
    }

    Some(current)
}

/// Extract documents using jsonpath-rust
fn extract_with_jsonpath(value: &JsonValue, path: &str) -> Result<Vec<JsonValue>> {
    use jsonpath_rust::JsonPath;

    let jp = JsonPath::try_from(path)
        .map_err(|e| Error::json_path(format!("Invalid JSONPath: {e}")))?;

    match jp.find(value) {
        JsonValue::Array(arr) => Ok(arr),
        JsonValue::Null => Ok(vec![]),
        other => Ok(vec![other]),
    }
}
