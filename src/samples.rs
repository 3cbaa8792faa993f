//! Built-in sample documents embedded in the binary
//!
//! One canonical document per record kind, used by the `demo` command.

use crate::decode::{parse_document, TaggedDocument};
use crate::error::Result;
use crate::records::RecordKind;
use crate::types::JsonValue;

const USER_SAMPLE: &str = include_str!("../samples/user.json");
const PRODUCT_SAMPLE: &str = include_str!("../samples/product.json");
const ORDER_SAMPLE: &str = include_str!("../samples/order.json");

/// Raw JSON text of the sample for a kind
pub fn sample_source(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::User => USER_SAMPLE,
        RecordKind::Product => PRODUCT_SAMPLE,
        RecordKind::Order => ORDER_SAMPLE,
    }
}

/// Parsed sample document for a kind
pub fn sample_document(kind: RecordKind) -> Result<JsonValue> {
    parse_document(sample_source(kind))
}

/// One tagged sample per kind, in User, Product, Order order
pub fn demo_documents() -> Result<Vec<TaggedDocument>> {
    RecordKind::ALL
        .into_iter()
        .map(|kind| Ok(TaggedDocument::new(kind, sample_document(kind)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_samples_parse() {
        for kind in RecordKind::ALL {
            assert!(sample_document(kind).unwrap().is_object());
        }
    }

    #[test]
    fn test_order_sample_content() {
        let doc = sample_document(RecordKind::Order).unwrap();
        assert_eq!(
            doc,
            json!({"products": [31], "total": 888, "id": 21, "user": 1})
        );
    }

    #[test]
    fn test_demo_documents_order() {
        let kinds: Vec<RecordKind> = demo_documents()
            .unwrap()
            .into_iter()
            .map(|tagged| tagged.kind)
            .collect();
        assert_eq!(kinds, RecordKind::ALL.to_vec());
    }
}
