//! Decoder types and traits
//!
//! Defines the core decoder abstractions.

use crate::error::Result;
use crate::records::{OrderRecord, ProductRecord, RecordKind, UserRecord};
use crate::types::JsonValue;
use serde::Deserialize;

mod sealed {
    pub trait Sealed {}

    impl Sealed for crate::records::UserRecord {}
    impl Sealed for crate::records::ProductRecord {}
    impl Sealed for crate::records::OrderRecord {}
}

/// A record type that can be decoded from a JSON document.
///
/// Sealed: only `UserRecord`, `ProductRecord` and `OrderRecord` implement it.
pub trait Decode: sealed::Sealed + Sized {
    /// Kind this type decodes as
    const KIND: RecordKind;

    /// Decode one document into a record, all-or-nothing
    fn decode(document: &JsonValue) -> Result<Self>;
}

/// A document paired with the kind it should be decoded as
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaggedDocument {
    pub kind: RecordKind,
    pub document: JsonValue,
}

impl TaggedDocument {
    pub fn new(kind: RecordKind, document: JsonValue) -> Self {
        Self { kind, document }
    }
}

// Keep the per-kind impls next to the trait so the closed set is visible.
impl Decode for UserRecord {
    const KIND: RecordKind = RecordKind::User;

    fn decode(document: &JsonValue) -> Result<Self> {
        super::decoders::decode_user(document)
    }
}

impl Decode for ProductRecord {
    const KIND: RecordKind = RecordKind::Product;

    fn decode(document: &JsonValue) -> Result<Self> {
        Ok(super::decoders::decode_product(document))
    }
}

impl Decode for OrderRecord {
    const KIND: RecordKind = RecordKind::Order;

    fn decode(document: &JsonValue) -> Result<Self> {
        super::decoders::decode_order(document)
    }
}
