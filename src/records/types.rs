//! Record types
//!
//! Flat, immutable DTOs. Field names serialize to the same keys the
//! decoder reads, so `to_document` output decodes back to an equal record.

use crate::error::{Error, Result};
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Record Kind
// ============================================================================

/// The closed set of record shapes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// A user account
    User,
    /// A catalogue product
    Product,
    /// An order placed by a user
    Order,
}

impl RecordKind {
    /// All kinds, in display order
    pub const ALL: [RecordKind; 3] = [RecordKind::User, RecordKind::Product, RecordKind::Order];

    /// Lowercase name of the kind
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::User => "user",
            RecordKind::Product => "product",
            RecordKind::Order => "order",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "user" => Ok(RecordKind::User),
            "product" => Ok(RecordKind::Product),
            "order" => Ok(RecordKind::Order),
            _ => Err(Error::Other(format!(
                "Unknown record kind '{s}' (expected user, product or order)"
            ))),
        }
    }
}

// ============================================================================
// Records
// ============================================================================

/// A user. Every field is required when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub id: i32,
}

/// A product. Every field falls back to a default when absent or mistyped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    pub name: String,
    pub price: f64,
    pub stock: i32,
    pub id: i32,
}

impl Default for ProductRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: 0.0,
            stock: 0,
            id: -1,
        }
    }
}

/// An order. `user` references a `UserRecord::id` and is not checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRecord {
    pub products: Vec<i32>,
    pub total: f64,
    pub id: i32,
    pub user: i32,
}

// ============================================================================
// Record Sum
// ============================================================================

/// Any one of the three record kinds
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "lowercase")]
pub enum Record {
    User(UserRecord),
    Product(ProductRecord),
    Order(OrderRecord),
}

impl Record {
    /// Kind of the contained record
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::User(_) => RecordKind::User,
            Record::Product(_) => RecordKind::Product,
            Record::Order(_) => RecordKind::Order,
        }
    }

    /// Encode the record as the document it would be decoded from
    pub fn to_document(&self) -> JsonValue {
        match self {
            Record::User(user) => json!({
                "name": user.name,
                "email": user.email,
                "id": user.id,
            }),
            Record::Product(product) => json!({
                "name": product.name,
                "price": product.price,
                "stock": product.stock,
                "id": product.id,
            }),
            Record::Order(order) => json!({
                "products": order.products,
                "total": order.total,
                "id": order.id,
                "user": order.user,
            }),
        }
    }
}

impl From<UserRecord> for Record {
    fn from(record: UserRecord) -> Self {
        Record::User(record)
    }
}

impl From<ProductRecord> for Record {
    fn from(record: ProductRecord) -> Self {
        Record::Product(record)
    }
}

impl From<OrderRecord> for Record {
    fn from(record: OrderRecord) -> Self {
        Record::Order(record)
    }
}
