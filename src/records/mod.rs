//! Record definitions
//!
//! The three fixed record shapes (User, Product, Order), the closed
//! `Record` sum over them, and the `RecordKind` selector.

mod types;

pub use types::{OrderRecord, ProductRecord, Record, RecordKind, UserRecord};
