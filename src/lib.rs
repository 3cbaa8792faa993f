//! # dto-visit
//!
//! Typed decoding of JSON documents into a closed set of record DTOs.
//!
//! ## Features
//!
//! - **Typed Decode**: `decode::<UserRecord>(&doc)` picks the extraction routine from the type
//! - **Field Policies**: User and Order fields are required; Product fields default on mismatch
//! - **Closed Dispatch**: `Record` is a sum over the three kinds, matched exhaustively
//! - **CLI**: decode files or inline JSON and print one line per record
//!
//! ## Quick Start
//!
//! ```rust
//! use dto_visit::decode::decode;
//! use dto_visit::records::{OrderRecord, Record};
//!
//! let doc = serde_json::json!({"products": [31], "total": 888, "id": 21, "user": 1});
//! let order: OrderRecord = decode(&doc).unwrap();
//!
//! assert_eq!(
//!     Record::from(order).to_string(),
//!     "Order => Id: 21 User: 1 Total: 888 Products: 31"
//! );
//! ```
//!
//! ## Architecture
//!
//! ```text
//!  document ──► decode::<K>() / decode_as(kind) ──► Record ──► Display
//!                 │                                   │
//!          ┌──────┼────────┐                ┌─────────┼─────────┐
//!          User   Product  Order            User   Product   Order
//!        required default  required         (exhaustive match)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Record definitions
pub mod records;

/// Typed decoder (document → record)
pub mod decode;

/// Record formatting (record → text)
pub mod display;

/// Built-in sample documents
pub mod samples;

/// Application configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use decode::{decode, decode_as, Decode};
pub use error::{Error, Result};
pub use records::{OrderRecord, ProductRecord, Record, RecordKind, UserRecord};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
