//! Typed decoder module
//!
//! Turns a generic JSON document into one of the three record types.
//!
//! # Overview
//!
//! - `decode::<K>()` picks the extraction routine from the requested type
//! - `decode_as()` does the same for a `RecordKind` chosen at runtime
//! - User and Order fields are required; Product fields default on mismatch
//! - `extract_documents()` locates documents inside a wrapper value

mod decoders;
mod fields;
mod types;

pub use decoders::{
    decode, decode_as, decode_tagged, extract_documents, parse_document, parse_tagged,
};
pub use types::{Decode, TaggedDocument};
