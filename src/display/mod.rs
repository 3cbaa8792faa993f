//! Display module
//!
//! Formats records as console lines.
//!
//! # Overview
//!
//! Every record type implements `Display` with a fixed label template.
//! `Record` dispatches to them with an exhaustive match, so adding a kind
//! without a formatter is a compile error.

mod formatter;

pub use formatter::{join_products, render_text, write_records, OutputFormat};

#[cfg(test)]
mod tests;
