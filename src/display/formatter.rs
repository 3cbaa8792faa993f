//! Record formatters

use crate::error::Result;
use crate::records::{OrderRecord, ProductRecord, Record, UserRecord};
use std::fmt;
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One labelled line per record
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

// ============================================================================
// Display Impls
// ============================================================================

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User => Id: {} Name: {} Email: {}",
            self.id, self.name, self.email
        )
    }
}

impl fmt::Display for ProductRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product => Id: {} Name: {} Price: {} Stock: {}",
            self.id, self.name, self.price, self.stock
        )
    }
}

impl fmt::Display for OrderRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order => Id: {} User: {} Total: {} Products: {}",
            self.id,
            self.user,
            self.total,
            join_products(&self.products)
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::User(user) => fmt::Display::fmt(user, f),
            Record::Product(product) => fmt::Display::fmt(product, f),
            Record::Order(order) => fmt::Display::fmt(order, f),
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Join product ids with `,` (no leading or trailing separator)
pub fn join_products(products: &[i32]) -> String {
    products
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Render each record as one text line, in order
pub fn render_text(records: &[Record]) -> Vec<String> {
    records.iter().map(ToString::to_string).collect()
}

/// Write records to `out`, one line each
pub fn write_records<W: Write>(mut out: W, records: &[Record], format: OutputFormat) -> Result<()> {
    for record in records {
        match format {
            OutputFormat::Text => writeln!(out, "{record}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut out, record)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
