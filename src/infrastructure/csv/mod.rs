// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// File access, encoding handling, and parsing into a Table

mod csv_parser;
pub mod decoder;
mod quote_check;

pub use csv_parser::CsvLoader;
pub use quote_check::{QuoteFault, QuoteFaultKind};
