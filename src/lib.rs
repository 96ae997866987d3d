//! Load delimited text files with a header row into an immutable [`Table`],
//! read single cells as typed values, and export rows as JSON.
//!
//! ```no_run
//! let table = csvloader::load("people.csv", "utf-8")?;
//! let age: Option<i64> = table.get_int_opt(0, "age")?;
//! println!("{}", table.to_json()?);
//! # Ok::<(), csvloader::CsvError>(())
//! ```

mod application;
mod domain;
mod infrastructure;

use std::path::Path;

pub use crate::domain::{
    CellFormats, CellValue, ConversionFailure, CsvError, ErrorPhase, Result, Row, SourceEncoding,
    Table, ValueKind, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT,
};
pub use crate::infrastructure::csv::decoder::{decode, DecodedText};
pub use crate::infrastructure::csv::{CsvLoader, QuoteFault, QuoteFaultKind};

/// Load a comma-separated file. `encoding` is one of `utf-8`, `shift-jis`,
/// `shift_jis` or `sjis` (exact match).
pub fn load(path: impl AsRef<Path>, encoding: &str) -> Result<Table> {
    CsvLoader::new().load(path, encoding)
}
