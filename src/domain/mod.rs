// ============================================================
// DOMAIN LAYER
// ============================================================
// Core types for loaded tables and cell conversion
// No I/O

pub mod cell_formats;
pub mod cell_value;
pub mod encoding;
pub mod error;
pub mod table;

pub use cell_formats::{CellFormats, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT};
pub use cell_value::{CellValue, ConversionFailure, ValueKind};
pub use encoding::SourceEncoding;
pub use error::{CsvError, ErrorPhase, Result};
pub use table::{Row, Table};
