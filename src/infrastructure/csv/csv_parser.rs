// ============================================================
// CSV PARSER
// ============================================================
// Load CSV files into a Table with explicit source encoding

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use super::decoder;
use super::quote_check::check_quoting;
use crate::domain::{CsvError, Result, SourceEncoding, Table};

/// CSV loader with a configurable delimiter
#[derive(Debug, Clone)]
pub struct CsvLoader {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvLoader {
    /// Create a new CSV loader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Load a CSV file decoded with the named encoding.
    ///
    /// The encoding name is checked before the file is touched.
    pub fn load(&self, path: impl AsRef<Path>, encoding_name: &str) -> Result<Table> {
        let path = path.as_ref();
        let encoding: SourceEncoding = encoding_name.parse()?;

        debug!(path = %path.display(), encoding = %encoding, "Loading CSV file");

        let bytes = read_file(path)?;
        self.parse_bytes(&bytes, encoding, &path.display().to_string())
    }

    /// Parse CSV content already held in memory.
    /// `source_name` only appears in error messages and logs.
    pub fn parse_bytes(
        &self,
        bytes: &[u8],
        encoding: SourceEncoding,
        source_name: &str,
    ) -> Result<Table> {
        let decoded = decoder::decode(bytes, encoding);

        if decoded.bom_removed {
            debug!(
                source = source_name,
                decoded_as = decoded.encoding.name(),
                "Stripped byte-order mark"
            );
        }
        if decoded.had_errors {
            warn!(
                source = source_name,
                encoding = %encoding,
                "Input contained malformed byte sequences; replaced with U+FFFD"
            );
        }

        self.parse_text(&decoded.text, source_name)
    }

    fn parse_text(&self, text: &str, source_name: &str) -> Result<Table> {
        check_quoting(text, self.delimiter).map_err(|fault| {
            if fault.record == 0 {
                CsvError::HeaderRead {
                    source_name: source_name.to_string(),
                    message: format!("line {}: {}", fault.line, fault),
                }
            } else {
                CsvError::RecordRead {
                    source_name: source_name.to_string(),
                    line: fault.line,
                    message: fault.to_string(),
                }
            }
        })?;

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .trim(Trim::None)
            .flexible(true) // Rows may differ in length from the header
            .from_reader(text.as_bytes());

        let mut records = reader.records();

        let headers = match records.next() {
            Some(Ok(record)) => record_to_row(&record),
            Some(Err(e)) => {
                return Err(CsvError::HeaderRead {
                    source_name: source_name.to_string(),
                    message: e.to_string(),
                })
            }
            None => {
                return Err(CsvError::HeaderRead {
                    source_name: source_name.to_string(),
                    message: "no header row".to_string(),
                })
            }
        };

        let mut rows = Vec::new();
        for result in records {
            let record = result.map_err(|e| CsvError::RecordRead {
                source_name: source_name.to_string(),
                line: e.position().map(|p| p.line()).unwrap_or(0),
                message: e.to_string(),
            })?;
            rows.push(record_to_row(&record));
        }

        let table = Table::new(headers, rows);
        info!(
            source = source_name,
            rows = table.row_count(),
            columns = table.column_count(),
            "Loaded CSV"
        );

        Ok(table)
    }
}

fn record_to_row(record: &StringRecord) -> Vec<String> {
    record.iter().map(|s| s.to_string()).collect()
}

/// Read the whole file; the handle is dropped on every exit path
fn read_file(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|source| CsvError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer).map_err(|source| CsvError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(buffer)
}
