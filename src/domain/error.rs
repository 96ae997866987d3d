use std::fmt;
use std::path::PathBuf;

/// Which stage of work an error belongs to.
///
/// Load errors abort the whole `load` call. Addressing and conversion errors
/// only fail the single accessor call that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPhase {
    Load,
    Addressing,
    Conversion,
}

#[derive(Debug)]
pub enum CsvError {
    UnsupportedEncoding {
        name: String,
    },
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    HeaderRead {
        source_name: String,
        message: String,
    },
    RecordRead {
        source_name: String,
        line: u64,
        message: String,
    },
    UnknownColumn {
        column: String,
    },
    RowIndexOutOfRange {
        row: isize,
        row_count: usize,
    },
    CellMissing {
        row: usize,
        column: String,
        position: usize,
        row_len: usize,
    },
    IntParse {
        row: usize,
        column: String,
        value: String,
        message: String,
    },
    FloatParse {
        row: usize,
        column: String,
        value: String,
        message: String,
    },
    DateParse {
        row: usize,
        column: String,
        value: String,
        message: String,
    },
    TimeParse {
        row: usize,
        column: String,
        value: String,
        message: String,
    },
    Json(serde_json::Error),
}

impl CsvError {
    pub fn phase(&self) -> ErrorPhase {
        match self {
            CsvError::UnsupportedEncoding { .. }
            | CsvError::FileOpen { .. }
            | CsvError::FileRead { .. }
            | CsvError::HeaderRead { .. }
            | CsvError::RecordRead { .. } => ErrorPhase::Load,
            CsvError::UnknownColumn { .. }
            | CsvError::RowIndexOutOfRange { .. }
            | CsvError::CellMissing { .. } => ErrorPhase::Addressing,
            CsvError::IntParse { .. }
            | CsvError::FloatParse { .. }
            | CsvError::DateParse { .. }
            | CsvError::TimeParse { .. }
            | CsvError::Json(_) => ErrorPhase::Conversion,
        }
    }
}

impl fmt::Display for CsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvError::UnsupportedEncoding { name } => {
                write!(f, "Unsupported encoding: {}", name)
            }
            CsvError::FileOpen { path, source } => {
                write!(f, "Failed to open file {}: {}", path.display(), source)
            }
            CsvError::FileRead { path, source } => {
                write!(f, "Failed to read file {}: {}", path.display(), source)
            }
            CsvError::HeaderRead {
                source_name,
                message,
            } => write!(f, "Failed to read headers from {}: {}", source_name, message),
            CsvError::RecordRead {
                source_name,
                line,
                message,
            } => write!(
                f,
                "Failed to read records from {} at line {}: {}",
                source_name, line, message
            ),
            CsvError::UnknownColumn { column } => {
                write!(f, "Column '{}' does not exist", column)
            }
            CsvError::RowIndexOutOfRange { row, row_count } => write!(
                f,
                "Row index {} out of range (row count {})",
                row, row_count
            ),
            CsvError::CellMissing {
                row,
                column,
                position,
                row_len,
            } => write!(
                f,
                "Row {} has no cell for column '{}' (position {}, row has {} cells)",
                row, column, position, row_len
            ),
            CsvError::IntParse {
                row,
                column,
                value,
                message,
            } => write!(
                f,
                "Failed to parse int in column '{}' at row {} from '{}': {}",
                column, row, value, message
            ),
            CsvError::FloatParse {
                row,
                column,
                value,
                message,
            } => write!(
                f,
                "Failed to parse float in column '{}' at row {} from '{}': {}",
                column, row, value, message
            ),
            CsvError::DateParse {
                row,
                column,
                value,
                message,
            } => write!(
                f,
                "Failed to parse date in column '{}' at row {} from '{}': {}",
                column, row, value, message
            ),
            CsvError::TimeParse {
                row,
                column,
                value,
                message,
            } => write!(
                f,
                "Failed to parse time in column '{}' at row {} from '{}': {}",
                column, row, value, message
            ),
            CsvError::Json(err) => write!(f, "Failed to convert to JSON: {}", err),
        }
    }
}

impl std::error::Error for CsvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CsvError::FileOpen { source, .. } | CsvError::FileRead { source, .. } => Some(source),
            CsvError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CsvError {
    fn from(err: serde_json::Error) -> Self {
        CsvError::Json(err)
    }
}

pub type Result<T> = std::result::Result<T, CsvError>;
