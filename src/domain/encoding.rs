use std::fmt;
use std::str::FromStr;

use super::error::CsvError;

/// Character encoding of a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    /// UTF-8, with or without a byte-order mark
    Utf8,

    /// Shift_JIS (code page 932 family)
    ShiftJis,
}

impl SourceEncoding {
    /// Canonical label for logs and messages
    pub fn name(&self) -> &'static str {
        match self {
            SourceEncoding::Utf8 => "utf-8",
            SourceEncoding::ShiftJis => "shift_jis",
        }
    }
}

impl FromStr for SourceEncoding {
    type Err = CsvError;

    /// Names are matched exactly and case-sensitively.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "utf-8" => Ok(SourceEncoding::Utf8),
            "shift-jis" | "shift_jis" | "sjis" => Ok(SourceEncoding::ShiftJis),
            _ => Err(CsvError::UnsupportedEncoding {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
