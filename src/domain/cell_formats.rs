// ============================================================
// CELL FORMATS
// ============================================================
// Patterns used when converting cell text into dates and times

use serde::{Deserialize, Serialize};

/// Default date pattern: `YYYYMMDD`, eight digits, no separators
pub const DEFAULT_DATE_FORMAT: &str = "%Y%m%d";

/// Default time pattern: `HH:MM:SS`, 24-hour clock, seconds required
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// chrono format strings for the date and time getters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellFormats {
    /// Pattern for `get_date` / `get_date_opt` (default: `%Y%m%d`)
    pub date_format: String,

    /// Pattern for `get_time` / `get_time_opt` (default: `%H:%M:%S`)
    pub time_format: String,
}

impl Default for CellFormats {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl CellFormats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date_format(mut self, pattern: impl Into<String>) -> Self {
        self.date_format = pattern.into();
        self
    }

    pub fn with_time_format(mut self, pattern: impl Into<String>) -> Self {
        self.time_format = pattern.into();
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.date_format.trim().is_empty() {
            return Err("date_format must not be empty".to_string());
        }
        if self.time_format.trim().is_empty() {
            return Err("time_format must not be empty".to_string());
        }
        Ok(())
    }
}
