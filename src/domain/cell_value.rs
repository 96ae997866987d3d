use std::fmt::Write as _;

use chrono::{NaiveDate, NaiveTime, Timelike};

use super::cell_formats::CellFormats;

/// Target type of a cell conversion, used to pick the error variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Int,
    Float,
    Date,
    Time,
}

/// Why a cell could not be converted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionFailure {
    pub kind: ValueKind,
    pub message: String,
}

impl ConversionFailure {
    fn new(kind: ValueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// A type that can be read out of a raw text cell.
///
/// Implemented for `String`, `i64`, `f64`, `NaiveDate` and `NaiveTime`.
pub trait CellValue: Sized {
    fn from_cell(raw: &str, formats: &CellFormats) -> Result<Self, ConversionFailure>;
}

impl CellValue for String {
    fn from_cell(raw: &str, _formats: &CellFormats) -> Result<Self, ConversionFailure> {
        Ok(raw.to_string())
    }
}

impl CellValue for i64 {
    fn from_cell(raw: &str, _formats: &CellFormats) -> Result<Self, ConversionFailure> {
        raw.trim()
            .parse::<i64>()
            .map_err(|e| ConversionFailure::new(ValueKind::Int, e.to_string()))
    }
}

impl CellValue for f64 {
    fn from_cell(raw: &str, _formats: &CellFormats) -> Result<Self, ConversionFailure> {
        raw.parse::<f64>()
            .map_err(|e| ConversionFailure::new(ValueKind::Float, e.to_string()))
    }
}

impl CellValue for NaiveDate {
    fn from_cell(raw: &str, formats: &CellFormats) -> Result<Self, ConversionFailure> {
        let pattern = formats.date_format.as_str();
        let date = NaiveDate::parse_from_str(raw, pattern)
            .map_err(|e| ConversionFailure::new(ValueKind::Date, e.to_string()))?;
        ensure_exact(ValueKind::Date, raw, pattern, date.format(pattern))?;
        Ok(date)
    }
}

impl CellValue for NaiveTime {
    fn from_cell(raw: &str, formats: &CellFormats) -> Result<Self, ConversionFailure> {
        let pattern = formats.time_format.as_str();
        let time = NaiveTime::parse_from_str(raw, pattern)
            .map_err(|e| ConversionFailure::new(ValueKind::Time, e.to_string()))?;
        // chrono encodes a leap second as nanosecond >= 1e9
        if time.nanosecond() >= 1_000_000_000 {
            return Err(ConversionFailure::new(ValueKind::Time, "second out of range"));
        }
        ensure_exact(ValueKind::Time, raw, pattern, time.format(pattern))?;
        Ok(time)
    }
}

/// chrono accepts short numeric fields (`2024011` for `%Y%m%d`); a value only
/// counts as matching when formatting it back yields the same text.
fn ensure_exact(
    kind: ValueKind,
    raw: &str,
    pattern: &str,
    formatted: impl std::fmt::Display,
) -> Result<(), ConversionFailure> {
    let mut canonical = String::with_capacity(raw.len());
    if write!(canonical, "{}", formatted).is_err() || canonical != raw {
        return Err(ConversionFailure::new(
            kind,
            format!("value does not match pattern '{}'", pattern),
        ));
    }
    Ok(())
}
