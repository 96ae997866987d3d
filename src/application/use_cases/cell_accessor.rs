// ============================================================
// CELL ACCESSOR
// ============================================================
// Typed, read-only access to single cells addressed by (row, column)

use chrono::{NaiveDate, NaiveTime};

use crate::domain::{CellValue, ConversionFailure, CsvError, Result, Table, ValueKind};

impl Table {
    /// Raw text of one cell.
    ///
    /// Fails with `UnknownColumn` before the row index is looked at, then with
    /// `RowIndexOutOfRange` for negative or too-large indices, and finally with
    /// `CellMissing` when the row is shorter than the column's position.
    pub fn get_cell(&self, row: isize, column: &str) -> Result<&str> {
        self.locate(row, column).map(|(_, raw)| raw)
    }

    /// Convert a cell to `T`. Empty cells are handed to the conversion as-is.
    pub fn get<T: CellValue>(&self, row: isize, column: &str) -> Result<T> {
        let (row, raw) = self.locate(row, column)?;
        self.convert(row, column, raw)
    }

    /// Like [`Table::get`], but an empty cell yields `None` instead of being parsed.
    pub fn get_opt<T: CellValue>(&self, row: isize, column: &str) -> Result<Option<T>> {
        let (row, raw) = self.locate(row, column)?;
        if raw.is_empty() {
            return Ok(None);
        }
        self.convert(row, column, raw).map(Some)
    }

    pub fn get_string(&self, row: isize, column: &str) -> Result<String> {
        self.get(row, column)
    }

    pub fn get_string_opt(&self, row: isize, column: &str) -> Result<Option<String>> {
        self.get_opt(row, column)
    }

    pub fn get_int(&self, row: isize, column: &str) -> Result<i64> {
        self.get(row, column)
    }

    pub fn get_int_opt(&self, row: isize, column: &str) -> Result<Option<i64>> {
        self.get_opt(row, column)
    }

    pub fn get_float(&self, row: isize, column: &str) -> Result<f64> {
        self.get(row, column)
    }

    pub fn get_float_opt(&self, row: isize, column: &str) -> Result<Option<f64>> {
        self.get_opt(row, column)
    }

    /// Date in the table's date pattern (`YYYYMMDD` unless overridden)
    pub fn get_date(&self, row: isize, column: &str) -> Result<NaiveDate> {
        self.get(row, column)
    }

    pub fn get_date_opt(&self, row: isize, column: &str) -> Result<Option<NaiveDate>> {
        self.get_opt(row, column)
    }

    /// Time of day in the table's time pattern (`HH:MM:SS` unless overridden)
    pub fn get_time(&self, row: isize, column: &str) -> Result<NaiveTime> {
        self.get(row, column)
    }

    pub fn get_time_opt(&self, row: isize, column: &str) -> Result<Option<NaiveTime>> {
        self.get_opt(row, column)
    }

    fn locate(&self, row: isize, column: &str) -> Result<(usize, &str)> {
        let position = self
            .column_position(column)
            .ok_or_else(|| CsvError::UnknownColumn {
                column: column.to_string(),
            })?;

        let row_count = self.row_count();
        let index = usize::try_from(row)
            .ok()
            .filter(|&index| index < row_count)
            .ok_or(CsvError::RowIndexOutOfRange { row, row_count })?;

        let cells = &self.rows()[index];
        let raw = cells.get(position).ok_or_else(|| CsvError::CellMissing {
            row: index,
            column: column.to_string(),
            position,
            row_len: cells.len(),
        })?;

        Ok((index, raw.as_str()))
    }

    fn convert<T: CellValue>(&self, row: usize, column: &str, raw: &str) -> Result<T> {
        T::from_cell(raw, self.formats())
            .map_err(|failure| conversion_error(failure, row, column, raw))
    }
}

fn conversion_error(failure: ConversionFailure, row: usize, column: &str, raw: &str) -> CsvError {
    let column = column.to_string();
    let value = raw.to_string();
    let message = failure.message;

    match failure.kind {
        ValueKind::Int => CsvError::IntParse { row, column, value, message },
        ValueKind::Float => CsvError::FloatParse { row, column, value, message },
        ValueKind::Date => CsvError::DateParse { row, column, value, message },
        ValueKind::Time => CsvError::TimeParse { row, column, value, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellFormats;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn sample_table() -> Table {
        Table::new(
            strings(&["name", "age", "score", "day", "at"]),
            vec![
                strings(&["Alice", "30", "1.5", "20240115", "09:30:00"]),
                strings(&["", "", "", "", ""]),
                strings(&["abc", "abc", "abc", "2024-01-15", "9h30"]),
                strings(&["Short"]),
            ],
        )
    }

    #[test]
    fn test_typed_getters() {
        let table = sample_table();

        assert_eq!(table.get_string(0, "name").unwrap(), "Alice");
        assert_eq!(table.get_int(0, "age").unwrap(), 30);
        assert_eq!(table.get_float(0, "score").unwrap(), 1.5);
        assert_eq!(
            table.get_date(0, "day").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(
            table.get_time(0, "at").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_opt_getters_on_values() {
        let table = sample_table();

        assert_eq!(table.get_string_opt(0, "name").unwrap(), Some("Alice".to_string()));
        assert_eq!(table.get_int_opt(0, "age").unwrap(), Some(30));
        assert_eq!(table.get_float_opt(0, "score").unwrap(), Some(1.5));
        assert!(table.get_date_opt(0, "day").unwrap().is_some());
        assert!(table.get_time_opt(0, "at").unwrap().is_some());
    }

    #[test]
    fn test_opt_getters_on_empty_cells() {
        let table = sample_table();

        assert_eq!(table.get_string_opt(1, "name").unwrap(), None);
        assert_eq!(table.get_int_opt(1, "age").unwrap(), None);
        assert_eq!(table.get_float_opt(1, "score").unwrap(), None);
        assert_eq!(table.get_date_opt(1, "day").unwrap(), None);
        assert_eq!(table.get_time_opt(1, "at").unwrap(), None);

        // Plain getters still try to parse
        assert_eq!(table.get_string(1, "name").unwrap(), "");
        assert!(matches!(table.get_int(1, "age"), Err(CsvError::IntParse { .. })));
    }

    #[test]
    fn test_parse_errors_carry_context() {
        let table = sample_table();

        match table.get_int(2, "age").unwrap_err() {
            CsvError::IntParse { row, column, value, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, "age");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(matches!(table.get_int_opt(2, "age"), Err(CsvError::IntParse { .. })));
        assert!(matches!(table.get_float(2, "score"), Err(CsvError::FloatParse { .. })));
        assert!(matches!(table.get_float_opt(2, "score"), Err(CsvError::FloatParse { .. })));
        assert!(matches!(table.get_date(2, "day"), Err(CsvError::DateParse { .. })));
        assert!(matches!(table.get_date_opt(2, "day"), Err(CsvError::DateParse { .. })));
        assert!(matches!(table.get_time(2, "at"), Err(CsvError::TimeParse { .. })));
        assert!(matches!(table.get_time_opt(2, "at"), Err(CsvError::TimeParse { .. })));
    }

    #[test]
    fn test_row_index_out_of_range() {
        let table = sample_table();
        let row_count = table.row_count() as isize;

        for column in table.column_names() {
            for row in [-1, row_count, isize::MIN, isize::MAX] {
                assert!(
                    matches!(
                        table.get_cell(row, column),
                        Err(CsvError::RowIndexOutOfRange { .. })
                    ),
                    "row {} column {}",
                    row,
                    column
                );
                assert!(matches!(
                    table.get_int_opt(row, column),
                    Err(CsvError::RowIndexOutOfRange { .. })
                ));
            }
        }
    }

    #[test]
    fn test_unknown_column_wins_over_bad_row() {
        let table = sample_table();

        for row in [-1, 0, 99] {
            match table.get_string(row, "missing").unwrap_err() {
                CsvError::UnknownColumn { column } => assert_eq!(column, "missing"),
                other => panic!("unexpected error: {:?}", other),
            }
            assert!(matches!(
                table.get_date_opt(row, "missing"),
                Err(CsvError::UnknownColumn { .. })
            ));
        }
    }

    #[test]
    fn test_short_row_reports_cell_missing() {
        let table = sample_table();

        assert_eq!(table.get_cell(3, "name").unwrap(), "Short");
        match table.get_cell(3, "day").unwrap_err() {
            CsvError::CellMissing { row, column, position, row_len } => {
                assert_eq!(row, 3);
                assert_eq!(column, "day");
                assert_eq!(position, 3);
                assert_eq!(row_len, 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(matches!(
            table.get_string_opt(3, "age"),
            Err(CsvError::CellMissing { .. })
        ));
    }

    #[test]
    fn test_alternate_formats() {
        let table = Table::new(
            strings(&["day", "at"]),
            vec![strings(&["15/01/2024", "18.45"])],
        )
        .with_formats(
            CellFormats::new()
                .with_date_format("%d/%m/%Y")
                .with_time_format("%H.%M"),
        );

        assert_eq!(
            table.get_date(0, "day").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(
            table.get_time(0, "at").unwrap(),
            NaiveTime::from_hms_opt(18, 45, 0).unwrap()
        );
    }
}
