use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::{Result, Table};

/// One row rendered as a JSON object, keys in header order.
/// Cells missing from a short row are written as "".
struct RowObject<'a> {
    columns: &'a [(&'a str, usize)],
    cells: &'a [String],
}

impl Serialize for RowObject<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for &(name, position) in self.columns {
            let value = self.cells.get(position).map(String::as_str).unwrap_or("");
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Table {
    /// Serialize every row as an array of string-valued objects with
    /// two-space indentation. A table with no rows gives `[]`.
    pub fn to_json(&self) -> Result<String> {
        if self.is_empty() {
            return Ok("[]".to_string());
        }

        let columns = self.columns();
        let objects: Vec<RowObject<'_>> = self
            .rows()
            .iter()
            .map(|cells| RowObject {
                columns: &columns,
                cells,
            })
            .collect();

        Ok(serde_json::to_string_pretty(&objects)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new(strings(&["name", "age"]), Vec::new());
        assert_eq!(table.to_json().unwrap(), "[]");
    }

    #[test]
    fn test_single_row_layout() {
        let table = Table::new(strings(&["name", "age"]), vec![strings(&["Alice", "30"])]);
        let expected = "[\n  {\n    \"name\": \"Alice\",\n    \"age\": \"30\"\n  }\n]";
        assert_eq!(table.to_json().unwrap(), expected);
    }

    #[test]
    fn test_every_object_has_every_column() {
        let table = Table::new(
            strings(&["id", "name", "city"]),
            vec![
                strings(&["1", "Alice", "Tokyo"]),
                strings(&["2"]),
                strings(&["3", "Carol", "Osaka", "extra"]),
            ],
        );

        let parsed: Vec<HashMap<String, String>> =
            serde_json::from_str(&table.to_json().unwrap()).unwrap();

        assert_eq!(parsed.len(), 3);
        for object in &parsed {
            let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
            keys.sort();
            assert_eq!(keys, vec!["city", "id", "name"]);
        }
        assert_eq!(parsed[1]["name"], "");
        assert_eq!(parsed[1]["city"], "");
        assert_eq!(parsed[2]["city"], "Osaka");
    }

    #[test]
    fn test_values_stay_strings_and_escape() {
        let table = Table::new(
            strings(&["n", "quote"]),
            vec![strings(&["007", "say \"hi\"\n"])],
        );

        let parsed: Vec<HashMap<String, serde_json::Value>> =
            serde_json::from_str(&table.to_json().unwrap()).unwrap();
        assert_eq!(parsed[0]["n"], serde_json::Value::String("007".to_string()));
        assert_eq!(parsed[0]["quote"], serde_json::Value::String("say \"hi\"\n".to_string()));
    }

    #[test]
    fn test_duplicate_header_uses_last_position() {
        let table = Table::new(strings(&["k", "k"]), vec![strings(&["first", "second"])]);
        let parsed: Vec<HashMap<String, String>> =
            serde_json::from_str(&table.to_json().unwrap()).unwrap();
        assert_eq!(parsed[0].len(), 1);
        assert_eq!(parsed[0]["k"], "second");
    }
}
