//! Output formatting utilities

use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use serde_json::Value;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Table,
        }
    }
}

/// Format output based on format type
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> String {
    let value = match serde_json::to_value(data) {
        Ok(value) => value,
        Err(_) => return "{}".to_string(),
    };

    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Table => format_table(&value),
    }
}

pub fn print_output<T: Serialize>(data: &T, format: OutputFormat) {
    println!("{}", format_output(data, format));
}

/// Empty table with the given header
pub fn new_table<S: ToString>(header: &[S]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header.iter().map(ToString::to_string).collect::<Vec<_>>());
    table
}

/// Objects become one row per field; arrays become one row per item
fn format_table(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let mut fields: Vec<_> = map.iter().filter(|(_, v)| !v.is_null()).collect();
            fields.sort_by(|a, b| a.0.cmp(b.0));

            let mut table = new_table(&["Field", "Value"]);
            for (key, value) in fields {
                table.add_row(vec![key.clone(), cell(value)]);
            }
            table.to_string()
        }
        Value::Array(items) if items.is_empty() => "(none)".to_string(),
        Value::Array(items) => rows_table(items).to_string(),
        other => cell(other),
    }
}

fn rows_table(items: &[Value]) -> Table {
    let mut columns: Vec<&str> = Vec::new();
    for item in items {
        if let Value::Object(map) = item {
            for key in map.keys() {
                if !columns.contains(&key.as_str()) {
                    columns.push(key);
                }
            }
        }
    }

    if columns.is_empty() {
        let mut table = new_table(&["Value"]);
        for item in items {
            table.add_row(vec![cell(item)]);
        }
        return table;
    }

    let mut table = new_table(&columns[..]);
    for item in items {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| item.get(*column).map(cell).unwrap_or_default())
            .collect();
        table.add_row(cells);
    }
    table
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::from("csv"), OutputFormat::Table);
    }

    #[test]
    fn test_object_is_one_row_per_field() {
        let out = format_output(
            &json!({"uid": "movies", "primaryKey": null, "createdAt": "2024"}),
            OutputFormat::Table,
        );
        assert!(out.contains("Field"));
        assert!(out.contains("createdAt"));
        assert!(out.contains("movies"));
        assert!(!out.contains("primaryKey"));
        assert!(out.find("createdAt").unwrap() < out.find("uid").unwrap());
    }

    #[test]
    fn test_array_of_objects_uses_keys_as_columns() {
        let out = format_output(
            &json!([{"id": 1, "title": "Carol"}, {"id": 2, "genre": "drama"}]),
            OutputFormat::Table,
        );
        assert!(out.contains("title"));
        assert!(out.contains("genre"));
        assert!(out.contains("Carol"));
        assert!(out.contains("drama"));
        assert_eq!(format_output(&json!([]), OutputFormat::Table), "(none)");
    }

    #[test]
    fn test_array_of_scalars_is_one_column() {
        let out = format_output(&json!(["a", "b"]), OutputFormat::Table);
        assert!(out.contains("Value"));
        assert!(out.contains('a'));
        assert!(out.contains('b'));
    }

    #[test]
    fn test_json_is_pretty() {
        let out = format_output(&json!({"id": 1}), OutputFormat::Json);
        assert_eq!(out, "{\n  \"id\": 1\n}");
    }
}
