//! Parsed log record (the unit handed from ingestion to the view engine).

use serde_json::{Map, Value};

/// A single parsed access-log entry.
///
/// Produced by the ingestion parser and never mutated afterwards. The view
/// engine only reads records; `line_number` is the stable identity used by
/// jump-to-line.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    raw_text: String,
    fields: Map<String, Value>,
    line_number: usize,
}

impl LogRecord {
    /// Create a record from its original text, parsed fields, and 1-based line number.
    pub fn new(raw_text: impl Into<String>, fields: Map<String, Value>, line_number: usize) -> Self {
        Self {
            raw_text: raw_text.into(),
            fields,
            line_number,
        }
    }

    /// Create a record from raw text alone, with no parsed fields.
    ///
    /// Used for inputs that are shown verbatim (and by tests).
    pub fn from_raw(raw_text: impl Into<String>, line_number: usize) -> Self {
        Self::new(raw_text, Map::new(), line_number)
    }

    /// Original text of the entry.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Field name to value mapping.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Look up a single field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// 1-based position in the original input.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Field value rendered to its canonical string form, if present.
    pub fn field_string(&self, name: &str) -> Option<String> {
        self.field(name).map(value_to_string)
    }
}

/// Canonical string rendering of a JSON value.
///
/// Strings are unquoted, numbers keep their JSON text, `null` renders as
/// `null`, and objects/arrays render as compact JSON. Stable across calls.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_from(value: Value, line: usize) -> LogRecord {
        let raw = value.to_string();
        let Value::Object(fields) = value else {
            panic!("test record must be an object");
        };
        LogRecord::new(raw, fields, line)
    }

    #[test]
    fn value_to_string_unquotes_strings() {
        assert_eq!(value_to_string(&json!("GET")), "GET");
    }

    #[test]
    fn value_to_string_keeps_integer_text() {
        assert_eq!(value_to_string(&json!(503)), "503");
    }

    #[test]
    fn value_to_string_keeps_float_text() {
        assert_eq!(value_to_string(&json!(1.5)), "1.5");
    }

    #[test]
    fn value_to_string_renders_null_and_bool() {
        assert_eq!(value_to_string(&Value::Null), "null");
        assert_eq!(value_to_string(&json!(true)), "true");
    }

    #[test]
    fn value_to_string_renders_nested_as_compact_json() {
        assert_eq!(value_to_string(&json!({"a": [1, 2]})), r#"{"a":[1,2]}"#);
    }

    #[test]
    fn field_string_returns_none_for_missing_field() {
        let record = record_from(json!({"method": "GET"}), 1);
        assert_eq!(record.field_string("path"), None);
        assert_eq!(record.field_string("method"), Some("GET".to_string()));
    }

    #[test]
    fn from_raw_has_no_fields() {
        let record = LogRecord::from_raw("plain text", 7);
        assert!(record.fields().is_empty());
        assert_eq!(record.line_number(), 7);
        assert_eq!(record.raw_text(), "plain text");
    }
}
