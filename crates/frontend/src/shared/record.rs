//! Shape-agnostic row representation used by tables and forms.
//!
//! Typed entities from `contracts` are converted to [`Record`] at the screen
//! layer, so the table and form code never needs to know a concrete schema.

use serde::Serialize;
use serde_json::{Map, Value};

/// One row of domain data: field name -> JSON value.
pub type Record = Map<String, Value>;

/// Converts a serializable entity into a [`Record`].
///
/// Anything that does not serialize to a JSON object yields an empty record.
pub fn to_record<T: Serialize>(value: &T) -> Record {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        Ok(_) => Record::new(),
        Err(e) => {
            log::warn!("record conversion failed: {}", e);
            Record::new()
        }
    }
}

pub fn to_records<T: Serialize>(items: &[T]) -> Vec<Record> {
    items.iter().map(to_record).collect()
}

/// Plain text form of a value: strings as-is, `null` as empty,
/// numbers/bools via `to_string`, arrays and objects as JSON.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Text of a single field, empty when the field is absent.
pub fn text_field(record: &Record, field: &str) -> String {
    record.get(field).map(value_to_text).unwrap_or_default()
}

/// `Some(text)` for a present, non-blank field.
pub fn optional_text(record: &Record, field: &str) -> Option<String> {
    let text = text_field(record, field);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Field value is absent, `null`, or a blank string.
pub fn is_blank(record: &Record, field: &str) -> bool {
    match record.get(field) {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Row {
        first_name: String,
        age: u32,
    }

    #[test]
    fn test_typed_rows_become_records_in_field_order() {
        let record = to_record(&Row {
            first_name: "Amy".into(),
            age: 9,
        });
        let keys: Vec<&String> = record.keys().collect();
        assert_eq!(keys, ["firstName", "age"]);
        assert_eq!(record["age"], json!(9));
    }

    #[test]
    fn test_value_text_forms() {
        assert_eq!(value_to_text(&json!(null)), "");
        assert_eq!(value_to_text(&json!("x")), "x");
        assert_eq!(value_to_text(&json!(3.5)), "3.5");
        assert_eq!(value_to_text(&json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn test_blank_detection() {
        let record = json!({"a": "  ", "b": null, "c": 0, "d": "x"});
        let record = record.as_object().unwrap();
        assert!(is_blank(record, "a"));
        assert!(is_blank(record, "b"));
        assert!(!is_blank(record, "c"));
        assert!(!is_blank(record, "d"));
        assert!(is_blank(record, "missing"));
        assert_eq!(optional_text(record, "d").as_deref(), Some("x"));
        assert_eq!(optional_text(record, "a"), None);
    }
}
