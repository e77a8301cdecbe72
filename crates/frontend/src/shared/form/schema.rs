use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

/// Field name -> message. Produced by validators, rendered under each field.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Date,
    Number,
    Tel,
    Password,
    Select,
    Textarea,
}

impl FieldType {
    /// `type` attribute for `<input>` based controls
    pub fn input_type(self) -> &'static str {
        match self {
            FieldType::Text | FieldType::Select | FieldType::Textarea => "text",
            FieldType::Email => "email",
            FieldType::Date => "date",
            FieldType::Number => "number",
            FieldType::Tel => "tel",
            FieldType::Password => "password",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// One form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub field_type: FieldType,
    pub options: Vec<SelectOption>,
    pub required: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            field_type,
            options: Vec::new(),
            required: false,
        }
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldType::Text)
    }

    pub fn email(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldType::Email)
    }

    pub fn date(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldType::Date)
    }

    pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldType::Number)
    }

    pub fn tel(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldType::Tel)
    }

    pub fn password(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldType::Password)
    }

    pub fn textarea(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldType::Textarea)
    }

    pub fn select(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        let mut field = Self::new(name, label, FieldType::Select);
        field.options = options;
        field
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Converts raw control input into the draft value.
    ///
    /// Number fields store numbers (or `null` when cleared); everything else
    /// stores the text as entered.
    pub fn coerce(&self, raw: &str) -> Value {
        match self.field_type {
            FieldType::Number => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Value::Null;
                }
                if let Ok(i) = trimmed.parse::<i64>() {
                    return Value::from(i);
                }
                match trimmed.parse::<f64>() {
                    Ok(f) => serde_json::Number::from_f64(f)
                        .map(Value::Number)
                        .unwrap_or_else(|| Value::String(raw.to_string())),
                    Err(_) => Value::String(raw.to_string()),
                }
            }
            _ => Value::String(raw.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("field name '{0}' is used more than once")]
    DuplicateName(String),

    #[error("select field '{0}' has no options")]
    EmptyOptions(String),
}

/// Checks the descriptor-list invariants: unique names, non-empty select options.
pub fn validate_schema(fields: &[FieldDescriptor]) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateName(field.name.clone()));
        }
        if field.field_type == FieldType::Select && field.options.is_empty() {
            return Err(SchemaError::EmptyOptions(field.name.clone()));
        }
    }
    Ok(())
}

/// Attaches a server rejection to the field whose label it mentions. The
/// longest matching label wins; empty when no field is named.
pub fn server_field_errors(detail: &str, fields: &[FieldDescriptor]) -> FieldErrors {
    let lowered = detail.to_lowercase();
    let mut errors = FieldErrors::new();
    if let Some(field) = fields
        .iter()
        .filter(|f| !f.label.is_empty() && lowered.contains(&f.label.to_lowercase()))
        .max_by_key(|f| f.label.len())
    {
        errors.insert(field.name.clone(), detail.trim().to_string());
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_rejects_duplicates_and_empty_selects() {
        let ok = vec![
            FieldDescriptor::text("name", "Name").required(),
            FieldDescriptor::select("grade", "Grade", vec![SelectOption::new("1", "Grade 1")]),
        ];
        assert_eq!(validate_schema(&ok), Ok(()));

        let dup = vec![FieldDescriptor::text("name", "Name"), FieldDescriptor::email("name", "Email")];
        assert_eq!(
            validate_schema(&dup),
            Err(SchemaError::DuplicateName("name".into()))
        );

        let empty = vec![FieldDescriptor::select("grade", "Grade", vec![])];
        assert_eq!(
            validate_schema(&empty),
            Err(SchemaError::EmptyOptions("grade".into()))
        );
    }

    #[test]
    fn test_number_fields_store_numbers() {
        let capacity = FieldDescriptor::number("capacity", "Capacity");
        assert_eq!(capacity.coerce("30"), json!(30));
        assert_eq!(capacity.coerce("2.5"), json!(2.5));
        assert_eq!(capacity.coerce(""), Value::Null);
        assert_eq!(capacity.coerce("abc"), json!("abc"));

        let name = FieldDescriptor::text("name", "Name");
        assert_eq!(name.coerce("30"), json!("30"));
    }

    #[test]
    fn test_server_errors_land_on_the_named_field() {
        let fields = vec![
            FieldDescriptor::text("firstName", "First Name").required(),
            FieldDescriptor::text("lastName", "Last Name").required(),
            FieldDescriptor::email("email", "Email").required(),
        ];
        let errors = server_field_errors("A student with this email already exists", &fields);
        assert_eq!(
            errors.get("email").map(String::as_str),
            Some("A student with this email already exists")
        );
        assert_eq!(errors.len(), 1);

        assert!(server_field_errors("Database unavailable", &fields).is_empty());
    }

    #[test]
    fn test_server_errors_prefer_the_longest_label() {
        let fields = vec![
            FieldDescriptor::text("name", "Name"),
            FieldDescriptor::text("lastName", "Last Name"),
        ];
        let errors = server_field_errors("last name contains digits", &fields);
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["lastName"]);
    }
}
