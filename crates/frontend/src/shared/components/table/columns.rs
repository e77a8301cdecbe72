//! Column descriptors derived from data.
//!
//! ```rust,ignore
//! let options = ColumnOptions::new()
//!     .display(["firstName", "lastName", "classroom"])
//!     .header("classroom", "Class")
//!     .sortable(["firstName", "lastName"])
//!     .with_actions(move |r| view! { <RowActions id=text_field(r, "id") /> }.into_any());
//! let columns = generate_columns(&records, &options);
//! ```

use crate::shared::record::{value_to_text, Record};
use leptos::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Accessor of the synthetic actions column.
pub const ACTIONS_ACCESSOR: &str = "actions";

/// Rendered for absent or `null` fields.
pub const MISSING_VALUE: &str = "N/A";

/// Identity/internal fields never shown when columns are inferred.
pub const EXCLUDED_FIELDS: &[&str] = &["id", "_id", "__v", "createdAt", "updatedAt", "password"];

pub type TextRenderer = Arc<dyn Fn(&Record) -> String + Send + Sync>;
pub type ViewRenderer = Arc<dyn Fn(&Record) -> AnyView + Send + Sync>;

#[derive(Clone)]
pub enum CellRenderer {
    Text(TextRenderer),
    View(ViewRenderer),
}

impl CellRenderer {
    pub fn text(f: impl Fn(&Record) -> String + Send + Sync + 'static) -> Self {
        Self::Text(Arc::new(f))
    }

    pub fn view(f: impl Fn(&Record) -> AnyView + Send + Sync + 'static) -> Self {
        Self::View(Arc::new(f))
    }

    pub fn render(&self, record: &Record) -> AnyView {
        match self {
            Self::Text(f) => {
                let text = f(record);
                view! { <span>{text}</span> }.into_any()
            }
            Self::View(f) => f(record),
        }
    }

    /// Text output, `None` for view renderers.
    pub fn render_text(&self, record: &Record) -> Option<String> {
        match self {
            Self::Text(f) => Some(f(record)),
            Self::View(_) => None,
        }
    }
}

#[derive(Clone)]
pub struct ColumnDescriptor {
    pub header: String,
    pub accessor: String,
    pub sortable: bool,
    pub cell: CellRenderer,
}

impl std::fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .field("sortable", &self.sortable)
            .finish()
    }
}

#[derive(Clone, Default)]
pub struct ColumnOptions {
    pub display_fields: Option<Vec<String>>,
    pub hidden_fields: Vec<String>,
    pub custom_headers: HashMap<String, String>,
    pub custom_render: HashMap<String, CellRenderer>,
    pub sortable_fields: Vec<String>,
    /// `Some(None)` appends the actions column with a placeholder cell.
    pub actions: Option<Option<ViewRenderer>>,
}

impl ColumnOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.display_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn hide<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hidden_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn header(mut self, field: impl Into<String>, header: impl Into<String>) -> Self {
        self.custom_headers.insert(field.into(), header.into());
        self
    }

    pub fn render_text(
        mut self,
        field: impl Into<String>,
        f: impl Fn(&Record) -> String + Send + Sync + 'static,
    ) -> Self {
        self.custom_render.insert(field.into(), CellRenderer::text(f));
        self
    }

    pub fn render_view(
        mut self,
        field: impl Into<String>,
        f: impl Fn(&Record) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        self.custom_render.insert(field.into(), CellRenderer::view(f));
        self
    }

    pub fn sortable<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sortable_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn with_actions(mut self, f: impl Fn(&Record) -> AnyView + Send + Sync + 'static) -> Self {
        self.actions = Some(Some(Arc::new(f)));
        self
    }

    pub fn with_actions_placeholder(mut self) -> Self {
        self.actions = Some(None);
        self
    }
}

/// `classroomId` -> `Classroom Id`, `dateOfBirth` -> `Date Of Birth`.
pub fn humanize_field_name(field: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for ch in field.chars() {
        if ch == '_' || ch == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if ch.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Default cell text for `field` of `record`.
pub fn default_cell_text(record: &Record, field: &str) -> String {
    match record.get(field) {
        None | Some(Value::Null) => MISSING_VALUE.to_string(),
        Some(Value::Object(obj)) if field.to_lowercase().contains("classroom") => obj
            .get("name")
            .filter(|v| !v.is_null())
            .map(value_to_text)
            .unwrap_or_else(|| MISSING_VALUE.to_string()),
        Some(value) => value_to_text(value),
    }
}

/// Builds the column list for `records`.
///
/// The field set comes from `display_fields` when given, otherwise from the
/// keys of the first record. Returns nothing for an empty collection.
pub fn generate_columns(records: &[Record], options: &ColumnOptions) -> Vec<ColumnDescriptor> {
    let Some(first) = records.first() else {
        return Vec::new();
    };

    let fields: Vec<String> = match &options.display_fields {
        Some(fields) => fields.clone(),
        None => first
            .keys()
            .filter(|k| !EXCLUDED_FIELDS.contains(&k.as_str()))
            .filter(|k| !options.hidden_fields.contains(k))
            .cloned()
            .collect(),
    };

    let mut columns: Vec<ColumnDescriptor> = fields
        .into_iter()
        .map(|field| {
            let header = options
                .custom_headers
                .get(&field)
                .cloned()
                .unwrap_or_else(|| humanize_field_name(&field));
            let cell = options.custom_render.get(&field).cloned().unwrap_or_else(|| {
                let accessor = field.clone();
                CellRenderer::text(move |r| default_cell_text(r, &accessor))
            });
            ColumnDescriptor {
                header,
                sortable: options.sortable_fields.contains(&field),
                accessor: field,
                cell,
            }
        })
        .collect();

    if let Some(actions) = &options.actions {
        let cell = match actions {
            Some(render) => CellRenderer::View(render.clone()),
            None => CellRenderer::text(|_| "-".to_string()),
        };
        columns.push(ColumnDescriptor {
            header: "Actions".to_string(),
            accessor: ACTIONS_ACCESSOR.to_string(),
            sortable: false,
            cell,
        });
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<Record> {
        vec![
            json!({
                "id": "s1",
                "firstName": "Amy",
                "lastName": "Pond",
                "classroom": {"id": "c1", "name": "5B"},
                "address": {"city": "Leadworth"},
                "createdAt": "2024-01-01"
            }),
            json!({"id": "s2", "firstName": "Bob", "classroom": null}),
        ]
        .into_iter()
        .map(|v| v.as_object().cloned().unwrap())
        .collect()
    }

    #[test]
    fn test_empty_collection_yields_no_columns() {
        let options = ColumnOptions::new().display(["firstName"]).with_actions_placeholder();
        assert!(generate_columns(&[], &options).is_empty());
    }

    #[test]
    fn test_display_fields_fix_count_and_order() {
        let options = ColumnOptions::new()
            .display(["lastName", "firstName", "missing"])
            .with_actions_placeholder();
        let columns = generate_columns(&records(), &options);

        let accessors: Vec<&str> = columns.iter().map(|c| c.accessor.as_str()).collect();
        assert_eq!(accessors, ["lastName", "firstName", "missing", ACTIONS_ACCESSOR]);
        assert!(columns.iter().all(|c| !c.header.is_empty()));
        assert_eq!(columns[3].header, "Actions");
        assert!(!columns[3].sortable);
    }

    #[test]
    fn test_inferred_fields_skip_identity_and_hidden() {
        let options = ColumnOptions::new().hide(["address"]);
        let columns = generate_columns(&records(), &options);
        let accessors: Vec<&str> = columns.iter().map(|c| c.accessor.as_str()).collect();
        assert_eq!(accessors, ["firstName", "lastName", "classroom"]);
    }

    #[test]
    fn test_headers_humanized_unless_overridden() {
        assert_eq!(humanize_field_name("classroomId"), "Classroom Id");
        assert_eq!(humanize_field_name("dateOfBirth"), "Date Of Birth");
        assert_eq!(humanize_field_name("email"), "Email");

        let options = ColumnOptions::new()
            .display(["firstName", "classroomId"])
            .header("classroomId", "Class");
        let columns = generate_columns(&records(), &options);
        assert_eq!(columns[0].header, "First Name");
        assert_eq!(columns[1].header, "Class");
    }

    #[test]
    fn test_default_renderer_rules() {
        let rows = records();
        let columns = generate_columns(
            &rows,
            &ColumnOptions::new().display(["classroom", "address", "lastName"]),
        );

        let text = |col: usize, row: usize| columns[col].cell.render_text(&rows[row]).unwrap();
        assert_eq!(text(0, 0), "5B");
        assert_eq!(text(0, 1), MISSING_VALUE);
        assert_eq!(text(1, 0), r#"{"city":"Leadworth"}"#);
        assert_eq!(text(2, 1), MISSING_VALUE);
    }

    #[test]
    fn test_custom_renderer_and_sortability() {
        let options = ColumnOptions::new()
            .display(["firstName", "lastName"])
            .render_text("firstName", |r| format!("<{}>", default_cell_text(r, "firstName")))
            .sortable(["lastName"]);
        let rows = records();
        let columns = generate_columns(&rows, &options);

        assert_eq!(columns[0].cell.render_text(&rows[1]).as_deref(), Some("<Bob>"));
        assert!(!columns[0].sortable);
        assert!(columns[1].sortable);
    }
}
